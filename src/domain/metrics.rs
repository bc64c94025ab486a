//! Derived monthly metrics.
//!
//! Pure functions over already-authorized, already-fetched collections.
//! Nothing here touches the access gate or storage, and nothing is
//! cached — every dashboard read recomputes from the rows it is given.

use serde::Serialize;

use super::ledger::{DailyRevenue, Month, StoreGoal, Transaction, TransactionType};

/// One month of a store's health numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub monthly_revenue: f64,
    pub monthly_purchases: f64,
    /// Cost-of-merchandise-consumed ratio, in percent.
    pub cmc: f64,
    /// Progress toward the month's revenue target, clamped to 100.
    pub goal_progress: f64,
}

/// Sum of revenue totals falling inside the month.
pub fn monthly_revenue(month: &Month, revenues: &[DailyRevenue]) -> f64 {
    revenues
        .iter()
        .filter(|r| month.contains(r.date))
        .map(|r| r.total)
        .sum()
}

/// Sum of PURCHASE transaction amounts falling inside the month.
pub fn monthly_purchases(month: &Month, transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Purchase && month.contains(t.date))
        .map(|t| t.amount)
        .sum()
}

/// purchases / revenue as a percentage; 0 when there is no revenue.
pub fn cmc_ratio(purchases: f64, revenue: f64) -> f64 {
    if revenue > 0.0 {
        purchases / revenue * 100.0
    } else {
        0.0
    }
}

/// revenue / target as a percentage, clamped to 100; 0 when there is
/// no goal or the target is 0.
pub fn goal_progress(revenue: f64, goal: Option<&StoreGoal>) -> f64 {
    match goal {
        Some(g) if g.revenue_target > 0.0 => (revenue / g.revenue_target * 100.0).min(100.0),
        _ => 0.0,
    }
}

/// Computes the full summary for one month.
pub fn monthly_summary(
    month: &Month,
    revenues: &[DailyRevenue],
    transactions: &[Transaction],
    goal: Option<&StoreGoal>,
) -> MonthlySummary {
    let revenue = monthly_revenue(month, revenues);
    let purchases = monthly_purchases(month, transactions);
    MonthlySummary {
        monthly_revenue: revenue,
        monthly_purchases: purchases,
        cmc: cmc_ratio(purchases, revenue),
        goal_progress: goal_progress(revenue, goal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{GroupId, StoreId};
    use chrono::{NaiveDate, Utc};
    use proptest::prelude::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn revenue(date: &str, salon: f64, delivery: f64, service: f64) -> DailyRevenue {
        DailyRevenue::compose(StoreId::new(), day(date), salon, delivery, service, Utc::now())
            .unwrap()
    }

    fn purchase(date: &str, amount: f64) -> Transaction {
        transaction(date, amount, TransactionType::Purchase)
    }

    fn transaction(date: &str, amount: f64, kind: TransactionType) -> Transaction {
        Transaction {
            id: Default::default(),
            store_id: StoreId::new(),
            kind,
            description: "x".to_string(),
            amount,
            date: day(date),
            due_date: None,
            group_id: Some(GroupId::new()),
            supplier_id: None,
            invoice_number: None,
            created_at: Utc::now(),
        }
    }

    fn goal_for(month: &str, target: f64) -> StoreGoal {
        StoreGoal::compose(
            StoreId::new(),
            Month::parse(month).unwrap(),
            target,
            30.0,
            85.0,
            Utc::now(),
        )
    }

    #[test]
    fn cmc_thirty_percent() {
        assert_eq!(cmc_ratio(300.0, 1000.0), 30.0);
    }

    #[test]
    fn cmc_is_zero_without_revenue() {
        assert_eq!(cmc_ratio(300.0, 0.0), 0.0);
    }

    #[test]
    fn revenue_sums_only_target_month() {
        let month = Month::parse("2024-05").unwrap();
        let rows = vec![
            revenue("2024-05-01", 500.0, 200.0, 70.0),
            revenue("2024-05-15", 100.0, 0.0, 0.0),
            revenue("2024-06-01", 999.0, 0.0, 0.0),
        ];
        assert_eq!(monthly_revenue(&month, &rows), 870.0);
    }

    #[test]
    fn purchases_ignore_income_and_expense() {
        let month = Month::parse("2024-05").unwrap();
        let rows = vec![
            purchase("2024-05-02", 300.0),
            transaction("2024-05-03", 50.0, TransactionType::Expense),
            transaction("2024-05-04", 80.0, TransactionType::Income),
            purchase("2024-04-30", 999.0),
        ];
        assert_eq!(monthly_purchases(&month, &rows), 300.0);
    }

    #[test]
    fn goal_progress_clamps_at_hundred() {
        let goal = goal_for("2024-05", 1000.0);
        assert_eq!(goal_progress(2500.0, Some(&goal)), 100.0);
        assert_eq!(goal_progress(500.0, Some(&goal)), 50.0);
    }

    #[test]
    fn goal_progress_is_zero_without_goal_or_target() {
        assert_eq!(goal_progress(500.0, None), 0.0);
        let zero_target = goal_for("2024-05", 0.0);
        assert_eq!(goal_progress(500.0, Some(&zero_target)), 0.0);
    }

    #[test]
    fn summary_combines_all_four_numbers() {
        let month = Month::parse("2024-05").unwrap();
        let revenues = vec![revenue("2024-05-01", 700.0, 200.0, 100.0)];
        let transactions = vec![purchase("2024-05-02", 300.0)];
        let goal = goal_for("2024-05", 2000.0);

        let summary = monthly_summary(&month, &revenues, &transactions, Some(&goal));
        assert_eq!(summary.monthly_revenue, 1000.0);
        assert_eq!(summary.monthly_purchases, 300.0);
        assert_eq!(summary.cmc, 30.0);
        assert_eq!(summary.goal_progress, 50.0);
    }

    proptest! {
        #[test]
        fn cmc_never_divides_by_zero(purchases in 0.0f64..1e9, revenue in 0.0f64..1e9) {
            let ratio = cmc_ratio(purchases, revenue);
            prop_assert!(ratio.is_finite());
            prop_assert!(ratio >= 0.0);
        }

        #[test]
        fn goal_progress_stays_in_range(revenue in 0.0f64..1e9, target in 0.0f64..1e9) {
            let goal = goal_for("2024-05", target);
            let progress = goal_progress(revenue, Some(&goal));
            prop_assert!((0.0..=100.0).contains(&progress));
        }

        #[test]
        fn revenue_total_invariant_holds(
            salon in 0.0f64..1e6,
            delivery in 0.0f64..1e6,
            service in 0.0f64..1e6,
        ) {
            let r = DailyRevenue::compose(
                StoreId::new(),
                day("2024-05-01"),
                salon,
                delivery,
                service,
                Utc::now(),
            ).unwrap();
            prop_assert_eq!(r.total, salon + delivery + service);
        }
    }
}
