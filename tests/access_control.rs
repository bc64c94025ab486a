//! End-to-end access-control tests over the in-memory backend.
//!
//! These drive the real service stack (identity, stores, grants,
//! ledger, dashboard) and verify the partitioning invariant: a
//! principal reaches exactly the stores they own, were granted, or —
//! as master — everything.

use std::sync::Arc;

use cmc_control::adapters::auth::{Argon2PasswordHasher, JwtTokenService, DEFAULT_TOKEN_TTL_DAYS};
use cmc_control::adapters::http::AppState;
use cmc_control::adapters::memory::MemoryBackend;
use cmc_control::application::{RevenueAmounts, ToggleAction};
use cmc_control::domain::foundation::{ErrorCode, Principal, Role};
use cmc_control::domain::ledger::Month;
use cmc_control::domain::user::User;
use cmc_control::ports::{PasswordHasher, TokenService};
use secrecy::SecretString;

fn test_state() -> AppState {
    let backend = MemoryBackend::new();
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(
        &SecretString::new("integration-test-secret-32-bytes-min!".to_string()),
        DEFAULT_TOKEN_TTL_DAYS,
    ));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    AppState::new(backend.ports(), tokens, hasher)
}

fn principal_of(user: &User) -> Principal {
    Principal::new(user.id, user.username.clone(), user.role)
}

async fn seeded_master(state: &AppState) -> Principal {
    let master = state
        .identity
        .bootstrap_master("thiago", "271205", "Thiago")
        .await
        .unwrap()
        .unwrap();
    principal_of(&master)
}

#[tokio::test]
async fn paris6_grant_revoke_scenario() {
    let state = test_state();
    let master = seeded_master(&state).await;

    // Master creates the store and registers ana.
    let store = state.stores.create(&master, "Paris6").await.unwrap();
    let ana_user = state
        .identity
        .register("ana", "123456", "Ana")
        .await
        .unwrap();
    let ana = principal_of(&ana_user);

    // Before any grant, ana sees nothing and cannot read the store.
    assert!(state.stores.list(&ana).await.unwrap().is_empty());
    assert_eq!(
        state
            .revenues
            .list(&ana, store.id)
            .await
            .unwrap_err()
            .code,
        ErrorCode::Forbidden
    );

    // Master grants ana access.
    let outcome = state
        .access
        .toggle(&master, ana.id, store.id)
        .await
        .unwrap();
    assert_eq!(outcome.action, ToggleAction::Added);

    // Ana now sees Paris6 and can record a day's revenue.
    let visible = state.stores.list(&ana).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Paris6");

    let revenue = state
        .revenues
        .upsert(
            &ana,
            store.id,
            "2024-05-01".parse().unwrap(),
            RevenueAmounts {
                salon: 500.0,
                delivery: 200.0,
                service_charge: 70.0,
            },
        )
        .await
        .unwrap();
    assert_eq!(revenue.total, 770.0);

    // Master revokes the grant; ana is cut off immediately.
    let outcome = state
        .access
        .toggle(&master, ana.id, store.id)
        .await
        .unwrap();
    assert_eq!(outcome.action, ToggleAction::Removed);

    let err = state.revenues.list(&ana, store.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::Forbidden);
    assert!(state.stores.list(&ana).await.unwrap().is_empty());

    // The data itself is intact for the owner side.
    let rows = state.revenues.list(&master, store.id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total, 770.0);
}

#[tokio::test]
async fn master_sees_every_store_without_grants() {
    let state = test_state();
    let master = seeded_master(&state).await;

    let ana = principal_of(
        &state
            .identity
            .register("ana", "123456", "Ana")
            .await
            .unwrap(),
    );
    let store = state.stores.create(&ana, "Lyon2").await.unwrap();

    // No grant exists for the master, yet everything is visible.
    let all = state.stores.list(&master).await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(state.transactions.list(&master, store.id).await.is_ok());
}

#[tokio::test]
async fn store_deletion_cascades_and_then_denies() {
    let state = test_state();
    let master = seeded_master(&state).await;

    let ana = principal_of(
        &state
            .identity
            .register("ana", "123456", "Ana")
            .await
            .unwrap(),
    );
    let store = state.stores.create(&ana, "Paris6").await.unwrap();

    state
        .revenues
        .upsert(
            &ana,
            store.id,
            "2024-05-01".parse().unwrap(),
            RevenueAmounts {
                salon: 100.0,
                delivery: 0.0,
                service_charge: 0.0,
            },
        )
        .await
        .unwrap();
    state
        .goals
        .upsert(
            &ana,
            store.id,
            Month::parse("2024-05").unwrap(),
            cmc_control::application::GoalTargets {
                revenue_target: 1000.0,
                cmc_target: 30.0,
                avg_ticket: 80.0,
            },
        )
        .await
        .unwrap();

    state.stores.delete(&ana, store.id).await.unwrap();

    // The owner's gate relation died with the store: uniform Forbidden,
    // no orphaned rows behind it.
    assert_eq!(
        state
            .revenues
            .list(&ana, store.id)
            .await
            .unwrap_err()
            .code,
        ErrorCode::Forbidden
    );

    // The master still passes the gate and sees an empty collection.
    assert!(state.revenues.list(&master, store.id).await.unwrap().is_empty());
    assert!(state.goals.list(&master, store.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn dashboard_summary_over_granted_store() {
    let state = test_state();
    let master = seeded_master(&state).await;
    let store = state.stores.create(&master, "Paris6").await.unwrap();

    state
        .revenues
        .upsert(
            &master,
            store.id,
            "2024-05-01".parse().unwrap(),
            RevenueAmounts {
                salon: 700.0,
                delivery: 200.0,
                service_charge: 100.0,
            },
        )
        .await
        .unwrap();

    let group = state
        .groups
        .create(
            &master,
            store.id,
            cmc_control::domain::catalog::GroupDraft {
                name: "Proteins".to_string(),
                color: None,
                cmc_target: 30.0,
                icon: None,
            },
        )
        .await
        .unwrap();

    state
        .transactions
        .create(
            &master,
            store.id,
            cmc_control::domain::ledger::TransactionDraft {
                kind: cmc_control::domain::ledger::TransactionType::Purchase,
                description: "Beef".to_string(),
                amount: 300.0,
                date: "2024-05-02".parse().unwrap(),
                due_date: None,
                group_id: Some(group.id),
                supplier_id: None,
                invoice_number: None,
            },
        )
        .await
        .unwrap();

    let month = Month::parse("2024-05").unwrap();
    let summary = state
        .dashboard
        .monthly_summary(&master, store.id, &month)
        .await
        .unwrap();

    assert_eq!(summary.monthly_revenue, 1000.0);
    assert_eq!(summary.monthly_purchases, 300.0);
    assert_eq!(summary.cmc, 30.0);
}

#[tokio::test]
async fn role_matters_only_through_the_gate() {
    // A user role constructed with someone else's id still cannot pass
    // the gate for stores that id does not own.
    let state = test_state();
    let master = seeded_master(&state).await;
    let store = state.stores.create(&master, "Paris6").await.unwrap();

    let impostor = Principal::new(
        cmc_control::domain::foundation::UserId::new(),
        "thiago",
        Role::User,
    );
    assert_eq!(
        state
            .transactions
            .list(&impostor, store.id)
            .await
            .unwrap_err()
            .code,
        ErrorCode::Forbidden
    );
}
