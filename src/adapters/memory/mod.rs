//! In-process implementation of every storage port.
//!
//! This is a real alternate backend, not a test double: deployments
//! without a database run on it, and the integration tests drive the
//! full service stack through it. It mirrors the relational backend's
//! observable behavior — orderings, upsert keys, cascade on store
//! deletion — over plain vectors behind one lock.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::catalog::{ProductGroup, Supplier};
use crate::domain::foundation::{
    DomainError, GoalId, GroupId, PortionedEntryId, PortionedProductId, Principal, RevenueId,
    StoreId, SupplierId, TransactionId, UserId,
};
use crate::domain::ledger::{DailyRevenue, Month, StoreGoal, Transaction, TransactionView};
use crate::domain::portioning::{
    PortionedEntry, PortionedEntryView, PortionedProduct, PortionedProductView,
};
use crate::domain::store::Store;
use crate::domain::user::User;
use crate::ports::{
    AccessDecision, AccessRegistry, GoalRepository, GroupRepository, PortionedEntryRepository,
    PortionedProductRepository, RevenueRepository, StoreAccessGate, StoreRepository,
    SupplierRepository, TransactionRepository, UserRepository,
};

#[derive(Default)]
struct State {
    users: Vec<User>,
    stores: Vec<Store>,
    grants: Vec<(UserId, StoreId)>,
    transactions: Vec<Transaction>,
    revenues: Vec<DailyRevenue>,
    goals: Vec<StoreGoal>,
    suppliers: Vec<Supplier>,
    groups: Vec<ProductGroup>,
    products: Vec<PortionedProduct>,
    entries: Vec<PortionedEntry>,
}

/// Shared handle to the in-memory state. Cloning shares the state.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    state: Arc<RwLock<State>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundles this backend's port implementations for service wiring.
    pub fn ports(&self) -> crate::application::ServicePorts {
        crate::application::ServicePorts {
            gate: Arc::new(self.clone()),
            users: Arc::new(self.clone()),
            stores: Arc::new(self.clone()),
            registry: Arc::new(self.clone()),
            transactions: Arc::new(self.clone()),
            revenues: Arc::new(self.clone()),
            goals: Arc::new(self.clone()),
            suppliers: Arc::new(self.clone()),
            groups: Arc::new(self.clone()),
            portioned_products: Arc::new(self.clone()),
            portioned_entries: Arc::new(self.clone()),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.state.read().expect("memory backend lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, State> {
        self.state.write().expect("memory backend lock poisoned")
    }
}

/// Newest-insertion-first snapshot of the rows matching `keep`.
fn newest_first<T: Clone>(rows: &[T], keep: impl Fn(&T) -> bool) -> Vec<T> {
    rows.iter().rev().filter(|&r| keep(r)).cloned().collect()
}

// ════════════════════════════════════════════════════════════════════════════
// Identity and stores
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl UserRepository for MemoryBackend {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let mut state = self.write();
        if state.users.iter().any(|u| u.username == user.username) {
            return Err(DomainError::validation(
                "username",
                "Username already taken",
            ));
        }
        state.users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.read().users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .read()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(newest_first(&self.read().users, |_| true))
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let mut state = self.write();
        match state.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(DomainError::record_not_found("User")),
        }
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let mut state = self.write();
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        if state.users.len() == before {
            return Err(DomainError::record_not_found("User"));
        }
        state.grants.retain(|(user_id, _)| *user_id != id);
        Ok(())
    }

    async fn count_masters(&self) -> Result<u32, DomainError> {
        Ok(self
            .read()
            .users
            .iter()
            .filter(|u| u.role.is_master())
            .count() as u32)
    }
}

#[async_trait]
impl StoreRepository for MemoryBackend {
    async fn create(&self, store: &Store) -> Result<(), DomainError> {
        self.write().stores.push(store.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: StoreId) -> Result<Option<Store>, DomainError> {
        Ok(self.read().stores.iter().find(|s| s.id == id).cloned())
    }

    async fn list_visible(&self, principal: &Principal) -> Result<Vec<Store>, DomainError> {
        let state = self.read();
        let visible = newest_first(&state.stores, |s| {
            principal.is_master()
                || s.owner_id == principal.id
                || state
                    .grants
                    .iter()
                    .any(|(u, st)| *u == principal.id && *st == s.id)
        });
        Ok(visible)
    }

    async fn update(&self, store: &Store) -> Result<(), DomainError> {
        let mut state = self.write();
        match state.stores.iter_mut().find(|s| s.id == store.id) {
            Some(existing) => {
                *existing = store.clone();
                Ok(())
            }
            None => Err(DomainError::record_not_found("Store")),
        }
    }

    async fn delete(&self, id: StoreId) -> Result<(), DomainError> {
        let mut state = self.write();
        let before = state.stores.len();
        state.stores.retain(|s| s.id != id);
        if state.stores.len() == before {
            return Err(DomainError::record_not_found("Store"));
        }
        // Cascade: every store-scoped child kind plus the grants.
        state.grants.retain(|(_, store_id)| *store_id != id);
        state.transactions.retain(|t| t.store_id != id);
        state.revenues.retain(|r| r.store_id != id);
        state.goals.retain(|g| g.store_id != id);
        state.suppliers.retain(|s| s.store_id != id);
        state.groups.retain(|g| g.store_id != id);
        state.products.retain(|p| p.store_id != id);
        state.entries.retain(|e| e.store_id != id);
        Ok(())
    }
}

#[async_trait]
impl AccessRegistry for MemoryBackend {
    async fn list_all(&self) -> Result<Vec<(UserId, StoreId)>, DomainError> {
        Ok(self.read().grants.clone())
    }

    async fn contains(&self, user_id: UserId, store_id: StoreId) -> Result<bool, DomainError> {
        Ok(self
            .read()
            .grants
            .iter()
            .any(|(u, s)| *u == user_id && *s == store_id))
    }

    async fn insert(&self, user_id: UserId, store_id: StoreId) -> Result<(), DomainError> {
        let mut state = self.write();
        if !state
            .grants
            .iter()
            .any(|(u, s)| *u == user_id && *s == store_id)
        {
            state.grants.push((user_id, store_id));
        }
        Ok(())
    }

    async fn remove(&self, user_id: UserId, store_id: StoreId) -> Result<(), DomainError> {
        self.write()
            .grants
            .retain(|(u, s)| !(*u == user_id && *s == store_id));
        Ok(())
    }
}

#[async_trait]
impl StoreAccessGate for MemoryBackend {
    async fn allows(
        &self,
        principal: &Principal,
        store_id: StoreId,
    ) -> Result<AccessDecision, DomainError> {
        if principal.is_master() {
            return Ok(AccessDecision::Granted);
        }
        let state = self.read();
        let owned = state
            .stores
            .iter()
            .any(|s| s.id == store_id && s.owner_id == principal.id);
        let granted = state
            .grants
            .iter()
            .any(|(u, s)| *u == principal.id && *s == store_id);
        if owned || granted {
            Ok(AccessDecision::Granted)
        } else {
            Ok(AccessDecision::Denied)
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Ledger kinds
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl TransactionRepository for MemoryBackend {
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<TransactionView>, DomainError> {
        let state = self.read();
        let mut rows = newest_first(&state.transactions, |t| t.store_id == store_id);
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows
            .into_iter()
            .map(|record| {
                let group_name = record.group_id.and_then(|gid| {
                    state
                        .groups
                        .iter()
                        .find(|g| g.id == gid)
                        .map(|g| g.name.clone())
                });
                let supplier_name = record.supplier_id.and_then(|sid| {
                    state
                        .suppliers
                        .iter()
                        .find(|s| s.id == sid)
                        .map(|s| s.name.clone())
                });
                TransactionView {
                    record,
                    group_name,
                    supplier_name,
                }
            })
            .collect())
    }

    async fn insert(&self, transaction: &Transaction) -> Result<(), DomainError> {
        self.write().transactions.push(transaction.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, DomainError> {
        Ok(self
            .read()
            .transactions
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn update(&self, transaction: &Transaction) -> Result<(), DomainError> {
        let mut state = self.write();
        match state
            .transactions
            .iter_mut()
            .find(|t| t.id == transaction.id)
        {
            Some(existing) => {
                *existing = transaction.clone();
                Ok(())
            }
            None => Err(DomainError::record_not_found("Transaction")),
        }
    }

    async fn delete(&self, id: TransactionId) -> Result<(), DomainError> {
        let mut state = self.write();
        let before = state.transactions.len();
        state.transactions.retain(|t| t.id != id);
        if state.transactions.len() == before {
            return Err(DomainError::record_not_found("Transaction"));
        }
        Ok(())
    }
}

#[async_trait]
impl RevenueRepository for MemoryBackend {
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<DailyRevenue>, DomainError> {
        let mut rows = newest_first(&self.read().revenues, |r| r.store_id == store_id);
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn upsert(&self, revenue: &DailyRevenue) -> Result<DailyRevenue, DomainError> {
        let mut state = self.write();
        match state
            .revenues
            .iter_mut()
            .find(|r| r.store_id == revenue.store_id && r.date == revenue.date)
        {
            Some(existing) => {
                existing.salon = revenue.salon;
                existing.delivery = revenue.delivery;
                existing.service_charge = revenue.service_charge;
                existing.total = revenue.total;
                Ok(existing.clone())
            }
            None => {
                state.revenues.push(revenue.clone());
                Ok(revenue.clone())
            }
        }
    }

    async fn find_by_id(&self, id: RevenueId) -> Result<Option<DailyRevenue>, DomainError> {
        Ok(self.read().revenues.iter().find(|r| r.id == id).cloned())
    }

    async fn delete(&self, id: RevenueId) -> Result<(), DomainError> {
        let mut state = self.write();
        let before = state.revenues.len();
        state.revenues.retain(|r| r.id != id);
        if state.revenues.len() == before {
            return Err(DomainError::record_not_found("Daily revenue"));
        }
        Ok(())
    }
}

#[async_trait]
impl GoalRepository for MemoryBackend {
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<StoreGoal>, DomainError> {
        let mut rows = newest_first(&self.read().goals, |g| g.store_id == store_id);
        rows.sort_by(|a, b| b.month.as_str().cmp(a.month.as_str()));
        Ok(rows)
    }

    async fn upsert(&self, goal: &StoreGoal) -> Result<StoreGoal, DomainError> {
        let mut state = self.write();
        match state
            .goals
            .iter_mut()
            .find(|g| g.store_id == goal.store_id && g.month == goal.month)
        {
            Some(existing) => {
                existing.revenue_target = goal.revenue_target;
                existing.cmc_target = goal.cmc_target;
                existing.avg_ticket = goal.avg_ticket;
                Ok(existing.clone())
            }
            None => {
                state.goals.push(goal.clone());
                Ok(goal.clone())
            }
        }
    }

    async fn find_by_id(&self, id: GoalId) -> Result<Option<StoreGoal>, DomainError> {
        Ok(self.read().goals.iter().find(|g| g.id == id).cloned())
    }

    async fn find_by_month(
        &self,
        store_id: StoreId,
        month: &Month,
    ) -> Result<Option<StoreGoal>, DomainError> {
        Ok(self
            .read()
            .goals
            .iter()
            .find(|g| g.store_id == store_id && &g.month == month)
            .cloned())
    }

    async fn delete(&self, id: GoalId) -> Result<(), DomainError> {
        let mut state = self.write();
        let before = state.goals.len();
        state.goals.retain(|g| g.id != id);
        if state.goals.len() == before {
            return Err(DomainError::record_not_found("Goal"));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Catalog kinds
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl SupplierRepository for MemoryBackend {
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<Supplier>, DomainError> {
        let mut rows = newest_first(&self.read().suppliers, |s| s.store_id == store_id);
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn insert(&self, supplier: &Supplier) -> Result<(), DomainError> {
        self.write().suppliers.push(supplier.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, DomainError> {
        Ok(self.read().suppliers.iter().find(|s| s.id == id).cloned())
    }

    async fn update(&self, supplier: &Supplier) -> Result<(), DomainError> {
        let mut state = self.write();
        match state.suppliers.iter_mut().find(|s| s.id == supplier.id) {
            Some(existing) => {
                *existing = supplier.clone();
                Ok(())
            }
            None => Err(DomainError::record_not_found("Supplier")),
        }
    }

    async fn delete(&self, id: SupplierId) -> Result<(), DomainError> {
        let mut state = self.write();
        let before = state.suppliers.len();
        state.suppliers.retain(|s| s.id != id);
        if state.suppliers.len() == before {
            return Err(DomainError::record_not_found("Supplier"));
        }
        Ok(())
    }
}

#[async_trait]
impl GroupRepository for MemoryBackend {
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<ProductGroup>, DomainError> {
        let mut rows = newest_first(&self.read().groups, |g| g.store_id == store_id);
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn insert(&self, group: &ProductGroup) -> Result<(), DomainError> {
        self.write().groups.push(group.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: GroupId) -> Result<Option<ProductGroup>, DomainError> {
        Ok(self.read().groups.iter().find(|g| g.id == id).cloned())
    }

    async fn update(&self, group: &ProductGroup) -> Result<(), DomainError> {
        let mut state = self.write();
        match state.groups.iter_mut().find(|g| g.id == group.id) {
            Some(existing) => {
                *existing = group.clone();
                Ok(())
            }
            None => Err(DomainError::record_not_found("Product group")),
        }
    }

    async fn delete(&self, id: GroupId) -> Result<(), DomainError> {
        let mut state = self.write();
        let before = state.groups.len();
        state.groups.retain(|g| g.id != id);
        if state.groups.len() == before {
            return Err(DomainError::record_not_found("Product group"));
        }
        // Mirrors the relational ON DELETE SET NULL.
        for t in state.transactions.iter_mut() {
            if t.group_id == Some(id) {
                t.group_id = None;
            }
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Portioning kinds
// ════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl PortionedProductRepository for MemoryBackend {
    async fn list_by_store(
        &self,
        store_id: StoreId,
    ) -> Result<Vec<PortionedProductView>, DomainError> {
        let state = self.read();
        Ok(newest_first(&state.products, |p| p.store_id == store_id)
            .into_iter()
            .map(|record| {
                let supplier_name = record.supplier_id.and_then(|sid| {
                    state
                        .suppliers
                        .iter()
                        .find(|s| s.id == sid)
                        .map(|s| s.name.clone())
                });
                PortionedProductView {
                    record,
                    supplier_name,
                }
            })
            .collect())
    }

    async fn insert(&self, product: &PortionedProduct) -> Result<(), DomainError> {
        self.write().products.push(product.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: PortionedProductId,
    ) -> Result<Option<PortionedProduct>, DomainError> {
        Ok(self.read().products.iter().find(|p| p.id == id).cloned())
    }

    async fn delete(&self, id: PortionedProductId) -> Result<(), DomainError> {
        let mut state = self.write();
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Err(DomainError::record_not_found("Portioned product"));
        }
        // Mirrors the relational ON DELETE CASCADE.
        state.entries.retain(|e| e.portioned_product_id != id);
        Ok(())
    }
}

#[async_trait]
impl PortionedEntryRepository for MemoryBackend {
    async fn list_by_store(
        &self,
        store_id: StoreId,
    ) -> Result<Vec<PortionedEntryView>, DomainError> {
        let state = self.read();
        let mut rows = newest_first(&state.entries, |e| e.store_id == store_id);
        rows.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));
        Ok(rows
            .into_iter()
            .map(|record| {
                let supplier_name = record.supplier_id.and_then(|sid| {
                    state
                        .suppliers
                        .iter()
                        .find(|s| s.id == sid)
                        .map(|s| s.name.clone())
                });
                PortionedEntryView {
                    record,
                    supplier_name,
                }
            })
            .collect())
    }

    async fn insert(&self, entry: &PortionedEntry) -> Result<(), DomainError> {
        self.write().entries.push(entry.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: PortionedEntryId,
    ) -> Result<Option<PortionedEntry>, DomainError> {
        Ok(self.read().entries.iter().find(|e| e.id == id).cloned())
    }

    async fn delete(&self, id: PortionedEntryId) -> Result<(), DomainError> {
        let mut state = self.write();
        let before = state.entries.len();
        state.entries.retain(|e| e.id != id);
        if state.entries.len() == before {
            return Err(DomainError::record_not_found("Portioned entry"));
        }
        Ok(())
    }
}
