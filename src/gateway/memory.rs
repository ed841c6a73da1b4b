// In-Memory Gateway
// Local user store for demo mode and tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{GatewayError, UserGateway};
use crate::models::{UserDraft, UserId, UserRecord};

/// Gateway operation kinds, used for failure injection and call tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOp {
    GetUsers,
    GetUser,
    CreateUser,
    UpdateUser,
    DeleteUser,
}

#[derive(Debug, Default)]
struct Store {
    users: Vec<UserRecord>,
    next_id: u64,
    /// Remaining injected failures per operation
    failures: HashMap<GatewayOp, usize>,
    calls: Vec<GatewayOp>,
}

/// User store held in process memory
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    store: Mutex<Store>,
}

impl InMemoryGateway {
    /// Create a gateway holding `users` in the given order
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let next_id = users
            .iter()
            .filter_map(|u| match u.id {
                UserId::Number(n) => Some(n),
                UserId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            store: Mutex::new(Store {
                users,
                next_id,
                ..Store::default()
            }),
        }
    }

    /// Sample users for demo mode
    pub fn demo() -> Self {
        Self::with_users(vec![
            UserRecord::new(1u64, "Ann Lee", "https://i.pravatar.cc/150?img=1"),
            UserRecord::new(2u64, "Bo Chen", "https://i.pravatar.cc/150?img=2"),
            UserRecord::new(3u64, "Cyd Moreau", "https://i.pravatar.cc/150?img=3"),
            UserRecord::new(4u64, "Dara Okafor", "https://i.pravatar.cc/150?img=4"),
        ])
    }

    /// Make the next `times` calls of `op` fail
    pub fn fail_next(&self, op: GatewayOp, times: usize) {
        if let Ok(mut store) = self.store.lock() {
            *store.failures.entry(op).or_insert(0) += times;
        }
    }

    /// Current contents of the store
    pub fn snapshot(&self) -> Vec<UserRecord> {
        self.store
            .lock()
            .map(|store| store.users.clone())
            .unwrap_or_default()
    }

    /// Operations received so far, in call order
    pub fn calls(&self) -> Vec<GatewayOp> {
        self.store
            .lock()
            .map(|store| store.calls.clone())
            .unwrap_or_default()
    }

    /// Lock the store, record the call and consume an injected failure if any
    fn begin(&self, op: GatewayOp) -> Result<MutexGuard<'_, Store>, GatewayError> {
        let mut store = self
            .store
            .lock()
            .map_err(|_| GatewayError::Unavailable("store lock poisoned".into()))?;

        store.calls.push(op);

        if let Some(remaining) = store.failures.get_mut(&op) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(GatewayError::Unavailable(format!("injected failure for {:?}", op)));
            }
        }

        Ok(store)
    }
}

#[async_trait]
impl UserGateway for InMemoryGateway {
    async fn get_users(&self) -> Result<Vec<UserRecord>, GatewayError> {
        let store = self.begin(GatewayOp::GetUsers)?;
        Ok(store.users.clone())
    }

    async fn get_user(&self, id: &UserId) -> Result<UserRecord, GatewayError> {
        let store = self.begin(GatewayOp::GetUser)?;
        store
            .users
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(id.clone()))
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord, GatewayError> {
        let mut store = self.begin(GatewayOp::CreateUser)?;
        let id = UserId::Number(store.next_id);
        store.next_id += 1;

        let user = draft.clone().into_record(id);
        store.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: &UserId, draft: &UserDraft) -> Result<UserRecord, GatewayError> {
        let mut store = self.begin(GatewayOp::UpdateUser)?;
        let slot = store
            .users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| GatewayError::NotFound(id.clone()))?;

        *slot = draft.clone().into_record(id.clone());
        Ok(slot.clone())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), GatewayError> {
        let mut store = self.begin(GatewayOp::DeleteUser)?;
        let before = store.users.len();
        store.users.retain(|u| &u.id != id);

        if store.users.len() == before {
            return Err(GatewayError::NotFound(id.clone()));
        }
        Ok(())
    }
}
