use anora_shared::webapp::SubscriptionStatus;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Backing storage for premium flags. Only the in-memory store exists today;
/// a persistent one would implement this trait.
#[async_trait]
pub trait EntitlementStore: Send + Sync {
    async fn get(&self, user_id: i64) -> Option<bool>;
    async fn set(&self, user_id: i64, has_access: bool);
}

#[derive(Clone, Default)]
pub struct InMemoryEntitlementStore {
    flags: Arc<RwLock<HashMap<i64, bool>>>,
}

#[async_trait]
impl EntitlementStore for InMemoryEntitlementStore {
    async fn get(&self, user_id: i64) -> Option<bool> {
        self.flags.read().await.get(&user_id).copied()
    }

    async fn set(&self, user_id: i64, has_access: bool) {
        self.flags.write().await.insert(user_id, has_access);
    }
}

#[derive(Clone)]
pub struct EntitlementService {
    store: Arc<dyn EntitlementStore>,
}

impl EntitlementService {
    pub fn new(store: Arc<dyn EntitlementStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryEntitlementStore::default()))
    }

    pub async fn has_access(&self, user_id: i64) -> bool {
        self.store.get(user_id).await.unwrap_or(false)
    }

    /// There is no revoke: once granted, access stays until restart.
    pub async fn grant(&self, user_id: i64) {
        self.store.set(user_id, true).await;
    }

    pub async fn status(&self, user_id: i64) -> SubscriptionStatus {
        SubscriptionStatus::new(user_id, self.has_access(user_id).await)
    }
}
