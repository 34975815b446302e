use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tally_core::{Email, UserRecord, UserStore, UserStoreError};

#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Email, UserRecord>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: UserRecord) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.email().clone(), user);
        Ok(())
    }

    async fn find_user_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<UserRecord>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }
}
