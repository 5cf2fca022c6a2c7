//! Account registration and credential lookup plumbing.
//!
//! This is deliberately thin: token issuance, routing, and form validation
//! belong to the request layer.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::{StoreError, UserRepository};

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("email or nickname already registered")]
    Duplicate,
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct AccountUseCase {
    users: Arc<dyn UserRepository>,
}

impl AccountUseCase {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn register(&self, new_user: NewUser) -> Result<i64, AccountError> {
        if self.users.find_by_email(&new_user.email).await?.is_some()
            || self
                .users
                .find_by_nickname(&new_user.nickname)
                .await?
                .is_some()
        {
            return Err(AccountError::Duplicate);
        }

        let id = self.users.create(&new_user).await?;
        info!(id, nickname = %new_user.nickname, "user registered");
        Ok(id)
    }

    /// Look up a user by credentials. Returns `None` on a wrong email or
    /// password; the request layer decides what to do with that.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .find_by_email(email)
            .await?
            .filter(|user| user.password == password))
    }

    pub async fn get(&self, id: i64) -> Result<Option<User>, StoreError> {
        self.users.find_by_id(id).await
    }
}
