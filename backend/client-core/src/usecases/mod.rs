//! Business operations.
//!
//! Each remote usecase owns its status-code dispatch: the same code means
//! different things on different endpoints, so there is no shared mapper.

pub mod local_save_access_token;
pub mod remote_add_account;
pub mod remote_authentication;

pub use local_save_access_token::{ACCESS_TOKEN_KEY, LocalSaveAccessToken};
pub use remote_add_account::RemoteAddAccount;
pub use remote_authentication::RemoteAuthentication;

use crate::error::{DomainError, StorageError};

use common::RedactedSecret;
use models::{AccountModel, AddAccountParams, AuthenticationParams};

use std::future::Future;

pub trait Authentication: Send + Sync {
    fn auth(
        &self,
        params: AuthenticationParams,
    ) -> impl Future<Output = Result<AccountModel, DomainError>> + Send;
}

pub trait AddAccount: Send + Sync {
    fn add(
        &self,
        params: AddAccountParams,
    ) -> impl Future<Output = Result<AccountModel, DomainError>> + Send;
}

pub trait SaveAccessToken: Send + Sync {
    fn save(
        &self,
        access_token: &RedactedSecret,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}
