pub mod config;
pub mod domain;
pub mod http_client;
pub mod storage;
pub mod validation;

pub use config::ConfigError;
pub use domain::DomainError;
pub use http_client::HttpClientError;
pub use storage::StorageError;
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    HttpClient(#[from] HttpClientError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
