//! Shared building blocks for the authform workspace.
//!
//! Nothing in here knows about forms or endpoints. It holds the pieces
//! every other crate leans on:
//!
//! - [`ErrorLocation`]: file/line/column attached to every error variant
//! - [`HttpStatusCode`]: the closed set of status codes a usecase dispatches on
//! - [`RedactedSecret`]: passwords and tokens that never leak through `Debug`
//!
//! ## Architecture
//!
//! - **common** (this crate): shared primitives
//! - **models**: pure domain data
//! - **client-core**: validation engine, transport protocol, usecases
//! - **authform**: edge wiring and the command-line front end

pub mod error;
pub mod http_status;
pub mod redacted_secret;


pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
