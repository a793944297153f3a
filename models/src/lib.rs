//! Domain models for authform.
//!
//! Pure data: the payloads the remote usecases send and receive. Models
//! have no business logic, they are only passed between layers.

pub mod account;
pub mod params;


pub use account::AccountModel;
pub use params::{AddAccountParams, AuthenticationParams};
