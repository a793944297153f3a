//! Client core for the login and sign-up forms.
//!
//! UI code depends only on the capabilities defined here:
//!
//! - [`validation`]: composable per-field rules and the composite the view queries
//! - [`http`]: the transport protocol remote usecases run against, plus a reqwest adapter
//! - [`usecases`]: authenticate, add account, save access token
//! - [`storage`]: the key/value persistence protocol, plus a JSON-file adapter
//!
//! Concrete adapters are wired in at the edge (see the `authform` app).

pub mod config;
pub mod error;
pub mod http;
pub mod storage;
pub mod usecases;
pub mod validation;


pub const LOGIN_ENDPOINT: &str = "/login";
pub const SIGNUP_ENDPOINT: &str = "/signup";
