//! Composition root: the only place concrete adapters are chosen.

pub mod http;
pub mod usecases;
pub mod validation;

pub use http::{make_api_url, make_http_client};
pub use usecases::{
    make_local_save_access_token, make_remote_add_account, make_remote_authentication,
};
pub use validation::{
    login_validation_rules, make_login_validation, make_signup_validation, signup_validation_rules,
};
