//! Submit flows for the login and sign-up forms.
//!
//! Each flow validates every field first and only reaches the network when
//! the form is clean. A successful submit stores the returned access token.

use crate::error::AuthformError;
use crate::factory::{make_login_validation, make_signup_validation};
use crate::form::{
    FieldError, LOGIN_FIELDS, SIGNUP_FIELDS, login_input, signup_input, validate_form,
};

use client_core::error::DomainError;
use client_core::usecases::{AddAccount, Authentication, SaveAccessToken};

use common::RedactedSecret;
use models::{AccountModel, AddAccountParams, AuthenticationParams};

use log::{info, warn};

/// What a submit ended with, short of an infrastructure failure.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// The form never left the client.
    Invalid(Vec<FieldError>),
    /// The server (or transport) turned the request down.
    Rejected(DomainError),
    /// Access token received and stored.
    Authenticated,
}

pub async fn login<A, S>(
    authentication: &A,
    save_access_token: &S,
    email: String,
    password: RedactedSecret,
) -> Result<SubmitOutcome, AuthformError>
where
    A: Authentication,
    S: SaveAccessToken,
{
    let input = login_input(&email, &password);
    let errors = validate_form(&make_login_validation(), &LOGIN_FIELDS, &input);
    if !errors.is_empty() {
        info!("Login form has {} invalid field(s)", errors.len());
        return Ok(SubmitOutcome::Invalid(errors));
    }

    let result = authentication
        .auth(AuthenticationParams::new(email, password))
        .await;

    finish(result, save_access_token).await
}

pub async fn signup<A, S>(
    add_account: &A,
    save_access_token: &S,
    params: AddAccountParams,
) -> Result<SubmitOutcome, AuthformError>
where
    A: AddAccount,
    S: SaveAccessToken,
{
    let input = signup_input(
        &params.name,
        &params.email,
        &params.password,
        &params.password_confirmation,
    );
    let errors = validate_form(&make_signup_validation(), &SIGNUP_FIELDS, &input);
    if !errors.is_empty() {
        info!("Sign-up form has {} invalid field(s)", errors.len());
        return Ok(SubmitOutcome::Invalid(errors));
    }

    let result = add_account.add(params).await;

    finish(result, save_access_token).await
}

async fn finish<S: SaveAccessToken>(
    result: Result<AccountModel, DomainError>,
    save_access_token: &S,
) -> Result<SubmitOutcome, AuthformError> {
    match result {
        Ok(account) => {
            save_access_token.save(&account.access_token).await?;
            Ok(SubmitOutcome::Authenticated)
        }
        Err(error) => {
            warn!("Submit rejected: {error}");
            Ok(SubmitOutcome::Rejected(error))
        }
    }
}
