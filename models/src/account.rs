use common::RedactedSecret;

use serde::Deserialize;

/// Session record returned by a successful login or sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountModel {
    pub access_token: RedactedSecret,
}

impl AccountModel {
    pub fn new(access_token: impl Into<RedactedSecret>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}
