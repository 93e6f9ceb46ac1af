use super::payload::Payload;
use serde::Deserialize;
use std::fmt;

/// NVP API version every request is sent with.
pub const API_VERSION: &str = "119.0";

/// Merchant API credentials shared by every NVP call.
#[derive(Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
    pub signature: Option<String>,
    /// Email of the account being acted for, when calling on someone's behalf.
    pub subject: Option<String>,
    /// Partner attribution code (`BUTTONSOURCE`).
    pub button_source: Option<String>,
}

impl ApiCredentials {
    /// Fields common to every request: version, credentials and attribution.
    pub fn base_data(&self) -> Payload {
        let mut data = Payload::new();
        data.insert("VERSION", API_VERSION);
        data.insert_opt("USER", self.username.as_deref());
        data.insert_opt("PWD", self.password.as_deref());
        data.insert_opt("SIGNATURE", self.signature.as_deref());
        data.insert_opt("SUBJECT", self.subject.as_deref());
        data.insert_opt(
            "BUTTONSOURCE",
            self.button_source.as_deref().filter(|b| !b.is_empty()),
        );
        data
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "***");
        f.debug_struct("ApiCredentials")
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("signature", &redact(&self.signature))
            .field("subject", &self.subject)
            .field("button_source", &self.button_source)
            .finish()
    }
}
