use crate::domain::params::AuthorizeParams;
use crate::domain::response::ReplyFields;
use crate::error::Result;
use std::io::Read;

/// Reads request parameters or a canned gateway reply from a JSON source.
pub struct JsonReader<R: Read> {
    source: R,
}

impl<R: Read> JsonReader<R> {
    /// Creates a new `JsonReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Deserializes an `AuthorizeParams` object keyed the way the gateway
    /// integration names its parameters (`returnUrl`, `callbackTimeout`, ...).
    pub fn params(self) -> Result<AuthorizeParams> {
        Ok(serde_json::from_reader(self.source)?)
    }

    /// Deserializes a flat object of string fields standing in for a decoded reply.
    pub fn reply(self) -> Result<ReplyFields> {
        Ok(serde_json::from_reader(self.source)?)
    }
}
