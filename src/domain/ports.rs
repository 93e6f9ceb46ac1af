use super::payload::Payload;
use super::response::ReplyFields;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Sends an NVP payload to the gateway and returns its decoded reply.
///
/// Wire encoding, signing and connection handling belong to implementations.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn post(&self, payload: &Payload) -> Result<ReplyFields>;
}

/// Renders a monetary amount the way the gateway expects it on the wire.
///
/// Implementations fail when the amount cannot be represented in their format.
pub trait AmountFormatter: Send + Sync {
    fn format(&self, amount: Decimal) -> Result<String>;
}

pub type GatewayBox = Box<dyn Gateway>;
