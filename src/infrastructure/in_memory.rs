use crate::domain::payload::Payload;
use crate::domain::ports::Gateway;
use crate::domain::response::ReplyFields;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A gateway that never leaves the process.
///
/// Records every payload it is given and answers with a scripted reply.
/// Used for dry runs and tests; clones share the same recorded history.
#[derive(Default, Clone)]
pub struct InMemoryGateway {
    reply: ReplyFields,
    sent: Arc<RwLock<Vec<Payload>>>,
}

impl InMemoryGateway {
    /// Creates a gateway answering every call with `reply`.
    pub fn replying(reply: ReplyFields) -> Self {
        Self {
            reply,
            sent: Arc::default(),
        }
    }

    /// Payloads posted so far, oldest first.
    pub async fn sent(&self) -> Vec<Payload> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl Gateway for InMemoryGateway {
    async fn post(&self, payload: &Payload) -> Result<ReplyFields> {
        if self.reply.is_empty() {
            return Err(GatewayError::TransportError(
                "in-memory gateway has no scripted reply".to_string(),
            ));
        }
        self.sent.write().await.push(payload.clone());
        Ok(self.reply.clone())
    }
}
