//! Outbound message port.
//!
//! The engine emits plain text and structured (title + fields) messages
//! through this trait; the chat transport implements it. The transport
//! supplies its own size limit and bodies are chunked at this boundary,
//! so the engine never hardcodes a protocol constant.

use async_trait::async_trait;

/// Transport failure surfaced by an outbound send.
///
/// Callers log these and keep going; a failed notification never blocks
/// game state progression.
#[derive(Debug, thiserror::Error)]
#[error("outbound send failed: {0}")]
pub struct OutboundError(pub String);

/// One (heading, body) pair of a structured message. Order is
/// significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub heading: String,
    pub body: String,
}

/// Write access to the chat transport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OutboundChannel: Send + Sync {
    /// Maximum body size the transport accepts per message, in bytes.
    fn message_limit(&self) -> usize;

    /// Send a plain text message to a channel.
    async fn send_text(&self, channel_id: i64, text: &str) -> Result<(), OutboundError>;

    /// Send a structured message: a title plus ordered fields.
    async fn send_structured(
        &self,
        channel_id: i64,
        title: &str,
        fields: &[Field],
    ) -> Result<(), OutboundError>;
}

/// Split a body into chunks of at most `limit` bytes, never splitting a
/// character.
pub fn chunk_body(body: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    if body.len() <= limit {
        return vec![body.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    for ch in body.chars() {
        if current.len() + ch.len_utf8() > limit && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Expand fields whose bodies exceed the transport limit into several
/// fields under the same heading, preserving order.
pub fn chunk_fields(fields: &[Field], limit: usize) -> Vec<Field> {
    fields
        .iter()
        .flat_map(|field| {
            chunk_body(&field.body, limit).into_iter().map(|body| Field {
                heading: field.heading.clone(),
                body,
            })
        })
        .collect()
}
