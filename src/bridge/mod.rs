//! Message bridge between the compiler host and its UI collaborator.
//!
//! The protocol is a pair of envelopes: a request carrying a method name, a
//! correlation id, and an ordered argument list; and a response carrying the
//! same id and the return value. Responses may arrive in any order relative
//! to requests, so correlation is solely by id, never by arrival order.
//!
//! [`BridgeClient`] owns its own id generator and pending-request registry
//! (one per session, torn down on disconnect). Every pending entry supports
//! a bounded wait with timeout and explicit cancellation, so a response that
//! never arrives cannot leak an entry forever.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// Errors raised by the bridge layer.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// A response arrived carrying an id with no pending request.
    #[error("response for unknown message id {message_id}")]
    UnknownId {
        /// The unmatched correlation id
        message_id: u64,
    },

    /// A pending request saw no response within its bounded wait.
    #[error("request {message_id} timed out waiting for a response")]
    Timeout {
        /// Correlation id of the abandoned request
        message_id: u64,
    },

    /// The client side of the pending entry went away.
    #[error("request {message_id} was cancelled")]
    Cancelled {
        /// Correlation id of the cancelled request
        message_id: u64,
    },
}

/// Inner payload of a request envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMessage {
    /// Method name to dispatch on the host side
    #[serde(rename = "type")]
    pub method: String,
    /// Correlation id, unique per client session
    pub message_id: u64,
    /// Ordered argument list
    pub data: Vec<Value>,
}

/// Outbound request envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    /// The request payload
    pub plugin_message: RequestMessage,
    /// Sender plugin identity
    pub plugin_id: String,
}

/// Inner payload of a response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMessage {
    /// Echo of the requested method name
    #[serde(rename = "type")]
    pub method: String,
    /// Correlation id of the request being answered
    pub message_id: u64,
    /// Return value
    pub data: Value,
}

/// Inbound response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// The response payload
    pub plugin_message: ResponseMessage,
}

/// Handle for one in-flight request. Wait on it with a timeout; on timeout,
/// cancel the id on the client to drop the registry entry.
#[derive(Debug)]
pub struct PendingReply {
    message_id: u64,
    receiver: Receiver<Value>,
}

impl PendingReply {
    /// The correlation id this reply is registered under.
    #[must_use]
    pub fn message_id(&self) -> u64 {
        self.message_id
    }

    /// Blocks until the response arrives or the timeout elapses.
    ///
    /// # Errors
    ///
    /// [`BridgeError::Timeout`] when nothing arrives in time, and
    /// [`BridgeError::Cancelled`] when the entry was removed from the client.
    pub fn wait(self, timeout: Duration) -> Result<Value, BridgeError> {
        match self.receiver.recv_timeout(timeout) {
            Ok(value) => Ok(value),
            Err(RecvTimeoutError::Timeout) => Err(BridgeError::Timeout {
                message_id: self.message_id,
            }),
            Err(RecvTimeoutError::Disconnected) => Err(BridgeError::Cancelled {
                message_id: self.message_id,
            }),
        }
    }
}

/// Client-side bridge context: id generation plus the pending registry.
#[derive(Debug)]
pub struct BridgeClient {
    plugin_id: String,
    next_id: u64,
    pending: HashMap<u64, Sender<Value>>,
}

impl BridgeClient {
    /// Creates a client for one session.
    #[must_use]
    pub fn new(plugin_id: impl Into<String>) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            next_id: 0,
            pending: HashMap::new(),
        }
    }

    /// Builds the envelope for a request and registers a pending entry for
    /// its response. Ids increase monotonically.
    pub fn request(
        &mut self,
        method: impl Into<String>,
        data: Vec<Value>,
    ) -> (RequestEnvelope, PendingReply) {
        let message_id = self.next_id;
        self.next_id += 1;

        let (sender, receiver) = mpsc::channel();
        self.pending.insert(message_id, sender);

        let envelope = RequestEnvelope {
            plugin_message: RequestMessage {
                method: method.into(),
                message_id,
                data,
            },
            plugin_id: self.plugin_id.clone(),
        };
        (
            envelope,
            PendingReply {
                message_id,
                receiver,
            },
        )
    }

    /// Routes a response to its pending request and removes the entry.
    /// A response whose waiter already gave up is dropped silently; the
    /// entry is still reclaimed.
    ///
    /// # Errors
    ///
    /// [`BridgeError::UnknownId`] when no request is pending under the
    /// response's id.
    pub fn accept_response(&mut self, envelope: &ResponseEnvelope) -> Result<(), BridgeError> {
        let message_id = envelope.plugin_message.message_id;
        let sender = self
            .pending
            .remove(&message_id)
            .ok_or(BridgeError::UnknownId { message_id })?;
        let _ = sender.send(envelope.plugin_message.data.clone());
        Ok(())
    }

    /// Drops the pending entry for an abandoned request. Returns whether an
    /// entry existed.
    pub fn cancel(&mut self, message_id: u64) -> bool {
        self.pending.remove(&message_id).is_some()
    }

    /// Number of requests still awaiting a response.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Host-side operation table: maps a method name to its implementation.
pub trait HostHandler {
    /// Invokes the named method with the request's argument list.
    ///
    /// # Errors
    ///
    /// Implementations surface any failure; [`dispatch`] turns it into an
    /// error-shaped response value.
    fn invoke(&mut self, method: &str, data: &[Value]) -> anyhow::Result<Value>;
}

/// Dispatches a request to the handler and replies under the same
/// correlation id. Handler failures become `{ "error": <message> }` payloads
/// so the caller's pending entry resolves instead of hanging.
pub fn dispatch<H: HostHandler>(handler: &mut H, request: &RequestEnvelope) -> ResponseEnvelope {
    let message = &request.plugin_message;
    let data = match handler.invoke(&message.method, &message.data) {
        Ok(value) => value,
        Err(error) => serde_json::json!({ "error": error.to_string() }),
    };
    ResponseEnvelope {
        plugin_message: ResponseMessage {
            method: message.method.clone(),
            message_id: message.message_id,
            data,
        },
    }
}
