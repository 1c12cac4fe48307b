//! In-process live session client.
//!
//! [`LiveClient`] implements the client side of a live session without
//! owning a transport. Outbound messages (setup, tool responses) are queued
//! on an unbounded channel that a transport drains; inbound server messages
//! are handed to [`LiveClient::deliver`], which invokes the registered
//! handlers.

use std::sync::{Arc, Mutex, PoisonError};

use garderobe_core::define_id;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::error::LiveError;
use crate::protocol::{
    ClientMessage, ServerMessage, SessionConfig, ToolCall, ToolCallCancellation, ToolResponse,
};

define_id!(SubscriptionId, u64);

type ToolCallHandler = Arc<dyn Fn(&ToolCall) + Send + Sync>;
type CancellationHandler = Arc<dyn Fn(&ToolCallCancellation) + Send + Sync>;

#[derive(Clone)]
enum Handler {
    ToolCall(ToolCallHandler),
    Cancellation(CancellationHandler),
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler)>,
}

/// Client side of a live session.
///
/// Cloning is cheap; clones share the outbound queue and handler registry.
#[derive(Clone)]
pub struct LiveClient {
    inner: Arc<LiveClientInner>,
}

struct LiveClientInner {
    outbound: mpsc::UnboundedSender<ClientMessage>,
    registry: Mutex<Registry>,
}

impl std::fmt::Debug for LiveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveClient")
            .field("listeners", &self.listener_count())
            .field("closed", &self.inner.outbound.is_closed())
            .finish()
    }
}

impl LiveClient {
    /// Create a client and the receiver its outbound messages are queued on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ClientMessage>) {
        let (outbound, receiver) = mpsc::unbounded_channel();
        let client = Self {
            inner: Arc::new(LiveClientInner {
                outbound,
                registry: Mutex::new(Registry::default()),
            }),
        };
        (client, receiver)
    }

    /// Submit the session configuration.
    ///
    /// # Errors
    ///
    /// Returns `LiveError::ClientClosed` if the outbound receiver was dropped.
    #[instrument(skip(self, config), fields(model = %config.model))]
    pub fn set_config(&self, config: SessionConfig) -> Result<(), LiveError> {
        self.send(ClientMessage::Setup(config))
    }

    /// Send a tool response.
    ///
    /// # Errors
    ///
    /// Returns `LiveError::ClientClosed` if the outbound receiver was dropped.
    pub fn send_tool_response(&self, response: ToolResponse) -> Result<(), LiveError> {
        self.send(ClientMessage::ToolResponse(response))
    }

    fn send(&self, message: ClientMessage) -> Result<(), LiveError> {
        self.inner
            .outbound
            .send(message)
            .map_err(|_| LiveError::ClientClosed)
    }

    /// Register a handler for tool-call events.
    pub fn on_tool_call<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&ToolCall) + Send + Sync + 'static,
    {
        self.register(Handler::ToolCall(Arc::new(handler)))
    }

    /// Register a handler for tool-call cancellations.
    pub fn on_tool_call_cancellation<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&ToolCallCancellation) + Send + Sync + 'static,
    {
        self.register(Handler::Cancellation(Arc::new(handler)))
    }

    fn register(&self, handler: Handler) -> SubscriptionId {
        let mut registry = self.registry();
        registry.next_id += 1;
        let id = SubscriptionId::new(registry.next_id);
        registry.handlers.push((id, handler));
        debug!(subscription = %id, "handler registered");
        id
    }

    /// Unregister a handler. Returns `false` if it was not registered.
    pub fn off(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry();
        let before = registry.handlers.len();
        registry.handlers.retain(|(existing, _)| *existing != id);
        let removed = registry.handlers.len() != before;
        if removed {
            debug!(subscription = %id, "handler removed");
        }
        removed
    }

    /// Number of registered handlers of any kind.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry().handlers.len()
    }

    /// Whether two handles refer to the same client.
    #[must_use]
    pub fn same_client(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Hand an inbound message to the registered handlers.
    ///
    /// Handlers run synchronously on the calling task. The handler list is
    /// copied before any handler runs, so handlers may register, unregister,
    /// or send through this client. Returns the number of handlers invoked.
    pub fn deliver(&self, message: &ServerMessage) -> usize {
        let handlers: Vec<Handler> = self
            .registry()
            .handlers
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        let mut invoked = 0;
        for handler in handlers {
            match (message, handler) {
                (ServerMessage::ToolCall(call), Handler::ToolCall(handler)) => {
                    handler(call);
                    invoked += 1;
                }
                (ServerMessage::ToolCallCancellation(cancel), Handler::Cancellation(handler)) => {
                    handler(cancel);
                    invoked += 1;
                }
                _ => {}
            }
        }
        invoked
    }

    /// Parse a raw server message and deliver it.
    ///
    /// # Errors
    ///
    /// Returns `LiveError::Json` if the message cannot be parsed.
    pub fn deliver_json(&self, raw: &str) -> Result<usize, LiveError> {
        Ok(ServerMessage::from_json(raw)?.map_or(0, |message| self.deliver(&message)))
    }

    fn registry(&self) -> std::sync::MutexGuard<'_, Registry> {
        self.inner
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::protocol::CallId;

    fn tool_call() -> ServerMessage {
        ServerMessage::from_json(r#"{"toolCall":{"functionCalls":[{"name":"f","id":"1"}]}}"#)
            .expect("parse")
            .expect("message")
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let (client, _rx) = LiveClient::new();
        let a = client.on_tool_call(|_| {});
        let b = client.on_tool_call_cancellation(|_| {});
        assert_ne!(a, b);
        assert_eq!(client.listener_count(), 2);

        assert!(client.off(a));
        assert!(!client.off(a));
        assert!(client.off(b));
        assert_eq!(client.listener_count(), 0);
    }

    #[test]
    fn test_deliver_routes_by_kind() {
        let (client, _rx) = LiveClient::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let cancels = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        client.on_tool_call(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        let c = Arc::clone(&cancels);
        client.on_tool_call_cancellation(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(client.deliver(&tool_call()), 1);
        assert_eq!(
            client.deliver_json(r#"{"toolCallCancellation":{"ids":["1"]}}"#).expect("deliver"),
            1
        );
        assert_eq!(client.deliver(&ServerMessage::SetupComplete), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cancels.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_may_call_back_into_client() {
        let (client, mut rx) = LiveClient::new();
        let inner = client.clone();
        client.on_tool_call(move |call| {
            let ids = call.function_calls.iter().map(|c| c.id.clone());
            inner
                .send_tool_response(ToolResponse::success_for(ids))
                .expect("send");
            inner.on_tool_call(|_| {});
        });

        client.deliver(&tool_call());
        assert_eq!(client.listener_count(), 2);
        let Ok(ClientMessage::ToolResponse(response)) = rx.try_recv() else {
            panic!("expected tool response");
        };
        assert_eq!(response.ids().collect::<Vec<_>>(), vec![&CallId::from("1")]);
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (client, rx) = LiveClient::new();
        drop(rx);
        let err = client
            .send_tool_response(ToolResponse::success_for([CallId::from("1")]))
            .expect_err("closed");
        assert!(matches!(err, LiveError::ClientClosed));
    }

    #[test]
    fn test_same_client() {
        let (a, _rx_a) = LiveClient::new();
        let (b, _rx_b) = LiveClient::new();
        assert!(a.same_client(&a.clone()));
        assert!(!a.same_client(&b));
    }
}
