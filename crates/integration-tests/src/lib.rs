//! Integration tests for garderobe.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p garderobe-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `tool_calls` - Dispatching tool-call batches onto a mounted component
//! - `acknowledgments` - Deferred tool responses and cancellation
//! - `lifecycle` - Mount, rebind, and unmount bookkeeping
//! - `session_config` - The setup message submitted on mount
//!
//! Async tests run on a paused Tokio clock, so acknowledgment delays
//! elapse instantly and deterministically.

use garderobe_live::{
    ClassificationComponent, ClientMessage, LiveClient, LiveSettings, MemoryChartSurface,
};
use tokio::sync::mpsc::UnboundedReceiver;

/// A component mounted on a fresh client with an in-memory chart surface.
pub struct TestContext {
    pub client: LiveClient,
    pub outbound: UnboundedReceiver<ClientMessage>,
    pub surface: MemoryChartSurface,
    pub component: ClassificationComponent,
}

impl TestContext {
    /// Mount with default settings and consume the setup message.
    ///
    /// # Panics
    ///
    /// Panics if mounting fails or no setup message is sent.
    #[must_use]
    pub fn mount() -> Self {
        Self::mount_with(&LiveSettings::default())
    }

    /// Mount with the given settings and consume the setup message.
    ///
    /// # Panics
    ///
    /// Panics if mounting fails or no setup message is sent.
    #[must_use]
    pub fn mount_with(settings: &LiveSettings) -> Self {
        let (client, mut outbound) = LiveClient::new();
        let surface = MemoryChartSurface::new();
        let component =
            ClassificationComponent::mount(&client, settings, Some(Box::new(surface.clone())))
                .expect("mount component");
        assert!(
            matches!(outbound.try_recv(), Ok(ClientMessage::Setup(_))),
            "setup message not sent on mount"
        );
        Self {
            client,
            outbound,
            surface,
            component,
        }
    }

    /// Deliver a tool-call batch given as the JSON array of function calls.
    ///
    /// # Panics
    ///
    /// Panics if the batch is not valid JSON.
    pub fn deliver_calls(&self, function_calls: &str) {
        let raw = format!(r#"{{"toolCall":{{"functionCalls":{function_calls}}}}}"#);
        self.client.deliver_json(&raw).expect("deliver tool call");
    }
}
