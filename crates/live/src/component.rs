//! The mountable classification component.
//!
//! Mounting a [`ClassificationComponent`] on a [`LiveClient`] submits the
//! session configuration and subscribes to tool calls. Every tool-call batch
//! is dispatched onto the component's classification record and chart
//! renderer, and acknowledged after the configured delay. Unmounting (or
//! dropping) the component removes its handlers and aborts pending
//! acknowledgments.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use garderobe_core::ProductClassification;
use tracing::{debug, info, instrument, warn};

use crate::acknowledgment::AckScheduler;
use crate::chart::{ChartRenderer, ChartSurface, RenderState};
use crate::client::{LiveClient, SubscriptionId};
use crate::config::LiveSettings;
use crate::declarations::{FunctionName, declared_functions};
use crate::dispatcher::dispatch;
use crate::error::LiveError;
use crate::protocol::{SessionConfig, ToolCall, ToolCallCancellation};

/// Point-in-time view of the component's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSnapshot {
    /// Latest chart payload received.
    pub chart_payload: Option<String>,
    /// Outcome of the latest render.
    pub render_state: RenderState,
    /// Number of successful renders.
    pub render_count: usize,
    /// Properties set so far.
    pub classification: ProductClassification,
    /// Tool-call batches not yet acknowledged.
    pub pending_acknowledgments: usize,
}

struct ComponentState {
    declared: Vec<FunctionName>,
    classification: ProductClassification,
    chart: ChartRenderer,
    acks: AckScheduler,
}

impl ComponentState {
    fn handle_tool_call(&mut self, call: &ToolCall) {
        let outcome = dispatch(call, &self.declared, &mut self.classification);
        if let Some(payload) = outcome.chart_payload {
            self.chart.set_payload(payload);
        }
        self.acks.schedule(outcome.acknowledge);
    }

    fn handle_cancellation(&self, cancellation: &ToolCallCancellation) {
        let removed = self.acks.cancel_calls(&cancellation.ids);
        info!(
            cancelled = cancellation.ids.len(),
            removed, "tool calls cancelled"
        );
    }
}

#[derive(Debug, Clone, Copy)]
struct Subscriptions {
    tool_call: SubscriptionId,
    cancellation: SubscriptionId,
}

/// A classification component mounted on a live client.
pub struct ClassificationComponent {
    client: LiveClient,
    settings: LiveSettings,
    state: Arc<Mutex<ComponentState>>,
    subscriptions: Option<Subscriptions>,
}

impl std::fmt::Debug for ClassificationComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationComponent")
            .field("client", &self.client)
            .field("mounted", &self.is_mounted())
            .finish_non_exhaustive()
    }
}

impl ClassificationComponent {
    /// Mount the component on a client.
    ///
    /// Submits the session configuration once and subscribes to tool calls
    /// and cancellations. A failed submission is logged and not retried.
    ///
    /// # Errors
    ///
    /// Returns `LiveError::Template` if the session configuration cannot be
    /// assembled.
    #[instrument(skip_all, fields(locale = %settings.locale))]
    pub fn mount(
        client: &LiveClient,
        settings: &LiveSettings,
        surface: Option<Box<dyn ChartSurface>>,
    ) -> Result<Self, LiveError> {
        let state = Arc::new(Mutex::new(ComponentState {
            declared: declared_functions(settings.charts),
            classification: ProductClassification::new(),
            chart: ChartRenderer::new(surface),
            acks: AckScheduler::new(client.clone(), settings.ack_delay),
        }));

        let mut component = Self {
            client: client.clone(),
            settings: settings.clone(),
            state,
            subscriptions: None,
        };
        component.connect()?;
        info!("classification component mounted");
        Ok(component)
    }

    /// Submit the configuration to the current client and subscribe.
    fn connect(&mut self) -> Result<(), LiveError> {
        let config = SessionConfig::assemble(&self.settings)?;
        if let Err(e) = self.client.set_config(config) {
            warn!(error = %e, "failed to submit session configuration");
        }

        let state = Arc::clone(&self.state);
        let tool_call = self.client.on_tool_call(move |call| {
            lock(&state).handle_tool_call(call);
        });
        let state = Arc::clone(&self.state);
        let cancellation = self.client.on_tool_call_cancellation(move |cancellation| {
            lock(&state).handle_cancellation(cancellation);
        });

        self.subscriptions = Some(Subscriptions {
            tool_call,
            cancellation,
        });
        Ok(())
    }

    /// Unsubscribe from the current client and abort pending acknowledgments.
    fn disconnect(&mut self) {
        let Some(subscriptions) = self.subscriptions.take() else {
            return;
        };
        self.client.off(subscriptions.tool_call);
        self.client.off(subscriptions.cancellation);
        lock(&self.state).acks.abort_all();
        debug!("classification component disconnected");
    }

    /// Move the component to another client.
    ///
    /// Pending acknowledgments for the old client are aborted, the
    /// configuration is submitted to the new client, and the handlers are
    /// registered there. Rebinding to the current client does nothing.
    ///
    /// # Errors
    ///
    /// Returns `LiveError::Template` if the session configuration cannot be
    /// assembled.
    #[instrument(skip_all)]
    pub fn rebind(&mut self, client: &LiveClient) -> Result<(), LiveError> {
        if self.client.same_client(client) && self.is_mounted() {
            return Ok(());
        }
        self.disconnect();
        self.client = client.clone();
        lock(&self.state).acks = AckScheduler::new(client.clone(), self.settings.ack_delay);
        self.connect()
    }

    /// Attach a chart surface, rendering any payload received so far.
    pub fn attach_surface(&self, surface: Box<dyn ChartSurface>) {
        lock(&self.state).chart.attach_surface(surface);
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.subscriptions.is_some()
    }

    #[must_use]
    pub const fn settings(&self) -> &LiveSettings {
        &self.settings
    }

    #[must_use]
    pub fn snapshot(&self) -> ComponentSnapshot {
        let state = lock(&self.state);
        ComponentSnapshot {
            chart_payload: state.chart.payload().map(str::to_string),
            render_state: state.chart.state().clone(),
            render_count: state.chart.render_count(),
            classification: state.classification.clone(),
            pending_acknowledgments: state.acks.pending_batches(),
        }
    }

    /// Unmount the component.
    pub fn unmount(mut self) {
        self.disconnect();
        info!("classification component unmounted");
    }
}

impl Drop for ClassificationComponent {
    fn drop(&mut self) {
        self.disconnect();
    }
}

fn lock(state: &Mutex<ComponentState>) -> MutexGuard<'_, ComponentState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
