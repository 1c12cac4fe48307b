//! Garderobe Live - Session adapter for live product classification.
//!
//! This crate sits between a product-classification UI and a hosted
//! multimodal live model session. It assembles the session configuration,
//! handles the model's tool calls, and renders the charts the model sends.
//!
//! # Modules
//!
//! - [`session`] - Session configuration assembly
//! - [`declarations`] - Function declarations offered to the model
//! - [`prompt`] - Askama-rendered system instruction
//! - [`protocol`] - Wire message types
//! - [`client`] - In-process live client with handler registry
//! - [`dispatcher`] - Tool-call decoding and dispatch
//! - [`acknowledgment`] - Deferred, cancellable tool responses
//! - [`chart`] - Chart payload parsing and surfaces
//! - [`component`] - Mount/unmount lifecycle tying the pieces together
//!
//! # Example
//!
//! ```
//! use garderobe_live::{ClassificationComponent, LiveClient, LiveSettings};
//!
//! let (client, mut outbound) = LiveClient::new();
//! let component = ClassificationComponent::mount(&client, &LiveSettings::default(), None)?;
//! assert!(outbound.try_recv().is_ok()); // setup message
//! component.unmount();
//! assert_eq!(client.listener_count(), 0);
//! # Ok::<(), garderobe_live::LiveError>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod acknowledgment;
pub mod chart;
pub mod client;
pub mod component;
pub mod config;
pub mod declarations;
pub mod dispatcher;
pub mod error;
pub mod prompt;
pub mod protocol;
pub mod session;

pub use chart::{ChartSurface, HtmlChartSurface, MemoryChartSurface, RenderError, RenderState};
pub use client::{LiveClient, SubscriptionId};
pub use component::{ClassificationComponent, ComponentSnapshot};
pub use config::{ConfigError, LiveSettings};
pub use error::LiveError;
pub use protocol::{ClientMessage, ServerMessage, SessionConfig};
