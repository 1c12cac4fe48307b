//! Chart rendering.
//!
//! The model sends charts as JSON strings holding a Vega-Lite specification.
//! [`ChartRenderer`] keeps the latest payload and, whenever a
//! [`ChartSurface`] is attached, parses it and hands the document to the
//! surface. Failures are recorded in [`RenderState`] rather than returned.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use askama::Template;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Errors from rendering a chart payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The payload is not valid JSON.
    #[error("chart payload is not valid JSON: {0}")]
    Parse(String),

    /// The payload is valid JSON but not an object.
    #[error("chart payload is not a JSON object")]
    NotAnObject,

    /// The surface failed to display the chart.
    #[error("chart surface error: {0}")]
    Surface(String),
}

/// Outcome of the most recent render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RenderState {
    /// Nothing has been rendered yet.
    #[default]
    Empty,
    /// The latest payload is displayed.
    Rendered,
    /// The latest payload could not be displayed.
    Failed(RenderError),
}

/// A sink that displays chart specifications.
pub trait ChartSurface: Send {
    /// Display a parsed chart specification, replacing any previous chart.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Surface` if the chart cannot be displayed.
    fn embed(&mut self, spec: &Value) -> Result<(), RenderError>;
}

/// Parse a chart payload into a specification document.
///
/// # Errors
///
/// Returns `RenderError::Parse` for invalid JSON and
/// `RenderError::NotAnObject` for any other JSON value.
pub fn parse_chart_spec(payload: &str) -> Result<Value, RenderError> {
    let spec: Value =
        serde_json::from_str(payload).map_err(|e| RenderError::Parse(e.to_string()))?;
    if spec.is_object() {
        Ok(spec)
    } else {
        Err(RenderError::NotAnObject)
    }
}

/// Holds the latest chart payload and renders it onto a surface.
#[derive(Default)]
pub struct ChartRenderer {
    surface: Option<Box<dyn ChartSurface>>,
    payload: Option<String>,
    state: RenderState,
    renders: usize,
}

impl std::fmt::Debug for ChartRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartRenderer")
            .field("surface", &self.surface.is_some())
            .field("payload", &self.payload)
            .field("state", &self.state)
            .field("renders", &self.renders)
            .finish()
    }
}

impl ChartRenderer {
    #[must_use]
    pub fn new(surface: Option<Box<dyn ChartSurface>>) -> Self {
        Self {
            surface,
            ..Self::default()
        }
    }

    /// Attach a surface, rendering the current payload onto it.
    pub fn attach_surface(&mut self, surface: Box<dyn ChartSurface>) {
        self.surface = Some(surface);
        self.render();
    }

    /// Replace the payload and render it.
    pub fn set_payload(&mut self, payload: String) {
        self.payload = Some(payload);
        self.render();
    }

    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    #[must_use]
    pub const fn state(&self) -> &RenderState {
        &self.state
    }

    /// Number of successful renders.
    #[must_use]
    pub const fn render_count(&self) -> usize {
        self.renders
    }

    #[instrument(skip(self))]
    fn render(&mut self) {
        let (Some(surface), Some(payload)) = (self.surface.as_mut(), self.payload.as_deref())
        else {
            return;
        };
        if payload.trim().is_empty() {
            return;
        }

        match parse_chart_spec(payload).and_then(|spec| surface.embed(&spec)) {
            Ok(()) => {
                self.renders += 1;
                self.state = RenderState::Rendered;
                info!(renders = self.renders, "chart rendered");
            }
            Err(e) => {
                warn!(error = %e, "chart not rendered");
                self.state = RenderState::Failed(e);
            }
        }
    }
}

/// Surface that records every embedded specification in memory.
///
/// Clones share the record, so a test can keep one clone and hand the
/// other to a renderer.
#[derive(Debug, Clone, Default)]
pub struct MemoryChartSurface {
    embedded: Arc<Mutex<Vec<Value>>>,
}

impl MemoryChartSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every specification embedded so far, oldest first.
    #[must_use]
    pub fn embedded(&self) -> Vec<Value> {
        self.embedded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn latest(&self) -> Option<Value> {
        self.embedded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl ChartSurface for MemoryChartSurface {
    fn embed(&mut self, spec: &Value) -> Result<(), RenderError> {
        self.embedded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(spec.clone());
        Ok(())
    }
}

#[derive(Template)]
#[template(path = "chart.html")]
struct ChartPageTemplate<'a> {
    title: &'a str,
    spec: &'a Value,
}

/// Surface that writes a self-contained vega-embed page to a file.
///
/// Each render overwrites the page with the latest chart.
#[derive(Debug, Clone)]
pub struct HtmlChartSurface {
    path: PathBuf,
    title: String,
}

impl HtmlChartSurface {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            title: "Chart".to_string(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the page for a specification.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Surface` if the template fails to render.
    pub fn render_page(&self, spec: &Value) -> Result<String, RenderError> {
        ChartPageTemplate {
            title: &self.title,
            spec,
        }
        .render()
        .map_err(|e| RenderError::Surface(e.to_string()))
    }
}

impl ChartSurface for HtmlChartSurface {
    fn embed(&mut self, spec: &Value) -> Result<(), RenderError> {
        let page = self.render_page(spec)?;
        std::fs::write(&self.path, page).map_err(|e| {
            RenderError::Surface(format!("failed to write {}: {e}", self.path.display()))
        })
    }
}
