//! Replay recorded server messages through a mounted component.
//!
//! The input holds one server message per line, exactly as received from a
//! live session. Blank lines and lines starting with `#` are skipped. Every
//! message is delivered to a freshly mounted component; once the deferred
//! acknowledgments have been sent, the outbound messages and the final
//! classification are printed.
//!
//! # Usage
//!
//! ```bash
//! garderobe replay session.jsonl --out-dir charts/
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use garderobe_live::{
    ChartSurface, ClassificationComponent, ClientMessage, ComponentSnapshot, HtmlChartSurface,
    LiveClient, LiveError, LiveSettings,
};
use thiserror::Error;
use tracing::{info, instrument};

/// Upper bound on how long to wait for acknowledgments after the last message.
const MAX_ACK_WAIT: Duration = Duration::from_secs(10);

/// Errors that can occur during a replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The input or output directory could not be accessed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line is not a valid server message.
    #[error("line {line}: {source}")]
    Message { line: usize, source: LiveError },

    /// Mounting the component or encoding output failed.
    #[error(transparent)]
    Live(#[from] LiveError),
}

/// Result of replaying a session.
#[derive(Debug)]
pub struct ReplayOutcome {
    /// Messages the component sent, in order.
    pub outbound: Vec<ClientMessage>,
    /// Component state after the last acknowledgment.
    pub snapshot: ComponentSnapshot,
    /// Page the chart is written to, when an output directory was given.
    pub chart_page: Option<PathBuf>,
}

/// Replay `input` and return what the component sent and ended up with.
///
/// # Errors
///
/// Returns an error if the input cannot be read, a line fails to parse, or
/// the component cannot be mounted.
#[instrument(skip(settings, input), fields(lines = input.lines().count()))]
pub async fn run_replay(
    settings: &LiveSettings,
    input: &str,
    out_dir: Option<&Path>,
) -> Result<ReplayOutcome, ReplayError> {
    let (surface, chart_page) = match out_dir {
        Some(dir) => {
            tokio::fs::create_dir_all(dir).await?;
            let surface = HtmlChartSurface::new(dir.join("chart.html")).with_title("Garderobe chart");
            let page = surface.path().to_path_buf();
            (Some(Box::new(surface) as Box<dyn ChartSurface>), Some(page))
        }
        None => (None, None),
    };

    let (client, mut outbound) = LiveClient::new();
    let component = ClassificationComponent::mount(&client, settings, surface)?;

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        client
            .deliver_json(line)
            .map_err(|source| ReplayError::Message {
                line: index + 1,
                source,
            })?;
    }

    let poll = settings.ack_delay.max(Duration::from_millis(10));
    let mut waited = Duration::ZERO;
    while component.snapshot().pending_acknowledgments > 0 && waited < MAX_ACK_WAIT {
        tokio::time::sleep(poll).await;
        waited += poll;
    }

    let snapshot = component.snapshot();
    component.unmount();

    let mut messages = Vec::new();
    while let Ok(message) = outbound.try_recv() {
        messages.push(message);
    }
    info!(outbound = messages.len(), "replay finished");

    Ok(ReplayOutcome {
        outbound: messages,
        snapshot,
        chart_page,
    })
}

/// Replay a file and print the outbound messages and final classification.
///
/// # Errors
///
/// Returns an error if the replay fails or the output cannot be encoded.
#[allow(clippy::print_stdout)]
pub async fn replay(
    settings: &LiveSettings,
    file: &Path,
    out_dir: Option<&Path>,
) -> Result<(), ReplayError> {
    let input = tokio::fs::read_to_string(file).await?;
    let outcome = run_replay(settings, &input, out_dir).await?;

    for message in &outcome.outbound {
        println!("{}", serde_json::to_string(message).map_err(LiveError::from)?);
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&outcome.snapshot.classification).map_err(LiveError::from)?
    );
    info!(
        render_state = ?outcome.snapshot.render_state,
        renders = outcome.snapshot.render_count,
        chart_page = ?outcome.chart_page,
        "chart state"
    );
    Ok(())
}
