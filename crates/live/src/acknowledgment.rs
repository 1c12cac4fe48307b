//! Deferred tool-call acknowledgments.
//!
//! Each non-empty tool-call batch is answered once, after a fixed delay,
//! with a success entry for every call id. The delayed sends are tasks in a
//! [`JoinSet`] owned by the scheduler, so dropping the scheduler or calling
//! [`AckScheduler::abort_all`] guarantees no acknowledgment is sent later.
//! The runtime is captured when the scheduler is created, so batches can be
//! scheduled from threads outside it.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::client::LiveClient;
use crate::protocol::{CallId, ToolResponse};

type PendingBatches = Arc<Mutex<BTreeMap<u64, Vec<CallId>>>>;

/// Schedules delayed tool responses on a live client.
#[derive(Debug)]
pub struct AckScheduler {
    client: LiveClient,
    delay: Duration,
    runtime: Option<Handle>,
    tasks: JoinSet<()>,
    pending: PendingBatches,
    next_batch: u64,
}

impl AckScheduler {
    #[must_use]
    pub fn new(client: LiveClient, delay: Duration) -> Self {
        Self {
            client,
            delay,
            runtime: Handle::try_current().ok(),
            tasks: JoinSet::new(),
            pending: Arc::new(Mutex::new(BTreeMap::new())),
            next_batch: 0,
        }
    }

    /// Schedule one acknowledgment covering `ids`, in order.
    ///
    /// Sends run on the runtime the scheduler was created in, or else the
    /// caller's. Returns `false` without scheduling if `ids` is empty or
    /// neither runtime is available.
    pub fn schedule(&mut self, ids: Vec<CallId>) -> bool {
        if ids.is_empty() {
            return false;
        }
        let Some(handle) = self.runtime.clone().or_else(|| Handle::try_current().ok()) else {
            warn!(calls = ids.len(), "no runtime available, tool calls left unacknowledged");
            return false;
        };

        // Reap finished sends so the set only holds live timers.
        while self.tasks.try_join_next().is_some() {}

        self.next_batch += 1;
        let batch = self.next_batch;
        lock(&self.pending).insert(batch, ids);

        let client = self.client.clone();
        let pending = Arc::clone(&self.pending);
        let delay = self.delay;
        self.tasks.spawn_on(
            async move {
                tokio::time::sleep(delay).await;
                let ids = lock(&pending).remove(&batch);
                let Some(ids) = ids else {
                    debug!(batch, "acknowledgment withdrawn");
                    return;
                };
                let count = ids.len();
                match client.send_tool_response(ToolResponse::success_for(ids)) {
                    Ok(()) => debug!(batch, calls = count, "tool calls acknowledged"),
                    Err(e) => warn!(batch, error = %e, "failed to acknowledge tool calls"),
                }
            },
            &handle,
        );
        true
    }

    /// Drop cancelled ids from pending acknowledgments.
    ///
    /// A batch left with no ids sends nothing. Returns the number of ids
    /// removed.
    pub fn cancel_calls(&self, ids: &[CallId]) -> usize {
        let mut pending = lock(&self.pending);
        let mut removed = 0;
        for batch in pending.values_mut() {
            let before = batch.len();
            batch.retain(|id| !ids.contains(id));
            removed += before - batch.len();
        }
        pending.retain(|_, batch| !batch.is_empty());
        removed
    }

    /// Number of batches waiting to be acknowledged.
    #[must_use]
    pub fn pending_batches(&self) -> usize {
        lock(&self.pending).len()
    }

    /// Abort every pending acknowledgment.
    pub fn abort_all(&mut self) {
        self.tasks.abort_all();
        lock(&self.pending).clear();
    }
}

fn lock(pending: &PendingBatches) -> std::sync::MutexGuard<'_, BTreeMap<u64, Vec<CallId>>> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}
