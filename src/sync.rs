//! Asynchronous half of the board's network operations.
//!
//! The board decides *what* to send ([`SyncOp`]); this module performs the
//! round trip on a tokio task and hands the outcome back as a [`Completion`]
//! over a channel. The event loop that owns the board drains the channel and
//! calls [`Board::apply`](crate::ops::Board::apply). Once that loop is gone the
//! receiver is dropped and late results are discarded.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use crate::model::{Task, TaskId, TaskPayload};
use crate::remote::{self, TaskGateway};

/// A remote call requested by a board action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOp {
    Create { payload: TaskPayload },
    Update { id: TaskId, payload: TaskPayload },
}

/// Result of a remote call, ready to be applied to the board
#[derive(Debug)]
pub enum Completion {
    Loaded(remote::Result<Vec<Task>>),
    Created(remote::Result<Task>),
    Updated {
        id: TaskId,
        result: remote::Result<Task>,
    },
}

impl Completion {
    /// The gateway failure carried by this completion, if any
    pub fn error(&self) -> Option<&remote::GatewayError> {
        match self {
            Completion::Loaded(Err(e))
            | Completion::Created(Err(e))
            | Completion::Updated { result: Err(e), .. } => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyncError {
    #[error("board is no longer live; result discarded")]
    DiscardedResult,
    #[error("seed tasks were already requested")]
    AlreadySeeded,
}

/// Run one remote call for `op`
pub async fn execute(gateway: &dyn TaskGateway, op: SyncOp) -> Completion {
    match op {
        SyncOp::Create { payload } => Completion::Created(gateway.create_task(&payload).await),
        SyncOp::Update { id, payload } => Completion::Updated {
            id,
            result: gateway.update_task(id, &payload).await,
        },
    }
}

/// Spawns remote calls and routes their results back to the board loop
#[derive(Clone)]
pub struct SyncDispatcher {
    gateway: Arc<dyn TaskGateway>,
    tx: UnboundedSender<Completion>,
    in_flight: Arc<AtomicUsize>,
    seeded: Arc<AtomicBool>,
}

impl SyncDispatcher {
    pub fn new(gateway: Arc<dyn TaskGateway>) -> (Self, UnboundedReceiver<Completion>) {
        let (tx, rx) = unbounded_channel();
        let dispatcher = SyncDispatcher {
            gateway,
            tx,
            in_flight: Arc::new(AtomicUsize::new(0)),
            seeded: Arc::new(AtomicBool::new(false)),
        };
        (dispatcher, rx)
    }

    /// Number of remote calls that have not resolved yet
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Fetch the seed tasks. Only the first call per dispatcher does anything.
    pub fn load_seed(&self, limit: usize) -> Result<JoinHandle<Result<(), SyncError>>, SyncError> {
        if self.seeded.swap(true, Ordering::SeqCst) {
            tracing::warn!("seed load requested twice; ignoring");
            return Err(SyncError::AlreadySeeded);
        }
        let gateway = Arc::clone(&self.gateway);
        Ok(self.spawn("load", async move {
            Completion::Loaded(gateway.fetch_seed_tasks(limit).await)
        }))
    }

    /// Perform `op` in the background. Calls are not serialized against each
    /// other; each result applies to whatever the board looks like when it
    /// arrives.
    pub fn dispatch(&self, op: SyncOp) -> JoinHandle<Result<(), SyncError>> {
        let gateway = Arc::clone(&self.gateway);
        let label = match op {
            SyncOp::Create { .. } => "create",
            SyncOp::Update { .. } => "update",
        };
        self.spawn(label, async move { execute(gateway.as_ref(), op).await })
    }

    fn spawn<F>(&self, label: &'static str, call: F) -> JoinHandle<Result<(), SyncError>>
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        let tx = self.tx.clone();
        let in_flight = Arc::clone(&self.in_flight);
        in_flight.fetch_add(1, Ordering::SeqCst);
        tokio::spawn(async move {
            let completion = call.await;
            in_flight.fetch_sub(1, Ordering::SeqCst);
            let delivered = tx.send(completion).map_err(|_| SyncError::DiscardedResult);
            if let Err(ref e) = delivered {
                tracing::debug!(op = label, error = %e, "dropping late result");
            }
            delivered
        })
    }
}
