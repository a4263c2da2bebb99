pub mod error;
pub mod http;

use async_trait::async_trait;

use crate::model::{Task, TaskId, TaskPayload};

pub use error::{GatewayError, Result};
pub use http::HttpGateway;

/// The three calls the board makes against the remote task service.
///
/// Each is a single best-effort round trip. Delete and completion toggles
/// have no remote counterpart.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// `GET /todos?_limit={limit}`
    async fn fetch_seed_tasks(&self, limit: usize) -> Result<Vec<Task>>;

    /// `POST /todos`; the server assigns the id
    async fn create_task(&self, payload: &TaskPayload) -> Result<Task>;

    /// `PUT /todos/{id}`; the server echoes the updated fields
    async fn update_task(&self, id: TaskId, payload: &TaskPayload) -> Result<Task>;
}
