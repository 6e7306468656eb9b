use std::sync::{Arc, Mutex};

use tracing::info;

use hotelos_shared::constants::COLLECTION_TASKS;
use hotelos_shared::entities::{Task, TaskStatus};

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Persist a task.  The write coordinator stamps `ownerId` with the acting
/// user's id; the view model updates when the tasks subscription redelivers.
pub async fn save_task(state: &Arc<Mutex<AppState>>, task: Task) -> Result<()> {
    let writer = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        guard.profile()?;
        guard.writer()?
    };

    writer.write(COLLECTION_TASKS, &task).await?;
    info!(task = %task.id, "Task saved");
    Ok(())
}

/// Move a task to `status`, mirroring the legacy `done` flag, and re-persist
/// the full document.
pub async fn set_task_status(
    state: &Arc<Mutex<AppState>>,
    id: &str,
    status: TaskStatus,
) -> Result<()> {
    let (writer, mut task) = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        let task = guard
            .view
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ClientError::Invalid(format!("Unknown task: {id}")))?;
        (guard.writer()?, task)
    };

    task.status = status;
    task.done = status == TaskStatus::Done;
    writer.write(COLLECTION_TASKS, &task).await?;
    Ok(())
}

/// Delete a task by id.
pub async fn delete_task(state: &Arc<Mutex<AppState>>, id: &str) -> Result<()> {
    let writer = {
        let guard = state.lock().map_err(|_| ClientError::LockPoisoned)?;
        guard.writer()?
    };
    writer.remove(COLLECTION_TASKS, id).await?;
    info!(task = %id, "Task deleted");
    Ok(())
}
