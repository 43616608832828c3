//! Tokio-backed scheduler.

use super::{Scheduler, Task};
use crate::error::{Result, UnderbarError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::sleep;
use tracing::trace;

/// Scheduler that spawns one sleeping task per registration on a tokio
/// runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Bind to the runtime of the calling context
    pub fn current() -> Result<Self> {
        let handle = Handle::try_current().map_err(|err| {
            UnderbarError::invalid_state(format!("no tokio runtime available: {}", err))
        })?;
        Ok(Self { handle })
    }

    /// Bind to an explicit runtime handle
    pub fn with_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, wait: Duration, task: Task) {
        trace!("Scheduling task in {:?}", wait);
        self.handle.spawn(async move {
            sleep(wait).await;
            task();
        });
    }
}
