use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use nr_core::{Credentials, LogEntry, RewrittenArticle};

use crate::log::LogBuffer;

/// Cancellation side of one armed schedule.
///
/// Firing or dropping it ends the schedule task before its next tick. The
/// generation tells apart schedules from successive starts.
#[derive(Debug)]
pub(crate) struct ScheduleHandle {
    generation: u64,
    cancel: oneshot::Sender<()>,
}

impl ScheduleHandle {
    pub(crate) fn new(generation: u64, cancel: oneshot::Sender<()>) -> Self {
        Self { generation, cancel }
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn cancel(self) {
        // The task may already be gone after a self-halt.
        let _ = self.cancel.send(());
    }
}

/// Everything the controller owns. Running is derived from the presence of
/// a schedule handle, so the two can never disagree.
#[derive(Debug)]
pub struct AutomationState {
    pub(crate) schedule: Option<ScheduleHandle>,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) latest: Option<RewrittenArticle>,
    pub(crate) logs: LogBuffer,
}

impl AutomationState {
    pub fn new(log_capacity: usize) -> Self {
        Self {
            schedule: None,
            credentials: None,
            latest: None,
            logs: LogBuffer::new(log_capacity),
        }
    }

    pub fn is_running(&self) -> bool {
        self.schedule.is_some()
    }

    /// Credentials recorded by the most recent start.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn latest(&self) -> Option<&RewrittenArticle> {
        self.latest.as_ref()
    }

    pub fn logs(&self) -> &LogBuffer {
        &self.logs
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.schedule.as_ref().map(ScheduleHandle::generation) == Some(generation)
    }

    pub fn snapshot(&self) -> AutomationStatus {
        AutomationStatus {
            running: self.is_running(),
            logs: self.logs.to_vec(),
            latest: self.latest.clone(),
        }
    }
}

/// Point-in-time copy of the state, as served by the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationStatus {
    #[serde(rename = "isRunning")]
    pub running: bool,
    pub logs: Vec<LogEntry>,
    #[serde(rename = "latestNews")]
    pub latest: Option<RewrittenArticle>,
}
