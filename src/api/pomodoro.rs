//! Statistics collaborator for the Pomodoro session engine.
//!
//! Two operations: fetch the aggregate snapshot and submit a completed
//! session. Submission is the engine's only asynchronous side-effect and
//! is invoked fire-and-forget by the runner; callers here see plain
//! `Result`s, the no-retry policy lives at the call site.

use serde::Deserialize;

use super::{ApiClient, ApiError};
use crate::libs::pomodoro::CompletedSession;

const STATS_URL: &str = "/api/pomodoro/stats";
const SESSIONS_URL: &str = "/api/pomodoro";

/// Server-owned aggregate statistics; read-only for the engine.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    /// Work sessions completed today.
    pub today: u32,
    /// Work sessions completed all-time.
    pub total_pomodoros: u32,
    /// Accumulated work time in minutes.
    pub total_work_time: u32,
}

impl ApiClient {
    pub async fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError> {
        self.get(STATS_URL).await
    }

    /// Reports a finished session. The response body carries no contract
    /// beyond success or failure, so it is discarded.
    pub async fn submit_session(&self, session: &CompletedSession) -> Result<(), ApiError> {
        self.post::<_, serde_json::Value>(SESSIONS_URL, session).await?;
        Ok(())
    }
}
