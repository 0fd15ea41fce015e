use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Optional settings file. Every key has a default, so an empty file (or no
/// file at all) is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MongoLogsConfig {
    pub profiling: ProfilingConfig,
    pub tail: TailConfig,
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfilingConfig {
    /// Threshold while tailing. 0 records every operation.
    pub slowms: i64,

    /// Threshold restored when profiling is switched off (server default).
    pub reset_slowms: i64,
}

impl Default for ProfilingConfig {
    fn default() -> Self {
        Self {
            slowms: 0,
            reset_slowms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TailConfig {
    /// Pause before reopening a dead tailable cursor.
    pub reopen_delay_ms: u64,
}

impl TailConfig {
    pub fn reopen_delay(&self) -> Duration {
        Duration::from_millis(self.reopen_delay_ms)
    }
}

impl Default for TailConfig {
    fn default() -> Self {
        Self {
            reopen_delay_ms: 500,
        }
    }
}

/// Raw dump selection. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DebugConfig {
    pub op: Option<String>,
    pub namespace: Option<String>,
    pub limit: Option<u64>,
}
