use serde::{Deserialize, Serialize};

/// Per-epoch record assembled by the driver loop.
///
/// Serializable so a run can emit one machine-readable line per epoch
/// alongside the human-readable log output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Samples visited in this epoch.
    pub samples: usize,
    /// Mean squared output error over the epoch.
    pub mean_error: f32,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
