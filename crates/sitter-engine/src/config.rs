//! Tunables shared by the booking guards and span search.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Days scanned from the start day when looking for the next free span.
    pub scan_horizon_days: u32,
    /// Pets assumed for a request that does not say.
    pub default_pet_count: u32,
    /// Refuse requests whose start day is before "today".
    pub reject_past_dates: bool,
    /// Fold overlapping/adjacent availability blocks instead of rejecting them.
    pub merge_adjacent_slots: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            scan_horizon_days: 60,
            default_pet_count: 1,
            reject_past_dates: true,
            merge_adjacent_slots: false,
        }
    }
}
