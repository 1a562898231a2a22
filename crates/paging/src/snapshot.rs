use serde::Serialize;

use crate::frame::Frame;
use crate::page_table::Process;
use crate::replacer::Policy;
use crate::typedef::{FrameId, Tick};

/// Aggregate access statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Stats {
    pub total_accesses: u64,
    pub total_faults: u64,
    /// Percentage of accesses that hit, in `[0, 100]`.
    pub hit_ratio: f64,
}

impl Stats {
    pub fn hits(&self) -> u64 {
        self.total_accesses - self.total_faults
    }

    pub(crate) fn update(&mut self) {
        if self.total_accesses > 0 {
            self.hit_ratio = self.hits() as f64 / self.total_accesses as f64 * 100.0;
        }
    }
}

/// Statistics as seen in a snapshot: the counters plus the clock state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapshotStats {
    pub total_accesses: u64,
    pub total_faults: u64,
    pub hit_ratio: f64,
    pub global_time: Tick,
    pub clock_hand: FrameId,
}

impl SnapshotStats {
    pub(crate) fn new(stats: &Stats, global_time: Tick, clock_hand: FrameId) -> Self {
        Self {
            total_accesses: stats.total_accesses,
            total_faults: stats.total_faults,
            hit_ratio: stats.hit_ratio,
            global_time,
            clock_hand,
        }
    }
}

/// Read-only copy of a manager's state for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub policy: Policy,
    pub frames: Vec<Frame>,
    pub processes: Vec<Process>,
    pub stats: SnapshotStats,
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Memory State ({}) ===", self.policy)?;
        writeln!(f, "Total Accesses: {}", self.stats.total_accesses)?;
        writeln!(f, "Total Page Faults: {}", self.stats.total_faults)?;
        writeln!(f, "Hit Ratio: {:.2}%", self.stats.hit_ratio)?;
        writeln!(f)?;
        writeln!(f, "Physical Memory:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            match frame.owner() {
                Some(owner) => writeln!(
                    f,
                    "Frame {i}: P{}-Page{} (Load: {}, Access: {})",
                    owner.process_id,
                    owner.page_number,
                    frame.load_time(),
                    frame.last_access_time()
                )?,
                None => writeln!(f, "Frame {i}: Empty")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_hit_ratio() {
        let mut stats = Stats::default();
        stats.update();
        assert_eq!(stats.hit_ratio, 0.0);

        stats.total_accesses = 4;
        stats.total_faults = 1;
        stats.update();
        assert_eq!(stats.hits(), 3);
        assert_eq!(stats.hit_ratio, 75.0);
    }

    #[test]
    fn test_snapshot_stats_carry_clock() {
        let stats = Stats {
            total_accesses: 5,
            total_faults: 2,
            hit_ratio: 60.0,
        };
        let view = SnapshotStats::new(&stats, 5, 1);

        assert_eq!(view.total_accesses, 5);
        assert_eq!(view.total_faults, 2);
        assert_eq!(view.hit_ratio, 60.0);
        assert_eq!(view.global_time, 5);
        assert_eq!(view.clock_hand, 1);
    }
}
