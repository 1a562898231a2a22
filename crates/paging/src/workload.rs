use log::debug;
use serde::{Deserialize, Serialize};
use vmsim_error::errinput;

use crate::config::{Limits, DEFAULT_PAGE_SIZE};
use crate::reference::{ReferenceEvent, ReferenceSequence};
use crate::Result;

/// A batch workload: processes of a given size (in KiB) that each touch all
/// of their pages once, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Page size in bytes.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    pub process_sizes_kb: Vec<usize>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            process_sizes_kb: Vec::new(),
        }
    }
}

impl Workload {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            process_sizes_kb: Vec::new(),
        }
    }

    pub fn with_process(mut self, size_kb: usize) -> Self {
        self.process_sizes_kb.push(size_kb);
        self
    }

    /// Number of pages a process of `size_kb` KiB spans. Saturates for sizes
    /// past `usize::MAX` bytes; a zero page size spans nothing.
    pub fn pages_for(&self, size_kb: usize) -> usize {
        size_kb
            .saturating_mul(1024)
            .checked_div(self.page_size)
            .unwrap_or(0)
    }

    /// Expands the workload into a reference sequence bounded by
    /// `limits.max_references`. Overflow truncates rather than fails.
    pub fn generate(&self, limits: &Limits) -> Result<ReferenceSequence> {
        if self.page_size == 0 {
            return errinput!("page size must be positive");
        }
        if self.process_sizes_kb.is_empty() {
            return errinput!("workload has no processes");
        }
        if self.process_sizes_kb.len() > limits.max_processes {
            return errinput!(
                "workload has {} processes, at most {} allowed",
                self.process_sizes_kb.len(),
                limits.max_processes
            );
        }

        let mut sequence = ReferenceSequence::with_capacity(limits.max_references);
        'processes: for (process_id, &size_kb) in self.process_sizes_kb.iter().enumerate() {
            for page_number in 0..self.pages_for(size_kb) {
                if !sequence.push(ReferenceEvent::read(process_id, page_number)) {
                    break 'processes;
                }
            }
        }

        // generation stops at the first rejected event; count everything that was cut
        if sequence.is_truncated() {
            let requested: usize = self
                .process_sizes_kb
                .iter()
                .map(|&size_kb| self.pages_for(size_kb))
                .fold(0, usize::saturating_add);
            sequence.set_dropped(requested - sequence.len());
        }

        debug!(
            "generated {} references for {} processes",
            sequence.len(),
            self.process_sizes_kb.len()
        );
        Ok(sequence)
    }
}
