use serde::{Deserialize, Serialize};

pub const MAX_PROCESSES: usize = 10;
pub const MAX_PAGES: usize = 256;
pub const MAX_REFERENCES: usize = 500_000;
pub const DEFAULT_PAGE_SIZE: usize = 4096;

/// Upper bounds on what a single simulation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Process ids must fall in `[0, max_processes)`.
    pub max_processes: usize,
    /// Page numbers must fall in `[0, max_pages)`.
    pub max_pages: usize,
    /// Capacity of a generated reference sequence.
    pub max_references: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_processes: MAX_PROCESSES,
            max_pages: MAX_PAGES,
            max_references: MAX_REFERENCES,
        }
    }
}

impl Limits {
    pub fn contains(&self, process_id: usize, page_number: usize) -> bool {
        process_id < self.max_processes && page_number < self.max_pages
    }
}
