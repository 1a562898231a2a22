//! Demand paging simulator: page tables, a fixed pool of frames and
//! pluggable page replacement.

mod config;
mod frame;
mod frame_table;
mod memory_manager;
mod page_table;
mod reference;
mod replacer;
mod snapshot;
mod trace;
mod typedef;
mod workload;

pub use config::{Limits, DEFAULT_PAGE_SIZE, MAX_PAGES, MAX_PROCESSES, MAX_REFERENCES};
pub use frame::{Frame, Owner};
pub use frame_table::FrameTable;
pub use memory_manager::MemoryManager;
pub use page_table::{PageTableEntry, Process};
pub use reference::{ReferenceEvent, ReferenceSequence};
pub use replacer::{algorithm_name, Policy};
pub use snapshot::{Snapshot, SnapshotStats, Stats};
pub use trace::{Outcome, Step, Trace};
pub use typedef::{FrameId, PageNumber, ProcessId, Tick};
pub use workload::Workload;

pub type Result<T> = std::result::Result<T, vmsim_error::Error>;
