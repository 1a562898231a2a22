use serde::Serialize;

use crate::typedef::{FrameId, PageNumber, ProcessId, Tick};

/// Residency state of one virtual page. A page is valid exactly when it has a
/// frame, so the flag is derived rather than stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageTableEntry {
    frame: Option<FrameId>,
    dirty: bool,
    referenced: bool,
    last_access_time: Tick,
    load_time: Tick,
}

impl PageTableEntry {
    pub fn frame(&self) -> Option<FrameId> {
        self.frame
    }

    pub fn is_valid(&self) -> bool {
        self.frame.is_some()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_referenced(&self) -> bool {
        self.referenced
    }

    pub fn last_access_time(&self) -> Tick {
        self.last_access_time
    }

    pub fn load_time(&self) -> Tick {
        self.load_time
    }
}

/// A simulated process: its page table and access counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    process_id: ProcessId,
    page_table: Vec<PageTableEntry>,
    page_faults: u64,
    accesses: u64,
}

impl Process {
    pub(crate) fn new(process_id: ProcessId) -> Self {
        Self {
            process_id,
            page_table: Vec::new(),
            page_faults: 0,
            accesses: 0,
        }
    }

    pub fn process_id(&self) -> ProcessId {
        self.process_id
    }

    /// Number of pages this process has touched so far, i.e. one past the
    /// highest page number seen.
    pub fn num_pages(&self) -> usize {
        self.page_table.len()
    }

    pub fn page_faults(&self) -> u64 {
        self.page_faults
    }

    pub fn accesses(&self) -> u64 {
        self.accesses
    }

    pub fn entry(&self, page: PageNumber) -> Option<&PageTableEntry> {
        self.page_table.get(page)
    }

    pub fn entries(&self) -> &[PageTableEntry] {
        &self.page_table
    }

    pub fn lookup(&self, page: PageNumber) -> Option<FrameId> {
        self.page_table.get(page).and_then(|entry| entry.frame)
    }

    pub(crate) fn record_access(&mut self) {
        self.accesses += 1;
    }

    pub(crate) fn record_fault(&mut self) {
        self.page_faults += 1;
    }

    /// Grows the page table so that `page` has an entry.
    pub(crate) fn ensure_page(&mut self, page: PageNumber) {
        if self.page_table.len() <= page {
            self.page_table.resize(page + 1, PageTableEntry::default());
        }
    }

    /// Refreshes a resident page on a hit.
    pub(crate) fn touch(&mut self, page: PageNumber, time: Tick, is_write: bool) {
        let entry = &mut self.page_table[page];
        debug_assert!(entry.is_valid(), "touch on a non-resident page");
        entry.last_access_time = time;
        entry.referenced = true;
        if is_write {
            entry.dirty = true;
        }
    }

    /// Maps `page` into `frame` as a freshly loaded page.
    pub(crate) fn bind(&mut self, page: PageNumber, frame: FrameId, time: Tick, is_write: bool) {
        self.ensure_page(page);
        let entry = &mut self.page_table[page];
        entry.frame = Some(frame);
        entry.load_time = time;
        entry.last_access_time = time;
        entry.referenced = true;
        entry.dirty = is_write;
    }

    pub(crate) fn set_referenced(&mut self, page: PageNumber, referenced: bool) {
        if let Some(entry) = self.page_table.get_mut(page) {
            entry.referenced = referenced;
        }
    }

    /// Drops the mapping of `page` after its frame was taken away.
    pub(crate) fn invalidate(&mut self, page: PageNumber) {
        if let Some(entry) = self.page_table.get_mut(page) {
            entry.frame = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_unknown_page() {
        let process = Process::new(3);
        assert_eq!(process.process_id(), 3);
        assert_eq!(process.lookup(0), None);
        assert_eq!(process.num_pages(), 0);
    }

    #[test]
    fn test_bind() {
        let mut process = Process::new(0);
        process.bind(4, 2, 7, true);

        assert_eq!(process.num_pages(), 5);
        assert_eq!(process.lookup(4), Some(2));
        assert_eq!(process.lookup(3), None);

        let entry = process.entry(4).unwrap();
        assert!(entry.is_valid());
        assert!(entry.is_dirty());
        assert!(entry.is_referenced());
        assert_eq!(entry.load_time(), 7);
        assert_eq!(entry.last_access_time(), 7);
    }

    #[test]
    fn test_rebind_resets_dirty() {
        let mut process = Process::new(0);
        process.bind(0, 0, 1, true);
        process.invalidate(0);
        process.bind(0, 1, 5, false);

        let entry = process.entry(0).unwrap();
        assert_eq!(entry.frame(), Some(1));
        assert!(!entry.is_dirty());
        assert_eq!(entry.load_time(), 5);
    }

    #[test]
    fn test_touch() {
        let mut process = Process::new(0);
        process.bind(1, 0, 1, false);
        process.touch(1, 9, false);
        assert_eq!(process.entry(1).unwrap().last_access_time(), 9);
        assert_eq!(process.entry(1).unwrap().load_time(), 1);
        assert!(!process.entry(1).unwrap().is_dirty());

        process.touch(1, 10, true);
        assert!(process.entry(1).unwrap().is_dirty());
    }

    #[test]
    fn test_set_referenced() {
        let mut process = Process::new(0);
        process.bind(0, 0, 1, false);
        process.set_referenced(0, false);
        assert!(!process.entry(0).unwrap().is_referenced());

        process.touch(0, 2, false);
        assert!(process.entry(0).unwrap().is_referenced());
    }

    #[test]
    fn test_invalidate() {
        let mut process = Process::new(0);
        process.bind(2, 5, 1, false);
        process.invalidate(2);

        let entry = process.entry(2).unwrap();
        assert!(!entry.is_valid());
        assert_eq!(entry.frame(), None);
        assert_eq!(process.lookup(2), None);

        // invalidating a page that was never seen is a no-op
        process.invalidate(100);
        assert_eq!(process.num_pages(), 3);
    }
}
