use serde::Serialize;

use crate::typedef::{PageNumber, ProcessId, Tick};

/// The (process, page) pair that currently occupies a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Owner {
    pub process_id: ProcessId,
    pub page_number: PageNumber,
}

impl Owner {
    pub fn new(process_id: ProcessId, page_number: PageNumber) -> Self {
        Self {
            process_id,
            page_number,
        }
    }
}

/// One slot of simulated physical memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Frame {
    owner: Option<Owner>,
    load_time: Tick,
    last_access_time: Tick,
    referenced: bool,
}

impl Frame {
    /// Creates an empty frame.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self) -> Option<Owner> {
        self.owner
    }

    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }

    pub fn load_time(&self) -> Tick {
        self.load_time
    }

    pub fn last_access_time(&self) -> Tick {
        self.last_access_time
    }

    pub fn is_referenced(&self) -> bool {
        self.referenced
    }

    pub(crate) fn set_referenced(&mut self, referenced: bool) {
        self.referenced = referenced;
    }

    pub(crate) fn touch(&mut self, time: Tick) {
        self.last_access_time = time;
    }

    /// Loads `owner` into the frame at `time`.
    pub(crate) fn load(&mut self, owner: Owner, time: Tick) {
        self.owner = Some(owner);
        self.load_time = time;
        self.last_access_time = time;
        self.referenced = true;
    }

    /// Empties the frame and returns whoever was in it.
    pub(crate) fn reset(&mut self) -> Option<Owner> {
        let owner = self.owner.take();
        self.load_time = 0;
        self.last_access_time = 0;
        self.referenced = false;
        owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_free() {
        let frame = Frame::new();
        assert!(frame.is_free());
        assert_eq!(frame.owner(), None);
        assert!(!frame.is_referenced());
    }

    #[test]
    fn test_load_and_reset() {
        let mut frame = Frame::new();
        frame.load(Owner::new(1, 2), 5);

        assert!(!frame.is_free());
        assert_eq!(frame.owner(), Some(Owner::new(1, 2)));
        assert_eq!(frame.load_time(), 5);
        assert_eq!(frame.last_access_time(), 5);
        assert!(frame.is_referenced());

        assert_eq!(frame.reset(), Some(Owner::new(1, 2)));
        assert!(frame.is_free());
        assert_eq!(frame.reset(), None);
    }

    #[test]
    fn test_touch() {
        let mut frame = Frame::new();
        frame.load(Owner::new(0, 0), 1);
        frame.set_referenced(false);

        frame.touch(4);
        assert_eq!(frame.load_time(), 1);
        assert_eq!(frame.last_access_time(), 4);
        assert!(!frame.is_referenced());
    }
}
