use log::warn;
use serde::{Deserialize, Serialize};
use vmsim_error::Error;

use crate::typedef::{PageNumber, ProcessId};

/// A single page access in a reference sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceEvent {
    pub process_id: ProcessId,
    pub page_number: PageNumber,
    #[serde(default)]
    pub is_write: bool,
}

impl ReferenceEvent {
    pub fn read(process_id: ProcessId, page_number: PageNumber) -> Self {
        Self {
            process_id,
            page_number,
            is_write: false,
        }
    }

    pub fn write(process_id: ProcessId, page_number: PageNumber) -> Self {
        Self {
            process_id,
            page_number,
            is_write: true,
        }
    }

    pub(crate) fn same_page(&self, process_id: ProcessId, page_number: PageNumber) -> bool {
        self.process_id == process_id && self.page_number == page_number
    }
}

/// An ordered, bounded sequence of future accesses. Events pushed past the
/// capacity are dropped and counted instead of growing the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSequence {
    events: Vec<ReferenceEvent>,
    capacity: usize,
    dropped: usize,
}

impl ReferenceSequence {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            capacity,
            dropped: 0,
        }
    }

    pub fn from_events<I>(events: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = ReferenceEvent>,
    {
        let mut sequence = Self::with_capacity(capacity);
        for event in events {
            sequence.push(event);
        }
        sequence
    }

    /// Appends `event`, returning false if the sequence is already full.
    pub fn push(&mut self, event: ReferenceEvent) -> bool {
        if self.events.len() >= self.capacity {
            if self.dropped == 0 {
                warn!(
                    "reference sequence full at {} events, dropping further events",
                    self.capacity
                );
            }
            self.dropped += 1;
            return false;
        }
        self.events.push(event);
        true
    }

    pub(crate) fn set_dropped(&mut self, dropped: usize) {
        self.dropped = dropped;
    }

    pub fn events(&self) -> &[ReferenceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }

    /// The truncation warning, if any events were dropped.
    pub fn truncation(&self) -> Option<Error> {
        self.is_truncated().then(|| Error::SequenceTruncated {
            capacity: self.capacity,
            dropped: self.dropped,
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceEvent> {
        self.events.iter()
    }
}

impl<'a> IntoIterator for &'a ReferenceSequence {
    type Item = &'a ReferenceEvent;
    type IntoIter = std::slice::Iter<'a, ReferenceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
