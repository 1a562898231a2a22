use crate::frame::{Frame, Owner};
use crate::typedef::{FrameId, PageNumber, ProcessId, Tick};

/// Fixed-size array of physical frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    frames: Vec<Frame>,
}

impl FrameTable {
    pub(crate) fn new(num_frames: usize) -> Self {
        let mut frames = Vec::with_capacity(num_frames);
        frames.resize_with(num_frames, Frame::new);
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, frame_id: FrameId) -> Option<&Frame> {
        self.frames.get(frame_id)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Iterates over occupied frames in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (FrameId, &Frame)> {
        self.frames
            .iter()
            .enumerate()
            .filter(|(_, frame)| !frame.is_free())
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    /// Lowest-indexed free frame, if any.
    pub fn find_free(&self) -> Option<FrameId> {
        self.frames.iter().position(Frame::is_free)
    }

    pub(crate) fn occupy(
        &mut self,
        frame_id: FrameId,
        process_id: ProcessId,
        page_number: PageNumber,
        time: Tick,
    ) {
        self.frames[frame_id].load(Owner::new(process_id, page_number), time);
    }

    /// Frees the slot and hands back the previous owner so its page table
    /// entry can be invalidated.
    pub(crate) fn evict(&mut self, frame_id: FrameId) -> Option<Owner> {
        self.frames[frame_id].reset()
    }

    pub(crate) fn touch(&mut self, frame_id: FrameId, time: Tick) {
        self.frames[frame_id].touch(time);
    }

    pub(crate) fn mark_referenced(&mut self, frame_id: FrameId) {
        self.frames[frame_id].set_referenced(true);
    }

    pub(crate) fn clear_referenced(&mut self, frame_id: FrameId) {
        self.frames[frame_id].set_referenced(false);
    }
}
