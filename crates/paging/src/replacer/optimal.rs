use std::cmp::Reverse;

use crate::frame_table::FrameTable;
use crate::typedef::FrameId;

use super::Lookahead;

/// Belady's algorithm: evicts the resident page whose next use lies farthest
/// in the future. A page that is never used again counts as infinitely far,
/// and among several such pages the lowest frame index goes first.
pub(super) fn select(frames: &FrameTable, lookahead: Lookahead<'_>) -> FrameId {
    let future = lookahead.future();

    frames
        .occupied()
        .filter_map(|(frame_id, frame)| {
            let owner = frame.owner()?;
            let next_use = future
                .iter()
                .position(|event| event.same_page(owner.process_id, owner.page_number))
                .unwrap_or(usize::MAX);
            Some((frame_id, next_use))
        })
        .min_by_key(|&(frame_id, next_use)| (Reverse(next_use), frame_id))
        .map(|(frame_id, _)| frame_id)
        .unwrap_or_default()
}
