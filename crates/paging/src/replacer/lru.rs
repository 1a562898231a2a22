use crate::frame_table::FrameTable;
use crate::typedef::FrameId;

/// Evicts the least recently used occupied frame. Ties go to the lowest index.
pub(super) fn select(frames: &FrameTable) -> FrameId {
    frames
        .occupied()
        .min_by_key(|(_, frame)| frame.last_access_time())
        .map(|(frame_id, _)| frame_id)
        .unwrap_or_default()
}
