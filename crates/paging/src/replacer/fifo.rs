use crate::frame_table::FrameTable;
use crate::typedef::FrameId;

/// Evicts the occupied frame that was loaded first. Ties go to the lowest index.
pub(super) fn select(frames: &FrameTable) -> FrameId {
    frames
        .occupied()
        .min_by_key(|(_, frame)| frame.load_time())
        .map(|(frame_id, _)| frame_id)
        .unwrap_or_default()
}
