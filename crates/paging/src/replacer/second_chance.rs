use crate::frame_table::FrameTable;
use crate::typedef::FrameId;

/// Clock algorithm. Starting at `clock_hand`, a referenced frame has its bit
/// cleared and is skipped; the first unreferenced frame is the victim and the
/// hand is left just past it. Free frames are stepped over.
///
/// At least one frame must be occupied, so the scan ends within two laps.
pub(super) fn select(frames: &mut FrameTable, clock_hand: &mut FrameId) -> FrameId {
    let num_frames = frames.len();
    let mut frame_id = *clock_hand % num_frames;

    loop {
        let (free, referenced) = match frames.get(frame_id) {
            Some(frame) => (frame.is_free(), frame.is_referenced()),
            None => (true, false),
        };
        let next = (frame_id + 1) % num_frames;

        if !free {
            if !referenced {
                *clock_hand = next;
                return frame_id;
            }
            frames.clear_referenced(frame_id);
        }
        frame_id = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_table(num_frames: usize) -> FrameTable {
        let mut frames = FrameTable::new(num_frames);
        for frame_id in 0..num_frames {
            frames.occupy(frame_id, 0, frame_id, frame_id as u64 + 1);
        }
        frames
    }

    #[test]
    fn test_unreferenced_at_hand_is_victim() {
        let mut frames = full_table(3);
        frames.clear_referenced(1);
        let mut hand = 1;

        assert_eq!(select(&mut frames, &mut hand), 1);
        assert_eq!(hand, 2);
    }

    #[test]
    fn test_all_referenced_goes_around_once() {
        let mut frames = full_table(2);
        let mut hand = 0;

        assert_eq!(select(&mut frames, &mut hand), 0);
        assert_eq!(hand, 1);
        assert!(!frames.get(0).unwrap().is_referenced());
        assert!(!frames.get(1).unwrap().is_referenced());
    }

    #[test]
    fn test_referenced_frames_get_second_chance() {
        let mut frames = full_table(3);
        frames.clear_referenced(2);
        let mut hand = 0;

        assert_eq!(select(&mut frames, &mut hand), 2);
        assert_eq!(hand, 0);
        assert!(!frames.get(0).unwrap().is_referenced());
        assert!(!frames.get(1).unwrap().is_referenced());
    }

    #[test]
    fn test_hand_wraps() {
        let mut frames = full_table(3);
        frames.clear_referenced(0);
        let mut hand = 2;

        assert_eq!(select(&mut frames, &mut hand), 0);
        assert_eq!(hand, 1);
        assert!(!frames.get(2).unwrap().is_referenced());
    }
}
