pub type FrameId = usize;
pub type ProcessId = usize;
pub type PageNumber = usize;

/// Logical clock value. Advanced once per access, never wall-clock.
pub type Tick = u64;
