use serde::Serialize;
use vmsim_error::Error;

use crate::frame::{Frame, Owner};
use crate::reference::ReferenceEvent;
use crate::typedef::{FrameId, Tick};

/// What happened to one access.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Outcome {
    Hit,
    /// The page was loaded; `evicted` is the page that made room for it.
    Fault { evicted: Option<Owner> },
    /// The access was refused and left no trace in memory.
    Rejected(Error),
}

impl Outcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit)
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Outcome::Fault { .. })
    }
}

/// One step of a batch run, with the frame table as it stood afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub index: usize,
    pub event: ReferenceEvent,
    pub outcome: Outcome,
    pub frame: Option<FrameId>,
    pub time: Tick,
    pub frames: Vec<Frame>,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ReferenceEvent {
            process_id,
            page_number,
            ..
        } = self.event;

        match (&self.outcome, self.frame) {
            (Outcome::Hit, _) => write!(
                f,
                "Access:   Process {process_id} Page {page_number} (In Memory)"
            ),
            (Outcome::Fault { evicted }, Some(frame)) => {
                if let Some(old) = evicted {
                    writeln!(
                        f,
                        "Page-Out: Process {} Page {} from Frame {frame}",
                        old.process_id, old.page_number
                    )?;
                }
                write!(
                    f,
                    "Page-In:  Process {process_id} Page {page_number} -> Frame {frame}"
                )
            }
            (Outcome::Fault { .. }, None) => write!(
                f,
                "Page-In:  Process {process_id} Page {page_number} -> no frame"
            ),
            (Outcome::Rejected(err), _) => write!(f, "Rejected: {err}"),
        }
    }
}

/// The result of running a reference sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trace {
    pub steps: Vec<Step>,
    /// Set when the sequence had to drop events.
    pub warning: Option<Error>,
}

impl Trace {
    pub fn hits(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_hit()).count()
    }

    pub fn faults(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_fault()).count()
    }

    /// The per-step log lines joined into one string.
    pub fn log(&self) -> String {
        let mut out = String::new();
        if let Some(warning) = &self.warning {
            out.push_str(&format!("Warning: {warning}\n"));
        }
        for step in &self.steps {
            out.push_str(&format!("{step}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(outcome: Outcome, frame: Option<FrameId>) -> Step {
        Step {
            index: 0,
            event: ReferenceEvent::read(1, 2),
            outcome,
            frame,
            time: 1,
            frames: Vec::new(),
        }
    }

    #[test]
    fn test_hit_line() {
        let s = step(Outcome::Hit, Some(0));
        assert_eq!(s.to_string(), "Access:   Process 1 Page 2 (In Memory)");
    }

    #[test]
    fn test_fault_lines() {
        let s = step(Outcome::Fault { evicted: None }, Some(3));
        assert_eq!(s.to_string(), "Page-In:  Process 1 Page 2 -> Frame 3");

        let s = step(
            Outcome::Fault {
                evicted: Some(Owner::new(0, 7)),
            },
            Some(3),
        );
        assert_eq!(
            s.to_string(),
            "Page-Out: Process 0 Page 7 from Frame 3\nPage-In:  Process 1 Page 2 -> Frame 3"
        );
    }

    #[test]
    fn test_rejected_line() {
        let s = step(
            Outcome::Rejected(Error::OutOfRange {
                process_id: 1,
                page_number: 2,
            }),
            None,
        );
        assert_eq!(s.to_string(), "Rejected: process 1 page 2 is out of range");
    }

    #[test]
    fn test_trace_counts_and_log() {
        let trace = Trace {
            steps: vec![
                step(Outcome::Fault { evicted: None }, Some(0)),
                step(Outcome::Hit, Some(0)),
            ],
            warning: Some(Error::SequenceTruncated {
                capacity: 2,
                dropped: 1,
            }),
        };
        assert_eq!(trace.hits(), 1);
        assert_eq!(trace.faults(), 1);
        assert_eq!(
            trace.log(),
            "Warning: reference sequence truncated at 2 events, 1 dropped\n\
             Page-In:  Process 1 Page 2 -> Frame 0\n\
             Access:   Process 1 Page 2 (In Memory)\n"
        );
    }
}
