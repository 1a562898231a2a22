mod fifo;
mod lru;
mod optimal;
mod second_chance;

use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use vmsim_error::{errinput, Error};

use crate::frame_table::FrameTable;
use crate::reference::ReferenceEvent;
use crate::typedef::FrameId;

/// Page replacement policy used when a fault finds no free frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
    SecondChance,
}

impl Policy {
    pub const ALL: [Policy; 4] = [
        Policy::Fifo,
        Policy::Lru,
        Policy::Optimal,
        Policy::SecondChance,
    ];

    /// Stable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
            Policy::SecondChance => "Second Chance",
        }
    }
}

pub fn algorithm_name(policy: Policy) -> &'static str {
    policy.name()
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            "second chance" | "second-chance" | "second_chance" | "secondchance" | "clock" => {
                Ok(Policy::SecondChance)
            }
            _ => errinput!("unknown replacement policy {s:?}"),
        }
    }
}

/// The future the Optimal policy looks into: the full reference sequence and
/// the index of the access currently being served.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lookahead<'a> {
    pub(crate) sequence: &'a [ReferenceEvent],
    pub(crate) position: usize,
}

impl<'a> Lookahead<'a> {
    /// Accesses strictly after the current one.
    pub(crate) fn future(&self) -> &'a [ReferenceEvent] {
        self.sequence.get(self.position + 1..).unwrap_or(&[])
    }
}

/// Picks the frame to evict. Only the reference bits and `clock_hand` are
/// touched, and only by Second-Chance.
///
/// # Panics
///
/// Panics if no frame is occupied. Callers must use a free frame when one
/// exists, and a manager never has zero frames.
pub(crate) fn select_victim(
    policy: Policy,
    frames: &mut FrameTable,
    clock_hand: &mut FrameId,
    lookahead: Option<Lookahead<'_>>,
) -> FrameId {
    assert!(
        frames.occupied_count() > 0,
        "no victim available: frame table has no occupied frames"
    );

    match policy {
        Policy::Fifo => fifo::select(frames),
        Policy::Lru => lru::select(frames),
        Policy::Optimal => match lookahead {
            Some(lookahead) => optimal::select(frames, lookahead),
            None => {
                debug!("no reference sequence for Optimal, falling back to LRU");
                lru::select(frames)
            }
        },
        Policy::SecondChance => second_chance::select(frames, clock_hand),
    }
}
