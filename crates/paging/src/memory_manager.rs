use log::{debug, trace};
use vmsim_error::{errinput, Error};

use crate::config::Limits;
use crate::frame::Owner;
use crate::frame_table::FrameTable;
use crate::page_table::Process;
use crate::reference::ReferenceSequence;
use crate::replacer::{select_victim, Lookahead, Policy};
use crate::snapshot::{Snapshot, SnapshotStats, Stats};
use crate::trace::{Outcome, Step, Trace};
use crate::typedef::{FrameId, PageNumber, ProcessId, Tick};
use crate::Result;

/// Demand paging engine. Owns the frames, the processes' page tables, the
/// logical clock and the statistics of one simulation.
#[derive(Debug, Clone)]
pub struct MemoryManager {
    frames: FrameTable,
    processes: Vec<Process>,
    policy: Policy,
    limits: Limits,
    global_time: Tick,
    clock_hand: FrameId,
    stats: Stats,
}

impl MemoryManager {
    pub fn new(num_frames: usize, policy: Policy) -> Result<Self> {
        Self::with_limits(num_frames, policy, Limits::default())
    }

    pub fn with_limits(num_frames: usize, policy: Policy, limits: Limits) -> Result<Self> {
        if num_frames == 0 {
            return errinput!("frame count must be positive");
        }
        debug!("memory manager with {num_frames} frames using {policy}");

        Ok(Self {
            frames: FrameTable::new(num_frames),
            processes: Vec::new(),
            policy,
            limits,
            global_time: 0,
            clock_hand: 0,
            stats: Stats::default(),
        })
    }

    /// Throws away all state and starts over with the given frame count and
    /// policy. On error the current state is kept.
    pub fn reset(&mut self, num_frames: usize, policy: Policy) -> Result<()> {
        *self = Self::with_limits(num_frames, policy, self.limits)?;
        Ok(())
    }

    fn clear(&mut self) {
        self.frames = FrameTable::new(self.frames.len());
        self.processes.clear();
        self.global_time = 0;
        self.clock_hand = 0;
        self.stats = Stats::default();
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    /// Processes seen so far, indexed by id. Ids below the highest seen one
    /// get an empty process.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn process(&self, process_id: ProcessId) -> Option<&Process> {
        self.processes.get(process_id)
    }

    pub fn global_time(&self) -> Tick {
        self.global_time
    }

    pub fn clock_hand(&self) -> FrameId {
        self.clock_hand
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            policy: self.policy,
            frames: self.frames.frames().to_vec(),
            processes: self.processes.clone(),
            stats: SnapshotStats::new(&self.stats, self.global_time, self.clock_hand),
        }
    }

    /// Serves one access and returns the frame now holding the page. Optimal
    /// has no future to look at here and behaves like LRU.
    pub fn access(
        &mut self,
        process_id: ProcessId,
        page_number: PageNumber,
        is_write: bool,
    ) -> Result<FrameId> {
        self.access_with(process_id, page_number, is_write, None)
            .map(|(frame_id, _)| frame_id)
    }

    fn access_with(
        &mut self,
        process_id: ProcessId,
        page_number: PageNumber,
        is_write: bool,
        lookahead: Option<Lookahead<'_>>,
    ) -> Result<(FrameId, Outcome)> {
        if !self.limits.contains(process_id, page_number) {
            return Err(Error::OutOfRange {
                process_id,
                page_number,
            });
        }

        self.global_time += 1;
        let now = self.global_time;
        self.stats.total_accesses += 1;

        if self.processes.len() <= process_id {
            self.processes
                .extend((self.processes.len()..=process_id).map(Process::new));
        }
        let process = &mut self.processes[process_id];
        process.record_access();
        process.ensure_page(page_number);

        if let Some(frame_id) = process.lookup(page_number) {
            trace!("hit: process {process_id} page {page_number} in frame {frame_id}");
            process.touch(page_number, now, is_write);
            self.frames.touch(frame_id, now);
            self.frames.mark_referenced(frame_id);
            self.stats.update();
            return Ok((frame_id, Outcome::Hit));
        }

        process.record_fault();
        self.stats.total_faults += 1;

        let frame_id = match self.frames.find_free() {
            Some(frame_id) => frame_id,
            None => {
                let victim = select_victim(
                    self.policy,
                    &mut self.frames,
                    &mut self.clock_hand,
                    lookahead,
                );
                self.sync_reference_bits();
                victim
            }
        };

        // break the old pairing before making the new one
        let evicted = self.frames.evict(frame_id);
        if let Some(Owner {
            process_id: old_process,
            page_number: old_page,
        }) = evicted
        {
            debug!(
                "evict: process {old_process} page {old_page} from frame {frame_id} ({})",
                self.policy
            );
            self.processes[old_process].invalidate(old_page);
        }

        self.frames.occupy(frame_id, process_id, page_number, now);
        self.processes[process_id].bind(page_number, frame_id, now, is_write);
        debug!("fault: process {process_id} page {page_number} -> frame {frame_id}");

        self.stats.update();
        Ok((frame_id, Outcome::Fault { evicted }))
    }

    /// Copies the frames' reference bits to their owners' page table entries
    /// after a clock sweep cleared some of them.
    fn sync_reference_bits(&mut self) {
        for (_, frame) in self.frames.occupied() {
            if let Some(owner) = frame.owner() {
                self.processes[owner.process_id]
                    .set_referenced(owner.page_number, frame.is_referenced());
            }
        }
    }

    /// Runs a whole reference sequence from a clean slate, with Optimal
    /// looking ahead into the sequence. Out-of-range events are recorded as
    /// rejected and skipped.
    pub fn run_sequence(&mut self, sequence: &ReferenceSequence) -> Trace {
        self.clear();
        debug!(
            "running {} references with {} frames using {}",
            sequence.len(),
            self.frames.len(),
            self.policy
        );

        let events = sequence.events();
        let mut steps = Vec::with_capacity(events.len());
        for (index, event) in events.iter().enumerate() {
            let lookahead = Lookahead {
                sequence: events,
                position: index,
            };
            let (frame, outcome) = match self.access_with(
                event.process_id,
                event.page_number,
                event.is_write,
                Some(lookahead),
            ) {
                Ok((frame_id, outcome)) => (Some(frame_id), outcome),
                Err(err) => {
                    debug!("rejected reference {index}: {err}");
                    (None, Outcome::Rejected(err))
                }
            };

            steps.push(Step {
                index,
                event: *event,
                outcome,
                frame,
                time: self.global_time,
                frames: self.frames.frames().to_vec(),
            });
        }

        Trace {
            steps,
            warning: sequence.truncation(),
        }
    }
}
