//! Counting barrier used to hand off between pipeline phases.
//!
//! A [`PhaseBarrier`] blocks each caller of [`PhaseBarrier::wait`] until
//! `parties` callers have arrived, then releases all of them at once. Exactly
//! one of the released callers is reported as the leader, which the pipeline
//! uses to log the phase transition once. The barrier resets after each
//! release and can be reused.
//!
//! Waiting has no timeout: a party that never arrives stalls every other
//! party.

use parking_lot::{Condvar, Mutex};

#[derive(Debug)]
struct BarrierState {
    arrived: usize,
    generation: u64,
}

/// A reusable counting barrier for a fixed number of parties.
#[derive(Debug)]
pub struct PhaseBarrier {
    name: &'static str,
    parties: usize,
    state: Mutex<BarrierState>,
    released: Condvar,
}

/// Returned from [`PhaseBarrier::wait`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseWaitResult {
    is_leader: bool,
}

impl PhaseWaitResult {
    /// Whether this caller was the last to arrive.
    pub fn is_leader(&self) -> bool {
        self.is_leader
    }
}

impl PhaseBarrier {
    /// Create a barrier that releases once `parties` callers have arrived.
    ///
    /// A barrier with zero parties never blocks.
    pub fn new(name: &'static str, parties: usize) -> Self {
        Self {
            name,
            parties,
            state: Mutex::new(BarrierState {
                arrived: 0,
                generation: 0,
            }),
            released: Condvar::new(),
        }
    }

    /// Phase name, used in log messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of parties this barrier waits for.
    pub fn parties(&self) -> usize {
        self.parties
    }

    /// Block until all parties have arrived.
    pub fn wait(&self) -> PhaseWaitResult {
        let mut state = self.state.lock();
        state.arrived += 1;

        if state.arrived >= self.parties {
            state.arrived = 0;
            state.generation = state.generation.wrapping_add(1);
            self.released.notify_all();
            return PhaseWaitResult { is_leader: true };
        }

        let generation = state.generation;
        while state.generation == generation {
            self.released.wait(&mut state);
        }

        PhaseWaitResult { is_leader: false }
    }
}
