//! Scheduler - one ordered event queue for timers and keyboard input
//!
//! Gravity ticks, redraw ticks and key commands all go through the same
//! queue and come out one at a time in `(due time, arrival order)` order, so
//! the game state is only ever touched by one handler at a time.
//!
//! Periodic timers keep their phase. When the host falls behind, missed
//! periods are dropped rather than replayed in a burst.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::types::GameAction;

/// Handle to a periodic timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(usize);

/// What a periodic timer is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Gravity,
    Redraw,
}

/// An event handed out by [`Scheduler::pop_due`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Timer(TimerKind),
    Input(GameAction),
}

/// A delivered event together with the instant it was due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Due {
    pub at_ms: u64,
    pub event: Event,
}

#[derive(Debug, Clone)]
struct Timer {
    kind: TimerKind,
    period_ms: u64,
    generation: u32,
    active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Payload {
    Timer { id: usize, generation: u32 },
    Input(GameAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    at_ms: u64,
    seq: u64,
    payload: Payload,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.at_ms, self.seq).cmp(&(other.at_ms, other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-threaded event queue
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    timers: Vec<Timer>,
    queue: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, at_ms: u64, payload: Payload) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.queue.push(Reverse(Entry {
            at_ms,
            seq,
            payload,
        }));
    }

    /// Register a periodic timer whose first firing is one period after `now_ms`.
    ///
    /// A zero period is treated as 1 ms.
    pub fn every(&mut self, kind: TimerKind, period_ms: u64, now_ms: u64) -> TimerId {
        let id = self.timers.len();
        let period_ms = period_ms.max(1);
        self.timers.push(Timer {
            kind,
            period_ms,
            generation: 0,
            active: true,
        });
        self.push(now_ms + period_ms, Payload::Timer { id, generation: 0 });
        TimerId(id)
    }

    /// Restart a timer's phase so its next firing is one period after `now_ms`.
    ///
    /// Re-activates a cancelled timer.
    pub fn rearm(&mut self, timer: TimerId, now_ms: u64) {
        let Some(t) = self.timers.get_mut(timer.0) else {
            return;
        };
        t.generation = t.generation.wrapping_add(1);
        t.active = true;
        let (period_ms, generation) = (t.period_ms, t.generation);
        self.push(
            now_ms + period_ms,
            Payload::Timer {
                id: timer.0,
                generation,
            },
        );
    }

    /// Stop a timer. Already queued firings are discarded.
    pub fn cancel(&mut self, timer: TimerId) {
        if let Some(t) = self.timers.get_mut(timer.0) {
            t.generation = t.generation.wrapping_add(1);
            t.active = false;
        }
    }

    pub fn is_active(&self, timer: TimerId) -> bool {
        self.timers.get(timer.0).map(|t| t.active).unwrap_or(false)
    }

    /// Queue a keyboard command arriving at `now_ms`
    pub fn push_input(&mut self, action: GameAction, now_ms: u64) {
        self.push(now_ms, Payload::Input(action));
    }

    /// Cancel every timer and drop all queued events
    pub fn clear(&mut self) {
        for t in &mut self.timers {
            t.generation = t.generation.wrapping_add(1);
            t.active = false;
        }
        self.queue.clear();
    }

    /// Earliest instant something may be due, if anything is queued
    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(e)| e.at_ms)
    }

    /// Take the next event due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Due> {
        loop {
            let Reverse(entry) = *self.queue.peek()?;
            if entry.at_ms > now_ms {
                return None;
            }
            self.queue.pop();

            match entry.payload {
                Payload::Input(action) => {
                    return Some(Due {
                        at_ms: entry.at_ms,
                        event: Event::Input(action),
                    });
                }
                Payload::Timer { id, generation } => {
                    let Some(t) = self.timers.get(id) else {
                        continue;
                    };
                    if !t.active || t.generation != generation {
                        continue;
                    }
                    let (kind, period_ms) = (t.kind, t.period_ms);
                    let mut next = entry.at_ms + period_ms;
                    if next < now_ms {
                        next += (now_ms - next).div_ceil(period_ms) * period_ms;
                    }
                    self.push(next, Payload::Timer { id, generation });
                    return Some(Due {
                        at_ms: entry.at_ms,
                        event: Event::Timer(kind),
                    });
                }
            }
        }
    }
}
