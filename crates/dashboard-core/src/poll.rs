//! Poll Loop
//!
//! Refresh state machine shared by the dashboard and insights views.
//!
//! The loop never performs I/O. Callers ask it for a [`Ticket`] when a refresh
//! is wanted, run the fetch, then report back with [`PollLoop::resolve`] and,
//! after drawing, [`PollLoop::rendered`]. Both may hand back a follow-up ticket
//! that must be fetched next.
//!
//! Every acknowledged mutation and every filter change starts a new epoch.
//! A response whose request went out in an older epoch is never drawn: it
//! either reflects server data from before the mutation or a query the user
//! has since replaced.

use std::collections::BTreeMap;

use crate::config::FetchPolicy;

/// Why a refresh was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// First load when the view mounts
    Startup,
    /// Repeating timer
    Tick,
    /// Location filter changed
    FilterChange,
    /// An add/edit/delete was acknowledged by the server
    Mutation,
    /// Refresh button
    Manual,
}

impl Trigger {
    pub fn is_user_initiated(self) -> bool {
        matches!(self, Trigger::FilterChange | Trigger::Mutation | Trigger::Manual)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPhase {
    Idle,
    Fetching,
    Rendering,
}

/// Handle for one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    /// Issue order, starting at 1
    pub seq: u64,
    /// Epoch at issue time
    pub epoch: u64,
    pub trigger: Trigger,
}

/// What to do with a fetch result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Draw the response, then call [`PollLoop::rendered`]
    Render,
    /// Fetch failed; fetch `follow_up` next if present
    Failed { follow_up: Option<Ticket> },
    /// Issued before the current epoch; drop it and fetch `follow_up` next if present
    Superseded { follow_up: Option<Ticket> },
    /// Not a ticket this loop is waiting on (stopped, or resolved twice)
    Ignored,
}

#[derive(Debug)]
pub struct PollLoop {
    policy: FetchPolicy,
    next_seq: u64,
    /// Bumped on every acknowledged mutation and filter change
    epoch: u64,
    /// seq -> epoch of requests still in flight
    in_flight: BTreeMap<u64, u64>,
    rendering: Option<Ticket>,
    pending: Option<Trigger>,
    last_rendered: Option<Ticket>,
    stopped: bool,
}

impl PollLoop {
    pub fn new(policy: FetchPolicy) -> Self {
        Self {
            policy,
            next_seq: 1,
            epoch: 0,
            in_flight: BTreeMap::new(),
            rendering: None,
            pending: None,
            last_rendered: None,
            stopped: false,
        }
    }

    pub fn phase(&self) -> PollPhase {
        if self.rendering.is_some() {
            PollPhase::Rendering
        } else if !self.in_flight.is_empty() {
            PollPhase::Fetching
        } else {
            PollPhase::Idle
        }
    }

    /// Ticket of the response currently on screen
    pub fn last_rendered(&self) -> Option<Ticket> {
        self.last_rendered
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Request a refresh. Returns the ticket to fetch now, or `None` when the
    /// trigger was folded into a later fetch.
    pub fn trigger(&mut self, trigger: Trigger) -> Option<Ticket> {
        if self.stopped {
            return None;
        }
        if matches!(trigger, Trigger::Mutation | Trigger::FilterChange) {
            self.epoch += 1;
        }

        let busy = match self.policy {
            FetchPolicy::Coalesce => self.phase() != PollPhase::Idle,
            FetchPolicy::Concurrent => self.rendering.is_some(),
        };
        if busy {
            log::debug!("[POLL] {:?} deferred, phase {:?}", trigger, self.phase());
            self.pending = Some(trigger);
            return None;
        }
        Some(self.issue(trigger))
    }

    /// Report the outcome of the fetch for `ticket`.
    pub fn resolve(&mut self, ticket: Ticket, ok: bool) -> Resolution {
        if self.stopped || self.in_flight.remove(&ticket.seq).is_none() {
            return Resolution::Ignored;
        }

        if ticket.epoch < self.epoch {
            let covered = self.in_flight.values().any(|e| *e == self.epoch)
                || self.last_rendered.is_some_and(|t| t.epoch == self.epoch);
            log::debug!("[POLL] #{} predates epoch {}, dropped", ticket.seq, self.epoch);
            if !covered {
                self.pending.get_or_insert(ticket.trigger);
            }
            return Resolution::Superseded { follow_up: self.flush_pending() };
        }

        if ok {
            self.rendering = Some(ticket);
            Resolution::Render
        } else {
            log::debug!("[POLL] #{} failed", ticket.seq);
            Resolution::Failed { follow_up: self.flush_pending() }
        }
    }

    /// The response for the current [`Resolution::Render`] is on screen.
    pub fn rendered(&mut self) -> Option<Ticket> {
        let ticket = self.rendering.take()?;
        self.last_rendered = Some(ticket);
        if self.stopped {
            return None;
        }
        self.flush_pending()
    }

    /// Stop issuing tickets. Outstanding responses are ignored.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.in_flight.clear();
        self.pending = None;
    }

    pub fn start(&mut self) {
        self.stopped = false;
    }

    fn flush_pending(&mut self) -> Option<Ticket> {
        let busy = match self.policy {
            FetchPolicy::Coalesce => !self.in_flight.is_empty(),
            FetchPolicy::Concurrent => false,
        };
        if busy {
            return None;
        }
        let trigger = self.pending.take()?;
        Some(self.issue(trigger))
    }

    fn issue(&mut self, trigger: Trigger) -> Ticket {
        let ticket = Ticket { seq: self.next_seq, epoch: self.epoch, trigger };
        self.next_seq += 1;
        self.in_flight.insert(ticket.seq, ticket.epoch);
        log::debug!("[POLL] issue #{} ({:?})", ticket.seq, trigger);
        ticket
    }
}
