use crate::foundation::core::Millis;

/// Handle for one scheduled action. Cancelling a fired or already-cancelled token is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Clone, Debug)]
struct Pending<A> {
    token: TimerToken,
    due: Millis,
    action: A,
}

/// Single-threaded queue of delayed actions, driven by host time.
#[derive(Clone, Debug)]
pub struct TimerQueue<A> {
    next_id: u64,
    pending: Vec<Pending<A>>,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Millis, delay_ms: u64, action: A) -> TimerToken {
        let token = TimerToken(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            token,
            due: now.after(delay_ms),
            action,
        });
        token
    }

    /// Returns `true` when the token was still pending.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.token != token);
        self.pending.len() != before
    }

    /// Cancel `slot`'s token, if any, and clear the slot.
    pub fn cancel_slot(&mut self, slot: &mut Option<TimerToken>) {
        if let Some(token) = slot.take() {
            self.cancel(token);
        }
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|p| p.token == token)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest due time among pending actions.
    pub fn next_due(&self) -> Option<Millis> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Remove and return every action due at or before `now`, ordered by due time then
    /// scheduling order.
    pub fn take_due(&mut self, now: Millis) -> Vec<(TimerToken, A)> {
        let mut due = Vec::new();
        let mut keep = Vec::with_capacity(self.pending.len());
        for p in self.pending.drain(..) {
            if p.due <= now {
                due.push(p);
            } else {
                keep.push(p);
            }
        }
        self.pending = keep;
        due.sort_by_key(|p| (p.due, p.token.0));
        due.into_iter().map(|p| (p.token, p.action)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/timers.rs"]
mod tests;
