use gloo_timers::callback::Timeout;
use leptos::*;
use std::{cell::RefCell, rc::Rc};

/// Quiet period for free-text filters.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Ticket bookkeeping behind a debounced call. Every `schedule` supersedes the previous
/// one; a timer only delivers its value if its ticket is still the latest.
#[derive(Debug)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn schedule(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    /// Called when the timer for `ticket` elapses.
    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// A debounced call with its live timer handle. `H` is the platform timer, and
/// dropping it cancels the timer.
pub struct DebouncedCall<T, H> {
    state: Rc<RefCell<Debouncer<T>>>,
    timer: Rc<RefCell<Option<H>>>,
}

impl<T, H> Clone for DebouncedCall<T, H> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            timer: self.timer.clone(),
        }
    }
}

impl<T, H> Default for DebouncedCall<T, H> {
    fn default() -> Self {
        Self {
            state: Rc::new(RefCell::new(Debouncer::default())),
            timer: Rc::new(RefCell::new(None)),
        }
    }
}

impl<T: 'static, H> DebouncedCall<T, H> {
    /// Schedules `value`. `start_timer` receives the delivery hook for this ticket and
    /// returns the handle of the timer that will run it.
    pub fn call<F>(&self, value: T, start_timer: F)
    where
        F: FnOnce(Box<dyn FnOnce() -> Option<T>>) -> H,
    {
        let ticket = self.state.borrow_mut().schedule(value);
        let state = self.state.clone();
        let handle = start_timer(Box::new(move || state.borrow_mut().fire(ticket)));
        // Replacing the handle drops the previous timer, which cancels it.
        let previous = self.timer.borrow_mut().replace(handle);
        drop(previous);
    }

    pub fn teardown(&self) {
        self.state.borrow_mut().cancel();
        let timer = self.timer.borrow_mut().take();
        drop(timer);
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending()
    }

    pub fn has_timer(&self) -> bool {
        self.timer.borrow().is_some()
    }
}

/// Wraps `callback` so it runs once input has been quiet for `delay_ms`. The pending
/// call is dropped when the owning component is torn down.
pub fn use_debounced_callback<T: 'static>(delay_ms: u32, callback: Callback<T>) -> Callback<T> {
    let call = DebouncedCall::<T, Timeout>::default();
    {
        let call = call.clone();
        on_cleanup(move || call.teardown());
    }

    Callback::new(move |value: T| {
        call.call(value, |fire| {
            Timeout::new(delay_ms, move || {
                if let Some(value) = fire() {
                    callback.call(value);
                }
            })
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Drives a debouncer against a virtual clock: each event is (time_ms, value);
    /// every scheduled timer fires at time + delay, in time order.
    fn simulate(events: &[(u32, &'static str)], delay: u32) -> Vec<(u32, &'static str)> {
        let mut debouncer = Debouncer::default();
        let mut timers: Vec<(u32, u64)> = Vec::new();
        let mut delivered = Vec::new();
        let mut events = events.iter().peekable();

        loop {
            let next_event = events.peek().map(|(at, _)| *at);
            let next_timer = timers.iter().map(|(at, _)| *at).min();
            match (next_event, next_timer) {
                (Some(event_at), Some(timer_at)) if timer_at <= event_at => {
                    fire_due(&mut debouncer, &mut timers, timer_at, &mut delivered);
                }
                (Some(_), _) => {
                    if let Some((at, value)) = events.next() {
                        let ticket = debouncer.schedule(*value);
                        timers.push((at + delay, ticket));
                    }
                }
                (None, Some(timer_at)) => {
                    fire_due(&mut debouncer, &mut timers, timer_at, &mut delivered);
                }
                (None, None) => break,
            }
        }
        delivered
    }

    fn fire_due(
        debouncer: &mut Debouncer<&'static str>,
        timers: &mut Vec<(u32, u64)>,
        now: u32,
        delivered: &mut Vec<(u32, &'static str)>,
    ) {
        let (due, rest): (Vec<_>, Vec<_>) = timers.drain(..).partition(|(at, _)| *at == now);
        *timers = rest;
        for (_, ticket) in due {
            if let Some(value) = debouncer.fire(ticket) {
                delivered.push((now, value));
            }
        }
    }

    #[test]
    fn five_rapid_changes_commit_once_with_last_value() {
        let events = [(0, "s"), (50, "sa"), (100, "sat"), (150, "sato"), (200, "sato ")];
        let delivered = simulate(&events, SEARCH_DEBOUNCE_MS);
        assert_eq!(delivered, vec![(500, "sato ")]);
    }

    #[test]
    fn changes_separated_by_quiet_period_each_commit() {
        let events = [(0, "a"), (400, "ab")];
        let delivered = simulate(&events, SEARCH_DEBOUNCE_MS);
        assert_eq!(delivered, vec![(300, "a"), (700, "ab")]);
    }

    #[test]
    fn cancel_discards_pending_value() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.schedule("draft");
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert_eq!(debouncer.fire(ticket), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn stale_ticket_does_not_consume_latest_value() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.schedule(1);
        let second = debouncer.schedule(2);
        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), Some(2));
        assert_eq!(debouncer.fire(second), None);
    }

    type Fire = Box<dyn FnOnce() -> Option<&'static str>>;

    /// Stand-in timer that counts how often it was dropped, i.e. cancelled.
    struct CountingTimer(Rc<Cell<u32>>);

    impl Drop for CountingTimer {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn schedule(
        call: &DebouncedCall<&'static str, CountingTimer>,
        value: &'static str,
        cancelled: &Rc<Cell<u32>>,
        fires: &mut Vec<Fire>,
    ) {
        call.call(value, |fire| {
            fires.push(fire);
            CountingTimer(cancelled.clone())
        });
    }

    #[test]
    fn each_keystroke_replaces_the_running_timer() {
        let call = DebouncedCall::default();
        let cancelled = Rc::new(Cell::new(0));
        let mut fires = Vec::new();

        schedule(&call, "a", &cancelled, &mut fires);
        schedule(&call, "ab", &cancelled, &mut fires);
        assert_eq!(cancelled.get(), 1);
        assert!(call.has_timer());

        let latest = fires.pop().unwrap();
        let stale = fires.pop().unwrap();
        assert_eq!(stale(), None);
        assert_eq!(latest(), Some("ab"));
        assert!(!call.is_pending());
    }

    #[test]
    fn teardown_cancels_timer_and_pending_value() {
        let call = DebouncedCall::default();
        let cancelled = Rc::new(Cell::new(0));
        let mut fires = Vec::new();

        schedule(&call, "draft", &cancelled, &mut fires);
        assert!(call.is_pending());

        call.teardown();
        assert_eq!(cancelled.get(), 1);
        assert!(!call.has_timer());
        assert!(!call.is_pending());
        assert_eq!(fires.pop().unwrap()(), None);
    }
}
