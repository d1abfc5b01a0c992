//! Widget trait and the context passed to every callback.

use crate::document::Document;
use crate::input::HostEvent;
use crate::state::PageState;
use crate::timer::{TimerHandle, TimerQueue};
use folio_shared::PointerTracker;
use rand::RngCore;
use std::time::Duration;

/// Position of a widget inside its [`WidgetSet`](super::WidgetSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetSlot(pub usize);

impl WidgetSlot {
    /// Creates a new slot.
    #[must_use]
    pub const fn new(slot: usize) -> Self {
        Self(slot)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

/// Work a widget asked to be woken up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerTask {
    /// Typewriter: append the next character.
    TypeNextChar,
    /// Eyes: start a blink and schedule the next one.
    Blink,
    /// Eyes: open the lids again.
    BlinkEnd,
}

/// Queue of (owner, task) pairs shared by every widget of a set.
pub(crate) type WidgetTimers = TimerQueue<(WidgetSlot, TimerTask)>;

/// Everything a widget may touch during one callback.
pub struct WidgetContext<'a> {
    /// The page.
    pub doc: &'a mut dyn Document,
    /// Page-wide state.
    pub state: &'a mut PageState,
    /// Pointer as of this callback.
    pub pointer: PointerTracker,
    /// Current host time (the due time, inside a timer callback).
    pub now: Duration,
    /// Seeded randomness owned by the page.
    pub rng: &'a mut dyn RngCore,
    timers: &'a mut WidgetTimers,
    slot: WidgetSlot,
}

impl<'a> WidgetContext<'a> {
    pub(crate) fn new(
        doc: &'a mut dyn Document,
        state: &'a mut PageState,
        timers: &'a mut WidgetTimers,
        pointer: PointerTracker,
        now: Duration,
        rng: &'a mut dyn RngCore,
        slot: WidgetSlot,
    ) -> Self {
        Self {
            doc,
            state,
            pointer,
            now,
            rng,
            timers,
            slot,
        }
    }

    /// Wakes this widget with `task` after `delay`.
    pub fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerHandle {
        self.timers.schedule(self.now, delay, (self.slot, task))
    }

    /// Cancels a pending wake-up. Returns true if it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.cancel(handle).is_some()
    }

    /// This widget's slot.
    #[must_use]
    pub const fn slot(&self) -> WidgetSlot {
        self.slot
    }
}

/// Base trait for all widgets.
pub trait Widget {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Looks up the widget's elements and applies initial styles.
    ///
    /// Returns false when the page has nothing for this widget; the widget
    /// is then dropped and never called again.
    fn attach(&mut self, cx: &mut WidgetContext<'_>) -> bool;

    /// Handles one host event.
    fn on_event(&mut self, _cx: &mut WidgetContext<'_>, _event: HostEvent) {}

    /// Handles a timer this widget scheduled.
    fn on_timer(&mut self, _cx: &mut WidgetContext<'_>, _task: TimerTask) {}

    /// Called once per animation frame; `dt` is in seconds.
    fn on_frame(&mut self, _cx: &mut WidgetContext<'_>, _dt: f32) {}
}
