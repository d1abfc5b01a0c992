//! The attached widgets of a page and the timers they share.

use super::base::{Widget, WidgetContext, WidgetSlot, WidgetTimers};
use super::{CursorWidget, EyesWidget, NavbarWidget, RevealWidget, TiltWidget, TypewriterWidget};
use crate::config::WidgetConfig;
use crate::document::Document;
use crate::input::HostEvent;
use crate::state::PageState;
use crate::timer::DeterministicClock;
use folio_shared::PointerTracker;
use rand::RngCore;
use std::time::Duration;

/// Owns the widgets, their timers, the page state and the clock.
pub struct WidgetSet {
    /// Widgets; index is the [`WidgetSlot`].
    widgets: Vec<Box<dyn Widget>>,
    /// Pending wake-ups.
    timers: WidgetTimers,
    /// Page-wide state.
    state: PageState,
    /// Host time.
    clock: DeterministicClock,
    /// Set once `attach_all` ran.
    attached: bool,
}

impl WidgetSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            widgets: Vec::with_capacity(8),
            timers: WidgetTimers::new(),
            state: PageState::new(),
            clock: DeterministicClock::new(),
            attached: false,
        }
    }

    /// The portfolio page's six widgets.
    #[must_use]
    pub fn standard(config: &WidgetConfig) -> Self {
        let mut set = Self::new();
        set.push(Box::new(NavbarWidget::new(config.navbar)));
        set.push(Box::new(RevealWidget::new()));
        set.push(Box::new(CursorWidget::new(config.cursor)));
        set.push(Box::new(TiltWidget::new(config.tilt)));
        set.push(Box::new(TypewriterWidget::new(config.typewriter)));
        set.push(Box::new(EyesWidget::new(config.blink)));
        set
    }

    /// Adds a widget. Only widgets pushed before [`attach_all`](Self::attach_all) run.
    pub fn push(&mut self, widget: Box<dyn Widget>) {
        self.widgets.push(widget);
    }

    /// Attaches every widget at host time `start`, dropping those with
    /// nothing to do on this page.
    ///
    /// Timers scheduled while attaching are due relative to `start`, so it
    /// must share a timebase with later [`advance`](Self::advance) calls.
    /// Returns the number of widgets left attached.
    pub fn attach_all(
        &mut self,
        doc: &mut dyn Document,
        pointer: PointerTracker,
        rng: &mut dyn RngCore,
        start: Duration,
    ) -> usize {
        self.clock.set(start);
        let now = self.clock.now();
        let candidates = std::mem::take(&mut self.widgets);

        for mut widget in candidates {
            let slot = WidgetSlot::new(self.widgets.len());
            let mut cx = WidgetContext::new(
                &mut *doc,
                &mut self.state,
                &mut self.timers,
                pointer,
                now,
                &mut *rng,
                slot,
            );
            if widget.attach(&mut cx) {
                self.widgets.push(widget);
            } else {
                tracing::debug!(widget = widget.name(), "widget not applicable on this page");
            }
        }

        self.attached = true;
        self.widgets.len()
    }

    /// Delivers one host event to every attached widget.
    pub fn dispatch(
        &mut self,
        doc: &mut dyn Document,
        pointer: PointerTracker,
        rng: &mut dyn RngCore,
        event: HostEvent,
    ) {
        if !self.attached {
            return;
        }
        let now = self.clock.now();
        for (index, widget) in self.widgets.iter_mut().enumerate() {
            let mut cx = WidgetContext::new(
                &mut *doc,
                &mut self.state,
                &mut self.timers,
                pointer,
                now,
                &mut *rng,
                WidgetSlot::new(index),
            );
            widget.on_event(&mut cx, event);
        }
    }

    /// Moves the clock to `now` and runs every task due by then.
    ///
    /// Tasks scheduled while handling run in the same call if they fall due
    /// by `now`. Returns the number of tasks run.
    pub fn advance(
        &mut self,
        doc: &mut dyn Document,
        pointer: PointerTracker,
        rng: &mut dyn RngCore,
        now: Duration,
    ) -> usize {
        self.clock.set(now);
        let now = self.clock.now();
        let mut fired = 0;

        while let Some((due, (slot, task))) = self.timers.pop_due(now) {
            let Some(widget) = self.widgets.get_mut(slot.raw()) else {
                continue;
            };
            let mut cx = WidgetContext::new(
                &mut *doc,
                &mut self.state,
                &mut self.timers,
                pointer,
                due,
                &mut *rng,
                slot,
            );
            widget.on_timer(&mut cx, task);
            fired += 1;
        }

        fired
    }

    /// Runs one animation frame on every widget; `dt` is in seconds.
    pub fn frame(
        &mut self,
        doc: &mut dyn Document,
        pointer: PointerTracker,
        rng: &mut dyn RngCore,
        dt: f32,
    ) {
        let now = self.clock.now();
        for (index, widget) in self.widgets.iter_mut().enumerate() {
            let mut cx = WidgetContext::new(
                &mut *doc,
                &mut self.state,
                &mut self.timers,
                pointer,
                now,
                &mut *rng,
                WidgetSlot::new(index),
            );
            widget.on_frame(&mut cx, dt);
        }
    }

    /// Cancels every pending timer and detaches every widget.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.widgets.clear();
        self.attached = false;
    }

    /// Page-wide state.
    #[must_use]
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Names of the attached widgets, in slot order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.widgets.iter().map(|w| w.name()).collect()
    }

    /// Number of widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns true if there are no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Number of pending timer tasks.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Due time of the next pending timer task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    /// Current host time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }
}

impl Default for WidgetSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;
    use crate::widget::TimerTask;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Logs every callback into the document's body text.
    struct Recorder {
        applicable: bool,
    }

    impl Widget for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn attach(&mut self, cx: &mut WidgetContext<'_>) -> bool {
            if self.applicable {
                cx.schedule(Duration::from_millis(10), TimerTask::Blink);
            }
            self.applicable
        }

        fn on_event(&mut self, cx: &mut WidgetContext<'_>, _event: HostEvent) {
            let body = crate::document::ElementId::new(0);
            let text = cx.doc.text(body) + "e";
            cx.doc.set_text(body, &text);
        }

        fn on_timer(&mut self, cx: &mut WidgetContext<'_>, _task: TimerTask) {
            let body = crate::document::ElementId::new(0);
            let text = cx.doc.text(body) + "t";
            cx.doc.set_text(body, &text);
            if cx.now < Duration::from_millis(30) {
                cx.schedule(Duration::from_millis(10), TimerTask::Blink);
            }
        }
    }

    #[test]
    fn test_inapplicable_widgets_are_dropped() {
        let mut doc = MemoryDocument::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut set = WidgetSet::new();
        set.push(Box::new(Recorder { applicable: false }));
        set.push(Box::new(Recorder { applicable: true }));

        assert_eq!(set.attach_all(&mut doc, PointerTracker::new(), &mut rng, Duration::ZERO), 1);
        assert_eq!(set.names(), vec!["recorder"]);
    }

    #[test]
    fn test_attach_timers_count_from_start() {
        let mut doc = MemoryDocument::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut set = WidgetSet::new();
        set.push(Box::new(Recorder { applicable: true }));
        set.attach_all(&mut doc, PointerTracker::new(), &mut rng, Duration::from_secs(5));

        assert_eq!(set.now(), Duration::from_secs(5));
        assert_eq!(set.next_due(), Some(Duration::from_millis(5010)));
        assert_eq!(set.advance(&mut doc, PointerTracker::new(), &mut rng, Duration::from_millis(5009)), 0);
        assert_eq!(set.advance(&mut doc, PointerTracker::new(), &mut rng, Duration::from_millis(5010)), 1);
    }

    #[test]
    fn test_chained_timers_run_in_one_advance() {
        let mut doc = MemoryDocument::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut set = WidgetSet::new();
        set.push(Box::new(Recorder { applicable: true }));
        set.attach_all(&mut doc, PointerTracker::new(), &mut rng, Duration::ZERO);

        let fired = set.advance(&mut doc, PointerTracker::new(), &mut rng, Duration::from_millis(100));
        assert_eq!(fired, 3);
        assert_eq!(doc.text(doc.body()), "ttt");
        assert_eq!(set.pending_timers(), 0);
    }

    #[test]
    fn test_teardown_cancels_everything() {
        let mut doc = MemoryDocument::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut set = WidgetSet::new();
        set.push(Box::new(Recorder { applicable: true }));
        set.attach_all(&mut doc, PointerTracker::new(), &mut rng, Duration::ZERO);
        set.teardown();

        set.dispatch(&mut doc, PointerTracker::new(), &mut rng, HostEvent::Scroll { y: 0.0 });
        assert_eq!(set.advance(&mut doc, PointerTracker::new(), &mut rng, Duration::from_secs(1)), 0);
        assert_eq!(doc.text(doc.body()), "");
        assert!(set.is_empty());
    }
}
