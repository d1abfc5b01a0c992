//! # The Page
//!
//! Owns everything for one document: pointer, widgets, particle field,
//! animation loop and the host event channel. The host drives it with three
//! calls: events ([`dispatch`](Page::dispatch) or the channel), timers
//! ([`advance`](Page::advance)) and frames ([`frame`](Page::frame)).

use std::time::Duration;

use folio_particles::{ParticleField, Surface};
use folio_shared::{PointerTracker, Size};
use folio_ui::{Document, ElementId, HostEvent, PageState, WidgetSet};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::FxConfig;
use crate::error::{FxError, FxResult};
use crate::events::{EventQueue, EventReceiver, EventSender};
use crate::frame_loop::{AnimationLoop, FrameStats};

/// Canvas the particle field draws on.
pub const CANVAS_SELECTOR: &str = "#globalCanvas";

/// One attached page.
pub struct Page<D: Document> {
    doc: D,
    config: FxConfig,
    seed: u64,
    viewport: Size,
    pointer: PointerTracker,
    widgets: WidgetSet,
    /// Present only when the page has a canvas.
    field: Option<ParticleField>,
    canvas: Option<ElementId>,
    animation: AnimationLoop,
    events: EventQueue,
    receiver: EventReceiver,
    rng: ChaCha8Rng,
}

impl<D: Document> Page<D> {
    /// Attaches to `doc` with a `viewport`-sized canvas at host time `start`.
    ///
    /// `start` must use the same timebase as the timestamps later passed to
    /// [`frame`](Self::frame) and [`advance`](Self::advance); the typewriter
    /// delay and the first blink count from it. Uses `config.seed`, or
    /// platform entropy when it is unset.
    ///
    /// # Errors
    ///
    /// [`FxError::InvalidConfig`] if `config` does not validate,
    /// [`FxError::Entropy`] if a seed was needed and none was available.
    pub fn new(doc: D, config: FxConfig, viewport: Size, start: Duration) -> FxResult<Self> {
        let seed = match config.seed {
            Some(seed) => seed,
            None => entropy_seed()?,
        };
        Self::with_seed(doc, config, viewport, seed, start)
    }

    /// Attaches with an explicit seed; see [`new`](Self::new) for `start`.
    ///
    /// # Errors
    ///
    /// [`FxError::InvalidConfig`] if `config` does not validate.
    pub fn with_seed(
        doc: D,
        config: FxConfig,
        viewport: Size,
        seed: u64,
        start: Duration,
    ) -> FxResult<Self> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let events = EventQueue::default();
        let receiver = events.receiver();

        let canvas = doc.query(CANVAS_SELECTOR);
        let field = canvas.map(|_| ParticleField::new(config.particles, rng.next_u64()));
        if canvas.is_none() {
            tracing::debug!("no canvas on this page; particle field disabled");
        }

        let mut page = Self {
            doc,
            seed,
            viewport,
            pointer: PointerTracker::new(),
            widgets: WidgetSet::standard(&config.widgets),
            field,
            canvas,
            animation: AnimationLoop::new(config.frame),
            events,
            receiver,
            rng,
            config,
        };
        page.apply_viewport();

        let active = page
            .widgets
            .attach_all(&mut page.doc, page.pointer, &mut page.rng, start);
        tracing::info!(
            widgets = active,
            field = page.field.is_some(),
            seed,
            "page attached"
        );
        Ok(page)
    }

    /// A sender for host callbacks; events are handled at the next
    /// [`pump`](Self::pump) or [`frame`](Self::frame).
    #[must_use]
    pub fn sender(&self) -> EventSender {
        self.events.sender()
    }

    /// Handles one host event now.
    pub fn dispatch(&mut self, event: HostEvent) {
        if !self.animation.is_running() {
            return;
        }

        match event {
            HostEvent::PointerMove { x, y } => self.pointer.move_to(x, y),
            HostEvent::PointerLeave => self.pointer.leave(),
            HostEvent::Resize { width, height } => {
                self.viewport = Size::new(width, height);
                self.apply_viewport();
            }
            _ => {}
        }

        self.widgets
            .dispatch(&mut self.doc, self.pointer, &mut self.rng, event);
    }

    /// Handles every event posted through [`sender`](Self::sender), oldest
    /// first. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let events = self.receiver.drain();
        let count = events.len();
        for event in events {
            self.dispatch(event);
        }
        count
    }

    /// Runs every widget timer due by host time `now`. Returns how many ran.
    pub fn advance(&mut self, now: Duration) -> usize {
        if !self.animation.is_running() {
            return 0;
        }
        self.widgets
            .advance(&mut self.doc, self.pointer, &mut self.rng, now)
    }

    /// Renders one frame at host time `now` onto `surface`.
    ///
    /// Returns None once the page is torn down; the host should then stop
    /// requesting frames.
    pub fn frame<S: Surface + ?Sized>(&mut self, now: Duration, surface: &mut S) -> Option<FrameStats> {
        let ctx = self.animation.begin_frame(now)?;

        let events_processed = self.pump();
        let timers_fired = self.advance(now);

        let tick = self
            .field
            .as_mut()
            .map(|field| field.tick(surface, self.pointer.position()))
            .unwrap_or_default();

        self.widgets
            .frame(&mut self.doc, self.pointer, &mut self.rng, ctx.dt);

        let stats = FrameStats {
            frame: ctx.frame,
            interval_us: ctx.interval.as_micros() as u64,
            dt: ctx.dt,
            particles: tick.particles,
            links: tick.links,
            events_processed,
            timers_fired,
        };
        self.animation.end_frame(stats);
        Some(stats)
    }

    /// Stops the animation loop and cancels every pending timer.
    pub fn teardown(&mut self) {
        if !self.animation.is_running() {
            return;
        }
        self.animation.cancel();
        self.widgets.teardown();
        let dropped = self.receiver.drain().len();
        tracing::info!(dropped_events = dropped, "page torn down");
    }

    /// Sizes the canvas element and rebuilds the field for the viewport.
    fn apply_viewport(&mut self) {
        let Some(canvas) = self.canvas else {
            return;
        };
        self.doc
            .set_attribute(canvas, "width", &self.viewport.width.to_string());
        self.doc
            .set_attribute(canvas, "height", &self.viewport.height.to_string());
        if let Some(field) = self.field.as_mut() {
            field.resize(self.viewport);
        }
    }

    /// The document.
    #[must_use]
    pub fn document(&self) -> &D {
        &self.doc
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    /// The seed in use.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Current pointer.
    #[must_use]
    pub fn pointer(&self) -> PointerTracker {
        self.pointer
    }

    /// Page-wide state.
    #[must_use]
    pub fn state(&self) -> &PageState {
        self.widgets.state()
    }

    /// The particle field, if the page has a canvas.
    #[must_use]
    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    /// Names of the widgets active on this page.
    #[must_use]
    pub fn widget_names(&self) -> Vec<&'static str> {
        self.widgets.names()
    }

    /// Pending widget timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.widgets.pending_timers()
    }

    /// The animation loop.
    #[must_use]
    pub fn animation(&self) -> &AnimationLoop {
        &self.animation
    }

    /// Returns true until [`teardown`](Self::teardown).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }
}

fn entropy_seed() -> FxResult<u64> {
    let mut bytes = [0u8; 8];
    getrandom::fill(&mut bytes).map_err(|e| FxError::Entropy(e.to_string()))?;
    Ok(u64::from_le_bytes(bytes))
}
