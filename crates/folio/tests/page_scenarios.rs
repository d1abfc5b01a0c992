//! Whole-page scenarios on the in-memory document.

use std::time::Duration;

use folio::{FxConfig, Page};
use folio_particles::{DrawCommand, DrawList};
use folio_shared::{Size, Vec2};
use folio_ui::{Document, ElementId, HostEvent, MemoryDocument};

const SEED: u64 = 0x5EED;

struct Fixture {
    page: Page<MemoryDocument>,
    button: ElementId,
    eyeball: ElementId,
    typing: ElementId,
    navbar: ElementId,
}

fn portfolio(viewport: Size) -> Fixture {
    portfolio_at(viewport, Duration::ZERO)
}

fn portfolio_at(viewport: Size, start: Duration) -> Fixture {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    doc.insert(body, "canvas#globalCanvas");
    let navbar = doc.insert(body, "nav.navbar");
    let typing = doc.insert(body, "h1.typing-text");
    doc.set_attribute(typing, "data-text", "Hi");
    let eyeball = doc.insert(body, "div.eyeball");
    doc.insert(eyeball, "div.pupil");
    let button = doc.insert(body, "button#closeEyesBtn");

    let page = Page::with_seed(doc, FxConfig::default(), viewport, SEED, start).unwrap();
    Fixture {
        page,
        button,
        eyeball,
        typing,
        navbar,
    }
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn test_viewport_900_by_600_has_60_particles() {
    let mut fx = portfolio(Size::new(900, 600));
    assert_eq!(fx.page.field().unwrap().len(), 60);

    let mut surface = DrawList::new();
    let stats = fx.page.frame(ms(0), &mut surface).unwrap();
    assert_eq!(stats.particles, 60);
    assert_eq!(surface.circles().count(), 60);
    assert_eq!(surface.lines().count(), stats.links);
    assert!(matches!(surface.commands()[0], DrawCommand::Clear { .. }));
}

#[test]
fn test_all_widgets_attach_on_full_page() {
    let fx = portfolio(Size::new(900, 600));
    // No `.animate-on-scroll` or `.bento-card` on this page.
    assert_eq!(fx.page.widget_names(), vec!["navbar", "cursor", "typewriter", "eyes"]);
}

#[test]
fn test_pointer_leave_means_pure_translation() {
    let mut fx = portfolio(Size::new(900, 600));
    let before = fx.page.field().unwrap().particles().to_vec();
    let centre = before[0].position;

    fx.page.dispatch(HostEvent::PointerMove { x: centre.x + 1.0, y: centre.y + 1.0 });
    fx.page.dispatch(HostEvent::PointerLeave);

    let mut surface = DrawList::new();
    fx.page.frame(ms(0), &mut surface).unwrap();

    for (old, new) in before.iter().zip(fx.page.field().unwrap().particles()) {
        assert_eq!(new.velocity, old.velocity);
        assert_eq!(new.position, old.position + old.velocity);
    }
}

#[test]
fn test_pointer_pushes_nearby_particle() {
    let mut fx = portfolio(Size::new(900, 600));
    let before = fx.page.field().unwrap().particles().to_vec();
    let (index, target) = before
        .iter()
        .enumerate()
        .find(|(_, p)| (40.0..860.0).contains(&p.position.x) && (40.0..560.0).contains(&p.position.y))
        .map(|(i, p)| (i, *p))
        .unwrap();

    // Pointer just below-right: the particle moves up-left by 3 px on each axis.
    fx.page.dispatch(HostEvent::PointerMove {
        x: target.position.x + 1.0,
        y: target.position.y + 1.0,
    });
    let mut surface = DrawList::new();
    fx.page.frame(ms(0), &mut surface).unwrap();

    let after = fx.page.field().unwrap().particles()[index];
    let expected = target.position + Vec2::new(-3.0, -3.0) + target.velocity;
    assert!((after.position.x - expected.x).abs() < 1e-3);
    assert!((after.position.y - expected.y).abs() < 1e-3);
}

#[test]
fn test_resize_rebuilds_field() {
    let mut fx = portfolio(Size::new(900, 600));
    fx.page.dispatch(HostEvent::Resize { width: 1920, height: 1080 });

    assert_eq!(fx.page.field().unwrap().len(), 230);
    assert_eq!(fx.page.field().unwrap().size(), Size::new(1920, 1080));
    assert_eq!(fx.page.viewport(), Size::new(1920, 1080));
}

#[test]
fn test_eyes_toggle_through_channel() {
    let mut fx = portfolio(Size::new(900, 600));
    let sender = fx.page.sender();

    assert!(sender.send(HostEvent::Click { target: fx.button }));
    assert_eq!(fx.page.pump(), 1);
    assert!(!fx.page.state().eyes_open());
    assert_eq!(fx.page.document().text(fx.button), "Open Eyes");
    assert!(fx.page.document().has_class(fx.eyeball, "closed"));

    assert!(sender.send(HostEvent::Click { target: fx.button }));
    let mut surface = DrawList::new();
    let stats = fx.page.frame(ms(0), &mut surface).unwrap();
    assert_eq!(stats.events_processed, 1);
    assert!(fx.page.state().eyes_open());
    assert_eq!(fx.page.document().text(fx.button), "Close Eyes");
    assert!(!fx.page.document().has_class(fx.eyeball, "closed"));
}

#[test]
fn test_typewriter_timeline() {
    let mut fx = portfolio(Size::new(900, 600));
    let text = |fx: &Fixture| fx.page.document().text(fx.typing);

    assert_eq!(text(&fx), "");
    fx.page.advance(ms(999));
    assert_eq!(text(&fx), "");
    fx.page.advance(ms(1000));
    assert_eq!(text(&fx), "H");
    fx.page.advance(ms(1100));
    assert_eq!(text(&fx), "Hi");
    fx.page.advance(ms(60_000));
    assert_eq!(text(&fx), "Hi");
}

#[test]
fn test_typewriter_counts_from_attach_time() {
    let mut fx = portfolio_at(Size::new(900, 600), ms(5000));
    let mut surface = DrawList::new();
    let text = |fx: &Fixture| fx.page.document().text(fx.typing);

    fx.page.frame(ms(5000), &mut surface).unwrap();
    assert_eq!(text(&fx), "");
    fx.page.frame(ms(5999), &mut surface).unwrap();
    assert_eq!(text(&fx), "");
    let stats = fx.page.frame(ms(6000), &mut surface).unwrap();
    assert_eq!(text(&fx), "H");
    assert_eq!(stats.timers_fired, 1usize);
    fx.page.frame(ms(6100), &mut surface).unwrap();
    assert_eq!(text(&fx), "Hi");
}

#[test]
fn test_frames_drive_timers() {
    let mut fx = portfolio(Size::new(300, 300));
    let mut surface = DrawList::new();

    let mut now = Duration::ZERO;
    while now <= ms(1200) {
        fx.page.frame(now, &mut surface).unwrap();
        now += ms(16);
    }
    assert_eq!(fx.page.document().text(fx.typing), "Hi");
}

#[test]
fn test_navbar_scroll() {
    let mut fx = portfolio(Size::new(900, 600));
    fx.page.dispatch(HostEvent::Scroll { y: 120.0 });
    assert!(fx.page.document().has_class(fx.navbar, "scrolled"));
    fx.page.dispatch(HostEvent::Scroll { y: 0.0 });
    assert!(!fx.page.document().has_class(fx.navbar, "scrolled"));
}

#[test]
fn test_teardown_stops_everything() {
    let mut fx = portfolio(Size::new(900, 600));
    assert!(fx.page.pending_timers() > 0);

    fx.page.teardown();
    assert!(!fx.page.is_running());
    assert_eq!(fx.page.pending_timers(), 0);

    let mut surface = DrawList::new();
    assert!(fx.page.frame(ms(16), &mut surface).is_none());
    assert_eq!(surface.command_count(), 0);
    assert_eq!(fx.page.advance(ms(60_000)), 0);
    assert_eq!(fx.page.document().text(fx.typing), "");
}

#[test]
fn test_same_seed_same_frames() {
    let run = || {
        let mut fx = portfolio(Size::new(640, 480));
        let mut surface = DrawList::new();
        let mut now = Duration::ZERO;
        for i in 0..30u16 {
            let t = f32::from(i);
            fx.page.dispatch(HostEvent::PointerMove { x: 100.0 + t * 10.0, y: 200.0 });
            fx.page.frame(now, &mut surface).unwrap();
            now += ms(16);
        }
        surface.commands().to_vec()
    };

    assert_eq!(run(), run());
}
