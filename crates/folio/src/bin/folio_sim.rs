//! # FOLIO Headless Simulator
//!
//! Builds the portfolio page in memory, replays a scripted pointer path for
//! a number of frames and prints the frame statistics.
//!
//! ```text
//! folio_sim [config.toml] [frames]
//! ```

use std::process::ExitCode;
use std::time::Duration;

use folio::{FxConfig, FxResult, Page};
use folio_particles::DrawList;
use folio_shared::Size;
use folio_ui::{Document, HostEvent, MemoryDocument, Rect};

const VIEWPORT: Size = Size::new(1280, 720);
const DEFAULT_FRAMES: u64 = 600;
const FRAME_STEP: Duration = Duration::from_micros(16_667);
/// Host time at attach; browser frame timestamps count from page load.
const START: Duration = Duration::from_millis(1_200);

fn build_page() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    let body = doc.body();

    doc.insert(body, "canvas#globalCanvas");
    let nav = doc.insert(body, "nav.navbar");
    doc.insert(nav, "a");
    doc.insert(nav, "a");

    let hero = doc.insert(body, "section.animate-on-scroll");
    let typing = doc.insert(hero, "h1.typing-text");
    doc.set_attribute(typing, "data-text", "Hi, I build things for the web.");

    for i in 0..4u8 {
        let card = doc.insert(body, "div.bento-card.animate-on-scroll");
        let col = f32::from(i % 2);
        let row = f32::from(i / 2);
        doc.set_rect(card, Rect::new(100.0 + col * 560.0, 200.0 + row * 260.0, 520.0, 240.0));
    }

    let eyes = doc.insert(body, "div.eyes");
    for x in [560.0, 640.0] {
        let eyeball = doc.insert(eyes, "div.eyeball");
        doc.insert(eyeball, "div.pupil");
        doc.set_rect(eyeball, Rect::new(x, 60.0, 60.0, 60.0));
    }
    doc.insert(body, "button#closeEyesBtn");

    doc
}

/// Pointer on a slow circle around the viewport centre.
fn pointer_at(frame: u64) -> (f32, f32) {
    let t = frame as f32 / 120.0;
    let (cx, cy) = (VIEWPORT.w() / 2.0, VIEWPORT.h() / 2.0);
    (cx + t.cos() * 300.0, cy + t.sin() * 200.0)
}

fn run(config: FxConfig, frames: u64) -> FxResult<()> {
    let mut page = Page::new(build_page(), config, VIEWPORT, START)?;
    let sender = page.sender();
    let mut surface = DrawList::new();

    let button = page.document().query("#closeEyesBtn");
    let cards = page.document().query_all(".bento-card");
    for &card in &cards {
        sender.send(HostEvent::Intersection { target: card, ratio: 1.0 });
    }

    println!("FOLIO simulator: seed {}, widgets {:?}", page.seed(), page.widget_names());

    let mut now = START;
    for frame in 0..frames {
        let (x, y) = pointer_at(frame);
        sender.send(HostEvent::PointerMove { x, y });
        if let Some(&card) = cards.first() {
            sender.send(HostEvent::PointerMoveOver { target: card, x, y });
        }
        if frame % 240 == 120 {
            if let Some(button) = button {
                sender.send(HostEvent::Click { target: button });
            }
        }
        if frame == frames / 2 {
            sender.send(HostEvent::Scroll { y: 400.0 });
            sender.send(HostEvent::Resize { width: 1024, height: 768 });
        }

        if page.frame(now, &mut surface).is_none() {
            break;
        }
        now += FRAME_STEP;
    }

    page.teardown();
    let stats = page.animation().stats();
    tracing::info!(
        frames = stats.frames_recorded,
        avg_fps = stats.avg_fps(),
        avg_links = stats.avg_links(),
        "simulation finished"
    );
    println!();
    stats.print_summary();
    Ok(())
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => match FxConfig::from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("folio_sim: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => FxConfig::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    match run(config, frames) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("folio_sim: {e}");
            ExitCode::FAILURE
        }
    }
}
