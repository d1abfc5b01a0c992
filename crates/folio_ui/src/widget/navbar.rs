//! Navbar turns opaque once the page scrolls.

use super::{Widget, WidgetContext};
use crate::config::NavbarConfig;
use crate::document::ElementId;
use crate::input::HostEvent;
use crate::style::Theme;

/// `.navbar` background on scroll.
#[derive(Debug, Clone)]
pub struct NavbarWidget {
    config: NavbarConfig,
    theme: Theme,
    navbar: Option<ElementId>,
}

impl NavbarWidget {
    /// Creates the widget.
    #[must_use]
    pub fn new(config: NavbarConfig) -> Self {
        Self {
            config,
            theme: Theme::DARK,
            navbar: None,
        }
    }
}

impl Widget for NavbarWidget {
    fn name(&self) -> &'static str {
        "navbar"
    }

    fn attach(&mut self, cx: &mut WidgetContext<'_>) -> bool {
        self.navbar = cx.doc.query(".navbar");
        self.navbar.is_some()
    }

    fn on_event(&mut self, cx: &mut WidgetContext<'_>, event: HostEvent) {
        let (HostEvent::Scroll { y }, Some(navbar)) = (event, self.navbar) else {
            return;
        };

        if y > self.config.scroll_threshold {
            cx.doc.add_class(navbar, "scrolled");
            cx.doc
                .set_style(navbar, "background", &self.theme.navbar_scrolled.to_css());
        } else {
            cx.doc.remove_class(navbar, "scrolled");
            cx.doc
                .set_style(navbar, "background", &self.theme.navbar_resting.to_css());
        }
    }
}
