//! The page, as the widgets see it.
//!
//! [`Document`] is the only way a widget reaches the page: look elements up
//! by selector, read attributes and geometry, write styles, classes and text.
//! The browser host implements it over the real DOM; [`MemoryDocument`] is a
//! complete in-memory page for tests and the headless simulator.
//!
//! Selectors are the small subset the page uses: `tag`, `.class`, `#id`,
//! compounds of those (`div.eyeball`) and comma lists (`a, button`).

use std::collections::BTreeMap;

/// Opaque handle to an element of the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Creates a new element ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Read/write access to the host page.
///
/// Unknown element handles are tolerated: reads return empty values and
/// writes are dropped.
pub trait Document {
    /// Every element matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<ElementId>;

    /// The first element matching `selector`.
    fn query(&self, selector: &str) -> Option<ElementId> {
        self.query_all(selector).into_iter().next()
    }

    /// Descendants of `parent` matching `selector`, in document order.
    fn query_within(&self, parent: ElementId, selector: &str) -> Vec<ElementId>;

    /// Attribute value, if set.
    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    /// Sets an attribute.
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);

    /// Inline style property, if set.
    fn style(&self, element: ElementId, property: &str) -> Option<String>;

    /// Sets an inline style property.
    fn set_style(&mut self, element: ElementId, property: &str, value: &str);

    /// Returns true if the element carries `class`.
    fn has_class(&self, element: ElementId, class: &str) -> bool;

    /// Adds a class (no-op if present).
    fn add_class(&mut self, element: ElementId, class: &str);

    /// Removes a class (no-op if absent).
    fn remove_class(&mut self, element: ElementId, class: &str);

    /// Text content.
    fn text(&self, element: ElementId) -> String;

    /// Replaces the text content.
    fn set_text(&mut self, element: ElementId, text: &str);

    /// Border box in viewport coordinates.
    fn bounding_rect(&self, element: ElementId) -> Rect;

    /// Creates `<tag class="class">` and appends it to the body.
    fn create_element(&mut self, tag: &str, class: &str) -> ElementId;

    /// Appends a `<style>` block to the head.
    fn inject_stylesheet(&mut self, css: &str);
}

// =============================================================================
// SELECTORS
// =============================================================================

/// One compound selector: optional tag, optional id, any number of classes.
#[derive(Debug, Default, PartialEq, Eq)]
struct Compound<'a> {
    tag: Option<&'a str>,
    id: Option<&'a str>,
    classes: Vec<&'a str>,
}

impl<'a> Compound<'a> {
    fn parse(selector: &'a str) -> Self {
        let is_marker = |c: char| c == '.' || c == '#';
        let mut out = Self::default();
        let mut rest = selector.trim();

        let tag_end = rest.find(is_marker).unwrap_or(rest.len());
        if tag_end > 0 {
            out.tag = Some(&rest[..tag_end]);
        }
        rest = &rest[tag_end..];

        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(is_marker).unwrap_or(body.len());
            let name = &body[..end];
            if !name.is_empty() {
                if marker == '.' {
                    out.classes.push(name);
                } else {
                    out.id = Some(name);
                }
            }
            rest = &body[end..];
        }

        out
    }

    fn matches(&self, element: &MemoryElement) -> bool {
        if self.tag.is_none() && self.id.is_none() && self.classes.is_empty() {
            return false;
        }
        self.tag.map_or(true, |tag| element.tag.eq_ignore_ascii_case(tag))
            && self.id.map_or(true, |id| element.id.as_deref() == Some(id))
            && self.classes.iter().all(|class| element.classes.iter().any(|c| c == class))
    }
}

fn selector_matches(selector: &str, element: &MemoryElement) -> bool {
    selector
        .split(',')
        .any(|part| Compound::parse(part).matches(element))
}

// =============================================================================
// IN-MEMORY DOCUMENT
// =============================================================================

/// One element of a [`MemoryDocument`].
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    /// Tag name, lowercase.
    pub tag: String,
    /// `id` attribute.
    pub id: Option<String>,
    /// Class list, in insertion order.
    pub classes: Vec<String>,
    /// Other attributes.
    pub attributes: BTreeMap<String, String>,
    /// Inline style.
    pub style: BTreeMap<String, String>,
    /// Text content.
    pub text: String,
    /// Layout box.
    pub rect: Rect,
    /// Parent element (None for the body).
    pub parent: Option<ElementId>,
    /// Child elements, in document order.
    pub children: Vec<ElementId>,
}

/// A complete page held in memory.
///
/// Element 0 is `<body>`. Build pages with [`insert`](Self::insert):
///
/// ```
/// use folio_ui::{Document, MemoryDocument};
///
/// let mut doc = MemoryDocument::new();
/// let nav = doc.insert(doc.body(), "nav.navbar");
/// assert_eq!(doc.query(".navbar"), Some(nav));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    /// Elements indexed by ID.
    elements: Vec<MemoryElement>,
    /// Injected `<style>` blocks.
    stylesheets: Vec<String>,
    /// Number of writes performed through [`Document`].
    mutations: u64,
}

impl MemoryDocument {
    /// Creates a page holding only `<body>`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: vec![MemoryElement {
                tag: "body".to_owned(),
                ..MemoryElement::default()
            }],
            stylesheets: Vec::new(),
            mutations: 0,
        }
    }

    /// The `<body>` element.
    #[must_use]
    pub const fn body(&self) -> ElementId {
        ElementId(0)
    }

    /// Appends an element described by a compound selector (`button#go.big`).
    ///
    /// A descriptor without a tag creates a `div`.
    pub fn insert(&mut self, parent: ElementId, descriptor: &str) -> ElementId {
        let compound = Compound::parse(descriptor);
        let id = ElementId(self.elements.len() as u32);

        self.elements.push(MemoryElement {
            tag: compound.tag.unwrap_or("div").to_ascii_lowercase(),
            id: compound.id.map(str::to_owned),
            classes: compound.classes.iter().map(|c| (*c).to_owned()).collect(),
            parent: Some(parent),
            ..MemoryElement::default()
        });
        if let Some(parent) = self.elements.get_mut(parent.0 as usize) {
            parent.children.push(id);
        }
        id
    }

    /// Places an element (the host's layout would normally do this).
    pub fn set_rect(&mut self, element: ElementId, rect: Rect) {
        if let Some(el) = self.get_mut(element) {
            el.rect = rect;
        }
    }

    /// Direct access to an element.
    #[must_use]
    pub fn element(&self, element: ElementId) -> Option<&MemoryElement> {
        self.elements.get(element.0 as usize)
    }

    /// Injected `<style>` blocks, in order.
    #[must_use]
    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// Number of writes performed through [`Document`].
    #[must_use]
    pub fn mutations(&self) -> u64 {
        self.mutations
    }

    fn get_mut(&mut self, element: ElementId) -> Option<&mut MemoryElement> {
        self.elements.get_mut(element.0 as usize)
    }

    fn write(&mut self, element: ElementId) -> Option<&mut MemoryElement> {
        self.mutations += 1;
        self.get_mut(element)
    }

    fn collect_descendants(&self, parent: ElementId, selector: &str, out: &mut Vec<ElementId>) {
        let Some(el) = self.element(parent) else {
            return;
        };
        for &child in &el.children {
            if let Some(child_el) = self.element(child) {
                if selector_matches(selector, child_el) {
                    out.push(child);
                }
            }
            self.collect_descendants(child, selector, out);
        }
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        let mut out = Vec::new();
        let body = self.body();
        if self
            .element(body)
            .is_some_and(|el| selector_matches(selector, el))
        {
            out.push(body);
        }
        self.collect_descendants(body, selector, &mut out);
        out
    }

    fn query_within(&self, parent: ElementId, selector: &str) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.collect_descendants(parent, selector, &mut out);
        out
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        let el = self.element(element)?;
        if name == "id" {
            return el.id.clone();
        }
        el.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(el) = self.write(element) {
            el.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    fn style(&self, element: ElementId, property: &str) -> Option<String> {
        self.element(element)?.style.get(property).cloned()
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        if let Some(el) = self.write(element) {
            el.style.insert(property.to_owned(), value.to_owned());
        }
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.element(element)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(el) = self.write(element) {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_owned());
            }
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(el) = self.write(element) {
            el.classes.retain(|c| c != class);
        }
    }

    fn text(&self, element: ElementId) -> String {
        self.element(element)
            .map(|el| el.text.clone())
            .unwrap_or_default()
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        if let Some(el) = self.write(element) {
            text.clone_into(&mut el.text);
        }
    }

    fn bounding_rect(&self, element: ElementId) -> Rect {
        self.element(element).map_or(Rect::ZERO, |el| el.rect)
    }

    fn create_element(&mut self, tag: &str, class: &str) -> ElementId {
        let body = self.body();
        let id = self.insert(body, tag);
        self.add_class(id, class);
        id
    }

    fn inject_stylesheet(&mut self, css: &str) {
        self.mutations += 1;
        self.stylesheets.push(css.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_parse() {
        let c = Compound::parse("button#closeEyesBtn.primary.big");
        assert_eq!(c.tag, Some("button"));
        assert_eq!(c.id, Some("closeEyesBtn"));
        assert_eq!(c.classes, vec!["primary", "big"]);

        let c = Compound::parse(" .bento-card ");
        assert_eq!(c.tag, None);
        assert_eq!(c.classes, vec!["bento-card"]);
    }

    #[test]
    fn test_query_by_class_id_tag_and_list() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let link = doc.insert(body, "a");
        let card = doc.insert(body, "section.bento-card");
        let button = doc.insert(card, "button#closeEyesBtn");

        assert_eq!(doc.query_all(".bento-card"), vec![card]);
        assert_eq!(doc.query("#closeEyesBtn"), Some(button));
        assert_eq!(doc.query_all("a, button, .bento-card"), vec![link, card, button]);
        assert_eq!(doc.query(".missing"), None);
        assert!(doc.query_all("").is_empty());
    }

    #[test]
    fn test_query_within_only_descendants() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let left = doc.insert(body, ".eyeball");
        let right = doc.insert(body, ".eyeball");
        let left_pupil = doc.insert(left, ".pupil");
        let right_pupil = doc.insert(right, ".pupil");

        assert_eq!(doc.query_within(left, ".pupil"), vec![left_pupil]);
        assert_eq!(doc.query_within(right, ".pupil"), vec![right_pupil]);
    }

    #[test]
    fn test_class_and_style_writes() {
        let mut doc = MemoryDocument::new();
        let nav = doc.insert(doc.body(), "nav.navbar");

        doc.add_class(nav, "scrolled");
        doc.add_class(nav, "scrolled");
        assert_eq!(doc.element(nav).unwrap().classes, vec!["navbar", "scrolled"]);

        doc.remove_class(nav, "scrolled");
        assert!(!doc.has_class(nav, "scrolled"));

        doc.set_style(nav, "background", "red");
        assert_eq!(doc.style(nav, "background").as_deref(), Some("red"));
        assert_eq!(doc.mutations(), 4);
    }

    #[test]
    fn test_unknown_element_is_tolerated() {
        let mut doc = MemoryDocument::new();
        let ghost = ElementId::new(99);

        doc.set_text(ghost, "boo");
        assert_eq!(doc.text(ghost), "");
        assert_eq!(doc.bounding_rect(ghost), Rect::ZERO);
        assert_eq!(doc.attribute(ghost, "data-text"), None);
    }

    #[test]
    fn test_create_element_appends_to_body() {
        let mut doc = MemoryDocument::new();
        let dot = doc.create_element("div", "cursor-dot");

        assert_eq!(doc.query(".cursor-dot"), Some(dot));
        assert_eq!(doc.element(dot).unwrap().parent, Some(doc.body()));
        assert_eq!(doc.mutations(), 1);

        doc.create_element("div", "cursor-outline");
        assert_eq!(doc.mutations(), 2);
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert_eq!(rect.center(), (60.0, 35.0));
    }
}
