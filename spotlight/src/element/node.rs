use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// What kind of node this is. Only affects native click behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementKind {
    #[default]
    Block,
    /// Clicking toggles `checked`.
    Checkbox,
    Button,
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub kind: ElementKind,

    // Markup
    pub attributes: HashMap<String, String>,
    pub classes: Vec<String>,
    /// Inline style properties (`element.style`).
    pub style: HashMap<String, String>,
    pub checked: bool,

    // Geometry, in CSS pixels
    /// Distance from the top of the document.
    pub top: f64,
    pub width: f64,
    /// Height the stylesheet gives the element when no inline max-height applies.
    pub height: f64,
    /// Height of the content, unclipped.
    pub content_height: f64,

    pub children: Vec<Element>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            kind: ElementKind::Block,
            attributes: HashMap::new(),
            classes: Vec::new(),
            style: HashMap::new(),
            checked: false,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            content_height: 0.0,
            children: Vec::new(),
        }
    }
}

impl Element {
    pub fn block() -> Self {
        Self {
            id: generate_id("block"),
            ..Default::default()
        }
    }

    pub fn checkbox() -> Self {
        Self {
            id: generate_id("checkbox"),
            kind: ElementKind::Checkbox,
            ..Default::default()
        }
    }

    pub fn button() -> Self {
        Self {
            id: generate_id("button"),
            kind: ElementKind::Button,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    // Geometry
    pub fn top(mut self, top: f64) -> Self {
        self.top = top;
        self
    }

    /// Sets the stylesheet height. Content height follows unless set separately.
    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        if self.content_height < height {
            self.content_height = height;
        }
        self
    }

    pub fn content_height(mut self, content_height: f64) -> Self {
        self.content_height = content_height;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Rendered height: the stylesheet height, capped by an inline pixel
    /// max-height if one is set, in which case the content height shows through.
    pub fn rendered_height(&self) -> f64 {
        match self.style.get("max-height").and_then(|v| parse_px(v.as_str())) {
            Some(max) => self.content_height.min(max),
            None => self.height,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        if value.is_empty() {
            self.style.remove(property);
        } else {
            self.style.insert(property.to_string(), value.to_string());
        }
    }
}

/// Parse a CSS pixel length such as `"300px"`.
pub(crate) fn parse_px(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}
