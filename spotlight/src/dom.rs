//! The document seam.
//!
//! Everything the widget reads from or writes to the page goes through [`Dom`].
//! A browser binding implements it over the real document; [`Page`](crate::page::Page)
//! implements it in memory.

use crate::error::DomError;
use crate::geometry::Rect;

pub type DomResult<T> = Result<T, DomError>;

pub trait Dom {
    /// Returns true if an element with this id exists.
    fn contains(&self, id: &str) -> bool;

    fn attribute(&self, id: &str, name: &str) -> DomResult<Option<String>>;
    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> DomResult<()>;

    fn is_checked(&self, id: &str) -> DomResult<bool>;
    fn set_checked(&mut self, id: &str, checked: bool) -> DomResult<()>;

    /// Inline style property, `None` when not set.
    fn style(&self, id: &str, property: &str) -> DomResult<Option<String>>;
    /// Sets an inline style property. An empty value removes it.
    fn set_style(&mut self, id: &str, property: &str, value: &str) -> DomResult<()>;

    fn has_class(&self, id: &str, class: &str) -> DomResult<bool>;
    fn add_class(&mut self, id: &str, class: &str) -> DomResult<()>;
    fn remove_class(&mut self, id: &str, class: &str) -> DomResult<()>;

    /// Rendered height including borders (`offsetHeight`).
    fn offset_height(&self, id: &str) -> DomResult<f64>;
    /// Height of the content regardless of clipping (`scrollHeight`).
    fn scroll_height(&self, id: &str) -> DomResult<f64>;
    /// Box relative to the viewport.
    fn bounding_rect(&self, id: &str) -> DomResult<Rect>;

    /// `window.innerHeight`. Zero when the platform does not report it.
    fn inner_height(&self) -> f64;
    /// `window.pageYOffset`. Zero when the platform does not report it.
    fn page_y_offset(&self) -> f64;
    /// `document.documentElement.clientHeight`.
    fn client_height(&self) -> f64;
    /// `document.documentElement.scrollTop`.
    fn scroll_top(&self) -> f64;
    /// `document.documentElement.clientTop`.
    fn client_top(&self) -> f64;

    /// Scrolls the window to a vertical position.
    fn scroll_to(&mut self, y: f64);

    fn focus(&mut self, id: &str) -> DomResult<()>;
    fn focused(&self) -> Option<&str>;
}
