//! In-memory document.
//!
//! `Page` implements [`Dom`] over an [`Element`] tree with a simulated window:
//! a viewport height, a vertical scroll position and keyboard focus. Nothing is
//! laid out; element geometry is whatever the tree says it is.

use crate::dom::{Dom, DomResult};
use crate::element::{find_element, find_element_mut, Element, ElementKind};
use crate::error::DomError;
use crate::event::Event;
use crate::geometry::Rect;

#[derive(Debug, Clone)]
pub struct Page {
    body: Element,
    viewport_height: f64,
    scroll_y: f64,
    client_top: f64,
    /// Report `pageYOffset` as zero, like engines that only expose
    /// `documentElement.scrollTop`.
    legacy_scroll: bool,
    /// Report `innerHeight` as zero.
    legacy_viewport: bool,
    focused: Option<String>,
}

impl Page {
    /// Create a page whose document body is `body`.
    pub fn new(body: Element) -> Self {
        Self {
            body,
            viewport_height: 0.0,
            scroll_y: 0.0,
            client_top: 0.0,
            legacy_scroll: false,
            legacy_viewport: false,
            focused: None,
        }
    }

    pub fn viewport_height(mut self, height: f64) -> Self {
        self.viewport_height = height;
        self
    }

    pub fn scrolled_to(mut self, y: f64) -> Self {
        self.scroll_y = y.max(0.0);
        self
    }

    pub fn client_top(mut self, client_top: f64) -> Self {
        self.client_top = client_top;
        self
    }

    pub fn legacy_scroll(mut self, legacy: bool) -> Self {
        self.legacy_scroll = legacy;
        self
    }

    pub fn legacy_viewport(mut self, legacy: bool) -> Self {
        self.legacy_viewport = legacy;
        self
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        find_element(&self.body, id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.body, id)
    }

    /// Simulate a user click, including the native default action: a checkbox
    /// flips its checked state before any handler sees the event.
    pub fn click(&mut self, id: &str) -> DomResult<Event> {
        let element = self.get_mut(id)?;
        if element.kind == ElementKind::Checkbox {
            element.checked = !element.checked;
        }
        log::trace!("[page] click {id}");
        Ok(Event::Click {
            target: id.to_string(),
        })
    }

    /// Set the stylesheet height an element settles at after its transition.
    pub fn settle_height(&mut self, id: &str, height: f64) -> DomResult<()> {
        self.get_mut(id)?.height = height;
        Ok(())
    }

    fn get(&self, id: &str) -> DomResult<&Element> {
        self.element(id).ok_or_else(|| DomError::not_found(id))
    }

    fn get_mut(&mut self, id: &str) -> DomResult<&mut Element> {
        self.element_mut(id).ok_or_else(|| DomError::not_found(id))
    }
}

impl Dom for Page {
    fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn attribute(&self, id: &str, name: &str) -> DomResult<Option<String>> {
        Ok(self.get(id)?.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> DomResult<()> {
        self.get_mut(id)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn is_checked(&self, id: &str) -> DomResult<bool> {
        Ok(self.get(id)?.checked)
    }

    fn set_checked(&mut self, id: &str, checked: bool) -> DomResult<()> {
        self.get_mut(id)?.checked = checked;
        Ok(())
    }

    fn style(&self, id: &str, property: &str) -> DomResult<Option<String>> {
        Ok(self.get(id)?.style.get(property).cloned())
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) -> DomResult<()> {
        self.get_mut(id)?.set_style(property, value);
        Ok(())
    }

    fn has_class(&self, id: &str, class: &str) -> DomResult<bool> {
        Ok(self.get(id)?.has_class(class))
    }

    fn add_class(&mut self, id: &str, class: &str) -> DomResult<()> {
        self.get_mut(id)?.add_class(class);
        Ok(())
    }

    fn remove_class(&mut self, id: &str, class: &str) -> DomResult<()> {
        self.get_mut(id)?.remove_class(class);
        Ok(())
    }

    fn offset_height(&self, id: &str) -> DomResult<f64> {
        Ok(self.get(id)?.rendered_height())
    }

    fn scroll_height(&self, id: &str) -> DomResult<f64> {
        let element = self.get(id)?;
        Ok(element.content_height.max(element.rendered_height()))
    }

    fn bounding_rect(&self, id: &str) -> DomResult<Rect> {
        let element = self.get(id)?;
        Ok(Rect::new(
            0.0,
            element.top,
            element.width,
            element.rendered_height(),
        )
        .offset_y(-self.scroll_y))
    }

    fn inner_height(&self) -> f64 {
        if self.legacy_viewport {
            0.0
        } else {
            self.viewport_height
        }
    }

    fn page_y_offset(&self) -> f64 {
        if self.legacy_scroll {
            0.0
        } else {
            self.scroll_y
        }
    }

    fn client_height(&self) -> f64 {
        self.viewport_height
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_y
    }

    fn client_top(&self) -> f64 {
        self.client_top
    }

    fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    fn focus(&mut self, id: &str) -> DomResult<()> {
        self.get(id)?;
        self.focused = Some(id.to_string());
        Ok(())
    }

    fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        Page::new(
            Element::block()
                .id("body")
                .child(Element::checkbox().id("toggle").top(40.0).height(20.0))
                .child(Element::block().id("panel").top(100.0).height(300.0)),
        )
        .viewport_height(600.0)
    }

    #[test]
    fn test_click_flips_checkbox() {
        let mut page = page();
        let event = page.click("toggle").unwrap();
        assert_eq!(
            event,
            Event::Click {
                target: "toggle".to_string()
            }
        );
        assert!(page.is_checked("toggle").unwrap());
        page.click("toggle").unwrap();
        assert!(!page.is_checked("toggle").unwrap());
    }

    #[test]
    fn test_missing_element_is_an_error() {
        let mut page = page();
        assert_eq!(page.click("nope"), Err(DomError::not_found("nope")));
        assert!(page.set_style("nope", "transform", "").is_err());
        assert!(!page.contains("nope"));
    }

    #[test]
    fn test_bounding_rect_tracks_scroll() {
        let mut page = page();
        assert_eq!(page.bounding_rect("panel").unwrap().top(), 100.0);
        page.scroll_to(150.0);
        let rect = page.bounding_rect("panel").unwrap();
        assert_eq!(rect.top(), -50.0);
        assert_eq!(rect.bottom(), 250.0);
    }

    #[test]
    fn test_scroll_to_clamps_at_zero() {
        let mut page = page();
        page.scroll_to(-40.0);
        assert_eq!(page.scroll_y(), 0.0);
    }

    #[test]
    fn test_legacy_metrics() {
        let page = page().scrolled_to(80.0).legacy_scroll(true).legacy_viewport(true);
        assert_eq!(page.page_y_offset(), 0.0);
        assert_eq!(page.scroll_top(), 80.0);
        assert_eq!(page.inner_height(), 0.0);
        assert_eq!(page.client_height(), 600.0);
    }
}
