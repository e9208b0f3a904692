use crate::dom::{Dom, DomResult};

/// Height of the viewport, falling back to the document element's client
/// height when the window does not report one.
pub fn viewport_height(dom: &impl Dom) -> f64 {
    let inner = dom.inner_height();
    if inner > 0.0 {
        inner
    } else {
        dom.client_height()
    }
}

/// True if the whole element is inside the viewport.
pub fn is_fully_visible(dom: &impl Dom, id: &str) -> DomResult<bool> {
    let rect = dom.bounding_rect(id)?;
    let height = viewport_height(dom);
    let visible = rect.fits_vertically(height);
    log::trace!(
        "[viewport] {id} top={} bottom={} viewport={height} visible={visible}",
        rect.top(),
        rect.bottom()
    );
    Ok(visible)
}

/// Current vertical scroll position of the page.
///
/// Uses the window offset, or the document element's scroll position where
/// the window offset is not reported, minus the document element's top border.
pub fn current_scroll_offset(dom: &impl Dom) -> f64 {
    let offset = match dom.page_y_offset() {
        y if y != 0.0 => y,
        _ => dom.scroll_top(),
    };
    offset - dom.client_top()
}
