//! Scroll compensation when the panel collapses.
//!
//! Collapsing a panel the reader has scrolled into moves everything below it
//! up by the panel's height. The compensator scrolls the window back to an
//! anchor just above the spotlight and hides the jump with a FLIP: the body is
//! translated by the scroll delta so nothing appears to move, then a body
//! class animates the translation back to zero. When that animation ends the
//! inline transform and class are removed and focus returns to the control.

use std::time::Duration;

use crate::config::SpotlightConfig;
use crate::dom::{Dom, DomResult};
use crate::viewport::{current_scroll_offset, is_fully_visible};
use crate::waiter::{CompletionWaiter, TransitionRequest};

/// Offsets captured while compensating one collapse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub previous_offset: f64,
    pub target_offset: f64,
    pub compensation_delta: f64,
}

impl ScrollSnapshot {
    /// Compute the snapshot for a page scrolled to `page_offset`, where the
    /// normalized scroll offset is `previous_offset`.
    pub fn compute(previous_offset: f64, page_offset: f64, collapse_offset: f64) -> Self {
        let target_offset = page_offset - collapse_offset;
        Self {
            previous_offset,
            target_offset,
            compensation_delta: target_offset - previous_offset,
        }
    }

    /// Inline transform that keeps content in place across the scroll jump.
    pub fn transform(&self) -> String {
        format!("translate3d(0, {}px, 0)", self.compensation_delta)
    }
}

#[derive(Debug, Clone)]
pub struct ScrollCompensator {
    control_id: String,
    content_id: String,
    body_id: String,
    flip_class: String,
    collapse_offset: f64,
    timeout: Option<Duration>,
}

impl ScrollCompensator {
    pub fn new(config: &SpotlightConfig) -> Self {
        Self {
            control_id: config.control_id.clone(),
            content_id: config.content_id.clone(),
            body_id: config.body_id.clone(),
            flip_class: config.flip_class.clone(),
            collapse_offset: config.collapse_offset(),
            timeout: config.wait_timeout(),
        }
    }

    /// Compensate a collapse triggered from `trigger_id`.
    ///
    /// Returns `None` without touching the page when the control itself was
    /// the trigger or the content region is already fully visible.
    pub fn on_collapse<D: Dom + 'static>(
        &self,
        dom: &mut D,
        waiter: &mut CompletionWaiter<D>,
        trigger_id: &str,
    ) -> DomResult<Option<ScrollSnapshot>> {
        if trigger_id == self.control_id {
            log::debug!("[scroll] collapse from control, no compensation");
            return Ok(None);
        }
        if is_fully_visible(&*dom, &self.content_id)? {
            log::debug!("[scroll] {} fully visible, no compensation", self.content_id);
            return Ok(None);
        }

        let snapshot = ScrollSnapshot::compute(
            current_scroll_offset(&*dom),
            dom.page_y_offset(),
            self.collapse_offset,
        );
        log::debug!("[scroll] compensating {snapshot:?}");

        // First/Last/Invert: pin the content, then jump.
        dom.set_style(&self.body_id, "transform", &snapshot.transform())?;
        dom.add_class(&self.body_id, &self.flip_class)?;
        dom.scroll_to(snapshot.target_offset);

        // Play: the class animates the transform back to zero.
        let body_id = self.body_id.clone();
        let flip_class = self.flip_class.clone();
        let control_id = self.control_id.clone();
        let request = TransitionRequest::animation(self.body_id.clone(), move |dom: &mut D| {
            restore_focus(dom, &body_id, &flip_class, &control_id)
        })
        .timeout(self.timeout);
        waiter.wait(request);

        Ok(Some(snapshot))
    }
}

/// Clear the FLIP transform and class from the body and focus the control.
pub fn restore_focus(
    dom: &mut impl Dom,
    body_id: &str,
    flip_class: &str,
    control_id: &str,
) -> DomResult<()> {
    dom.set_style(body_id, "transform", "")?;
    dom.remove_class(body_id, flip_class)?;
    dom.focus(control_id)?;
    log::debug!("[scroll] compensation done, focus on {control_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_delta() {
        let s = ScrollSnapshot::compute(1200.0, 1200.0, 190.0);
        assert_eq!(s.target_offset, 1010.0);
        assert_eq!(s.compensation_delta, -190.0);
        assert_eq!(s.transform(), "translate3d(0, -190px, 0)");
    }

    #[test]
    fn test_snapshot_with_client_top() {
        let s = ScrollSnapshot::compute(1198.0, 1200.0, 190.0);
        assert_eq!(s.compensation_delta, -188.0);
    }
}
