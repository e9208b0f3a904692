//! Height reconciliation for the clipped content region.
//!
//! The stylesheet animates `max-height` with `overflow: hidden`, which cannot
//! transition to `auto`. Once the transition has settled, content that is
//! still clipped while expanding gets an inline pixel ceiling equal to its
//! natural height. In every other case the inline override is removed so the
//! stylesheet is back in charge.

use std::time::Duration;

use crate::dom::{Dom, DomResult};
use crate::waiter::{CompletionWaiter, Subscription, TransitionRequest};

/// Rendering engines disagree by up to a pixel when rounding heights.
const ROUNDING_TOLERANCE: f64 = 1.0;

/// Settled rendered height against natural content height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightQuery {
    pub current_rendered_height: f64,
    pub natural_content_height: f64,
}

impl HeightQuery {
    /// Build a query from a raw `offsetHeight`, applying the rounding tolerance.
    pub fn settled(offset_height: f64, natural_content_height: f64) -> Self {
        Self {
            current_rendered_height: (offset_height + ROUNDING_TOLERANCE).round(),
            natural_content_height,
        }
    }

    pub fn is_clipped(&self) -> bool {
        self.current_rendered_height < self.natural_content_height
    }

    /// The inline max-height to apply, or `None` to clear it.
    pub fn ceiling(&self, expanding: bool) -> Option<f64> {
        (expanding && self.is_clipped()).then_some(self.natural_content_height)
    }
}

#[derive(Debug, Clone)]
pub struct HeightStabilizer {
    content_id: String,
    timeout: Option<Duration>,
}

impl HeightStabilizer {
    pub fn new(content_id: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the natural height now and fix up `max-height` once the content
    /// region's transition ends.
    pub fn reconcile<D: Dom + 'static>(
        &self,
        dom: &D,
        waiter: &mut CompletionWaiter<D>,
        expanding: bool,
    ) -> DomResult<Subscription> {
        let natural = dom.scroll_height(&self.content_id)?;
        log::debug!(
            "[height] reconcile {} expanding={expanding} natural={natural}",
            self.content_id
        );

        let content_id = self.content_id.clone();
        let request = TransitionRequest::transition(self.content_id.clone(), move |dom: &mut D| {
            adjust_height(dom, &content_id, expanding, natural).map(|_| ())
        })
        .timeout(self.timeout);

        Ok(waiter.wait(request))
    }
}

/// Compare the settled height against `natural` and set or clear the inline
/// max-height. Returns the ceiling that was applied, if any.
pub fn adjust_height(
    dom: &mut impl Dom,
    content_id: &str,
    expanding: bool,
    natural: f64,
) -> DomResult<Option<f64>> {
    let query = HeightQuery::settled(dom.offset_height(content_id)?, natural);

    match query.ceiling(expanding) {
        Some(max) => {
            log::debug!(
                "[height] {content_id} clipped at {}, max-height={max}px",
                query.current_rendered_height
            );
            dom.set_style(content_id, "max-height", &format!("{max}px"))?;
            Ok(Some(max))
        }
        None => {
            dom.set_style(content_id, "max-height", "")?;
            Ok(None)
        }
    }
}
