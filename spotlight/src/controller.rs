//! The spotlight toggle.
//!
//! [`Spotlight`] owns one widget instance: the document it is mounted on, the
//! expanded/collapsed state and the pending completion waits. Embedders feed
//! it page events through [`Spotlight::handle`].

use std::time::Instant;

use crate::config::SpotlightConfig;
use crate::dom::{Dom, DomResult};
use crate::error::MountError;
use crate::event::Event;
use crate::height::HeightStabilizer;
use crate::platform::{EventNames, VendorPrefixed};
use crate::scroll::{ScrollCompensator, ScrollSnapshot};
use crate::waiter::CompletionWaiter;

/// Whether the panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Collapsed,
    Expanded,
}

impl ToggleState {
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    /// Value of the expansion attribute for this state.
    pub fn as_attribute(self) -> &'static str {
        match self {
            Self::Collapsed => "false",
            Self::Expanded => "true",
        }
    }
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The panel changed state. `compensation` is set when a collapse
    /// scrolled the page.
    Toggled {
        state: ToggleState,
        compensation: Option<ScrollSnapshot>,
    },
    /// A completion event ran this many continuations.
    Completed(usize),
    /// The event was not for this widget.
    Ignored,
}

pub struct Spotlight<D> {
    dom: D,
    config: SpotlightConfig,
    state: ToggleState,
    waiter: CompletionWaiter<D>,
    height: HeightStabilizer,
    scroll: ScrollCompensator,
    has_close: bool,
}

impl<D: Dom + 'static> Spotlight<D> {
    /// Mount on `dom`, recognising vendor-prefixed completion events.
    pub fn mount(dom: D, config: SpotlightConfig) -> Result<Self, MountError> {
        Self::mount_with_names(dom, config, VendorPrefixed)
    }

    /// Mount on `dom` using `names` to recognise completion events.
    ///
    /// Seeds the expansion attribute from the control's checked state, pins the
    /// control's height so the page does not jump once styles load, and reveals
    /// the close button.
    pub fn mount_with_names(
        mut dom: D,
        config: SpotlightConfig,
        names: impl EventNames + 'static,
    ) -> Result<Self, MountError> {
        config.validate()?;

        if !dom.contains(&config.control_id) {
            return Err(MountError::MissingControl(config.control_id.clone()));
        }
        if !dom.contains(&config.content_id) {
            return Err(MountError::MissingContent(config.content_id.clone()));
        }
        if !dom.contains(&config.body_id) {
            return Err(MountError::MissingBody(config.body_id.clone()));
        }
        let has_close = !config.close_id.is_empty() && dom.contains(&config.close_id);

        let control = config.control_id.as_str();
        let state = ToggleState::from_checked(dom.is_checked(control)?);
        dom.set_attribute(control, &config.expanded_attribute, state.as_attribute())?;

        let height = dom.offset_height(control)? / config.rem_base;
        dom.set_style(control, "height", &format!("{height}em"))?;
        dom.set_style(control, "display", "block")?;

        if has_close {
            dom.remove_class(&config.close_id, &config.hidden_class)?;
        }

        log::debug!(
            "[spotlight] mounted on {} state={state:?} close={has_close}",
            config.control_id
        );

        Ok(Self {
            height: HeightStabilizer::new(config.content_id.clone())
                .with_timeout(config.wait_timeout()),
            scroll: ScrollCompensator::new(&config),
            waiter: CompletionWaiter::with_names(names),
            dom,
            config,
            state,
            has_close,
        })
    }

    /// Handle a page event.
    pub fn handle(&mut self, event: &Event) -> DomResult<Outcome> {
        match event {
            Event::Click { target } if self.is_trigger(target) => self.toggle(target),
            Event::Click { .. } => Ok(Outcome::Ignored),
            Event::AnimationEnd { target, .. } | Event::TransitionEnd { target, .. } => {
                let Some((family, name)) = event.completion() else {
                    return Ok(Outcome::Ignored);
                };
                match self.waiter.deliver(&mut self.dom, family, target, name)? {
                    0 => Ok(Outcome::Ignored),
                    n => Ok(Outcome::Completed(n)),
                }
            }
        }
    }

    /// Flip the panel as if `trigger` had been clicked.
    ///
    /// A failed scroll compensation is returned only after the height wait is
    /// registered and the control is back in sync with the state.
    pub fn toggle(&mut self, trigger: &str) -> DomResult<Outcome> {
        let state = self.state.toggled();
        self.state = state;

        let control = self.config.control_id.as_str();
        self.dom
            .set_attribute(control, &self.config.expanded_attribute, state.as_attribute())?;
        log::debug!("[spotlight] {trigger} -> {state:?}");

        let compensation = match state {
            ToggleState::Expanded => Ok(None),
            ToggleState::Collapsed => {
                self.scroll
                    .on_collapse(&mut self.dom, &mut self.waiter, trigger)
            }
        };
        if let Err(err) = &compensation {
            log::warn!("[spotlight] scroll compensation failed: {err}");
        }
        self.height
            .reconcile(&self.dom, &mut self.waiter, state.is_expanded())?;

        // The close button is a second face of the checkbox.
        if self.has_close && trigger == self.config.close_id {
            self.dom.set_checked(&self.config.control_id, false)?;
        }

        let compensation = compensation?;
        Ok(Outcome::Toggled {
            state,
            compensation,
        })
    }

    /// Run waits whose timeout has passed. Returns how many ran.
    pub fn poll_timeouts(&mut self, now: Instant) -> DomResult<usize> {
        self.waiter.expire(&mut self.dom, now)
    }
}

impl<D> Spotlight<D> {
    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn config(&self) -> &SpotlightConfig {
        &self.config
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    /// Number of continuations still waiting for a completion event.
    pub fn pending(&self) -> usize {
        self.waiter.pending_count()
    }

    fn is_trigger(&self, target: &str) -> bool {
        target == self.config.control_id || (self.has_close && target == self.config.close_id)
    }
}

impl<D> std::fmt::Debug for Spotlight<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spotlight")
            .field("control", &self.config.control_id)
            .field("state", &self.state)
            .field("pending", &self.waiter.pending_count())
            .finish_non_exhaustive()
    }
}
