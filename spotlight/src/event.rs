use crate::platform::CompletionFamily;

/// Page events the widget reacts to, targeted by element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click or keyboard activation
    Click { target: String },
    /// A CSS animation finished. `name` is the platform event name,
    /// e.g. `animationend` or `webkitAnimationEnd`.
    AnimationEnd { target: String, name: String },
    /// A CSS transition finished.
    TransitionEnd { target: String, name: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    /// Standard `animationend` on `target`.
    pub fn animation_end(target: impl Into<String>) -> Self {
        Self::AnimationEnd {
            target: target.into(),
            name: "animationend".to_string(),
        }
    }

    /// Standard `transitionend` on `target`.
    pub fn transition_end(target: impl Into<String>) -> Self {
        Self::TransitionEnd {
            target: target.into(),
            name: "transitionend".to_string(),
        }
    }

    /// The completion family and event name, for animation/transition end events.
    pub fn completion(&self) -> Option<(CompletionFamily, &str)> {
        match self {
            Self::Click { .. } => None,
            Self::AnimationEnd { name, .. } => Some((CompletionFamily::Animation, name.as_str())),
            Self::TransitionEnd { name, .. } => Some((CompletionFamily::Transition, name.as_str())),
        }
    }
}
