//! Completion event names per platform.
//!
//! Engines disagree on what the animation-end and transition-end events are
//! called. The widget asks an [`EventNames`] implementation instead of carrying
//! its own tables.

/// Which kind of CSS completion to wait for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionFamily {
    Animation,
    Transition,
}

/// Platform capability lookup for completion event names.
pub trait EventNames {
    /// Every event name that signals completion for `family`. Any one of them
    /// firing counts as completion.
    fn completion_events(&self, family: CompletionFamily) -> &'static [&'static str];
}

/// Unprefixed plus legacy vendor-prefixed names.
#[derive(Debug, Clone, Copy, Default)]
pub struct VendorPrefixed;

const ANIMATION_END: &[&str] = &[
    "webkitAnimationEnd",
    "mozAnimationEnd",
    "oAnimationEnd",
    "oanimationend",
    "animationend",
];

const TRANSITION_END: &[&str] = &[
    "webkitTransitionEnd",
    "mozTransitionEnd",
    "oTransitionEnd",
    "transitionend",
];

impl EventNames for VendorPrefixed {
    fn completion_events(&self, family: CompletionFamily) -> &'static [&'static str] {
        match family {
            CompletionFamily::Animation => ANIMATION_END,
            CompletionFamily::Transition => TRANSITION_END,
        }
    }
}

/// Only the standard names.
#[derive(Debug, Clone, Copy, Default)]
pub struct Standard;

impl EventNames for Standard {
    fn completion_events(&self, family: CompletionFamily) -> &'static [&'static str] {
        match family {
            CompletionFamily::Animation => &["animationend"],
            CompletionFamily::Transition => &["transitionend"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_do_not_overlap() {
        let names = VendorPrefixed;
        let animation = names.completion_events(CompletionFamily::Animation);
        let transition = names.completion_events(CompletionFamily::Transition);
        assert!(animation.iter().all(|n| !transition.contains(n)));
    }

    #[test]
    fn test_standard_names_are_in_prefixed_tables() {
        for family in [CompletionFamily::Animation, CompletionFamily::Transition] {
            let prefixed = VendorPrefixed.completion_events(family);
            for name in Standard.completion_events(family) {
                assert!(prefixed.contains(name), "{name} missing for {family:?}");
            }
        }
    }
}
