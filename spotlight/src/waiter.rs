//! One-shot waits for CSS animation and transition completion.
//!
//! A [`TransitionRequest`] names a completion family, a target element and a
//! continuation. [`CompletionWaiter::wait`] turns it into a [`Subscription`]
//! that listens for every event name of the family on the target. The first
//! delivery of any of those names disposes the subscription and runs the
//! continuation; later deliveries find nothing to run.
//!
//! Without a timeout a wait whose event never arrives stays pending forever.

use std::fmt;
use std::time::{Duration, Instant};

use crate::dom::DomResult;
use crate::error::DomError;
use crate::platform::{CompletionFamily, EventNames, VendorPrefixed};

/// Work to run once a completion event arrives. Arguments are captured.
pub type Continuation<D> = Box<dyn FnOnce(&mut D) -> DomResult<()>>;

/// A request to run a continuation when `target` finishes animating.
pub struct TransitionRequest<D> {
    pub family: CompletionFamily,
    pub target: String,
    pub continuation: Continuation<D>,
    pub timeout: Option<Duration>,
}

impl<D> TransitionRequest<D> {
    pub fn new(
        family: CompletionFamily,
        target: impl Into<String>,
        continuation: impl FnOnce(&mut D) -> DomResult<()> + 'static,
    ) -> Self {
        Self {
            family,
            target: target.into(),
            continuation: Box::new(continuation),
            timeout: None,
        }
    }

    /// Wait for an animation to end on `target`.
    pub fn animation(
        target: impl Into<String>,
        continuation: impl FnOnce(&mut D) -> DomResult<()> + 'static,
    ) -> Self {
        Self::new(CompletionFamily::Animation, target, continuation)
    }

    /// Wait for a transition to end on `target`.
    pub fn transition(
        target: impl Into<String>,
        continuation: impl FnOnce(&mut D) -> DomResult<()> + 'static,
    ) -> Self {
        Self::new(CompletionFamily::Transition, target, continuation)
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl<D> fmt::Debug for TransitionRequest<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRequest")
            .field("family", &self.family)
            .field("target", &self.target)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Handle to a pending wait.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
    family: CompletionFamily,
    target: String,
}

struct Pending<D> {
    subscription: Subscription,
    names: &'static [&'static str],
    continuation: Continuation<D>,
    deadline: Option<Instant>,
}

impl<D> Pending<D> {
    fn matches(&self, family: CompletionFamily, target: &str, name: &str) -> bool {
        self.subscription.family == family
            && self.subscription.target == target
            && self.names.iter().any(|n| *n == name)
    }
}

/// Registry of pending completion waits.
pub struct CompletionWaiter<D> {
    names: Box<dyn EventNames>,
    pending: Vec<Pending<D>>,
    next_id: u64,
}

impl<D> Default for CompletionWaiter<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for CompletionWaiter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending: Vec<_> = self.pending.iter().map(|p| &p.subscription).collect();
        f.debug_struct("CompletionWaiter")
            .field("pending", &pending)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl<D> CompletionWaiter<D> {
    /// Waiter that recognises vendor-prefixed event names.
    pub fn new() -> Self {
        Self::with_names(VendorPrefixed)
    }

    pub fn with_names(names: impl EventNames + 'static) -> Self {
        Self {
            names: Box::new(names),
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a one-shot wait.
    pub fn wait(&mut self, request: TransitionRequest<D>) -> Subscription {
        self.wait_at(request, Instant::now())
    }

    /// Register a one-shot wait whose timeout, if any, counts from `now`.
    pub fn wait_at(&mut self, request: TransitionRequest<D>, now: Instant) -> Subscription {
        let TransitionRequest {
            family,
            target,
            continuation,
            timeout,
        } = request;

        let subscription = Subscription {
            id: self.next_id,
            family,
            target,
        };
        self.next_id += 1;

        let names = self.names.completion_events(family);
        log::debug!(
            "[waiter] subscribe #{} {:?} on {} ({} names, timeout={:?})",
            subscription.id,
            family,
            subscription.target,
            names.len(),
            timeout
        );

        self.pending.push(Pending {
            subscription: subscription.clone(),
            names,
            continuation,
            deadline: timeout.map(|t| now + t),
        });

        subscription
    }

    /// Deliver a completion event. Runs the continuation of every pending
    /// subscription on `target` whose family lists `name`, in registration
    /// order, and returns how many ran.
    ///
    /// Every matching continuation runs even if an earlier one fails; the
    /// first failure is returned.
    pub fn deliver(
        &mut self,
        dom: &mut D,
        family: CompletionFamily,
        target: &str,
        name: &str,
    ) -> DomResult<usize> {
        let fired = self.take_where(|p| p.matches(family, target, name));
        if fired.is_empty() {
            log::trace!("[waiter] {name} on {target}: no subscribers");
            return Ok(0);
        }
        Self::run(dom, fired, name)
    }

    /// Run every subscription whose deadline is at or before `now`.
    pub fn expire(&mut self, dom: &mut D, now: Instant) -> DomResult<usize> {
        let expired = self.take_where(|p| p.deadline.is_some_and(|d| d <= now));
        if expired.is_empty() {
            return Ok(0);
        }
        for p in &expired {
            log::warn!(
                "[waiter] #{} {:?} on {} timed out",
                p.subscription.id,
                p.subscription.family,
                p.subscription.target
            );
        }
        Self::run(dom, expired, "timeout")
    }

    /// Drop a pending subscription without running it. Returns false if it
    /// already fired or was disposed.
    pub fn dispose(&mut self, subscription: &Subscription) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.subscription.id != subscription.id);
        let removed = self.pending.len() != before;
        if removed {
            log::debug!("[waiter] disposed #{}", subscription.id);
        }
        removed
    }

    pub fn is_pending(&self, subscription: &Subscription) -> bool {
        self.pending
            .iter()
            .any(|p| p.subscription.id == subscription.id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Earliest deadline among pending subscriptions.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().filter_map(|p| p.deadline).min()
    }

    fn take_where(&mut self, pred: impl FnMut(&Pending<D>) -> bool) -> Vec<Pending<D>> {
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(pred);
        self.pending = kept;
        taken
    }

    fn run(dom: &mut D, fired: Vec<Pending<D>>, cause: &str) -> DomResult<usize> {
        let count = fired.len();
        let mut first_error: Option<DomError> = None;

        for p in fired {
            log::debug!(
                "[waiter] #{} fired by {} on {}",
                p.subscription.id,
                cause,
                p.subscription.target
            );
            if let Err(err) = (p.continuation)(dom) {
                log::warn!("[waiter] #{} continuation failed: {err}", p.subscription.id);
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(count),
        }
    }
}
