use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use spotlight::{
    CompletionFamily, CompletionWaiter, Dom, Element, Page, Standard, TransitionRequest,
};

fn page() -> Page {
    Page::new(
        Element::block()
            .id("body")
            .child(Element::block().id("panel").height(100.0)),
    )
}

/// Request that appends `tag` to `log` when it runs.
fn recording(
    family: CompletionFamily,
    target: &str,
    log: &Rc<RefCell<Vec<&'static str>>>,
    tag: &'static str,
) -> TransitionRequest<Page> {
    let log = Rc::clone(log);
    TransitionRequest::new(family, target, move |_: &mut Page| {
        log.borrow_mut().push(tag);
        Ok(())
    })
}

// =============================================================================
// One-shot delivery
// =============================================================================

#[test]
fn test_continuation_runs_once() {
    let mut page = page();
    let mut waiter = CompletionWaiter::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let sub = waiter.wait(recording(CompletionFamily::Transition, "panel", &log, "a"));
    assert!(waiter.is_pending(&sub));

    let ran = waiter
        .deliver(&mut page, CompletionFamily::Transition, "panel", "transitionend")
        .unwrap();
    assert_eq!(ran, 1);
    assert!(!waiter.is_pending(&sub));

    // Same event again finds nothing
    let ran = waiter
        .deliver(&mut page, CompletionFamily::Transition, "panel", "transitionend")
        .unwrap();
    assert_eq!(ran, 0);
    assert_eq!(*log.borrow(), vec!["a"]);
}

#[test]
fn test_any_name_in_family_completes() {
    let mut page = page();
    let mut waiter = CompletionWaiter::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    waiter.wait(recording(CompletionFamily::Animation, "body", &log, "a"));
    waiter
        .deliver(&mut page, CompletionFamily::Animation, "body", "webkitAnimationEnd")
        .unwrap();

    // The unprefixed name fired later must not run it a second time
    waiter
        .deliver(&mut page, CompletionFamily::Animation, "body", "animationend")
        .unwrap();
    assert_eq!(*log.borrow(), vec!["a"]);
    assert_eq!(waiter.pending_count(), 0);
}

#[test]
fn test_other_family_or_target_does_not_complete() {
    let mut page = page();
    let mut waiter = CompletionWaiter::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let sub = waiter.wait(recording(CompletionFamily::Transition, "panel", &log, "a"));

    assert_eq!(
        waiter
            .deliver(&mut page, CompletionFamily::Animation, "panel", "animationend")
            .unwrap(),
        0
    );
    assert_eq!(
        waiter
            .deliver(&mut page, CompletionFamily::Transition, "body", "transitionend")
            .unwrap(),
        0
    );
    // Name from the wrong family
    assert_eq!(
        waiter
            .deliver(&mut page, CompletionFamily::Transition, "panel", "animationend")
            .unwrap(),
        0
    );
    assert!(waiter.is_pending(&sub));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_standard_names_ignore_prefixes() {
    let mut page = page();
    let mut waiter = CompletionWaiter::with_names(Standard);
    let log = Rc::new(RefCell::new(Vec::new()));

    waiter.wait(recording(CompletionFamily::Transition, "panel", &log, "a"));
    assert_eq!(
        waiter
            .deliver(&mut page, CompletionFamily::Transition, "panel", "webkitTransitionEnd")
            .unwrap(),
        0
    );
    assert_eq!(
        waiter
            .deliver(&mut page, CompletionFamily::Transition, "panel", "transitionend")
            .unwrap(),
        1
    );
}

// =============================================================================
// Independent subscriptions on the same pair
// =============================================================================

#[test]
fn test_second_wait_does_not_clobber_first() {
    let mut page = page();
    let mut waiter = CompletionWaiter::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let first = waiter.wait(recording(CompletionFamily::Transition, "panel", &log, "first"));
    let second = waiter.wait(recording(CompletionFamily::Transition, "panel", &log, "second"));
    assert_ne!(first, second);

    let ran = waiter
        .deliver(&mut page, CompletionFamily::Transition, "panel", "transitionend")
        .unwrap();
    assert_eq!(ran, 2);
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn test_dispose_removes_only_itself() {
    let mut page = page();
    let mut waiter = CompletionWaiter::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let first = waiter.wait(recording(CompletionFamily::Transition, "panel", &log, "first"));
    let second = waiter.wait(recording(CompletionFamily::Transition, "panel", &log, "second"));

    assert!(waiter.dispose(&first));
    assert!(!waiter.dispose(&first));
    assert!(waiter.is_pending(&second));

    waiter
        .deliver(&mut page, CompletionFamily::Transition, "panel", "transitionend")
        .unwrap();
    assert_eq!(*log.borrow(), vec!["second"]);
}

// =============================================================================
// Continuations touching the page
// =============================================================================

#[test]
fn test_continuation_mutates_page() {
    let mut page = page();
    let mut waiter = CompletionWaiter::new();

    waiter.wait(TransitionRequest::transition("panel", |page: &mut Page| {
        page.set_style("panel", "max-height", "42px")
    }));
    waiter
        .deliver(&mut page, CompletionFamily::Transition, "panel", "transitionend")
        .unwrap();

    assert_eq!(
        page.style("panel", "max-height").unwrap(),
        Some("42px".to_string())
    );
}

#[test]
fn test_failing_continuation_reports_error_and_still_runs_others() {
    let mut page = page();
    let mut waiter = CompletionWaiter::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    waiter.wait(TransitionRequest::transition("panel", |page: &mut Page| {
        page.focus("missing")
    }));
    waiter.wait(recording(CompletionFamily::Transition, "panel", &log, "after"));

    let result = waiter.deliver(&mut page, CompletionFamily::Transition, "panel", "transitionend");
    assert!(result.is_err());
    assert_eq!(*log.borrow(), vec!["after"]);
    assert_eq!(waiter.pending_count(), 0);
}

// =============================================================================
// Timeouts
// =============================================================================

#[test]
fn test_no_timeout_waits_forever() {
    let mut page = page();
    let mut waiter = CompletionWaiter::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let sub = waiter.wait(recording(CompletionFamily::Animation, "body", &log, "a"));
    let far_future = Instant::now() + Duration::from_secs(3600);

    assert_eq!(waiter.expire(&mut page, far_future).unwrap(), 0);
    assert!(waiter.is_pending(&sub));
    assert_eq!(waiter.next_deadline(), None);
}

#[test]
fn test_timeout_runs_continuation() {
    let mut page = page();
    let mut waiter = CompletionWaiter::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let start = Instant::now();

    let sub = waiter.wait_at(
        recording(CompletionFamily::Animation, "body", &log, "a")
            .timeout(Some(Duration::from_millis(500))),
        start,
    );
    assert_eq!(waiter.next_deadline(), Some(start + Duration::from_millis(500)));

    assert_eq!(
        waiter
            .expire(&mut page, start + Duration::from_millis(499))
            .unwrap(),
        0
    );
    assert_eq!(
        waiter
            .expire(&mut page, start + Duration::from_millis(500))
            .unwrap(),
        1
    );
    assert!(!waiter.is_pending(&sub));

    // The event arriving late does not run it again
    waiter
        .deliver(&mut page, CompletionFamily::Animation, "body", "animationend")
        .unwrap();
    assert_eq!(*log.borrow(), vec!["a"]);
}
