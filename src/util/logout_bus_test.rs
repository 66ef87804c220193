use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn publish_reaches_every_subscriber_once() {
    let seen: Rc<RefCell<Vec<LogoutReason>>> = Rc::default();
    let seen_a = seen.clone();
    let seen_b = seen.clone();
    let a = subscribe(move |reason| seen_a.borrow_mut().push(reason));
    let b = subscribe(move |reason| seen_b.borrow_mut().push(reason));

    publish(LogoutReason::TokenExpired);
    assert_eq!(&*seen.borrow(), &[LogoutReason::TokenExpired, LogoutReason::TokenExpired]);

    unsubscribe(a);
    unsubscribe(b);
}

#[test]
fn unsubscribed_handlers_are_never_invoked() {
    let calls: Rc<RefCell<u32>> = Rc::default();
    let calls_inner = calls.clone();
    let sub = subscribe(move |_| *calls_inner.borrow_mut() += 1);

    publish(LogoutReason::UserInitiated);
    unsubscribe(sub);
    publish(LogoutReason::UserInitiated);

    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn publish_without_subscribers_is_a_noop() {
    // Each test thread gets its own registry, so nothing is subscribed here.
    assert_eq!(subscriber_count(), 0);
    publish(LogoutReason::TokenExpired);
}

#[test]
fn handlers_may_unsubscribe_reentrantly() {
    let partner: Rc<RefCell<Option<Subscription>>> = Rc::default();
    let partner_inner = partner.clone();
    let a = subscribe(move |_| {
        if let Some(sub) = partner_inner.borrow_mut().take() {
            unsubscribe(sub);
        }
    });
    let b = subscribe(|_| {});
    *partner.borrow_mut() = Some(b);

    publish(LogoutReason::TokenExpired);
    assert_eq!(subscriber_count(), 1);
    unsubscribe(a);
}

#[test]
fn reasons_have_stable_tags() {
    assert_eq!(LogoutReason::TokenExpired.as_str(), "token_expired");
    assert_eq!(LogoutReason::UserInitiated.as_str(), "user_initiated");
}
