use super::*;

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastVariant::Info, "one".to_owned(), None);
    let b = state.push(ToastVariant::Error, "two".to_owned(), Some("detail".to_owned()));
    assert!(b > a);
    assert_eq!(state.items().len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastVariant::Success, "keep".to_owned(), None);
    let b = state.push(ToastVariant::Success, "drop".to_owned(), None);

    state.dismiss(b);
    assert_eq!(state.items().iter().map(|t| t.id).collect::<Vec<_>>(), vec![a]);

    // Unknown ids are ignored.
    state.dismiss(b);
    assert_eq!(state.items().len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastVariant::Info, "first".to_owned(), None);
    state.dismiss(a);
    let b = state.push(ToastVariant::Info, "second".to_owned(), None);
    assert_ne!(a, b);
}

#[test]
fn variants_map_to_class_suffixes() {
    assert_eq!(ToastVariant::Info.class_suffix(), "info");
    assert_eq!(ToastVariant::Success.class_suffix(), "success");
    assert_eq!(ToastVariant::Error.class_suffix(), "error");
}
