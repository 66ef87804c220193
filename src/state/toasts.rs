//! Toast-notification queue.
//!
//! User-initiated action failures (login, registration, CRUD) surface
//! here; forced logout stays silent and only redirects.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
const AUTO_DISMISS: std::time::Duration = std::time::Duration::from_secs(4);

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Info,
    Success,
    Error,
}

impl ToastVariant {
    /// CSS modifier suffix for the toast card.
    pub fn class_suffix(self) -> &'static str {
        match self {
            ToastVariant::Info => "info",
            ToastVariant::Success => "success",
            ToastVariant::Error => "error",
        }
    }
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub variant: ToastVariant,
    pub title: String,
    pub detail: Option<String>,
}

/// Shared toast queue, provided as an `RwSignal` context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, variant: ToastVariant, title: String, detail: Option<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, variant, title, detail });
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Currently visible toasts, oldest first.
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Queue a toast on the shared signal and auto-dismiss it after a few
/// seconds.
pub fn show(
    toasts: RwSignal<ToastState>,
    variant: ToastVariant,
    title: impl Into<String>,
    detail: Option<String>,
) {
    let id = toasts
        .try_update(|state| state.push(variant, title.into(), detail))
        .unwrap_or_default();
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(AUTO_DISMISS).await;
            let _ = toasts.try_update(|state| state.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Success toast with just a title.
pub fn show_success(toasts: RwSignal<ToastState>, title: impl Into<String>) {
    show(toasts, ToastVariant::Success, title, None);
}

/// Error toast carrying a failure detail, usually an `ApiError` rendering.
pub fn show_error(toasts: RwSignal<ToastState>, title: impl Into<String>, detail: impl Into<String>) {
    show(toasts, ToastVariant::Error, title, Some(detail.into()));
}
