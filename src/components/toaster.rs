//! Toast stack rendered above every page.

use leptos::prelude::*;

use crate::state::toasts::ToastState;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .items()
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = format!("toast toast--{}", toast.variant.class_suffix());
                        view! {
                            <div class=class>
                                <div class="toast__body">
                                    <p class="toast__title">{toast.title.clone()}</p>
                                    {toast
                                        .detail
                                        .clone()
                                        .map(|detail| view! { <p class="toast__detail">{detail}</p> })}
                                </div>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
