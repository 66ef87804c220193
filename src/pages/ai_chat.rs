//! AI assistant chat page.

#[cfg(test)]
#[path = "ai_chat_test.rs"]
mod ai_chat_test;

use leptos::prelude::*;

use crate::net::types::{ChatMessage, ChatRole};
use crate::state::toasts::{self, ToastState};
use crate::util::markdown;

const EMPTY_REPLY_FALLBACK: &str = "Sorry, I could not generate a reply.";

/// One rendered conversation entry. The id keys the DOM list; the
/// message is what gets replayed to the API on the next turn.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ChatEntry {
    id: uuid::Uuid,
    message: ChatMessage,
}

impl ChatEntry {
    fn new(role: ChatRole, content: String) -> ChatEntry {
        ChatEntry { id: uuid::Uuid::new_v4(), message: ChatMessage { role, content } }
    }
}

/// The conversation as sent to the API: every turn, in order.
fn conversation(entries: &[ChatEntry]) -> Vec<ChatMessage> {
    entries.iter().map(|entry| entry.message.clone()).collect()
}

/// Assistant reply content, with a fallback for empty completions.
fn reply_content(content: String) -> String {
    if content.trim().is_empty() { EMPTY_REPLY_FALLBACK.to_owned() } else { content }
}

#[component]
pub fn AiChatPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let entries = RwSignal::new(Vec::<ChatEntry>::new());
    let input = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let text = input.get().trim().to_owned();
        if text.is_empty() {
            return;
        }
        input.set(String::new());
        entries.update(|items| items.push(ChatEntry::new(ChatRole::User, text)));
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let messages = conversation(&entries.get_untracked());
            match crate::net::api_ai::chat(&messages).await {
                Ok(completion) => {
                    entries.update(|items| {
                        items.push(ChatEntry::new(
                            ChatRole::Assistant,
                            reply_content(completion.content),
                        ));
                    });
                }
                Err(err) => toasts::show_error(toasts, "Assistant error", err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = toasts;
        }
    };

    view! {
        <div class="chat-page">
            <h1>"Assistant"</h1>
            <div class="chat-page__log">
                {move || {
                    entries
                        .get()
                        .iter()
                        .map(|entry| {
                            let class = match entry.message.role {
                                ChatRole::User => "chat-message chat-message--user",
                                _ => "chat-message chat-message--assistant",
                            };
                            let body = match entry.message.role {
                                ChatRole::User => view! {
                                    <p class="chat-message__text">{entry.message.content.clone()}</p>
                                }
                                    .into_any(),
                                _ => view! {
                                    <div
                                        class="chat-message__text"
                                        inner_html=markdown::to_html(&entry.message.content)
                                    ></div>
                                }
                                    .into_any(),
                            };
                            view! { <div class=class>{body}</div> }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || busy.get()>
                    <div class="chat-message chat-message--assistant">
                        <p class="chat-message__text">"Thinking..."</p>
                    </div>
                </Show>
            </div>
            <form class="chat-page__composer" on:submit=on_send>
                <input
                    class="auth-form__input"
                    type="text"
                    placeholder="Ask about offers, CVs, interviews..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Send"
                </button>
            </form>
        </div>
    }
}
