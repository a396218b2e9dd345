use crate::config::ChatConfig;
use crate::message::{ChatMessage, CodeBlock, MessageId, Role};
use crate::reply::ReplySchedule;
use crate::session::{ChatSession, ReplyTicket};
use crate::views::shared::{format_message_timestamp, message_html};
use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Reply tasks still waiting out their delay, keyed by the message that triggered them.
#[derive(Clone, Default)]
struct PendingReplies(Rc<RefCell<HashMap<MessageId, Task>>>);

impl PendingReplies {
    fn track(&self, ticket: ReplyTicket, task: Task) {
        self.0.borrow_mut().insert(ticket.trigger(), task);
    }

    fn settle(&self, ticket: ReplyTicket) {
        self.0.borrow_mut().remove(&ticket.trigger());
    }

    fn len(&self) -> usize {
        self.0.borrow().len()
    }

    fn cancel_all(&self) {
        let tasks: Vec<Task> = self.0.borrow_mut().drain().map(|(_, task)| task).collect();
        if !tasks.is_empty() {
            tracing::debug!(count = tasks.len(), "cancelling pending replies");
        }
        for task in tasks {
            task.cancel();
        }
    }
}

/// Session state of one mounted panel plus the reply tasks it has spawned.
#[derive(Clone)]
struct ChatHandle {
    session: Signal<ChatSession>,
    pending: PendingReplies,
    schedule: ReplySchedule,
}

impl ChatHandle {
    fn set_draft(&mut self, text: String) {
        self.session.with_mut(|state| state.set_draft(text));
    }

    /// Submits the draft and spawns its deferred reply on the current scope.
    fn submit(&mut self) {
        let Some(ticket) = self.session.with_mut(|state| state.submit()) else {
            return;
        };
        let mut session = self.session;
        let tracker = self.pending.clone();
        let schedule = self.schedule;
        let task = spawn(async move {
            let ticket = schedule.wait(ticket).await;
            tracker.settle(ticket);
            session.with_mut(|state| state.deliver_reply(ticket));
        });
        self.pending.track(ticket, task);
    }
}

/// Panel state tied to the calling component: pending replies are cancelled
/// and the session torn down when it unmounts.
fn use_chat_handle(schedule: ReplySchedule) -> ChatHandle {
    let mut session = use_signal(ChatSession::new);
    let pending = use_hook(PendingReplies::default);

    {
        let pending = pending.clone();
        use_drop(move || {
            pending.cancel_all();
            match session.try_write() {
                Ok(mut state) => state.teardown(),
                Err(err) => tracing::debug!("chat session already released: {err}"),
            }
        });
    }

    ChatHandle {
        session,
        pending,
        schedule,
    }
}

#[component]
pub fn ChatPanel(#[props(default)] is_page: bool, on_close: Option<EventHandler<()>>) -> Element {
    let config = use_context::<ChatConfig>();
    let handle = use_chat_handle(ReplySchedule::new(config.reply_delay));
    let session = handle.session;
    let mut end_anchor = use_signal(|| Option::<Rc<MountedData>>::None);
    let message_count = use_memo(move || session.read().messages().len());

    use_effect(move || {
        if message_count() == 0 {
            return;
        }
        if let Some(anchor) = end_anchor() {
            spawn(async move {
                if let Err(err) = anchor.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::debug!("auto-scroll failed: {err:?}");
                }
            });
        }
    });

    let mut on_submit = handle.clone();
    let mut on_input = handle;

    let snapshot = session();
    let height_class = if is_page { "chat-panel page" } else { "chat-panel embedded" };
    let show_close = !is_page && on_close.is_some();
    let can_submit = snapshot.can_submit();
    let draft = snapshot.draft().to_string();

    rsx! {
        div { class: height_class,
            div { class: "chat-header",
                div { class: "chat-title",
                    span { class: "chat-icon", aria_hidden: "true", dangerous_inner_html: "&#128172;" }
                    h2 { "Chat" }
                }
                if show_close {
                    button {
                        class: "icon-btn", r#type: "button", title: "Close",
                        onclick: move |_| {
                            if let Some(handler) = on_close {
                                handler.call(());
                            }
                        },
                        "×"
                    }
                }
            }
            div { class: "chat-scroll",
                div { class: "chat-list",
                    for msg in snapshot.messages().iter() {
                        MessageRow { key: "{msg.id()}", message: msg.clone() }
                    }
                    div {
                        class: "chat-end",
                        onmounted: move |ev| end_anchor.set(Some(ev.data())),
                    }
                }
            }
            div { class: "composer-dock",
                form {
                    class: "composer",
                    onsubmit: move |ev| {
                        ev.prevent_default();
                        on_submit.submit();
                    },
                    input {
                        r#type: "text",
                        value: "{draft}",
                        placeholder: "{config.placeholder}",
                        autofocus: true,
                        oninput: move |ev| on_input.set_draft(ev.value()),
                    }
                    button {
                        class: "icon-btn send", r#type: "submit", title: "Send",
                        disabled: !can_submit,
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    let role = message.role().as_str();
    let timestamp = format_message_timestamp(message.timestamp());
    let code_block = message.code_block().cloned();
    let is_assistant = matches!(message.role(), Role::Assistant);
    let body_html = message_html(message.content());
    let content = message.content();

    rsx! {
        div { class: "message-row {role}",
            div { class: "bubble {role}",
                if is_assistant {
                    div { class: "md", dangerous_inner_html: "{body_html}" }
                } else {
                    p { class: "plain", "{content}" }
                }
                if let Some(block) = code_block {
                    CodeBlockView { block }
                }
                p { class: "message-timestamp", "{timestamp}" }
            }
        }
    }
}

#[component]
fn CodeBlockView(block: CodeBlock) -> Element {
    let copy_payload = block.code.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        #[cfg(not(target_arch = "wasm32"))]
        {
            match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(raw)) {
                Ok(()) => tracing::debug!("code block copied"),
                Err(err) => tracing::debug!("clipboard unavailable: {err}"),
            }
        }
        #[cfg(target_arch = "wasm32")]
        drop(raw);
    };

    rsx! {
        div { class: "code-block",
            div { class: "code-header",
                span { class: "code-label", "{block.language}" }
                div { class: "code-meta",
                    if let Some(version) = block.version.as_ref() {
                        span { class: "code-label", "{version}" }
                    }
                    button { class: "action-btn", r#type: "button", title: "Copy code", onclick: on_copy, "Copy" }
                }
            }
            pre { "{block.code}" }
        }
    }
}
