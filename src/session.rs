//! Chat panel state, independent of any renderer.
//!
//! A [`ChatSession`] owns the append-only message list and the draft buffer.
//! Every accepted submission hands back a [`ReplyTicket`]; the caller waits
//! out the reply delay and redeems the ticket with [`ChatSession::deliver_reply`].
//! Once [`ChatSession::teardown`] has run, late tickets are dropped without
//! touching the list.

use crate::message::{ChatMessage, MessageId, UserMessage};
use crate::reply::simulated_reply;
use time::OffsetDateTime;

/// Proof that a user message was accepted and is owed exactly one reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplyTicket {
    trigger: MessageId,
}

impl ReplyTicket {
    pub fn trigger(&self) -> MessageId {
        self.trigger
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    draft: String,
    last_id: Option<MessageId>,
    pending: usize,
    torn_down: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.torn_down && !self.draft.trim().is_empty()
    }

    pub fn pending_replies(&self) -> usize {
        self.pending
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Submits the current draft. See [`ChatSession::submit_text`].
    pub fn submit(&mut self) -> Option<ReplyTicket> {
        let text = std::mem::take(&mut self.draft);
        let ticket = self.submit_text(&text);
        if ticket.is_none() {
            self.draft = text;
        }
        ticket
    }

    /// Appends `text` as a user message and clears the draft.
    ///
    /// Blank input is ignored and returns `None`; the text is otherwise
    /// stored exactly as typed.
    pub fn submit_text(&mut self, text: &str) -> Option<ReplyTicket> {
        if self.torn_down || text.trim().is_empty() {
            return None;
        }

        let now = OffsetDateTime::now_utc();
        let id = self.issue_id(now);
        self.messages.push(ChatMessage::User(UserMessage {
            id,
            content: text.to_string(),
            timestamp: now,
        }));
        self.draft.clear();
        self.pending += 1;
        tracing::debug!(%id, pending = self.pending, "user message appended");

        Some(ReplyTicket { trigger: id })
    }

    /// Appends the simulated assistant reply owed for `ticket`.
    ///
    /// Returns `false` without mutating anything if the session was torn down.
    pub fn deliver_reply(&mut self, ticket: ReplyTicket) -> bool {
        if self.torn_down {
            tracing::debug!(trigger = %ticket.trigger, "dropping reply for torn down session");
            return false;
        }

        let now = OffsetDateTime::now_utc();
        let id = self.issue_id(now);
        self.messages.push(ChatMessage::Assistant(simulated_reply(id, now)));
        self.pending = self.pending.saturating_sub(1);
        tracing::debug!(%id, trigger = %ticket.trigger, "assistant reply appended");
        true
    }

    /// Closes the session. Outstanding tickets become no-ops.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if self.pending > 0 {
            tracing::info!(pending = self.pending, "chat session closed with replies outstanding");
        }
        self.torn_down = true;
        self.pending = 0;
    }

    fn issue_id(&mut self, now: OffsetDateTime) -> MessageId {
        let millis = u64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or_default();
        let id = MessageId::next_after(self.last_id, millis);
        self.last_id = Some(id);
        id
    }
}
