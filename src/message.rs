use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Session-unique message id, rendered from unix milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MessageId(u64);

impl MessageId {
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Next id after `previous` for a clock reading of `now_millis`.
    ///
    /// Ids never repeat or go backwards, even when two messages are created
    /// within the same millisecond or the wall clock steps back.
    pub fn next_after(previous: Option<MessageId>, now_millis: u64) -> Self {
        match previous {
            Some(MessageId(last)) if now_millis <= last => Self(last + 1),
            _ => Self(now_millis),
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<MessageId> for String {
    fn from(id: MessageId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for MessageId {
    type Error = std::num::ParseIntError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse().map(MessageId)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub language: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserMessage {
    pub id: MessageId,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantMessage {
    pub id: MessageId,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_block: Option<CodeBlock>,
}

/// One entry of the chat history. Only assistant messages can carry a code block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ChatMessage {
    User(UserMessage),
    Assistant(AssistantMessage),
}

impl ChatMessage {
    pub fn id(&self) -> MessageId {
        match self {
            ChatMessage::User(msg) => msg.id,
            ChatMessage::Assistant(msg) => msg.id,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            ChatMessage::User(_) => Role::User,
            ChatMessage::Assistant(_) => Role::Assistant,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            ChatMessage::User(msg) => &msg.content,
            ChatMessage::Assistant(msg) => &msg.content,
        }
    }

    pub fn timestamp(&self) -> OffsetDateTime {
        match self {
            ChatMessage::User(msg) => msg.timestamp,
            ChatMessage::Assistant(msg) => msg.timestamp,
        }
    }

    pub fn code_block(&self) -> Option<&CodeBlock> {
        match self {
            ChatMessage::User(_) => None,
            ChatMessage::Assistant(msg) => msg.code_block.as_ref(),
        }
    }
}

impl From<UserMessage> for ChatMessage {
    fn from(msg: UserMessage) -> Self {
        ChatMessage::User(msg)
    }
}

impl From<AssistantMessage> for ChatMessage {
    fn from(msg: AssistantMessage) -> Self {
        ChatMessage::Assistant(msg)
    }
}
