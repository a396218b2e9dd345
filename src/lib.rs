//! Client-side chat panel with a simulated assistant.
//!
//! - `session` - append-only message list, draft buffer and reply bookkeeping
//! - `reply` - the canned assistant reply and its delay
//! - `views` - Dioxus components for the panel and the page that hosts it

pub mod config;
pub mod message;
pub mod reply;
pub mod session;
pub mod theme;
#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;

pub use config::{ChatConfig, ConfigError};
pub use message::{AssistantMessage, ChatMessage, CodeBlock, MessageId, Role, UserMessage};
pub use reply::{ReplySchedule, simulated_reply};
pub use session::{ChatSession, ReplyTicket};
pub use theme::{Theme, ThemeMode};
