//! The canned assistant reply and the delay that precedes it.

use crate::message::{AssistantMessage, CodeBlock, MessageId};
use crate::session::ReplyTicket;
use std::time::Duration;
use time::OffsetDateTime;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

const REPLY_TEXT: &str = "I changed the code to fix the problem you were running into. Instead of relying on `using namespace std;`, every use of `cin`, `cout` and `endl` is now explicitly prefixed with `std::`.";
const REPLY_LANGUAGE: &str = "C++";
const REPLY_CODE: &str = "std::cin >> x;\nstd::cout << x << std::endl;";
const REPLY_VERSION: &str = "Version 3";

/// Builds the simulated assistant reply. The body never depends on what the user wrote.
pub fn simulated_reply(id: MessageId, timestamp: OffsetDateTime) -> AssistantMessage {
    AssistantMessage {
        id,
        content: REPLY_TEXT.to_string(),
        timestamp,
        code_block: Some(CodeBlock {
            language: REPLY_LANGUAGE.to_string(),
            code: REPLY_CODE.to_string(),
            version: Some(REPLY_VERSION.to_string()),
        }),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplySchedule {
    delay: Duration,
}

impl Default for ReplySchedule {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl ReplySchedule {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Resolves with `ticket` once the reply delay has elapsed.
    ///
    /// Works on any executor: the tokio timer is used when a tokio runtime is
    /// current, otherwise a standalone timer (the browser's on wasm).
    pub async fn wait(&self, ticket: ReplyTicket) -> ReplyTicket {
        sleep(self.delay).await;
        ticket
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    if tokio::runtime::Handle::try_current().is_ok() {
        tokio::time::sleep(delay).await;
    } else {
        futures_timer::Delay::new(delay).await;
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    futures_timer::Delay::new(delay).await;
}
