//! Integration tests for the chat session and its simulated replies
//!
//! Replies are driven through `ReplySchedule` on a paused tokio clock

use chatpane::{ChatSession, ReplySchedule, Role};
use std::time::Duration;

mod submission_tests {
    use super::*;

    #[test]
    fn test_empty_submit_leaves_list_empty() {
        let mut session = ChatSession::new();
        session.set_draft("");
        assert!(session.submit().is_none());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_whitespace_never_changes_length() {
        let mut session = ChatSession::new();
        session.submit_text("kept").unwrap();
        for blank in ["", " ", "\n", "\t  \r\n"] {
            assert!(session.submit_text(blank).is_none());
            assert_eq!(session.messages().len(), 1);
        }
    }

    #[test]
    fn test_submit_appends_single_user_message() {
        let mut session = ChatSession::new();
        session.set_draft("X");
        session.submit().expect("submission accepted");

        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role(), Role::User);
        assert_eq!(messages[0].content(), "X");
        assert!(messages[0].code_block().is_none());
        assert!(session.draft().is_empty());
    }
}

mod reply_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_hello_then_reply_after_delay() {
        let mut session = ChatSession::new();
        let schedule = ReplySchedule::default();

        let ticket = session.submit_text("hello").unwrap();
        assert_eq!(session.messages().len(), 1);

        let start = tokio::time::Instant::now();
        let ticket = schedule.wait(ticket).await;
        assert!(start.elapsed() >= Duration::from_secs(1));
        assert!(session.deliver_reply(ticket));

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content(), "hello");
        assert_eq!(messages[1].role(), Role::Assistant);
        let block = messages[1].code_block().expect("reply carries code");
        assert!(!block.code.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_to_back_submissions_keep_order() {
        let mut session = ChatSession::new();
        let schedule = ReplySchedule::new(Duration::from_millis(1000));

        let a = session.submit_text("a").unwrap();
        let b = session.submit_text("b").unwrap();
        let (a, b) = tokio::join!(schedule.wait(a), schedule.wait(b));
        assert!(session.deliver_reply(a));
        assert!(session.deliver_reply(b));

        let summary: Vec<(Role, bool)> = session
            .messages()
            .iter()
            .map(|m| (m.role(), m.code_block().is_some()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Role::User, false),
                (Role::User, false),
                (Role::Assistant, true),
                (Role::Assistant, true),
            ]
        );
        assert_eq!(session.pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_before_delay_is_quiet() {
        let mut session = ChatSession::new();
        let schedule = ReplySchedule::default();

        let ticket = session.submit_text("bye").unwrap();
        let waiting = tokio::spawn(async move { schedule.wait(ticket).await });

        tokio::time::advance(Duration::from_millis(200)).await;
        session.teardown();

        let ticket = waiting.await.unwrap();
        assert!(!session.deliver_reply(ticket));
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_reply_never_fires() {
        let schedule = ReplySchedule::default();
        let mut session = ChatSession::new();
        let ticket = session.submit_text("bye").unwrap();

        let waiting = tokio::spawn(async move { schedule.wait(ticket).await });
        waiting.abort();
        assert!(waiting.await.unwrap_err().is_cancelled());
        session.teardown();
        assert_eq!(session.messages().len(), 1);
    }
}
