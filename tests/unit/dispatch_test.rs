//! Tests for event routing, the shutdown command, and the digest tick

use chrono::{DateTime, Utc, Weekday};
use rollcall::core::error::DependencyError;
use rollcall::core::models::RolePair;
use rollcall::core::services::NO_EVENTS_MESSAGE;
use rollcall::dispatch::{CLOSE_COMMAND, Dispatcher, GuildSettings, InboundMessage};

use crate::common::{
    MockFeed, MockRoster, RecordingGateway, RecordingLog, event, member, submission,
};

const EVENTS_CHANNEL: u64 = 42;
const VERIFY_CHANNEL: u64 = 10;

fn settings() -> GuildSettings {
    GuildSettings {
        roles: RolePair::default(),
        officer_role: "Officer".to_string(),
        events_channel_id: EVENTS_CHANNEL,
        digest_weekday: Weekday::Mon,
        bot_name: "rollcall".to_string(),
    }
}

fn dispatcher(
    roster: MockRoster,
    feed: MockFeed,
) -> (
    Dispatcher<MockRoster, MockFeed, RecordingGateway, RecordingLog>,
    std::rc::Rc<std::cell::RefCell<Vec<String>>>,
    std::rc::Rc<std::cell::RefCell<Vec<String>>>,
) {
    let gateway = RecordingGateway::new();
    let log = RecordingLog::new();
    let ops = gateway.ops();
    let lines = log.lines();
    (Dispatcher::new(roster, feed, gateway, log, settings()), ops, lines)
}

fn message(author: &str, roles: &[&str], content: &str) -> InboundMessage {
    InboundMessage {
        author_id: 99,
        author_name: author.to_string(),
        author_roles: roles.iter().map(ToString::to_string).collect(),
        channel_id: 5,
        message_id: 1234,
        content: content.to_string(),
        from_self: false,
    }
}

mod messages {
    use super::*;

    #[tokio::test]
    async fn own_messages_are_ignored() {
        let (d, ops, _) = dispatcher(MockRoster::with_identifiers(&[]), MockFeed::with_events(vec![]));
        let mut msg = message("rollcall", &["Officer"], CLOSE_COMMAND);
        msg.from_self = true;

        assert!(!d.handle_message(&msg).await);
        assert!(ops.borrow().is_empty());
    }

    #[tokio::test]
    async fn plain_chatter_is_not_routed() {
        let (d, ops, _) = dispatcher(MockRoster::with_identifiers(&[]), MockFeed::with_events(vec![]));
        assert!(!d.handle_message(&message("alice", &[], "hello there")).await);
        assert!(ops.borrow().is_empty());
    }

    #[tokio::test]
    async fn officer_close_shuts_down_and_deletes() {
        let (d, ops, lines) =
            dispatcher(MockRoster::with_identifiers(&[]), MockFeed::with_events(vec![]));

        assert!(d.handle_message(&message("officer", &["Officer"], CLOSE_COMMAND)).await);

        let ops = ops.borrow();
        assert!(ops.iter().any(|op| op.starts_with("delete:5:1234")));
        assert!(ops.iter().any(|op| op == "close"));
        assert!(lines.borrow().iter().any(|l| l.contains("disconnected")));
    }

    #[tokio::test]
    async fn unauthorized_close_is_logged_not_executed() {
        let (d, ops, lines) =
            dispatcher(MockRoster::with_identifiers(&[]), MockFeed::with_events(vec![]));

        assert!(!d.handle_message(&message("mallory", &["Verified Member"], CLOSE_COMMAND)).await);

        let ops = ops.borrow();
        // The triggering message is still deleted.
        assert!(ops.iter().any(|op| op.starts_with("delete:5:1234")));
        assert!(!ops.iter().any(|op| op == "close"));
        assert!(lines.borrow().iter().any(|l| l.contains("attempted to shut me down")));
    }
}

mod submissions {
    use super::*;

    #[tokio::test]
    async fn verified_submission_reconciles_acks_and_deletes() {
        let (d, ops, _) =
            dispatcher(MockRoster::with_identifiers(&["123456789"]), MockFeed::with_events(vec![]));
        let m = member(7, "tester", &["Unverified Member"]);

        d.handle_submission(
            &m,
            &submission("john", "doe", "123456789"),
            VERIFY_CHANNEL,
            Some(555),
        )
        .await;

        let ack = format!("send:{VERIFY_CHANNEL}:true:Verified!");
        let delete = format!("delete:{VERIFY_CHANNEL}:555");
        let ops = ops.borrow();
        assert_eq!(
            *ops,
            vec![
                "remove_role:7:Unverified Member",
                "add_role:7:Verified Member",
                "set_nickname:7:John Doe",
                ack.as_str(),
                delete.as_str(),
            ]
        );
    }

    #[tokio::test]
    async fn unknown_identifier_gets_the_unverified_role() {
        let (d, ops, _) =
            dispatcher(MockRoster::with_identifiers(&[]), MockFeed::with_events(vec![]));
        let m = member(7, "tester", &["Verified Member"]);

        d.handle_submission(&m, &submission("john", "doe", "123456789"), VERIFY_CHANNEL, None)
            .await;

        let ops = ops.borrow();
        assert!(ops.iter().any(|op| op == "add_role:7:Unverified Member"));
        assert!(ops.iter().any(|op| op == "remove_role:7:Verified Member"));
        assert!(ops.iter().any(|op| op.contains("NOT Verified!")));
    }

    #[tokio::test]
    async fn malformed_submission_gets_a_reprompt_and_no_mutation() {
        let (d, ops, _) =
            dispatcher(MockRoster::with_identifiers(&["123456789"]), MockFeed::with_events(vec![]));
        let m = member(7, "tester", &[]);

        d.handle_submission(&m, &submission("jane", "doe", "12345"), VERIFY_CHANNEL, None).await;

        let ops = ops.borrow();
        assert_eq!(ops.len(), 1);
        assert!(ops[0].starts_with(&format!("send:{VERIFY_CHANNEL}:true:")));
        assert!(ops[0].contains("FIRSTNAME LASTNAME MEMBER-ID"));
    }

    #[tokio::test]
    async fn roster_failure_is_logged_and_silent_to_the_member() {
        let (d, ops, lines) = dispatcher(
            MockRoster::failing(DependencyError::Status(503)),
            MockFeed::with_events(vec![]),
        );
        let m = member(7, "tester", &[]);

        d.handle_submission(&m, &submission("john", "doe", "123456789"), VERIFY_CHANNEL, None)
            .await;

        assert!(ops.borrow().is_empty());
        assert!(lines.borrow().iter().any(|l| l.contains("Could not verify [tester]")));
    }

    #[tokio::test]
    async fn duplicate_submissions_do_not_interleave_mutations() {
        let (d, ops, _) =
            dispatcher(MockRoster::with_identifiers(&["123456789"]), MockFeed::with_events(vec![]));
        let m = member(7, "tester", &["Unverified Member"]);
        let s = submission("john", "doe", "123456789");

        // Both handlers yield inside every mock call; without the
        // per-member lock their role mutations would interleave.
        tokio::join!(
            d.handle_submission(&m, &s, VERIFY_CHANNEL, None),
            d.handle_submission(&m, &s, VERIFY_CHANNEL, None),
        );

        let ack = format!("send:{VERIFY_CHANNEL}:true:Verified!");
        let ops = ops.borrow();
        let first_run: Vec<&str> = ops.iter().take(4).map(String::as_str).collect();
        assert_eq!(
            first_run,
            vec![
                "remove_role:7:Unverified Member",
                "add_role:7:Verified Member",
                "set_nickname:7:John Doe",
                ack.as_str(),
            ]
        );
    }
}

mod digest_tick {
    use super::*;

    fn monday() -> DateTime<Utc> {
        "2026-08-24T09:00:00Z".parse().expect("valid test timestamp")
    }

    fn tuesday() -> DateTime<Utc> {
        "2026-08-25T09:00:00Z".parse().expect("valid test timestamp")
    }

    #[tokio::test]
    async fn non_trigger_day_is_a_noop() {
        let (d, ops, _) = dispatcher(
            MockRoster::with_identifiers(&[]),
            MockFeed::with_events(vec![event("Kickoff", "2026-08-26")]),
        );

        assert!(!d.tick_digest(tuesday()).await);
        assert!(ops.borrow().is_empty());
    }

    #[tokio::test]
    async fn trigger_day_publishes_each_qualifying_event() {
        let (d, ops, _) = dispatcher(
            MockRoster::with_identifiers(&[]),
            MockFeed::with_events(vec![
                event("Kickoff", "2026-08-26"),
                event("Too Late", "2026-09-20"),
            ]),
        );

        assert!(d.tick_digest(monday()).await);

        let ops = ops.borrow();
        assert_eq!(ops.len(), 1);
        assert!(ops[0].starts_with(&format!("send:{EVENTS_CHANNEL}:false:")));
        assert!(ops[0].contains("Kickoff"));
    }

    #[tokio::test]
    async fn empty_week_publishes_the_no_events_message() {
        let (d, ops, _) =
            dispatcher(MockRoster::with_identifiers(&[]), MockFeed::with_events(vec![]));

        assert!(d.tick_digest(monday()).await);

        let ops = ops.borrow();
        assert_eq!(ops.len(), 1);
        assert!(ops[0].contains(NO_EVENTS_MESSAGE));
    }

    #[tokio::test]
    async fn feed_failure_is_logged_and_run_continues_empty() {
        let (d, ops, lines) = dispatcher(
            MockRoster::with_identifiers(&[]),
            MockFeed::failing(DependencyError::Status(500)),
        );

        assert!(d.tick_digest(monday()).await);

        assert!(lines.borrow().iter().any(|l| l.contains("Failed to retrieve events")));
        assert!(ops.borrow().iter().any(|op| op.contains(NO_EVENTS_MESSAGE)));
    }

    // A restart on the trigger day must not publish again: the scheduler's
    // first firing comes a full period after startup, not immediately.
    #[tokio::test(start_paused = true)]
    async fn scheduler_waits_a_full_period_before_its_first_firing() {
        let (d, ops, lines) =
            dispatcher(MockRoster::with_identifiers(&[]), MockFeed::with_events(vec![]));

        tokio::select! {
            () = d.run_scheduler() => {},
            () = tokio::time::sleep(std::time::Duration::from_secs(23 * 60 * 60)) => {},
        }

        assert!(ops.borrow().is_empty());
        assert!(lines.borrow().is_empty());
    }
}

mod lifecycle {
    use super::*;

    #[tokio::test]
    async fn startup_sets_presence_and_logs() {
        let (d, ops, lines) =
            dispatcher(MockRoster::with_identifiers(&[]), MockFeed::with_events(vec![]));

        d.startup().await;

        assert!(ops.borrow().iter().any(|op| op.starts_with("set_presence:")));
        assert!(lines.borrow().iter().any(|l| l.contains("[rollcall] is now running!")));
    }
}
