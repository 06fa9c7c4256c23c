use super::*;

const GREETING: &str = "Hey... I'm Solace. It's nice to meet you. How are you feeling today?";
const APOLOGY: &str = "I'm having a little trouble connecting right now. Let's try again in a moment.";

fn ready() -> Conversation {
    let mut c = Conversation::with_greeting(GREETING);
    c.drain_changes();
    c
}

fn submit(c: &mut Conversation, text: &str) -> Option<String> {
    c.set_input(text);
    c.submit()
}

#[test]
fn greeting_is_the_only_message() {
    let c = Conversation::with_greeting(GREETING);
    assert_eq!(c.messages(), &[ChatMessage::model(GREETING)]);
    assert!(c.is_session_ready());
    assert!(!c.is_pending());
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn hi_there_scenario() {
    let mut c = ready();

    assert_eq!(submit(&mut c, "Hi there").as_deref(), Some("Hi there"));
    assert_eq!(c.phase(), Phase::Sending);
    assert!(c.is_pending());
    assert_eq!(c.input_text(), "");

    c.begin_reply();
    assert_eq!(c.phase(), Phase::Streaming);
    for fragment in ["I'm", " here", " for you"] {
        c.apply_fragment(fragment);
    }
    c.finish_reply();

    assert_eq!(
        c.messages(),
        &[
            ChatMessage::model(GREETING),
            ChatMessage::user("Hi there"),
            ChatMessage::model("I'm here for you"),
        ]
    );
    assert!(!c.is_pending());
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn submit_appends_exact_text_after_last_message() {
    let mut c = ready();
    submit(&mut c, "  hello  ").unwrap();
    assert_eq!(c.messages().len(), 2);
    assert_eq!(c.messages()[1], ChatMessage::user("  hello  "));
}

#[test]
fn blank_input_is_ignored() {
    let mut c = ready();
    for input in ["", "   ", "\n\t "] {
        assert!(submit(&mut c, input).is_none());
    }
    assert_eq!(c.messages().len(), 1);
    assert!(!c.is_pending());
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn submit_while_pending_is_ignored() {
    let mut c = ready();
    submit(&mut c, "first").unwrap();
    let before = c.messages().to_vec();

    assert!(submit(&mut c, "second").is_none());
    assert_eq!(c.messages(), before.as_slice());
    // The refused input stays in the field.
    assert_eq!(c.input_text(), "second");

    c.begin_reply();
    c.apply_fragment("x");
    assert!(c.submit().is_none());
    assert_eq!(c.messages().len(), before.len() + 1);
}

#[test]
fn fragments_concatenate_without_separators() {
    let mut c = ready();
    submit(&mut c, "q").unwrap();
    let fragments = ["a", "", " b", "\n", "c😊"];
    for f in fragments {
        c.apply_fragment(f);
    }
    c.finish_reply();
    assert_eq!(c.messages().last().unwrap().text, fragments.concat());
}

#[test]
fn first_fragment_creates_placeholder_when_not_begun() {
    let mut c = ready();
    submit(&mut c, "q").unwrap();
    c.apply_fragment("hi");
    assert_eq!(c.phase(), Phase::Streaming);
    assert_eq!(c.streaming_index(), Some(2));
    assert_eq!(c.messages()[2], ChatMessage::model("hi"));
}

#[test]
fn begin_reply_is_idempotent() {
    let mut c = ready();
    submit(&mut c, "q").unwrap();
    c.begin_reply();
    c.begin_reply();
    assert_eq!(c.messages().len(), 3);
}

#[test]
fn reply_with_no_fragments_leaves_empty_model_message() {
    let mut c = ready();
    submit(&mut c, "q").unwrap();
    c.begin_reply();
    c.finish_reply();
    assert_eq!(c.messages().last(), Some(&ChatMessage::model("")));
    assert!(!c.is_pending());
}

#[test]
fn failure_before_reply_appends_one_fallback() {
    let mut c = ready();
    submit(&mut c, "hello").unwrap();
    c.fail_reply(APOLOGY);

    assert_eq!(
        c.messages(),
        &[
            ChatMessage::model(GREETING),
            ChatMessage::user("hello"),
            ChatMessage::model(APOLOGY),
        ]
    );
    assert!(!c.is_pending());
    assert_eq!(c.phase(), Phase::Failed);
}

#[test]
fn failure_with_empty_placeholder_replaces_it() {
    let mut c = ready();
    submit(&mut c, "hello").unwrap();
    c.begin_reply();
    c.fail_reply(APOLOGY);

    assert_eq!(c.messages().len(), 3);
    assert_eq!(c.messages()[2], ChatMessage::model(APOLOGY));
    assert_eq!(c.streaming_index(), None);
}

#[test]
fn failure_mid_stream_keeps_partial_text() {
    let mut c = ready();
    submit(&mut c, "hello").unwrap();
    c.apply_fragment("I was saying");
    c.fail_reply(APOLOGY);

    assert_eq!(
        &c.messages()[2..],
        &[
            ChatMessage::model("I was saying"),
            ChatMessage::model(APOLOGY),
        ]
    );
    assert!(!c.is_pending());
}

#[test]
fn retry_after_failure_is_accepted() {
    let mut c = ready();
    submit(&mut c, "hello").unwrap();
    c.fail_reply(APOLOGY);

    assert_eq!(submit(&mut c, "hello again").as_deref(), Some("hello again"));
    assert_eq!(c.phase(), Phase::Sending);
    c.apply_fragment("Hi!");
    c.finish_reply();
    assert_eq!(c.messages().len(), 5);
    assert_eq!(c.messages()[4], ChatMessage::model("Hi!"));
}

#[test]
fn failed_phase_accepts_input_like_idle() {
    let mut c = ready();
    submit(&mut c, "hello").unwrap();
    c.fail_reply(APOLOGY);
    assert_eq!(c.phase(), Phase::Failed);
    assert!(!c.is_pending());
    c.drain_changes();

    c.set_input("again");
    assert_eq!(c.phase(), Phase::Failed);
    assert!(c.can_submit());
    assert_eq!(
        c.drain_changes(),
        vec![ViewChange::Status {
            pending: false,
            typing: false,
            ready: true,
            can_send: true,
        }]
    );
}

#[test]
fn init_failure_shows_one_message_and_blocks_sending() {
    let mut c = Conversation::with_init_failure("Something went wrong on my end.");
    assert_eq!(
        c.messages(),
        &[ChatMessage::model("Something went wrong on my end.")]
    );

    assert!(submit(&mut c, "anyone there?").is_none());
    assert_eq!(c.messages().len(), 1);
    assert!(!c.is_pending());
}

#[test]
fn session_ready_replaces_startup_state() {
    let mut c = Conversation::new();
    assert!(c.messages().is_empty());
    assert!(submit(&mut c, "too early").is_none());

    c.session_ready(GREETING);
    assert_eq!(c.messages(), &[ChatMessage::model(GREETING)]);
    assert!(c.submit().is_some());
}

#[test]
fn stray_events_without_pending_send_are_ignored() {
    let mut c = ready();
    c.begin_reply();
    c.apply_fragment("ghost");
    c.finish_reply();
    c.fail_reply(APOLOGY);
    assert_eq!(c.messages(), &[ChatMessage::model(GREETING)]);
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn typing_indicator_only_before_first_fragment() {
    let mut c = ready();
    assert!(!c.shows_typing_indicator());
    submit(&mut c, "q").unwrap();
    assert!(c.shows_typing_indicator());
    c.begin_reply();
    assert!(!c.shows_typing_indicator());
}

#[test]
fn can_submit_tracks_input_and_pending() {
    let mut c = ready();
    assert!(!c.can_submit());
    c.set_input("h");
    assert!(c.can_submit());
    c.set_input("   ");
    assert!(!c.can_submit());
    c.set_input("go");
    c.submit().unwrap();
    c.set_input("more");
    assert!(!c.can_submit());
}

#[test]
fn each_fragment_publishes_one_replacement() {
    let mut c = ready();
    submit(&mut c, "Hi there").unwrap();
    c.drain_changes();

    c.begin_reply();
    for f in ["I'm", " here", " for you"] {
        c.apply_fragment(f);
    }

    let replacements: Vec<String> = c
        .drain_changes()
        .into_iter()
        .filter_map(|change| match change {
            ViewChange::Replaced { index: 2, text } => Some(text),
            _ => None,
        })
        .collect();
    assert_eq!(replacements, vec!["I'm", "I'm here", "I'm here for you"]);
}

#[test]
fn submit_publishes_append_clear_and_status() {
    let mut c = ready();
    c.set_input("Hi there");
    c.drain_changes();
    c.submit().unwrap();

    assert_eq!(
        c.drain_changes(),
        vec![
            ViewChange::Appended {
                index: 1,
                message: ChatMessage::user("Hi there"),
            },
            ViewChange::InputCleared,
            ViewChange::Status {
                pending: true,
                typing: true,
                ready: true,
                can_send: false,
            },
        ]
    );
}

#[test]
fn refused_submit_publishes_nothing() {
    let mut c = ready();
    c.drain_changes();
    assert!(c.submit().is_none());
    assert!(c.drain_changes().is_empty());
}

#[test]
fn resync_publishes_full_state() {
    let mut c = ready();
    c.resync();
    let changes = c.drain_changes();
    assert!(matches!(
        &changes[0],
        ViewChange::Reset { messages } if messages.len() == 1
    ));
    assert!(matches!(changes[1], ViewChange::Status { .. }));
}
