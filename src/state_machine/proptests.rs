//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across arbitrary event sequences.

use super::*;
use crate::session::ChatSession;
use crate::transcript::Turn;
use crate::wrapper::{RequestError, RequestErrorKind};
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_error_kind() -> impl Strategy<Value = RequestErrorKind> {
    prop_oneof![
        Just(RequestErrorKind::EmptyUpstreamResponse),
        Just(RequestErrorKind::AuthRejected),
        Just(RequestErrorKind::NetworkFailure),
        Just(RequestErrorKind::QuotaExceeded),
        Just(RequestErrorKind::Unknown),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        3 => "[a-zA-Z ?]{0,20}".prop_map(|text| Event::Submit { text }),
        2 => "[a-zA-Z*\\- \n]{1,40}".prop_map(|text| Event::ResponseReady { text }),
        1 => arb_error_kind().prop_map(|kind| Event::RequestFailed {
            error: RequestError::new(kind)
        }),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Turns already in the transcript are never changed or reordered
    #[test]
    fn prop_transcript_is_append_only(events in proptest::collection::vec(arb_event(), 0..30)) {
        let mut session = ChatSession::new("prop");
        for event in events {
            let before: Vec<Turn> = session.transcript().turns().to_vec();
            let _ = session.apply(event);
            let after = session.transcript().turns();
            prop_assert!(after.len() >= before.len());
            prop_assert_eq!(&after[..before.len()], before.as_slice());
        }
    }

    // Submitting while pending leaves every observable field alone
    #[test]
    fn prop_submit_while_pending_is_noop(first in "[a-z]{1,10}", second in "[a-zA-Z ]{0,10}") {
        let mut session = ChatSession::new("prop");
        session.apply(Event::Submit { text: first }).unwrap();
        let before = session.view();

        let result = session.apply(Event::Submit { text: second });
        prop_assert_eq!(result.unwrap_err(), TransitionError::Busy);
        prop_assert_eq!(session.view(), before);
    }

    // A full exchange adds two turns on success, one on failure
    #[test]
    fn prop_exchange_turn_counts(
        text in "[a-z]{1,10}",
        reply in "[a-z]{1,10}",
        kind in proptest::option::of(arb_error_kind()),
    ) {
        let mut session = ChatSession::new("prop");
        let start = session.transcript().len();
        session.apply(Event::Submit { text: text.clone() }).unwrap();

        let outcome = match kind {
            Some(kind) => Event::RequestFailed { error: RequestError::new(kind) },
            None => Event::ResponseReady { text: reply.clone() },
        };
        session.apply(outcome).unwrap();

        let added = &session.transcript().turns()[start..];
        match kind {
            Some(kind) => {
                prop_assert_eq!(added, &[Turn::user(text)][..]);
                prop_assert_eq!(session.error(), Some(kind.message()));
            }
            None => {
                prop_assert_eq!(added, &[Turn::user(text), Turn::assistant(reply)][..]);
                prop_assert!(session.error().is_none());
            }
        }
        prop_assert!(!session.is_pending());
    }

    // Error and pending are never both set once a transition completes
    #[test]
    fn prop_error_and_pending_exclusive(events in proptest::collection::vec(arb_event(), 0..30)) {
        let mut session = ChatSession::new("prop");
        for event in events {
            let _ = session.apply(event);
            prop_assert!(!(session.is_pending() && session.error().is_some()));
        }
    }

    // Only Idle + non-blank Submit issues a request
    #[test]
    fn prop_only_submit_requests(event in arb_event(), pending in any::<bool>()) {
        let state = if pending { ChatState::Pending } else { ChatState::Idle };
        let is_submit = matches!(&event, Event::Submit { text } if !text.trim().is_empty());
        if let Ok(result) = transition(state, event) {
            let requests = result
                .effects
                .iter()
                .filter(|e| matches!(e, Effect::RequestResponse { .. }))
                .count();
            prop_assert_eq!(requests, usize::from(is_submit && !pending));
        }
    }
}
