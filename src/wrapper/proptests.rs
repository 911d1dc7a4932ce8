//! Property-based tests for the response wrapper
//!
//! - The outbound prompt is the instructions followed by the exact question
//! - Blank questions never reach the provider
//! - Without a credential nothing reaches the provider, whatever the input

use super::prompt::FORMAT_INSTRUCTIONS;
use super::*;
use crate::llm::testing::MockLlmService;
use proptest::prelude::*;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

/// Text with at least one non-whitespace character, including untrimmed edges
fn arb_question() -> impl Strategy<Value = String> {
    ("[ \t\n]{0,3}", "[a-zA-Z0-9?!.,'*-][a-zA-Z0-9 ?!.,'*\n-]{0,80}", "[ \t\n]{0,3}")
        .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}"))
}

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,10}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_payload_is_instructions_then_question(question in arb_question()) {
        let mock = Arc::new(MockLlmService::new("mock"));
        mock.queue_text("ok");
        let wrapper = ResponseWrapper::with_service(mock.clone());

        let reply = block_on(wrapper.get_response(&question));
        prop_assert_eq!(reply.unwrap(), "ok");

        let prompts = mock.recorded_prompts();
        prop_assert_eq!(prompts.len(), 1);
        let after_instructions = prompts[0].strip_prefix(FORMAT_INSTRUCTIONS);
        prop_assert!(after_instructions.is_some());
        prop_assert!(after_instructions.unwrap().starts_with(question.as_str()));
    }

    #[test]
    fn prop_blank_prompt_never_calls_out(prompt in arb_blank()) {
        let mock = Arc::new(MockLlmService::new("mock"));
        let wrapper = ResponseWrapper::with_service(mock.clone());

        let err = block_on(wrapper.get_response(&prompt)).unwrap_err();
        prop_assert_eq!(err.kind, RequestErrorKind::InvalidInput);
        prop_assert_eq!(mock.request_count(), 0);
    }

    #[test]
    fn prop_missing_credential_for_any_input(prompt in ".{0,60}") {
        let wrapper = ResponseWrapper::without_credential();
        let err = block_on(wrapper.get_response(&prompt)).unwrap_err();
        prop_assert_eq!(err.kind, RequestErrorKind::MissingCredential);
    }
}
