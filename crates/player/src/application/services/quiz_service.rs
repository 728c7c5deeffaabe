//! Quiz Service - sub-quiz content and answer validation

use std::sync::Arc;

use quizdeck_domain::{ChoiceValidation, SequenceValidation, SubQuiz};
use quizdeck_shared::{
    QuizErrorCode, ServerFnRequest, SubQuizParams, ValidateChoiceQuestionParams,
    ValidateSequenceOrderParams, WireError, WireResult,
};

use crate::application::ParseEnvelope;
use crate::ports::outbound::ServerFnPort;

pub type QuizResult<T> = WireResult<T, WireError<QuizErrorCode>>;

#[derive(Clone)]
pub struct QuizService {
    server: Arc<dyn ServerFnPort>,
}

impl QuizService {
    pub fn new(server: Arc<dyn ServerFnPort>) -> Self {
        Self { server }
    }

    /// Sub-quiz with all of its questions. The server answers with the bare
    /// payload and throws on failure.
    pub async fn get_sub_quiz_content(&self, params: SubQuizParams) -> QuizResult<SubQuiz> {
        self.server
            .call(ServerFnRequest::GetSubQuizContent(params))
            .await
            .into_payload()
    }

    pub async fn validate_choice_question(
        &self,
        params: ValidateChoiceQuestionParams,
    ) -> QuizResult<ChoiceValidation> {
        tracing::debug!(
            question_id = %params.question_id,
            choice_id = %params.choice_id,
            "Validating choice answer"
        );
        self.server
            .call(ServerFnRequest::ValidateChoiceQuestion(params))
            .await
            .into_envelope()
    }

    pub async fn validate_sequence_order(
        &self,
        params: ValidateSequenceOrderParams,
    ) -> QuizResult<SequenceValidation> {
        tracing::debug!(
            question_id = %params.question_id,
            items = params.order.len(),
            "Validating sequence answer"
        );
        self.server
            .call(ServerFnRequest::ValidateSequenceOrder(params))
            .await
            .into_envelope()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures;
    use crate::ports::outbound::MockServerFnPort;
    use quizdeck_domain::QuizQuestion;
    use quizdeck_shared::RequestError;
    use serde_json::json;

    fn service(mock: MockServerFnPort) -> QuizService {
        QuizService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn sub_quiz_content_decodes_both_question_kinds() {
        let mut mock = MockServerFnPort::new();
        mock.expect_call()
            .withf(|req| {
                matches!(req, ServerFnRequest::GetSubQuizContent(p)
                    if p.category_id.as_str() == "c1" && p.quiz_id.as_str() == "q1")
            })
            .times(1)
            .returning(|_| Ok(fixtures::sub_quiz_json("q1", "c1")));

        let result = service(mock)
            .get_sub_quiz_content(SubQuizParams {
                category_id: "c1".into(),
                quiz_id: "q1".into(),
            })
            .await;

        let WireResult::Success { value } = result else {
            panic!("expected success");
        };
        assert_eq!(value.questions.len(), 2);
        assert!(matches!(value.questions[0], QuizQuestion::ChoiceQuestion(_)));
        assert!(matches!(value.questions[1], QuizQuestion::SequenceOrder(_)));
    }

    #[tokio::test]
    async fn sub_quiz_with_unknown_question_tag_is_rejected() {
        let mut mock = MockServerFnPort::new();
        mock.expect_call().returning(|_| {
            let mut body = fixtures::sub_quiz_json("q1", "c1");
            body["questions"][0]["_tag"] = json!("Essay");
            Ok(body)
        });

        let result = service(mock)
            .get_sub_quiz_content(SubQuizParams {
                category_id: "c1".into(),
                quiz_id: "q1".into(),
            })
            .await;

        let WireResult::Failure { error } = result else {
            panic!("expected failure");
        };
        assert_eq!(error.code, QuizErrorCode::FetchError);
        assert!(error.message.contains("$.questions[0] expected object tagged by `_tag`"));
    }

    #[tokio::test]
    async fn choice_validation_failure_is_passed_through() {
        let mut mock = MockServerFnPort::new();
        mock.expect_call()
            .returning(|_| Ok(fixtures::failure("invalid_answer", "Unknown choice")));

        let result = service(mock)
            .validate_choice_question(ValidateChoiceQuestionParams {
                category_id: "c1".into(),
                quiz_id: "q1".into(),
                question_id: "qq1".into(),
                choice_id: "x".into(),
            })
            .await;
        assert_eq!(
            result,
            WireResult::failure(WireError::new(QuizErrorCode::InvalidAnswer, "Unknown choice"))
        );
    }

    #[tokio::test]
    async fn sequence_validation_reports_expected_order() {
        let mut mock = MockServerFnPort::new();
        mock.expect_call()
            .withf(|req| {
                matches!(req, ServerFnRequest::ValidateSequenceOrder(p) if p.order.len() == 3)
            })
            .returning(|_| {
                Ok(fixtures::success(json!({
                    "questionId": "qq2",
                    "correct": false,
                    "expectedOrder": ["a", "b", "c"]
                })))
            });

        let result = service(mock)
            .validate_sequence_order(ValidateSequenceOrderParams {
                category_id: "c1".into(),
                quiz_id: "q1".into(),
                question_id: "qq2".into(),
                order: vec!["c".into(), "a".into(), "b".into()],
            })
            .await;

        let WireResult::Success { value } = result else {
            panic!("expected success");
        };
        assert!(!value.correct);
        assert_eq!(value.expected_order.map(|o| o.len()), Some(3));
    }

    #[tokio::test]
    async fn timeout_is_normalized_to_fetch_error() {
        let mut mock = MockServerFnPort::new();
        mock.expect_call()
            .returning(|_| Err(RequestError::Timeout));

        let result = service(mock)
            .validate_choice_question(ValidateChoiceQuestionParams {
                category_id: "c1".into(),
                quiz_id: "q1".into(),
                question_id: "qq1".into(),
                choice_id: "a".into(),
            })
            .await;
        let WireResult::Failure { error } = result else {
            panic!("expected failure");
        };
        assert!(error.is_fetch_error());
    }
}
