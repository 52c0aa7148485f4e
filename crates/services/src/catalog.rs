//! Wire shapes of the published quiz data and their mapping to domain types.
//!
//! The documents are consumed as-is. Missing or `null` fields fall back to empty
//! strings and other non-string values are kept in their JSON text form, so a
//! malformed entry still loads and is simply scored as wrong.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use quiz_core::model::{Question, Quiz, QuizId, Subject, SubjectId};

use crate::error::FetchError;
use crate::fetcher::DataFetcher;

#[derive(Debug, Deserialize)]
struct SubjectDto {
    #[serde(default, deserialize_with = "lenient_text")]
    name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    quizzes_url: String,
}

#[derive(Debug, Deserialize)]
struct QuizDto {
    #[serde(default, deserialize_with = "lenient_text")]
    title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    questions_url: String,
}

#[derive(Debug, Deserialize)]
struct QuestionSetDto {
    questions: Vec<QuestionDto>,
}

#[derive(Debug, Deserialize)]
struct QuestionDto {
    #[serde(default, deserialize_with = "lenient_text")]
    text: String,
    #[serde(default, deserialize_with = "lenient_text")]
    answer: String,
}

/// Strings pass through, `null` becomes empty, anything else keeps its JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Decode a subjects document: `[{ name, quizzes_url }]`.
///
/// # Errors
///
/// Returns `FetchError::Decode` when the document is not an array of objects.
pub fn decode_subjects(document: Value) -> Result<Vec<Subject>, FetchError> {
    let items: Vec<SubjectDto> = serde_json::from_value(document)?;
    Ok(items
        .into_iter()
        .enumerate()
        .map(|(position, dto)| Subject::new(SubjectId::new(position), dto.name, dto.quizzes_url))
        .collect())
}

/// Decode a quizzes document: `[{ title, questions_url }]`.
///
/// # Errors
///
/// Returns `FetchError::Decode` when the document is not an array of objects.
pub fn decode_quizzes(document: Value) -> Result<Vec<Quiz>, FetchError> {
    let items: Vec<QuizDto> = serde_json::from_value(document)?;
    Ok(items
        .into_iter()
        .enumerate()
        .map(|(position, dto)| Quiz::new(QuizId::new(position), dto.title, dto.questions_url))
        .collect())
}

/// Decode a questions document: `{ questions: [{ text, answer }] }`.
///
/// # Errors
///
/// Returns `FetchError::Decode` when the `questions` array is missing or malformed.
pub fn decode_questions(document: Value) -> Result<Vec<Question>, FetchError> {
    let set: QuestionSetDto = serde_json::from_value(document)?;
    Ok(set
        .questions
        .into_iter()
        .map(|dto| Question::new(dto.text, dto.answer))
        .collect())
}

/// Fetch and decode the subject index.
///
/// # Errors
///
/// Returns `FetchError` for transport or decoding failures.
pub async fn fetch_subjects(
    fetcher: &dyn DataFetcher,
    url: &str,
) -> Result<Vec<Subject>, FetchError> {
    decode_subjects(fetcher.fetch_json(url).await?)
}

/// Fetch and decode the quiz list of a subject.
///
/// # Errors
///
/// Returns `FetchError` for transport or decoding failures.
pub async fn fetch_quizzes(fetcher: &dyn DataFetcher, url: &str) -> Result<Vec<Quiz>, FetchError> {
    decode_quizzes(fetcher.fetch_json(url).await?)
}

/// Fetch and decode the questions of a quiz.
///
/// # Errors
///
/// Returns `FetchError` for transport or decoding failures.
pub async fn fetch_questions(
    fetcher: &dyn DataFetcher,
    url: &str,
) -> Result<Vec<Question>, FetchError> {
    decode_questions(fetcher.fetch_json(url).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subjects_get_positional_ids() {
        let subjects = decode_subjects(json!([
            { "name": "Math", "quizzes_url": "https://data.test/math.json" },
            { "name": "Physics", "quizzes_url": "https://data.test/physics.json" }
        ]))
        .unwrap();

        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[1].id(), SubjectId::new(1));
        assert_eq!(subjects[1].name(), "Physics");
        assert_eq!(subjects[0].quizzes_url(), "https://data.test/math.json");
    }

    #[test]
    fn quizzes_tolerate_missing_fields() {
        let quizzes = decode_quizzes(json!([{ "title": "Algebra" }, {}])).unwrap();

        assert_eq!(quizzes[0].title(), "Algebra");
        assert_eq!(quizzes[0].questions_url(), "");
        assert_eq!(quizzes[1].title(), "");
    }

    #[test]
    fn questions_keep_malformed_answers_verbatim() {
        let questions = decode_questions(json!({
            "questions": [
                { "text": "Sky is blue", "answer": "True" },
                { "text": "Lowercase", "answer": "false" },
                { "text": "Boolean", "answer": true },
                { "text": "Missing" }
            ]
        }))
        .unwrap();

        assert_eq!(questions[0].answer(), "True");
        assert_eq!(questions[1].answer(), "false");
        assert_eq!(questions[2].answer(), "true");
        assert_eq!(questions[3].answer(), "");
    }

    #[test]
    fn malformed_text_fields_degrade_instead_of_failing() {
        let questions = decode_questions(json!({
            "questions": [
                { "text": "ok", "answer": "True" },
                { "text": null, "answer": "False" },
                { "text": 42, "answer": "True" }
            ]
        }))
        .unwrap();

        assert_eq!(questions.len(), 3);
        assert_eq!(questions[1].text(), "");
        assert_eq!(questions[1].answer(), "False");
        assert_eq!(questions[2].text(), "42");

        let subjects = decode_subjects(json!([
            { "name": "Math", "quizzes_url": "https://data.test/math.json" },
            { "name": null, "quizzes_url": 7 }
        ]))
        .unwrap();

        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[1].name(), "");
        assert_eq!(subjects[1].quizzes_url(), "7");

        let quizzes = decode_quizzes(json!([{ "title": ["a"], "questions_url": null }])).unwrap();
        assert_eq!(quizzes[0].title(), r#"["a"]"#);
        assert_eq!(quizzes[0].questions_url(), "");
    }

    #[test]
    fn questions_document_without_array_is_rejected() {
        let err = decode_questions(json!({ "items": [] })).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn subjects_document_must_be_an_array() {
        let err = decode_subjects(json!({ "name": "Math" })).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
