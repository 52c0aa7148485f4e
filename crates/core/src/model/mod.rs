mod answers;
mod catalog;
mod ids;
mod question;

pub use answers::AnswerMap;
pub use catalog::{Quiz, Subject};
pub use ids::{QuizId, SubjectId};
pub use question::{AnswerChoice, Question};
