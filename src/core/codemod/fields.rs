//! The fixed vocabulary of route params the codemod knows about.

use serde::Serialize;

/// A recognised route param, in canonical declaration order.
///
/// Variant order is the order names appear in the generated destructuring
/// declaration, regardless of where they appear in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum ParamField {
    CourseId,
    ChapterId,
    QuizId,
    AttemptId,
    QuestionId,
    ReviewId,
}

impl ParamField {
    pub const ALL: [ParamField; 6] = [
        ParamField::CourseId,
        ParamField::ChapterId,
        ParamField::QuizId,
        ParamField::AttemptId,
        ParamField::QuestionId,
        ParamField::ReviewId,
    ];

    /// Bare identifier used in the destructuring and as the replacement.
    pub fn name(&self) -> &'static str {
        match self {
            ParamField::CourseId => "courseId",
            ParamField::ChapterId => "chapterId",
            ParamField::QuizId => "quizId",
            ParamField::AttemptId => "attemptId",
            ParamField::QuestionId => "questionId",
            ParamField::ReviewId => "reviewId",
        }
    }

    /// Legacy access expression, e.g. `params.courseId`.
    pub fn access_expr(&self) -> &'static str {
        match self {
            ParamField::CourseId => "params.courseId",
            ParamField::ChapterId => "params.chapterId",
            ParamField::QuizId => "params.quizId",
            ParamField::AttemptId => "params.attemptId",
            ParamField::QuestionId => "params.questionId",
            ParamField::ReviewId => "params.reviewId",
        }
    }
}

impl From<ParamField> for &'static str {
    fn from(field: ParamField) -> Self {
        field.name()
    }
}

impl std::fmt::Display for ParamField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
