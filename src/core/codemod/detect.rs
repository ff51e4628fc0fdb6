//! Decide whether a route file needs migrating, and which params it reads.
//!
//! Plain substring containment. Matches inside comments and strings count.

use super::fields::ParamField;

/// Presence of this text means the file already awaits its params.
pub const MIGRATED_MARKER: &str = "await params";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// Contains [`MIGRATED_MARKER`]; left alone.
    AlreadyMigrated,
    /// None of the known `params.<field>` expressions appear.
    NoParams,
    /// Fields present, in canonical order. Never empty.
    Fields(Vec<ParamField>),
}

pub fn detect(content: &str) -> Detection {
    if content.contains(MIGRATED_MARKER) {
        return Detection::AlreadyMigrated;
    }

    let fields: Vec<ParamField> = ParamField::ALL
        .into_iter()
        .filter(|field| content.contains(field.access_expr()))
        .collect();

    if fields.is_empty() {
        Detection::NoParams
    } else {
        Detection::Fields(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_wins_over_legacy_access() {
        let content = "const { courseId } = await params\nconst x = params.quizId;";
        assert_eq!(detect(content), Detection::AlreadyMigrated);
    }

    #[test]
    fn no_known_fields_is_no_params() {
        let content = "const slug = params.slug;\nexport async function GET() {}";
        assert_eq!(detect(content), Detection::NoParams);
    }

    #[test]
    fn fields_follow_canonical_order_not_file_order() {
        let content = "params.reviewId; params.courseId; params.quizId; params.reviewId;";
        assert_eq!(
            detect(content),
            Detection::Fields(vec![
                ParamField::CourseId,
                ParamField::QuizId,
                ParamField::ReviewId,
            ])
        );
    }

    #[test]
    fn matches_inside_comments() {
        let content = "// TODO use params.attemptId\n";
        assert_eq!(
            detect(content),
            Detection::Fields(vec![ParamField::AttemptId])
        );
    }
}
