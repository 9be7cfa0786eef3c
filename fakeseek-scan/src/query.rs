//! Search query planning.

use crate::error::ScanError;

/// Indicator phrases paired with the quoted full name, in query order.
pub const INDICATOR_PHRASES: [&str; 6] = [
    "deepfake",
    "deep fake",
    "ai generated",
    "fake video",
    "manipulated video",
    "face swap",
];

/// Join trimmed name parts into the full name used in queries and reports.
///
/// # Errors
///
/// Returns [`ScanError::InvalidInput`] if either part is empty or blank.
pub fn full_name(first_name: &str, last_name: &str) -> Result<String, ScanError> {
    let first = first_name.trim();
    let last = last_name.trim();
    if first.is_empty() {
        return Err(ScanError::InvalidInput(
            "first name must not be blank".into(),
        ));
    }
    if last.is_empty() {
        return Err(ScanError::InvalidInput("last name must not be blank".into()));
    }
    Ok(format!("{first} {last}"))
}

/// Build the ordered query list for a person.
///
/// Each query has the form `"<first> <last>" "<phrase>"`, one per entry of
/// [`INDICATOR_PHRASES`].
///
/// # Errors
///
/// Returns [`ScanError::InvalidInput`] if either name part is empty or blank.
pub fn plan_queries(first_name: &str, last_name: &str) -> Result<Vec<String>, ScanError> {
    let name = full_name(first_name, last_name)?;
    Ok(INDICATOR_PHRASES
        .iter()
        .map(|phrase| format!("\"{name}\" \"{phrase}\""))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_six_queries_containing_name() {
        let queries = plan_queries("John", "Doe").expect("valid names");
        assert_eq!(queries.len(), 6);
        for q in &queries {
            assert!(q.contains("John Doe"), "query missing name: {q}");
        }
    }

    #[test]
    fn queries_follow_phrase_order() {
        let queries = plan_queries("John", "Doe").expect("valid names");
        assert_eq!(queries[0], r#""John Doe" "deepfake""#);
        assert_eq!(queries[1], r#""John Doe" "deep fake""#);
        assert_eq!(queries[5], r#""John Doe" "face swap""#);
    }

    #[test]
    fn planning_is_deterministic() {
        assert_eq!(
            plan_queries("Ada", "Lovelace").expect("valid"),
            plan_queries("Ada", "Lovelace").expect("valid")
        );
    }

    #[test]
    fn name_parts_are_trimmed() {
        let queries = plan_queries("  John ", "Doe\t").expect("valid names");
        assert_eq!(queries[0], r#""John Doe" "deepfake""#);
    }

    #[test]
    fn empty_first_name_is_invalid() {
        let err = plan_queries("", "Doe").unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
    }

    #[test]
    fn blank_last_name_is_invalid() {
        let err = plan_queries("John", "   ").unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
        assert!(err.to_string().contains("last name"));
    }
}
