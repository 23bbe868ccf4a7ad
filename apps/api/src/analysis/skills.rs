//! Skill extraction — case-insensitive substring search of catalog labels
//! against resume text.

/// Returns the catalog labels (original casing) that occur, case-insensitively,
/// anywhere in `text`. Result order follows the catalog; callers treat it as a
/// set. Always a subset of `catalog`.
pub fn extract_skills(text: &str, catalog: &[String]) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let haystack = text.to_lowercase();
    catalog
        .iter()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_finds_skills_case_insensitively() {
        let c = catalog(&["Python", "Java", "SQL", "AWS"]);
        let found = extract_skills("I know python and SQL.", &c);
        assert_eq!(found, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_result_is_subset_of_catalog() {
        let c = catalog(&["Python", "SQL"]);
        let found = extract_skills("Python, SQL, Kubernetes, Rust", &c);
        for skill in &found {
            assert!(c.contains(skill));
        }
    }

    #[test]
    fn test_empty_text_returns_empty() {
        let c = catalog(&["Python", "Java"]);
        assert!(extract_skills("", &c).is_empty());
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        assert!(extract_skills("Python everywhere", &[]).is_empty());
    }

    #[test]
    fn test_verbatim_occurrence_is_always_found() {
        let c = catalog(&["Machine Learning"]);
        let found = extract_skills("Built a machine learning pipeline.", &c);
        assert_eq!(found, vec!["Machine Learning"]);
    }

    #[test]
    fn test_substring_false_positive_is_accepted() {
        // "SQL" matches inside "SQLite". Known limitation of substring
        // matching; kept intentionally, do not "fix" without changing the
        // extraction contract.
        let c = catalog(&["SQL"]);
        let found = extract_skills("Shipped an embedded SQLite store.", &c);
        assert_eq!(found, vec!["SQL"]);
    }

    #[test]
    fn test_preserves_catalog_casing() {
        let c = catalog(&["C++", "AWS"]);
        let found = extract_skills("deployed c++ services on aws", &c);
        assert_eq!(found, vec!["C++", "AWS"]);
    }
}
