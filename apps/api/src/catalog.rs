//! Skill and job catalogs — static configuration, loaded once at startup and
//! read-only for the process lifetime.
//!
//! Built-in defaults can be overridden from JSON files via
//! `SKILL_CATALOG_PATH` / `JOB_CATALOG_PATH` without any behavior change.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// A job posting: display title plus its ordered required-skill list.
#[derive(Debug, Clone)]
pub struct JobPosting {
    pub title: String,
    pub skills: Vec<String>,
}

/// On-disk shape of a posting. `skills` stays a `", "`-delimited string in
/// config so the file reads like the job ad it came from.
#[derive(Debug, Deserialize)]
struct JobPostingConfig {
    title: String,
    skills: String,
}

/// Recognized skill keywords checked against resume text.
const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "Machine Learning",
    "Deep Learning",
    "SQL",
    "Data Analysis",
    "Communication",
    "Leadership",
    "C++",
    "AWS",
    "Excel",
];

const DEFAULT_JOBS: &[(&str, &str)] = &[
    ("Data Scientist", "Python, SQL, Machine Learning, Data Analysis"),
    ("Software Engineer", "Java, C++, AWS, Communication"),
    ("ML Engineer", "Python, Deep Learning, TensorFlow, Leadership"),
];

/// Splits a `", "`-delimited skill string into its ordered labels.
pub fn parse_skill_list(skills: &str) -> Vec<String> {
    skills
        .split(", ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Loads the skill catalog: a JSON array of strings, or the built-in list.
pub fn load_skill_catalog(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read skill catalog: {}", p.display()))?;
            let skills: Vec<String> = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid skill catalog JSON: {}", p.display()))?;
            Ok(skills)
        }
        None => Ok(DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()),
    }
}

/// Loads the job catalog: a JSON array of `{ title, skills }` objects, or the
/// built-in postings. Posting order is preserved; it breaks score ties.
pub fn load_job_catalog(path: Option<&Path>) -> Result<Vec<JobPosting>> {
    let configs: Vec<JobPostingConfig> = match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read job catalog: {}", p.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid job catalog JSON: {}", p.display()))?
        }
        None => DEFAULT_JOBS
            .iter()
            .map(|(title, skills)| JobPostingConfig {
                title: title.to_string(),
                skills: skills.to_string(),
            })
            .collect(),
    };

    Ok(configs
        .into_iter()
        .map(|c| JobPosting {
            title: c.title,
            skills: parse_skill_list(&c.skills),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_skill_list_splits_on_comma_space() {
        let skills = parse_skill_list("Python, SQL, Machine Learning");
        assert_eq!(skills, vec!["Python", "SQL", "Machine Learning"]);
    }

    #[test]
    fn test_parse_skill_list_empty_string() {
        assert!(parse_skill_list("").is_empty());
    }

    #[test]
    fn test_parse_skill_list_single_label() {
        assert_eq!(parse_skill_list("Rust"), vec!["Rust"]);
    }

    #[test]
    fn test_default_skill_catalog_has_eleven_labels() {
        let catalog = load_skill_catalog(None).unwrap();
        assert_eq!(catalog.len(), 11);
        assert!(catalog.contains(&"Python".to_string()));
        assert!(catalog.contains(&"Excel".to_string()));
    }

    #[test]
    fn test_default_job_catalog_has_three_postings() {
        let jobs = load_job_catalog(None).unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].title, "Data Scientist");
        assert_eq!(
            jobs[0].skills,
            vec!["Python", "SQL", "Machine Learning", "Data Analysis"]
        );
        // TensorFlow is required by ML Engineer but absent from the skill
        // catalog, so it can never be matched. Matches the source data.
        assert!(jobs[2].skills.contains(&"TensorFlow".to_string()));
    }

    #[test]
    fn test_load_skill_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["Rust", "Go"]"#).unwrap();

        let catalog = load_skill_catalog(Some(file.path())).unwrap();
        assert_eq!(catalog, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_load_job_catalog_from_file_parses_skill_strings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "Backend Engineer", "skills": "Rust, SQL"}}]"#
        )
        .unwrap();

        let jobs = load_job_catalog(Some(file.path())).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Backend Engineer");
        assert_eq!(jobs[0].skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_load_job_catalog_missing_file_errors() {
        let result = load_job_catalog(Some(Path::new("/nonexistent/jobs.json")));
        assert!(result.is_err());
    }
}
