//! Analysis report assembly — the structured result object handed to
//! whatever presentation layer sits in front of the API.

use serde::Serialize;
use std::collections::HashMap;

use crate::analysis::matching::{match_jobs, MatchResult, SimilarityScorer};
use crate::analysis::skills::extract_skills;
use crate::catalog::JobPosting;

const PREVIEW_CHARS: usize = 1000;
const WORD_FREQUENCY_LIMIT: usize = 50;

/// Matched-vs-missing counts for the skill coverage chart.
#[derive(Debug, Clone, Serialize)]
pub struct SkillChart {
    /// |candidate skills|
    pub matched: usize,
    /// |catalog − candidate skills|
    pub missing: usize,
}

/// A word and how often it occurs in the resume text. Input for word-cloud
/// rendering; the service ships counts, never pixels.
#[derive(Debug, Clone, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Full analysis of one uploaded resume. Built fresh per request, never
/// cached or shared.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// First 1000 chars of extracted text plus a truncation marker.
    pub text_preview: String,
    pub text_chars: usize,
    /// Catalog labels detected in the resume, catalog order.
    pub skills: Vec<String>,
    /// Top 3 postings by similarity score, descending.
    pub matches: Vec<MatchResult>,
    pub skill_chart: SkillChart,
    /// Most frequent resume words, count descending.
    pub word_frequencies: Vec<WordCount>,
}

/// Runs the full pipeline over already-extracted text: skill extraction,
/// job matching, chart counts, and word frequencies. Pure function.
pub fn analyze_resume(
    text: &str,
    skill_catalog: &[String],
    job_catalog: &[JobPosting],
    scorer: &dyn SimilarityScorer,
) -> AnalyzeResponse {
    let skills = extract_skills(text, skill_catalog);
    let matches = match_jobs(&skills, job_catalog, scorer);
    let skill_chart = SkillChart {
        matched: skills.len(),
        missing: skill_catalog.len() - skills.len(),
    };

    AnalyzeResponse {
        text_preview: preview(text),
        text_chars: text.chars().count(),
        skills,
        matches,
        skill_chart,
        word_frequencies: word_frequencies(text),
    }
}

/// First `PREVIEW_CHARS` characters with a trailing `...` marker.
/// Char-based, so multi-byte text never splits a boundary.
fn preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}

/// Words a word cloud should not bother rendering.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "from", "have", "has", "had", "was", "were",
    "are", "been", "being", "will", "would", "can", "could", "should", "may", "might", "not",
    "but", "all", "any", "our", "your", "their", "his", "her", "its", "they", "them", "you",
    "who", "which", "when", "where", "what", "how", "than", "then", "there", "here", "into",
    "out", "over", "under", "more", "most", "other", "such", "some", "also", "per", "via",
];

/// Lowercased alphabetic tokens longer than 2 chars, stopwords removed,
/// top `WORD_FREQUENCY_LIMIT` by count. Ties sort alphabetically so the
/// output is deterministic.
fn word_frequencies(text: &str) -> Vec<WordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in text.split(|c: char| !c.is_alphabetic()) {
        if token.len() <= 2 {
            continue;
        }
        let word = token.to_lowercase();
        if STOPWORDS.contains(&word.as_str()) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut frequencies: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    frequencies.truncate(WORD_FREQUENCY_LIMIT);
    frequencies
}
