use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::common::{truncate_text, Paper};

/// Abstracts shorter than this carry too little text to mine
const MIN_ABSTRACT_CHARS: usize = 50;
const MIN_SENTENCE_CHARS: usize = 20;
const MAX_SENTENCE_CHARS: usize = 150;
const MAX_KEY_FINDINGS: usize = 2;

lazy_static! {
    static ref METRIC_PATTERNS: Vec<(MetricKind, Regex)> = vec![
        (
            MetricKind::Performance,
            Regex::new(r"(?i)(\d+\.?\d*)\s*%\s*(accuracy|precision|recall|f1|improvement)").unwrap(),
        ),
        (
            MetricKind::Comparison,
            Regex::new(r"(?i)(\d+\.?\d*)\s*times?\s*(faster|slower|better|worse)").unwrap(),
        ),
        (
            MetricKind::Data,
            Regex::new(r"(?i)dataset\s*(?:of|with|containing)?\s*(\d+[,\d]*)\s*(?:samples|images|examples|instances)").unwrap(),
        ),
        (
            MetricKind::ModelSize,
            Regex::new(r"(?i)(\d+\.?\d*)\s*(?:billion|million|thousand)\s*parameters").unwrap(),
        ),
        (
            MetricKind::Improvement,
            Regex::new(r"(?i)(?:outperform|beat|exceed|surpass).*?by\s*(\d+\.?\d*)\s*%").unwrap(),
        ),
        (
            MetricKind::Achievement,
            Regex::new(r"(?i)(?:achieve|reach).*?(\d+\.?\d*)\s*%").unwrap(),
        ),
    ];
}

const CONTRIBUTION_KEYWORDS: &[&str] = &[
    "we propose",
    "we present",
    "we introduce",
    "we develop",
    "we show",
    "this paper",
    "our method",
    "our approach",
    "our model",
    "our framework",
    "novel",
    "new",
    "first",
    "state-of-the-art",
    "sota",
];

const PROBLEM_KEYWORDS: &[&str] = &[
    "problem",
    "challenge",
    "issue",
    "limitation",
    "difficulty",
    "lack of",
    "cannot",
    "unable to",
    "fails to",
];

const RESULT_KEYWORDS: &[&str] = &[
    "results show",
    "experiments demonstrate",
    "we find",
    "findings",
    "achieves",
    "outperforms",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Performance,
    Comparison,
    Data,
    ModelSize,
    Improvement,
    Achievement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricMatch {
    pub kind: MetricKind,
    pub value: String,
}

/// Quick-read highlights mined from an abstract
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub metrics: Vec<MetricMatch>,
    pub main_contribution: Option<String>,
    pub problem_solved: Option<String>,
    pub key_findings: Vec<String>,
}

impl Insights {
    pub fn has_insights(&self) -> bool {
        !self.metrics.is_empty()
            || self.main_contribution.is_some()
            || self.problem_solved.is_some()
            || !self.key_findings.is_empty()
    }
}

fn mentions_any(sentence: &str, keywords: &[&str]) -> bool {
    let lower = sentence.to_lowercase();
    keywords.iter().any(|keyword| lower.contains(keyword))
}

/// Extract highlights, or `None` when the abstract is missing or too short
pub fn extract_insights(paper: &Paper) -> Option<Insights> {
    let abstract_text = paper.abstract_text.as_deref()?;
    if abstract_text.chars().count() < MIN_ABSTRACT_CHARS {
        return None;
    }

    let full_text = format!("{} {}", paper.title, abstract_text);
    let mut insights = Insights::default();

    for (kind, pattern) in METRIC_PATTERNS.iter() {
        for m in pattern.find_iter(&full_text) {
            insights.metrics.push(MetricMatch {
                kind: *kind,
                value: m.as_str().to_string(),
            });
        }
    }

    let sentences: Vec<&str> = abstract_text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .collect();

    insights.main_contribution = sentences
        .iter()
        .find(|s| mentions_any(s, CONTRIBUTION_KEYWORDS))
        .map(|s| truncate_text(s, MAX_SENTENCE_CHARS));

    insights.problem_solved = sentences
        .iter()
        .find(|s| mentions_any(s, PROBLEM_KEYWORDS))
        .map(|s| truncate_text(s, MAX_SENTENCE_CHARS));

    insights.key_findings = sentences
        .iter()
        .filter(|s| mentions_any(s, RESULT_KEYWORDS))
        .take(MAX_KEY_FINDINGS)
        .map(|s| truncate_text(s, MAX_SENTENCE_CHARS))
        .collect();

    Some(insights)
}
