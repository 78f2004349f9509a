use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::common::{parse_date, Paper};

pub const DAYS_PER_YEAR: f64 = 365.25;

/// Below this age (in years) citation rates are too noisy to report
pub const MIN_RATE_AGE: f64 = 0.5;

/// Year-over-year change (citations/year) separating Stable from a trend
const MOMENTUM_THRESHOLD: f64 = 20.0;

/// Window for recent velocity, in calendar years including the current one
const RECENT_WINDOW_YEARS: i32 = 2;

/// Short-term trend in yearly citation accrual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Momentum {
    Accelerating,
    Stable,
    Declining,
    /// No per-year data to judge from
    Unknown,
}

impl Momentum {
    fn from_acceleration(acceleration: f64) -> Self {
        if acceleration > MOMENTUM_THRESHOLD {
            Momentum::Accelerating
        } else if acceleration < -MOMENTUM_THRESHOLD {
            Momentum::Declining
        } else {
            Momentum::Stable
        }
    }
}

/// Time-based citation metrics for one paper at a reference date
#[derive(Debug, Clone, PartialEq)]
pub struct CitationMetrics {
    pub citation_count: u64,
    pub age: f64,
    /// Citations per year over the paper's lifetime
    pub velocity: Option<f64>,
    /// Citations per year over the recent window
    pub recent_velocity: Option<f64>,
    pub acceleration: Option<f64>,
    pub momentum: Option<Momentum>,
}

impl CitationMetrics {
    /// Whether the paper is old enough for rates to be meaningful
    pub fn is_measurable(&self) -> bool {
        self.age >= MIN_RATE_AGE
    }
}

/// Explicit publication date, else the middle of the publication year.
///
/// An explicit date that fails to parse makes the paper undatable; the year
/// is not used as a fallback in that case.
pub fn publication_date(paper: &Paper) -> Option<Date> {
    match paper.publication_date.as_deref().map(str::trim) {
        Some(explicit) if !explicit.is_empty() => parse_date(explicit),
        _ => paper
            .publication_year
            .and_then(|year| Date::from_calendar_date(year, Month::June, 30).ok()),
    }
}

/// Age in fractional years at `now`; `None` when undatable or in the future
pub fn age_in_years(paper: &Paper, now: Date) -> Option<f64> {
    let published = publication_date(paper)?;
    let age = (now - published).whole_days() as f64 / DAYS_PER_YEAR;
    if age.is_nan() || age < 0.0 {
        None
    } else {
        Some(age)
    }
}

/// Compute citation metrics, or `None` when the paper cannot be dated
pub fn citation_metrics(paper: &Paper, now: Date) -> Option<CitationMetrics> {
    let age = age_in_years(paper, now)?;
    let citation_count = paper.citation_count;

    if age < MIN_RATE_AGE {
        return Some(CitationMetrics {
            citation_count,
            age,
            velocity: None,
            recent_velocity: None,
            acceleration: None,
            momentum: None,
        });
    }

    let velocity = citation_count as f64 / age;

    let (recent_velocity, acceleration, momentum) = match &paper.counts_by_year {
        Some(counts) => {
            let window_start = now.year() - (RECENT_WINDOW_YEARS - 1);
            let recent: u64 = counts
                .range(window_start..=now.year())
                .map(|(_, count)| *count)
                .sum();
            let recent_velocity = recent as f64 / age.min(RECENT_WINDOW_YEARS as f64);

            // Newest year against the entry two positions older
            let newest_first: Vec<u64> = counts.values().rev().copied().collect();
            let acceleration = if newest_first.len() >= 3 {
                Some((newest_first[0] as f64 - newest_first[2] as f64) / 2.0)
            } else {
                None
            };
            let momentum = acceleration.map_or(Momentum::Unknown, Momentum::from_acceleration);
            (recent_velocity, acceleration, momentum)
        }
        None => (velocity, None, Momentum::Unknown),
    };

    Some(CitationMetrics {
        citation_count,
        age,
        velocity: Some(velocity),
        recent_velocity: Some(recent_velocity),
        acceleration,
        momentum: Some(momentum),
    })
}
