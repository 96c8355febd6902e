//! Date-time detection
//!
//! "Does this string look like a date?" is a heuristic, so it lives behind
//! [`DateDetector`] and can be swapped without touching the classifier's
//! priority order.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};

/// Predicate deciding whether a string is a calendar date or date-time
pub trait DateDetector: Send + Sync + std::fmt::Debug {
    /// Returns true if `s` should be typed as `date-time`
    fn looks_like_date(&self, s: &str) -> bool;
}

/// Which date detector to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateDetection {
    /// ISO 8601 variants, RFC 2822 and common written dates
    #[default]
    Lenient,
    /// RFC 3339 date-times and `YYYY-MM-DD` dates only
    Strict,
    /// Never detect dates
    Off,
}

impl DateDetection {
    /// Build the detector for this mode
    pub fn detector(self) -> Arc<dyn DateDetector> {
        match self {
            DateDetection::Lenient => Arc::new(LenientDateDetector),
            DateDetection::Strict => Arc::new(StrictDateDetector),
            DateDetection::Off => Arc::new(NoDateDetection),
        }
    }
}

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

static ISO_YEAR_MONTH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}$").unwrap());

/// Date-time layouts with an explicit UTC offset
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Date-time layouts without an offset
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Date-only layouts
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Accepts most human and machine date spellings
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientDateDetector;

impl DateDetector for LenientDateDetector {
    fn looks_like_date(&self, s: &str) -> bool {
        let s = s.trim();
        if s.is_empty() {
            return false;
        }

        if DateTime::parse_from_rfc3339(s).is_ok() || DateTime::parse_from_rfc2822(s).is_ok() {
            return true;
        }

        if OFFSET_DATETIME_FORMATS
            .iter()
            .any(|fmt| DateTime::parse_from_str(s, fmt).is_ok())
        {
            return true;
        }

        // "Z" outside of full RFC 3339, e.g. 2024-01-15T10:30Z
        let naive = s.strip_suffix('Z').unwrap_or(s);
        if NAIVE_DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(naive, fmt).is_ok())
        {
            return true;
        }

        if DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(s, fmt).is_ok())
        {
            return true;
        }

        ISO_YEAR_MONTH.is_match(s)
            && NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").is_ok()
    }
}

/// Accepts only RFC 3339 date-times and ISO calendar dates
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictDateDetector;

impl DateDetector for StrictDateDetector {
    fn looks_like_date(&self, s: &str) -> bool {
        DateTime::parse_from_rfc3339(s).is_ok()
            || (ISO_DATE.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok())
    }
}

/// Never reports a date
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDateDetection;

impl DateDetector for NoDateDetection {
    fn looks_like_date(&self, _s: &str) -> bool {
        false
    }
}
