//! Scalar datatype classification

use super::dates::{DateDetection, DateDetector};
use super::types::TypeTag;
use crate::types::Scalar;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};

/// Decimal literal, as accepted by JavaScript-style numeric coercion
static DECIMAL_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap());

/// Hex, octal and binary integer literals
static RADIX_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0([xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$").unwrap());

/// Key fragments that mark a field as a monetary amount
pub const DEFAULT_MONETARY_KEYS: &[&str] = &[
    "price", "amount", "cost", "total", "subtotal", "fee", "tax", "balance", "discount",
];

/// How numeric values are tagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericMode {
    /// Every numeric value is `number`
    #[default]
    NumberOnly,
    /// Monetary keys are `number`, every other numeric value is `integer`
    PriceHeuristic,
}

/// Returns true if `s` coerces to a finite-or-infinite number (never NaN).
///
/// Surrounding whitespace is ignored. Blank strings do not count as numeric.
pub fn coerces_to_number(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    matches!(s, "Infinity" | "+Infinity" | "-Infinity")
        || RADIX_LITERAL.is_match(s)
        || DECIMAL_LITERAL.is_match(s)
}

/// Assigns a [`TypeTag`] to scalar values
#[derive(Debug, Clone)]
pub struct Classifier {
    numeric_mode: NumericMode,
    monetary_keys: Vec<String>,
    dates: Arc<dyn DateDetector>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Create a classifier with lenient date detection and a single numeric tag
    pub fn new() -> Self {
        Self {
            numeric_mode: NumericMode::NumberOnly,
            monetary_keys: DEFAULT_MONETARY_KEYS
                .iter()
                .map(|k| (*k).to_string())
                .collect(),
            dates: DateDetection::Lenient.detector(),
        }
    }

    /// Set the numeric tagging mode
    #[must_use]
    pub fn with_numeric_mode(mut self, mode: NumericMode) -> Self {
        self.numeric_mode = mode;
        self
    }

    /// Replace the monetary key fragments used by the price heuristic
    #[must_use]
    pub fn with_monetary_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.monetary_keys = keys
            .into_iter()
            .map(|k| k.into().to_lowercase())
            .collect();
        self
    }

    /// Use a custom date detector
    #[must_use]
    pub fn with_date_detector(mut self, detector: Arc<dyn DateDetector>) -> Self {
        self.dates = detector;
        self
    }

    /// Use one of the built-in date detectors
    #[must_use]
    pub fn with_date_detection(self, detection: DateDetection) -> Self {
        self.with_date_detector(detection.detector())
    }

    /// Classify a scalar. `key` is only consulted by the price heuristic.
    pub fn classify(&self, key: &str, value: &Scalar) -> TypeTag {
        match value {
            Scalar::Bool(_) => TypeTag::Boolean,
            Scalar::Number(_) => self.numeric_tag(key),
            Scalar::String(s) if coerces_to_number(s) => self.numeric_tag(key),
            Scalar::String(s) if self.dates.looks_like_date(s) => TypeTag::DateTime,
            Scalar::String(_) | Scalar::Null => TypeTag::String,
        }
    }

    /// Returns true if `key` names a monetary amount
    pub fn is_monetary_key(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.monetary_keys.iter().any(|m| key.contains(m.as_str()))
    }

    fn numeric_tag(&self, key: &str) -> TypeTag {
        match self.numeric_mode {
            NumericMode::NumberOnly => TypeTag::Number,
            NumericMode::PriceHeuristic if self.is_monetary_key(key) => TypeTag::Number,
            NumericMode::PriceHeuristic => TypeTag::Integer,
        }
    }
}
