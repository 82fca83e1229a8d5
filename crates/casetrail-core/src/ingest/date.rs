use std::sync::Arc;

use chrono::NaiveDate;
use regex::Regex;

/// Day, abbreviated-or-full month name, four-digit year: "5 Jan 2020", "1 April 2018".
pub const DAY_MONTH_YEAR: &str =
    r"\d{1,2}\s(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s\d{4}";

/// Full month name, day, comma, four-digit year: "January 5, 2020".
pub const MONTH_DAY_YEAR: &str = r"(?:January|February|March|April|May|June|July|August|September|October|November|December)\s\d{1,2},\s\d{4}";

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Resolves a date-shaped substring to a calendar date.
pub trait DateNormalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> Option<NaiveDate>;
}

/// Fixed English policy: the matched shape decides field order, so no
/// day-first/month-first guessing takes place.
///
/// * numeric first token: day, month, year (`5 Jan 2020`)
/// * alphabetic first token: month, day, year (`January 5, 2020`)
///
/// Month tokens are full English names, three-letter abbreviations, or
/// `Sept`, matched case-insensitively. Impossible dates yield `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishDateNormalizer;

impl EnglishDateNormalizer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn month_number(token: &str) -> Option<u32> {
        let token = token.to_lowercase();
        if token == "sept" {
            return Some(9);
        }
        MONTHS
            .iter()
            .position(|name| *name == token || (token.len() == 3 && name.starts_with(&token)))
            .and_then(|i| u32::try_from(i + 1).ok())
    }

    fn year(token: &str) -> Option<i32> {
        if token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()) {
            token.parse().ok()
        } else {
            None
        }
    }

    fn day(token: &str) -> Option<u32> {
        if (1..=2).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_digit()) {
            token.parse().ok()
        } else {
            None
        }
    }
}

impl DateNormalizer for EnglishDateNormalizer {
    fn normalize(&self, raw: &str) -> Option<NaiveDate> {
        let tokens: Vec<&str> = raw
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        let [first, second, third] = tokens.as_slice() else {
            return None;
        };

        let (day, month) = if first.starts_with(|c: char| c.is_ascii_digit()) {
            (Self::day(first)?, Self::month_number(second)?)
        } else {
            (Self::day(second)?, Self::month_number(first)?)
        };

        NaiveDate::from_ymd_opt(Self::year(third)?, month, day)
    }
}

#[derive(Clone)]
pub struct DatePattern {
    pub name: &'static str,
    pub regex: Regex,
}

impl DatePattern {
    pub fn new(name: &'static str, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            regex: Regex::new(pattern)?,
        })
    }
}

/// Finds the first date-shaped substring of a sentence.
///
/// Patterns are tried in order and the first one that matches anywhere in the
/// sentence wins; if its match cannot be normalized the sentence has no date,
/// even when a later pattern would have matched.
#[derive(Clone)]
pub struct DateExtractor {
    patterns: Vec<DatePattern>,
    normalizer: Arc<dyn DateNormalizer>,
}

impl DateExtractor {
    #[must_use]
    pub fn new(normalizer: Arc<dyn DateNormalizer>) -> Self {
        Self {
            patterns: Vec::new(),
            normalizer,
        }
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: DatePattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    #[must_use]
    pub fn with_default_patterns(normalizer: Arc<dyn DateNormalizer>) -> Self {
        let mut extractor = Self::new(normalizer);

        if let Ok(p) = DatePattern::new("day-month-year", DAY_MONTH_YEAR) {
            extractor.patterns.push(p);
        }
        if let Ok(p) = DatePattern::new("month-day-year", MONTH_DAY_YEAR) {
            extractor.patterns.push(p);
        }

        extractor
    }

    /// The date-shaped substring selected for `sentence`, before normalization.
    #[must_use]
    pub fn find<'a>(&self, sentence: &'a str) -> Option<&'a str> {
        self.patterns
            .iter()
            .find_map(|p| p.regex.find(sentence))
            .map(|m| m.as_str())
    }

    #[must_use]
    pub fn extract(&self, sentence: &str) -> Option<NaiveDate> {
        let raw = self.find(sentence)?;
        let date = self.normalizer.normalize(raw);
        if date.is_none() {
            tracing::debug!(raw, "date-shaped text did not normalize");
        }
        date
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::with_default_patterns(Arc::new(EnglishDateNormalizer::new()))
    }
}
