use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::export::TimelineRow;

/// Rendered in place of an empty party list.
pub const NO_PERSONS: &str = "N/A";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventCategory {
    Filing,
    Hearing,
    #[serde(rename = "Interim Order")]
    InterimOrder,
    Transfer,
    Judgment,
    Appeal,
    Other,
}

impl EventCategory {
    pub const ALL: [Self; 7] = [
        Self::Filing,
        Self::Hearing,
        Self::InterimOrder,
        Self::Transfer,
        Self::Judgment,
        Self::Appeal,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Filing => "Filing",
            Self::Hearing => "Hearing",
            Self::InterimOrder => "Interim Order",
            Self::Transfer => "Transfer",
            Self::Judgment => "Judgment",
            Self::Appeal => "Appeal",
            Self::Other => "Other",
        }
    }

    /// Lowercase, hyphenated form of the label, e.g. `interim-order`.
    #[must_use]
    pub fn slug(&self) -> String {
        self.as_str().to_lowercase().replace(' ', "-")
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(' ', "-");
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == wanted)
            .ok_or_else(|| crate::Error::UnknownCategory(s.to_string()))
    }
}

/// One dated sentence of a case document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    date: NaiveDate,
    category: EventCategory,
    description: String,
    persons: Vec<String>,
}

impl EventRecord {
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        category: EventCategory,
        description: String,
        persons: Vec<String>,
    ) -> Self {
        Self {
            date,
            category,
            description,
            persons,
        }
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn category(&self) -> EventCategory {
        self.category
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn persons(&self) -> &[String] {
        &self.persons
    }

    #[must_use]
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    #[must_use]
    pub fn persons_field(&self) -> String {
        if self.persons.is_empty() {
            NO_PERSONS.to_string()
        } else {
            self.persons.join(", ")
        }
    }

    #[must_use]
    pub fn to_row(&self) -> TimelineRow {
        TimelineRow {
            date: self.date_string(),
            event: self.category.to_string(),
            description: self.description.clone(),
            persons: self.persons_field(),
        }
    }
}

/// Event records ordered by date; records sharing a date keep document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    records: Vec<EventRecord>,
}

impl Timeline {
    /// Records must be given in document order; the sort is stable.
    #[must_use]
    pub fn from_records(mut records: Vec<EventRecord>) -> Self {
        records.sort_by_key(EventRecord::date);
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(EventRecord::date)
    }

    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(EventRecord::date)
    }

    #[must_use]
    pub fn rows(&self) -> Vec<TimelineRow> {
        self.records.iter().map(EventRecord::to_row).collect()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a EventRecord;
    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Timeline {
    type Item = EventRecord;
    type IntoIter = std::vec::IntoIter<EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(d: NaiveDate, description: &str) -> EventRecord {
        EventRecord::new(d, EventCategory::Other, description.into(), Vec::new())
    }

    #[test]
    fn category_label_roundtrip() {
        for category in EventCategory::ALL {
            let parsed: EventCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn category_parses_slug() {
        assert_eq!(
            "interim-order".parse::<EventCategory>().unwrap(),
            EventCategory::InterimOrder
        );
        assert_eq!(
            "JUDGMENT".parse::<EventCategory>().unwrap(),
            EventCategory::Judgment
        );
    }

    #[test]
    fn category_invalid() {
        assert!("verdict".parse::<EventCategory>().is_err());
    }

    #[test]
    fn category_slug() {
        assert_eq!(EventCategory::InterimOrder.slug(), "interim-order");
        assert_eq!(EventCategory::Filing.slug(), "filing");
    }

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_string(&EventCategory::InterimOrder).unwrap();
        assert_eq!(json, "\"Interim Order\"");
    }

    #[test]
    fn persons_field_defaults_to_na() {
        let empty = record(date(2020, 1, 5), "x");
        assert_eq!(empty.persons_field(), "N/A");

        let named = EventRecord::new(
            date(2020, 1, 5),
            EventCategory::Filing,
            "x".into(),
            vec!["Ramesh Kumar".into(), "Suresh Sharma".into()],
        );
        assert_eq!(named.persons_field(), "Ramesh Kumar, Suresh Sharma");
    }

    #[test]
    fn date_string_is_zero_padded() {
        assert_eq!(record(date(2018, 4, 1), "x").date_string(), "2018-04-01");
    }

    #[test]
    fn timeline_sorts_by_date() {
        let timeline = Timeline::from_records(vec![
            record(date(2021, 3, 12), "c"),
            record(date(2019, 3, 10), "a"),
            record(date(2020, 1, 5), "b"),
        ]);

        let order: Vec<&str> = timeline.iter().map(EventRecord::description).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert_eq!(timeline.first_date(), Some(date(2019, 3, 10)));
        assert_eq!(timeline.last_date(), Some(date(2021, 3, 12)));
    }

    #[test]
    fn timeline_sort_is_stable() {
        let same = date(2020, 1, 5);
        let timeline = Timeline::from_records(vec![
            record(same, "first"),
            record(date(2019, 1, 1), "earlier"),
            record(same, "second"),
            record(same, "third"),
        ]);

        let order: Vec<&str> = timeline.iter().map(EventRecord::description).collect();
        assert_eq!(order, vec!["earlier", "first", "second", "third"]);
    }

    #[test]
    fn row_has_four_fields() {
        let row = record(date(2020, 1, 5), "The petition was filed.").to_row();
        assert_eq!(row.date, "2020-01-05");
        assert_eq!(row.event, "Other");
        assert_eq!(row.description, "The petition was filed.");
        assert_eq!(row.persons, "N/A");
    }
}
