use std::collections::HashMap;

use serde::Serialize;

use crate::event::{EventCategory, Timeline};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineStats {
    pub total_events: usize,
    pub event_types: usize,
    pub duration_days: i64,
    pub most_common: Option<EventCategory>,
    /// Count per category present, most frequent first; equal counts by label.
    pub distribution: Vec<(EventCategory, usize)>,
}

impl TimelineStats {
    #[must_use]
    pub fn from_timeline(timeline: &Timeline) -> Self {
        let mut counts: HashMap<EventCategory, usize> = HashMap::new();
        for record in timeline {
            *counts.entry(record.category()).or_default() += 1;
        }

        let mut distribution: Vec<(EventCategory, usize)> = counts.into_iter().collect();
        distribution.sort_by(|(a, a_count), (b, b_count)| {
            b_count.cmp(a_count).then_with(|| a.as_str().cmp(b.as_str()))
        });

        let duration_days = match (timeline.first_date(), timeline.last_date()) {
            (Some(first), Some(last)) => (last - first).num_days(),
            _ => 0,
        };

        Self {
            total_events: timeline.len(),
            event_types: distribution.len(),
            duration_days,
            most_common: distribution.first().map(|(category, _)| *category),
            distribution,
        }
    }

    #[must_use]
    pub fn count(&self, category: EventCategory) -> usize {
        self.distribution
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    }
}
