use crate::event::EventCategory;

/// Ordered category → trigger mapping. Earlier entries take precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    entries: Vec<(EventCategory, Vec<String>)>,
}

impl KeywordTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Triggers are stored lowercase and matched as substrings.
    #[must_use]
    pub fn with_entry(mut self, category: EventCategory, triggers: &[&str]) -> Self {
        let triggers = triggers.iter().map(|t| t.to_lowercase()).collect();
        self.entries.push((category, triggers));
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (EventCategory, &[String])> {
        self.entries
            .iter()
            .map(|(category, triggers)| (*category, triggers.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
            .with_entry(EventCategory::Filing, &["filed", "instituted"])
            .with_entry(EventCategory::Hearing, &["heard", "arguments"])
            .with_entry(EventCategory::InterimOrder, &["interim", "ex-parte", "stay"])
            .with_entry(EventCategory::Transfer, &["transferred"])
            .with_entry(EventCategory::Judgment, &["judgment", "decision", "held"])
            .with_entry(EventCategory::Appeal, &["appeal"])
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventClassifier {
    table: KeywordTable,
}

impl EventClassifier {
    #[must_use]
    pub const fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub const fn table(&self) -> &KeywordTable {
        &self.table
    }

    #[must_use]
    pub fn classify(&self, sentence: &str) -> EventCategory {
        let lowered = sentence.to_lowercase();
        self.table
            .entries()
            .find(|(_, triggers)| triggers.iter().any(|t| lowered.contains(t.as_str())))
            .map_or(EventCategory::Other, |(category, _)| category)
    }
}
