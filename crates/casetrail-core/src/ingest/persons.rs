use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// A run of one to five capitalized words.
pub const NAME_RUN: &str = r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+){0,4})\b";

const PHRASE: &str = r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)";

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_RUN).expect("name run pattern is valid"));

static PARTY_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(&format!(r"{PHRASE}\s+(?i:vs|v\.|versus)\s+{PHRASE}"))
            .expect("versus pattern is valid"),
        Regex::new(&format!(r"{PHRASE}\s+and\s+{PHRASE}")).expect("and pattern is valid"),
    ]
});

fn is_name(candidate: &str) -> bool {
    candidate.chars().count() > 2
}

/// Surface-level capitalization heuristics for party and person names.
///
/// Any capitalized phrase qualifies ("High Court", "April"), so results are
/// candidates, not resolved entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonNameExtractor;

impl PersonNameExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Exploratory discovery over a whole document: party pairs around
    /// `vs`/`v.`/`versus`/`and`, plus every capitalized run. Sorted.
    #[must_use]
    pub fn extract_document(&self, text: &str) -> Vec<String> {
        let mut names = HashSet::new();

        for pattern in PARTY_PATTERNS.iter() {
            for captures in pattern.captures_iter(text) {
                for group in captures.iter().skip(1).flatten() {
                    let name = group.as_str().trim();
                    if is_name(name) {
                        names.insert(name.to_string());
                    }
                }
            }
        }

        names.extend(Self::name_runs(text));

        let mut names: Vec<String> = names.into_iter().collect();
        names.sort();
        names
    }

    /// Capitalized runs of a single sentence, deduplicated, in order of
    /// first appearance. Party patterns are not applied here.
    #[must_use]
    pub fn extract_sentence(&self, sentence: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        Self::name_runs(sentence)
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }

    fn name_runs(text: &str) -> impl Iterator<Item = String> + '_ {
        NAME_PATTERN
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().trim())
            .filter(|name| is_name(name))
            .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_names() {
        let names = PersonNameExtractor::new()
            .extract_sentence("Ramesh Kumar vs Suresh Sharma was transferred on 1 April 2018.");

        assert!(names.contains(&"Ramesh Kumar".to_string()));
        assert!(names.contains(&"Suresh Sharma".to_string()));
        assert_eq!(names, vec!["Ramesh Kumar", "Suresh Sharma", "April"]);
    }

    #[test]
    fn test_sentence_dedup_keeps_first_appearance() {
        let names = PersonNameExtractor::new()
            .extract_sentence("Suresh Sharma argued while Anita Rao listened and Suresh Sharma rested.");
        assert_eq!(names, vec!["Suresh Sharma", "Anita Rao"]);
    }

    #[test]
    fn test_run_capped_at_five_words() {
        let names = PersonNameExtractor::new()
            .extract_sentence("Filed by Alpha Beta Gamma Delta Epsilon Zeta today.");
        assert_eq!(names, vec!["Filed", "Alpha Beta Gamma Delta Epsilon", "Zeta"]);
    }

    #[test]
    fn test_short_and_uppercase_tokens_skipped() {
        let names = PersonNameExtractor::new()
            .extract_sentence("Mr Jo of the CBI met Bo at 10 am.");
        // "Mr Jo" survives as a run; "Bo" is too short; "CBI" is not capitalized-lowercase.
        assert_eq!(names, vec!["Mr Jo"]);
    }

    #[test]
    fn test_sentence_without_names() {
        assert!(PersonNameExtractor::new()
            .extract_sentence("the matter was adjourned on 5 jan 2020.")
            .is_empty());
    }

    #[test]
    fn test_document_party_pairs() {
        let names = PersonNameExtractor::new()
            .extract_document("In the matter of Ramesh Kumar versus State Bank the court ruled.");

        assert!(names.contains(&"Ramesh Kumar".to_string()));
        assert!(names.contains(&"State Bank".to_string()));
    }

    #[test]
    fn test_document_separator_is_case_insensitive() {
        let names = PersonNameExtractor::new().extract_document("Union Of India VS Mehta");
        assert!(names.contains(&"Union Of India".to_string()));
        assert!(names.contains(&"Mehta".to_string()));
    }

    #[test]
    fn test_document_and_separator() {
        let names = PersonNameExtractor::new()
            .extract_document("appeal by Lakshmi Devi and Gopal Rao against the order");
        assert_eq!(names, vec!["Gopal Rao", "Lakshmi Devi"]);
    }

    #[test]
    fn test_document_names_sorted_and_deduplicated() {
        let text = "Ramesh Kumar vs Suresh Sharma. Later Suresh Sharma and Anita Rao appeared. \
                    Ramesh Kumar was absent.";
        let names = PersonNameExtractor::new().extract_document(text);

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        assert!(names.contains(&"Anita Rao".to_string()));
        assert!(names.contains(&"Later Suresh Sharma".to_string()));
    }

    #[test]
    fn test_document_mode_finds_more_than_sentence_mode() {
        // "Vs" is itself capitalized, so the generic run swallows the separator
        // while the party pattern still splits the two sides.
        let text = "Ramesh Kumar Vs Suresh Sharma";
        let extractor = PersonNameExtractor::new();

        assert_eq!(
            extractor.extract_sentence(text),
            vec!["Ramesh Kumar Vs Suresh Sharma"]
        );
        assert_eq!(
            extractor.extract_document(text),
            vec!["Ramesh Kumar", "Ramesh Kumar Vs Suresh Sharma", "Suresh Sharma"]
        );
    }

    #[test]
    fn test_empty_text() {
        let extractor = PersonNameExtractor::new();
        assert!(extractor.extract_document("").is_empty());
        assert!(extractor.extract_sentence("").is_empty());
    }
}
