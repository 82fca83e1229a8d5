use std::sync::LazyLock;

use regex::Regex;

/// Spans of this many characters or fewer are headers, page numbers and other noise.
pub const MIN_SENTENCE_CHARS: usize = 20;

static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// A trimmed sentence-like span of the document, tagged with its position
/// among the kept sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub index: usize,
    pub text: &'a str,
}

impl<'a> Sentence<'a> {
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Clone the returned iterator to walk the document again.
    #[must_use]
    pub const fn segment<'a>(&self, text: &'a str) -> Sentences<'a> {
        Sentences {
            text,
            pos: 0,
            index: 0,
            done: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    pos: usize,
    index: usize,
    done: bool,
}

impl<'a> Sentences<'a> {
    fn next_span(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }

        let start = self.pos;
        if let Some(m) = BOUNDARY.find_at(self.text, start) {
            // Boundary punctuation is ASCII, so `m.start() + 1` is a char boundary.
            self.pos = m.end();
            Some(&self.text[start..=m.start()])
        } else {
            self.done = true;
            Some(&self.text[start..])
        }
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(span) = self.next_span() {
            let text = span.trim();
            if text.chars().count() > MIN_SENTENCE_CHARS {
                let sentence = Sentence {
                    index: self.index,
                    text,
                };
                self.index += 1;
                return Some(sentence);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        SentenceSegmenter::new()
            .segment(input)
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn splits_after_terminal_punctuation() {
        let input = "The petition was filed on 5 Jan 2020. Arguments were heard at length! \
                     Was the stay ever vacated by the court?  The matter stands adjourned sine die.";
        assert_eq!(
            texts(input),
            vec![
                "The petition was filed on 5 Jan 2020.",
                "Arguments were heard at length!",
                "Was the stay ever vacated by the court?",
                "The matter stands adjourned sine die.",
            ]
        );
    }

    #[test]
    fn drops_noise_fragments() {
        let input = "Page 3. IN THE HIGH COURT. The appeal was admitted for final hearing.";
        assert_eq!(
            texts(input),
            vec!["The appeal was admitted for final hearing."]
        );
    }

    #[test]
    fn exactly_twenty_chars_is_noise() {
        let twenty = "abcdefghij klmnopqr.";
        assert_eq!(twenty.chars().count(), 20);
        assert!(texts(twenty).is_empty());
        assert_eq!(texts("abcdefghij klmnopqrs."), vec!["abcdefghij klmnopqrs."]);
    }

    #[test]
    fn punctuation_without_whitespace_does_not_split() {
        let input = "The order dated 5.1.2020 was placed on record today";
        assert_eq!(texts(input), vec![input]);
    }

    #[test]
    fn newlines_count_as_whitespace() {
        let input = "The suit was instituted by the plaintiff.\n\nThe defendant entered appearance late.";
        assert_eq!(texts(input).len(), 2);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(texts("").is_empty());
        assert!(texts("   \n\t  ").is_empty());
    }

    #[test]
    fn indices_count_kept_sentences() {
        let input = "Short one. The first long sentence is right here. Tiny. \
                     The second long sentence follows it.";
        let indices: Vec<usize> = SentenceSegmenter::new()
            .segment(input)
            .map(|s| s.index)
            .collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn iterator_is_restartable() {
        let input = "The first long sentence is right here. The second long sentence follows it.";
        let sentences = SentenceSegmenter::new().segment(input);
        let first: Vec<_> = sentences.clone().collect();
        let second: Vec<_> = sentences.collect();
        assert_eq!(first, second);
    }
}
