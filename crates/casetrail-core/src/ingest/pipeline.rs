use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinSet;

use super::classifier::{EventClassifier, KeywordTable};
use super::date::{DateExtractor, DateNormalizer};
use super::persons::PersonNameExtractor;
use super::sentence::SentenceSegmenter;
use super::source::{CompositeSource, DocumentFormat, DocumentTextSource, SourceDocument};
use crate::event::{EventRecord, Timeline};
use crate::{Error, Result};

/// Turns document text into a [`Timeline`].
///
/// Each sentence is handled independently: sentences without a date are
/// dropped, the rest become one [`EventRecord`] each, and the records are
/// stably sorted by date.
#[derive(Clone, Default)]
pub struct TimelineBuilder {
    segmenter: SentenceSegmenter,
    dates: DateExtractor,
    classifier: EventClassifier,
    persons: PersonNameExtractor,
}

impl TimelineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_keyword_table(mut self, table: KeywordTable) -> Self {
        self.classifier = EventClassifier::new(table);
        self
    }

    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Arc<dyn DateNormalizer>) -> Self {
        self.dates = DateExtractor::with_default_patterns(normalizer);
        self
    }

    #[must_use]
    pub fn with_date_extractor(mut self, dates: DateExtractor) -> Self {
        self.dates = dates;
        self
    }

    #[must_use]
    pub const fn classifier(&self) -> &EventClassifier {
        &self.classifier
    }

    /// The record for one sentence, or `None` when it carries no usable date.
    #[must_use]
    pub fn record_for(&self, sentence: &str) -> Option<EventRecord> {
        let date = self.dates.extract(sentence)?;
        Some(EventRecord::new(
            date,
            self.classifier.classify(sentence),
            sentence.to_string(),
            self.persons.extract_sentence(sentence),
        ))
    }

    #[must_use]
    pub fn build(&self, text: &str) -> Timeline {
        let mut sentences = 0usize;
        let records: Vec<EventRecord> = self
            .segmenter
            .segment(text)
            .inspect(|_| sentences += 1)
            .filter_map(|s| self.record_for(s.text))
            .collect();

        tracing::debug!(sentences, events = records.len(), "built timeline");
        Timeline::from_records(records)
    }

    /// Same result as [`build`](Self::build), with per-sentence work spread
    /// over `workers` blocking tasks. Records are put back in sentence order
    /// before the date sort, so ties resolve exactly as in the sequential build.
    pub async fn build_concurrent(&self, text: &str, workers: usize) -> Result<Timeline> {
        let sentences: Vec<(usize, String)> = self
            .segmenter
            .segment(text)
            .map(|s| (s.index, s.text.to_string()))
            .collect();

        if sentences.is_empty() {
            return Ok(Timeline::default());
        }

        let chunk_size = sentences.len().div_ceil(workers.max(1));
        let mut tasks = JoinSet::new();

        for chunk in sentences.chunks(chunk_size) {
            let builder = self.clone();
            let chunk = chunk.to_vec();
            tasks.spawn_blocking(move || {
                chunk
                    .into_iter()
                    .filter_map(|(index, text)| builder.record_for(&text).map(|r| (index, r)))
                    .collect::<Vec<_>>()
            });
        }

        let mut indexed = Vec::with_capacity(sentences.len());
        while let Some(joined) = tasks.join_next().await {
            let batch = joined.map_err(|e| Error::Worker(e.to_string()))?;
            indexed.extend(batch);
        }
        indexed.sort_unstable_by_key(|(index, _)| *index);

        tracing::debug!(
            sentences = sentences.len(),
            events = indexed.len(),
            workers,
            "built timeline concurrently"
        );
        Ok(Timeline::from_records(
            indexed.into_iter().map(|(_, record)| record).collect(),
        ))
    }

    /// Document-wide party discovery; not attached to any record.
    #[must_use]
    pub fn discover_parties(&self, text: &str) -> Vec<String> {
        self.persons.extract_document(text)
    }
}

#[derive(Debug, Clone)]
pub struct TimelineOutput {
    pub path: PathBuf,
    pub document: SourceDocument,
    pub timeline: Timeline,
    pub duration_ms: u64,
}

impl TimelineOutput {
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| "document".to_string(), |n| n.to_string_lossy().to_string())
    }
}

/// Reads documents through a [`DocumentTextSource`] and builds their timelines.
pub struct TimelinePipeline {
    source: Box<dyn DocumentTextSource>,
    builder: TimelineBuilder,
    workers: usize,
}

impl TimelinePipeline {
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: Box::new(CompositeSource::default()),
            builder: TimelineBuilder::new(),
            workers: 1,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: Box<dyn DocumentTextSource>) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn with_builder(mut self, builder: TimelineBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// More than one worker switches to [`TimelineBuilder::build_concurrent`].
    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub const fn builder(&self) -> &TimelineBuilder {
        &self.builder
    }

    pub async fn read(&self, path: &Path) -> Result<SourceDocument> {
        Ok(self.source.read_file(path).await?)
    }

    pub async fn process_file(&self, path: &Path) -> Result<TimelineOutput> {
        let start = Instant::now();
        let document = self.read(path).await?;

        let timeline = if self.workers > 1 {
            self.builder
                .build_concurrent(&document.text, self.workers)
                .await?
        } else {
            self.builder.build(&document.text)
        };

        tracing::info!(
            path = %path.display(),
            events = timeline.len(),
            "processed document"
        );

        Ok(TimelineOutput {
            path: path.to_path_buf(),
            document,
            timeline,
            duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        })
    }

    pub async fn discover_parties(&self, path: &Path) -> Result<Vec<String>> {
        let document = self.read(path).await?;
        Ok(self.builder.discover_parties(&document.text))
    }
}

impl Default for TimelinePipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Files in `dir` with the given format, sorted by name. Subdirectories are not searched.
pub async fn list_documents(dir: &Path, format: DocumentFormat) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(super::SourceError::from)?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(super::SourceError::from)?
    {
        let path = entry.path();
        if path.is_file() && DocumentFormat::from_path(&path) == Some(format) {
            found.push(path);
        }
    }

    found.sort();
    Ok(found)
}
