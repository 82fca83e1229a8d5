//! Timeline extraction for legal case documents.
//!
//! Text is split into sentences; each sentence carrying a recognizable date
//! becomes an [`EventRecord`] with an [`EventCategory`] and the capitalized
//! names it mentions. The records form a date-ordered [`Timeline`].
//!
//! ```
//! use casetrail_core::{EventCategory, TimelineBuilder};
//!
//! let timeline = TimelineBuilder::new()
//!     .build("The petition was filed on 5 Jan 2020 by the applicant.");
//!
//! let record = &timeline.records()[0];
//! assert_eq!(record.date_string(), "2020-01-05");
//! assert_eq!(record.category(), EventCategory::Filing);
//! ```

pub mod error;
pub mod event;
pub mod export;
pub mod ingest;
pub mod stats;

pub use error::{Error, Result};
pub use event::{EventCategory, EventRecord, Timeline, DATE_FORMAT, NO_PERSONS};
pub use export::{ExportError, ExportFormat, TimelineRow};
pub use ingest::{
    CompositeSource, DateExtractor, DateNormalizer, DocumentFormat, DocumentTextSource,
    EnglishDateNormalizer, EventClassifier, KeywordTable, PersonNameExtractor, SentenceSegmenter,
    SourceDocument, SourceError, TimelineBuilder, TimelineOutput, TimelinePipeline,
};
pub use stats::TimelineStats;
