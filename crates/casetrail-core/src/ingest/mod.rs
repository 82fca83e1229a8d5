mod classifier;
mod date;
mod persons;
mod pipeline;
mod sentence;
mod source;

pub use classifier::{EventClassifier, KeywordTable};
pub use date::{
    DateExtractor, DateNormalizer, DatePattern, EnglishDateNormalizer, DAY_MONTH_YEAR,
    MONTH_DAY_YEAR,
};
pub use persons::{PersonNameExtractor, NAME_RUN};
pub use pipeline::{list_documents, TimelineBuilder, TimelineOutput, TimelinePipeline};
pub use sentence::{Sentence, SentenceSegmenter, Sentences, MIN_SENTENCE_CHARS};
pub use source::{
    CompositeSource, DocumentFormat, DocumentTextSource, PdfTextSource, PlainTextSource,
    SourceDocument, SourceError, SourceResult,
};
