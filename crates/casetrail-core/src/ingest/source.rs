use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    PlainText,
    Markdown,
    Pdf,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" => Some(Self::PlainText),
            "md" | "markdown" => Some(Self::Markdown),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::Markdown => "md",
            Self::Pdf => "pdf",
        }
    }
}

/// Full text of one document, as handed to the timeline pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    pub format: DocumentFormat,
    pub text: String,
    pub page_count: Option<u32>,
}

impl SourceDocument {
    #[must_use]
    pub const fn new(format: DocumentFormat, text: String) -> Self {
        Self {
            format,
            text,
            page_count: None,
        }
    }

    #[must_use]
    pub const fn with_page_count(mut self, count: u32) -> Self {
        self.page_count = Some(count);
        self
    }
}

#[async_trait::async_trait]
pub trait DocumentTextSource: Send + Sync {
    fn supported_formats(&self) -> &[DocumentFormat];

    fn can_read(&self, format: DocumentFormat) -> bool {
        self.supported_formats().contains(&format)
    }

    async fn read_bytes(&self, data: &[u8], format: DocumentFormat)
        -> SourceResult<SourceDocument>;

    async fn read_file(&self, path: &Path) -> SourceResult<SourceDocument> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| SourceError::UnsupportedFormat("no extension".into()))?;

        let format = DocumentFormat::from_extension(ext)
            .ok_or_else(|| SourceError::UnsupportedFormat(ext.into()))?;

        if !self.can_read(format) {
            return Err(SourceError::UnsupportedFormat(format!("{format:?}")));
        }

        let data = tokio::fs::read(path).await?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "read document");
        self.read_bytes(&data, format).await
    }
}

pub struct PlainTextSource;

impl PlainTextSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for PlainTextSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DocumentTextSource for PlainTextSource {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::PlainText, DocumentFormat::Markdown]
    }

    async fn read_bytes(
        &self,
        data: &[u8],
        format: DocumentFormat,
    ) -> SourceResult<SourceDocument> {
        let text = String::from_utf8(data.to_vec())
            .map_err(|e| SourceError::Encoding(e.to_string()))?;

        Ok(SourceDocument::new(format, text))
    }
}

/// Text layer extraction for digital PDFs.
pub struct PdfTextSource;

impl PdfTextSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for PdfTextSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends each non-empty page followed by a single space.
fn join_pages(pages: &[String]) -> String {
    let mut text = String::new();
    for (i, page) in pages.iter().enumerate() {
        if page.is_empty() {
            tracing::debug!(page = i + 1, "skipping page without text layer");
            continue;
        }
        text.push_str(page);
        text.push(' ');
    }
    text
}

#[async_trait::async_trait]
impl DocumentTextSource for PdfTextSource {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Pdf]
    }

    async fn read_bytes(
        &self,
        data: &[u8],
        format: DocumentFormat,
    ) -> SourceResult<SourceDocument> {
        let bytes = data.to_vec();
        let pages = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
                .map_err(|e| SourceError::Pdf(e.to_string()))
        })
        .await
        .map_err(|e| SourceError::Pdf(format!("extraction task failed: {e}")))??;

        let page_count = u32::try_from(pages.len()).unwrap_or(u32::MAX);
        if pages.iter().all(String::is_empty) {
            tracing::warn!(pages = page_count, "PDF has no extractable text");
        }

        Ok(SourceDocument::new(format, join_pages(&pages)).with_page_count(page_count))
    }
}

pub struct CompositeSource {
    sources: Vec<Box<dyn DocumentTextSource>>,
}

impl CompositeSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: Box<dyn DocumentTextSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn add_source(&mut self, source: Box<dyn DocumentTextSource>) {
        self.sources.push(source);
    }

    fn find_source(&self, format: DocumentFormat) -> Option<&dyn DocumentTextSource> {
        self.sources
            .iter()
            .find(|s| s.can_read(format))
            .map(AsRef::as_ref)
    }
}

impl Default for CompositeSource {
    fn default() -> Self {
        Self::new()
            .with_source(Box::new(PlainTextSource::new()))
            .with_source(Box::new(PdfTextSource::new()))
    }
}

#[async_trait::async_trait]
impl DocumentTextSource for CompositeSource {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[
            DocumentFormat::PlainText,
            DocumentFormat::Markdown,
            DocumentFormat::Pdf,
        ]
    }

    fn can_read(&self, format: DocumentFormat) -> bool {
        self.find_source(format).is_some()
    }

    async fn read_bytes(
        &self,
        data: &[u8],
        format: DocumentFormat,
    ) -> SourceResult<SourceDocument> {
        let source = self
            .find_source(format)
            .ok_or_else(|| SourceError::UnsupportedFormat(format!("{format:?}")))?;

        source.read_bytes(data, format).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plain_text_source() {
        let source = PlainTextSource::new();
        let doc = source
            .read_bytes(b"The petition was filed.", DocumentFormat::PlainText)
            .await
            .unwrap();

        assert_eq!(doc.text, "The petition was filed.");
        assert_eq!(doc.page_count, None);
    }

    #[tokio::test]
    async fn test_invalid_utf8() {
        let source = PlainTextSource::new();
        let result = source
            .read_bytes(&[0xff, 0xfe, 0xfd], DocumentFormat::PlainText)
            .await;

        assert!(matches!(result, Err(SourceError::Encoding(_))));
    }

    #[tokio::test]
    async fn test_invalid_pdf() {
        let source = PdfTextSource::new();
        let result = source.read_bytes(b"not a pdf", DocumentFormat::Pdf).await;

        assert!(matches!(result, Err(SourceError::Pdf(_))));
    }

    #[tokio::test]
    async fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("case.txt");
        std::fs::write(&path, "Arguments were heard on 12 Mar 2021.").unwrap();

        let doc = CompositeSource::default().read_file(&path).await.unwrap();

        assert_eq!(doc.format, DocumentFormat::PlainText);
        assert_eq!(doc.text, "Arguments were heard on 12 Mar 2021.");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CompositeSource::default()
            .read_file(&dir.path().join("absent.txt"))
            .await;

        assert!(matches!(result, Err(SourceError::Io(_))));
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let result = CompositeSource::default()
            .read_file(Path::new("judgment.docx"))
            .await;
        assert!(matches!(result, Err(SourceError::UnsupportedFormat(_))));

        let result = CompositeSource::default()
            .read_file(Path::new("judgment"))
            .await;
        assert!(matches!(result, Err(SourceError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_plain_source_refuses_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("case.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let result = PlainTextSource::new().read_file(&path).await;

        assert!(matches!(result, Err(SourceError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_join_pages_skips_empty() {
        let pages = vec!["Page one.".to_string(), String::new(), "Page three.".to_string()];
        assert_eq!(join_pages(&pages), "Page one. Page three. ");
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_extension("PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("md"), Some(DocumentFormat::Markdown));
        assert_eq!(DocumentFormat::from_extension("docx"), None);
        assert_eq!(
            DocumentFormat::from_path(Path::new("cases/a.txt")),
            Some(DocumentFormat::PlainText)
        );
    }
}
