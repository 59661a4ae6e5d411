use std::path::Path;

use text_redact::{
    DocumentPipeline, ExtractionError, PageSource, PageText, PdfTextExtractor, Redactor, Term,
    TermSet, TextExtractor,
};

use crate::fixtures::TestFixtures;

/// In-memory document so the pipeline can be exercised without a PDF backend.
struct MemoryDocument(Vec<String>);

impl PageSource for MemoryDocument {
    fn page_count(&self) -> usize {
        self.0.len()
    }

    fn pages(&self) -> Box<dyn Iterator<Item = Result<PageText, ExtractionError>> + '_> {
        Box::new(
            self.0
                .iter()
                .enumerate()
                .map(|(i, text)| Ok(PageText::new(i as u32 + 1, text.clone()))),
        )
    }
}

struct MemoryExtractor(Vec<String>);

impl TextExtractor for MemoryExtractor {
    type Handle = MemoryDocument;

    fn open(&self, _path: &Path) -> Result<MemoryDocument, ExtractionError> {
        Ok(MemoryDocument(self.0.clone()))
    }

    fn method(&self) -> &'static str {
        "memory"
    }
}

fn redactor(raw: &[&str]) -> Redactor {
    let terms: TermSet = raw.iter().filter_map(|t| Term::new(t)).collect();
    Redactor::new(&terms).unwrap()
}

#[test]
fn test_pipeline_with_substitute_backend() {
    let extractor = MemoryExtractor(vec!["Jane Doe signed".into(), "".into(), "jane doe again".into()]);
    let redactor = redactor(&["Jane Doe"]);
    let pipeline = DocumentPipeline::new(&extractor, &redactor);

    let result = pipeline.process(Path::new("memo.pdf"), "memo.pdf").unwrap();
    assert_eq!(result.extraction_method, "memory");
    assert_eq!(result.page_count(), 3);
    assert_eq!(result.pages[0].text, "[REDACTED] signed");
    assert_eq!(result.pages[1].text, "");
    assert_eq!(result.pages[2].text, "[REDACTED] again");
    assert_eq!(result.total_replacements(), 2);

    let rendered = result.render();
    assert!(rendered.contains("# Extraction Method: memory\n"));
    assert!(!rendered.to_lowercase().contains("jane doe"));
}

#[test]
fn test_three_page_pdf_has_three_ordered_delimiters() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("three.pdf");
    TestFixtures::write_text_pdf(&path, &["alpha secret", "", "gamma SECRET"]);

    let extractor = PdfTextExtractor::new();
    let redactor = redactor(&["secret"]);
    let pipeline = DocumentPipeline::new(&extractor, &redactor);
    let rendered = pipeline.process(&path, "three.pdf").unwrap().render();

    assert_eq!(rendered.matches("--- Page ").count(), 3);
    let p1 = rendered.find("--- Page 1 ---").unwrap();
    let p2 = rendered.find("--- Page 2 ---").unwrap();
    let p3 = rendered.find("--- Page 3 ---").unwrap();
    assert!(p1 < p2 && p2 < p3);

    assert!(rendered[p1..p2].contains("alpha [REDACTED]"));
    assert!(rendered[p2..p3].trim_start_matches("--- Page 2 ---").trim().is_empty());
    assert!(rendered[p3..].contains("gamma [REDACTED]"));
    assert!(!rendered.to_lowercase().contains("secret"));
}

#[test]
fn test_corrupt_pdf_is_extraction_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.pdf");
    TestFixtures::write_corrupt_pdf(&path);

    let extractor = PdfTextExtractor::new();
    let redactor = redactor(&[]);
    let pipeline = DocumentPipeline::new(&extractor, &redactor);
    let err = pipeline.process(&path, "bad.pdf").unwrap_err();
    assert!(!err.is_fatal());
}
