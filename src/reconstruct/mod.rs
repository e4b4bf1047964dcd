use regex::bytes::Regex as BytesRegex;

use crate::error::ConversionError;
use crate::model::PageRange;

mod poppler;

pub use poppler::PopplerReconstructor;

pub const LINE_BREAK_THRESHOLD: f64 = 5.0;
pub const PAGE_BREAK: &str = "\n\n--- PAGE BREAK ---\n\n";
pub const ESTIMATED_PAGE_COUNT: usize = 50;

#[derive(Debug, Clone)]
pub struct ReconstructedDocument {
    pub text: String,
    pub total_pages: usize,
    pub range: PageRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedFragment {
    pub text: String,
    pub y: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PageCountSource {
    DocumentInfo,
    BinaryScan,
    Estimate,
}

impl PageCountSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DocumentInfo => "document_info",
            Self::BinaryScan => "binary_scan",
            Self::Estimate => "estimate",
        }
    }
}

pub trait DocumentReconstructor {
    fn page_count(&self, document: &[u8]) -> Result<(usize, PageCountSource), ConversionError>;

    fn reconstruct(
        &self,
        document: &[u8],
        range: PageRange,
    ) -> Result<ReconstructedDocument, ConversionError>;
}

pub fn join_fragments(fragments: &[PositionedFragment]) -> String {
    let mut text = String::new();
    let mut last_y: Option<f64> = None;

    for fragment in fragments.iter().filter(|fragment| !fragment.text.is_empty()) {
        match last_y {
            Some(previous) if (previous - fragment.y).abs() > LINE_BREAK_THRESHOLD => {
                text.push('\n');
            }
            Some(_) => text.push(' '),
            None => {}
        }

        text.push_str(&fragment.text);
        last_y = Some(fragment.y);
    }

    text
}

pub fn join_pages(pages: &[Vec<PositionedFragment>]) -> String {
    pages
        .iter()
        .map(|fragments| format!("{}{PAGE_BREAK}", join_fragments(fragments)))
        .collect()
}

pub fn count_page_objects(document: &[u8]) -> usize {
    let page_regex = BytesRegex::new(r"(?-u)/Type\s*/Page[^s]").expect("valid page object regex");
    page_regex.find_iter(document).count()
}

pub fn estimate_page_count(document: &[u8]) -> (usize, PageCountSource) {
    match count_page_objects(document) {
        0 => (ESTIMATED_PAGE_COUNT, PageCountSource::Estimate),
        count => (count, PageCountSource::BinaryScan),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(text: &str, y: f64) -> PositionedFragment {
        PositionedFragment {
            text: text.to_string(),
            y,
        }
    }

    #[test]
    fn join_fragments_breaks_lines_on_vertical_jumps() {
        let fragments = vec![
            fragment("TQT6279368", 700.0),
            fragment("228/340/1", 702.5),
            fragment("पम", 690.0),
            fragment("", 600.0),
            fragment("NA", 689.0),
        ];

        assert_eq!(join_fragments(&fragments), "TQT6279368 228/340/1\nपम NA");
    }

    #[test]
    fn join_pages_appends_page_break_marker_per_page() {
        let pages = vec![vec![fragment("a", 1.0)], vec![fragment("b", 1.0)]];
        assert_eq!(
            join_pages(&pages),
            "a\n\n--- PAGE BREAK ---\n\nb\n\n--- PAGE BREAK ---\n\n"
        );
    }

    #[test]
    fn count_page_objects_skips_page_tree_nodes() {
        let mut document = b"%PDF-1.4\n1 0 obj << /Type /Pages /Kids [2 0 R 3 0 R] >>\n".to_vec();
        document.extend_from_slice(b"2 0 obj << /Type /Page /Parent 1 0 R >>\n");
        document.extend_from_slice(b"3 0 obj << /Type/Page/Parent 1 0 R >>\n");
        document.extend_from_slice(&[0xff, 0xfe, 0x00]);

        assert_eq!(count_page_objects(&document), 2);
        assert_eq!(estimate_page_count(&document), (2, PageCountSource::BinaryScan));
    }

    #[test]
    fn estimate_page_count_falls_back_when_no_pages_found() {
        assert_eq!(
            estimate_page_count(b"not a pdf"),
            (ESTIMATED_PAGE_COUNT, PageCountSource::Estimate)
        );
    }
}
