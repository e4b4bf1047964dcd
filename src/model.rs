use serde::Serialize;

pub const DEFAULT_FROM_PAGE: usize = 1;
pub const DEFAULT_TO_PAGE: usize = 999;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub enum Relation {
    #[default]
    #[serde(rename = "F")]
    Father,
    #[serde(rename = "H")]
    Husband,
}

impl Relation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Father => "F",
            Self::Husband => "H",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Unknown => "",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterRecord {
    pub serial_no: Option<u32>,
    pub voter_id: String,
    pub section_code: String,
    pub full_name: String,
    pub relative_name: String,
    pub relation: Relation,
    pub house_no: String,
    pub age: String,
    pub gender: Gender,
}

impl VoterRecord {
    pub fn new(serial_no: Option<u32>, voter_id: &str, section_code: &str) -> Self {
        Self {
            serial_no,
            voter_id: voter_id.trim().to_string(),
            section_code: section_code.trim().to_string(),
            ..Self::default()
        }
    }

    pub fn is_retained(&self) -> bool {
        !self.full_name.is_empty() || !self.voter_id.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionCode {
    pub constituency_no: String,
    pub part_no: String,
    pub section_no: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRange {
    pub from_page: usize,
    pub to_page: usize,
}

impl Default for PageRange {
    fn default() -> Self {
        Self {
            from_page: DEFAULT_FROM_PAGE,
            to_page: DEFAULT_TO_PAGE,
        }
    }
}

impl PageRange {
    pub fn lenient(from_page: Option<&str>, to_page: Option<&str>) -> Self {
        let parse = |raw: Option<&str>, fallback: usize| {
            raw.and_then(|value| value.trim().parse::<usize>().ok())
                .filter(|value| *value > 0)
                .unwrap_or(fallback)
        };

        let mut from_page = parse(from_page, DEFAULT_FROM_PAGE);
        let mut to_page = parse(to_page, DEFAULT_TO_PAGE);
        if from_page > to_page {
            std::mem::swap(&mut from_page, &mut to_page);
        }

        Self { from_page, to_page }
    }

    pub fn clamp_to(self, total_pages: usize) -> Self {
        Self {
            from_page: self.from_page.max(1),
            to_page: self.to_page.min(total_pages),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from_page > self.to_page
    }

    pub fn label(&self) -> String {
        format!("{} to {}", self.from_page, self.to_page)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub success: bool,
    pub total_voters: usize,
    pub csv: String,
    pub sample: Vec<VoterRecord>,
    pub generated_at: String,
    pub source_sha256: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_processed: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionFailure {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_sample: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub file_name: String,
    pub file_size: usize,
    pub sha256: String,
    pub total_pages: usize,
    pub page_count_source: String,
    pub pdftotext: Option<String>,
    pub pdfinfo: Option<String>,
}
