use crate::model::SectionCode;

pub fn parse_section_code(code: &str) -> SectionCode {
    let mut segments = code.split('/').map(str::trim);
    let mut next_segment = || segments.next().unwrap_or_default().to_string();

    SectionCode {
        constituency_no: next_segment(),
        part_no: next_segment(),
        section_no: next_segment(),
    }
}
