use super::*;
use crate::model::{Gender, Relation, VoterRecord};

const PASTED_SAMPLE: &str = "\
मतदार यादी भाग क्र. ८
२९,०९४       MZB1824747    230/8/378
मतदाराचे पूर्ण नाव : बांगर शिवाजी जनार्धन
वडिलांचे नाव : जनार्धन बांगर
घर क्रमांक : NA
वय : ४२ लिंग : पु
Photo Available
29,095 MZB1824748 230/8/378
मतदाराचे पूर्ण : बांगर सुनीता शिवाजी
पतीचे नाव : शिवाजी बांगर
घर क्रमांक : 12
वय : 38 लिंग : स्त्री
";

const POSITIONAL_BLOCK: &str = "\
वय
42
मतदाराचे पपणर
:बांगर शिवाजी जनार्धन
वनडलभदरच नभव
जनार्धन बांगर
7
TQT6279368   228/340/1
ललग
पम
घर कमभदक
NA
";

#[test]
fn pasted_parser_emits_one_record_per_header_line() {
    let records = parse_pasted_text(PASTED_SAMPLE);
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].serial_no, Some(29094));
    assert_eq!(records[0].voter_id, "MZB1824747");
    assert_eq!(records[0].section_code, "230/8/378");
    assert_eq!(records[1].serial_no, Some(29095));
    assert_eq!(records[1].voter_id, "MZB1824748");
}

#[test]
fn pasted_parser_populates_labeled_fields() {
    let records = parse_pasted_text(PASTED_SAMPLE);

    let first = &records[0];
    assert_eq!(first.full_name, "बांगर शिवाजी जनार्धन");
    assert_eq!(first.relative_name, "जनार्धन बांगर");
    assert_eq!(first.relation, Relation::Father);
    assert_eq!(first.house_no, "");
    assert_eq!(first.age, "42");
    assert_eq!(first.gender, Gender::Male);

    let second = &records[1];
    assert_eq!(second.full_name, "बांगर सुनीता शिवाजी");
    assert_eq!(second.relative_name, "शिवाजी बांगर");
    assert_eq!(second.relation, Relation::Husband);
    assert_eq!(second.house_no, "12");
    assert_eq!(second.age, "38");
    assert_eq!(second.gender, Gender::Female);
}

#[test]
fn pasted_parser_reads_age_and_gender_from_separate_lines() {
    let text = "12 ABC1234567 1/2/3\nवय : 55\nलिंग : M\nघर क्रमांक : -";
    let records = parse_pasted_text(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].age, "55");
    assert_eq!(records[0].gender, Gender::Male);
    assert_eq!(records[0].house_no, "");
    assert_eq!(records[0].relation, Relation::Father);
}

#[test]
fn pasted_parser_keeps_name_empty_for_label_only_line() {
    let text = "12 ABC1234567 1/2/3\nमतदाराचे पूर्ण नाव :\nनाव";
    let records = parse_pasted_text(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].full_name, "");
    assert_eq!(records[0].voter_id, "ABC1234567");
}

#[test]
fn pasted_parser_ignores_field_lines_before_first_header() {
    let text = "मतदाराचे पूर्ण नाव : कोणी तरी\nवय : 30 लिंग : पु\n5 XYZ7654321 9/8/7";
    let records = parse_pasted_text(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].full_name, "");
    assert_eq!(records[0].age, "");
    assert_eq!(records[0].serial_no, Some(5));
}

#[test]
fn pasted_parser_accepts_lowercase_voter_ids() {
    let records = parse_pasted_text("29094 mzb1824747 230/8/378");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].voter_id, "mzb1824747");
}

#[test]
fn pasted_parser_returns_nothing_for_prose() {
    let text = "This is a plain paragraph.\nIt mentions 2024 and nothing else.";
    assert!(parse_pasted_text(text).is_empty());
}

#[test]
fn positional_parser_recovers_fields_around_anchor() {
    let records = parse_positional_text(POSITIONAL_BLOCK);
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.voter_id, "TQT6279368");
    assert_eq!(record.section_code, "228/340/1");
    assert_eq!(record.full_name, "बांगर शिवाजी जनार्धन");
    assert_eq!(record.relative_name, "जनार्धन बांगर");
    assert_eq!(record.relation, Relation::Father);
    assert_eq!(record.serial_no, Some(7));
    assert_eq!(record.age, "42");
    assert_eq!(record.gender, Gender::Male);
    assert_eq!(record.house_no, "");
}

#[test]
fn positional_parser_converts_marathi_numerals_before_matching() {
    let text = POSITIONAL_BLOCK
        .replace("42", "४२")
        .replace("TQT6279368", "TQT६२७९३६८");
    let records = parse_positional_text(&text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].voter_id, "TQT6279368");
    assert_eq!(records[0].age, "42");
}

#[test]
fn positional_parser_drops_repeated_anchor_from_second_column() {
    let text = format!("{POSITIONAL_BLOCK}{POSITIONAL_BLOCK}");
    let records = parse_positional_text(&text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].voter_id, "TQT6279368");
}

#[test]
fn positional_parser_detects_husband_and_female_tokens() {
    let text = "\
वय
35
मतदाराचे पपणर
:पाटील सुनीता
पतदरच नभव
रमेश पाटील
8
ABC1234567 228/340/1
ललग
सद
";
    let records = parse_positional_text(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].relation, Relation::Husband);
    assert_eq!(records[0].gender, Gender::Female);
    assert_eq!(records[0].relative_name, "रमेश पाटील");
    assert_eq!(records[0].age, "35");
}

#[test]
fn positional_forward_scan_stops_at_next_anchor() {
    let text = ":पहिला मतदार\nAAA1234567 1/2/3\nBBB1234567 1/2/3\nपम";
    let records = parse_positional_text(text);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].gender, Gender::Unknown);
    assert_eq!(records[1].gender, Gender::Male);
    assert_eq!(records[1].full_name, "पहिला मतदार");
}

#[test]
fn positional_parser_accepts_slash_and_composite_identifiers() {
    let text = "MT/12/345 228/340/1\nAB12CD34EF56 228/340/2";
    let records = parse_positional_text(text);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].voter_id, "MT/12/345");
    assert_eq!(records[1].voter_id, "AB12CD34EF56");
    assert_eq!(records[1].section_code, "228/340/2");
}

#[test]
fn positional_parser_ignores_anchor_with_trailing_text() {
    let records = parse_positional_text("TQT6279368 228/340/1 extra");
    assert!(records.is_empty());
}

#[test]
fn positional_age_filter_rejects_out_of_range_numbers() {
    let text = "150\n12\n:नाव\nTQT6279368 228/340/1";
    let records = parse_positional_text(text);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].age, "");
    assert_eq!(records[0].serial_no, Some(12));
}

#[test]
fn positional_serial_skips_values_over_limit() {
    let text = "99999\n:नाव असलेला\nTQT6279368 228/340/1";
    let records = parse_positional_text(text);

    assert_eq!(records[0].serial_no, None);
}

const ANCHOR: &str = "TQT6279368 228/340/1";
const FILLER: &str = "मजकूर ओळ";

fn with_line_before_anchor(line: &str, distance: usize) -> String {
    let mut lines = vec![line];
    lines.extend(std::iter::repeat(FILLER).take(distance - 1));
    lines.push(ANCHOR);
    lines.join("\n")
}

fn with_line_after_anchor(line: &str, offset: usize) -> String {
    let mut lines: Vec<&str> = vec![ANCHOR];
    lines.extend(std::iter::repeat(FILLER).take(offset - 1));
    lines.push(line);
    lines.join("\n")
}

fn only_record(text: &str) -> VoterRecord {
    let mut records = parse_positional_text(text);
    assert_eq!(records.len(), 1);
    records.remove(0)
}

#[test]
fn positional_name_is_found_up_to_twenty_lines_back() {
    let inside = only_record(&with_line_before_anchor(":नाव आत", 20));
    assert_eq!(inside.full_name, "नाव आत");

    let outside = only_record(&with_line_before_anchor(":नाव आत", 21));
    assert_eq!(outside.full_name, "");
}

#[test]
fn positional_relation_label_is_read_up_to_twenty_lines_back() {
    let inside = only_record(&with_line_before_anchor("पतदरच नभव", 20));
    assert_eq!(inside.relation, Relation::Husband);

    let outside = only_record(&with_line_before_anchor("पतदरच नभव", 21));
    assert_eq!(outside.relation, Relation::Father);
}

#[test]
fn positional_serial_is_found_up_to_twenty_five_lines_back() {
    let inside = only_record(&with_line_before_anchor("77", 25));
    assert_eq!(inside.serial_no, Some(77));

    let outside = only_record(&with_line_before_anchor("77", 26));
    assert_eq!(outside.serial_no, None);
}

#[test]
fn positional_age_is_found_up_to_fifteen_lines_back() {
    let inside = only_record(&with_line_before_anchor("44", 15));
    assert_eq!(inside.age, "44");

    let outside = only_record(&with_line_before_anchor("44", 16));
    assert_eq!(outside.age, "");
}

#[test]
fn positional_gender_is_read_up_to_nine_lines_ahead() {
    let inside = only_record(&with_line_after_anchor("पम", 9));
    assert_eq!(inside.gender, Gender::Male);

    let outside = only_record(&with_line_after_anchor("पम", 10));
    assert_eq!(outside.gender, Gender::Unknown);
}

#[test]
fn dialect_dispatches_to_matching_parser() {
    assert_eq!(Dialect::Pasted.parse(PASTED_SAMPLE).len(), 2);
    assert_eq!(Dialect::Positional.parse(POSITIONAL_BLOCK).len(), 1);
    assert_eq!(Dialect::Positional.as_str(), "positional");
}
