use regex::Regex;

use crate::model::Gender;

const MARATHI_DIGITS: [(char, char); 10] = [
    ('०', '0'),
    ('१', '1'),
    ('२', '2'),
    ('३', '3'),
    ('४', '4'),
    ('५', '5'),
    ('६', '6'),
    ('७', '7'),
    ('८', '8'),
    ('९', '9'),
];

const MALE_SUBSTRINGS: &[&str] = &["पु", "पुरुष"];
const MALE_WORDS: &[&str] = &["m", "male"];
const FEMALE_SUBSTRINGS: &[&str] = &["स्त्री", "महिला"];
const FEMALE_WORDS: &[&str] = &["f", "female", "स्री", "स्रो"];

const HOUSE_NUMBER_SENTINELS: &[&str] = &["NA", "-"];

pub fn convert_numerals(text: &str) -> String {
    text.chars()
        .map(|character| {
            MARATHI_DIGITS
                .iter()
                .find(|(marathi, _)| *marathi == character)
                .map(|(_, ascii)| *ascii)
                .unwrap_or(character)
        })
        .collect()
}

pub fn remove_photo_markers(text: &str) -> String {
    let marker_regex = Regex::new(r"(?i)Photo\s*Available|फोटो\s*उपलब्ध")
        .expect("valid photo marker regex");
    marker_regex.replace_all(text, "").into_owned()
}

pub fn strip_noise(text: &str) -> String {
    let without_markers = remove_photo_markers(text);
    let collapsed = without_markers.split_whitespace().collect::<Vec<&str>>().join(" ");
    collapsed
        .trim_matches(|character: char| character == ':' || character.is_whitespace())
        .to_string()
}

pub fn classify_gender(token: &str) -> Gender {
    let cleaned = token.trim().to_lowercase();
    if cleaned.is_empty() {
        return Gender::Unknown;
    }

    if MALE_WORDS.contains(&cleaned.as_str()) {
        return Gender::Male;
    }
    if FEMALE_WORDS.contains(&cleaned.as_str()) {
        return Gender::Female;
    }
    if MALE_SUBSTRINGS
        .iter()
        .any(|fragment| cleaned.contains(fragment))
    {
        return Gender::Male;
    }
    if FEMALE_SUBSTRINGS
        .iter()
        .any(|fragment| cleaned.contains(fragment))
    {
        return Gender::Female;
    }

    Gender::Unknown
}

pub fn normalize_house_number(raw: &str) -> String {
    let cleaned = strip_noise(raw);
    if HOUSE_NUMBER_SENTINELS
        .iter()
        .any(|sentinel| cleaned.eq_ignore_ascii_case(sentinel))
    {
        return String::new();
    }
    cleaned
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
