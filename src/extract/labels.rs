pub const LABEL_TABLE_VERSION: u32 = 1;

pub struct GlyphVariants {
    pub variants: &'static [&'static str],
}

impl GlyphVariants {
    pub fn found_in(&self, line: &str) -> bool {
        self.variants.iter().any(|variant| line.contains(variant))
    }

    pub fn equals(&self, line: &str) -> bool {
        self.variants.iter().any(|variant| line == *variant)
    }
}

pub const FATHER_LABEL: GlyphVariants = GlyphVariants {
    variants: &["वडिलांचे", "वनडलभदरच"],
};

pub const HUSBAND_LABEL: GlyphVariants = GlyphVariants {
    variants: &["पतीचे", "पतदरच"],
};

pub const MALE_TOKEN: GlyphVariants = GlyphVariants {
    variants: &["पु", "पम"],
};

pub const FEMALE_TOKEN: GlyphVariants = GlyphVariants {
    variants: &["स्त्री", "स्री", "सद"],
};

// Lines containing these never carry a relative's name.
pub const NON_NAME_MARKERS: GlyphVariants = GlyphVariants {
    variants: &["नभव", "कमभदक", "पपणर", "वय", "Photo"],
};

pub const HOUSE_ABSENT_TOKEN: &str = "NA";

pub const STANDALONE_NAME_LABELS: &[&str] = &["नांव", "नाव"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_labels_match_standard_and_corrupted_spellings() {
        assert!(FATHER_LABEL.found_in("वडिलांचे नाव"));
        assert!(FATHER_LABEL.found_in("वनडलभदरच नभव"));
        assert!(HUSBAND_LABEL.found_in("पतदरच नभव"));
        assert!(!HUSBAND_LABEL.found_in("वडिलांचे नाव"));
    }

    #[test]
    fn gender_tokens_require_whole_line_equality() {
        assert!(MALE_TOKEN.equals("पम"));
        assert!(!MALE_TOKEN.equals("पमर"));
        assert!(FEMALE_TOKEN.equals("सद"));
        assert!(!FEMALE_TOKEN.equals("सदर"));
    }
}
