use regex::Regex;
use std::sync::OnceLock;

const US_DIGITS: usize = 10;
const US_COUNTRY_CODE: char = '1';

/// Reduces a raw phone cell to the bare ten-digit US form.
///
/// Every character outside the Unicode decimal digits (`Nd`) is discarded,
/// so fullwidth or Arabic-Indic digits survive unchanged. An eleven-digit
/// value with a leading ASCII `1` loses the country code. Anything that does
/// not end up at exactly ten digits yields an empty string.
pub fn normalize_phone(raw: &str) -> String {
    us_digits(raw)
        .map(|digits| digits.into_iter().collect::<String>())
        .unwrap_or_default()
}

/// Same digit rule as [`normalize_phone`], rendered as `NNN-NNN-NNNN`.
pub fn format_phone_dashed(raw: &str) -> Option<String> {
    let digits = us_digits(raw)?;
    let group = |range: std::ops::Range<usize>| digits[range].iter().collect::<String>();
    Some(format!("{}-{}-{}", group(0..3), group(3..6), group(6..US_DIGITS)))
}

fn non_digit() -> &'static Regex {
    static NON_DIGIT: OnceLock<Regex> = OnceLock::new();
    NON_DIGIT.get_or_init(|| Regex::new(r"\D").expect("static pattern"))
}

// Counts are in characters; non-ASCII digits are several bytes wide.
fn us_digits(raw: &str) -> Option<Vec<char>> {
    let mut digits: Vec<char> = non_digit().replace_all(raw, "").chars().collect();

    if digits.len() == US_DIGITS + 1 && digits.first() == Some(&US_COUNTRY_CODE) {
        digits.remove(0);
    }

    if digits.len() != US_DIGITS {
        return None;
    }
    Some(digits)
}
