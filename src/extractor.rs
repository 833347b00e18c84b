//! Finds a plate number in OCR output.
//!
//! Plates are four digits followed by three letters, optionally separated by
//! whitespace. The match is not anchored, so `51234 ABC` yields `1234 ABC`.

use crate::types::PlateCandidate;
use once_cell::sync::Lazy;
use regex::Regex;

// Digits and separating whitespace are ASCII only.
static PLATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{4})(?-u:\s)*([A-Za-z]{3})").unwrap());

static FULL_PLATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}(?-u:\s)*[A-Za-z]{3}$").unwrap());

static NON_ALNUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Returns the first plate found, scanning blocks in order.
pub fn extract_plate<I, S>(blocks: I) -> Option<PlateCandidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    blocks.into_iter().find_map(|block| {
        PLATE_RE.captures(block.as_ref()).map(|caps| PlateCandidate {
            digits: caps[1].to_string(),
            letters: caps[2].to_ascii_uppercase(),
        })
    })
}

/// True only if the whole string is a plate.
pub fn is_valid_plate(text: &str) -> bool {
    FULL_PLATE_RE.is_match(text)
}

pub fn clean_plate_text(text: &str) -> String {
    let spaced = NON_ALNUM_RE.replace_all(text, " ");
    WHITESPACE_RE
        .replace_all(spaced.trim(), " ")
        .to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(blocks: &[&str]) -> Option<String> {
        extract_plate(blocks).map(|p| p.to_string())
    }

    #[test]
    fn spaced_plate() {
        assert_eq!(extract(&["1234 ABC"]), Some("1234 ABC".to_string()));
    }

    #[test]
    fn lowercase_without_space() {
        assert_eq!(extract(&["1234abc"]), Some("1234 ABC".to_string()));
    }

    #[test]
    fn no_match_is_none() {
        assert_eq!(extract(&["KINGDOM", "12 AB", "123 ABCD"]), None);
        assert_eq!(extract(&[]), None);
    }

    #[test]
    fn first_matching_block_wins() {
        assert_eq!(
            extract(&["SAUDI ARABIA", "5678 xyz", "1234 ABC"]),
            Some("5678 XYZ".to_string())
        );
    }

    #[test]
    fn first_occurrence_in_block() {
        assert_eq!(
            extract(&["1111 AAA 2222 BBB"]),
            Some("1111 AAA".to_string())
        );
    }

    #[test]
    fn matches_inside_longer_token() {
        assert_eq!(extract(&["51234 ABC"]), Some("1234 ABC".to_string()));
        assert_eq!(extract(&["1234 ABCD"]), Some("1234 ABC".to_string()));
    }

    #[test]
    fn whitespace_may_include_newlines() {
        assert_eq!(extract(&["1234\n  abc"]), Some("1234 ABC".to_string()));
    }

    #[test]
    fn non_ascii_digits_do_not_match() {
        assert_eq!(extract(&["١٢٣٤ ABC"]), None);
    }

    #[test]
    fn unicode_spaces_do_not_separate() {
        assert_eq!(extract(&["1234\u{00A0}ABC"]), None);
        assert_eq!(extract(&["1234\u{3000}abc"]), None);
        assert_eq!(extract(&["1234\t\r\n abc"]), Some("1234 ABC".to_string()));
        assert!(!is_valid_plate("1234\u{00A0}ABC"));
        assert!(is_valid_plate("1234\tABC"));
    }

    #[test]
    fn candidate_fields() {
        let plate = extract_plate(vec![String::from("0042 qrs")]).unwrap();
        assert_eq!(plate.digits, "0042");
        assert_eq!(plate.letters, "QRS");
    }

    #[test]
    fn valid_plate_requires_full_match() {
        assert!(is_valid_plate("1234 ABC"));
        assert!(is_valid_plate("1234abc"));
        assert!(!is_valid_plate("51234 ABC"));
        assert!(!is_valid_plate("1234 ABC!"));
        assert!(!is_valid_plate(""));
    }

    #[test]
    fn cleaning_collapses_punctuation() {
        assert_eq!(clean_plate_text("  12-34 / a.b.c "), "12 34 A B C");
        assert_eq!(clean_plate_text("1234\tabc"), "1234 ABC");
        assert_eq!(clean_plate_text("***"), "");
    }
}
