//! `@mention` extraction from notification text

use once_cell::sync::Lazy;
use regex::Regex;

/// `@` immediately followed by an email address; group 1 is the address.
static MENTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})")
        .expect("mention pattern is a valid regex")
});

/// Every mentioned email, left to right, duplicates included.
pub fn extract_mentions(text: &str) -> Vec<String> {
    MENTION_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_mentions_in_order() {
        assert_eq!(
            extract_mentions("Hi @a@b.com and @c@d.org"),
            vec!["a@b.com", "c@d.org"]
        );
    }

    #[test]
    fn text_without_mentions_yields_nothing() {
        assert!(extract_mentions("no mentions here").is_empty());
    }

    #[test]
    fn bare_email_is_not_a_mention() {
        assert!(extract_mentions("contact studentjon@gmail.com").is_empty());
    }

    #[test]
    fn trailing_punctuation_is_not_part_of_the_address() {
        assert_eq!(
            extract_mentions("Hello students! @studentagnes@gmail.com, @studentmiche@gmail.com."),
            vec!["studentagnes@gmail.com", "studentmiche@gmail.com"]
        );
    }

    #[test]
    fn tld_needs_two_letters() {
        assert!(extract_mentions("@a@b.c").is_empty());
        assert_eq!(extract_mentions("@first.last+tag@sub.example.io"), vec!["first.last+tag@sub.example.io"]);
    }

    #[test]
    fn repeated_mentions_are_kept() {
        assert_eq!(
            extract_mentions("@x@y.com @x@y.com"),
            vec!["x@y.com", "x@y.com"]
        );
    }
}
