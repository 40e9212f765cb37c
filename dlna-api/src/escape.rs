//! XML escaping and whitespace normalization for SOAP argument values
//!
//! Values substituted into an envelope are element content, so only `&`,
//! `<` and `>` strictly need escaping. Some renderers are happier when
//! quotes are escaped too; that is exposed as [`EscapePolicy`] rather than
//! decided silently.
//!
//! Metadata is always normalized before it is escaped. Escaping is not
//! idempotent: running it twice turns `&amp;` into `&amp;amp;`.

use std::borrow::Cow;

use crate::{ApiError, Result};

/// Which characters [`escape`] replaces with entity references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapePolicy {
    /// `&`, `<` and `>` only. Values are element text, never attribute values.
    ElementText,
    /// Element text escaping plus `"` → `&quot;`
    ElementTextAndQuotes,
}

impl Default for EscapePolicy {
    fn default() -> Self {
        Self::ElementText
    }
}

/// Escape `raw` for embedding as XML element content.
///
/// `&` is replaced first so that entities introduced for `<` and `>` are
/// not escaped a second time.
pub fn escape(raw: &str, policy: EscapePolicy) -> String {
    let escaped = quick_xml::escape::partial_escape(raw);
    match policy {
        EscapePolicy::ElementText => escaped.into_owned(),
        EscapePolicy::ElementTextAndQuotes => escaped.replace('"', "&quot;"),
    }
}

/// Escape with the default [`EscapePolicy::ElementText`] policy
pub fn escape_xml(raw: &str) -> String {
    escape(raw, EscapePolicy::ElementText)
}

/// Trim `raw` and collapse every interior whitespace run to a single space.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize then escape. The order is fixed.
pub fn normalize_and_escape(raw: &str, policy: EscapePolicy) -> String {
    escape(&normalize(raw), policy)
}

/// Check that a caller-supplied, already escaped metadata blob can be
/// embedded verbatim inside an envelope.
///
/// A literal `<` means the blob was never escaped, and every `&` must start
/// a predefined entity or a character reference.
pub fn validate_raw_metadata(raw: &str) -> Result<&str> {
    if let Some(pos) = raw.find('<') {
        return Err(ApiError::InvalidInput(format!(
            "raw metadata contains unescaped '<' at byte {}",
            pos
        )));
    }

    if let Some((pos, _)) = raw
        .match_indices('&')
        .find(|(pos, _)| !starts_with_reference(&raw[pos + 1..]))
    {
        return Err(ApiError::InvalidInput(format!(
            "raw metadata contains bare '&' at byte {}",
            pos
        )));
    }

    check_xml_chars("raw metadata", raw)?;
    Ok(raw)
}

/// Reject characters XML 1.0 cannot carry at all, escaped or not.
///
/// That is every C0 control character except tab, line feed and carriage
/// return. `what` names the value in the error message.
pub fn check_xml_chars(what: &str, value: &str) -> Result<()> {
    match value
        .char_indices()
        .find(|(_, c)| (*c as u32) < 0x20 && !matches!(c, '\t' | '\n' | '\r'))
    {
        Some((pos, ch)) => Err(ApiError::InvalidInput(format!(
            "{} contains control character U+{:04X} at byte {}",
            what, ch as u32, pos
        ))),
        None => Ok(()),
    }
}

/// Whether `rest` (the text after an `&`) opens a well-formed reference
fn starts_with_reference(rest: &str) -> bool {
    let Some(end) = rest.find(';') else {
        return false;
    };
    let name = &rest[..end];

    if let Some(hex) = name.strip_prefix("#x") {
        !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit())
    } else if let Some(dec) = name.strip_prefix('#') {
        !dec.is_empty() && dec.chars().all(|c| c.is_ascii_digit())
    } else {
        matches!(name, "amp" | "lt" | "gt" | "quot" | "apos")
    }
}

/// Borrowing variant of [`escape`] for values that usually need no escaping.
pub(crate) fn escape_cow(raw: &str, policy: EscapePolicy) -> Cow<'_, str> {
    if raw.contains(['&', '<', '>', '"']) {
        Cow::Owned(escape(raw, policy))
    } else {
        Cow::Borrowed(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_escape_reserved_characters_once() {
        assert_eq!(escape_xml("A & B < C > D"), "A &amp; B &lt; C &gt; D");
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        let once = escape_xml("A & B");
        let twice = escape_xml(&once);
        assert_ne!(once, twice);
        assert_eq!(twice, "A &amp;amp; B");
    }

    #[rstest]
    #[case(EscapePolicy::ElementText, r#"say "hi""#, r#"say "hi""#)]
    #[case(EscapePolicy::ElementTextAndQuotes, r#"say "hi""#, "say &quot;hi&quot;")]
    #[case(EscapePolicy::ElementTextAndQuotes, "it's <fine>", "it's &lt;fine&gt;")]
    fn test_escape_policies(
        #[case] policy: EscapePolicy,
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(escape(input, policy), expected);
    }

    #[test]
    fn test_escape_leaves_apostrophes_alone() {
        assert_eq!(escape_xml("Don't Stop"), "Don't Stop");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  foo\n  bar   baz \n"), "foo bar baz");
        assert_eq!(normalize("\t\n  "), "");
    }

    #[test]
    fn test_normalize_then_escape() {
        let input = "\n    <item>\n        <dc:title>Rock &\tRoll</dc:title>\n    </item>\n";
        assert_eq!(
            normalize_and_escape(input, EscapePolicy::ElementText),
            "&lt;item&gt; &lt;dc:title&gt;Rock &amp; Roll&lt;/dc:title&gt; &lt;/item&gt;"
        );
    }

    #[test]
    fn test_validate_raw_metadata_accepts_escaped_blob() {
        let blob = "&lt;DIDL-Lite&gt;&lt;item id=&quot;1&quot;&gt;&lt;/item&gt;&lt;/DIDL-Lite&gt;\n";
        assert_eq!(validate_raw_metadata(blob).unwrap(), blob);
    }

    #[rstest]
    #[case("<DIDL-Lite/>")]
    #[case("&lt;item&gt;\u{0}")]
    #[case("title\u{1b}[0m")]
    #[case("&lt;DIDL-Lite&gt;Rock & Roll&lt;/DIDL-Lite&gt;")]
    #[case("AC&DC")]
    #[case("trailing &")]
    #[case("&nbsp;")]
    #[case("&#;")]
    #[case("&#x;")]
    #[case("&#12a;")]
    fn test_validate_raw_metadata_rejects_unsafe_blob(#[case] blob: &str) {
        let result = validate_raw_metadata(blob);
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[rstest]
    #[case("Rock &amp; Roll")]
    #[case("&apos;quoted&apos; &quot;twice&quot;")]
    #[case("caf&#233; &#xE9;")]
    fn test_validate_raw_metadata_accepts_references(#[case] blob: &str) {
        assert_eq!(validate_raw_metadata(blob).unwrap(), blob);
    }

    #[test]
    fn test_check_xml_chars() {
        assert!(check_xml_chars("title", "Track\tOne\r\n").is_ok());
        match check_xml_chars("title", "Track\u{1}One") {
            Err(ApiError::InvalidInput(msg)) => {
                assert_eq!(msg, "title contains control character U+0001 at byte 5")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_escape_cow_borrows_clean_values() {
        assert!(matches!(
            escape_cow("http://host/a.mp3", EscapePolicy::ElementText),
            Cow::Borrowed(_)
        ));
        assert_eq!(
            escape_cow("http://host/a.mp3?x=1&y=2", EscapePolicy::ElementText),
            "http://host/a.mp3?x=1&amp;y=2"
        );
    }

    proptest! {
        #[test]
        fn prop_escaped_text_has_no_markup(s in ".*") {
            let escaped = escape_xml(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
        }

        #[test]
        fn prop_every_ampersand_starts_an_entity(s in ".*") {
            let escaped = escape(&s, EscapePolicy::ElementTextAndQuotes);
            for (i, _) in escaped.match_indices('&') {
                let rest = &escaped[i..];
                prop_assert!(
                    rest.starts_with("&amp;")
                        || rest.starts_with("&lt;")
                        || rest.starts_with("&gt;")
                        || rest.starts_with("&quot;")
                );
            }
        }

        #[test]
        fn prop_normalize_is_idempotent(s in "[ \\t\\na-z]*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
            prop_assert!(!once.starts_with(' '));
            prop_assert!(!once.ends_with(' '));
        }
    }
}
