//! Identifier matching (C4's `match_name`), used for plain JS identifiers as
//! well as the looser name grammars JSX uses for tag and attribute names.
//!
//! Reserved-word handling lives in [`crate::token_kind`] (`lookup_keyword`),
//! so this module only finds where a name ends.

use crate::classify::{is_js_identifier_part, is_js_identifier_start};
use crate::utf8;

/// Which extra continuation characters are permitted beyond a plain JS
/// identifier, per JSX's looser name grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameVariant {
    /// A regular JS `IdentifierName`.
    Identifier,
    /// A JSX identifier segment: adds `-`.
    JsxIdentifier,
    /// A JSX attribute name: adds `-` and `:`.
    JsxAttributeName,
    /// A JSX element name: adds `-`, `:`, and `.`.
    JsxElementName,
}

impl NameVariant {
    fn allows_extra(self, c: char) -> bool {
        match self {
            NameVariant::Identifier => false,
            NameVariant::JsxIdentifier => c == '-',
            NameVariant::JsxAttributeName => c == '-' || c == ':',
            NameVariant::JsxElementName => c == '-' || c == ':' || c == '.',
        }
    }
}

/// Matches a name at the start of `s`, per `variant`'s grammar.
///
/// The first code point must satisfy [`is_js_identifier_start`]; every
/// subsequent code point must satisfy [`is_js_identifier_part`] or be one of
/// `variant`'s extra allowed characters. Returns `0` if `s` does not begin
/// with a valid first character.
#[must_use]
pub(crate) fn match_name(s: &[u8], variant: NameVariant) -> usize {
    let Ok((first, first_len)) = utf8::decode(s) else {
        return 0;
    };
    if !is_js_identifier_start(first) {
        return 0;
    }

    let mut i = first_len;
    while i < s.len() {
        let Ok((c, len)) = utf8::decode(&s[i..]) else {
            break;
        };
        if is_js_identifier_part(c) || variant.allows_extra(c) {
            i += len;
        } else {
            break;
        }
    }
    i
}

/// Matches a private identifier (`#name`), as used for class-private
/// fields/methods.
///
/// Returns `0` unless `s` starts with `#` followed by a non-empty
/// [`NameVariant::Identifier`].
#[must_use]
pub(crate) fn match_private_identifier(s: &[u8]) -> usize {
    if s.first() != Some(&b'#') {
        return 0;
    }
    let name_len = match_name(&s[1..], NameVariant::Identifier);
    if name_len == 0 {
        0
    } else {
        1 + name_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifier() {
        assert_eq!(match_name(b"foo123(", NameVariant::Identifier), 6);
        assert_eq!(match_name(b"_$x ", NameVariant::Identifier), 3);
    }

    #[test]
    fn not_an_identifier_start() {
        assert_eq!(match_name(b"123", NameVariant::Identifier), 0);
        assert_eq!(match_name(b"", NameVariant::Identifier), 0);
    }

    #[test]
    fn jsx_identifier_allows_hyphen() {
        assert_eq!(match_name(b"data-foo=", NameVariant::JsxIdentifier), 8);
        assert_eq!(match_name(b"data-foo=", NameVariant::Identifier), 4);
    }

    #[test]
    fn jsx_attribute_name_allows_colon() {
        assert_eq!(
            match_name(b"xlink:href=", NameVariant::JsxAttributeName),
            10
        );
    }

    #[test]
    fn jsx_element_name_allows_dot() {
        assert_eq!(
            match_name(b"Foo.Bar-baz ", NameVariant::JsxElementName),
            11
        );
    }

    #[test]
    fn private_identifier() {
        assert_eq!(match_private_identifier(b"#foo "), 4);
        assert_eq!(match_private_identifier(b"#"), 0);
        assert_eq!(match_private_identifier(b"foo"), 0);
    }
}
