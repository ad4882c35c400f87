//! JSX tag matching (C5) and JSX braced-expression matching (C6).
//!
//! Shaped like a recursive-descent JSX parser's opening/closing/fragment/
//! attribute split, but reworked into a pure matcher: rather than building
//! an AST, the grammar is run against a [`TagVisitor`] so the exact same
//! traversal can either (a) just count bytes for trial parsing, or (b)
//! actually emit tokens — trial parsing without side effects.

use crate::comment::{match_block_comment, match_line_comment, CommentResult};
use crate::identifier::{match_name, NameVariant};
use crate::string::{match_string_literal, StringLiteralResult};
use crate::classify::match_whitespace;

/// Which kind of tag [`match_jsx_tag`] accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagType {
    Opening,
    Closing,
    SelfClosing,
    FragmentOpening,
    FragmentClosing,
}

/// Whether a `<` may start a closing tag. Used when trial-parsing a JSX tag
/// at the JS level, where a bare `</...>` is never a valid start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagSubset {
    All,
    NonClosing,
}

/// Convenience value object: a tag's total length plus which [`TagType`] it
/// was, produced by [`count_jsx_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct JsxTagResult {
    pub(crate) length: usize,
    pub(crate) tag_type: TagType,
}

/// One reportable event during tag traversal, all positions relative to the
/// tag's own `<`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagEvent {
    OpeningSymbol { at: usize },
    ClosingSymbol { at: usize },
    /// The lone `/` of a self-closing or closing tag; not paired with a `>`.
    Slash { at: usize },
    ElementName { at: usize, len: usize },
    AttributeName { at: usize, len: usize },
    AttributeEquals { at: usize },
    StringLiteral { at: usize, result: StringLiteralResult },
    Whitespace { at: usize, len: usize },
    BlockComment { at: usize, result: CommentResult },
    LineComment { at: usize, len: usize },
}

/// The visitor/consumer abstraction: one grammar walk, two possible
/// audiences.
pub(crate) trait TagVisitor {
    fn event(&mut self, ev: TagEvent);
    /// `s` starts at the `{` in question; `at` is its offset relative to
    /// the tag start (consistent with [`TagEvent`]'s positions). Returns the
    /// byte length of the (terminated) braced expression, or `None` to
    /// reject the whole tag.
    fn braced(&mut self, s: &[u8], at: usize) -> Option<usize>;
    fn done(&mut self, tag_type: TagType);
}

/// Trial-parse (side-effect free) consumer: only records whether the tag was
/// accepted and, if so, as which [`TagType`].
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CountingVisitor {
    pub(crate) tag_type: Option<TagType>,
}

impl TagVisitor for CountingVisitor {
    fn event(&mut self, _ev: TagEvent) {}

    fn braced(&mut self, s: &[u8], _at: usize) -> Option<usize> {
        let r = match_jsx_braced(s);
        r.is_terminated.then_some(r.length)
    }

    fn done(&mut self, tag_type: TagType) {
        self.tag_type = Some(tag_type);
    }
}

fn skip_ws_and_comments<V: TagVisitor>(s: &[u8], mut pos: usize, visitor: &mut V) -> usize {
    loop {
        let rest = &s[pos..];
        let ws = match_whitespace(rest);
        if ws > 0 {
            visitor.event(TagEvent::Whitespace { at: pos, len: ws });
            pos += ws;
            continue;
        }
        let lc = match_line_comment(rest);
        if lc > 0 {
            visitor.event(TagEvent::LineComment { at: pos, len: lc });
            pos += lc;
            continue;
        }
        let bc = match_block_comment(rest);
        if bc.length > 0 {
            visitor.event(TagEvent::BlockComment { at: pos, result: bc });
            pos += bc.length;
            continue;
        }
        break;
    }
    pos
}

/// Runs the JSX tag grammar over `s`, which must start with `<`, reporting
/// every step to `visitor`. Returns the tag's total byte length on
/// acceptance.
#[must_use]
pub(crate) fn match_jsx_tag<V: TagVisitor>(
    s: &[u8],
    subset: TagSubset,
    visitor: &mut V,
) -> Option<usize> {
    if s.first() != Some(&b'<') {
        return None;
    }
    visitor.event(TagEvent::OpeningSymbol { at: 0 });
    let mut pos = 1;

    pos = skip_ws_and_comments(s, pos, visitor);

    if s.get(pos) == Some(&b'>') {
        visitor.event(TagEvent::ClosingSymbol { at: pos });
        visitor.done(TagType::FragmentOpening);
        return Some(pos + 1);
    }

    let mut closing = false;
    if s.get(pos) == Some(&b'/') {
        if subset == TagSubset::NonClosing {
            return None;
        }
        visitor.event(TagEvent::Slash { at: pos });
        pos += 1;
        pos = skip_ws_and_comments(s, pos, visitor);
        if s.get(pos) == Some(&b'>') {
            visitor.event(TagEvent::ClosingSymbol { at: pos });
            visitor.done(TagType::FragmentClosing);
            return Some(pos + 1);
        }
        closing = true;
    }

    let name_len = match_name(&s[pos..], NameVariant::JsxElementName);
    if name_len > 0 {
        visitor.event(TagEvent::ElementName { at: pos, len: name_len });
        pos += name_len;
    }

    loop {
        pos = skip_ws_and_comments(s, pos, visitor);

        if s.get(pos) == Some(&b'>') {
            visitor.event(TagEvent::ClosingSymbol { at: pos });
            visitor.done(if closing { TagType::Closing } else { TagType::Opening });
            return Some(pos + 1);
        }

        if s.get(pos) == Some(&b'/') && s.get(pos + 1) == Some(&b'>') {
            if closing {
                return None;
            }
            visitor.event(TagEvent::Slash { at: pos });
            visitor.event(TagEvent::ClosingSymbol { at: pos + 1 });
            visitor.done(TagType::SelfClosing);
            return Some(pos + 2);
        }

        if s.get(pos) == Some(&b'{') {
            let len = visitor.braced(&s[pos..], pos)?;
            pos += len;
            continue;
        }

        let attr_len = match_name(&s[pos..], NameVariant::JsxAttributeName);
        if attr_len > 0 {
            visitor.event(TagEvent::AttributeName { at: pos, len: attr_len });
            pos += attr_len;
            pos = skip_ws_and_comments(s, pos, visitor);
            if s.get(pos) == Some(&b'=') {
                visitor.event(TagEvent::AttributeEquals { at: pos });
                pos += 1;
                pos = skip_ws_and_comments(s, pos, visitor);
                if matches!(s.get(pos), Some(b'\'' | b'"')) {
                    let r = match_string_literal(&s[pos..]);
                    visitor.event(TagEvent::StringLiteral { at: pos, result: r });
                    pos += r.length;
                } else if s.get(pos) == Some(&b'{') {
                    let len = visitor.braced(&s[pos..], pos)?;
                    pos += len;
                } else {
                    return None;
                }
            }
            continue;
        }

        return None;
    }
}

/// Trial-parses a JSX tag with the side-effect-free [`CountingVisitor`] and
/// packages the result as a [`JsxTagResult`].
#[must_use]
pub(crate) fn count_jsx_tag(s: &[u8], subset: TagSubset) -> Option<JsxTagResult> {
    let mut counting = CountingVisitor::default();
    let length = match_jsx_tag(s, subset, &mut counting)?;
    Some(JsxTagResult {
        length,
        tag_type: counting.tag_type?,
    })
}

/// Result of matching a `{...}` JSX braced expression (C6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct JsxBracedResult {
    pub(crate) length: usize,
    pub(crate) is_terminated: bool,
}

/// Balances `{...}` starting at `s[0]` (which must be `{`), skipping
/// whitespace/comments and string literals along the way so their braces
/// don't perturb the depth count.
#[must_use]
pub(crate) fn match_jsx_braced(s: &[u8]) -> JsxBracedResult {
    if s.first() != Some(&b'{') {
        return JsxBracedResult {
            length: 0,
            is_terminated: false,
        };
    }

    let mut i = 1;
    let mut depth = 1i32;
    loop {
        let ws = match_whitespace(&s[i..]);
        if ws > 0 {
            i += ws;
            continue;
        }
        let lc = match_line_comment(&s[i..]);
        if lc > 0 {
            i += lc;
            continue;
        }
        let bc = match_block_comment(&s[i..]);
        if bc.length > 0 {
            i += bc.length;
            continue;
        }

        match s.get(i) {
            None => {
                return JsxBracedResult {
                    length: i,
                    is_terminated: false,
                };
            }
            Some(b'{') => {
                depth += 1;
                i += 1;
            }
            Some(b'}') => {
                depth -= 1;
                i += 1;
                if depth == 0 {
                    return JsxBracedResult {
                        length: i,
                        is_terminated: true,
                    };
                }
            }
            Some(b'\'' | b'"') => {
                let r = match_string_literal(&s[i..]);
                i += if r.length == 0 { 1 } else { r.length };
            }
            Some(_) => i += 1,
        }
    }
}
