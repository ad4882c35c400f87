//! The highlighter driver (C7): the one stateful component, dispatching to
//! the primitive matchers (C4), the JSX tag/braced matchers (C5/C6), and the
//! token sink (C8).
//!
//! Each scan position tries each token kind in priority order, first success
//! wins, around a byte-slice-and-index cursor since every matcher here
//! already operates on `&[u8]`.

use crate::classify::match_whitespace;
use crate::comment::{
    match_block_comment, match_hashbang_comment, match_line_comment, CommentResult,
};
use crate::html_entity::CharacterReferenceMatcher;
use crate::identifier::{match_name, match_private_identifier, NameVariant};
use crate::jsx::{
    count_jsx_tag, match_jsx_braced, match_jsx_tag, TagEvent, TagSubset, TagType, TagVisitor,
};
use crate::kind::HighlightKind;
use crate::number::match_numeric_literal;
use crate::operator::{match_operator_or_punctuation, operator_implies_regex_next};
use crate::regex::match_regex_literal;
use crate::sink::Sink;
use crate::string::{match_string_literal, StringLiteralResult};
use crate::template::{match_template_span, TemplateSpanEnd};
use crate::token_kind::lookup_keyword;

/// The stateful scanner. Holds exactly the cross-token state that matters:
/// `can_be_regex` and `at_start_of_file`; everything else (the depth of a
/// template substitution or a JSX child tree) lives on the Rust call stack
/// via recursive method calls, not in a field.
pub(crate) struct Highlighter<'s, S: Sink, R: CharacterReferenceMatcher> {
    source: &'s [u8],
    index: usize,
    can_be_regex: bool,
    at_start_of_file: bool,
    sink: &'s mut S,
    char_refs: &'s R,
}

impl<'s, S: Sink, R: CharacterReferenceMatcher> Highlighter<'s, S, R> {
    pub(crate) fn new(source: &'s [u8], sink: &'s mut S, char_refs: &'s R) -> Self {
        Self {
            source,
            index: 0,
            can_be_regex: true,
            at_start_of_file: true,
            sink,
            char_refs,
        }
    }

    pub(crate) fn run(&mut self) {
        while self.index < self.source.len() {
            self.step();
        }
    }

    fn emit(&mut self, begin: usize, length: usize, kind: HighlightKind) {
        if length == 0 {
            return;
        }
        self.sink.emplace_back(begin as u32, length as u32, kind);
    }

    fn emit_string_literal(&mut self, r: StringLiteralResult) {
        let begin = self.index;
        self.emit(begin, 1, HighlightKind::StringDelim);
        let interior = if r.terminated {
            r.length - 2
        } else {
            r.length - 1
        };
        if interior > 0 {
            self.emit(begin + 1, interior, HighlightKind::String);
        }
        if r.terminated {
            self.emit(begin + 1 + interior, 1, HighlightKind::StringDelim);
        }
        self.index = begin + r.length;
    }

    fn emit_line_comment(&mut self, len: usize) {
        let begin = self.index;
        self.emit(begin, 2, HighlightKind::CommentDelimiter);
        if len > 2 {
            self.emit(begin + 2, len - 2, HighlightKind::Comment);
        }
        self.index = begin + len;
    }

    fn emit_block_comment(&mut self, r: CommentResult) {
        let begin = self.index;
        self.emit(begin, 2, HighlightKind::CommentDelimiter);
        if r.is_terminated {
            let interior = r.length - 4;
            if interior > 0 {
                self.emit(begin + 2, interior, HighlightKind::Comment);
            }
            self.emit(begin + 2 + interior, 2, HighlightKind::CommentDelimiter);
        } else {
            let interior = r.length - 2;
            if interior > 0 {
                self.emit(begin + 2, interior, HighlightKind::Comment);
            }
        }
        self.index = begin + r.length;
    }

    /// One unit of work at the current scan position: a whitespace run, a
    /// hashbang, a comment, a JSX tag, a literal, an identifier/keyword, an
    /// operator, or (on total failure) a single `error` byte. Also reused,
    /// unchanged, as the body of [`Self::highlight_braced_js`]'s recursion.
    fn step(&mut self) {
        let rest = &self.source[self.index..];

        let ws = match_whitespace(rest);
        if ws > 0 {
            self.index += ws;
            return;
        }

        if self.at_start_of_file {
            self.at_start_of_file = false;
            let hb = match_hashbang_comment(rest, true);
            if hb > 0 {
                let begin = self.index;
                self.emit(begin, 2, HighlightKind::CommentDelimiter);
                if hb > 2 {
                    self.emit(begin + 2, hb - 2, HighlightKind::Comment);
                }
                self.index = begin + hb;
                return;
            }
        }

        let lc = match_line_comment(rest);
        if lc > 0 {
            self.emit_line_comment(lc);
            self.can_be_regex = true;
            return;
        }

        let bc = match_block_comment(rest);
        if bc.length > 0 {
            self.emit_block_comment(bc);
            self.can_be_regex = true;
            return;
        }

        if rest.first() == Some(&b'<') && count_jsx_tag(rest, TagSubset::NonClosing).is_some() {
            self.highlight_jsx_tag_and_children();
            return;
        }

        if matches!(rest.first(), Some(b'\'' | b'"')) {
            let r = match_string_literal(rest);
            self.emit_string_literal(r);
            self.can_be_regex = false;
            return;
        }

        if rest.first() == Some(&b'`') {
            self.highlight_template();
            self.can_be_regex = false;
            return;
        }

        if self.can_be_regex
            && rest.first() == Some(&b'/')
            && !matches!(rest.get(1), Some(b'/' | b'*'))
        {
            let len = match_regex_literal(rest);
            if len > 0 {
                self.emit(self.index, len, HighlightKind::String);
                self.index += len;
                self.can_be_regex = false;
                return;
            }
        }

        let num = match_numeric_literal(rest);
        if num.length > 0 {
            let kind = if num.erroneous {
                HighlightKind::Error
            } else {
                HighlightKind::Number
            };
            self.emit(self.index, num.length, kind);
            self.index += num.length;
            self.can_be_regex = false;
            return;
        }

        let pid = match_private_identifier(rest);
        if pid > 0 {
            self.emit(self.index, pid, HighlightKind::Id);
            self.index += pid;
            self.can_be_regex = false;
            return;
        }

        let name = match_name(rest, NameVariant::Identifier);
        if name > 0 {
            let text = std::str::from_utf8(&rest[..name]).unwrap_or("");
            match lookup_keyword(text) {
                Some(ty) => {
                    self.emit(self.index, name, ty.highlight_kind());
                    self.can_be_regex = ty.keyword_implies_regex_next();
                }
                None => {
                    self.emit(self.index, name, HighlightKind::Id);
                    self.can_be_regex = false;
                }
            }
            self.index += name;
            return;
        }

        if let Some(ty) = match_operator_or_punctuation(rest) {
            let len = ty.len();
            self.emit(self.index, len, ty.highlight_kind());
            self.index += len;
            self.can_be_regex = operator_implies_regex_next(ty);
            return;
        }

        self.emit(self.index, 1, HighlightKind::Error);
        self.index += 1;
        self.can_be_regex = true;
    }

    fn highlight_template(&mut self) {
        let begin = self.index;
        self.emit(begin, 1, HighlightKind::StringDelim);
        self.index = begin + 1;

        loop {
            let span = match_template_span(&self.source[self.index..]);
            if span.length > 0 {
                self.emit(self.index, span.length, HighlightKind::String);
                self.index += span.length;
            }
            match span.end {
                TemplateSpanEnd::Backtick => {
                    self.emit(self.index, 1, HighlightKind::StringDelim);
                    self.index += 1;
                    return;
                }
                TemplateSpanEnd::Substitution => {
                    self.emit(self.index, 2, HighlightKind::Escape);
                    self.index += 2;
                    let terminated = self.highlight_braced_js();
                    if terminated {
                        self.emit(self.index, 1, HighlightKind::Escape);
                        self.index += 1;
                    } else {
                        return;
                    }
                }
                TemplateSpanEnd::LineContinuation { length } => {
                    self.emit(self.index, 1, HighlightKind::Escape);
                    self.index += 1;
                    self.emit(self.index, length - 1, HighlightKind::String);
                    self.index += length - 1;
                }
                TemplateSpanEnd::Eos => return,
            }
        }
    }

    /// Recursively re-enters [`Self::step`] to highlight embedded JS,
    /// stopping just before the `}` that closes the opening `{` the caller
    /// already consumed, without consuming that `}` itself — the caller
    /// (template substitution or JSX braced expression) decides how to
    /// render it. A bare `{`/`}` reaching this loop is unambiguous: every
    /// other primitive matcher owns its own braces internally (inside a
    /// string, comment, template, or regex), so one seen here can only be
    /// the block operator.
    fn highlight_braced_js(&mut self) -> bool {
        let mut depth: i32 = 1;
        loop {
            let ws = match_whitespace(&self.source[self.index..]);
            if ws > 0 {
                self.index += ws;
                continue;
            }
            if self.index >= self.source.len() {
                return false;
            }
            match self.source[self.index] {
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return true;
                    }
                }
                b'{' => depth += 1,
                _ => {}
            }
            self.step();
        }
    }

    fn highlight_jsx_tag_and_children(&mut self) {
        let tag_type = self.highlight_jsx_tag();
        if matches!(
            tag_type,
            Some(TagType::Opening) | Some(TagType::FragmentOpening)
        ) {
            self.highlight_jsx_children();
        }
    }

    /// Emits one JSX tag (opening, closing, self-closing, or fragment) via
    /// the emitting visitor and returns which kind it was.
    fn highlight_jsx_tag(&mut self) -> Option<TagType> {
        let begin = self.index;
        let source = self.source;
        let mut visitor = EmittingTagVisitor {
            hl: self,
            begin,
            tag_type: None,
        };
        match_jsx_tag(&source[begin..], TagSubset::All, &mut visitor)
            .expect("already accepted by the trial parse");
        visitor.tag_type
    }

    /// JSX children: scan for `& { } < >`, recursing into nested tags and
    /// tracking how many are still open, returning once the matching
    /// closing tag (or fragment close) has been consumed.
    fn highlight_jsx_children(&mut self) {
        let mut depth: i32 = 0;
        loop {
            if self.index >= self.source.len() {
                return;
            }
            let rest = &self.source[self.index..];
            match rest.first() {
                Some(&b'&') => {
                    let len = self.char_refs.match_character_reference(rest);
                    if len > 0 {
                        self.emit(self.index, len, HighlightKind::Escape);
                        self.index += len;
                    } else {
                        self.index += 1;
                    }
                }
                Some(&b'<') => {
                    if let Some(tag) = count_jsx_tag(rest, TagSubset::All) {
                        let opens =
                            matches!(tag.tag_type, TagType::Opening | TagType::FragmentOpening);
                        let closes =
                            matches!(tag.tag_type, TagType::Closing | TagType::FragmentClosing);
                        self.highlight_jsx_tag();
                        if opens {
                            depth += 1;
                        } else if closes {
                            depth -= 1;
                            if depth < 0 {
                                return;
                            }
                        }
                    } else {
                        self.emit(self.index, 1, HighlightKind::Error);
                        self.index += 1;
                    }
                }
                Some(&b'>') | Some(&b'}') => {
                    self.emit(self.index, 1, HighlightKind::Error);
                    self.index += 1;
                }
                Some(&b'{') => {
                    let r = match_jsx_braced(rest);
                    if r.length > 0 {
                        self.highlight_jsx_braced();
                    } else {
                        self.emit(self.index, 1, HighlightKind::Error);
                        self.index += 1;
                    }
                }
                _ => self.index += 1,
            }
        }
    }

    /// Braced JSX child expression: emit `{`/`}` as `sym_brace`, recursing
    /// the full driver in between.
    fn highlight_jsx_braced(&mut self) {
        self.emit(self.index, 1, HighlightKind::SymBrace);
        self.index += 1;
        let terminated = self.highlight_braced_js();
        if terminated {
            self.emit(self.index, 1, HighlightKind::SymBrace);
            self.index += 1;
        }
    }
}

/// The emitting consumer for [`crate::jsx::match_jsx_tag`]: wraps a live
/// `&mut Highlighter` so tag traversal can render straight to the sink (and
/// recurse into embedded JS for braced attribute values) instead of just
/// counting.
struct EmittingTagVisitor<'h, 's, S: Sink, R: CharacterReferenceMatcher> {
    hl: &'h mut Highlighter<'s, S, R>,
    begin: usize,
    tag_type: Option<TagType>,
}

impl<S: Sink, R: CharacterReferenceMatcher> TagVisitor for EmittingTagVisitor<'_, '_, S, R> {
    fn event(&mut self, ev: TagEvent) {
        match ev {
            TagEvent::OpeningSymbol { at }
            | TagEvent::ClosingSymbol { at }
            | TagEvent::Slash { at }
            | TagEvent::AttributeEquals { at } => {
                self.hl.index = self.begin + at;
                self.hl.emit(self.hl.index, 1, HighlightKind::SymPunc);
                self.hl.index += 1;
            }
            TagEvent::ElementName { at, len } | TagEvent::AttributeName { at, len } => {
                self.hl.index = self.begin + at;
                self.hl.emit(self.hl.index, len, HighlightKind::MarkupTag);
                self.hl.index += len;
            }
            TagEvent::StringLiteral { at, result } => {
                self.hl.index = self.begin + at;
                self.hl.emit_string_literal(result);
            }
            TagEvent::Whitespace { at, len } => {
                self.hl.index = self.begin + at + len;
            }
            TagEvent::BlockComment { at, result } => {
                self.hl.index = self.begin + at;
                self.hl.emit_block_comment(result);
            }
            TagEvent::LineComment { at, len } => {
                self.hl.index = self.begin + at;
                self.hl.emit_line_comment(len);
            }
        }
    }

    fn braced(&mut self, _s: &[u8], at: usize) -> Option<usize> {
        self.hl.index = self.begin + at;
        self.hl.emit(self.hl.index, 1, HighlightKind::SymBrace);
        self.hl.index += 1;
        let terminated = self.hl.highlight_braced_js();
        if terminated {
            self.hl.emit(self.hl.index, 1, HighlightKind::SymBrace);
            self.hl.index += 1;
        }
        let consumed = self.hl.index - (self.begin + at);
        terminated.then_some(consumed)
    }

    fn done(&mut self, tag_type: TagType) {
        self.tag_type = Some(tag_type);
    }
}
