//! The presentational category attached to every emitted token.
//!
//! A `HighlightKind` carries no positional information; it only tells a
//! renderer which CSS class (or equivalent) to apply. See [`super::Token`].

/// Highlight category of a single emitted token.
///
/// This is intentionally a flat, closed-ish enumeration rather than a tree of
/// language-specific kinds: downstream consumers map each variant straight to
/// a CSS class, so new categories are additive and rare.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    /// A type-position keyword (none in plain JS today, reserved for
    /// consistency with the other ulight language highlighters).
    KwType,
    /// A control-flow keyword: `if`, `return`, `for`, `throw`, ...
    KwControl,
    /// Any other reserved word: `function`, `const`, `class`, ...
    KwOther,
    /// An identifier that isn't a recognized keyword.
    Id,
    /// A numeric literal.
    Number,
    /// The interior of a string, template, or regex literal.
    String,
    /// A delimiter of a string or template literal (`'`, `"`, `` ` ``).
    StringDelim,
    /// An escape sequence, or the `${`/`}` substitution brackets.
    Escape,
    /// The interior of a comment.
    Comment,
    /// A comment delimiter (`//`, `/*`, `*/`, `#!`).
    CommentDelimiter,
    /// Punctuation that is not an operator or a brace: `,`, `;`, `:`.
    SymPunc,
    /// A brace-like delimiter: `(`, `)`, `[`, `]`, `{`, `}`.
    SymBrace,
    /// An operator: `+`, `=>`, `===`, ...
    SymOp,
    /// A JSX tag or attribute name.
    MarkupTag,
    /// Anything the scanner could not classify.
    Error,
}

impl HighlightKind {
    /// The CSS class a renderer should attach for this kind.
    ///
    /// The exact spelling is a renderer concern; this is the spelling
    /// ulight's own tools use by convention.
    #[must_use]
    pub const fn as_css_class(self) -> &'static str {
        match self {
            Self::KwType => "kw_type",
            Self::KwControl => "kw_control",
            Self::KwOther => "kw_other",
            Self::Id => "id",
            Self::Number => "number",
            Self::String => "string",
            Self::StringDelim => "string_delim",
            Self::Escape => "escape",
            Self::Comment => "comment",
            Self::CommentDelimiter => "comment_delimiter",
            Self::SymPunc => "sym_punc",
            Self::SymBrace => "sym_brace",
            Self::SymOp => "sym_op",
            Self::MarkupTag => "markup_tag",
            Self::Error => "error",
        }
    }
}
