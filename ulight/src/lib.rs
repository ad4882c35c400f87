//! A portable, zero-dependency syntax highlighter for JavaScript/JSX.
//!
//! [`highlight`] consumes a UTF-8 source buffer and produces a
//! non-overlapping sequence of [`Token`]s, each tagged with a
//! [`HighlightKind`] a renderer can map to a CSS class. The engine is a
//! single-pass, non-blocking scanner: no I/O, no persisted state, no
//! allocation on the hot path beyond the sink itself.
//!
//! ```
//! use ulight::{highlight, Options};
//!
//! let tokens = highlight(b"const x = 1;", Options::default());
//! assert!(!tokens.is_empty());
//! ```

mod classify;
mod comment;
mod driver;
mod error;
mod html_entity;
mod identifier;
mod jsx;
mod kind;
mod number;
mod operator;
mod regex;
mod sink;
mod string;
mod template;
mod token_kind;
mod utf8;

#[cfg(test)]
mod tests;

pub use classify::{CharClass, DefaultCharClass};
pub use html_entity::{CharacterReferenceMatcher, Html5NamedReferences};
pub use kind::HighlightKind;
pub use sink::{Sink, Token, VecSink};

use driver::Highlighter;

/// Knobs accepted by [`highlight`]. The core reads only `coalescing`; more
/// language-agnostic flags may be added here over time.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Options {
    /// Merge adjacent tokens of identical kind into one. Enabled by default.
    pub coalescing: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { coalescing: true }
    }
}

/// Highlights `source` as JavaScript/JSX, using the built-in
/// [`Html5NamedReferences`] for JSX character references, and returns
/// the resulting tokens in a fresh [`VecSink`].
#[must_use]
pub fn highlight(source: &[u8], options: Options) -> Vec<Token> {
    let mut sink = VecSink::new(options.coalescing);
    highlight_into(source, &mut sink, &Html5NamedReferences);
    sink.into_tokens()
}

/// Highlights `source` into a caller-supplied [`Sink`], using a
/// caller-supplied [`CharacterReferenceMatcher`] for JSX character
/// references. Lets an embedder plug in a bounded or otherwise
/// non-`Vec`-backed sink, or a real HTML5 named-entity table, without
/// going through [`highlight`]'s defaults.
pub fn highlight_into(
    source: &[u8],
    sink: &mut impl Sink,
    char_refs: &impl CharacterReferenceMatcher,
) {
    Highlighter::new(source, sink, char_refs).run();
}
