//! Template literal plain-text scanning (part of C4).
//!
//! Substitutions (`${ ... }`) are scanned by the driver re-entering the main
//! JS dispatch loop, not by a dedicated matcher recursing on its own cursor;
//! this module only finds the next plain run of template characters,
//! stopping at a bare `` ` ``, an unescaped `${`, a `\` line continuation, or
//! end of source.

/// Why a plain template run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TemplateSpanEnd {
    /// Ended at an unescaped `` ` ``, which is not consumed.
    Backtick,
    /// Ended at an unescaped `${`, which is not consumed.
    Substitution,
    /// Ended at a `\` followed by a line terminator sequence, neither of
    /// which is consumed. `length` is the combined byte length of the
    /// backslash and the line terminator sequence that follows it.
    LineContinuation { length: usize },
    /// Ran off the end of the source without finding any of the above.
    Eos,
}

/// Result of [`match_template_span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TemplateSpanResult {
    /// Length of the plain run, not including whatever ended it.
    pub(crate) length: usize,
    pub(crate) end: TemplateSpanEnd,
}

/// Scans a run of plain template-literal text starting at `s[0]` (which is
/// assumed to already be past the opening `` ` `` or a substitution's
/// closing `}`).
///
/// A `\` followed by a line terminator sequence is a line continuation and
/// ends the run (reported separately so the driver can render the backslash
/// and the terminator as their own spans); any other `\` unconditionally
/// escapes the next byte, so `` \` `` and `\${` do not end the run.
#[must_use]
pub(crate) fn match_template_span(s: &[u8]) -> TemplateSpanResult {
    let mut i = 0;
    let mut escaped = false;
    while i < s.len() {
        let b = s[i];
        if escaped {
            escaped = false;
            i += 1;
            continue;
        }
        match b {
            b'\\' => {
                let continuation = crate::classify::match_line_continuation(&s[i..]);
                if continuation > 0 {
                    return TemplateSpanResult {
                        length: i,
                        end: TemplateSpanEnd::LineContinuation { length: continuation },
                    };
                }
                escaped = true;
                i += 1;
            }
            b'`' => {
                return TemplateSpanResult {
                    length: i,
                    end: TemplateSpanEnd::Backtick,
                };
            }
            b'$' if s.get(i + 1) == Some(&b'{') => {
                return TemplateSpanResult {
                    length: i,
                    end: TemplateSpanEnd::Substitution,
                };
            }
            _ => i += 1,
        }
    }
    TemplateSpanResult {
        length: i,
        end: TemplateSpanEnd::Eos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_run_to_backtick() {
        let r = match_template_span(b"hello`x");
        assert_eq!(
            r,
            TemplateSpanResult { length: 5, end: TemplateSpanEnd::Backtick }
        );
    }

    #[test]
    fn plain_run_to_substitution() {
        let r = match_template_span(b"a=${b}c");
        assert_eq!(
            r,
            TemplateSpanResult { length: 2, end: TemplateSpanEnd::Substitution }
        );
    }

    #[test]
    fn escaped_backtick_does_not_end_run() {
        let r = match_template_span(b"a\\`b`c");
        assert_eq!(
            r,
            TemplateSpanResult { length: 4, end: TemplateSpanEnd::Backtick }
        );
    }

    #[test]
    fn escaped_dollar_does_not_end_run() {
        let r = match_template_span(b"a\\${b}`c");
        assert_eq!(
            r,
            TemplateSpanResult { length: 7, end: TemplateSpanEnd::Backtick }
        );
    }

    #[test]
    fn lone_dollar_is_plain_text() {
        let r = match_template_span(b"a$b`c");
        assert_eq!(
            r,
            TemplateSpanResult { length: 3, end: TemplateSpanEnd::Backtick }
        );
    }

    #[test]
    fn line_continuation_ends_the_run() {
        let r = match_template_span(b"a\\\nb`c");
        assert_eq!(
            r,
            TemplateSpanResult { length: 1, end: TemplateSpanEnd::LineContinuation { length: 2 } }
        );
    }

    #[test]
    fn crlf_line_continuation_ends_the_run() {
        let r = match_template_span(b"a\\\r\nb`c");
        assert_eq!(
            r,
            TemplateSpanResult { length: 1, end: TemplateSpanEnd::LineContinuation { length: 3 } }
        );
    }

    #[test]
    fn unterminated_runs_to_eos() {
        let r = match_template_span(b"abc");
        assert_eq!(r, TemplateSpanResult { length: 3, end: TemplateSpanEnd::Eos });
    }
}
