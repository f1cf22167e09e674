//! `%(name)s` references with `%%` as the literal escape.

use super::{SyntaxIssue, Token};

pub(super) fn tokenize(value: &str) -> Result<Vec<Token<'_>>, SyntaxIssue> {
    let mut tokens = Vec::new();
    let mut i = 0;

    while let Some(offset) = value[i..].find('%') {
        let pos = i + offset;
        if pos > i {
            tokens.push(Token::Literal(&value[i..pos]));
        }

        let after = &value[pos + 1..];
        if after.starts_with('%') {
            tokens.push(Token::Escape);
            i = pos + 2;
        } else if after.starts_with('(') {
            let close = after.find(')').ok_or(SyntaxIssue {
                position: pos,
                reason: "unterminated '%(' reference",
            })?;
            if !after[close + 1..].starts_with('s') {
                return Err(SyntaxIssue {
                    position: pos,
                    reason: "reference must end with ')s'",
                });
            }
            tokens.push(Token::Reference(&after[1..close]));
            i = pos + close + 3;
        } else {
            return Err(SyntaxIssue {
                position: pos,
                reason: "'%' must be followed by '%' or '('",
            });
        }
    }

    if i < value.len() {
        tokens.push(Token::Literal(&value[i..]));
    }
    Ok(tokens)
}

/// Doubles every `%` that does not already start `%%` or `%(`.
pub(super) fn escape_stray(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        out.push(c);
        if c != '%' {
            continue;
        }
        match chars.peek() {
            Some('%') => {
                out.push('%');
                _ = chars.next();
            }
            Some('(') => {}
            _ => out.push('%'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_literals_escapes_and_references() {
        assert_eq!(
            tokenize("a%(b)s c%%d").unwrap(),
            vec![
                Token::Literal("a"),
                Token::Reference("b"),
                Token::Literal(" c"),
                Token::Escape,
                Token::Literal("d"),
            ]
        );
    }

    #[test]
    fn bare_percent_is_rejected_with_position() {
        let issue = tokenize("100% sure").unwrap_err();
        assert_eq!(issue.position, 3);
    }

    #[test]
    fn reference_needs_s_suffix() {
        assert!(tokenize("%(name)d").is_err());
        assert!(tokenize("%(name").is_err());
    }

    #[test]
    fn stray_percent_is_doubled() {
        assert_eq!(escape_stray("50% of %(x)s is 100%%"), "50%% of %(x)s is 100%%");
        assert_eq!(escape_stray("%"), "%%");
    }
}
