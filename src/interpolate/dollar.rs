//! `$name` and `${name}` references with `$$` as the literal escape.

use super::{SyntaxIssue, Token};

const fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub(super) fn tokenize(value: &str) -> Result<Vec<Token<'_>>, SyntaxIssue> {
    let mut tokens = Vec::new();
    let mut i = 0;

    while let Some(offset) = value[i..].find('$') {
        let pos = i + offset;
        if pos > i {
            tokens.push(Token::Literal(&value[i..pos]));
        }

        let after = &value[pos + 1..];
        if after.starts_with('$') {
            tokens.push(Token::Escape);
            i = pos + 2;
        } else if after.starts_with('{') {
            let close = after.find('}').ok_or(SyntaxIssue {
                position: pos,
                reason: "unterminated '${' reference",
            })?;
            if close == 1 {
                return Err(SyntaxIssue {
                    position: pos,
                    reason: "empty '${}' reference",
                });
            }
            tokens.push(Token::Reference(&after[1..close]));
            i = pos + close + 2;
        } else if after.starts_with(is_name_start) {
            let len = after.find(|c| !is_name_char(c)).unwrap_or(after.len());
            tokens.push(Token::Reference(&after[..len]));
            i = pos + 1 + len;
        } else {
            return Err(SyntaxIssue {
                position: pos,
                reason: "'$' must be followed by '$', '{' or a name",
            });
        }
    }

    if i < value.len() {
        tokens.push(Token::Literal(&value[i..]));
    }
    Ok(tokens)
}

/// Doubles every `$` that would not otherwise start an escape or reference.
pub(super) fn escape_stray(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        out.push(c);
        if c != '$' {
            continue;
        }
        match chars.peek() {
            Some('$') => {
                out.push('$');
                _ = chars.next();
            }
            Some(&next) if next == '{' || is_name_start(next) => {}
            _ => out.push('$'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_and_braced_references() {
        assert_eq!(
            tokenize("$home/${user}s $$").unwrap(),
            vec![
                Token::Reference("home"),
                Token::Literal("/"),
                Token::Reference("user"),
                Token::Literal("s "),
                Token::Escape,
            ]
        );
    }

    #[test]
    fn bare_name_stops_at_non_name_character() {
        assert_eq!(
            tokenize("$a.b").unwrap(),
            vec![Token::Reference("a"), Token::Literal(".b")]
        );
    }

    #[test]
    fn braces_allow_any_characters() {
        assert_eq!(
            tokenize("${my-key}").unwrap(),
            vec![Token::Reference("my-key")]
        );
    }

    #[test]
    fn invalid_placeholders_are_rejected() {
        assert_eq!(tokenize("cost $5").unwrap_err().position, 5);
        assert!(tokenize("${open").is_err());
        assert!(tokenize("${}").is_err());
        assert!(tokenize("trailing $").is_err());
    }

    #[test]
    fn stray_dollar_is_doubled() {
        assert_eq!(escape_stray("cost $5, ${x} $y $$"), "cost $$5, ${x} $y $$");
    }
}
