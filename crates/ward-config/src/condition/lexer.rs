//! Tokenizer for `when` expressions.

use ward_common::ConditionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Token {
    Ident(String),
    Bool(bool),
    And,
    Or,
    Not,
    LParen,
    RParen,
}

/// A token and the byte offset it starts at.
pub(super) type Spanned = (Token, usize);

pub(super) fn tokenize(input: &str) -> Result<Vec<Spanned>, ConditionError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            c if c.is_whitespace() => {}
            '(' => tokens.push((Token::LParen, offset)),
            ')' => tokens.push((Token::RParen, offset)),
            '!' => tokens.push((Token::Not, offset)),
            '&' | '|' => match chars.next_if(|&(_, next)| next == ch) {
                Some(_) => {
                    let token = if ch == '&' { Token::And } else { Token::Or };
                    tokens.push((token, offset));
                }
                None => {
                    return Err(ConditionError::UnexpectedToken {
                        token: ch.to_string(),
                        offset,
                    });
                }
            },
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut ident = String::from(c);
                while let Some((_, next)) =
                    chars.next_if(|&(_, next)| next.is_ascii_alphanumeric() || next == '_')
                {
                    ident.push(next);
                }
                let token = match ident.as_str() {
                    "true" => Token::Bool(true),
                    "false" => Token::Bool(false),
                    _ => Token::Ident(ident),
                };
                tokens.push((token, offset));
            }
            other => {
                return Err(ConditionError::UnexpectedToken {
                    token: other.to_string(),
                    offset,
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn tokenizes_operators_and_names() {
        assert_eq!(
            kinds("canEdit && !readOnly"),
            vec![
                Token::Ident("canEdit".into()),
                Token::And,
                Token::Not,
                Token::Ident("readOnly".into()),
            ]
        );
    }

    #[test]
    fn tokenizes_parens_and_literals() {
        assert_eq!(
            kinds("(true||false)"),
            vec![
                Token::LParen,
                Token::Bool(true),
                Token::Or,
                Token::Bool(false),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn records_offsets() {
        let tokens = tokenize("a  || b").unwrap();
        let offsets: Vec<usize> = tokens.iter().map(|(_, offset)| *offset).collect();
        assert_eq!(offsets, vec![0, 3, 6]);
    }

    #[test]
    fn single_ampersand_is_an_error() {
        assert_eq!(
            tokenize("a & b"),
            Err(ConditionError::UnexpectedToken {
                token: "&".into(),
                offset: 2,
            })
        );
    }

    #[test]
    fn rejects_unknown_characters() {
        assert!(matches!(
            tokenize("canEdit == true"),
            Err(ConditionError::UnexpectedToken { ref token, offset: 8 }) if token == "="
        ));
    }
}
