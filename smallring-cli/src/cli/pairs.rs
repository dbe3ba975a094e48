//! Parser for node-pair list literals such as `[(0, 4), (7, 12)]`.
//!
//! The outer brackets are optional, whitespace is ignored, and a trailing
//! comma after the last pair is accepted.

use thiserror::Error;

/// Errors raised while parsing a pair list literal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PairsParseError {
    /// A delimiter was missing.
    #[error("expected `{expected}` at offset {offset}")]
    Expected {
        /// Delimiter the parser needed.
        expected: char,
        /// Byte offset into the literal.
        offset: usize,
    },
    /// A node identifier was not a non-negative integer that fits `usize`.
    #[error("invalid node `{raw}` at offset {offset}")]
    InvalidNode {
        /// Offending token.
        raw: String,
        /// Byte offset into the literal.
        offset: usize,
    },
    /// Input continued after the list ended.
    #[error("unexpected input after the pair list at offset {offset}")]
    Trailing {
        /// Byte offset into the literal.
        offset: usize,
    },
}

/// Parses a pair list literal into `(u, v)` tuples in input order.
///
/// Pairs are returned as written; range checks, self-loops and
/// canonicalisation are left to the core.
///
/// # Errors
/// Returns [`PairsParseError`] describing the first malformed position.
///
/// # Examples
/// ```
/// use smallring_cli::cli::parse_pairs;
///
/// let pairs = parse_pairs("[(0,4), (12, 7)]").expect("literal is valid");
/// assert_eq!(pairs, vec![(0, 4), (12, 7)]);
/// assert!(parse_pairs("[]").expect("empty list").is_empty());
/// ```
pub fn parse_pairs(raw: &str) -> Result<Vec<(usize, usize)>, PairsParseError> {
    let mut cursor = Cursor::new(raw);
    let bracketed = cursor.eat('[');
    let closing = if bracketed { Some(']') } else { None };

    let mut pairs = Vec::new();
    while !cursor.at(closing) {
        pairs.push(cursor.pair()?);
        if !cursor.eat(',') {
            break;
        }
    }

    if let Some(close) = closing {
        cursor.expect(close)?;
    }
    cursor.finish()?;
    Ok(pairs)
}

struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    fn rest(&self) -> &'a str {
        self.input.get(self.offset..).unwrap_or_default()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.offset += rest.len() - rest.trim_start().len();
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.rest().chars().next()
    }

    fn at(&mut self, closing: Option<char>) -> bool {
        self.peek() == closing
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.offset += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), PairsParseError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(PairsParseError::Expected {
                expected,
                offset: self.offset,
            })
        }
    }

    fn node(&mut self) -> Result<usize, PairsParseError> {
        self.skip_whitespace();
        let start = self.offset;
        let token: &str = self
            .rest()
            .split(|c: char| c == ',' || c == ')' || c.is_whitespace())
            .next()
            .unwrap_or_default();
        self.offset += token.len();
        token
            .parse::<usize>()
            .map_err(|_| PairsParseError::InvalidNode {
                raw: token.to_owned(),
                offset: start,
            })
    }

    fn pair(&mut self) -> Result<(usize, usize), PairsParseError> {
        self.expect('(')?;
        let first = self.node()?;
        self.expect(',')?;
        let second = self.node()?;
        self.expect(')')?;
        Ok((first, second))
    }

    fn finish(&mut self) -> Result<(), PairsParseError> {
        match self.peek() {
            None => Ok(()),
            Some(_) => Err(PairsParseError::Trailing {
                offset: self.offset,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::bracketed("[(0,4),(7,12)]", vec![(0, 4), (7, 12)])]
    #[case::spaced("  [ ( 0 , 4 ) ,\t( 7, 12 ) ]  ", vec![(0, 4), (7, 12)])]
    #[case::bare("(3,9)", vec![(3, 9)])]
    #[case::bare_list("(1,2),(2,1)", vec![(1, 2), (2, 1)])]
    #[case::trailing_comma("[(5,0),]", vec![(5, 0)])]
    #[case::empty_brackets("[]", vec![])]
    #[case::empty_input("", vec![])]
    #[case::self_loop_kept("[(3,3)]", vec![(3, 3)])]
    fn parses_pair_lists(#[case] raw: &str, #[case] expected: Vec<(usize, usize)>) {
        assert_eq!(parse_pairs(raw).expect("literal must parse"), expected);
    }

    #[rstest]
    #[case::unclosed_list("[(0,4)", PairsParseError::Expected { expected: ']', offset: 6 })]
    #[case::missing_paren("[0,4]", PairsParseError::Expected { expected: '(', offset: 1 })]
    #[case::missing_comma("[(0 4)]", PairsParseError::Expected { expected: ',', offset: 4 })]
    #[case::negative("[(-1,4)]", PairsParseError::InvalidNode { raw: "-1".to_owned(), offset: 2 })]
    #[case::word("[(a,4)]", PairsParseError::InvalidNode { raw: "a".to_owned(), offset: 2 })]
    #[case::empty_node("[(,4)]", PairsParseError::InvalidNode { raw: String::new(), offset: 2 })]
    #[case::trailing("[(0,4)] x", PairsParseError::Trailing { offset: 8 })]
    fn rejects_malformed_literals(#[case] raw: &str, #[case] expected: PairsParseError) {
        assert_eq!(parse_pairs(raw).expect_err("literal must fail"), expected);
    }
}
