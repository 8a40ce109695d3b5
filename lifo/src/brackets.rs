use lifo_core::{EmptyStackError, Stack};

use crate::delimiter::{AngleBracket, Brace, Bracket, Delimiter, Paren};

/// Returns true if every `(`, `[` and `{` in `expr` is closed in the right order.
/// Characters other than brackets are ignored.
pub fn is_balanced(expr: &str) -> bool {
    Brackets::default().is_balanced(expr)
}

/// The set of bracket pairs that are matched against each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brackets {
    pairs: Vec<(char, char)>,
}

impl Default for Brackets {
    fn default() -> Self {
        Self::empty().with::<Paren>().with::<Bracket>().with::<Brace>()
    }
}

impl Brackets {
    pub fn empty() -> Self {
        Self { pairs: vec![] }
    }

    #[must_use]
    pub fn with<D: Delimiter>(mut self) -> Self {
        assert_ne!(D::OPEN, D::CLOSE, "symmetric delimiters can't be nested");
        if !self.pairs.contains(&(D::OPEN, D::CLOSE)) {
            self.pairs.push((D::OPEN, D::CLOSE));
        }
        self
    }

    #[must_use]
    pub fn with_angle_brackets(self) -> Self {
        self.with::<AngleBracket>()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.pairs.iter().copied()
    }

    #[inline]
    pub fn is_open(&self, c: char) -> bool {
        self.closer_of(c).is_some()
    }

    #[inline]
    pub fn is_close(&self, c: char) -> bool {
        self.opener_of(c).is_some()
    }

    #[inline]
    fn opener_of(&self, close: char) -> Option<char> {
        self.pairs.iter().find(|&&(_, c)| c == close).map(|&(open, _)| open)
    }

    #[inline]
    fn closer_of(&self, open: char) -> Option<char> {
        self.pairs.iter().find(|&&(o, _)| o == open).map(|&(_, close)| close)
    }

    pub fn is_balanced(&self, expr: &str) -> bool {
        let mut stack = Stack::new();
        for c in expr.chars() {
            if self.is_open(c) {
                stack.push(c);
            } else if let Some(open) = self.opener_of(c) {
                match stack.pop() {
                    Ok(top) if top == open => {}
                    _ => return false,
                }
            }
        }

        // Anything left over was never closed
        stack.is_empty()
    }

    /// Returns the byte offset of the bracket that pairs with the one at `byte`.
    /// Searches forwards from an opening bracket and backwards from a closing one.
    /// Returns `None` if there is no bracket at `byte`, it is unpaired, or the brackets in
    /// between are mismatched.
    pub fn find_match(&self, text: &str, byte: usize) -> Option<usize> {
        let a = text.get(byte..)?.chars().next()?;

        let mut pending = Stack::new();
        if self.is_open(a) {
            for (i, c) in text[byte..].char_indices() {
                if self.is_open(c) {
                    pending.push(c);
                } else if let Some(open) = self.opener_of(c) {
                    if pending.pop().ok()? != open {
                        return None;
                    }

                    if pending.is_empty() {
                        return Some(byte + i);
                    }
                }
            }
        } else if self.is_close(a) {
            for (i, c) in text[..byte + a.len_utf8()].char_indices().rev() {
                if self.is_close(c) {
                    pending.push(c);
                } else if let Some(close) = self.closer_of(c) {
                    if pending.pop().ok()? != close {
                        return None;
                    }

                    if pending.is_empty() {
                        return Some(i);
                    }
                }
            }
        }

        None
    }
}

/// Returns true if some pair of parentheses in `expr` encloses no arithmetic operator,
/// e.g. `()`, `(a)` or the outer pair of `((a + b))`.
/// A `)` without a matching `(` is an error.
pub fn has_redundant_parentheses(expr: &str) -> Result<bool, EmptyStackError> {
    let mut stack = Stack::new();
    for c in expr.chars() {
        match c {
            ')' => {
                let mut has_operator = false;
                loop {
                    match stack.pop()? {
                        '(' => break,
                        top => has_operator |= matches!(top, '+' | '-' | '*' | '/'),
                    }
                }

                if !has_operator {
                    return Ok(true);
                }
            }
            c if c.is_whitespace() => {}
            c => stack.push(c),
        }
    }

    Ok(false)
}
