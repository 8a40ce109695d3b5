/// An asymmetric pair of delimiters such as `(` and `)`.
pub trait Delimiter {
    const OPEN: char;
    const CLOSE: char;
}

pub struct Paren;

impl Delimiter for Paren {
    const OPEN: char = '(';
    const CLOSE: char = ')';
}

pub struct Bracket;

impl Delimiter for Bracket {
    const OPEN: char = '[';
    const CLOSE: char = ']';
}

pub struct Brace;

impl Delimiter for Brace {
    const OPEN: char = '{';
    const CLOSE: char = '}';
}

pub struct AngleBracket;

impl Delimiter for AngleBracket {
    const OPEN: char = '<';
    const CLOSE: char = '>';
}
