use std::fmt;
use std::str::FromStr;

use chumsky::Parser;

/// A single line of a script that drives a [`crate::Session`].
#[derive(Clone, PartialEq, Eq)]
pub enum Command {
    /// Append the text following `write ` verbatim.
    Write(String),
    Undo,
    Redo,
    Visit(Word),
    Back,
    Forward,
    Print,
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Write(text) => write!(f, "write {text:?}"),
            Command::Undo => write!(f, "undo"),
            Command::Redo => write!(f, "redo"),
            Command::Visit(location) => write!(f, "visit {location}"),
            Command::Back => write!(f, "back"),
            Command::Forward => write!(f, "forward"),
            Command::Print => write!(f, "print"),
        }
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        command().parse(s).map_err(|errs| {
            errs.into_iter().map(|err| err.to_string()).collect::<Vec<_>>().join("; ")
        })
    }
}

fn command() -> impl Parser<char, Command, Error = chumsky::error::Simple<char>> {
    use chumsky::prelude::*;
    use chumsky::text::keyword;

    let space = filter(|c: &char| c.is_whitespace()).repeated().at_least(1);

    // Everything after the single separating space is the text, including any further whitespace.
    let write = keyword("write")
        .ignore_then(just(' '))
        .ignore_then(any().repeated().at_least(1).collect::<String>())
        .map(Command::Write);

    let visit = keyword("visit")
        .ignore_then(space)
        .ignore_then(filter(|c: &char| !c.is_whitespace()).repeated().at_least(1).collect::<String>())
        .map(|location| Command::Visit(Word::from(location)));

    let nullary = choice((
        keyword("undo").to(Command::Undo),
        keyword("redo").to(Command::Redo),
        keyword("back").to(Command::Back),
        keyword("forward").to(Command::Forward),
        keyword("print").to(Command::Print),
    ));

    choice((write, visit, nullary.padded())).then_ignore(end())
}

/// A single word in a command, without whitespace.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<String> for Word {
    fn from(s: String) -> Self {
        assert!(!s.is_empty() && s.chars().all(|c| !c.is_whitespace()));
        Word(s)
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        s.to_string().into()
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}
