//! Classic applications of a last-in-first-out stack.
//! Everything in here is built on top of [`lifo_core::Stack`].

pub mod brackets;
pub mod command;
pub mod config;
pub mod delimiter;
pub mod editor;
pub mod history;
pub mod postfix;
mod reverse;
mod session;

pub use lifo_core::{EmptyStackError, Stack, StackOp};

pub use self::brackets::{has_redundant_parentheses, is_balanced, Brackets};
pub use self::command::Command;
pub use self::config::Config;
pub use self::editor::{Edit, Step, UndoableText};
pub use self::history::History;
pub use self::postfix::{eval_postfix, EvalError, Evaluator, InvalidExpression, Operators};
pub use self::reverse::reverse;
pub use self::session::Session;
