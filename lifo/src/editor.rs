use std::fmt;

use lifo_core::Stack;

/// A single reversible change to an [`UndoableText`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// `len` bytes were appended to the end of the text.
    Add { len: usize },
    /// `content` was removed from the end of the text.
    Remove { content: String },
}

/// The outcome of an undo or redo.
/// Having nothing to undo or redo is a normal outcome and not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    Applied(&'a str),
    NothingToUndo,
    NothingToRedo,
}

impl<'a> Step<'a> {
    /// The text after the step, if anything happened.
    #[inline]
    pub fn text(&self) -> Option<&'a str> {
        match *self {
            Step::Applied(text) => Some(text),
            Step::NothingToUndo | Step::NothingToRedo => None,
        }
    }

    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, Step::Applied(_))
    }
}

impl fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Applied(text) => write!(f, "{text}"),
            Step::NothingToUndo => write!(f, "nothing to undo"),
            Step::NothingToRedo => write!(f, "nothing to redo"),
        }
    }
}

/// An append-only text buffer with linear undo and redo.
#[derive(Debug, Default)]
pub struct UndoableText {
    text: String,
    undo_stack: Stack<Edit>,
    redo_stack: Stack<Edit>,
}

impl UndoableText {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Append `text`. Any undone edits can no longer be redone.
    pub fn write(&mut self, text: &str) {
        self.text.push_str(text);
        self.undo_stack.push(Edit::Add { len: text.len() });
        self.redo_stack.clear();
    }

    pub fn undo(&mut self) -> Step<'_> {
        tracing::debug!("undo: {:#?}", self.undo_stack);

        let Ok(edit) = self.undo_stack.pop() else { return Step::NothingToUndo };
        let inversion = self.apply_inverse(edit);
        self.redo_stack.push(inversion);
        Step::Applied(&self.text)
    }

    pub fn redo(&mut self) -> Step<'_> {
        tracing::debug!("redo: {:#?}", self.redo_stack);

        let Ok(edit) = self.redo_stack.pop() else { return Step::NothingToRedo };
        let inversion = self.apply_inverse(edit);
        self.undo_stack.push(inversion);
        Step::Applied(&self.text)
    }

    /// Reverts `edit` and returns the edit that would revert it again.
    fn apply_inverse(&mut self, edit: Edit) -> Edit {
        match edit {
            Edit::Add { len } => {
                // Only whole appended strings are recorded so this is always a char boundary
                let content = self.text.split_off(self.text.len() - len);
                Edit::Remove { content }
            }
            Edit::Remove { content } => {
                self.text.push_str(&content);
                Edit::Add { len: content.len() }
            }
        }
    }
}
