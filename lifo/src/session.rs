use crate::command::Command;
use crate::editor::UndoableText;
use crate::history::History;

/// An [`UndoableText`] and a [`History`] driven by [`Command`]s.
#[derive(Debug, Default)]
pub struct Session {
    editor: UndoableText,
    history: History<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editor(&self) -> &UndoableText {
        &self.editor
    }

    pub fn history(&self) -> &History<String> {
        &self.history
    }

    /// Executes `cmd` and returns the line to report back to the user.
    #[tracing::instrument(skip(self))]
    pub fn execute(&mut self, cmd: Command) -> String {
        match cmd {
            Command::Write(text) => {
                self.editor.write(&text);
                self.editor.text().to_owned()
            }
            Command::Undo => self.editor.undo().to_string(),
            Command::Redo => self.editor.redo().to_string(),
            Command::Print => self.editor.text().to_owned(),
            Command::Visit(location) => {
                self.history.visit(location.into());
                self.history.current().cloned().unwrap_or_default()
            }
            Command::Back => match self.history.back() {
                Some(location) => location.clone(),
                None => "can't go back".to_owned(),
            },
            Command::Forward => match self.history.forward() {
                Some(location) => location.clone(),
                None => "can't go forward".to_owned(),
            },
        }
    }
}
