use imagecost_core::TokenField;
use thiserror::Error;

use super::constants::*;

/// One user action from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    SetSnippet(String),
    /// Empty the snippet and all three fields.
    ClearAll,
    SetField { field: TokenField, raw: String },
    ShowExample,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command `{0}` (type `help` for a list)")]
    UnknownCommand(String),
}

/// Turns input lines into commands. Holds the lines of a multi-line
/// `paste` block until its terminator arrives.
#[derive(Debug, Default)]
pub struct LineReader {
    block: Option<Vec<String>>,
}

impl LineReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_block(&self) -> bool {
        self.block.is_some()
    }

    /// Closes an unterminated `paste` block at end of input, yielding its
    /// lines as the snippet.
    pub fn finish(&mut self) -> Option<UserCommand> {
        self.block
            .take()
            .map(|lines| UserCommand::SetSnippet(lines.join("\n")))
    }

    /// Returns `Ok(None)` for blank lines and for lines absorbed into a block.
    pub fn feed(&mut self, line: &str) -> Result<Option<UserCommand>, InputError> {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(block) = self.block.as_mut() {
            if line.trim() == BLOCK_TERMINATOR {
                let lines = self.block.take().unwrap_or_default();
                return Ok(Some(UserCommand::SetSnippet(lines.join("\n"))));
            }
            block.push(line.to_string());
            return Ok(None);
        }

        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (trimmed, ""),
        };

        let command = match keyword {
            CMD_SNIPPET | CMD_PASTE if rest.is_empty() => {
                self.block = Some(Vec::new());
                return Ok(None);
            }
            CMD_SNIPPET | CMD_PASTE => UserCommand::SetSnippet(rest.to_string()),
            CMD_CLEAR => UserCommand::ClearAll,
            CMD_TEXT => field(TokenField::Text, rest),
            CMD_IMAGE => field(TokenField::Image, rest),
            CMD_OUTPUT => field(TokenField::Output, rest),
            CMD_EXAMPLE => UserCommand::ShowExample,
            CMD_SHOW => UserCommand::Show,
            CMD_HELP => UserCommand::Help,
            CMD_QUIT | CMD_EXIT => UserCommand::Quit,
            other => return Err(InputError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn field(field: TokenField, raw: &str) -> UserCommand {
    UserCommand::SetField {
        field,
        raw: raw.to_string(),
    }
}
