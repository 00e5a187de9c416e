use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no such command: {0}")]
    Unknown(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid configuration: {0}")]
    Configuration(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub enum EditorCommand {
    Save,
    Undo,
    Redo,
    ClearUndo,
    ClearRedo,
    SetXml(String),
    SetPath(String),
    SetConfiguration(Value),
    Show,
    Quit,
}

impl EditorCommand {
    pub fn parse(line: &str) -> Result<EditorCommand, CommandError> {
        use self::EditorCommand::*;

        let line = line.trim();
        let (cmd, arg) = match line.find(char::is_whitespace) {
            Some(split) => (&line[..split], line[split..].trim()),
            None => (line, ""),
        };

        match cmd {
            "w" | "save" => Ok(Save),
            "u" | "undo" => Ok(Undo),
            "r" | "redo" => Ok(Redo),
            "cu" => Ok(ClearUndo),
            "cr" => Ok(ClearRedo),
            "p" | "show" => Ok(Show),
            "q" | "quit" => Ok(Quit),
            // xml may legitimately be empty; path may not.
            "xml" => Ok(SetXml(arg.into())),
            "path" if arg.is_empty() => Err(CommandError::MissingArgument("path")),
            "path" => Ok(SetPath(arg.into())),
            "config" if arg.is_empty() => Err(CommandError::MissingArgument("config")),
            "config" => Ok(SetConfiguration(serde_json::from_str(arg)?)),
            other => Err(CommandError::Unknown(other.into())),
        }
    }
}
