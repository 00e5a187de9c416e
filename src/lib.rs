//! Undo/redo history for flow documents.
//!
//! An [`Originator`] owns the live [`Document`] and turns it into
//! [`Snapshot`]s; a [`Caretaker`] keeps the undo and redo stacks of those
//! snapshots and drives the originator back and forth.

pub mod caretaker;
pub mod command;
pub mod controller;
pub mod model;

mod history;

pub use crate::caretaker::{Caretaker, HistoryState};
pub use crate::model::{Document, Originator, Snapshot};

use serde_derive::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid history configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("history capacity must be at least 1")]
    ZeroCapacity,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of snapshots per stack. Unbounded when `None`.
    pub capacity: Option<usize>,
    /// Keep the redo stack when a new snapshot is saved.
    pub retain_redo_on_save: bool,
}

impl HistoryConfig {
    pub fn from_json(json: &str) -> Result<HistoryConfig, ConfigError> {
        let config: HistoryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.capacity {
            Some(0) => Err(ConfigError::ZeroCapacity),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = HistoryConfig::from_json("{}").unwrap();
        assert_eq!(config, HistoryConfig::default());
        assert_eq!(config.capacity, None);
        assert!(!config.retain_redo_on_save);
    }

    #[test]
    fn test_config_fields() {
        let config =
            HistoryConfig::from_json(r#"{"capacity": 20, "retain_redo_on_save": true}"#).unwrap();
        assert_eq!(config.capacity, Some(20));
        assert!(config.retain_redo_on_save);
    }

    #[test]
    fn test_config_errors() {
        match HistoryConfig::from_json(r#"{"capacity": 0}"#) {
            Err(ConfigError::ZeroCapacity) => {}
            other => panic!("unexpected {:?}", other),
        }

        match HistoryConfig::from_json("capacity = 3") {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_editing_session() {
        let doc = Document::new("a", "<a/>").with_configuration(serde_json::json!({}));
        let mut caretaker = Caretaker::new(Originator::new(doc));

        caretaker.save();
        caretaker.originator_mut().state_mut().xml = "<b/>".into();
        caretaker.save();

        caretaker.undo();
        assert_eq!(caretaker.originator().state().xml, "<a/>");

        caretaker.redo();
        assert_eq!(caretaker.originator().state().xml, "<b/>");
    }
}
