use crate::{
    caretaker::Caretaker,
    command::EditorCommand,
};

use tracing::info;

pub struct Controller {
    pub caretaker: Caretaker,
    status: String,
}

impl Controller {
    pub fn new(caretaker: Caretaker) -> Controller {
        Controller {
            caretaker,
            status: String::new(),
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.into();
    }

    /// Applies `command` and returns `false` once the session should end.
    pub fn transition(&mut self, command: EditorCommand) -> bool {
        use crate::command::EditorCommand::*;

        match command {
            Save => {
                self.caretaker.save();
                let status = format!("checkpoint {}", self.caretaker.undo_len());
                self.set_status(&status);
            }
            Undo => {
                if self.caretaker.undo() {
                    self.show();
                } else {
                    self.set_status("already at oldest change");
                }
            }
            Redo => {
                if self.caretaker.redo() {
                    self.show();
                } else {
                    self.set_status("already at newest change");
                }
            }
            ClearUndo => {
                self.caretaker.clear_memento_list();
                self.set_status("undo list cleared");
            }
            ClearRedo => {
                self.caretaker.clear_redo_list();
                self.set_status("redo list cleared");
            }
            SetXml(xml) => {
                self.caretaker.originator_mut().state_mut().set_xml(xml);
                self.show();
            }
            SetPath(path) => {
                self.caretaker.originator_mut().state_mut().set_path(path);
                self.show();
            }
            SetConfiguration(configuration) => {
                self.caretaker
                    .originator_mut()
                    .state_mut()
                    .set_configuration(configuration);
                self.show();
            }
            Show => self.show(),
            Quit => {
                info!(path = %self.caretaker.originator().state().path, "session closed");
                return false;
            }
        }

        true
    }

    fn show(&mut self) {
        let status = {
            let doc = self.caretaker.originator().state();
            format!(
                "\"{}\"{} [{} undo, {} redo] {} {}",
                doc.path,
                if doc.saved { "" } else { " +" },
                self.caretaker.undo_len(),
                self.caretaker.redo_len(),
                doc.configuration,
                doc.xml,
            )
        };
        self.set_status(&status);
    }
}
