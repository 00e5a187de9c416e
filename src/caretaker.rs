use crate::{
    history::History,
    model::{Originator, Snapshot},
    HistoryConfig,
};

use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryState {
    Clean,
    HasUndo,
    HasRedo,
}

/// Undo/redo manager for a single originator.
///
/// Every [`save`](Caretaker::save) pushes a snapshot of the live document.
/// The most recent snapshot on the undo stack is the state the document is
/// in, so [`undo`](Caretaker::undo) needs at least two of them to step back.
#[derive(Debug)]
pub struct Caretaker {
    originator: Originator,
    history: History<Snapshot>,
}

impl Caretaker {
    pub fn new(originator: Originator) -> Caretaker {
        Caretaker {
            originator,
            history: History::new(),
        }
    }

    pub fn with_config(originator: Originator, config: &HistoryConfig) -> Caretaker {
        let history = match config.capacity {
            Some(capacity) => History::with_capacity(capacity),
            None => History::new(),
        };

        Caretaker {
            originator,
            history: history.retain_recall(config.retain_redo_on_save),
        }
    }

    pub fn save(&mut self) {
        self.history.snapshot(self.originator.save());
        debug!(
            undo = self.history.done_len(),
            redo = self.history.recall_len(),
            "saved snapshot"
        );
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.originator.restore(previous);
                debug!(
                    undo = self.history.done_len(),
                    redo = self.history.recall_len(),
                    "undo"
                );
                true
            }
            None => {
                trace!(undo = self.history.done_len(), "nothing to undo");
                false
            }
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(next) => {
                self.originator.restore(next);
                debug!(
                    undo = self.history.done_len(),
                    redo = self.history.recall_len(),
                    "redo"
                );
                true
            }
            None => {
                trace!("nothing to redo");
                false
            }
        }
    }

    pub fn clear_memento_list(&mut self) {
        self.history.clear_done();
        debug!("cleared undo list");
    }

    pub fn clear_redo_list(&mut self) {
        self.history.clear_recall();
        debug!("cleared redo list");
    }

    pub fn state(&self) -> HistoryState {
        if self.history.recall_len() > 0 {
            HistoryState::HasRedo
        } else if self.history.done_len() > 0 {
            HistoryState::HasUndo
        } else {
            HistoryState::Clean
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.done_len() > 1
    }

    pub fn can_redo(&self) -> bool {
        self.history.recall_len() > 0
    }

    pub fn undo_len(&self) -> usize {
        self.history.done_len()
    }

    pub fn redo_len(&self) -> usize {
        self.history.recall_len()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.history.capacity()
    }

    pub fn originator(&self) -> &Originator {
        &self.originator
    }

    pub fn originator_mut(&mut self) -> &mut Originator {
        &mut self.originator
    }

    pub fn into_originator(self) -> Originator {
        self.originator
    }
}
