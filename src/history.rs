use std::collections::VecDeque;

/// Two-stack snapshot history.
///
/// `done` always ends with the snapshot matching the live state; `recall`
/// holds snapshots that were undone, most recently undone last. With a
/// capacity set, both stacks drop their oldest entries first.
#[derive(Debug)]
pub struct History<T> {
    done: VecDeque<T>,
    recall: VecDeque<T>,
    capacity: Option<usize>,
    retain_recall: bool,
}

impl<T> History<T> {
    pub fn new() -> History<T> {
        History {
            done: VecDeque::new(),
            recall: VecDeque::new(),
            capacity: None,
            retain_recall: false,
        }
    }

    pub fn with_capacity(capacity: usize) -> History<T> {
        History {
            capacity: Some(capacity.max(1)),
            ..History::new()
        }
    }

    /// Keep undone snapshots around when a new one is taken.
    pub fn retain_recall(mut self, retain: bool) -> History<T> {
        self.retain_recall = retain;
        self
    }

    pub fn snapshot(&mut self, current: T) {
        self.done.push_back(current);
        if !self.retain_recall {
            self.recall.clear();
        }
        self.trim();
    }

    pub fn undo(&mut self) -> Option<&T> {
        if self.done.len() <= 1 {
            return None;
        }

        if let Some(action) = self.done.pop_back() {
            self.recall.push_back(action);
            self.trim();
            self.checkout()
        } else {
            None
        }
    }

    pub fn redo(&mut self) -> Option<&T> {
        if let Some(action) = self.recall.pop_back() {
            self.done.push_back(action);
            self.trim();
            self.checkout()
        } else {
            None
        }
    }

    pub fn checkout(&self) -> Option<&T> {
        self.done.back()
    }

    pub fn clear_done(&mut self) {
        self.done.clear();
    }

    pub fn clear_recall(&mut self) {
        self.recall.clear();
    }

    pub fn done_len(&self) -> usize {
        self.done.len()
    }

    pub fn recall_len(&self) -> usize {
        self.recall.len()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    fn trim(&mut self) {
        if let Some(capacity) = self.capacity {
            while self.done.len() > capacity {
                self.done.pop_front();
            }
            while self.recall.len() > capacity {
                self.recall.pop_front();
            }
        }
    }
}
