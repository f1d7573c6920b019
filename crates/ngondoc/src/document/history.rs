//! Undo/redo log: two stacks of recorded edits.

use crate::ngon::FigureSpec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Added,
    Removed,
}

/// One reversible edit: what happened, where, and how to rebuild the figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Action {
    pub kind: ActionKind,
    pub index: usize,
    pub figure: FigureSpec,
}

impl Action {
    pub fn added(index: usize, figure: FigureSpec) -> Self {
        Self {
            kind: ActionKind::Added,
            index,
            figure,
        }
    }

    pub fn removed(index: usize, figure: FigureSpec) -> Self {
        Self {
            kind: ActionKind::Removed,
            index,
            figure,
        }
    }
}

/// Undo and redo stacks (most recent last).
#[derive(Clone, Debug, Default)]
pub struct History {
    undo: Vec<Action>,
    redo: Vec<Action>,
}

impl History {
    /// Record a fresh edit. Invalidates everything that could be redone.
    pub fn record(&mut self, action: Action) {
        self.redo.clear();
        self.undo.push(action);
    }

    pub fn pop_undo(&mut self) -> Option<Action> {
        self.undo.pop()
    }

    pub fn pop_redo(&mut self) -> Option<Action> {
        self.redo.pop()
    }

    pub fn push_undo(&mut self, action: Action) {
        self.undo.push(action);
    }

    pub fn push_redo(&mut self, action: Action) {
        self.redo.push(action);
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
