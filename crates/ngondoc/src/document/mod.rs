//! Document model: ordered figure collection with linear undo/redo.
//!
//! Purpose
//! - Own the figures of one editing session and every edit applied to them.
//! - Record each insert/remove as an `Action` holding reconstruction
//!   parameters, so undo/redo rebuild figures instead of keeping old instances.
//!
//! Invariants
//! - Indices are positions: `add` accepts `0..=len`, everything else `0..len`.
//! - A successful `add`/`remove` pushes exactly one action and clears redo.
//! - `undo` moves one action undo → redo, `redo` moves one action redo → undo.
//! - `reset` and `load` start with empty history.
//! - Failed operations leave figures and history untouched.
//!
//! Code cross-refs: `factory::create`, `codec::{write_figures, read_figures}`.

mod history;

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use nalgebra::vector;

use crate::codec::{self, DecodeError};
use crate::factory;
use crate::ngon::{FigureSpec, GeomError, Ngon};

pub use history::{Action, ActionKind, History};

/// Coarse error classes, for callers that report or branch on the kind only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    IndexOutOfRange,
    UnknownFigureKind,
    DegenerateFigure,
    Io,
    Malformed,
    EmptyHistory,
}

#[derive(Debug)]
pub enum DocError {
    /// `allow_end` marks the insert range `[0, len]`; otherwise `[0, len)`.
    IndexOutOfRange {
        index: usize,
        len: usize,
        allow_end: bool,
    },
    Figure(GeomError),
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Decode {
        path: PathBuf,
        source: DecodeError,
    },
    NothingToUndo,
    NothingToRedo,
}

impl DocError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DocError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            DocError::Figure(g)
            | DocError::Decode {
                source: DecodeError::Figure { source: g, .. },
                ..
            } => match g {
                GeomError::UnknownFigure { .. } => ErrorKind::UnknownFigureKind,
                GeomError::DegenerateRadius { .. } => ErrorKind::DegenerateFigure,
            },
            DocError::Io { .. }
            | DocError::Decode {
                source: DecodeError::Io(_),
                ..
            } => ErrorKind::Io,
            DocError::Decode { .. } => ErrorKind::Malformed,
            DocError::NothingToUndo | DocError::NothingToRedo => ErrorKind::EmptyHistory,
        }
    }
}

impl fmt::Display for DocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocError::IndexOutOfRange {
                index,
                len,
                allow_end: true,
            } => write!(f, "{index} out of bounds [0, {len}]"),
            DocError::IndexOutOfRange { index, len, .. } => {
                write!(f, "{index} out of bounds [0, {len})")
            }
            DocError::Figure(e) => write!(f, "{e}"),
            DocError::Io { path, source } => {
                write!(f, "cannot open file {}: {source}", path.display())
            }
            DocError::Decode { path, source } => {
                write!(f, "cannot load {}: {source}", path.display())
            }
            DocError::NothingToUndo => f.write_str("nothing to undo"),
            DocError::NothingToRedo => f.write_str("nothing to redo"),
        }
    }
}

impl std::error::Error for DocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocError::Figure(e) => Some(e),
            DocError::Io { source, .. } => Some(source),
            DocError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<GeomError> for DocError {
    fn from(e: GeomError) -> Self {
        DocError::Figure(e)
    }
}

/// Ordered figures plus their edit history.
#[derive(Clone, Debug, Default)]
pub struct Document {
    figures: Vec<Ngon>,
    history: History,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start over: no figures, no history.
    pub fn reset(&mut self) {
        self.figures.clear();
        self.history.clear();
    }

    /// Write all figures to `path` (created or truncated).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocError> {
        let path = path.as_ref();
        let io_err = |source| DocError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        let mut out = BufWriter::new(file);
        codec::write_figures(&mut out, &self.figures).map_err(io_err)
    }

    /// Replace the document with the contents of `path`.
    ///
    /// The file is parsed completely before anything is replaced, so a failed
    /// load keeps the current figures and history.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), DocError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DocError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let figures = codec::read_figures(BufReader::new(file)).map_err(|source| {
            DocError::Decode {
                path: path.to_path_buf(),
                source,
            }
        })?;
        self.reset();
        self.figures = figures;
        Ok(())
    }

    /// Insert a new figure at `index` (`index == len` appends).
    pub fn add(
        &mut self,
        index: usize,
        n: usize,
        ox: f64,
        oy: f64,
        ax: f64,
        ay: f64,
    ) -> Result<(), DocError> {
        self.check_insert(index)?;
        let fig = factory::create(n, ox, oy, ax, ay)?;
        let spec = FigureSpec::new(fig.kind(), vector![ox, oy], vector![ax, ay]);
        self.history.record(Action::added(index, spec));
        self.figures.insert(index, fig);
        Ok(())
    }

    /// Remove the figure at `index` and return it.
    ///
    /// The recorded action snapshots the removed figure's own centroid and
    /// first vertex, so undo rebuilds it from its actual geometry.
    pub fn remove(&mut self, index: usize) -> Result<Ngon, DocError> {
        self.check_index(index)?;
        let spec = self.figures[index].spec();
        self.history.record(Action::removed(index, spec));
        Ok(self.figures.remove(index))
    }

    /// Apply `f` to the figure at `index`.
    pub fn call<R>(&self, index: usize, f: impl FnOnce(&Ngon) -> R) -> Result<R, DocError> {
        self.check_index(index)?;
        Ok(f(&self.figures[index]))
    }

    /// Apply `f` to every figure in order.
    pub fn for_each(&self, f: impl FnMut(&Ngon)) {
        self.figures.iter().for_each(f);
    }

    /// Revert the most recent edit. Returns the action that was reverted.
    pub fn undo(&mut self) -> Result<Action, DocError> {
        let action = self.history.pop_undo().ok_or(DocError::NothingToUndo)?;
        if let Err(e) = self.apply(&action, false) {
            self.history.push_undo(action);
            return Err(e);
        }
        self.history.push_redo(action);
        Ok(action)
    }

    /// Re-apply the most recently undone edit. Returns the action re-applied.
    pub fn redo(&mut self) -> Result<Action, DocError> {
        let action = self.history.pop_redo().ok_or(DocError::NothingToRedo)?;
        if let Err(e) = self.apply(&action, true) {
            self.history.push_redo(action);
            return Err(e);
        }
        self.history.push_undo(action);
        Ok(action)
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Ngon> {
        self.figures.get(index)
    }

    pub fn figures(&self) -> &[Ngon] {
        &self.figures
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ngon> {
        self.figures.iter()
    }

    pub fn can_undo(&self) -> bool {
        self.history.undo_depth() > 0
    }

    pub fn can_redo(&self) -> bool {
        self.history.redo_depth() > 0
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Play `action` forward (`forward == true`) or backward, without touching history.
    fn apply(&mut self, action: &Action, forward: bool) -> Result<(), DocError> {
        let inserts = matches!(
            (action.kind, forward),
            (ActionKind::Added, true) | (ActionKind::Removed, false)
        );
        if inserts {
            self.check_insert(action.index)?;
            let fig = factory::rebuild(&action.figure)?;
            self.figures.insert(action.index, fig);
        } else {
            self.check_index(action.index)?;
            self.figures.remove(action.index);
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), DocError> {
        if index < self.figures.len() {
            Ok(())
        } else {
            Err(DocError::IndexOutOfRange {
                index,
                len: self.figures.len(),
                allow_end: false,
            })
        }
    }

    fn check_insert(&self, index: usize) -> Result<(), DocError> {
        if index <= self.figures.len() {
            Ok(())
        } else {
            Err(DocError::IndexOutOfRange {
                index,
                len: self.figures.len(),
                allow_end: true,
            })
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Ngon;
    type IntoIter = std::slice::Iter<'a, Ngon>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
