//! Line-oriented command session around a `Document`.
//!
//! Each input line is split on whitespace and lower-cased; the first word and
//! the argument count select a handler from the command table. Handler errors
//! are reported on the error stream and the session keeps going.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use ngondoc::{Document, Ngon, Point};

use crate::help::{BANNER, HELP};
use crate::parse::{figure_from_name, to_double, to_int};

type Handler<W, E> = fn(&mut Session<W, E>, &[String]) -> Result<()>;

/// What a dispatched line turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Empty,
    Done,
    Unknown { name: String, args: usize },
}

pub struct Session<W: Write, E: Write> {
    doc: Document,
    out: W,
    err: E,
    running: bool,
    quiet: bool,
    commands: HashMap<(String, usize), Handler<W, E>>,
}

impl<W: Write, E: Write> Session<W, E> {
    pub fn new(out: W, err: E) -> Self {
        let table: [(&str, usize, Handler<W, E>); 17] = [
            ("quit", 0, Self::quit),
            ("help", 0, Self::help),
            ("new", 0, Self::new_document),
            ("load", 1, Self::load),
            ("save", 1, Self::save),
            ("clear", 0, Self::clear),
            ("area", 0, Self::area_all),
            ("area", 1, Self::area_one),
            ("center", 0, Self::center_all),
            ("center", 1, Self::center_one),
            ("show", 0, Self::show_all),
            ("show", 1, Self::show_one),
            ("smaller", 1, Self::smaller),
            ("remove", 1, Self::remove),
            ("insert", 6, Self::insert),
            ("undo", 0, Self::undo),
            ("redo", 0, Self::redo),
        ];
        let commands = table
            .into_iter()
            .map(|(name, args, handler)| ((name.to_string(), args), handler))
            .collect();
        Self {
            doc: Document::new(),
            out,
            err,
            running: true,
            quiet: false,
            commands,
        }
    }

    /// Suppress banner and prompt (scripted input).
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Read and execute lines until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        if !self.quiet {
            self.out.write_all(BANNER.as_bytes())?;
        }
        let mut lines = input.lines();
        while self.running {
            if !self.quiet {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else { break };
            self.execute_line(&line?)?;
        }
        self.out.flush()
    }

    /// Execute one line, reporting command failures instead of returning them.
    pub fn execute_line(&mut self, line: &str) -> io::Result<()> {
        match self.dispatch(line) {
            Ok(Dispatch::Unknown { name, args }) => {
                tracing::debug!(name, args, "unknown command");
                writeln!(self.out, "unknown command \"{name}\" with {args} arguments")
            }
            Ok(_) => Ok(()),
            Err(e) => {
                match e.downcast_ref::<ngondoc::DocError>() {
                    Some(doc_err) => tracing::warn!(kind = ?doc_err.kind(), "{doc_err}"),
                    None => tracing::warn!("{e}"),
                }
                writeln!(self.err, "{e}")
            }
        }
    }

    /// Parse and run one line; errors from the handler are returned.
    pub fn dispatch(&mut self, line: &str) -> Result<Dispatch> {
        let mut words = line.split_whitespace().map(str::to_lowercase);
        let Some(name) = words.next() else {
            return Ok(Dispatch::Empty);
        };
        let args: Vec<String> = words.collect();
        let key = (name, args.len());
        let Some(handler) = self.commands.get(&key).copied() else {
            let (name, args) = key;
            return Ok(Dispatch::Unknown { name, args });
        };
        tracing::debug!(command = key.0.as_str(), ?args, "dispatch");
        handler(self, &args)?;
        Ok(Dispatch::Done)
    }

    fn quit(&mut self, _: &[String]) -> Result<()> {
        self.running = false;
        Ok(())
    }

    fn help(&mut self, _: &[String]) -> Result<()> {
        self.out.write_all(HELP.as_bytes())?;
        Ok(())
    }

    fn new_document(&mut self, _: &[String]) -> Result<()> {
        self.doc.reset();
        tracing::info!("new document");
        Ok(())
    }

    fn load(&mut self, args: &[String]) -> Result<()> {
        self.doc.load(&args[0])?;
        tracing::info!(path = args[0].as_str(), figures = self.doc.len(), "loaded");
        Ok(())
    }

    fn save(&mut self, args: &[String]) -> Result<()> {
        self.doc.save(&args[0])?;
        tracing::info!(path = args[0].as_str(), figures = self.doc.len(), "saved");
        Ok(())
    }

    /// Remove every figure, last first, so each removal can be undone.
    fn clear(&mut self, _: &[String]) -> Result<()> {
        while let Some(last) = self.doc.len().checked_sub(1) {
            self.doc.remove(last)?;
        }
        Ok(())
    }

    fn area_all(&mut self, _: &[String]) -> Result<()> {
        self.each_line(|f| format!("{}: {}", f.name(), f.area()))
    }

    fn area_one(&mut self, args: &[String]) -> Result<()> {
        self.one_line(&args[0], |f| format!("{}: {}", f.name(), f.area()))
    }

    fn center_all(&mut self, _: &[String]) -> Result<()> {
        self.each_line(|f| format!("{}: {}", f.name(), Point(f.centroid())))
    }

    fn center_one(&mut self, args: &[String]) -> Result<()> {
        self.one_line(&args[0], |f| format!("{}: {}", f.name(), Point(f.centroid())))
    }

    fn show_all(&mut self, _: &[String]) -> Result<()> {
        self.each_line(|f| format!("{}: {}", f.name(), f))
    }

    fn show_one(&mut self, args: &[String]) -> Result<()> {
        self.one_line(&args[0], |f| format!("{}: {}", f.name(), f))
    }

    fn smaller(&mut self, args: &[String]) -> Result<()> {
        let bound = to_double(&args[0])?;
        for (i, f) in self.doc.iter().enumerate() {
            let area = f.area();
            if area < bound {
                writeln!(self.out, "{i} {}: {area}", f.name())?;
            }
        }
        Ok(())
    }

    fn remove(&mut self, args: &[String]) -> Result<()> {
        let index = to_int(&args[0])?;
        let removed = self.doc.remove(index)?;
        tracing::debug!(index, kind = removed.name(), "removed");
        Ok(())
    }

    fn insert(&mut self, args: &[String]) -> Result<()> {
        let index = to_int(&args[0])?;
        let n = figure_from_name(&args[1])?;
        let ox = to_double(&args[2])?;
        let oy = to_double(&args[3])?;
        let ax = to_double(&args[4])?;
        let ay = to_double(&args[5])?;
        self.doc.add(index, n, ox, oy, ax, ay)?;
        tracing::debug!(index, n, "inserted");
        Ok(())
    }

    fn undo(&mut self, _: &[String]) -> Result<()> {
        let action = self.doc.undo()?;
        tracing::debug!(kind = ?action.kind, index = action.index, "undo");
        Ok(())
    }

    fn redo(&mut self, _: &[String]) -> Result<()> {
        let action = self.doc.redo()?;
        tracing::debug!(kind = ?action.kind, index = action.index, "redo");
        Ok(())
    }

    fn each_line(&mut self, render: impl Fn(&Ngon) -> String) -> Result<()> {
        let mut lines = Vec::with_capacity(self.doc.len());
        self.doc.for_each(|f| lines.push(render(f)));
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn one_line(&mut self, index: &str, render: impl FnOnce(&Ngon) -> String) -> Result<()> {
        let index = to_int(index)?;
        let line = self.doc.call(index, render)?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}
