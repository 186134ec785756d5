use crate::areas::workspace::Workspace;
use crate::artifacts::comparison::report::ComparisonReport;
use crate::artifacts::comparison::tree_diff::TreeDiffEngine;
use crate::artifacts::core::{CompareOptions, CompareResult};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// A comparison between two validated roots.
///
/// Holds the options for the run and the writer the commands render into,
/// so that tests can capture output without touching stdout.
pub struct Session {
    first: Workspace,
    second: Workspace,
    options: CompareOptions,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Session {
    /// Fails with a validation error if either root is missing or is not a
    /// directory; nothing is traversed before both roots pass.
    pub fn new(
        first: &Path,
        second: &Path,
        options: CompareOptions,
        writer: Box<dyn std::io::Write>,
    ) -> CompareResult<Self> {
        let first = Workspace::open(first)?;
        let second = Workspace::open(second)?;

        Ok(Session {
            first,
            second,
            options,
            writer: RefCell::new(writer),
        })
    }

    pub fn first(&self) -> &Workspace {
        &self.first
    }

    pub fn second(&self) -> &Workspace {
        &self.second
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Runs the tree walk and returns a fresh report.
    pub fn report(&self) -> CompareResult<ComparisonReport> {
        TreeDiffEngine::new(&self.options).compare_workspaces(&self.first, &self.second)
    }
}
