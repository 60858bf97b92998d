//! Shared checker state.

use phz_common::Interner;
use phz_common::diagnostics::Diagnostic;
use phz_solver::{ClassGraph, SubtypeOracle, TypeInterner};

/// Rule configuration, fixed for the lifetime of a checker.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckerOptions {
    /// Also report slots whose verdict is `Maybe` instead of only certain
    /// incompatibilities.
    pub report_maybes: bool,
    /// Check static methods too. They do not take part in dynamic dispatch,
    /// so this is off by default.
    pub report_static: bool,
}

/// Read-only inputs plus the diagnostics sink for one analysis run.
pub struct CheckerContext<'a> {
    pub graph: &'a ClassGraph,
    pub types: &'a TypeInterner,
    pub strings: &'a Interner,
    pub oracle: &'a dyn SubtypeOracle,
    pub options: CheckerOptions,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> CheckerContext<'a> {
    pub fn new(
        graph: &'a ClassGraph,
        types: &'a TypeInterner,
        strings: &'a Interner,
        oracle: &'a dyn SubtypeOracle,
        options: CheckerOptions,
    ) -> Self {
        Self {
            graph,
            types,
            strings,
            oracle,
            options,
            diagnostics: Vec::new(),
        }
    }
}
