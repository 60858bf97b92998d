//! Overridden-method candidate collection.

use phz_common::Atom;
use phz_solver::{ClassDef, ClassGraph, MethodDef, Visibility};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Methods a declaration of `method_name` in `class` overrides: the parent
/// class declaration (unless private there — private methods do not take
/// part in substitution), then one per directly implemented interface that
/// declares the name.
///
/// Order is parent first, then interfaces in declaration order, so
/// diagnostics are reproducible. Grandparents and superinterfaces are not
/// walked: each ancestor was compared against its own ancestors when it was
/// itself analyzed, so one hop per axis covers the hierarchy.
pub fn collect_overridden_methods<'g>(
    graph: &'g ClassGraph,
    method_name: Atom,
    class: &ClassDef,
) -> SmallVec<[&'g MethodDef; 4]> {
    let mut found = SmallVec::new();

    if let Some(parent_id) = class.parent
        && let Some(method) = graph.class(parent_id).native_method(method_name)
        && method.visibility != Visibility::Private
    {
        found.push(method);
    }

    // A repeated entry in an implements list contributes once.
    let mut seen = FxHashSet::default();
    for &interface_id in &class.interfaces {
        if !seen.insert(interface_id) {
            continue;
        }
        if let Some(method) = graph.class(interface_id).native_method(method_name) {
            found.push(method);
        }
    }

    found
}
