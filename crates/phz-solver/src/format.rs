//! Type display for diagnostics.

use crate::hierarchy::ClassGraph;
use crate::intern::TypeInterner;
use crate::types::{IntrinsicKind, TypeId, TypeKey};
use phz_common::Interner;

/// Renders `TypeId`s the way PHP source spells them (`int|string`,
/// `Collection`).
pub struct TypeFormatter<'a> {
    types: &'a TypeInterner,
    graph: &'a ClassGraph,
    strings: &'a Interner,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(types: &'a TypeInterner, graph: &'a ClassGraph, strings: &'a Interner) -> Self {
        Self {
            types,
            graph,
            strings,
        }
    }

    pub fn format(&self, ty: TypeId) -> String {
        match self.types.lookup(ty) {
            Some(TypeKey::Intrinsic(kind)) => kind.as_str().to_string(),
            Some(TypeKey::Class(id)) => self.strings.resolve(self.graph.class(id).name).to_string(),
            Some(TypeKey::TypeParam(name)) => self.strings.resolve(name).to_string(),
            Some(TypeKey::Union(members)) => members
                .iter()
                .map(|&member| self.format(member))
                .collect::<Vec<_>>()
                .join("|"),
            None => IntrinsicKind::Error.as_str().to_string(),
        }
    }
}
