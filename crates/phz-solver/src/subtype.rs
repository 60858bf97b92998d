//! Three-valued nominal subtype checking.
//!
//! The checker crate depends only on the `SubtypeOracle` seam, so a host can
//! substitute a richer engine. `NominalSubtypeChecker` is the default
//! implementation over the class graph: nominal ancestry for objects, scalar
//! widening for `int`/`float`, union distribution, and `Maybe` wherever a
//! template makes the relation undecidable.

use crate::hierarchy::ClassGraph;
use crate::intern::TypeInterner;
use crate::ternary::Ternary;
use crate::types::{IntrinsicKind, TypeId, TypeKey};

/// Supertype query seam.
pub trait SubtypeOracle {
    /// Whether `sup` accepts every value `sub` can produce.
    fn is_supertype_of(&self, sup: TypeId, sub: TypeId) -> Ternary;
}

pub struct NominalSubtypeChecker<'a> {
    types: &'a TypeInterner,
    graph: &'a ClassGraph,
}

impl<'a> NominalSubtypeChecker<'a> {
    pub fn new(types: &'a TypeInterner, graph: &'a ClassGraph) -> Self {
        Self { types, graph }
    }

    fn check(&self, sup: TypeId, sub: TypeId) -> Ternary {
        if sup == sub {
            return Ternary::True;
        }
        // Error types relate to everything so one resolution failure does
        // not cascade into follow-on diagnostics.
        if sup == TypeId::ERROR || sub == TypeId::ERROR {
            return Ternary::True;
        }
        if sup == TypeId::MIXED {
            return Ternary::True;
        }
        if sub == TypeId::NEVER {
            return Ternary::True;
        }
        // A mixed value may or may not inhabit the narrower target.
        if sub == TypeId::MIXED {
            return Ternary::Maybe;
        }
        // void is not a value type; it relates only to itself and mixed.
        if sup == TypeId::VOID || sub == TypeId::VOID {
            return Ternary::False;
        }

        let (Some(sup_key), Some(sub_key)) = (self.types.lookup(sup), self.types.lookup(sub))
        else {
            return Ternary::Maybe;
        };

        // Union on the sub side: every member must be accepted.
        if let TypeKey::Union(members) = &sub_key {
            return members
                .iter()
                .fold(Ternary::True, |acc, &member| acc.and(self.check(sup, member)));
        }
        // Union on the super side: one accepting member suffices.
        if let TypeKey::Union(members) = &sup_key {
            return members
                .iter()
                .fold(Ternary::False, |acc, &member| acc.or(self.check(member, sub)));
        }

        match (sup_key, sub_key) {
            // Equal templates were handled by the id fast path; any other
            // pairing involving one is undecidable here.
            (TypeKey::TypeParam(_), _) | (_, TypeKey::TypeParam(_)) => Ternary::Maybe,
            (TypeKey::Class(sup_class), TypeKey::Class(sub_class)) => {
                if self.graph.is_derived_from(sub_class, sup_class) {
                    Ternary::True
                } else {
                    Ternary::False
                }
            }
            // int widens to float.
            (
                TypeKey::Intrinsic(IntrinsicKind::Float),
                TypeKey::Intrinsic(IntrinsicKind::Int),
            ) => Ternary::True,
            _ => Ternary::False,
        }
    }
}

impl SubtypeOracle for NominalSubtypeChecker<'_> {
    fn is_supertype_of(&self, sup: TypeId, sub: TypeId) -> Ternary {
        self.check(sup, sub)
    }
}

#[cfg(test)]
#[path = "tests/subtype_tests.rs"]
mod tests;
