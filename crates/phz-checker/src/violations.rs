//! Structured violation records.

use phz_common::Atom;
use phz_solver::{ClassId, Ternary, TypeId};

/// Identity of one side of an override pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MethodRef {
    pub class: ClassId,
    pub name: Atom,
}

/// Which slot of the signature was violated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    ReturnType,
    ParameterType {
        /// 0-based slot index; rendered 1-based in messages.
        index: usize,
        name: Atom,
        overridden_name: Atom,
    },
}

/// One incompatible (or possibly incompatible) slot.
///
/// Carries everything a renderer needs without re-deriving: both method
/// identities, the slot, the two effective types and the verdict that
/// triggered the record (`False`, or `Maybe` under `report_maybes`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SignatureViolation {
    pub kind: ViolationKind,
    pub verdict: Ternary,
    pub overriding: MethodRef,
    pub overridden: MethodRef,
    /// Effective type on the overriding side of the violated slot.
    pub child_type: TypeId,
    /// Effective type on the overridden side of the violated slot.
    pub parent_type: TypeId,
}
