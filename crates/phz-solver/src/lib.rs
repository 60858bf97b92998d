//! Type model and nominal subtype oracle for phz.
//!
//! The solver owns everything the override checker compares:
//!
//! - **Interned types**: O(1) type equality via `TypeId` comparison
//! - **Class hierarchy snapshot**: parent/interface edges and natively
//!   declared method signatures, as resolved by the host
//! - **Three-valued verdicts**: `Ternary`, since a relation involving
//!   templates cannot always be proven in either direction
//! - **The oracle seam**: `SubtypeOracle`, with `NominalSubtypeChecker` as
//!   the default engine (nominal ancestry, `int`/`float` widening, unions)
//!
//! The checker crate never inspects type structure itself; it resolves
//! effective types (`DeclaredType`) and asks the oracle.

mod declared;
mod format;
mod hierarchy;
mod intern;
mod subtype;
mod ternary;
mod types;

pub use declared::DeclaredType;
pub use format::TypeFormatter;
pub use hierarchy::{
    ClassDef, ClassGraph, ClassId, ClassKind, MethodDef, MethodFlags, ParamSlot, Signature,
    Visibility,
};
pub use intern::TypeInterner;
pub use subtype::{NominalSubtypeChecker, SubtypeOracle};
pub use ternary::Ternary;
pub use types::{IntrinsicKind, TypeId, TypeKey};
