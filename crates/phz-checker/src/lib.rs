//! Method-override compatibility checking for phz.
//!
//! For every method a class declares, this crate compares its signature with
//! the same-name methods of the parent class and the directly implemented
//! interfaces: return types must be covariant, parameter types
//! contravariant. Verdicts come from the solver's three-valued oracle, and
//! each violated slot becomes one structured record.
//!
//! Modules:
//! - `context` - shared per-run state and options
//! - `overrides` - overridden-candidate collection
//! - `signature_checker` - slot-by-slot compatibility verdicts
//! - `method_signature` - the rule driver
//! - `violations` - structured violation records
//! - `error_reporter` - violation records to diagnostics

pub mod context;
pub mod error_reporter;
pub mod method_signature;
pub mod overrides;
pub mod signature_checker;
pub mod violations;

pub use context::{CheckerContext, CheckerOptions};
pub use method_signature::{CONSTRUCTOR_NAME, MethodSignatureChecker};
pub use overrides::collect_overridden_methods;
pub use signature_checker::SignatureChecker;
pub use violations::{MethodRef, SignatureViolation, ViolationKind};
