//! Slot-by-slot signature compatibility.

use crate::context::CheckerOptions;
use crate::violations::{MethodRef, SignatureViolation, ViolationKind};
use phz_solver::{Signature, SubtypeOracle, Ternary, TypeId};

/// Compares one overriding signature against one overridden signature.
///
/// Return types must be covariant, parameter types contravariant. Every slot
/// is evaluated independently; nothing short-circuits, so one comparison can
/// yield several records.
pub struct SignatureChecker<'a> {
    oracle: &'a dyn SubtypeOracle,
    options: CheckerOptions,
}

impl<'a> SignatureChecker<'a> {
    pub fn new(oracle: &'a dyn SubtypeOracle, options: CheckerOptions) -> Self {
        Self { oracle, options }
    }

    pub fn check(
        &self,
        overriding: &Signature,
        overridden: &Signature,
        overriding_ref: MethodRef,
        overridden_ref: MethodRef,
        out: &mut Vec<SignatureViolation>,
    ) {
        self.check_return(overriding, overridden, overriding_ref, overridden_ref, out);
        self.check_parameters(overriding, overridden, overriding_ref, overridden_ref, out);
    }

    fn check_return(
        &self,
        overriding: &Signature,
        overridden: &Signature,
        overriding_ref: MethodRef,
        overridden_ref: MethodRef,
        out: &mut Vec<SignatureViolation>,
    ) {
        let child = overriding.return_type.effective();
        let parent = overridden.return_type.effective();

        let verdict = if child == TypeId::VOID && parent == TypeId::MIXED {
            // Adding an explicit void return where the ancestor declared
            // nothing is always allowed.
            Ternary::True
        } else if parent == TypeId::VOID {
            // A void ancestor imposes no constraint on the override: callers
            // of the ancestor ignore the result either way.
            Ternary::True
        } else {
            self.oracle.is_supertype_of(parent, child)
        };

        let record = SignatureViolation {
            kind: ViolationKind::ReturnType,
            verdict,
            overriding: overriding_ref,
            overridden: overridden_ref,
            child_type: child,
            parent_type: parent,
        };
        match verdict {
            Ternary::True => {}
            Ternary::False => out.push(record),
            Ternary::Maybe => {
                if self.options.report_maybes {
                    out.push(record);
                }
            }
        }
    }

    fn check_parameters(
        &self,
        overriding: &Signature,
        overridden: &Signature,
        overriding_ref: MethodRef,
        overridden_ref: MethodRef,
        out: &mut Vec<SignatureViolation>,
    ) {
        // Surplus parameters on either side are not compared; arity rules
        // are a separate concern.
        let shared = overriding.params.len().min(overridden.params.len());
        for index in 0..shared {
            let child_slot = &overriding.params[index];
            let parent_slot = &overridden.params[index];
            let child = child_slot.ty.effective();
            let parent = parent_slot.ty.effective();

            // Contravariance: the override must accept at least everything
            // the ancestor accepted.
            let verdict = self.oracle.is_supertype_of(child, parent);

            let record = SignatureViolation {
                kind: ViolationKind::ParameterType {
                    index,
                    name: child_slot.name,
                    overridden_name: parent_slot.name,
                },
                verdict,
                overriding: overriding_ref,
                overridden: overridden_ref,
                child_type: child,
                parent_type: parent,
            };
            match verdict {
                Ternary::True => {}
                Ternary::False => out.push(record),
                Ternary::Maybe => {
                    if self.options.report_maybes {
                        out.push(record);
                    }
                }
            }
        }
    }
}
