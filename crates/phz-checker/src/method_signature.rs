//! Rule driver for method-override signature compatibility.

use crate::context::CheckerContext;
use crate::error_reporter;
use crate::overrides::collect_overridden_methods;
use crate::signature_checker::SignatureChecker;
use crate::violations::{MethodRef, SignatureViolation};
use phz_solver::{ClassId, MethodDef};
use tracing::debug;

/// PHP's designated constructor name. Constructors are exempt from
/// substitutability checking.
pub const CONSTRUCTOR_NAME: &str = "__construct";

pub struct MethodSignatureChecker<'a, 'ctx> {
    pub ctx: &'a mut CheckerContext<'ctx>,
}

impl<'a, 'ctx> MethodSignatureChecker<'a, 'ctx> {
    pub fn new(ctx: &'a mut CheckerContext<'ctx>) -> Self {
        Self { ctx }
    }

    /// Check every method `class` declares and push diagnostics for the
    /// violations found.
    pub fn check_class(&mut self, class: ClassId) {
        let graph = self.ctx.graph;
        for method in graph.class(class).methods() {
            self.check_and_report(method);
        }
    }

    /// Collect violations for one method and render them into the context's
    /// diagnostics sink.
    pub fn check_and_report(&mut self, method: &MethodDef) {
        let records = self.check_method(method);
        if !records.is_empty() {
            error_reporter::report_violations(self.ctx, method, &records);
        }
    }

    /// Violation records for one method declaration.
    ///
    /// Exemptions (constructor, private, static unless `report_static`) and
    /// the cannot-compare skips all return an empty list; insufficient
    /// information is never an error.
    pub fn check_method(&self, method: &MethodDef) -> Vec<SignatureViolation> {
        let ctx = &*self.ctx;

        if method.name == ctx.strings.intern(CONSTRUCTOR_NAME) {
            return Vec::new();
        }
        if method.is_static() && !ctx.options.report_static {
            return Vec::new();
        }
        if method.is_private() {
            // Private methods are not inherited for substitution purposes.
            return Vec::new();
        }
        let Some(overriding_sig) = method.single_variant() else {
            // Overloaded declarations have no single signature to compare.
            return Vec::new();
        };

        let class_def = ctx.graph.class(method.class);
        let candidates = collect_overridden_methods(ctx.graph, method.name, class_def);
        debug!(
            method = &*ctx.strings.resolve(method.name),
            candidates = candidates.len(),
            "collected overridden methods"
        );

        let mut records = Vec::new();
        let checker = SignatureChecker::new(ctx.oracle, ctx.options);
        let overriding_ref = MethodRef {
            class: method.class,
            name: method.name,
        };
        for candidate in candidates {
            let Some(overridden_sig) = candidate.single_variant() else {
                continue;
            };
            if !overridden_sig.phpdoc_resolved {
                // Without the docblock pass there is not enough type
                // information to judge the pair.
                continue;
            }
            let overridden_ref = MethodRef {
                class: candidate.class,
                name: candidate.name,
            };
            checker.check(
                overriding_sig,
                overridden_sig,
                overriding_ref,
                overridden_ref,
                &mut records,
            );
        }
        records
    }
}
