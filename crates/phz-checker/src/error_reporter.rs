//! Renders violation records into diagnostics.

use crate::context::CheckerContext;
use crate::violations::{MethodRef, SignatureViolation, ViolationKind};
use phz_common::Interner;
use phz_common::diagnostics::{Diagnostic, diagnostic_codes, diagnostic_messages, format_message};
use phz_solver::{ClassGraph, MethodDef, Ternary, TypeFormatter};

/// Push one diagnostic per record, anchored at the overriding method's span,
/// with a related-information entry pointing at the overridden declaration.
pub fn report_violations(
    ctx: &mut CheckerContext<'_>,
    method: &MethodDef,
    records: &[SignatureViolation],
) {
    let graph = ctx.graph;
    let strings = ctx.strings;
    let formatter = TypeFormatter::new(ctx.types, graph, strings);
    let file = strings.resolve(graph.class(method.class).file);

    for record in records {
        let (code, message) = render_message(strings, graph, &formatter, record);
        let mut diagnostic =
            Diagnostic::error(&*file, method.span.start, method.span.length, message, code);

        if let Some(overridden) = lookup(graph, record.overridden) {
            let related = format_message(diagnostic_messages::OVERRIDDEN_METHOD_DECLARED_HERE, &[
                &strings.resolve(graph.class(record.overridden.class).name),
                &strings.resolve(record.overridden.name),
            ]);
            diagnostic = diagnostic.with_related(
                &*strings.resolve(graph.class(record.overridden.class).file),
                overridden.span.start,
                overridden.span.length,
                related,
            );
        }

        ctx.diagnostics.push(diagnostic);
    }
}

fn lookup(graph: &ClassGraph, method: MethodRef) -> Option<&MethodDef> {
    graph.class(method.class).native_method(method.name)
}

fn render_message(
    strings: &Interner,
    graph: &ClassGraph,
    formatter: &TypeFormatter<'_>,
    record: &SignatureViolation,
) -> (u32, String) {
    let child_type = formatter.format(record.child_type);
    let parent_type = formatter.format(record.parent_type);
    let overriding_class = strings.resolve(graph.class(record.overriding.class).name);
    let overriding_name = strings.resolve(record.overriding.name);
    let overridden_class = strings.resolve(graph.class(record.overridden.class).name);
    let overridden_name = strings.resolve(record.overridden.name);

    match record.kind {
        ViolationKind::ReturnType => {
            let (code, template) = match record.verdict {
                Ternary::Maybe => (
                    diagnostic_codes::RETURN_TYPE_POSSIBLY_NOT_COVARIANT,
                    diagnostic_messages::RETURN_TYPE_POSSIBLY_NOT_COVARIANT,
                ),
                _ => (
                    diagnostic_codes::RETURN_TYPE_NOT_COVARIANT,
                    diagnostic_messages::RETURN_TYPE_NOT_COVARIANT,
                ),
            };
            let message = format_message(template, &[
                &child_type,
                &overriding_class,
                &overriding_name,
                &parent_type,
                &overridden_class,
                &overridden_name,
            ]);
            (code, message)
        }
        ViolationKind::ParameterType {
            index,
            name,
            overridden_name: parent_param,
        } => {
            let (code, template) = match record.verdict {
                Ternary::Maybe => (
                    diagnostic_codes::PARAMETER_TYPE_POSSIBLY_NOT_CONTRAVARIANT,
                    diagnostic_messages::PARAMETER_TYPE_POSSIBLY_NOT_CONTRAVARIANT,
                ),
                _ => (
                    diagnostic_codes::PARAMETER_TYPE_NOT_CONTRAVARIANT,
                    diagnostic_messages::PARAMETER_TYPE_NOT_CONTRAVARIANT,
                ),
            };
            let position = (index + 1).to_string();
            let message = format_message(template, &[
                &position,
                &strings.resolve(name),
                &child_type,
                &overriding_class,
                &overriding_name,
                &position,
                &strings.resolve(parent_param),
                &parent_type,
                &overridden_class,
                &overridden_name,
            ]);
            (code, message)
        }
    }
}
