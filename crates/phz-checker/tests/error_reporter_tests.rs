//! Diagnostic rendering: message text, codes, spans, related information
//! and JSON output.

use phz_checker::{CheckerContext, CheckerOptions, MethodSignatureChecker};
use phz_common::diagnostics::{Diagnostic, diagnostic_codes};
use phz_common::{Interner, Span};
use phz_solver::{
    ClassGraph, ClassId, ClassKind, DeclaredType, MethodDef, MethodFlags, NominalSubtypeChecker,
    ParamSlot, Signature, TypeId, TypeInterner, Visibility,
};

struct Fixture {
    strings: Interner,
    types: TypeInterner,
    graph: ClassGraph,
    base: ClassId,
    derived: ClassId,
}

fn fixture() -> Fixture {
    let strings = Interner::new();
    let types = TypeInterner::new();
    let mut graph = ClassGraph::new();

    let base = graph.add_class(
        strings.intern("Base"),
        ClassKind::Class,
        strings.intern("src/Base.php"),
        None,
        vec![],
    );
    let derived = graph.add_class(
        strings.intern("Derived"),
        ClassKind::Class,
        strings.intern("src/Derived.php"),
        Some(base),
        vec![],
    );

    Fixture {
        strings,
        types,
        graph,
        base,
        derived,
    }
}

impl Fixture {
    fn add_method(
        &mut self,
        class: ClassId,
        name: &str,
        span: Span,
        params: &[(&str, DeclaredType)],
        ret: DeclaredType,
    ) {
        let params = params
            .iter()
            .map(|&(param, ty)| ParamSlot::new(self.strings.intern(param), ty))
            .collect();
        let method = MethodDef::new(
            self.strings.intern(name),
            Visibility::Public,
            MethodFlags::empty(),
            vec![Signature::new(params, ret)],
        )
        .with_span(span);
        self.graph.add_method(class, method);
    }

    fn report(&self, name: &str, options: CheckerOptions) -> Vec<Diagnostic> {
        let oracle = NominalSubtypeChecker::new(&self.types, &self.graph);
        let mut ctx = CheckerContext::new(&self.graph, &self.types, &self.strings, &oracle, options);
        let mut checker = MethodSignatureChecker::new(&mut ctx);
        let method = self
            .graph
            .class(self.derived)
            .native_method(self.strings.intern(name))
            .expect("method registered");
        checker.check_and_report(method);
        ctx.diagnostics
    }
}

#[test]
fn test_return_violation_message_and_span() {
    let mut f = fixture();
    f.add_method(
        f.base,
        "render",
        Span::new(40, 12),
        &[],
        DeclaredType::native(TypeId::INT),
    );
    f.add_method(
        f.derived,
        "render",
        Span::new(100, 18),
        &[],
        DeclaredType::native(TypeId::STRING),
    );

    let diagnostics = f.report("render", CheckerOptions::default());
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.code, diagnostic_codes::RETURN_TYPE_NOT_COVARIANT);
    assert_eq!(
        diagnostic.message_text,
        "Return type string of method Derived::render() is not covariant with return type int of method Base::render()."
    );
    assert_eq!(diagnostic.file, "src/Derived.php");
    assert_eq!(diagnostic.start, 100);
    assert_eq!(diagnostic.length, 18);
}

#[test]
fn test_related_information_points_at_overridden_declaration() {
    let mut f = fixture();
    f.add_method(
        f.base,
        "render",
        Span::new(40, 12),
        &[],
        DeclaredType::native(TypeId::INT),
    );
    f.add_method(
        f.derived,
        "render",
        Span::new(100, 18),
        &[],
        DeclaredType::native(TypeId::STRING),
    );

    let diagnostics = f.report("render", CheckerOptions::default());
    let related = &diagnostics[0].related_information;
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].file, "src/Base.php");
    assert_eq!(related[0].start, 40);
    assert_eq!(related[0].length, 12);
    assert_eq!(
        related[0].message_text,
        "Overridden method Base::render() is declared here."
    );
}

#[test]
fn test_parameter_violation_message_is_one_based() {
    let mut f = fixture();
    f.add_method(
        f.base,
        "process",
        Span::ZERO,
        &[
            ("first", DeclaredType::native(TypeId::INT)),
            ("input", DeclaredType::native(TypeId::FLOAT)),
        ],
        DeclaredType::UNSPECIFIED,
    );
    f.add_method(
        f.derived,
        "process",
        Span::ZERO,
        &[
            ("first", DeclaredType::native(TypeId::INT)),
            ("value", DeclaredType::native(TypeId::INT)),
        ],
        DeclaredType::UNSPECIFIED,
    );

    let diagnostics = f.report("process", CheckerOptions::default());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].code,
        diagnostic_codes::PARAMETER_TYPE_NOT_CONTRAVARIANT
    );
    assert_eq!(
        diagnostics[0].message_text,
        "Parameter #2 $value (int) of method Derived::process() is not contravariant with parameter #2 $input (float) of method Base::process()."
    );
}

#[test]
fn test_maybe_verdicts_use_possibly_wording() {
    let mut f = fixture();
    let template = f.types.type_param(f.strings.intern("T"));
    f.add_method(
        f.base,
        "render",
        Span::ZERO,
        &[],
        DeclaredType::native(TypeId::INT),
    );
    f.add_method(
        f.derived,
        "render",
        Span::ZERO,
        &[],
        DeclaredType::native(template),
    );

    assert!(f.report("render", CheckerOptions::default()).is_empty());

    let diagnostics = f.report("render", CheckerOptions {
        report_maybes: true,
        ..CheckerOptions::default()
    });
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].code,
        diagnostic_codes::RETURN_TYPE_POSSIBLY_NOT_COVARIANT
    );
    assert_eq!(
        diagnostics[0].message_text,
        "Return type T of method Derived::render() is possibly not covariant with return type int of method Base::render()."
    );
}

#[test]
fn test_union_types_render_with_pipes() {
    let mut f = fixture();
    let int_or_string = f.types.union(vec![TypeId::INT, TypeId::STRING]);
    f.add_method(
        f.base,
        "render",
        Span::ZERO,
        &[],
        DeclaredType::native(int_or_string),
    );
    f.add_method(
        f.derived,
        "render",
        Span::ZERO,
        &[],
        DeclaredType::native(TypeId::BOOL),
    );

    let diagnostics = f.report("render", CheckerOptions::default());
    assert_eq!(diagnostics.len(), 1);
    assert!(
        diagnostics[0].message_text.contains("int|string"),
        "got: {}",
        diagnostics[0].message_text
    );
}

#[test]
fn test_diagnostics_serialize_to_json() {
    let mut f = fixture();
    f.add_method(
        f.base,
        "render",
        Span::new(40, 12),
        &[],
        DeclaredType::native(TypeId::INT),
    );
    f.add_method(
        f.derived,
        "render",
        Span::new(100, 18),
        &[],
        DeclaredType::native(TypeId::STRING),
    );

    let diagnostics = f.report("render", CheckerOptions::default());
    let json = serde_json::to_value(&diagnostics).expect("diagnostics serialize");
    assert_eq!(json[0]["file"], "src/Derived.php");
    assert_eq!(json[0]["category"], "Error");
    assert!(
        json[0]["message_text"]
            .as_str()
            .expect("message is a string")
            .contains("not covariant")
    );
}
