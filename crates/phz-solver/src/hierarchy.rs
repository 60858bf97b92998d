//! Class hierarchy snapshot.
//!
//! A read-only view of the classes the host resolved: names, parent and
//! interface edges, and natively declared method signatures. The graph owns
//! no analysis state; it is built once per run and only queried afterwards.
//!
//! Method lookup here is deliberately restricted to methods a class declares
//! itself. Inherited members are a checker concern, not a graph concern.

use crate::declared::DeclaredType;
use bitflags::bitflags;
use indexmap::IndexMap;
use phz_common::{Atom, Span};
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

bitflags! {
    /// Method modifier flags.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct MethodFlags: u8 {
        const STATIC = 1 << 0;
        const ABSTRACT = 1 << 1;
        const FINAL = 1 << 2;
    }
}

/// One parameter slot. Position in the signature is significant; names are
/// carried for diagnostics only.
#[derive(Copy, Clone, Debug)]
pub struct ParamSlot {
    pub name: Atom,
    pub ty: DeclaredType,
}

impl ParamSlot {
    pub fn new(name: Atom, ty: DeclaredType) -> Self {
        Self { name, ty }
    }
}

/// One signature variant of a method declaration.
#[derive(Clone, Debug)]
pub struct Signature {
    pub params: Vec<ParamSlot>,
    pub return_type: DeclaredType,
    /// Whether the PHPDoc resolution pass ran for this declaration.
    /// Variants without it carry too little information to compare against.
    pub phpdoc_resolved: bool,
}

impl Signature {
    pub fn new(params: Vec<ParamSlot>, return_type: DeclaredType) -> Self {
        Self {
            params,
            return_type,
            phpdoc_resolved: true,
        }
    }

    /// Declaration the docblock pass never reached.
    pub fn without_phpdoc(params: Vec<ParamSlot>, return_type: DeclaredType) -> Self {
        Self {
            params,
            return_type,
            phpdoc_resolved: false,
        }
    }
}

/// Natively declared method of one class.
#[derive(Clone, Debug)]
pub struct MethodDef {
    pub name: Atom,
    /// Declaring class; stamped by `ClassGraph::add_method`.
    pub class: ClassId,
    pub visibility: Visibility,
    pub flags: MethodFlags,
    pub span: Span,
    pub variants: Vec<Signature>,
}

impl MethodDef {
    pub fn new(
        name: Atom,
        visibility: Visibility,
        flags: MethodFlags,
        variants: Vec<Signature>,
    ) -> Self {
        Self {
            name,
            class: ClassId(0),
            visibility,
            flags,
            span: Span::ZERO,
            variants,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The method's only signature, or `None` when the declaration exposes
    /// zero or several variants and cannot be compared.
    pub fn single_variant(&self) -> Option<&Signature> {
        match self.variants.as_slice() {
            [variant] => Some(variant),
            _ => None,
        }
    }

    pub fn is_static(&self) -> bool {
        self.flags.contains(MethodFlags::STATIC)
    }

    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }
}

/// One class or interface.
#[derive(Clone, Debug)]
pub struct ClassDef {
    pub name: Atom,
    pub kind: ClassKind,
    /// File the declaration lives in, for diagnostics.
    pub file: Atom,
    pub parent: Option<ClassId>,
    /// Directly implemented interfaces, in declaration order.
    pub interfaces: Vec<ClassId>,
    methods: IndexMap<Atom, MethodDef, FxBuildHasher>,
}

impl ClassDef {
    /// Look up a method this class declares itself. Inherited methods are
    /// not visible here.
    pub fn native_method(&self, name: Atom) -> Option<&MethodDef> {
        self.methods.get(&name)
    }

    pub fn has_native_method(&self, name: Atom) -> bool {
        self.methods.contains_key(&name)
    }

    /// Natively declared methods, in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDef> {
        self.methods.values()
    }
}

pub struct ClassGraph {
    classes: Vec<ClassDef>,
    by_name: FxHashMap<Atom, ClassId>,
}

impl ClassGraph {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            by_name: FxHashMap::default(),
        }
    }

    /// Register a class or interface. The last registration wins the name
    /// slot; the host resolves which conditionally declared symbol is live.
    pub fn add_class(
        &mut self,
        name: Atom,
        kind: ClassKind,
        file: Atom,
        parent: Option<ClassId>,
        interfaces: Vec<ClassId>,
    ) -> ClassId {
        let id = ClassId(self.classes.len() as u32);
        debug!(?id, ?kind, ?parent, interfaces = interfaces.len(), "registered class");
        self.classes.push(ClassDef {
            name,
            kind,
            file,
            parent,
            interfaces,
            methods: IndexMap::default(),
        });
        self.by_name.insert(name, id);
        id
    }

    /// Re-point a parent edge. PHP allows `extends` to reference a class
    /// declared later in the file, so hosts may resolve edges after
    /// registration.
    pub fn set_parent(&mut self, class: ClassId, parent: ClassId) {
        self.classes[class.0 as usize].parent = Some(parent);
    }

    /// Attach a natively declared method, stamping the declaring class.
    /// A same-name method replaces the earlier declaration.
    pub fn add_method(&mut self, class: ClassId, mut method: MethodDef) {
        method.class = class;
        self.classes[class.0 as usize]
            .methods
            .insert(method.name, method);
    }

    pub fn class(&self, id: ClassId) -> &ClassDef {
        &self.classes[id.0 as usize]
    }

    pub fn lookup(&self, name: Atom) -> Option<ClassId> {
        self.by_name.get(&name).copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Whether `sub` is `sup` or transitively derives from it through parent
    /// and interface edges. Malformed cyclic input terminates via the
    /// visited set.
    pub fn is_derived_from(&self, sub: ClassId, sup: ClassId) -> bool {
        let mut visited = FxHashSet::default();
        self.reaches(sub, sup, &mut visited)
    }

    fn reaches(&self, from: ClassId, target: ClassId, visited: &mut FxHashSet<ClassId>) -> bool {
        if from == target {
            return true;
        }
        if !visited.insert(from) {
            return false;
        }
        let class = self.class(from);
        if let Some(parent) = class.parent
            && self.reaches(parent, target, visited)
        {
            return true;
        }
        class
            .interfaces
            .iter()
            .any(|&interface| self.reaches(interface, target, visited))
    }
}

#[cfg(test)]
#[path = "tests/hierarchy_tests.rs"]
mod tests;
