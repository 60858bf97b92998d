//! Type interning.

use crate::hierarchy::ClassId;
use crate::types::{IntrinsicKind, TypeId, TypeKey};
use phz_common::Atom;
use rustc_hash::FxHashMap;
use std::sync::RwLock;

const LOCK: &str = "type interner lock poisoned";

/// Deduplicating type table.
///
/// Intrinsics are pre-registered in a fixed order so the `TypeId` constants
/// are stable across interners.
pub struct TypeInterner {
    map: RwLock<FxHashMap<TypeKey, TypeId>>,
    keys: RwLock<Vec<TypeKey>>,
}

impl TypeInterner {
    pub fn new() -> Self {
        let interner = Self {
            map: RwLock::new(FxHashMap::default()),
            keys: RwLock::new(Vec::new()),
        };
        for kind in IntrinsicKind::ALL {
            interner.intern(TypeKey::Intrinsic(kind));
        }
        interner
    }

    /// Intern a key, returning the existing id when already known.
    pub fn intern(&self, key: TypeKey) -> TypeId {
        if let Some(&id) = self.map.read().expect(LOCK).get(&key) {
            return id;
        }
        let mut map = self.map.write().expect(LOCK);
        if let Some(&id) = map.get(&key) {
            return id;
        }
        let mut keys = self.keys.write().expect(LOCK);
        let id = TypeId(keys.len() as u32);
        keys.push(key.clone());
        map.insert(key, id);
        id
    }

    /// Instance type of a class or interface.
    pub fn class(&self, class: ClassId) -> TypeId {
        self.intern(TypeKey::Class(class))
    }

    /// Template placeholder type.
    pub fn type_param(&self, name: Atom) -> TypeId {
        self.intern(TypeKey::TypeParam(name))
    }

    /// Normalizing union constructor.
    ///
    /// Flattens nested unions, collapses on `error`/`mixed`, drops `never`
    /// members, sorts and deduplicates. An empty union is `never`; a
    /// single-member union is that member.
    pub fn union(&self, members: Vec<TypeId>) -> TypeId {
        let mut flat = Vec::with_capacity(members.len());
        for member in members {
            match self.lookup(member) {
                Some(TypeKey::Union(inner)) => flat.extend(inner),
                _ => flat.push(member),
            }
        }
        if flat.contains(&TypeId::ERROR) {
            return TypeId::ERROR;
        }
        if flat.contains(&TypeId::MIXED) {
            return TypeId::MIXED;
        }
        flat.retain(|&member| member != TypeId::NEVER);
        flat.sort_unstable();
        flat.dedup();
        if flat.is_empty() {
            return TypeId::NEVER;
        }
        if flat.len() == 1 {
            return flat[0];
        }
        self.intern(TypeKey::Union(flat))
    }

    /// Key for an id. `None` for ids minted by another interner.
    pub fn lookup(&self, id: TypeId) -> Option<TypeKey> {
        self.keys.read().expect(LOCK).get(id.0 as usize).cloned()
    }

    pub fn len(&self) -> usize {
        self.keys.read().expect(LOCK).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "tests/intern_tests.rs"]
mod tests;
