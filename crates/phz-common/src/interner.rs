//! String interning for identifier deduplication.
//!
//! Class, method and parameter names are interned once and compared as
//! `Atom`s afterwards. One interner is shared by every descriptor a host
//! builds for a run, and hosts bind files in parallel, so the table must be
//! usable from multiple threads behind a shared reference.

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::{Arc, RwLock};

/// Interned string handle. Compares and hashes by id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(u32);

impl Atom {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Thread-safe string interner.
pub struct Interner {
    map: DashMap<Arc<str>, Atom, FxBuildHasher>,
    strings: RwLock<Vec<Arc<str>>>,
}

const LOCK: &str = "interner lock poisoned";

impl Interner {
    pub fn new() -> Self {
        Self {
            map: DashMap::with_hasher(FxBuildHasher),
            strings: RwLock::new(Vec::new()),
        }
    }

    /// Intern `text`, returning the existing atom when already known.
    pub fn intern(&self, text: &str) -> Atom {
        if let Some(atom) = self.map.get(text) {
            return *atom;
        }
        let mut strings = self.strings.write().expect(LOCK);
        // Another thread may have won the race between the fast-path miss
        // and the lock acquisition.
        if let Some(atom) = self.map.get(text) {
            return *atom;
        }
        let interned: Arc<str> = Arc::from(text);
        let atom = Atom(strings.len() as u32);
        strings.push(Arc::clone(&interned));
        self.map.insert(interned, atom);
        atom
    }

    /// Resolve an atom back to its string.
    ///
    /// Panics when handed an atom minted by a different interner.
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        let strings = self.strings.read().expect(LOCK);
        Arc::clone(&strings[atom.index()])
    }

    pub fn len(&self) -> usize {
        self.strings.read().expect(LOCK).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
