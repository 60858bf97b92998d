//! Common types and utilities for the phz PHP static analyzer.
//!
//! This crate provides foundational types used across all phz crates:
//! - String interning (`Atom`, `Interner`)
//! - Structured diagnostics with a static message catalog
//! - Source spans (`Span`)

pub mod diagnostics;
pub mod interner;
pub mod span;

pub use interner::{Atom, Interner};
pub use span::Span;
