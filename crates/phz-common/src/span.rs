//! Source location tracking (byte offsets).

use serde::Serialize;

/// Half-open byte range inside one source file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: u32,
    pub length: u32,
}

impl Span {
    pub const ZERO: Span = Span {
        start: 0,
        length: 0,
    };

    pub fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    pub fn end(self) -> u32 {
        self.start + self.length
    }
}
