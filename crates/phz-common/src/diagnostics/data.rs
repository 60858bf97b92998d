//! Static diagnostic message catalog.
//!
//! Messages use `{n}` placeholders filled by `format_message`. Codes are
//! stable; renderers key off them.

use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const RETURN_TYPE_NOT_COVARIANT: u32 = 3070;
    pub const RETURN_TYPE_POSSIBLY_NOT_COVARIANT: u32 = 3071;
    pub const PARAMETER_TYPE_NOT_CONTRAVARIANT: u32 = 3072;
    pub const PARAMETER_TYPE_POSSIBLY_NOT_CONTRAVARIANT: u32 = 3073;
    pub const OVERRIDDEN_METHOD_DECLARED_HERE: u32 = 3074;
}

pub mod diagnostic_messages {
    pub const RETURN_TYPE_NOT_COVARIANT: &str = "Return type {0} of method {1}::{2}() is not covariant with return type {3} of method {4}::{5}().";
    pub const RETURN_TYPE_POSSIBLY_NOT_COVARIANT: &str = "Return type {0} of method {1}::{2}() is possibly not covariant with return type {3} of method {4}::{5}().";
    pub const PARAMETER_TYPE_NOT_CONTRAVARIANT: &str = "Parameter #{0} ${1} ({2}) of method {3}::{4}() is not contravariant with parameter #{5} ${6} ({7}) of method {8}::{9}().";
    pub const PARAMETER_TYPE_POSSIBLY_NOT_CONTRAVARIANT: &str = "Parameter #{0} ${1} ({2}) of method {3}::{4}() is possibly not contravariant with parameter #{5} ${6} ({7}) of method {8}::{9}().";
    pub const OVERRIDDEN_METHOD_DECLARED_HERE: &str = "Overridden method {0}::{1}() is declared here.";
}

pub const DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_NOT_COVARIANT,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::RETURN_TYPE_NOT_COVARIANT,
    },
    DiagnosticMessage {
        code: diagnostic_codes::RETURN_TYPE_POSSIBLY_NOT_COVARIANT,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::RETURN_TYPE_POSSIBLY_NOT_COVARIANT,
    },
    DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_TYPE_NOT_CONTRAVARIANT,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::PARAMETER_TYPE_NOT_CONTRAVARIANT,
    },
    DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_TYPE_POSSIBLY_NOT_CONTRAVARIANT,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::PARAMETER_TYPE_POSSIBLY_NOT_CONTRAVARIANT,
    },
    DiagnosticMessage {
        code: diagnostic_codes::OVERRIDDEN_METHOD_DECLARED_HERE,
        category: DiagnosticCategory::Message,
        message: diagnostic_messages::OVERRIDDEN_METHOD_DECLARED_HERE,
    },
];
