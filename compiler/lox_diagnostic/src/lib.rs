//! Error reporting for the Lox front end.
//!
//! Front-end stages never abort on malformed input. They describe each
//! problem as a [`Diagnostic`] and hand it to a [`Reporter`], then keep
//! going. Callers decide afterwards, by asking the reporter, whether the
//! run as a whole failed.
//!
//! Two reporters are provided:
//! - [`DiagnosticQueue`] collects diagnostics for later inspection
//! - [`TerminalEmitter`](emitter::TerminalEmitter) renders them immediately
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is type-level proof that at least one error was
//! reported. It can only be obtained from a reporter that saw an error.

mod diagnostic;
pub mod emitter;
mod error_code;
mod guarantee;
pub mod queue;
mod reporter;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use reporter::Reporter;
