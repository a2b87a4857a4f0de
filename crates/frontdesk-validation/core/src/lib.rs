//! Frontdesk Validation Core
//!
//! Pure field validation rules shared by the form pipeline and the WASM
//! client-side bindings. Nothing in this crate performs I/O or reads the
//! system clock: the current time is always passed in by the caller.

pub mod email;
pub mod media;
pub mod person;
pub mod rule;
pub mod schedule;

// Re-export all validators
pub use email::*;
pub use media::*;
pub use person::*;
pub use rule::{check, required_message, NamePart, Rule, Snapshot};
pub use schedule::*;
