//! # Frontdesk Forms
//!
//! Schema-driven admin forms for a visitor/appointment management console.
//!
//! ## Features
//!
//! - **Form State**: values, per-field errors and submission status
//! - **Live Validation**: field-level checks with cross-field revalidation
//! - **Submission Client**: JSON or multipart POST, one request per submit
//! - **Duplicate Guard**: per-email markers in a memory or filesystem store
//! - **Pre-fill**: seed fields from URL query parameters
//!
//! ## Example
//!
//! ```rust,no_run
//! use frontdesk_forms::{Config, FormSession};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default()?;
//!     let mut session = FormSession::from_config("appointment", &config).await?;
//!
//!     session.set_field("firstName", "Jane").await?;
//!     let result = session.submit().await;
//!     println!("{}", result.message());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod clock;
pub mod config;
pub mod guard;
pub mod prefill;
pub mod presenter;
pub mod presets;
pub mod schema;
pub mod session;
pub mod state;
pub mod storage;
pub mod value;

pub use client::{SubmissionClient, SubmissionResult, Transport};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, StorageBackend, StorageConfig};
pub use guard::DuplicateGuard;
pub use prefill::{initial_values, QueryParams};
pub use presenter::{FormView, NullPresenter, Presenter};
pub use schema::{DateWireFormat, FieldKind, FieldSpec, FormSchema};
pub use session::FormSession;
pub use state::{ErrorMap, FormError, FormSnapshot, FormState};
pub use storage::{FilesystemStore, MarkerStore, MemoryStore};
pub use value::{Attachment, FieldValue};

pub use frontdesk_validation_core as validation;
