//! # mock-session
//!
//! In-memory session test double for web-layer code.
//!
//! Components that read and write a server-side session can be written
//! against the [`HttpSession`] trait and exercised in tests with a
//! [`MockSession`], without a running server container.
//!
//! ## Features
//!
//! - **Attribute storage**: string keys to values of any type
//! - **Identity**: explicit ids, or the placeholder `"mock"`
//! - **Timestamps**: creation time, reported as the last accessed time too
//! - **Lifecycle no-ops**: `invalidate` keeps everything, `is_new` is always true
//!
//! The inactivity interval is stored but never enforced, and nothing is
//! synchronized or persisted.
//!
//! ## Quick Start
//!
//! ```
//! use mock_session::{HttpSession, MockSession, SessionExt};
//!
//! fn remember_user(session: &mut dyn HttpSession, user: &str) {
//!     session.insert("user", user.to_string());
//! }
//!
//! let mut session = MockSession::new();
//! remember_user(&mut session, "alice");
//!
//! assert_eq!(session.get::<String>("user").map(String::as_str), Some("alice"));
//! assert_eq!(session.id(), "mock");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use config::{SessionConfig, DEFAULT_MAX_INACTIVE_INTERVAL};
pub use error::{MockSessionError, Result};
pub use session::{
    AttributeNames, AttributeValue, HttpSession, LegacySessionValues, MockSession,
    SessionAttributes, SessionExt, SessionId, PLACEHOLDER_ID,
};
