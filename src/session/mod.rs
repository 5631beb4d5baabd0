//! Session module.
//!
//! This module provides the session capability trait, the in-memory
//! [`MockSession`] that implements it, and the id and attribute types they
//! share.

mod attributes;
mod capability;
mod id;
mod mock;

pub use attributes::{AttributeValue, SessionAttributes};
pub use capability::{AttributeNames, HttpSession, LegacySessionValues, SessionExt};
pub use id::{SessionId, PLACEHOLDER_ID};
pub use mock::MockSession;
