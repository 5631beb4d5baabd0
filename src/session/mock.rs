//! In-memory session test double.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, trace};

use super::id::PLACEHOLDER_ID;
use super::{AttributeNames, AttributeValue, HttpSession, SessionAttributes, SessionId};
use crate::config::{SessionConfig, DEFAULT_MAX_INACTIVE_INTERVAL};

/// A session that lives only in memory.
///
/// Stands in for a container-managed session in tests. It stores attributes
/// and a creation timestamp; everything else is simplified:
///
/// - the last accessed time is always the creation time,
/// - the inactivity interval is stored but never enforced,
/// - [`invalidate`](HttpSession::invalidate) does nothing,
/// - [`is_new`](HttpSession::is_new) is always `true`.
///
/// Mutation needs `&mut self`; there is no internal locking, and since
/// attributes may hold `Rc` or `RefCell` values the session is neither
/// `Send` nor `Sync`.
#[derive(Debug)]
pub struct MockSession {
    /// Explicit or pinned id. `None` reports the placeholder.
    id: Option<SessionId>,
    attributes: SessionAttributes,
    creation_time: SystemTime,
    max_inactive_interval: i32,
}

impl MockSession {
    /// Create a session without an id.
    ///
    /// The session reports the placeholder id `"mock"` until
    /// [`ensure_id`](Self::ensure_id) stores it.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Create a session with an explicit id.
    pub fn with_id(id: impl Into<SessionId>) -> Self {
        Self::build(Some(id.into()))
    }

    /// Create a session from fixture configuration, seeding its attributes.
    pub fn from_config(config: &SessionConfig) -> Self {
        let mut session = Self::build(config.id.clone().map(SessionId::from));
        session.max_inactive_interval = config.max_inactive_interval;
        session.attributes.extend_json(config.attributes.clone());
        debug!(
            session = %session.id(),
            attributes = session.attributes.len(),
            "mock session seeded from config"
        );
        session
    }

    fn build(id: Option<SessionId>) -> Self {
        let session = Self {
            id,
            attributes: SessionAttributes::new(),
            creation_time: SystemTime::now(),
            max_inactive_interval: DEFAULT_MAX_INACTIVE_INTERVAL,
        };
        debug!(session = %session.id(), "mock session created");
        session
    }

    /// Store the placeholder id if no id was supplied, and return the id.
    ///
    /// An id that is already stored is never replaced.
    pub fn ensure_id(&mut self) -> &SessionId {
        if self.id.is_none() {
            debug!("no session id supplied, using placeholder {:?}", PLACEHOLDER_ID);
        }
        self.id.get_or_insert_with(SessionId::placeholder)
    }

    /// The stored id, if one was supplied or pinned by `ensure_id`.
    pub fn stored_id(&self) -> Option<&SessionId> {
        self.id.as_ref()
    }

    /// Creation time as milliseconds since the Unix epoch.
    pub fn creation_time_millis(&self) -> u64 {
        self.creation_time
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }

    /// Read-only view of the attribute map.
    pub fn attributes(&self) -> &SessionAttributes {
        &self.attributes
    }

    /// Mutable attribute lookup, for values edited in place.
    pub fn attribute_mut(&mut self, name: &str) -> Option<&mut AttributeValue> {
        self.attributes.get_mut(name)
    }
}

impl Default for MockSession {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSession for MockSession {
    fn id(&self) -> &str {
        self.id
            .as_ref()
            .map(SessionId::as_str)
            .unwrap_or(PLACEHOLDER_ID)
    }

    fn creation_time(&self) -> SystemTime {
        self.creation_time
    }

    /// Always the creation time; access is not tracked.
    fn last_accessed_time(&self) -> SystemTime {
        self.creation_time
    }

    fn max_inactive_interval(&self) -> i32 {
        self.max_inactive_interval
    }

    fn set_max_inactive_interval(&mut self, interval: i32) {
        self.max_inactive_interval = interval;
    }

    fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    fn set_attribute(&mut self, name: String, value: AttributeValue) {
        trace!(
            session = %self.id(),
            name = %name,
            value_type = value.type_name(),
            "set attribute"
        );
        self.attributes.insert(name, value);
    }

    fn remove_attribute(&mut self, name: &str) -> Option<AttributeValue> {
        let removed = self.attributes.remove(name);
        trace!(session = %self.id(), name, removed = removed.is_some(), "remove attribute");
        removed
    }

    fn attribute_names(&self) -> AttributeNames<'_> {
        Box::new(self.attributes.names())
    }

    /// Does nothing. Attributes stay in place.
    fn invalidate(&mut self) {
        debug!(session = %self.id(), "invalidate ignored by mock session");
    }

    fn is_new(&self) -> bool {
        true
    }
}
