//! The session capability consumed by web-layer code.

use std::any::{self, Any};
use std::time::SystemTime;

use super::AttributeValue;
use crate::error::MockSessionError;
use crate::Result;

/// Lazily produced attribute names, borrowed from the session.
pub type AttributeNames<'a> = Box<dyn Iterator<Item = &'a str> + 'a>;

/// Operations a web-layer component expects from a server-side session.
///
/// Code written against `&mut dyn HttpSession` (or a generic
/// `S: HttpSession`) can be handed a [`MockSession`](super::MockSession) in
/// tests.
pub trait HttpSession {
    /// Session identifier.
    fn id(&self) -> &str;

    /// Time the session was created.
    fn creation_time(&self) -> SystemTime;

    /// Time the client last sent a request associated with this session.
    fn last_accessed_time(&self) -> SystemTime;

    /// Inactivity interval after which a container may expire the session.
    fn max_inactive_interval(&self) -> i32;

    fn set_max_inactive_interval(&mut self, interval: i32);

    /// Look up an attribute. Absent names yield `None`.
    fn attribute(&self, name: &str) -> Option<&AttributeValue>;

    /// Insert or overwrite an attribute.
    fn set_attribute(&mut self, name: String, value: AttributeValue);

    /// Remove an attribute, returning it if it was present.
    fn remove_attribute(&mut self, name: &str) -> Option<AttributeValue>;

    /// Names of the attributes currently stored.
    ///
    /// The iterator borrows the session, so the key set cannot change while
    /// it is alive.
    fn attribute_names(&self) -> AttributeNames<'_>;

    /// End the session.
    fn invalidate(&mut self);

    /// Whether the client has not yet joined the session.
    fn is_new(&self) -> bool;
}

/// Typed conveniences over [`HttpSession`] attribute access.
pub trait SessionExt: HttpSession {
    /// Get an attribute as a `T`.
    ///
    /// Returns `None` when the attribute is absent or holds another type.
    fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.attribute(name).and_then(AttributeValue::downcast_ref::<T>)
    }

    /// Get an attribute as a `T`, reporting a type mismatch as an error.
    fn try_get<T: Any>(&self, name: &str) -> Result<Option<&T>> {
        match self.attribute(name) {
            None => Ok(None),
            Some(value) => match value.downcast_ref::<T>() {
                Some(typed) => Ok(Some(typed)),
                None => Err(MockSessionError::TypeMismatch {
                    name: name.to_string(),
                    expected: any::type_name::<T>(),
                    actual: value.type_name(),
                }),
            },
        }
    }

    /// Store any value under `name`.
    fn insert<T: Any>(&mut self, name: impl Into<String>, value: T) {
        self.set_attribute(name.into(), AttributeValue::new(value));
    }

    fn contains_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    fn attribute_count(&self) -> usize {
        self.attribute_names().count()
    }
}

impl<S: HttpSession + ?Sized> SessionExt for S {}

/// Legacy value-named synonyms for the attribute operations.
///
/// Each method forwards to its attribute counterpart and has no behavior of
/// its own.
pub trait LegacySessionValues: HttpSession {
    #[deprecated(note = "use `HttpSession::attribute`")]
    fn value(&self, name: &str) -> Option<&AttributeValue> {
        self.attribute(name)
    }

    #[deprecated(note = "use `HttpSession::set_attribute`")]
    fn put_value(&mut self, name: String, value: AttributeValue) {
        self.set_attribute(name, value);
    }

    #[deprecated(note = "use `HttpSession::remove_attribute`")]
    fn remove_value(&mut self, name: &str) -> Option<AttributeValue> {
        self.remove_attribute(name)
    }

    /// Owned snapshot of the attribute names.
    #[deprecated(note = "use `HttpSession::attribute_names`")]
    fn value_names(&self) -> Vec<String> {
        self.attribute_names().map(str::to_string).collect()
    }
}

impl<S: HttpSession + ?Sized> LegacySessionValues for S {}
