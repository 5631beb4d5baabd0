//! Attribute storage for mock sessions.

use std::any::{self, Any};
use std::collections::HashMap;
use std::fmt;

/// An attribute value of any type.
///
/// Values are stored behind `dyn Any` and recovered by downcasting to the
/// concrete type they were stored with. The type name is kept for
/// diagnostics.
pub struct AttributeValue {
    inner: Box<dyn Any>,
    type_name: &'static str,
}

impl AttributeValue {
    /// Wrap a value.
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            inner: Box::new(value),
            type_name: any::type_name::<T>(),
        }
    }

    /// Name of the stored type, as reported by [`std::any::type_name`].
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check whether the stored value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.inner.downcast_mut::<T>()
    }

    /// Take the stored value out, or get the container back if it holds
    /// another type.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let type_name = self.type_name;
        self.inner
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|inner| Self { inner, type_name })
    }
}

impl fmt::Debug for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeValue")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// String-keyed attribute map of a session.
#[derive(Debug, Default)]
pub struct SessionAttributes {
    values: HashMap<String, AttributeValue>,
}

impl SessionAttributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut AttributeValue> {
        self.values.get_mut(name)
    }

    /// Insert or overwrite an attribute, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: AttributeValue) -> Option<AttributeValue> {
        self.values.insert(name.into(), value)
    }

    /// Remove an attribute. Removing an absent name is not an error.
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate the current attribute names in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Seed attributes from JSON fixture values.
    ///
    /// Each value is stored as a [`serde_json::Value`], overwriting any
    /// attribute with the same name.
    pub fn extend_json(&mut self, values: impl IntoIterator<Item = (String, serde_json::Value)>) {
        for (name, value) in values {
            self.values.insert(name, AttributeValue::new(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_attributes_new() {
        let attrs = SessionAttributes::new();
        assert!(attrs.is_empty());
        assert_eq!(attrs.len(), 0);
        assert!(attrs.get("missing").is_none());
    }

    #[test]
    fn test_insert_overwrites() {
        let mut attrs = SessionAttributes::new();
        assert!(attrs.insert("k", AttributeValue::new(1u32)).is_none());

        let previous = attrs.insert("k", AttributeValue::new("two")).unwrap();
        assert_eq!(previous.downcast_ref::<u32>(), Some(&1));
        assert_eq!(attrs.get("k").unwrap().downcast_ref::<&str>(), Some(&"two"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_none() {
        let mut attrs = SessionAttributes::new();
        assert!(attrs.remove("nope").is_none());

        attrs.insert("k", AttributeValue::new(true));
        assert!(attrs.remove("k").is_some());
        assert!(!attrs.contains("k"));
    }

    #[test]
    fn test_names() {
        let mut attrs = SessionAttributes::new();
        attrs.insert("a", AttributeValue::new(1i64));
        attrs.insert("b", AttributeValue::new(2i64));

        let names: HashSet<&str> = attrs.names().collect();
        assert_eq!(names, HashSet::from(["a", "b"]));
    }

    #[test]
    fn test_value_downcasting() {
        let mut value = AttributeValue::new(String::from("cart"));
        assert!(value.is::<String>());
        assert!(!value.is::<&str>());
        assert!(value.type_name().contains("String"));

        value.downcast_mut::<String>().unwrap().push_str("-1");
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("cart-1"));

        let value = value.downcast::<u8>().unwrap_err();
        assert_eq!(value.downcast::<String>().unwrap(), "cart-1");
    }

    #[test]
    fn test_single_threaded_values() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let shared = Rc::new(RefCell::new(vec![1u8]));
        let mut attrs = SessionAttributes::new();
        attrs.insert("shared", AttributeValue::new(Rc::clone(&shared)));

        shared.borrow_mut().push(2);

        let stored = attrs
            .get("shared")
            .and_then(|v| v.downcast_ref::<Rc<RefCell<Vec<u8>>>>())
            .unwrap();
        assert_eq!(*stored.borrow(), vec![1, 2]);
        assert_eq!(Rc::strong_count(&shared), 2);
    }

    #[test]
    fn test_debug_shows_type() {
        let value = AttributeValue::new(vec![1u8, 2, 3]);
        let debug = format!("{:?}", value);
        assert!(debug.contains("AttributeValue"));
        assert!(debug.contains("Vec<u8>"));
    }

    #[test]
    fn test_extend_json() {
        let mut attrs = SessionAttributes::new();
        attrs.insert("user", AttributeValue::new(7u32));

        attrs.extend_json([
            ("user".to_string(), serde_json::json!("alice")),
            ("roles".to_string(), serde_json::json!(["admin"])),
        ]);

        assert_eq!(attrs.len(), 2);
        let user = attrs.get("user").unwrap().downcast_ref::<serde_json::Value>();
        assert_eq!(user, Some(&serde_json::json!("alice")));
    }
}
