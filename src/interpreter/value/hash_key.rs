use std::hash::Hasher;

use fnv::FnvHasher;

use crate::interpreter::value::core::Value;

/// The key under which a hash map entry is stored: the value's type tag plus
/// a 64-bit hash.
///
/// Carrying the tag keeps different key types apart even when their raw hash
/// collides, so `1` and `true` never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    kind:  &'static str,
    value: u64,
}

/// A single hash map entry. The original key value is kept so the hash can
/// display itself as written.
#[derive(Debug, Clone)]
pub struct HashPair {
    /// The key as the program produced it.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

impl Value {
    /// Computes the [`HashKey`] for this value, or `None` when the value
    /// kind cannot be used as a hash map key.
    ///
    /// Integers reinterpret their 64 bits, booleans hash as 1/0, and strings
    /// hash their UTF-8 bytes with 64-bit FNV-1a. Everything else is
    /// unhashable.
    ///
    /// # Example
    /// ```
    /// use mk::interpreter::value::core::Value;
    ///
    /// let a = Value::from("key".to_string()).hash_key();
    /// let b = Value::from("key".to_string()).hash_key();
    ///
    /// assert_eq!(a, b);
    /// assert!(Value::Null.hash_key().is_none());
    /// ```
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(value) => Some(HashKey { kind:  self.kind(),
                                                   value: *value as u64, }),
            Self::Bool(value) => Some(HashKey { kind:  self.kind(),
                                                value: u64::from(*value), }),
            Self::String(value) => {
                let mut hasher = FnvHasher::default();
                hasher.write(value.as_bytes());
                Some(HashKey { kind:  self.kind(),
                               value: hasher.finish(), })
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn equal_strings_share_a_key() {
        let a = Value::from("Hello World".to_string());
        let b = Value::from("Hello World".to_string());
        assert_eq!(a.hash_key(), b.hash_key());
    }

    #[test]
    fn distinct_strings_differ() {
        let a = Value::from("Hello".to_string());
        let b = Value::from("World".to_string());
        assert_ne!(a.hash_key(), b.hash_key());
    }

    #[test]
    fn type_tags_keep_kinds_apart() {
        assert_ne!(Value::Integer(1).hash_key(), Value::Bool(true).hash_key());
        assert_ne!(Value::Integer(0).hash_key(), Value::Bool(false).hash_key());
    }

    #[test]
    fn negative_integers_hash() {
        assert_eq!(Value::Integer(-7).hash_key(), Value::Integer(-7).hash_key());
        assert_ne!(Value::Integer(-7).hash_key(), Value::Integer(7).hash_key());
    }

    #[test]
    fn unhashable_kinds_return_none() {
        assert!(Value::Null.hash_key().is_none());
        assert!(Value::from(vec![Value::Integer(1)]).hash_key().is_none());
    }
}
