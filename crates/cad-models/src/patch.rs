//! Tri-state field for partial updates

use serde::{Deserialize, Deserializer};

/// A field in a partial-update payload.
///
/// Use with `#[serde(default)]` so that a missing key deserializes to
/// `Absent`, while an explicit JSON `null` becomes `Null`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default)]
        nome: Patch<String>,
    }

    #[test]
    fn test_missing_key_is_absent() {
        let p: Payload = serde_json::from_str("{}").unwrap();
        assert!(p.nome.is_absent());
    }

    #[test]
    fn test_null_is_null() {
        let p: Payload = serde_json::from_str(r#"{"nome": null}"#).unwrap();
        assert_eq!(p.nome, Patch::Null);
        assert_eq!(p.nome.as_value(), None);
    }

    #[test]
    fn test_value() {
        let p: Payload = serde_json::from_str(r#"{"nome": "Ana"}"#).unwrap();
        assert_eq!(p.nome.into_value(), Some("Ana".to_string()));
    }
}
