//! Core traits shared by models and stores

/// Primary key type, assigned by the store
pub type Id = i64;

/// Base trait for persisted entities
pub trait Entity: Send + Sync {
    /// Human-readable type name for error messages
    const TYPE_NAME: &'static str;
}
