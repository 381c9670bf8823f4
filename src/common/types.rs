use std::sync::Arc;

use parking_lot::Mutex;

use super::errors::Error;

/// A thread-safe, mutually exclusive shared component.
pub type Shared<T> = Arc<Mutex<T>>;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
