//! JavaScript Symbol primitive.
//!
//! Symbols are unique, immutable primitive values. Identity comes from a
//! process-wide counter; the description is for display only.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A JavaScript Symbol value.
///
/// # Examples
///
/// ```
/// use core_types::Symbol;
///
/// let a = Symbol::new(Some("tag"));
/// let b = Symbol::new(Some("tag"));
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// assert_eq!(a.to_string(), "Symbol(tag)");
/// ```
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<String>,
}

impl Symbol {
    /// Creates a new unique symbol with an optional description.
    pub fn new(description: Option<&str>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::Relaxed);
        Symbol {
            id,
            description: description.map(str::to_owned),
        }
    }

    /// The unique id of this symbol.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The description given at creation, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}
