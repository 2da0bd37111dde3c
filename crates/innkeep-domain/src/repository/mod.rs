//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define what the domain needs from persistence,
//! not how it is done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait HotelRepository │  JsonHotelRepository
//!   fn insert()         │
//!   fn get()            │
//! ```

pub mod customer_repository;
pub mod hotel_repository;
pub mod reservation_repository;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A record with the same key exists and duplicates are rejected
    Duplicate { kind: &'static str, key: String },
    /// The backing collection is corrupt and the repository refuses to overwrite it
    Corrupt { location: String, reason: String },
    /// Failed to persist
    PersistenceError { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::Duplicate { kind, key } => {
                write!(f, "{} already exists: {}", kind, key)
            }
            RepositoryError::Corrupt { location, reason } => {
                write!(f, "Refusing to overwrite corrupt {}: {}", location, reason)
            }
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}
