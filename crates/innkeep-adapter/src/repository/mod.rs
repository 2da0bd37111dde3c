//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from innkeep-domain.

pub mod json_file;
