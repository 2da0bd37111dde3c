//! Domain Models
//!
//! A hotel and a customer are keyed by name. A reservation is nothing more
//! than the pair of names it links.

pub mod customer;
pub mod hotel;
pub mod reservation;
