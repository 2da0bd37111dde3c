//! # innkeep Domain Layer
//!
//! Hotels, customers and the reservations that link them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities & identifiers                        ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This crate has no external dependencies. How records reach the disk is
//! decided in `innkeep-adapter`.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    customer::{Customer, CustomerName},
    hotel::{Hotel, HotelName},
    reservation::Reservation,
};

pub use repository::{
    customer_repository::CustomerRepository,
    hotel_repository::HotelRepository,
    reservation_repository::ReservationRepository,
    RepositoryError,
};
