//! # innkeep Adapter Layer
//!
//! JSON file persistence for the innkeep domain.
//!
//! ## Structure
//!
//! - `store` - Load/save of a record list to a single file
//! - `record` - On-disk shape of each entity
//! - `repository/` - Repository trait implementations over `store`
//! - `fixture` - Seed dataset loading and priming
//! - `storage` - Wires the three repositories from a `StoreConfig`

pub mod fixture;
pub mod record;
pub mod repository;
pub mod storage;
pub mod store;

pub use fixture::{load_seed, prime, SeedData};
pub use repository::json_file::{
    JsonCustomerRepository, JsonHotelRepository, JsonReservationRepository,
};
pub use storage::{CollectionReport, Storage};
pub use store::{CollectionHealth, LoadOutcome};
