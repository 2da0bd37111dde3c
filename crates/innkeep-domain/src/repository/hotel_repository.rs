//! Hotel Repository - Abstract persistence for Hotels

use crate::model::hotel::{Hotel, HotelName};
use crate::repository::RepositoryError;

/// Hotel Repository Trait
///
/// Lookups are exact, case-sensitive name matches over the stored order.
pub trait HotelRepository {
    /// Append a hotel to the collection
    fn insert(&mut self, hotel: Hotel) -> Result<(), RepositoryError>;

    /// Remove every hotel with this name, returning how many were removed
    fn delete(&mut self, name: &HotelName) -> Result<usize, RepositoryError>;

    /// First hotel with this name, in stored order
    fn get(&self, name: &HotelName) -> Result<Option<Hotel>, RepositoryError>;

    /// Every stored hotel, in stored order
    fn list_all(&self) -> Result<Vec<Hotel>, RepositoryError>;

    /// Create a hotel with every room available
    fn create(
        &mut self,
        name: HotelName,
        location: &str,
        rooms: u32,
    ) -> Result<(), RepositoryError> {
        self.insert(Hotel::new(name, location, rooms))
    }

    fn exists(&self, name: &HotelName) -> Result<bool, RepositoryError> {
        Ok(self.get(name)?.is_some())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.list_all()?.len())
    }
}
