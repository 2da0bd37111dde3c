//! Reservation Repository - Abstract persistence for Reservations
//!
//! Reservations are not validated against the hotel or customer
//! collections. A reservation may name a hotel that was never created.

use crate::model::customer::CustomerName;
use crate::model::hotel::HotelName;
use crate::model::reservation::Reservation;
use crate::repository::RepositoryError;

/// Reservation Repository Trait
pub trait ReservationRepository {
    /// Append a reservation to the collection
    fn insert(&mut self, reservation: Reservation) -> Result<(), RepositoryError>;

    /// Remove every reservation for this exact pair, returning how many were removed
    fn cancel(
        &mut self,
        customer: &CustomerName,
        hotel: &HotelName,
    ) -> Result<usize, RepositoryError>;

    /// Every stored reservation, in stored order
    fn list_all(&self) -> Result<Vec<Reservation>, RepositoryError>;

    fn create(&mut self, customer: CustomerName, hotel: HotelName) -> Result<(), RepositoryError> {
        self.insert(Reservation::new(customer, hotel))
    }

    /// Reservations held by a customer
    fn find_by_customer(&self, customer: &CustomerName) -> Result<Vec<Reservation>, RepositoryError> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|r| r.customer() == customer)
            .collect())
    }

    /// Reservations at a hotel
    fn find_by_hotel(&self, hotel: &HotelName) -> Result<Vec<Reservation>, RepositoryError> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|r| r.hotel() == hotel)
            .collect())
    }
}
