//! Reservation - A customer holding a place at a hotel
//!
//! A Reservation is a Value Object: two reservations with the same
//! customer and hotel are indistinguishable. Neither side is checked
//! against the customer or hotel collections.

use super::customer::CustomerName;
use super::hotel::HotelName;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reservation {
    customer: CustomerName,
    hotel: HotelName,
}

impl Reservation {
    pub fn new(customer: CustomerName, hotel: HotelName) -> Self {
        Self { customer, hotel }
    }

    pub fn customer(&self) -> &CustomerName {
        &self.customer
    }

    pub fn hotel(&self) -> &HotelName {
        &self.hotel
    }

    /// Both names must match exactly
    pub fn matches(&self, customer: &CustomerName, hotel: &HotelName) -> bool {
        &self.customer == customer && &self.hotel == hotel
    }
}

impl core::fmt::Display for Reservation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} @ {}", self.customer, self.hotel)
    }
}
