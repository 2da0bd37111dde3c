//! On-disk record shapes
//!
//! Field names and order are the file format. The domain types stay free of
//! serde; conversion happens here.

use innkeep_domain::{Customer, CustomerName, Hotel, HotelName, Reservation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelRecord {
    pub name: String,
    pub location: String,
    pub rooms: u32,
    pub available_rooms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub customer: String,
    pub hotel: String,
}

impl From<&Hotel> for HotelRecord {
    fn from(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name().as_str().to_string(),
            location: hotel.location().to_string(),
            rooms: hotel.rooms(),
            available_rooms: hotel.available_rooms(),
        }
    }
}

impl From<HotelRecord> for Hotel {
    fn from(record: HotelRecord) -> Self {
        Hotel::restore(
            HotelName::new(record.name),
            record.location,
            record.rooms,
            record.available_rooms,
        )
    }
}

impl From<&Customer> for CustomerRecord {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name().as_str().to_string(),
            email: customer.email().to_string(),
        }
    }
}

impl From<CustomerRecord> for Customer {
    fn from(record: CustomerRecord) -> Self {
        Customer::new(CustomerName::new(record.name), record.email)
    }
}

impl From<&Reservation> for ReservationRecord {
    fn from(reservation: &Reservation) -> Self {
        Self {
            customer: reservation.customer().as_str().to_string(),
            hotel: reservation.hotel().as_str().to_string(),
        }
    }
}

impl From<ReservationRecord> for Reservation {
    fn from(record: ReservationRecord) -> Self {
        Reservation::new(CustomerName::new(record.customer), HotelName::new(record.hotel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_record_field_order() {
        let hotel = Hotel::new(HotelName::new("Hotel Pucon"), "Chile", 15);
        let json = serde_json::to_string(&HotelRecord::from(&hotel)).unwrap();

        assert_eq!(
            json,
            r#"{"name":"Hotel Pucon","location":"Chile","rooms":15,"available_rooms":15}"#
        );
    }

    #[test]
    fn test_hotel_record_keeps_stored_availability() {
        let record: HotelRecord = serde_json::from_str(
            r#"{"name": "Hotel Ankor Wat", "location": "Cambodia", "rooms": 40, "available_rooms": 7}"#,
        )
        .unwrap();

        let hotel = Hotel::from(record);
        assert_eq!(hotel.available_rooms(), 7);
    }

    #[test]
    fn test_negative_rooms_are_rejected() {
        let result: Result<HotelRecord, _> = serde_json::from_str(
            r#"{"name": "Hotel Pucon", "location": "Chile", "rooms": -1, "available_rooms": 0}"#,
        );
        assert!(result.is_err());
    }
}
