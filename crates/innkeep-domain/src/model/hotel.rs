//! Hotel - A property that can be reserved
//!
//! Hotel is an Entity keyed by its name. Uniqueness of that name is not
//! guaranteed by the type; repositories decide whether to enforce it.

/// Name of a Hotel, used as its key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HotelName(String);

impl HotelName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for HotelName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HotelName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Hotel
///
/// `available_rooms` starts equal to `rooms`. Nothing in the system books or
/// releases rooms, so the two only differ when a stored record says so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    name: HotelName,
    location: String,
    rooms: u32,
    available_rooms: u32,
}

impl Hotel {
    /// Create a new Hotel with every room available
    pub fn new(name: HotelName, location: impl Into<String>, rooms: u32) -> Self {
        Self {
            name,
            location: location.into(),
            rooms,
            available_rooms: rooms,
        }
    }

    /// Rebuild a Hotel exactly as it was stored
    pub fn restore(
        name: HotelName,
        location: impl Into<String>,
        rooms: u32,
        available_rooms: u32,
    ) -> Self {
        Self {
            name,
            location: location.into(),
            rooms,
            available_rooms,
        }
    }

    // ========== Getters ==========

    pub fn name(&self) -> &HotelName {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn rooms(&self) -> u32 {
        self.rooms
    }

    pub fn available_rooms(&self) -> u32 {
        self.available_rooms
    }

    pub fn is_named(&self, name: &HotelName) -> bool {
        &self.name == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hotel_has_all_rooms_available() {
        let hotel = Hotel::new(HotelName::new("Hotel Pucon"), "Chile", 15);

        assert_eq!(hotel.name().as_str(), "Hotel Pucon");
        assert_eq!(hotel.location(), "Chile");
        assert_eq!(hotel.rooms(), 15);
        assert_eq!(hotel.available_rooms(), 15);
    }

    #[test]
    fn test_restore_keeps_stored_availability() {
        let hotel = Hotel::restore(HotelName::new("Hotel Ankor Wat"), "Cambodia", 40, 12);
        assert_eq!(hotel.rooms(), 40);
        assert_eq!(hotel.available_rooms(), 12);
    }

    #[test]
    fn test_name_match_is_exact() {
        let hotel = Hotel::new(HotelName::new("Hotel Pucon"), "Chile", 15);
        assert!(hotel.is_named(&"Hotel Pucon".into()));
        assert!(!hotel.is_named(&"hotel pucon".into()));
        assert!(!hotel.is_named(&"Hotel Pucon ".into()));
    }
}
