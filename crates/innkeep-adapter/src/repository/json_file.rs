//! JSON File Repository Implementations
//!
//! Each repository owns one collection file. Every operation reads the
//! whole file, and every mutation writes the whole file back.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use innkeep_domain::{
    Customer, CustomerName, CustomerRepository, Hotel, HotelName, HotelRepository,
    RepositoryError, Reservation, ReservationRepository,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{CorruptPolicy, DuplicatePolicy, StoreConfig};
use tracing::debug;

use crate::record::{CustomerRecord, HotelRecord, ReservationRecord};
use crate::store::{self, CollectionHealth, LoadOutcome};

/// One collection file plus the policy for treating it when corrupt
///
/// Mutations work on the raw JSON elements, so records this collection can
/// not decode, and keys it does not know, survive every rewrite untouched.
#[derive(Debug, Clone)]
struct JsonCollection<R> {
    path: PathBuf,
    on_corrupt: CorruptPolicy,
    _record: PhantomData<fn() -> R>,
}

impl<R: Serialize + DeserializeOwned> JsonCollection<R> {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            on_corrupt: CorruptPolicy::default(),
            _record: PhantomData,
        }
    }

    fn health(&self) -> CollectionHealth {
        store::load::<Value>(&self.path).health()
    }

    /// Decodable records for a query; corrupt files read as empty regardless of policy
    fn read(&self) -> Vec<R> {
        store::load(&self.path).into_records()
    }

    /// Raw elements for a read-modify-write cycle
    fn read_for_update(&self) -> Result<Vec<Value>, RepositoryError> {
        match store::load::<Value>(&self.path) {
            LoadOutcome::Corrupt { reason } if self.on_corrupt == CorruptPolicy::Refuse => {
                Err(RepositoryError::Corrupt {
                    location: self.path.display().to_string(),
                    reason,
                })
            }
            outcome => Ok(outcome.into_records()),
        }
    }

    fn write(&self, elements: &[Value]) -> Result<(), RepositoryError> {
        store::save(&self.path, elements).map_err(|e| RepositoryError::PersistenceError {
            message: e.to_string(),
        })
    }

    /// Whether `element` decodes as `R` and satisfies `predicate`
    fn element_matches(element: &Value, predicate: &impl Fn(&R) -> bool) -> bool {
        <R as Deserialize>::deserialize(element).map_or(false, |record| predicate(&record))
    }

    /// Drop every record matching `predicate`, rewriting the file
    fn remove_where(&self, predicate: impl Fn(&R) -> bool) -> Result<usize, RepositoryError> {
        let mut elements = self.read_for_update()?;
        let before = elements.len();
        elements.retain(|e| !Self::element_matches(e, &predicate));
        self.write(&elements)?;
        Ok(before - elements.len())
    }

    /// Append `record` unless `is_duplicate` finds a clash under the reject policy
    fn append(
        &self,
        record: R,
        duplicates: DuplicatePolicy,
        is_duplicate: impl Fn(&R) -> bool,
    ) -> Result<bool, RepositoryError> {
        let mut elements = self.read_for_update()?;
        if duplicates == DuplicatePolicy::Reject
            && elements
                .iter()
                .any(|e| Self::element_matches(e, &is_duplicate))
        {
            return Ok(false);
        }
        let element = serde_json::to_value(&record).map_err(|e| {
            RepositoryError::PersistenceError {
                message: e.to_string(),
            }
        })?;
        elements.push(element);
        self.write(&elements)?;
        Ok(true)
    }
}

// ============================================================================
// Hotels
// ============================================================================

/// Hotel repository backed by `hotels.json`
#[derive(Debug, Clone)]
pub struct JsonHotelRepository {
    collection: JsonCollection<HotelRecord>,
    duplicates: DuplicatePolicy,
}

impl JsonHotelRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path.into()),
            duplicates: DuplicatePolicy::default(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.hotels_path()).with_policies(config.duplicates, config.on_corrupt)
    }

    /// Builder: set duplicate and corruption policies
    pub fn with_policies(mut self, duplicates: DuplicatePolicy, on_corrupt: CorruptPolicy) -> Self {
        self.duplicates = duplicates;
        self.collection.on_corrupt = on_corrupt;
        self
    }

    pub fn path(&self) -> &Path {
        &self.collection.path
    }

    pub fn health(&self) -> CollectionHealth {
        self.collection.health()
    }
}

impl HotelRepository for JsonHotelRepository {
    fn insert(&mut self, hotel: Hotel) -> Result<(), RepositoryError> {
        let record = HotelRecord::from(&hotel);
        let appended = self
            .collection
            .append(record, self.duplicates, |r| r.name == hotel.name().as_str())?;
        if !appended {
            return Err(RepositoryError::Duplicate {
                kind: "Hotel",
                key: hotel.name().to_string(),
            });
        }
        debug!(hotel = %hotel.name(), rooms = hotel.rooms(), "created hotel");
        Ok(())
    }

    fn delete(&mut self, name: &HotelName) -> Result<usize, RepositoryError> {
        let removed = self.collection.remove_where(|r| r.name == name.as_str())?;
        debug!(hotel = %name, removed, "deleted hotel");
        Ok(removed)
    }

    fn get(&self, name: &HotelName) -> Result<Option<Hotel>, RepositoryError> {
        Ok(self
            .collection
            .read()
            .into_iter()
            .find(|r| r.name == name.as_str())
            .map(Hotel::from))
    }

    fn list_all(&self) -> Result<Vec<Hotel>, RepositoryError> {
        Ok(self.collection.read().into_iter().map(Hotel::from).collect())
    }
}

// ============================================================================
// Customers
// ============================================================================

/// Customer repository backed by `customers.json`
#[derive(Debug, Clone)]
pub struct JsonCustomerRepository {
    collection: JsonCollection<CustomerRecord>,
    duplicates: DuplicatePolicy,
}

impl JsonCustomerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path.into()),
            duplicates: DuplicatePolicy::default(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.customers_path()).with_policies(config.duplicates, config.on_corrupt)
    }

    /// Builder: set duplicate and corruption policies
    pub fn with_policies(mut self, duplicates: DuplicatePolicy, on_corrupt: CorruptPolicy) -> Self {
        self.duplicates = duplicates;
        self.collection.on_corrupt = on_corrupt;
        self
    }

    pub fn path(&self) -> &Path {
        &self.collection.path
    }

    pub fn health(&self) -> CollectionHealth {
        self.collection.health()
    }
}

impl CustomerRepository for JsonCustomerRepository {
    fn insert(&mut self, customer: Customer) -> Result<(), RepositoryError> {
        let record = CustomerRecord::from(&customer);
        let appended = self
            .collection
            .append(record, self.duplicates, |r| r.name == customer.name().as_str())?;
        if !appended {
            return Err(RepositoryError::Duplicate {
                kind: "Customer",
                key: customer.name().to_string(),
            });
        }
        debug!(customer = %customer.name(), "created customer");
        Ok(())
    }

    fn delete(&mut self, name: &CustomerName) -> Result<usize, RepositoryError> {
        let removed = self.collection.remove_where(|r| r.name == name.as_str())?;
        debug!(customer = %name, removed, "deleted customer");
        Ok(removed)
    }

    fn get(&self, name: &CustomerName) -> Result<Option<Customer>, RepositoryError> {
        Ok(self
            .collection
            .read()
            .into_iter()
            .find(|r| r.name == name.as_str())
            .map(Customer::from))
    }

    fn list_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self.collection.read().into_iter().map(Customer::from).collect())
    }
}

// ============================================================================
// Reservations
// ============================================================================

/// Reservation repository backed by `reservations.json`
///
/// Under the reject policy the `(customer, hotel)` pair is the key.
#[derive(Debug, Clone)]
pub struct JsonReservationRepository {
    collection: JsonCollection<ReservationRecord>,
    duplicates: DuplicatePolicy,
}

impl JsonReservationRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path.into()),
            duplicates: DuplicatePolicy::default(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.reservations_path()).with_policies(config.duplicates, config.on_corrupt)
    }

    /// Builder: set duplicate and corruption policies
    pub fn with_policies(mut self, duplicates: DuplicatePolicy, on_corrupt: CorruptPolicy) -> Self {
        self.duplicates = duplicates;
        self.collection.on_corrupt = on_corrupt;
        self
    }

    pub fn path(&self) -> &Path {
        &self.collection.path
    }

    pub fn health(&self) -> CollectionHealth {
        self.collection.health()
    }
}

impl ReservationRepository for JsonReservationRepository {
    fn insert(&mut self, reservation: Reservation) -> Result<(), RepositoryError> {
        let record = ReservationRecord::from(&reservation);
        let appended = self.collection.append(record, self.duplicates, |r| {
            r.customer == reservation.customer().as_str() && r.hotel == reservation.hotel().as_str()
        })?;
        if !appended {
            return Err(RepositoryError::Duplicate {
                kind: "Reservation",
                key: reservation.to_string(),
            });
        }
        debug!(%reservation, "created reservation");
        Ok(())
    }

    fn cancel(
        &mut self,
        customer: &CustomerName,
        hotel: &HotelName,
    ) -> Result<usize, RepositoryError> {
        let removed = self
            .collection
            .remove_where(|r| r.customer == customer.as_str() && r.hotel == hotel.as_str())?;
        debug!(%customer, %hotel, removed, "canceled reservation");
        Ok(removed)
    }

    fn list_all(&self) -> Result<Vec<Reservation>, RepositoryError> {
        Ok(self
            .collection
            .read()
            .into_iter()
            .map(Reservation::from)
            .collect())
    }
}
