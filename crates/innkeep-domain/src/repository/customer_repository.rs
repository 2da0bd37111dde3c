//! Customer Repository - Abstract persistence for Customers

use crate::model::customer::{Customer, CustomerName};
use crate::repository::RepositoryError;

/// Customer Repository Trait
pub trait CustomerRepository {
    /// Append a customer to the collection
    fn insert(&mut self, customer: Customer) -> Result<(), RepositoryError>;

    /// Remove every customer with this name, returning how many were removed
    fn delete(&mut self, name: &CustomerName) -> Result<usize, RepositoryError>;

    /// First customer with this name, in stored order
    fn get(&self, name: &CustomerName) -> Result<Option<Customer>, RepositoryError>;

    /// Every stored customer, in stored order
    fn list_all(&self) -> Result<Vec<Customer>, RepositoryError>;

    fn create(&mut self, name: CustomerName, email: &str) -> Result<(), RepositoryError> {
        self.insert(Customer::new(name, email))
    }

    fn exists(&self, name: &CustomerName) -> Result<bool, RepositoryError> {
        Ok(self.get(name)?.is_some())
    }
}
