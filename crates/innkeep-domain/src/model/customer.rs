//! Customer - Someone who holds reservations

/// Name of a Customer, used as its key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerName(String);

impl CustomerName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CustomerName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CustomerName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Customer
///
/// `email` is free text. It is not validated and not linked to anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: CustomerName,
    email: String,
}

impl Customer {
    pub fn new(name: CustomerName, email: impl Into<String>) -> Self {
        Self {
            name,
            email: email.into(),
        }
    }

    pub fn name(&self) -> &CustomerName {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_named(&self, name: &CustomerName) -> bool {
        &self.name == name
    }
}
