//! # Customer Directory
//!
//! The customer collaborator: name search plus quick creation from the
//! checkout modal. Creating a customer validates the name and hands
//! back the record; the engine associates it with the session
//! immediately, with no separate "select" step.

use mostrador_core::validation::validate_customer_name;
use mostrador_core::{Customer, ValidationError};

// =============================================================================
// Directory Contract
// =============================================================================

/// The customer directory contract the engine depends on.
pub trait CustomerDirectory {
    /// Returns customers whose name matches `query` case-insensitively.
    fn search(&self, query: &str) -> Vec<Customer>;

    /// Creates a customer. Fails when the name is empty or whitespace.
    fn create(&mut self, name: &str, phone: Option<&str>) -> Result<Customer, ValidationError>;
}

// =============================================================================
// In-Memory Directory
// =============================================================================

/// In-memory customer directory. Same storage story as the catalog:
/// persistence is out of scope, a Vec carries the session's lifetime.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    customers: Vec<Customer>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        InMemoryDirectory {
            customers: Vec::new(),
        }
    }

    /// Number of customers on record.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Checks if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl CustomerDirectory for InMemoryDirectory {
    fn search(&self, query: &str) -> Vec<Customer> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.customers.clone();
        }

        self.customers
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    fn create(&mut self, name: &str, phone: Option<&str>) -> Result<Customer, ValidationError> {
        validate_customer_name(name)?;

        let customer = Customer {
            name: name.trim().to_string(),
            phone: phone
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from),
        };
        self.customers.push(customer.clone());
        Ok(customer)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_name() {
        let mut directory = InMemoryDirectory::new();
        assert!(directory.create("", None).is_err());
        assert!(directory.create("   ", Some("555-0101")).is_err());
        assert!(directory.is_empty());
    }

    #[test]
    fn test_create_trims_and_stores() {
        let mut directory = InMemoryDirectory::new();
        let customer = directory.create("  Ana Torres  ", Some(" 555-0101 ")).unwrap();
        assert_eq!(customer.name, "Ana Torres");
        assert_eq!(customer.phone.as_deref(), Some("555-0101"));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_empty_phone_is_none() {
        let mut directory = InMemoryDirectory::new();
        let customer = directory.create("Luis", Some("   ")).unwrap();
        assert!(customer.phone.is_none());
    }

    #[test]
    fn test_search_case_insensitive() {
        let mut directory = InMemoryDirectory::new();
        directory.create("Ana Torres", None).unwrap();
        directory.create("Luis Hernández", None).unwrap();

        assert_eq!(directory.search("ana").len(), 1);
        assert_eq!(directory.search("TORRES").len(), 1);
        assert_eq!(directory.search("luis").len(), 1);
        assert!(directory.search("pedro").is_empty());
        assert_eq!(directory.search("").len(), 2);
    }
}
