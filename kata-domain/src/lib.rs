pub mod aggregate;
pub mod company;
pub mod customer;
pub mod order;
pub mod sample;
pub mod supplier;

pub use aggregate::{aggregate_by, group_by, PriceKey};
pub use company::Company;
pub use customer::Customer;
pub use order::{LineItem, Order, MAX_ITEM_QUANTITY};
pub use supplier::Supplier;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid value {value} for line item {item}")]
    InvalidValue { item: String, value: f64 },
    #[error("Invalid quantity {quantity} for line item {item}")]
    InvalidQuantity { item: String, quantity: usize },
    #[error("Customer already exists: {0}")]
    DuplicateCustomer(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
