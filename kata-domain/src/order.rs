use serde::Serialize;
use chrono::{DateTime, Utc};

use crate::{DomainError, DomainResult};

/// Upper bound on the copies a single `try_add_line_items` call may add
pub const MAX_ITEM_QUANTITY: usize = 10_000;

/// A single priced entry within an order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    name: String,
    value: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Build a line item, rejecting negative or non-finite values
    pub fn try_new(name: impl Into<String>, value: f64) -> DomainResult<Self> {
        let name = name.into();
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::InvalidValue { item: name, value });
        }
        Ok(Self { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// A customer's order. Its value is always derived from the line items.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Order {
    line_items: Vec<LineItem>,
    delivered_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        Self {
            line_items: items.into_iter().collect(),
            delivered_at: None,
        }
    }

    pub fn add_line_item(&mut self, item: LineItem) {
        self.line_items.push(item);
    }

    /// Add `quantity` copies of the same item
    pub fn add_line_items(&mut self, item: LineItem, quantity: usize) {
        self.line_items
            .extend(std::iter::repeat(item).take(quantity));
    }

    /// Like `add_line_items`, but rejects quantities above `MAX_ITEM_QUANTITY`
    pub fn try_add_line_items(&mut self, item: LineItem, quantity: usize) -> DomainResult<()> {
        if quantity > MAX_ITEM_QUANTITY {
            return Err(DomainError::InvalidQuantity {
                item: item.name,
                quantity,
            });
        }
        self.add_line_items(item, quantity);
        Ok(())
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn value(&self) -> f64 {
        self.line_items.iter().map(LineItem::value).sum()
    }

    pub fn most_expensive_item_value(&self) -> Option<f64> {
        self.line_items
            .iter()
            .map(LineItem::value)
            .max_by(f64::total_cmp)
    }

    pub fn contains_item(&self, name: &str) -> bool {
        self.line_items.iter().any(|item| item.is_named(name))
    }

    /// Mark the order as delivered. Returns false if it already was;
    /// the original delivery time is kept in that case.
    pub fn deliver(&mut self) -> bool {
        if self.delivered_at.is_some() {
            return false;
        }
        self.delivered_at = Some(Utc::now());
        true
    }

    pub fn is_delivered(&self) -> bool {
        self.delivered_at.is_some()
    }

    pub fn delivered_at(&self) -> Option<DateTime<Utc>> {
        self.delivered_at
    }
}
