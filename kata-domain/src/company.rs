use indexmap::IndexMap;
use serde::Serialize;

use crate::aggregate::{aggregate_by, group_by, PriceKey};
use crate::customer::Customer;
use crate::order::{LineItem, Order};
use crate::supplier::Supplier;
use crate::{DomainError, DomainResult};

/// A company with its customers and suppliers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Company {
    name: String,
    customers: Vec<Customer>,
    suppliers: Vec<Supplier>,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            customers: Vec::new(),
            suppliers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a customer. Names must be unique within the company.
    pub fn add_customer(&mut self, customer: Customer) -> DomainResult<()> {
        if self.customer_named(customer.name()).is_some() {
            return Err(DomainError::DuplicateCustomer(customer.name().to_string()));
        }
        self.customers.push(customer);
        Ok(())
    }

    pub fn add_supplier(&mut self, supplier: Supplier) {
        self.suppliers.push(supplier);
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn customer_named(&self, name: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.name() == name)
    }

    pub fn customer_named_mut(&mut self, name: &str) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.name() == name)
    }

    /// The customer added last
    pub fn most_recent_customer(&self) -> Option<&Customer> {
        self.customers.last()
    }

    /// Every order of every customer, in customer order
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.customers.iter().flat_map(|c| c.orders().iter())
    }

    /// Every line item of every order
    pub fn line_items(&self) -> impl Iterator<Item = &LineItem> + '_ {
        self.orders().flat_map(|order| order.line_items().iter())
    }

    pub fn customer_names(&self) -> Vec<&str> {
        self.customers.iter().map(Customer::name).collect()
    }

    pub fn customer_cities(&self) -> Vec<&str> {
        self.customers.iter().map(Customer::city).collect()
    }

    pub fn customers_from(&self, city: &str) -> Vec<&Customer> {
        self.customers.iter().filter(|c| c.is_from(city)).collect()
    }

    pub fn supplier_names(&self) -> Vec<&str> {
        self.suppliers.iter().map(Supplier::name).collect()
    }

    pub fn supplier_names_joined(&self, separator: &str) -> String {
        self.supplier_names().join(separator)
    }

    pub fn count_suppliers_with_more_than(&self, item_count: usize) -> usize {
        self.suppliers
            .iter()
            .filter(|s| s.item_count() > item_count)
            .count()
    }

    /// First supplier with an item name containing `fragment`
    pub fn supplier_of(&self, fragment: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.supplies(fragment))
    }

    /// Item name to every supplier that supplies it
    pub fn items_to_suppliers(&self) -> IndexMap<&str, Vec<&Supplier>> {
        let mut index: IndexMap<&str, Vec<&Supplier>> = IndexMap::new();
        for supplier in &self.suppliers {
            for item in supplier.item_names() {
                index.entry(item.as_str()).or_default().push(supplier);
            }
        }
        index
    }

    pub fn sorted_total_order_values(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self.customers.iter().map(Customer::total_order_value).collect();
        values.sort_by(f64::total_cmp);
        values
    }

    pub fn max_total_order_value(&self) -> Option<f64> {
        self.customers
            .iter()
            .map(Customer::total_order_value)
            .max_by(f64::total_cmp)
    }

    pub fn min_total_order_value(&self) -> Option<f64> {
        self.customers
            .iter()
            .map(Customer::total_order_value)
            .min_by(f64::total_cmp)
    }

    pub fn customer_with_max_total_order_value(&self) -> Option<&Customer> {
        self.customers
            .iter()
            .max_by(|a, b| a.total_order_value().total_cmp(&b.total_order_value()))
    }

    /// Deliver all orders of customers from `city`. Returns the number of
    /// orders that were newly delivered.
    pub fn deliver_orders_to(&mut self, city: &str) -> usize {
        let delivered: usize = self
            .customers
            .iter_mut()
            .filter(|c| c.is_from(city))
            .map(Customer::deliver_orders)
            .sum();
        tracing::info!("Delivered {} orders to {}", delivered, city);
        delivered
    }

    pub fn customers_by_city(&self) -> IndexMap<String, Vec<&Customer>> {
        group_by(self.customers.iter(), |c| c.city().to_string())
    }

    pub fn total_order_values_by_city(&self) -> IndexMap<String, f64> {
        aggregate_by(
            self.customers.iter(),
            |c| c.city().to_string(),
            || 0.0,
            |total, c| *total += c.total_order_value(),
        )
    }

    pub fn total_order_values_by_item(&self) -> IndexMap<String, f64> {
        aggregate_by(
            self.line_items(),
            |item| item.name().to_string(),
            || 0.0,
            |total, item| *total += item.value(),
        )
    }

    pub fn customers_who_ordered(&self, item: &str) -> Vec<&Customer> {
        self.customers.iter().filter(|c| c.has_ordered(item)).collect()
    }

    pub fn orders_by_customer_name(&self) -> IndexMap<&str, &[Order]> {
        self.customers
            .iter()
            .map(|c| (c.name(), c.orders()))
            .collect()
    }

    /// Customers keyed by the price of the most expensive item they ordered.
    /// Customers without any line items are left out.
    pub fn customers_by_most_expensive_item(&self) -> IndexMap<PriceKey, Vec<&Customer>> {
        let mut multimap: IndexMap<PriceKey, Vec<&Customer>> = IndexMap::new();
        for customer in &self.customers {
            if let Some(price) = customer.most_expensive_item_value() {
                multimap.entry(PriceKey::from(price)).or_default().push(customer);
            }
        }
        multimap
    }
}
