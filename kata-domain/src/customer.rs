use serde::Serialize;

use crate::order::Order;

/// Customers have a name, a city and a list of orders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    name: String,
    city: String,
    orders: Vec<Order>,
}

impl Customer {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            orders: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn orders_mut(&mut self) -> &mut [Order] {
        &mut self.orders
    }

    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn total_order_value(&self) -> f64 {
        self.orders.iter().map(Order::value).sum()
    }

    pub fn is_from(&self, city: &str) -> bool {
        self.city.to_lowercase() == city.to_lowercase()
    }

    pub fn has_ordered(&self, item: &str) -> bool {
        self.orders.iter().any(|order| order.contains_item(item))
    }

    /// Price of the most expensive line item across all orders
    pub fn most_expensive_item_value(&self) -> Option<f64> {
        self.orders
            .iter()
            .filter_map(Order::most_expensive_item_value)
            .max_by(f64::total_cmp)
    }

    /// Deliver every order, returning how many were newly delivered
    pub fn deliver_orders(&mut self) -> usize {
        self.orders
            .iter_mut()
            .map(Order::deliver)
            .filter(|delivered| *delivered)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::LineItem;

    fn customer_with_orders() -> Customer {
        let mut customer = Customer::new("Fred", "London");
        customer.add_order(Order::with_items(vec![
            LineItem::new("shed", 50.0),
            LineItem::new("cup", 1.5),
        ]));
        customer.add_order(Order::with_items(vec![LineItem::new("saucer", 1.0)]));
        customer
    }

    #[test]
    fn test_total_order_value() {
        let customer = customer_with_orders();
        assert_eq!(customer.total_order_value(), 52.5);
        assert_eq!(Customer::new("Nobody", "Nowhere").total_order_value(), 0.0);
    }

    #[test]
    fn test_is_from_ignores_case() {
        let customer = customer_with_orders();
        assert!(customer.is_from("london"));
        assert!(customer.is_from("LONDON"));
        assert!(!customer.is_from("Liphook"));
    }

    #[test]
    fn test_is_from_folds_non_ascii() {
        let customer = Customer::new("Zoë", "évry");
        assert!(customer.is_from("ÉVRY"));
        assert!(customer.is_from("Évry"));
        assert!(!customer.is_from("evry"));
    }

    #[test]
    fn test_has_ordered_and_most_expensive() {
        let customer = customer_with_orders();
        assert!(customer.has_ordered("saucer"));
        assert!(!customer.has_ordered("sofa"));
        assert_eq!(customer.most_expensive_item_value(), Some(50.0));
    }

    #[test]
    fn test_deliver_orders_counts_new_deliveries() {
        let mut customer = customer_with_orders();
        customer.orders_mut()[0].deliver();

        assert_eq!(customer.deliver_orders(), 1);
        assert!(customer.orders().iter().all(Order::is_delivered));
        assert_eq!(customer.deliver_orders(), 0);
    }
}
