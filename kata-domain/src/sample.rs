//! The fixed scenario the kata exercises run against.

use crate::{Company, Customer, DomainResult, LineItem, Order, Supplier};

pub const COMPANY_NAME: &str = "Bloggs & Co.";

/// Build the sample company: three customers and seven suppliers.
pub fn company() -> DomainResult<Company> {
    let mut company = Company::new(COMPANY_NAME);

    company.add_customer(fred())?;
    company.add_customer(mary())?;
    company.add_customer(bill())?;

    for supplier in suppliers() {
        company.add_supplier(supplier);
    }

    Ok(company)
}

fn fred() -> Customer {
    let mut fred = Customer::new("Fred", "London");

    let mut order = Order::new();
    order.add_line_item(LineItem::new("shed", 50.0));
    order.add_line_item(LineItem::new("chair", 12.5));
    order.add_line_items(LineItem::new("cup", 1.5), 3);
    order.add_line_items(LineItem::new("saucer", 1.0), 3);
    order.add_line_item(LineItem::new("table", 1.0));
    fred.add_order(order);

    fred
}

fn mary() -> Customer {
    let mut mary = Customer::new("Mary", "Liphook");

    let mut garden = Order::new();
    garden.add_line_item(LineItem::new("big shed", 500.0));
    garden.add_line_item(LineItem::new("sofa", 120.0));
    garden.add_line_item(LineItem::new("cat", 150.0));
    garden.add_line_items(LineItem::new("chair", 12.5), 2);
    mary.add_order(garden);

    let mut kitchen = Order::new();
    kitchen.add_line_items(LineItem::new("cup", 1.5), 4);
    kitchen.add_line_items(LineItem::new("saucer", 1.0), 4);
    kitchen.add_line_item(LineItem::new("kettle", 52.0));
    mary.add_order(kitchen);

    mary
}

fn bill() -> Customer {
    let mut bill = Customer::new("Bill", "London");

    let mut order = Order::new();
    order.add_line_item(LineItem::new("shed", 50.0));
    order.add_line_items(LineItem::new("gnome", 7.0), 43);
    order.add_line_item(LineItem::new("bowl", 21.5));
    bill.add_order(order);

    bill.add_order(Order::with_items(vec![LineItem::new("table", 1.0)]));
    bill.add_order(Order::with_items(vec![LineItem::new("spoon", 1.75)]));

    bill
}

fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier::new("Shedtastic", ["shed", "big shed", "huge shed"]),
        Supplier::new("Splendid Crocks", ["cup", "saucer", "bowl"]),
        Supplier::new("Annoying Pets", ["dog", "cat", "goldfish"]),
        Supplier::new("Gnomes 'R' Us", ["gnome"]),
        Supplier::new("Furniture Hamlet", ["table", "sofa", "chair"]),
        Supplier::new("SFD", ["sofa", "chair"]),
        Supplier::new("Doxins", ["kettle", "plasma screen", "sandwich toaster"]),
    ]
}
