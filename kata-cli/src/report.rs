use std::fmt;

use indexmap::IndexMap;
use kata_domain::{Company, Customer, Order};
use kata_store::{ReportFormat, ReportsConfig};
use serde::Serialize;

/// Everything the kata asks about a company, in one place
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub company: &'a str,
    pub suppliers: String,
    pub customers: Vec<CustomerSummary<'a>>,
    pub customers_by_city: IndexMap<String, Vec<&'a str>>,
    pub total_by_city: IndexMap<String, f64>,
    pub total_by_item: IndexMap<String, f64>,
    pub most_expensive_item: Vec<PriceGroup<'a>>,
    pub suppliers_with_more_than_two_items: usize,
}

#[derive(Debug, Serialize)]
pub struct CustomerSummary<'a> {
    pub name: &'a str,
    pub city: &'a str,
    pub orders: usize,
    pub delivered: usize,
    pub total_order_value: f64,
}

#[derive(Debug, Serialize)]
pub struct PriceGroup<'a> {
    pub price: f64,
    pub customers: Vec<&'a str>,
}

impl<'a> Report<'a> {
    pub fn build(company: &'a Company, settings: &ReportsConfig) -> Self {
        let customers = company
            .customers()
            .iter()
            .map(|c| CustomerSummary {
                name: c.name(),
                city: c.city(),
                orders: c.orders().len(),
                delivered: c.orders().iter().filter(|o| o.is_delivered()).count(),
                total_order_value: c.total_order_value(),
            })
            .collect();

        let customers_by_city = company
            .customers_by_city()
            .into_iter()
            .map(|(city, group)| (city, group.into_iter().map(Customer::name).collect()))
            .collect();

        let mut most_expensive_item: Vec<PriceGroup<'a>> = company
            .customers_by_most_expensive_item()
            .into_iter()
            .map(|(price, group)| PriceGroup {
                price: price.value(),
                customers: group.into_iter().map(Customer::name).collect(),
            })
            .collect();
        most_expensive_item.sort_by(|a, b| b.price.total_cmp(&a.price));

        Self {
            company: company.name(),
            suppliers: company.supplier_names_joined(&settings.separator),
            customers,
            customers_by_city,
            total_by_city: company.total_order_values_by_city(),
            total_by_item: company.total_order_values_by_item(),
            most_expensive_item,
            suppliers_with_more_than_two_items: company.count_suppliers_with_more_than(2),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(out, "{}", self.company)?;
        writeln!(out, "Suppliers: {}", self.suppliers)?;
        writeln!(
            out,
            "Suppliers with more than two items: {}",
            self.suppliers_with_more_than_two_items
        )?;

        writeln!(out, "\nCustomers")?;
        for c in &self.customers {
            writeln!(
                out,
                "  {:<8} {:<10} {:>10.2}  ({}/{} delivered)",
                c.name, c.city, c.total_order_value, c.delivered, c.orders
            )?;
        }

        writeln!(out, "\nBy city")?;
        for (city, names) in &self.customers_by_city {
            let total = self.total_by_city.get(city).copied().unwrap_or_default();
            writeln!(out, "  {:<10} {:>10.2}  {}", city, total, names.join(", "))?;
        }

        writeln!(out, "\nBy item")?;
        for (item, total) in &self.total_by_item {
            writeln!(out, "  {:<18} {:>10.2}", item, total)?;
        }

        writeln!(out, "\nMost expensive item")?;
        for group in &self.most_expensive_item {
            writeln!(out, "  {:>10.2}  {}", group.price, group.customers.join(", "))?;
        }
        Ok(())
    }
}

pub fn render(company: &Company, settings: &ReportsConfig) -> anyhow::Result<String> {
    let report = Report::build(company, settings);
    match settings.format {
        ReportFormat::Text => Ok(report.to_string()),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
    }
}

/// Orders still waiting for delivery
pub fn undelivered(company: &Company) -> Vec<&Order> {
    company.orders().filter(|o| !o.is_delivered()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kata_domain::sample;

    #[test]
    fn test_report_from_sample() {
        let company = sample::company().unwrap();
        let report = Report::build(&company, &ReportsConfig::default());

        assert_eq!(report.company, "Bloggs & Co.");
        assert!(report.suppliers.starts_with("Shedtastic~Splendid Crocks"));
        assert_eq!(report.customers_by_city["London"], vec!["Fred", "Bill"]);
        assert_eq!(report.total_by_city["London"], 446.25);
        assert_eq!(report.suppliers_with_more_than_two_items, 5);

        // Highest price first
        assert_eq!(report.most_expensive_item[0].price, 500.0);
        assert_eq!(report.most_expensive_item[1].customers, vec!["Fred", "Bill"]);
    }

    #[test]
    fn test_text_report_lists_customers() {
        let company = sample::company().unwrap();
        let text = render(&company, &ReportsConfig::default()).unwrap();

        assert!(text.contains("Bloggs & Co."));
        assert!(text.contains("Mary"));
        assert!(text.contains("857.00"));
        assert!(text.contains("446.25"));
    }

    #[test]
    fn test_json_report() {
        let mut company = sample::company().unwrap();
        company.deliver_orders_to("London");

        let settings = ReportsConfig {
            format: ReportFormat::Json,
            ..ReportsConfig::default()
        };
        let json: serde_json::Value =
            serde_json::from_str(&render(&company, &settings).unwrap()).unwrap();

        assert_eq!(json["total_by_item"]["cup"], 10.5);
        assert_eq!(json["customers"][2]["name"], "Bill");
        assert_eq!(json["customers"][2]["delivered"], 3);
        assert_eq!(json["customers"][1]["delivered"], 0);
    }

    #[test]
    fn test_undelivered_after_london_delivery() {
        let mut company = sample::company().unwrap();
        assert_eq!(undelivered(&company).len(), 6);

        company.deliver_orders_to("London");
        let remaining = undelivered(&company);
        assert_eq!(remaining.len(), 2);
        let mary = company.customer_named("Mary").unwrap();
        assert!(remaining.iter().all(|o| mary.orders().contains(o)));
    }
}
