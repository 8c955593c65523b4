use kata_domain::{Company, Customer, DomainError, LineItem, Order, Supplier};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read fixture {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fixture: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid fixture data: {0}")]
    Domain(#[from] DomainError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// On-disk description of a company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyFixture {
    pub name: String,
    #[serde(default)]
    pub customers: Vec<CustomerFixture>,
    #[serde(default)]
    pub suppliers: Vec<SupplierFixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerFixture {
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub orders: Vec<OrderFixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFixture {
    #[serde(default)]
    pub line_items: Vec<LineItemFixture>,
    #[serde(default)]
    pub delivered: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemFixture {
    pub name: String,
    pub value: f64,
    /// Number of identical copies of this item in the order
    #[serde(default = "default_quantity")]
    pub quantity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierFixture {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

fn default_quantity() -> usize { 1 }

impl CompanyFixture {
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn read(path: &Path) -> StoreResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validate the fixture and build the company it describes
    pub fn into_company(self) -> StoreResult<Company> {
        let mut company = Company::new(self.name);

        for customer in self.customers {
            company.add_customer(customer.into_customer()?)?;
        }
        for supplier in self.suppliers {
            company.add_supplier(Supplier::new(supplier.name, supplier.items));
        }

        Ok(company)
    }
}

impl CustomerFixture {
    fn into_customer(self) -> StoreResult<Customer> {
        let mut customer = Customer::new(self.name, self.city);
        for fixture in self.orders {
            let mut order = Order::new();
            for item in fixture.line_items {
                order.try_add_line_items(LineItem::try_new(item.name, item.value)?, item.quantity)?;
            }
            if fixture.delivered {
                order.deliver();
            }
            customer.add_order(order);
        }
        Ok(customer)
    }
}

/// Read a JSON fixture and build the company from it
pub fn load_company(path: &Path) -> StoreResult<Company> {
    let company = CompanyFixture::read(path)?.into_company()?;
    tracing::info!(
        "Loaded company {} with {} customers and {} suppliers from {}",
        company.name(),
        company.customers().len(),
        company.suppliers().len(),
        path.display()
    );
    Ok(company)
}
