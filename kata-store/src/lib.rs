pub mod app_config;
pub mod fixture;

pub use app_config::{CompanyConfig, Config, ReportFormat, ReportsConfig};
pub use fixture::{load_company, CompanyFixture, StoreError, StoreResult};
