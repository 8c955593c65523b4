use serde::Serialize;

/// A supplier and the names of the items it supplies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supplier {
    name: String,
    item_names: Vec<String>,
}

impl Supplier {
    pub fn new<I, S>(name: impl Into<String>, item_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            item_names: item_names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn item_names(&self) -> &[String] {
        &self.item_names
    }

    pub fn item_count(&self) -> usize {
        self.item_names.len()
    }

    /// True if any item name contains `fragment`, ignoring case
    pub fn supplies(&self, fragment: &str) -> bool {
        let needle = fragment.to_lowercase();
        self.item_names
            .iter()
            .any(|item| item.to_lowercase().contains(&needle))
    }
}
