use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Ingredients every fresh catalog starts with, in display order.
pub const DEFAULT_INGREDIENTS: [&str; 6] =
    ["Green olives", "Black olives", "mushrooms", "Onion", "corn", "tuna"];

/// A catalog entry. The name is never null or empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ProductPayload")]
pub struct Product {
    #[serde(rename = "nameProduct")]
    name: String,
}

#[derive(Deserialize)]
struct ProductPayload {
    #[serde(rename = "nameProduct", default)]
    name_product: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        Self::try_from(Some(name.into()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        self.name = checked_name(Some(name.into()))?;
        Ok(())
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

impl TryFrom<Option<String>> for Product {
    type Error = DomainError;

    fn try_from(name: Option<String>) -> Result<Self, Self::Error> {
        Ok(Self { name: checked_name(name)? })
    }
}

impl TryFrom<ProductPayload> for Product {
    type Error = DomainError;

    fn try_from(payload: ProductPayload) -> Result<Self, Self::Error> {
        Self::try_from(payload.name_product)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name of Products [Product={}]", self.name)
    }
}

fn checked_name(name: Option<String>) -> Result<String, DomainError> {
    let name = name.ok_or_else(|| DomainError::InvalidArgument("Null argument".to_owned()))?;
    if name.is_empty() {
        return Err(DomainError::InvalidArgument("Empty argument".to_owned()));
    }
    Ok(name)
}

/// Builds the catalog seed from a list of names, failing on the first invalid one.
pub fn seed_products<I, S>(names: I) -> Result<Vec<Product>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Product::new).collect()
}

pub fn default_ingredients() -> Vec<Product> {
    DEFAULT_INGREDIENTS.iter().map(|name| Product { name: (*name).to_owned() }).collect()
}
