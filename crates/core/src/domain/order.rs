use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    /// Fresh random v4 identifier in canonical hyphenated form.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Customer-supplied part of an order. Any `orderId` in the payload is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub pizzas: Option<Vec<String>>,
}

/// A placed order. Customer fields are free-form and never validated; the id
/// is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    order_id: OrderId,
    first_name: Option<String>,
    last_name: Option<String>,
    street: Option<String>,
    house_number: Option<String>,
    city: Option<String>,
    phone: Option<String>,
    pizzas: Option<Vec<String>>,
}

impl Order {
    pub fn new(details: NewOrder) -> Self {
        let NewOrder { first_name, last_name, street, house_number, city, phone, pizzas } =
            details;
        Self {
            order_id: OrderId::generate(),
            first_name,
            last_name,
            street,
            house_number,
            city,
            phone,
            pizzas,
        }
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, first_name: Option<String>) {
        self.first_name = first_name;
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, last_name: Option<String>) {
        self.last_name = last_name;
    }

    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    pub fn set_street(&mut self, street: Option<String>) {
        self.street = street;
    }

    pub fn house_number(&self) -> Option<&str> {
        self.house_number.as_deref()
    }

    pub fn set_house_number(&mut self, house_number: Option<String>) {
        self.house_number = house_number;
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn set_city(&mut self, city: Option<String>) {
        self.city = city;
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn set_phone(&mut self, phone: Option<String>) {
        self.phone = phone;
    }

    pub fn pizzas(&self) -> Option<&[String]> {
        self.pizzas.as_deref()
    }

    /// Replaces the pizza list as a whole.
    pub fn set_pizzas(&mut self, pizzas: Option<Vec<String>>) {
        self.pizzas = pizzas;
    }
}

impl From<NewOrder> for Order {
    fn from(details: NewOrder) -> Self {
        Self::new(details)
    }
}
