use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{collection::Collection, user::default_true};

/// Declared for the `product` collection; no endpoint reads or writes it yet.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Product {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    pub category: String,

    #[serde(default = "default_true")]
    pub in_stock: bool,
}

impl Collection for Product {
    const NAME: &'static str = "product";
}
