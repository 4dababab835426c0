use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use catalog_core::{Entity, ProductId};
use catalog_products::{CreateProduct, Product};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /api/products`.
///
/// Fields stay untyped until conversion so that every falsy value (`null`,
/// `false`, `0`, `""`) is reported as a missing field rather than a type error.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<Value>,
    pub price: Option<Value>,
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn truthy(field: Option<Value>) -> Option<Value> {
    field.filter(|v| !is_falsy(v))
}

impl TryFrom<CreateProductRequest> for CreateProduct {
    type Error = &'static str;

    fn try_from(body: CreateProductRequest) -> Result<Self, Self::Error> {
        let (Some(name), Some(price)) = (truthy(body.name), truthy(body.price)) else {
            // Missing or falsy: left for validation to reject.
            return Ok(CreateProduct::default());
        };

        let Value::String(name) = name else {
            return Err("name must be a string");
        };
        let price = price.as_f64().ok_or("price must be a number")?;

        Ok(CreateProduct::new(name, price))
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
}

/// Largest integer an `f64` holds exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Integral prices are written without a fractional part (`5`, not `5.0`).
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

pub fn products_to_json(products: &[Product]) -> Vec<ProductResponse> {
    products.iter().map(ProductResponse::from).collect()
}
