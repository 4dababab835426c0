//! Products domain module.
//!
//! This crate owns the product catalog: the entity, the creation rules, id
//! assignment and the in-memory repository (no HTTP, no persistence).

pub mod id_gen;
pub mod product;
pub mod repository;

pub use id_gen::{IdGenerator, RandomIds, ID_SPACE};
pub use product::{CreateProduct, Product};
pub use repository::{InMemoryProductRepository, ProductRepository};
