//! Product repository: the catalog's only owner of product records.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::{DomainError, DomainResult, Entity, ProductId};

use crate::id_gen::{IdGenerator, RandomIds};
use crate::product::{CreateProduct, Product};

/// Upper bound on id draws for a single `create` before giving up.
pub const MAX_ID_DRAWS: usize = 64;

/// Catalog storage abstraction.
///
/// Implementations must keep `id` and `name` unique across live products and
/// list products in insertion order.
pub trait ProductRepository: Send + Sync {
    fn list(&self) -> Vec<Product>;
    fn get(&self, id: ProductId) -> DomainResult<Product>;
    fn delete(&self, id: ProductId) -> DomainResult<()>;
    fn create(&self, cmd: CreateProduct) -> DomainResult<Product>;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn get(&self, id: ProductId) -> DomainResult<Product> {
        (**self).get(id)
    }

    fn delete(&self, id: ProductId) -> DomainResult<()> {
        (**self).delete(id)
    }

    fn create(&self, cmd: CreateProduct) -> DomainResult<Product> {
        (**self).create(cmd)
    }
}

/// Products present when the service starts.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(ProductId::new(1), "Laptop", 999.99),
        Product::new(ProductId::new(2), "Smartphone", 499.99),
        Product::new(ProductId::new(3), "Headphones", 79.99),
        Product::new(ProductId::new(4), "Keyboard", 49.99),
    ]
}

struct Catalog {
    products: Vec<Product>,
    ids: Box<dyn IdGenerator>,
}

impl Catalog {
    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }

    fn name_taken(&self, name: &str) -> bool {
        self.products.iter().any(|p| p.name() == name)
    }

    /// Draws until a candidate is not held by a live product.
    fn free_id(&mut self) -> DomainResult<ProductId> {
        for _ in 0..MAX_ID_DRAWS {
            let candidate = self.ids.draw();
            if self.position(candidate).is_none() {
                return Ok(candidate);
            }
            tracing::debug!(product_id = %candidate, "drawn id already in use; drawing again");
        }
        Err(DomainError::IdsExhausted)
    }
}

/// In-memory repository guarded by a single lock.
///
/// Readers share the lock; `create` and `delete` hold the write lock across
/// their check and mutation, so writers never interleave.
pub struct InMemoryProductRepository {
    inner: RwLock<Catalog>,
}

impl InMemoryProductRepository {
    /// Empty catalog with random ids.
    pub fn new() -> Self {
        Self::with_products(Vec::new(), RandomIds::new())
    }

    /// Catalog holding the startup seed products, with random ids.
    pub fn seeded() -> Self {
        Self::with_products(seed_products(), RandomIds::new())
    }

    /// Catalog holding `products` (assumed unique by id and name).
    pub fn with_products(products: Vec<Product>, ids: impl IdGenerator + 'static) -> Self {
        Self {
            inner: RwLock::new(Catalog {
                products,
                ids: Box::new(ids),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.read().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Every mutation is a single push or remove, so a poisoned lock still
    // guards a consistent collection.
    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for InMemoryProductRepository {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InMemoryProductRepository")
            .field("products", &self.read().products)
            .finish_non_exhaustive()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn list(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    fn get(&self, id: ProductId) -> DomainResult<Product> {
        let catalog = self.read();
        catalog
            .products
            .iter()
            .find(|p| p.id() == id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut catalog = self.write();
        let index = catalog.position(id).ok_or(DomainError::NotFound)?;
        catalog.products.remove(index);
        tracing::debug!(product_id = %id, "product deleted");
        Ok(())
    }

    fn create(&self, cmd: CreateProduct) -> DomainResult<Product> {
        let (name, price) = cmd.validate()?;

        let mut catalog = self.write();
        if catalog.name_taken(&name) {
            return Err(DomainError::DuplicateName);
        }

        let id = catalog.free_id()?;
        let product = Product::new(id, name, price);
        catalog.products.push(product.clone());
        tracing::debug!(product_id = %id, name = product.name(), "product created");

        Ok(product)
    }
}
