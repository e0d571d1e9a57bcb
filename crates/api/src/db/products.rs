//! Product repository for document store operations.

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::results::{DeleteResult, InsertOneResult};
use mongodb::{Collection, Database};

use super::PRODUCTS;

/// Repository for the `products` collection.
///
/// Products are free-form documents identified by the store-generated
/// `_id`.
pub struct ProductRepository<'a> {
    db: &'a Database,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Document> {
        self.db.collection(PRODUCTS)
    }

    /// Insert a product document verbatim.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the insert fails.
    pub async fn insert(
        &self,
        product: Document,
    ) -> Result<InsertOneResult, mongodb::error::Error> {
        self.collection().insert_one(product).await
    }

    /// List every product document.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the query or cursor iteration fails.
    pub async fn all(&self) -> Result<Vec<Document>, mongodb::error::Error> {
        self.collection().find(doc! {}).await?.try_collect().await
    }

    /// Find one product by id.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the query fails.
    pub async fn by_id(&self, id: ObjectId) -> Result<Option<Document>, mongodb::error::Error> {
        self.collection().find_one(doc! { "_id": id }).await
    }

    /// Delete one product by id.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the delete fails.
    pub async fn delete(&self, id: ObjectId) -> Result<DeleteResult, mongodb::error::Error> {
        self.collection().delete_one(doc! { "_id": id }).await
    }
}
