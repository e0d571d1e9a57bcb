//! Review repository for document store operations.

use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::results::InsertOneResult;
use mongodb::{Collection, Database};

use super::REVIEWS;

/// Repository for the `reviews` collection.
///
/// Reviews are free-form documents; `productId` links a review to a
/// product by value (the id string posted by the client, compared
/// verbatim).
pub struct ReviewRepository<'a> {
    db: &'a Database,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Document> {
        self.db.collection(REVIEWS)
    }

    /// Insert a review document verbatim.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the insert fails.
    pub async fn insert(&self, review: Document) -> Result<InsertOneResult, mongodb::error::Error> {
        self.collection().insert_one(review).await
    }

    /// List reviews whose `productId` matches exactly.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the query or cursor iteration fails.
    pub async fn by_product(
        &self,
        product_id: &str,
    ) -> Result<Vec<Document>, mongodb::error::Error> {
        self.collection()
            .find(doc! { "productId": product_id })
            .await?
            .try_collect()
            .await
    }
}
