//! Blog repository for document store operations.

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::results::{DeleteResult, InsertOneResult};
use mongodb::{Collection, Database};

use super::BLOGS;

/// Repository for the `blogs` collection.
///
/// Blogs are free-form documents; `category` is the only field read, for
/// the category-count aggregation.
pub struct BlogRepository<'a> {
    db: &'a Database,
}

impl<'a> BlogRepository<'a> {
    /// Create a new blog repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Document> {
        self.db.collection(BLOGS)
    }

    /// Insert a blog document verbatim.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the insert fails.
    pub async fn insert(&self, blog: Document) -> Result<InsertOneResult, mongodb::error::Error> {
        self.collection().insert_one(blog).await
    }

    /// List every blog document.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the query or cursor iteration fails.
    pub async fn all(&self) -> Result<Vec<Document>, mongodb::error::Error> {
        self.collection().find(doc! {}).await?.try_collect().await
    }

    /// Find one blog by id.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the query fails.
    pub async fn by_id(&self, id: ObjectId) -> Result<Option<Document>, mongodb::error::Error> {
        self.collection().find_one(doc! { "_id": id }).await
    }

    /// Delete one blog by id.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the delete fails.
    pub async fn delete(&self, id: ObjectId) -> Result<DeleteResult, mongodb::error::Error> {
        self.collection().delete_one(doc! { "_id": id }).await
    }

    /// Count blogs grouped by `category`.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the aggregation or cursor iteration
    /// fails.
    pub async fn count_by_category(&self) -> Result<Vec<Document>, mongodb::error::Error> {
        self.collection()
            .aggregate(Self::count_by_category_pipeline())
            .await?
            .try_collect()
            .await
    }

    fn count_by_category_pipeline() -> Vec<Document> {
        vec![doc! {
            "$group": {
                "_id": "$category",
                "count": { "$sum": 1 },
            }
        }]
    }
}
