//! Order repository for document store operations.
//!
//! Orders are free-form documents carrying three fields this API reads:
//! `primaryEmail` (links the order to a user by value), `status` (one of
//! `pending`, `completed`, `cancelled`) and `totalPrice` (aggregated).

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::results::{InsertOneResult, UpdateResult};
use mongodb::{Collection, Database};

use super::ORDERS;

/// Repository for the `orders` collection.
pub struct OrderRepository<'a> {
    db: &'a Database,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Document> {
        self.db.collection(ORDERS)
    }

    /// Insert an order document verbatim.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the insert fails.
    pub async fn insert(&self, order: Document) -> Result<InsertOneResult, mongodb::error::Error> {
        self.collection().insert_one(order).await
    }

    /// List every order document.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the query or cursor iteration fails.
    pub async fn all(&self) -> Result<Vec<Document>, mongodb::error::Error> {
        self.collection().find(doc! {}).await?.try_collect().await
    }

    /// List orders whose `primaryEmail` matches exactly.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the query or cursor iteration fails.
    pub async fn by_email(&self, email: &str) -> Result<Vec<Document>, mongodb::error::Error> {
        self.collection()
            .find(doc! { "primaryEmail": email })
            .await?
            .try_collect()
            .await
    }

    /// List orders with the given `status`.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the query or cursor iteration fails.
    pub async fn by_status(&self, status: &str) -> Result<Vec<Document>, mongodb::error::Error> {
        self.collection()
            .find(doc! { "status": status })
            .await?
            .try_collect()
            .await
    }

    /// Set the `status` field of one order by id.
    ///
    /// This is the only update the API performs on any entity.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the update fails.
    pub async fn set_status(
        &self,
        id: ObjectId,
        status: &str,
    ) -> Result<UpdateResult, mongodb::error::Error> {
        self.collection()
            .update_one(doc! { "_id": id }, doc! { "$set": { "status": status } })
            .await
    }

    /// Count orders grouped by `status`.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the aggregation or cursor iteration
    /// fails.
    pub async fn count_by_status(&self) -> Result<Vec<Document>, mongodb::error::Error> {
        self.collection()
            .aggregate(Self::count_by_status_pipeline())
            .await?
            .try_collect()
            .await
    }

    /// Sum `totalPrice` of orders grouped by `status`.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the aggregation or cursor iteration
    /// fails.
    pub async fn amount_by_status(&self) -> Result<Vec<Document>, mongodb::error::Error> {
        self.collection()
            .aggregate(Self::amount_by_status_pipeline())
            .await?
            .try_collect()
            .await
    }

    fn count_by_status_pipeline() -> Vec<Document> {
        vec![doc! {
            "$group": {
                "_id": "$status",
                "count": { "$sum": 1 },
            }
        }]
    }

    fn amount_by_status_pipeline() -> Vec<Document> {
        vec![doc! {
            "$group": {
                "_id": "$status",
                "totalAmount": { "$sum": "$totalPrice" },
            }
        }]
    }
}
