//! User repository for document store operations.

use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::results::InsertOneResult;
use mongodb::{Collection, Database};

use super::USERS;

/// Repository for the `users` collection.
///
/// Users are free-form documents; the only field this repository reads is
/// `email`, used for exact-match lookup.
pub struct UserRepository<'a> {
    db: &'a Database,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Document> {
        self.db.collection(USERS)
    }

    /// Insert a user document verbatim.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the insert fails.
    pub async fn insert(&self, user: Document) -> Result<InsertOneResult, mongodb::error::Error> {
        self.collection().insert_one(user).await
    }

    /// List every user document.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the query or cursor iteration fails.
    pub async fn all(&self) -> Result<Vec<Document>, mongodb::error::Error> {
        self.collection().find(doc! {}).await?.try_collect().await
    }

    /// Find one user by exact email match.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the query fails.
    pub async fn by_email(&self, email: &str) -> Result<Option<Document>, mongodb::error::Error> {
        self.collection().find_one(doc! { "email": email }).await
    }
}
