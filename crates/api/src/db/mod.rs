//! Document store access for the Furniro API.
//!
//! # Database: `furniroDB`
//!
//! Five schema-less collections, inserted and returned verbatim:
//!
//! - `products` - Catalog items, deleted by id
//! - `users` - Storefront accounts, looked up by `email`
//! - `orders` - Carry `primaryEmail`, `status` and `totalPrice`
//! - `reviews` - Carry a `productId` reference
//! - `blogs` - Carry a `category`, deleted by id
//!
//! # Connection caching
//!
//! The process may be frozen and thawed between requests on serverless
//! platforms, so [`Db`] establishes the client lazily on first use and
//! memoizes it for the life of the process. Concurrent first calls are
//! serialized by the once-cell, so a cold start performs at most one
//! connection attempt; a failed attempt is not cached and the next call
//! retries from scratch.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Database};
use secrecy::ExposeSecret;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::config::StoreConfig;

mod blogs;
mod orders;
mod products;
mod reviews;
mod users;

pub use blogs::BlogRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use reviews::ReviewRepository;
pub use users::UserRepository;

/// Collection names within the logical database.
pub const PRODUCTS: &str = "products";
pub const USERS: &str = "users";
pub const ORDERS: &str = "orders";
pub const REVIEWS: &str = "reviews";
pub const BLOGS: &str = "blogs";

/// All collections, in the order they are reported by `/documentCount`.
pub const COLLECTIONS: [&str; 5] = [PRODUCTS, USERS, ORDERS, REVIEWS, BLOGS];

/// Upper bound on pooled connections per process instance.
const MAX_POOL_SIZE: u32 = 10;

/// Timeout for establishing a single TCP connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for selecting a reachable server from the topology.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors establishing the document store connection.
#[derive(Debug, Error)]
pub enum DbError {
    /// The store is unreachable or the connection string is invalid.
    #[error("Connection error: {0}")]
    Connection(#[from] mongodb::error::Error),
}

/// Lazily-initialized, process-wide document store handle.
///
/// Cheap to construct; no network activity happens until [`Db::get`] is
/// first called.
pub struct Db {
    config: StoreConfig,
    handle: OnceCell<Database>,
}

impl Db {
    /// Create an unconnected handle from store configuration.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            handle: OnceCell::new(),
        }
    }

    /// Get the cached database handle, connecting on first use.
    ///
    /// Within one process lifetime the connection is established at most
    /// once; every later call returns the memoized handle without any
    /// network activity. `get_or_try_init` does not cache failures, so a
    /// request that hits a connection error leaves the cell empty and the
    /// next request retries.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Connection` if the client cannot be constructed
    /// or the store does not answer the initial ping.
    pub async fn get(&self) -> Result<&Database, DbError> {
        self.handle.get_or_try_init(|| self.connect()).await
    }

    /// Establish the client and select the logical database.
    async fn connect(&self) -> Result<Database, DbError> {
        let mut options = ClientOptions::parse(self.config.uri.expose_secret()).await?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );
        // Bounds from the connection string win; these only fill the gaps.
        options.max_pool_size.get_or_insert(MAX_POOL_SIZE);
        options.connect_timeout.get_or_insert(CONNECT_TIMEOUT);
        options
            .server_selection_timeout
            .get_or_insert(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options)?;
        let database = client.database(&self.config.database);

        // The driver connects lazily; ping so a misconfigured store fails
        // here rather than inside the first collection operation.
        database.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(database = %self.config.database, "Connected to document store");

        Ok(database)
    }
}
