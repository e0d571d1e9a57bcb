//! Integration tests for the Furniro API.
//!
//! # Running Tests
//!
//! ```bash
//! # Start a local MongoDB
//! docker run -d -p 27017:27017 mongo:7
//!
//! # Start the API against it
//! MONGODB_URI=mongodb://localhost:27017 cargo run -p furniro-api
//!
//! # Run the ignored integration tests
//! cargo test -p furniro-integration-tests -- --ignored
//! ```
//!
//! # Configuration
//!
//! - `API_BASE_URL` - Base URL of the running API
//!   (default: `http://localhost:3000`)
//!
//! # Test Categories
//!
//! - `api_meta` - Health, welcome and document counts
//! - `api_users` - User insert/list/lookup and the not-found marker
//! - `api_products` - Product round-trip and deletion
//! - `api_orders` - Status partition, updates and aggregations
//!
//! Tests write into whatever database the running server points at; use a
//! throwaway database, not production.
