//! HTTP route handlers for the Furniro API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                     - Welcome message
//! GET    /health               - Health check
//! GET    /documentCount        - Document counts across all collections
//!
//! # Users
//! POST   /addUser              - Insert a user
//! GET    /allUsers             - List all users
//! GET    /user/{email}         - Find one user by email
//!
//! # Products
//! POST   /addProduct           - Insert a product
//! GET    /allProducts          - List all products
//! GET    /product/{id}         - Find one product by id
//! DELETE /deleteProduct/{id}   - Delete one product by id
//!
//! # Orders
//! POST   /addOrder             - Insert an order
//! GET    /allOrders            - List all orders
//! GET    /orders/{email}       - List orders for a primary email
//! GET    /pendingOrders        - List orders with status "pending"
//! GET    /completedOrders      - List orders with status "completed"
//! GET    /cancelledOrders      - List orders with status "cancelled"
//! PUT    /updateOrder/{id}     - Set an order's status
//! GET    /orderStats           - Order counts grouped by status
//! GET    /orderAmountStats     - totalPrice sums grouped by status
//!
//! # Blogs
//! POST   /addBlog              - Insert a blog
//! GET    /allBlogs             - List all blogs
//! GET    /blog/{id}            - Find one blog by id
//! DELETE /deleteBlog/{id}      - Delete one blog by id
//! GET    /blogCategoryCount    - Blog counts grouped by category
//!
//! # Reviews
//! POST   /addReview            - Insert a review
//! GET    /reviews/{productId}  - List reviews for a product
//! ```
//!
//! Every handler is a thin adapter: acquire the cached store connection,
//! perform exactly one collection operation, serialize the raw result.

pub mod blogs;
pub mod meta;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod users;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Create the full application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(meta::welcome))
        .route("/health", get(meta::health))
        .route("/documentCount", get(meta::document_count))
        // Users
        .route("/addUser", post(users::add))
        .route("/allUsers", get(users::all))
        .route("/user/{email}", get(users::by_email))
        // Products
        .route("/addProduct", post(products::add))
        .route("/allProducts", get(products::all))
        .route("/product/{id}", get(products::by_id))
        .route("/deleteProduct/{id}", delete(products::remove))
        // Orders
        .route("/addOrder", post(orders::add))
        .route("/allOrders", get(orders::all))
        .route("/orders/{email}", get(orders::by_email))
        .route("/pendingOrders", get(orders::pending))
        .route("/completedOrders", get(orders::completed))
        .route("/cancelledOrders", get(orders::cancelled))
        .route("/updateOrder/{id}", put(orders::update_status))
        .route("/orderStats", get(orders::stats))
        .route("/orderAmountStats", get(orders::amount_stats))
        // Blogs
        .route("/addBlog", post(blogs::add))
        .route("/allBlogs", get(blogs::all))
        .route("/blog/{id}", get(blogs::by_id))
        .route("/deleteBlog/{id}", delete(blogs::remove))
        .route("/blogCategoryCount", get(blogs::category_count))
        // Reviews
        .route("/addReview", post(reviews::add))
        .route("/reviews/{productId}", get(reviews::by_product))
}
