//! Endpoint builders, organized by API version.
//!
//! ```text
//! resources/
//!   mod.rs     <- This file (re-exports the current version)
//!   v2/
//!     mod.rs   <- Version-specific builders
//! ```
//!
//! Builders for the current version are re-exported here:
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::Orders;      // current version
//! use woocommerce_api::rest::resources::v2::Orders;  // explicit
//! ```

pub mod v2;

pub use v2::*;
