//! Endpoint builders for version 2 of the WooCommerce REST API (`/wc-api/v2/`).
//!
//! # Available Resources
//!
//! - [`Index`] - The API index
//! - [`Orders`] - Orders, their statuses and counts
//! - [`OrderNotes`] - Notes on an order
//! - [`OrderRefunds`] - Refunds of an order
//! - [`Coupons`] - Coupons, also by code
//! - [`Customers`] - Customers, also by email, with their orders and downloads
//! - [`Products`] - Products, also by SKU, with reviews, categories and stock
//! - [`Reports`] - Sales and top seller reports
//! - [`Webhooks`] - Webhooks and their deliveries
//! - [`Bulk`] - Bulk product updates
//! - [`Custom`] - Any other endpoint

mod bulk;
mod coupons;
mod custom;
mod customers;
mod index;
mod order_notes;
mod order_refunds;
mod orders;
mod products;
mod reports;
mod webhooks;

pub use bulk::Bulk;
pub use coupons::Coupons;
pub use custom::Custom;
pub use customers::Customers;
pub use index::Index;
pub use order_notes::OrderNotes;
pub use order_refunds::OrderRefunds;
pub use orders::Orders;
pub use products::Products;
pub use reports::Reports;
pub use webhooks::Webhooks;
