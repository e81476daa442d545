//! Entity type definitions
//!
//! Napkin keeps four flat record types:
//! - [`Customer`] - people or companies that place orders
//! - [`Vendor`] - suppliers of products
//! - [`Product`] - items offered by a vendor (soft reference to the vendor)
//! - [`Order`] - a customer buying a product, stamped with its creation time
//!
//! References between records are plain id strings and are never checked.

pub mod customer;
pub mod order;
pub mod product;
pub mod vendor;

pub use customer::Customer;
pub use order::Order;
pub use product::Product;
pub use vendor::Vendor;
