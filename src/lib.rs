//! Napkin ERP
//!
//! Customers, vendors, products, and orders kept as plain JSON files, with a
//! keyword classifier standing in for a natural-language command box.

pub mod cli;
pub mod core;
pub mod entities;
