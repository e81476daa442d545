//! CLI command implementations

pub mod utils;

pub mod command;
pub mod completions;
pub mod customer;
pub mod form;
pub mod init;
pub mod order;
pub mod product;
pub mod status;
pub mod vendor;
