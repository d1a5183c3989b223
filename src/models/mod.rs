//! Domain models for public subnet discovery.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Subnet`] - EC2 subnet representation
//! - [`RouteTable`], [`Route`] and [`RouteTableAssociation`] - EC2 routing
//! - [`Lookup`] and [`RouteTableFilter`] - inventory query types
//! - [`SubnetClassification`] - the per-subnet verdict

mod classification;
mod route_table;
mod subnet;

// Re-export public types
pub use classification::SubnetClassification;
pub use route_table::{
    is_internet_gateway, Lookup, Route, RouteSource, RouteTable, RouteTableAssociation,
    RouteTableFilter, INTERNET_GATEWAY_PREFIX,
};
pub use subnet::Subnet;
