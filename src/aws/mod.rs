//! AWS CLI and EC2 interaction.
//!
//! This module handles all AWS-related operations:
//! - [`cli`] - Command execution for the aws cli
//! - [`ec2`] - EC2 subnet and route table queries
//! - [`cache`] - Caching of inventory snapshots

mod cache;
mod cli;
mod ec2;

// Re-export public types and functions
pub use cache::{default_cache_file, load_snapshot, read_inventory_cache};
pub use cli::{run, RunLimits};
pub use ec2::{AwsCliInventory, RouteTablesResponse, SubnetsResponse};
