//! Public subnet discovery for placing the SFTP gateway instance.
//!
//! Given a VPC id, find the subnets whose effective route table routes to an
//! internet gateway. The first public subnet is where the gateway host goes.

pub mod aws;
pub mod config;
pub mod error;
pub mod inventory;
pub mod models;
pub mod output;
pub mod processing;

use aws::AwsCliInventory;
use config::Config;
use inventory::SnapshotInventory;
use models::SubnetClassification;
use std::error::Error;

pub use error::InventoryError;
pub use processing::{classify_public_subnets, classify_subnets, select_placement_subnet};

/// Classify the subnets of `vpc_id` using the inventory `config` selects.
///
/// A configured cache file, or `use_cache`, classifies against a snapshot;
/// otherwise the live aws cli is queried.
pub async fn get_subnet_classification(
    config: &Config,
    vpc_id: &str,
) -> Result<Vec<SubnetClassification>, Box<dyn Error>> {
    let live = AwsCliInventory::new(config);

    let classified = if config.cache_file.is_some() || config.use_cache {
        let snapshot =
            aws::read_inventory_cache(vpc_id, config.cache_file.as_deref(), &live).await?;
        let inventory = SnapshotInventory::new(snapshot);
        classify_subnets(&inventory, vpc_id, config.concurrency).await?
    } else {
        classify_subnets(&live, vpc_id, config.concurrency).await?
    };
    Ok(classified)
}
