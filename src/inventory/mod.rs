//! The cloud-inventory collaborator.
//!
//! Classification only ever talks to an [`Inventory`]:
//! - [`crate::aws::AwsCliInventory`] - live queries through the aws cli
//! - [`SnapshotInventory`] - answers from a captured [`InventorySnapshot`]

mod snapshot;

use crate::error::InventoryError;
use crate::models::{Lookup, RouteTable, RouteTableFilter, Subnet};
use async_trait::async_trait;

pub use snapshot::{InventorySnapshot, SnapshotInventory};

/// Read-only view of a VPC's subnets and route tables.
#[async_trait]
pub trait Inventory: Send + Sync {
    /// All subnets of `vpc_id`, in the collaborator's enumeration order.
    async fn list_subnets(&self, vpc_id: &str) -> Result<Vec<Subnet>, InventoryError>;

    /// The route table matching `filter`.
    ///
    /// No match is `Ok(Lookup::NotFound)`; errors are reserved for failed lookups.
    async fn find_route_table(
        &self,
        filter: &RouteTableFilter,
    ) -> Result<Lookup<RouteTable>, InventoryError>;
}

/// Pick the route table out of a filtered match set.
pub(crate) fn first_match(
    filter: &RouteTableFilter,
    mut tables: Vec<RouteTable>,
) -> Lookup<RouteTable> {
    if tables.len() > 1 {
        log::warn!(
            "{} route tables match {filter}, using {}",
            tables.len(),
            tables[0].route_table_id
        );
    }
    if tables.is_empty() {
        log::debug!("No route table matches {filter}");
        Lookup::NotFound
    } else {
        Lookup::Found(tables.swap_remove(0))
    }
}
