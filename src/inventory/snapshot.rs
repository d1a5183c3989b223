//! In-memory inventory backed by a captured snapshot.

use super::{first_match, Inventory};
use crate::error::InventoryError;
use crate::models::{Lookup, RouteTable, RouteTableFilter, Subnet};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Subnets and route tables of one VPC, captured at a point in time.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySnapshot {
    pub vpc_id: String,
    /// RFC 3339 capture time.
    #[serde(default)]
    pub captured_at: Option<String>,
    pub subnets: Vec<Subnet>,
    pub route_tables: Vec<RouteTable>,
}

/// [`Inventory`] answering from an [`InventorySnapshot`].
///
/// Filters behave like their EC2 counterparts.
#[derive(Debug, Clone)]
pub struct SnapshotInventory {
    snapshot: InventorySnapshot,
}

impl SnapshotInventory {
    pub fn new(snapshot: InventorySnapshot) -> Self {
        SnapshotInventory { snapshot }
    }

    pub fn snapshot(&self) -> &InventorySnapshot {
        &self.snapshot
    }
}

#[async_trait]
impl Inventory for SnapshotInventory {
    async fn list_subnets(&self, vpc_id: &str) -> Result<Vec<Subnet>, InventoryError> {
        Ok(self
            .snapshot
            .subnets
            .iter()
            .filter(|s| s.vpc_id == vpc_id)
            .cloned()
            .collect())
    }

    async fn find_route_table(
        &self,
        filter: &RouteTableFilter,
    ) -> Result<Lookup<RouteTable>, InventoryError> {
        let tables = self.snapshot.route_tables.iter();
        let matches: Vec<RouteTable> = match filter {
            RouteTableFilter::SubnetAssociation(subnet_id) => tables
                .filter(|t| t.is_associated_with(subnet_id))
                .cloned()
                .collect(),
            RouteTableFilter::MainAssociation(vpc_id) => tables
                .filter(|t| &t.vpc_id == vpc_id && t.is_main())
                .cloned()
                .collect(),
        };
        Ok(first_match(filter, matches))
    }
}
