//! Per-subnet classification result.

use super::RouteSource;
use serde::{Deserialize, Serialize};

/// How one subnet was classified, and why.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetClassification {
    pub subnet_id: String,
    /// The subnet's effective route table.
    pub route_table_id: String,
    /// Whether the effective table came from an explicit or main association.
    pub source: RouteSource,
    /// Internet gateway the effective table routes to, if any.
    pub internet_gateway: Option<String>,
}

impl SubnetClassification {
    /// Public iff the effective table routes to an internet gateway.
    pub fn is_public(&self) -> bool {
        self.internet_gateway.is_some()
    }
}
