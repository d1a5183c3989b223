//! EC2 route table data model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier prefix EC2 uses for internet gateways.
pub const INTERNET_GATEWAY_PREFIX: &str = "igw-";

/// True if `gateway_id` names an internet gateway.
pub fn is_internet_gateway(gateway_id: &str) -> bool {
    gateway_id.starts_with(INTERNET_GATEWAY_PREFIX)
}

/// A single route inside a route table.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Route {
    /// Destination CIDR; carried for reporting only.
    #[serde(default)]
    pub destination_cidr_block: Option<String>,
    /// Gateway target (`igw-…`, `vgw-…`, `local`).
    #[serde(default)]
    pub gateway_id: Option<String>,
    /// NAT gateway target, if any.
    #[serde(default)]
    pub nat_gateway_id: Option<String>,
    /// `active` or `blackhole`.
    #[serde(default)]
    pub state: Option<String>,
}

impl Route {
    /// Route to `gateway_id` for the default destination.
    pub fn via_gateway(gateway_id: &str) -> Self {
        Route {
            destination_cidr_block: Some("0.0.0.0/0".to_string()),
            gateway_id: Some(gateway_id.to_string()),
            ..Default::default()
        }
    }

    /// The internet gateway this route points at, if it points at one.
    pub fn internet_gateway(&self) -> Option<&str> {
        self.gateway_id
            .as_deref()
            .filter(|id| is_internet_gateway(id))
    }
}

/// Binding of a route table to a subnet, or to its VPC as the main table.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RouteTableAssociation {
    /// Set for the VPC's main (default) association.
    #[serde(default)]
    pub main: bool,
    /// Set for an explicit subnet association.
    #[serde(default)]
    pub subnet_id: Option<String>,
    #[serde(default)]
    pub route_table_association_id: Option<String>,
}

/// A route table as returned by `aws ec2 describe-route-tables`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RouteTable {
    pub route_table_id: String,
    pub vpc_id: String,
    #[serde(default)]
    pub associations: Vec<RouteTableAssociation>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl RouteTable {
    /// True if this table is explicitly associated with `subnet_id`.
    pub fn is_associated_with(&self, subnet_id: &str) -> bool {
        self.associations
            .iter()
            .any(|a| a.subnet_id.as_deref() == Some(subnet_id))
    }

    /// True if this table is the main table of its VPC.
    pub fn is_main(&self) -> bool {
        self.associations.iter().any(|a| a.main)
    }

    /// First route in table order that targets an internet gateway.
    pub fn internet_gateway_route(&self) -> Option<&Route> {
        self.routes.iter().find(|r| r.internet_gateway().is_some())
    }
}

/// Which association made a route table a subnet's effective table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    /// Table explicitly associated with the subnet.
    Explicit,
    /// VPC main table, used when no explicit association exists.
    Main,
}

impl fmt::Display for RouteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteSource::Explicit => write!(f, "explicit"),
            RouteSource::Main => write!(f, "main"),
        }
    }
}

/// Query used to look up a route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTableFilter {
    /// Table explicitly associated with this subnet id.
    SubnetAssociation(String),
    /// Main table of this VPC id.
    MainAssociation(String),
}

impl fmt::Display for RouteTableFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTableFilter::SubnetAssociation(id) => write!(f, "association.subnet-id={id}"),
            RouteTableFilter::MainAssociation(vpc) => {
                write!(f, "vpc-id={vpc},association.main=true")
            }
        }
    }
}

/// Outcome of a lookup that may legitimately find nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    /// Found if `value` is `Some`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Lookup::Found(v),
            None => Lookup::NotFound,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}
