//! Public subnet classification.
//!
//! A subnet is public when its effective route table, the explicitly
//! associated table or else the VPC's main table, routes to an internet gateway.

use crate::error::InventoryError;
use crate::inventory::Inventory;
use crate::models::{Lookup, RouteSource, RouteTable, RouteTableFilter, Subnet, SubnetClassification};
use futures::stream::{self, StreamExt, TryStreamExt};

/// Resolve the route table that governs `subnet`.
///
/// Only a `NotFound` explicit lookup falls back to the main table, any
/// lookup error is returned as is.
pub async fn effective_route_table<I>(
    inventory: &I,
    subnet: &Subnet,
) -> Result<(RouteTable, RouteSource), InventoryError>
where
    I: Inventory + ?Sized,
{
    let explicit = RouteTableFilter::SubnetAssociation(subnet.subnet_id.clone());
    match inventory.find_route_table(&explicit).await? {
        Lookup::Found(table) => Ok((table, RouteSource::Explicit)),
        Lookup::NotFound => {
            log::debug!(
                "{} has no explicit route table, using main table of {}",
                subnet.subnet_id,
                subnet.vpc_id
            );
            let main = RouteTableFilter::MainAssociation(subnet.vpc_id.clone());
            match inventory.find_route_table(&main).await? {
                Lookup::Found(table) => Ok((table, RouteSource::Main)),
                Lookup::NotFound => Err(InventoryError::MainRouteTableMissing(
                    subnet.vpc_id.clone(),
                )),
            }
        }
    }
}

/// Classify a single subnet.
pub async fn classify_subnet<I>(
    inventory: &I,
    subnet: &Subnet,
) -> Result<SubnetClassification, InventoryError>
where
    I: Inventory + ?Sized,
{
    let (table, source) = effective_route_table(inventory, subnet).await?;
    let internet_gateway = table
        .internet_gateway_route()
        .and_then(|r| r.internet_gateway())
        .map(str::to_string);

    log::debug!(
        "{subnet} -> {table} ({source}) igw={igw}",
        subnet = subnet.subnet_id,
        table = table.route_table_id,
        igw = internet_gateway.as_deref().unwrap_or("none")
    );

    Ok(SubnetClassification {
        subnet_id: subnet.subnet_id.clone(),
        route_table_id: table.route_table_id,
        source,
        internet_gateway,
    })
}

/// Classify every subnet of `vpc_id`.
///
/// Results follow the inventory's subnet enumeration order. With
/// `concurrency > 1` up to that many subnets are resolved at once; order is
/// still preserved. The first error aborts the call, no partial result is
/// returned.
pub async fn classify_subnets<I>(
    inventory: &I,
    vpc_id: &str,
    concurrency: usize,
) -> Result<Vec<SubnetClassification>, InventoryError>
where
    I: Inventory + ?Sized,
{
    let vpc_id = vpc_id.trim();
    if vpc_id.is_empty() {
        return Err(InventoryError::InvalidVpcId(vpc_id.to_string()));
    }

    let subnets = inventory.list_subnets(vpc_id).await?;
    log::info!(
        "Classifying {} subnets of {vpc_id} (concurrency={concurrency})",
        subnets.len()
    );

    let classified = if concurrency <= 1 {
        let mut classified = Vec::with_capacity(subnets.len());
        for subnet in subnets.iter() {
            classified.push(classify_subnet(inventory, subnet).await?);
        }
        classified
    } else {
        stream::iter(subnets.iter())
            .map(|subnet| classify_subnet(inventory, subnet))
            .buffered(concurrency)
            .try_collect::<Vec<_>>()
            .await?
    };

    log::info!(
        "{vpc_id}: {} of {} subnets are public",
        classified.iter().filter(|c| c.is_public()).count(),
        classified.len()
    );
    Ok(classified)
}

/// Ordered ids of the public subnets of `vpc_id`.
pub async fn classify_public_subnets<I>(
    inventory: &I,
    vpc_id: &str,
) -> Result<Vec<String>, InventoryError>
where
    I: Inventory + ?Sized,
{
    let classified = classify_subnets(inventory, vpc_id, 1).await?;
    Ok(public_subnet_ids(&classified))
}

/// Ids of the public entries, in input order.
pub fn public_subnet_ids(classified: &[SubnetClassification]) -> Vec<String> {
    classified
        .iter()
        .filter(|c| c.is_public())
        .map(|c| c.subnet_id.clone())
        .collect()
}

/// Subnet the gateway instance is placed in: the first public one.
pub fn select_placement_subnet(public_subnets: &[String]) -> Option<&str> {
    public_subnets.first().map(String::as_str)
}
