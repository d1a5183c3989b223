//! EC2 inventory queries through the aws cli.

use super::cli::{self, RunLimits};
use crate::config::Config;
use crate::error::InventoryError;
use crate::inventory::{first_match, Inventory, InventorySnapshot};
use crate::models::{Lookup, RouteTable, RouteTableFilter, Subnet};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Output of `aws ec2 describe-subnets`.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SubnetsResponse {
    #[serde(default)]
    pub subnets: Vec<Subnet>,
}

/// Output of `aws ec2 describe-route-tables`.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RouteTablesResponse {
    #[serde(default)]
    pub route_tables: Vec<RouteTable>,
}

/// [`Inventory`] backed by the `aws` command line client.
///
/// The cli paginates on its own, so each query is a single command.
#[derive(Debug, Clone)]
pub struct AwsCliInventory {
    region: Option<String>,
    profile: Option<String>,
    limits: RunLimits,
}

impl AwsCliInventory {
    pub fn new(config: &Config) -> Self {
        AwsCliInventory {
            region: config.region.clone(),
            profile: config.profile.clone(),
            limits: RunLimits {
                timeout: config.lookup_timeout,
                max_output_bytes: config.max_output_bytes,
            },
        }
    }

    /// Build an `aws ec2 <action>` command line.
    fn command(&self, action: &str, filters: &[String]) -> String {
        let mut cmd = String::from("aws");
        if let Some(profile) = &self.profile {
            cmd.push_str(&format!(" --profile '{profile}'"));
        }
        if let Some(region) = &self.region {
            cmd.push_str(&format!(" --region {region}"));
        }
        cmd.push_str(&format!(" ec2 {action}"));
        if !filters.is_empty() {
            cmd.push_str(&format!(" --filters {}", filters.join(" ")));
        }
        cmd.push_str(" --output json");
        cmd
    }

    async fn query<T: DeserializeOwned>(&self, cmd: &str) -> Result<T, InventoryError> {
        let output = cli::run(cmd, self.limits).await?;
        parse_json(cmd, &output)
    }

    async fn route_tables(&self, filters: &[String]) -> Result<Vec<RouteTable>, InventoryError> {
        let cmd = self.command("describe-route-tables", filters);
        let response: RouteTablesResponse = self.query(&cmd).await?;
        Ok(response.route_tables)
    }

    /// Capture every subnet and route table of `vpc_id`.
    pub async fn snapshot(&self, vpc_id: &str) -> Result<InventorySnapshot, InventoryError> {
        let subnets = self.list_subnets(vpc_id).await?;
        let route_tables = self.route_tables(&[vpc_filter(vpc_id)]).await?;
        log::info!(
            "Captured {} subnets and {} route tables for {vpc_id}",
            subnets.len(),
            route_tables.len()
        );
        Ok(InventorySnapshot {
            vpc_id: vpc_id.to_string(),
            captured_at: Some(chrono::Utc::now().to_rfc3339()),
            subnets,
            route_tables,
        })
    }
}

fn vpc_filter(vpc_id: &str) -> String {
    format!("Name=vpc-id,Values={vpc_id}")
}

/// Translate a lookup filter into `--filters` arguments.
fn route_table_filters(filter: &RouteTableFilter) -> Vec<String> {
    match filter {
        RouteTableFilter::SubnetAssociation(subnet_id) => {
            vec![format!("Name=association.subnet-id,Values={subnet_id}")]
        }
        RouteTableFilter::MainAssociation(vpc_id) => vec![
            vpc_filter(vpc_id),
            "Name=association.main,Values=true".to_string(),
        ],
    }
}

/// Parse cli JSON, reporting the failing path on error.
fn parse_json<T: DeserializeOwned>(cmd: &str, output: &str) -> Result<T, InventoryError> {
    let mut deserializer = serde_json::Deserializer::from_str(output);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", output);
        InventoryError::parse(cmd, e)
    })
}

#[async_trait]
impl Inventory for AwsCliInventory {
    async fn list_subnets(&self, vpc_id: &str) -> Result<Vec<Subnet>, InventoryError> {
        let cmd = self.command("describe-subnets", &[vpc_filter(vpc_id)]);
        let response: SubnetsResponse = self.query(&cmd).await?;
        log::info!("Got {} subnets for {vpc_id}", response.subnets.len());
        Ok(response.subnets)
    }

    async fn find_route_table(
        &self,
        filter: &RouteTableFilter,
    ) -> Result<Lookup<RouteTable>, InventoryError> {
        let tables = self.route_tables(&route_table_filters(filter)).await?;
        Ok(first_match(filter, tables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory(region: Option<&str>, profile: Option<&str>) -> AwsCliInventory {
        let config = Config {
            region: region.map(str::to_string),
            profile: profile.map(str::to_string),
            ..Default::default()
        };
        AwsCliInventory::new(&config)
    }

    #[test]
    fn test_command_plain() {
        let inv = inventory(None, None);
        assert_eq!(
            inv.command("describe-subnets", &[vpc_filter("vpc-1")]),
            "aws ec2 describe-subnets --filters Name=vpc-id,Values=vpc-1 --output json"
        );
    }

    #[test]
    fn test_command_with_region_and_profile() {
        let inv = inventory(Some("ap-southeast-2"), Some("prod"));
        let filters = route_table_filters(&RouteTableFilter::MainAssociation("vpc-1".to_string()));
        assert_eq!(
            inv.command("describe-route-tables", &filters),
            "aws --profile 'prod' --region ap-southeast-2 ec2 describe-route-tables --filters Name=vpc-id,Values=vpc-1 Name=association.main,Values=true --output json"
        );
    }

    #[test]
    fn test_subnet_association_filter() {
        let filters =
            route_table_filters(&RouteTableFilter::SubnetAssociation("subnet-a".to_string()));
        assert_eq!(filters, vec!["Name=association.subnet-id,Values=subnet-a"]);
    }

    #[test]
    fn test_parse_empty_route_tables() {
        let response: RouteTablesResponse =
            parse_json("test", r#"{"RouteTables": []}"#).expect("Error parsing");
        assert!(response.route_tables.is_empty());
    }

    #[test]
    fn test_parse_describe_subnets() {
        let json = std::fs::read_to_string("src/tests/test_data/describe_subnets_01.json")
            .expect("Error reading test data");
        let response: SubnetsResponse = parse_json("test", &json).expect("Error parsing");
        let ids: Vec<&str> = response
            .subnets
            .iter()
            .map(|s| s.subnet_id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "subnet-0c1e2a9f3b4d5e601",
                "subnet-0c1e2a9f3b4d5e602",
                "subnet-0c1e2a9f3b4d5e603"
            ]
        );
    }

    #[test]
    fn test_parse_bad_json_reports_path() {
        let err = parse_json::<RouteTablesResponse>("test", r#"{"RouteTables": [{"RouteTableId": 1}]}"#)
            .expect_err("Expected parse failure");
        match err {
            InventoryError::Parse { path, .. } => assert_eq!(path, "RouteTables[0].RouteTableId"),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
