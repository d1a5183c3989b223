//! EC2 subnet data model.

use serde::{Deserialize, Serialize};

/// A subnet as returned by `aws ec2 describe-subnets`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Subnet {
    /// Subnet identifier, e.g. `subnet-0abc`.
    pub subnet_id: String,
    /// Parent VPC identifier.
    pub vpc_id: String,
    /// IPv4 CIDR block of the subnet.
    #[serde(default)]
    pub cidr_block: Option<String>,
    /// Availability zone the subnet lives in.
    #[serde(default)]
    pub availability_zone: Option<String>,
    /// Whether instances launched here get a public IPv4 by default.
    #[serde(default)]
    pub map_public_ip_on_launch: bool,
}

impl Subnet {
    /// Create a subnet with only the identifiers set.
    pub fn new(subnet_id: &str, vpc_id: &str) -> Self {
        Subnet {
            subnet_id: subnet_id.to_string(),
            vpc_id: vpc_id.to_string(),
            cidr_block: None,
            availability_zone: None,
            map_public_ip_on_launch: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_cli_subnet() {
        let json = r#"{
            "AvailabilityZone": "ap-southeast-2a",
            "CidrBlock": "172.31.0.0/20",
            "MapPublicIpOnLaunch": true,
            "State": "available",
            "SubnetId": "subnet-0a1b",
            "VpcId": "vpc-1"
        }"#;
        let subnet: Subnet = serde_json::from_str(json).expect("Error parsing subnet");
        assert_eq!(subnet.subnet_id, "subnet-0a1b");
        assert_eq!(subnet.vpc_id, "vpc-1");
        assert_eq!(subnet.cidr_block.as_deref(), Some("172.31.0.0/20"));
        assert!(subnet.map_public_ip_on_launch);
    }

    #[test]
    fn test_deserialize_minimal_subnet() {
        let subnet: Subnet = serde_json::from_str(r#"{"SubnetId":"subnet-a","VpcId":"vpc-1"}"#)
            .expect("Error parsing subnet");
        assert_eq!(subnet, Subnet::new("subnet-a", "vpc-1"));
    }
}
