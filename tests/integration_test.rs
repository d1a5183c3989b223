//! Integration tests for aws-public-subnets
//!
//! These tests run the complete workflow from a cached inventory snapshot.

use aws_public_subnets::{
    aws::load_snapshot,
    classify_public_subnets, classify_subnets,
    config::Config,
    get_subnet_classification,
    inventory::SnapshotInventory,
    models::RouteSource,
    select_placement_subnet, InventoryError,
};

const CACHE_02: &str = "src/tests/test_data/inventory_test_cache_02.json";
const VPC_02: &str = "vpc-0a1b2c3d4e5f60718";

#[tokio::test]
async fn test_full_workflow_with_cache() {
    let snapshot = load_snapshot(CACHE_02, VPC_02).expect("Failed to read inventory cache");
    assert_eq!(snapshot.subnets.len(), 4, "Expected 4 subnets in test data");
    let inventory = SnapshotInventory::new(snapshot);

    let public = classify_public_subnets(&inventory, VPC_02)
        .await
        .expect("Failed to classify");
    assert_eq!(
        public,
        vec!["subnet-07f00d0000000a001", "subnet-07f00d0000000c003"]
    );
    assert_eq!(
        select_placement_subnet(&public),
        Some("subnet-07f00d0000000a001")
    );
}

#[tokio::test]
async fn test_lookup_paths_with_cache() {
    let inventory = SnapshotInventory::new(
        load_snapshot(CACHE_02, VPC_02).expect("Failed to read inventory cache"),
    );
    let classified = classify_subnets(&inventory, VPC_02, 3)
        .await
        .expect("Failed to classify");

    let summary: Vec<(&str, RouteSource, bool)> = classified
        .iter()
        .map(|c| (c.route_table_id.as_str(), c.source, c.is_public()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("rtb-0public000000001", RouteSource::Explicit, true),
            ("rtb-0main00000000001", RouteSource::Main, false),
            ("rtb-0public000000001", RouteSource::Explicit, true),
            ("rtb-0private00000001", RouteSource::Explicit, false),
        ]
    );
}

#[tokio::test]
async fn test_small_cache_file() {
    let config = Config {
        cache_file: Some("src/tests/test_data/inventory_test_cache_01.json".to_string()),
        ..Default::default()
    };
    let classified = get_subnet_classification(&config, "vpc-1")
        .await
        .expect("Failed to classify");
    let public: Vec<&str> = classified
        .iter()
        .filter(|c| c.is_public())
        .map(|c| c.subnet_id.as_str())
        .collect();
    assert_eq!(public, vec!["subnet-a", "subnet-b"]);
}

#[tokio::test]
async fn test_vpc_without_subnets() {
    let inventory = SnapshotInventory::new(
        load_snapshot("src/tests/test_data/inventory_test_cache_03.json", "vpc-empty")
            .expect("Failed to read inventory cache"),
    );
    let public = classify_public_subnets(&inventory, "vpc-empty")
        .await
        .expect("Failed to classify");
    assert!(public.is_empty());
    assert_eq!(select_placement_subnet(&public), None);
}

#[tokio::test]
async fn test_missing_cache_file_is_error() {
    let config = Config {
        cache_file: Some("src/tests/test_data/missing.json".to_string()),
        ..Default::default()
    };
    let err = get_subnet_classification(&config, "vpc-1")
        .await
        .expect_err("Missing cache must fail");
    let err = err
        .downcast_ref::<InventoryError>()
        .expect("Expected an InventoryError");
    assert!(matches!(err, InventoryError::Cache(_)));
}
