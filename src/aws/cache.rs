//! Cache management for inventory snapshots.
//!
//! Avoids repeated EC2 queries when classifying the same VPC again.

use super::ec2::AwsCliInventory;
use crate::error::InventoryError;
use crate::inventory::InventorySnapshot;
use std::path::Path;

/// Dated default cache file name for `vpc_id`.
pub fn default_cache_file(vpc_id: &str) -> String {
    let now = chrono::Utc::now().with_timezone(&chrono_tz::Pacific::Auckland);
    format!("inventory_cache_{vpc_id}_{}.json", now.format("%Y-%m-%d"))
}

/// Read a snapshot from a cache file.
///
/// The file must exist and describe `vpc_id`.
pub fn load_snapshot(cache_file: &str, vpc_id: &str) -> Result<InventorySnapshot, InventoryError> {
    if !Path::new(cache_file).exists() {
        return Err(InventoryError::Cache(format!(
            "Cache file does not exist: {cache_file}"
        )));
    }
    log::info!("Reading from cache file: {cache_file}");
    let json = std::fs::read_to_string(cache_file)?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let snapshot: InventorySnapshot = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| InventoryError::parse(format!("cache file {cache_file}"), e))?;

    if snapshot.vpc_id != vpc_id {
        return Err(InventoryError::Cache(format!(
            "Cache file {cache_file} is for {}, not {vpc_id}",
            snapshot.vpc_id
        )));
    }
    Ok(snapshot)
}

/// Read a snapshot from cache, or capture one from AWS if no cache exists.
///
/// # Arguments
/// * `vpc_id` - VPC the snapshot must describe
/// * `cache_file` - Optional path to a specific cache file. If None, uses default naming.
/// * `live` - Inventory used to capture a missing default cache
pub async fn read_inventory_cache(
    vpc_id: &str,
    cache_file: Option<&str>,
    live: &AwsCliInventory,
) -> Result<InventorySnapshot, InventoryError> {
    if let Some(file) = cache_file {
        log::info!("Using provided cache file: {file}");
        return load_snapshot(file, vpc_id);
    }

    let cache_file = default_cache_file(vpc_id);
    if Path::new(&cache_file).exists() {
        return load_snapshot(&cache_file, vpc_id);
    }

    log::warn!("Cache file not found: {cache_file}");
    let snapshot = live.snapshot(vpc_id).await?;
    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| InventoryError::Cache(format!("Error serializing JSON: {e}")))?;
    log::warn!("Writing data to cache file: {cache_file}");
    std::fs::write(&cache_file, json)?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_load_snapshot() {
        let snapshot = load_snapshot("src/tests/test_data/inventory_test_cache_01.json", "vpc-1")
            .expect("Error reading inventory cache");
        assert_eq!(snapshot.subnets.len(), 2);
        assert_eq!(snapshot.route_tables.len(), 2);
        assert!(snapshot.captured_at.is_some());
    }

    #[test]
    fn test_load_snapshot_wrong_vpc() {
        let err = load_snapshot("src/tests/test_data/inventory_test_cache_01.json", "vpc-2")
            .expect_err("VPC mismatch should fail");
        assert!(matches!(err, InventoryError::Cache(_)), "{err:?}");
    }

    #[test]
    fn test_load_snapshot_missing_file() {
        let err = load_snapshot("src/tests/test_data/no_such_cache.json", "vpc-1")
            .expect_err("Missing file should fail");
        assert!(err.to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn test_explicit_cache_file_skips_live_inventory() {
        let live = AwsCliInventory::new(&Config::default());
        let snapshot = read_inventory_cache(
            "vpc-0a1b2c3d4e5f60718",
            Some("src/tests/test_data/inventory_test_cache_02.json"),
            &live,
        )
        .await
        .expect("Error reading inventory cache");
        assert_eq!(snapshot.subnets.len(), 4);
    }

    #[test]
    fn test_default_cache_file_name() {
        let name = default_cache_file("vpc-1");
        assert!(name.starts_with("inventory_cache_vpc-1_"));
        assert!(name.ends_with(".json"));
    }
}
