//! Subnet classification logic.
//!
//! - [`classifier`] - effective route table resolution and public/private verdicts

mod classifier;

// Re-export public functions
pub use classifier::{
    classify_public_subnets, classify_subnet, classify_subnets, effective_route_table,
    public_subnet_ids, select_placement_subnet,
};
