//! CSV output formatting for subnet classifications.

use super::terminal::format_field;
use crate::models::SubnetClassification;
use crate::processing::{public_subnet_ids, select_placement_subnet};
use colored::Colorize;

/// Column header line.
pub const CSV_HEADER: &str =
    r#" "cnt",              "subnet_id", "public",   "source",         "route_table_id",         "internet_gateway""#;

/// Format one classification as a CSV row. `j` is the 1-based row number.
pub fn classification_row(j: usize, c: &SubnetClassification) -> String {
    format!(
        "{j},{subnet_id},{public},{source},{route_table_id},{igw}",
        j = format_field(j, 6),
        subnet_id = format_field(&c.subnet_id, 26),
        public = format_field(if c.is_public() { "yes" } else { "no" }, 9),
        source = format_field(c.source, 11),
        route_table_id = format_field(&c.route_table_id, 25),
        igw = format_field(c.internet_gateway.as_deref().unwrap_or("none"), 24),
    )
}

/// Print classifications as CSV to stdout, then name the placement subnet.
pub fn print_classification(vpc_id: &str, classified: &[SubnetClassification]) {
    log::info!(
        "#Start print_classification() {vpc_id} subnet count = {}",
        classified.len()
    );
    println!("{CSV_HEADER}");

    for (i, c) in classified.iter().enumerate() {
        let row = classification_row(i + 1, c);
        if c.is_public() {
            println!("{}", row.green());
        } else {
            println!("{row}");
        }
    }

    let public = public_subnet_ids(classified);
    match select_placement_subnet(&public) {
        Some(subnet_id) => println!(
            "#{}# {vpc_id}: {} public subnet(s), placement subnet {}",
            "NOTE".on_blue(),
            public.len(),
            subnet_id.bold()
        ),
        None => {
            log::warn!("{vpc_id} has no public subnets");
            println!(
                "#{}# {vpc_id}: no public subnets, instance cannot be placed",
                "WARN".on_red()
            );
        }
    }
}
