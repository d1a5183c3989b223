use aws_public_subnets::config::Config;
use aws_public_subnets::get_subnet_classification;
use aws_public_subnets::output::print_classification;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    log4rs::init_file("log4rs.yml", Default::default())
        .map_err(|e| format!("Error initializing log4rs: {e}"))?;
    log::info!("#Start main()");

    let config = Config::from_env()?;
    let vpc_id = std::env::args()
        .nth(1)
        .or_else(|| config.vpc_id.clone())
        .ok_or("Usage: aws-public-subnets <VPC_ID> (or set VPC_ID)")?;

    let classified = get_subnet_classification(&config, &vpc_id).await?;
    print_classification(&vpc_id, &classified);

    Ok(())
}
// cargo watch -x 'fmt' -x 'run -- vpc-0123456789abcdef0'
