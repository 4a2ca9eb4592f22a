use consultant_scraper_lib::{logger, scrape_to_csv, ScraperConfig, SwiftypeClient};

use std::error::Error;
use log::{info, warn};
use chrono::Local;

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    info!(
        "Starting Nuffield Health consultant scrape - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let config = ScraperConfig::from_env();
    let client = SwiftypeClient::new(&config)?;

    let report = scrape_to_csv(&client, &config)?;
    if !report.is_complete() {
        warn!(
            "Output is missing pages {:?}; {} of {} records saved",
            report.skipped_pages(),
            report.records.len(),
            report.total_result_count
        );
    }

    info!("Saved to: {}", config.output_path.display());
    info!("Done - {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    Ok(())
}
