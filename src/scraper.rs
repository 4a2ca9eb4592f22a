use log::{info, warn, error};
use crate::config::ScraperConfig;
use crate::delay_manager;
use crate::error::Result;
use crate::extractor::{flatten_record, FlatRow};
use crate::output_writer;
use crate::search_engine::{PageSource, Record};

#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    Fetched { page: u32, records: usize },
    Skipped { page: u32, reason: String },
}

impl PageOutcome {
    pub fn page(&self) -> u32 {
        match self {
            PageOutcome::Fetched { page, .. } | PageOutcome::Skipped { page, .. } => *page,
        }
    }
}

#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub total_result_count: u64,
    pub num_pages: u32,
    pub records: Vec<Record>,
    pub outcomes: Vec<PageOutcome>,
}

impl ScrapeReport {
    pub fn skipped_pages(&self) -> Vec<u32> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, PageOutcome::Skipped { .. }))
            .map(PageOutcome::page)
            .collect()
    }

    pub fn fetched_pages(&self) -> Vec<u32> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, PageOutcome::Fetched { .. }))
            .map(PageOutcome::page)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|o| matches!(o, PageOutcome::Fetched { .. }))
    }
}

/// Fetches page 1, then every remaining page once, in order.
///
/// A page 1 failure is returned as-is since the page count is unknown without it. Later
/// failures are logged, recorded as [`PageOutcome::Skipped`], and followed by the backoff
/// delay before moving on to the next page.
pub fn collect_all<S: PageSource + ?Sized>(source: &S, config: &ScraperConfig) -> Result<ScrapeReport> {
    info!("Fetching page 1 to determine total results...");
    let first_page = source.fetch_page(1)?;

    let mut report = ScrapeReport {
        total_result_count: first_page.total_result_count(),
        num_pages: first_page.num_pages(),
        ..ScrapeReport::default()
    };
    info!("Total consultants: {}", report.total_result_count);
    info!("Total pages (at {}/page): {}", config.per_page, report.num_pages);

    let first_records = first_page.into_records();
    info!("  Page 1: {} records", first_records.len());
    report.outcomes.push(PageOutcome::Fetched { page: 1, records: first_records.len() });
    report.records = first_records;

    for page in 2..=report.num_pages {
        delay_manager::page_delay(config.page_delay);

        match source.fetch_page(page) {
            Ok(resp) => {
                let records = resp.into_records();
                let count = records.len();
                report.records.extend(records);
                report.outcomes.push(PageOutcome::Fetched { page, records: count });
                info!(
                    "  Page {}/{}: {} records (total so far: {})",
                    page, report.num_pages, count, report.records.len()
                );
            }
            Err(e) => {
                error!("  ERROR on page {}: {}", page, e);
                report.outcomes.push(PageOutcome::Skipped { page, reason: e.to_string() });
                delay_manager::failure_backoff(config.failure_backoff);
            }
        }
    }

    info!("Total records collected: {}", report.records.len());
    if report.records.len() as u64 > report.total_result_count {
        warn!(
            "Collected {} records but the API reported only {}",
            report.records.len(),
            report.total_result_count
        );
    }
    let skipped = report.skipped_pages();
    if !skipped.is_empty() {
        warn!("Skipped {} page(s): {:?}", skipped.len(), skipped);
    }

    Ok(report)
}

/// Collects every page, then writes the flattened rows to `config.output_path`.
/// Nothing is written when page 1 fails.
pub fn scrape_to_csv<S: PageSource + ?Sized>(source: &S, config: &ScraperConfig) -> Result<ScrapeReport> {
    let report = collect_all(source, config)?;
    let rows: Vec<FlatRow> = report.records.iter().map(flatten_record).collect();
    output_writer::write_csv(&config.output_path, &rows)?;
    Ok(report)
}
