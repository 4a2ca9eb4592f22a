pub mod config;
pub mod error;
pub mod search_engine;
pub mod scraper;
pub mod extractor;
pub mod output_writer;
pub mod delay_manager;
pub mod logger;

// Exporting types for convenience
pub use config::{ScraperConfig, FIELDS};
pub use error::{Result, ScrapeError};
pub use search_engine::{PageSource, Record, SearchRequest, SearchResponse, SwiftypeClient};
pub use scraper::{collect_all, scrape_to_csv, PageOutcome, ScrapeReport};
pub use extractor::{flatten_record, flatten_value, FlatRow};
