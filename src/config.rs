use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const SWIFTYPE_URL: &str = "https://search-api.swiftype.com/api/v1/public/engines/search.json";
pub const ENGINE_KEY: &str = "sR_cCweEaptts3ExMPzv";
pub const PER_PAGE: u32 = 100;
pub const SORT_FIELD: &str = "availabilityRank";
pub const RECORD_TYPE: &str = "Consultant";
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; research-scraper/1.0)";
pub const OUTPUT_FILE: &str = "nuffield_consultants.csv";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const PAGE_DELAY: Duration = Duration::from_millis(400);
pub const FAILURE_BACKOFF: Duration = Duration::from_secs(2);

/// Columns exported for every consultant, in output order.
pub const FIELDS: [&str; 22] = [
    "id", "fullname", "firstname", "lastname", "title",
    "url", "gender", "specialties", "hospitals", "locations",
    "image", "bookable", "gmcNumber", "professionalQualifications",
    "languages", "offersPaediatrics", "roboticAssistedSurgery",
    "gpReferralRequired", "daysUntilNextAppointment", "availabilityRank",
    "popularity", "updated_at",
];

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub endpoint: String,
    pub engine_key: String,
    pub per_page: u32,
    pub user_agent: String,
    pub timeout: Duration,
    pub page_delay: Duration,
    pub failure_backoff: Duration,
    pub output_path: PathBuf,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfig {
            endpoint: SWIFTYPE_URL.to_string(),
            engine_key: ENGINE_KEY.to_string(),
            per_page: PER_PAGE,
            user_agent: USER_AGENT.to_string(),
            timeout: REQUEST_TIMEOUT,
            page_delay: PAGE_DELAY,
            failure_backoff: FAILURE_BACKOFF,
            output_path: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl ScraperConfig {
    /// Defaults, with `SCRAPER_ENDPOINT` and `SCRAPER_OUTPUT` taken from the environment when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = ScraperConfig::default();
        if let Some(endpoint) = var("SCRAPER_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Some(output) = var("SCRAPER_OUTPUT") {
            config.output_path = PathBuf::from(output);
        }
        config
    }

    /// Same settings without any sleeping between pages.
    pub fn without_delays(mut self) -> Self {
        self.page_delay = Duration::ZERO;
        self.failure_backoff = Duration::ZERO;
        self
    }
}
