use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use log::debug;
use crate::config::{ScraperConfig, RECORD_TYPE, SORT_FIELD};
use crate::error::{Result, ScrapeError};

/// One raw listing. The upstream schema is not enforced.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// The upstream API nests most request and response sections under a `page` document type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageScoped<T> {
    pub page: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeFilter {
    #[serde(rename = "type")]
    pub record_type: FilterClause,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterClause {
    #[serde(rename = "type")]
    pub op: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub engine_key: String,
    pub per_page: u32,
    pub page: u32,
    pub sort_direction: PageScoped<String>,
    pub sort_field: PageScoped<String>,
    pub q: String,
    pub filters: PageScoped<TypeFilter>,
}

impl SearchRequest {
    pub fn for_page(engine_key: &str, per_page: u32, page: u32) -> Self {
        SearchRequest {
            engine_key: engine_key.to_string(),
            per_page,
            page,
            sort_direction: PageScoped { page: SORT_FIELD.to_string() },
            sort_field: PageScoped { page: SORT_FIELD.to_string() },
            q: String::new(),
            filters: PageScoped {
                page: TypeFilter {
                    record_type: FilterClause {
                        op: "and".to_string(),
                        values: vec![RECORD_TYPE.to_string()],
                    },
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageInfo {
    pub total_result_count: u64,
    pub num_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    pub info: PageScoped<PageInfo>,
    pub records: PageScoped<Vec<Record>>,
}

impl SearchResponse {
    pub fn total_result_count(&self) -> u64 {
        self.info.page.total_result_count
    }

    pub fn num_pages(&self) -> u32 {
        self.info.page.num_pages
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records.page
    }
}

/// Anything that can hand back one page of search results.
pub trait PageSource {
    fn fetch_page(&self, page: u32) -> Result<SearchResponse>;
}

pub struct SwiftypeClient {
    client: Client,
    endpoint: String,
    engine_key: String,
    per_page: u32,
}

impl SwiftypeClient {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(SwiftypeClient {
            client,
            endpoint: config.endpoint.clone(),
            engine_key: config.engine_key.clone(),
            per_page: config.per_page,
        })
    }

    pub fn request_for(&self, page: u32) -> SearchRequest {
        SearchRequest::for_page(&self.engine_key, self.per_page, page)
    }
}

impl PageSource for SwiftypeClient {
    fn fetch_page(&self, page: u32) -> Result<SearchResponse> {
        let request = self.request_for(page);
        debug!("POST {} (page {})", self.endpoint, page);

        let resp = self.client.post(&self.endpoint).json(&request).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { page, status: status.as_u16() });
        }

        let body = resp.text()?;
        serde_json::from_str(&body).map_err(|source| ScrapeError::Decode { page, source })
    }
}
