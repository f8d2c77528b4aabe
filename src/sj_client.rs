use crate::error::FetchError;
use crate::paging::{self, ContinuedPage};
use crate::salary::SalaryRange;
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;

const BASE_URL: &str = "https://api.superjob.ru";
const RUB_CODE: &str = "rub";
const AUTH_HEADER: &str = "X-Api-App-Id";
const APP_USER_AGENT: &str = "salary-scraper/0.1";

/// Town and catalogue filters applied to every query.
#[derive(Debug, Clone)]
pub struct SjSearchConfig {
    /// Numeric town id (4 = Moscow).
    pub town: u32,
    /// Numeric catalogue id (48 = IT, internet, telecom).
    pub catalogues: u32,
}

impl Default for SjSearchConfig {
    fn default() -> Self {
        Self {
            town: 4,
            catalogues: 48,
        }
    }
}

pub struct SjClient {
    client: Client,
    base_url: String,
    token: String,
    search: SjSearchConfig,
}

#[derive(Debug, Deserialize)]
struct SjPage {
    objects: Vec<SjVacancy>,
    more: bool,
}

/// SuperJob reports an unspecified bound as 0 rather than null, so the raw
/// record keeps plain numbers and the projection folds the sentinel away.
#[derive(Debug, Clone, Deserialize)]
pub struct SjVacancy {
    #[serde(default)]
    pub payment_from: f64,
    #[serde(default)]
    pub payment_to: f64,
    #[serde(default)]
    pub currency: String,
}

impl SjVacancy {
    /// Salary range in roubles, if the vacancy advertises one.
    pub fn rub_salary(&self) -> Option<SalaryRange> {
        if self.currency != RUB_CODE {
            return None;
        }

        Some(SalaryRange {
            lower: positive_bound(self.payment_from),
            upper: positive_bound(self.payment_to),
            currency: self.currency.clone(),
            gross: None,
        })
    }
}

fn positive_bound(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

impl SjClient {
    pub fn new(token: String, search: SjSearchConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(APP_USER_AGENT));

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        SjClient {
            client,
            base_url: BASE_URL.to_string(),
            token,
            search,
        }
    }

    /// All vacancies matching `keyword`, accumulated until the API stops
    /// reporting more pages.
    pub fn fetch_vacancies(&self, keyword: &str) -> Result<Vec<SjVacancy>, FetchError> {
        info!("Fetching SuperJob vacancies for '{}'", keyword);
        let vacancies = paging::fetch_continued(|page| self.fetch_page(keyword, page))?;
        info!("SuperJob: {} vacancies for '{}'", vacancies.len(), keyword);
        Ok(vacancies)
    }

    fn fetch_page(&self, keyword: &str, page: u32) -> Result<ContinuedPage<SjVacancy>, FetchError> {
        let url = format!("{}/2.0/vacancies/", self.base_url);
        let response = self
            .client
            .get(&url)
            .header(AUTH_HEADER, &self.token)
            .query(&[
                ("page", page.to_string()),
                ("town", self.search.town.to_string()),
                ("catalogues", self.search.catalogues.to_string()),
                ("keyword", keyword.to_string()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Server {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let body = response.text()?;
        let parsed: SjPage = serde_json::from_str(&body)?;
        debug!(
            "SuperJob page {}: {} objects, more = {}",
            page,
            parsed.objects.len(),
            parsed.more
        );

        Ok(ContinuedPage {
            items: parsed.objects,
            more: parsed.more,
        })
    }
}
