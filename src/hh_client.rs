use crate::error::FetchError;
use crate::paging::{self, CountedPage};
use crate::salary::SalaryRange;
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;

const BASE_URL: &str = "https://api.hh.ru";
// HeadHunter still reports roubles under the pre-2004 code.
const RUB_CODE: &str = "RUR";
const APP_USER_AGENT: &str = "salary-scraper/0.1";

/// Search area and lookback window applied to every query.
#[derive(Debug, Clone)]
pub struct HhSearchConfig {
    /// Numeric region id (1 = Moscow).
    pub area: u32,
    /// Only vacancies published within this many days.
    pub period_days: u32,
}

impl Default for HhSearchConfig {
    fn default() -> Self {
        Self {
            area: 1,
            period_days: 30,
        }
    }
}

pub struct HhClient {
    client: Client,
    base_url: String,
    search: HhSearchConfig,
}

#[derive(Debug, Deserialize)]
struct HhPage {
    items: Vec<HhVacancy>,
    pages: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhVacancy {
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhSalary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: String,
    pub gross: Option<bool>,
}

impl HhVacancy {
    /// Salary range in roubles, if the vacancy advertises one.
    pub fn rub_salary(&self) -> Option<SalaryRange> {
        let salary = self.salary.as_ref()?;
        if salary.currency != RUB_CODE {
            return None;
        }

        Some(SalaryRange {
            lower: salary.from,
            upper: salary.to,
            currency: salary.currency.clone(),
            gross: salary.gross,
        })
    }
}

impl HhClient {
    pub fn new(search: HhSearchConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(APP_USER_AGENT));

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        HhClient {
            client,
            base_url: BASE_URL.to_string(),
            search,
        }
    }

    /// All vacancies matching `text`, accumulated across every result page.
    pub fn fetch_vacancies(&self, text: &str) -> Result<Vec<HhVacancy>, FetchError> {
        info!("Fetching HeadHunter vacancies for '{}'", text);
        let vacancies = paging::fetch_counted(|page| self.fetch_page(text, page))?;
        info!("HeadHunter: {} vacancies for '{}'", vacancies.len(), text);
        Ok(vacancies)
    }

    fn fetch_page(&self, text: &str, page: u32) -> Result<CountedPage<HhVacancy>, FetchError> {
        let url = format!("{}/vacancies/", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("area", self.search.area.to_string()),
                ("period", self.search.period_days.to_string()),
                ("text", text.to_string()),
                ("page", page.to_string()),
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
        let parsed: HhPage = serde_json::from_str(&body)?;
        debug!(
            "HeadHunter page {}: {} items, {} pages total",
            page,
            parsed.items.len(),
            parsed.pages
        );

        Ok(CountedPage {
            items: parsed.items,
            total_pages: parsed.pages,
        })
    }
}

impl Default for HhClient {
    fn default() -> Self {
        Self::new(HhSearchConfig::default())
    }
}
