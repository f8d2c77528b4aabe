pub mod config;
pub mod error;
pub mod hh_client;
pub mod logger;
pub mod paging;
pub mod salary;
pub mod sj_client;
pub mod stats;
pub mod table;

// Exporting types for convenience
pub use config::Config;
pub use error::FetchError;
pub use hh_client::{HhClient, HhSearchConfig, HhVacancy};
pub use salary::SalaryRange;
pub use sj_client::{SjClient, SjSearchConfig, SjVacancy};
pub use stats::{collect_stats, PositionStats};
