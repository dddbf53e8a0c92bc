pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ToolConfig;

pub use core::{
    currency::format_currency,
    date::{format_date, format_date_in},
    id::{compose_id, generate_id, RandomIdGenerator, ThreadRngIdGenerator},
};
pub use domain::{model::Amount, ports::IdGenerator};
pub use utils::error::{HelperError, Result};
