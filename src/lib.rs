pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod records;
pub mod scrapers;
pub mod writer;
