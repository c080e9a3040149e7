// src/config/consts.rs

// Net config
pub const HOST: &str = "www.basketball-reference.com";
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("nba_scrape/", env!("CARGO_PKG_VERSION"));
