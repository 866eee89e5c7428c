//! # OKX Announcements
//!
//! A date-bounded harvester for the announcement listings on okx.com.
//! It walks every announcement section's paginated index, keeps the
//! articles whose publish date falls inside a caller-supplied window,
//! and writes the aggregate as a single JSON file.
//!
//! ## Pipeline
//!
//! 1. **Locate**: build the listing URL for a (section, page) pair
//! 2. **Fetch**: one GET per page with a browser-like User-Agent
//! 3. **Extract**: pull (title, date, link) from each listing entry and
//!    filter by the date window
//! 4. **Output**: write `articles_info.json` into the output directory
//!
//! Everything runs sequentially; a failed page contributes nothing and
//! the crawl moves on.

pub mod cli;
pub mod config;
pub mod models;
pub mod outputs;
pub mod scrapers;
pub mod utils;
