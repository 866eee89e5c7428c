//! Command-line interface definitions for the OKX announcement harvester.
//!
//! This module defines the positional CLI arguments using the `clap` crate.
//! Dates are parsed into [`chrono::NaiveDate`] at argument-parse time, so a
//! malformed date terminates the process before any network activity.

use chrono::NaiveDate;
use clap::Parser;

/// Command-line arguments for the harvester.
///
/// All three arguments are positional:
///
/// ```sh
/// okx_announcements 2024-01-01 2024-01-31 ./out
/// ```
///
/// `start_date` and `end_date` form an inclusive window in `YYYY-MM-DD`
/// form. A window where start > end is accepted and simply matches no
/// articles.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Start of the publish-date window (inclusive), YYYY-MM-DD
    pub start_date: NaiveDate,

    /// End of the publish-date window (inclusive), YYYY-MM-DD
    pub end_date: NaiveDate,

    /// Directory where articles_info.json is written (created if missing)
    pub output_folder: String,
}
