//! OKX announcement listing scraper.
//!
//! Walks the paginated announcement listings at
//! `https://www.okx.com/help/section/<section>/page/<n>` and extracts the
//! title, publish date, and canonical link of every article whose date
//! falls inside an inclusive window.
//!
//! The HTML structural signatures (tag + class pairs for pagination
//! controls, listing items, title blocks, and date labels) are an external
//! contract with the site, not internal logic. They are confined to the
//! selectors at the top of this module so a site-side markup change only
//! touches this file.

use crate::config::SiteConfig;
use crate::models::ArticleRecord;
use crate::scrapers::fetch_document;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Pagination controls in a listing page, in document order. The last one
/// carries the highest page number.
static PAGINATION_ITEM: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.okui-pagination-item.okui-pagination-item-link").unwrap());

/// One article entry in a section listing.
static ARTICLE_ITEM: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li.index_article__15dX1").unwrap());

/// The headline block nested inside a listing entry.
static ARTICLE_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.index_title__6wUnB").unwrap());

/// The date label nested inside a listing entry.
static ARTICLE_DATE: Lazy<Selector> = Lazy::new(|| Selector::parse("span").unwrap());

/// The article anchor nested inside a listing entry.
static ARTICLE_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Literal prefix in front of the date in a listing entry's label,
/// e.g. `Published on Jan 5, 2024`.
const DATE_LABEL_PREFIX: &str = "Published on";

/// Format of the date in a listing entry's label, e.g. `Jan 5, 2024`.
const DATE_LABEL_FORMAT: &str = "%b %d, %Y";

/// Build the listing URL for a (section, page) pair.
///
/// Pure concatenation; the section string is not validated against the
/// configured enumeration.
pub fn page_url(base_url: &str, section: &str, page: u32) -> String {
    format!("{}/{}/page/{}", base_url.trim_end_matches('/'), section, page)
}

/// Determine the number of pages in a section from its first listing page.
///
/// Reads the text of the last pagination control in document order. A
/// listing with no pagination controls has exactly one page; a control
/// whose text is not a number (or is zero) also falls back to 1 rather
/// than aborting the section.
pub fn last_page_number(document: &Html) -> u32 {
    document
        .select(&PAGINATION_ITEM)
        .last()
        .and_then(|control| {
            let text = control.text().collect::<String>();
            match text.trim().parse::<u32>() {
                Ok(n) => Some(n),
                Err(_) => {
                    warn!(text = %text.trim(), "Last pagination control is not numeric; assuming one page");
                    None
                }
            }
        })
        .unwrap_or(1)
        .max(1)
}

/// Extract the articles on one listing page whose publish date falls
/// inside `[start, end]` (inclusive on both ends).
///
/// Relative hrefs are resolved against `root_domain` to form absolute
/// links; dates are reformatted as `YYYY-MM-DD`. Records come out in
/// document order.
///
/// A listing entry with a missing or unparseable date label, a missing or
/// empty title, or a missing/unresolvable link is skipped with a warning;
/// the rest of the page is still processed. Entries outside the window are
/// dropped silently.
pub fn extract_articles(
    document: &Html,
    root_domain: &Url,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<ArticleRecord> {
    let mut records = Vec::new();

    for item in document.select(&ARTICLE_ITEM) {
        let raw_label = match item.select(&ARTICLE_DATE).next() {
            Some(label) => label.text().collect::<String>(),
            None => {
                warn!("Listing entry has no date label; skipping entry");
                continue;
            }
        };
        let label = raw_label.trim();
        let date_text = label.strip_prefix(DATE_LABEL_PREFIX).unwrap_or(label).trim();
        let date = match NaiveDate::parse_from_str(date_text, DATE_LABEL_FORMAT) {
            Ok(date) => date,
            Err(e) => {
                warn!(label, error = %e, "Unparseable publish date; skipping entry");
                continue;
            }
        };

        if date < start || date > end {
            continue;
        }

        let title = match item.select(&ARTICLE_TITLE).next() {
            Some(block) => block.text().collect::<String>().trim().to_string(),
            None => {
                warn!(date = %date, "Listing entry has no title block; skipping entry");
                continue;
            }
        };
        if title.is_empty() {
            warn!(date = %date, "Listing entry has an empty title; skipping entry");
            continue;
        }

        let href = match item.select(&ARTICLE_LINK).next().and_then(|a| a.value().attr("href")) {
            Some(href) => href,
            None => {
                warn!(%title, "Listing entry has no article link; skipping entry");
                continue;
            }
        };
        let link = match root_domain.join(href) {
            Ok(link) => link.to_string(),
            Err(e) => {
                warn!(%title, href, error = %e, "Unresolvable article link; skipping entry");
                continue;
            }
        };

        records.push(ArticleRecord {
            title,
            date: date.format("%Y-%m-%d").to_string(),
            link,
        });
    }

    records
}

/// Crawl every configured section and collect the articles inside the
/// date window.
///
/// Sections are visited in enumeration order. For each section, page 1 is
/// fetched to learn the page count, then every page from 1 up to that
/// count is fetched and extracted in order (page 1 is fetched twice; the
/// resulting article set is the same either way since extraction only
/// happens inside the page loop's fetch). A page or section whose fetch
/// fails contributes nothing and the crawl moves on.
#[instrument(level = "info", skip_all, fields(%start, %end))]
pub async fn crawl_sections(
    client: &Client,
    config: &SiteConfig,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<ArticleRecord> {
    let mut records = Vec::new();

    for section in &config.sections {
        let pages = match fetch_document(client, &page_url(&config.base_url, section, 1)).await {
            Some(document) => last_page_number(&document),
            None => continue,
        };
        info!(%section, pages, "Walking section listing");

        for page in 1..=pages {
            let url = page_url(&config.base_url, section, page);
            let document = match fetch_document(client, &url).await {
                Some(document) => document,
                None => continue,
            };
            let found = extract_articles(&document, &config.root_domain, start, end);
            debug!(%url, count = found.len(), "Extracted articles in window");
            records.extend(found);
        }
    }

    info!(count = records.len(), "Crawl complete");
    records
}
