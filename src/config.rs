//! Site configuration for the okx.com announcement listings.
//!
//! Everything the crawl depends on from the outside world lives in one
//! explicit [`SiteConfig`] value: the listing base URL, the root domain
//! used to resolve relative article links, the User-Agent string sent with
//! every request, and the fixed enumeration of announcement sections.
//! Passing the config into the orchestrator (instead of reading globals)
//! lets tests point the whole pipeline at a mock server.

use url::Url;

/// User-Agent sent with every listing request. The site serves its
/// listings to ordinary desktop browsers, so we identify as one.
const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// The announcement sections on okx.com, in crawl order.
pub const SECTIONS: [&str; 16] = [
    "announcements-latest-announcements",
    "announcements-latest-events",
    "announcements-deposit-withdrawal-suspension-resumption",
    "announcements-spot-margin-trading",
    "announcements-derivatives",
    "announcements-oktc",
    "announcements-fiat-gateway",
    "announcements-okx-broker",
    "announcements-okx-pool-announcement",
    "announcements-new-token",
    "announcements-introduction-to-digital-assets",
    "announcements-okb-buy-back-burn",
    "announcements-api",
    "announcements-others",
    "announcements-product-updates",
    "announcements-web3",
];

/// Configuration for one crawl of a listing site.
///
/// [`SiteConfig::default`] targets production okx.com; tests build configs
/// whose `base_url` and `root_domain` point at a local mock server.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base of every section listing URL, without a trailing slash,
    /// e.g. `https://www.okx.com/help/section`.
    pub base_url: String,
    /// Root domain used to resolve relative article hrefs to absolute links.
    pub root_domain: Url,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Section identifiers to crawl, in order.
    pub sections: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: "https://www.okx.com/help/section".to_string(),
            root_domain: Url::parse("https://www.okx.com/").unwrap(),
            user_agent: DESKTOP_USER_AGENT.to_string(),
            sections: SECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
