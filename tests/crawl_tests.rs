//! End-to-end crawl tests against a mock listing site.
//!
//! These tests stand up wiremock servers serving fixture listing pages and
//! drive the full crawl (pagination discovery, page walking, extraction,
//! output writing) against them.

use chrono::NaiveDate;
use okx_announcements::config::SiteConfig;
use okx_announcements::models::ArticleRecord;
use okx_announcements::outputs::json::{write_articles, OUTPUT_FILENAME};
use okx_announcements::scrapers::{build_http_client, okx};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Site config pointed at a mock server, crawling the given sections.
fn mock_site_config(server: &MockServer, sections: &[&str]) -> SiteConfig {
    SiteConfig {
        base_url: format!("{}/help/section", server.uri()),
        root_domain: Url::parse(&server.uri()).unwrap(),
        user_agent: "okx_announcements-tests/0.1".to_string(),
        sections: sections.iter().map(|s| s.to_string()).collect(),
    }
}

fn entry(title: &str, label: &str, href: &str) -> String {
    format!(
        r#"<li class="index_article__15dX1">
             <a href="{href}">
               <div class="index_title__6wUnB">{title}</div>
               <span>{label}</span>
             </a>
           </li>"#
    )
}

fn paginator(pages: u32) -> String {
    (1..=pages)
        .map(|n| {
            format!(
                r#"<a class="okui-pagination-item okui-pagination-item-link">{n}</a>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn listing_page(entries: &[String], paginator_html: &str) -> String {
    format!(
        "<html><body><ul>{}</ul><div>{}</div></body></html>",
        entries.join("\n"),
        paginator_html
    )
}

/// Mount a listing page for `/help/section/<section>/page/<n>`.
async fn mount_page(server: &MockServer, section: &str, page: u32, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("/help/section/{section}/page/{page}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Two-page section: January articles on page 1, a February one on page 2.
async fn mount_two_page_section(server: &MockServer, section: &str) {
    let page1 = listing_page(
        &[
            entry("Early January notice", "Published on Jan 10, 2024", "/help/article/10"),
            entry("Late January notice", "Published on Jan 20, 2024", "/help/article/20"),
        ],
        &paginator(2),
    );
    let page2 = listing_page(
        &[entry("February notice", "Published on Feb 1, 2024", "/help/article/30")],
        &paginator(2),
    );
    mount_page(server, section, 1, page1).await;
    mount_page(server, section, 2, page2).await;
}

#[tokio::test]
async fn test_two_page_section_filters_and_orders() {
    let server = MockServer::start().await;
    mount_two_page_section(&server, "announcements-latest-announcements").await;

    let site = mock_site_config(&server, &["announcements-latest-announcements"]);
    let client = build_http_client(&site).unwrap();

    let records =
        okx::crawl_sections(&client, &site, date("2024-01-01"), date("2024-01-31")).await;

    assert_eq!(
        records,
        vec![
            ArticleRecord {
                title: "Early January notice".to_string(),
                date: "2024-01-10".to_string(),
                link: format!("{}/help/article/10", server.uri()),
            },
            ArticleRecord {
                title: "Late January notice".to_string(),
                date: "2024-01-20".to_string(),
                link: format!("{}/help/article/20", server.uri()),
            },
        ]
    );
}

#[tokio::test]
async fn test_crawl_is_idempotent() {
    let server = MockServer::start().await;
    mount_two_page_section(&server, "announcements-latest-announcements").await;

    let site = mock_site_config(&server, &["announcements-latest-announcements"]);
    let client = build_http_client(&site).unwrap();

    let first = okx::crawl_sections(&client, &site, date("2024-01-01"), date("2024-01-31")).await;
    let second = okx::crawl_sections(&client, &site, date("2024-01-01"), date("2024-01-31")).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_window_yields_no_records() {
    let server = MockServer::start().await;
    mount_two_page_section(&server, "announcements-latest-announcements").await;

    let site = mock_site_config(&server, &["announcements-latest-announcements"]);
    let client = build_http_client(&site).unwrap();

    // start > end: nothing can match, but the crawl still completes
    let records =
        okx::crawl_sections(&client, &site, date("2024-02-01"), date("2024-01-01")).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_failed_section_is_skipped() {
    let server = MockServer::start().await;

    // First section 404s everywhere; second serves one page without a paginator.
    Mock::given(method("GET"))
        .and(path("/help/section/announcements-latest-events/page/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    mount_page(
        &server,
        "announcements-api",
        1,
        listing_page(
            &[entry("API maintenance", "Published on Jan 12, 2024", "/help/article/40")],
            "",
        ),
    )
    .await;

    let site = mock_site_config(
        &server,
        &["announcements-latest-events", "announcements-api"],
    );
    let client = build_http_client(&site).unwrap();

    let records =
        okx::crawl_sections(&client, &site, date("2024-01-01"), date("2024-01-31")).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "API maintenance");
}

#[tokio::test]
async fn test_sections_traversed_in_enumeration_order() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "announcements-new-token",
        1,
        listing_page(
            &[entry("Token listing", "Published on Jan 8, 2024", "/help/article/50")],
            "",
        ),
    )
    .await;
    mount_page(
        &server,
        "announcements-derivatives",
        1,
        listing_page(
            &[entry("Derivatives update", "Published on Jan 3, 2024", "/help/article/60")],
            "",
        ),
    )
    .await;

    let site = mock_site_config(
        &server,
        &["announcements-new-token", "announcements-derivatives"],
    );
    let client = build_http_client(&site).unwrap();

    let records =
        okx::crawl_sections(&client, &site, date("2024-01-01"), date("2024-01-31")).await;

    // Section enumeration order wins over date order.
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Token listing", "Derivatives update"]);
}

#[tokio::test]
async fn test_crawl_and_write_end_to_end() {
    let server = MockServer::start().await;
    mount_two_page_section(&server, "announcements-latest-announcements").await;

    let site = mock_site_config(&server, &["announcements-latest-announcements"]);
    let client = build_http_client(&site).unwrap();

    let records =
        okx::crawl_sections(&client, &site, date("2024-01-01"), date("2024-01-31")).await;

    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("harvest/out");
    let written = write_articles(&records, out_dir.to_str().unwrap()).await.unwrap();

    assert_eq!(written, out_dir.join(OUTPUT_FILENAME));
    let body = std::fs::read_to_string(&written).unwrap();
    let parsed: Vec<ArticleRecord> = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed, records);
    assert_eq!(parsed.len(), 2);
}
