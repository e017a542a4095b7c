//! Blocking feed fetcher.

use hs_common::{Error, Result};
use std::time::Duration;

/// Fetches headlines from RSS/Atom feeds.
///
/// Failure of any kind (connection, timeout, non-2xx, malformed XML) is an
/// error for the caller to surface; there is no retry and no partial
/// result. The CLI boundary collapses these errors into "empty list plus
/// visible error message".
pub struct FeedFetcher {
    client: reqwest::blocking::Client,
}

impl FeedFetcher {
    /// Build a fetcher with a fixed request timeout.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::FeedRequest(e.to_string()))?;
        Ok(FeedFetcher { client })
    }

    /// Fetch a feed and return up to `max_items` headline strings,
    /// in feed order.
    pub fn fetch_headlines(&self, url: &str, max_items: usize) -> Result<Vec<String>> {
        tracing::debug!(url, max_items, "fetching feed");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::FeedRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FeedStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| Error::FeedRequest(e.to_string()))?;

        let headlines = parse_headlines(&body, max_items)?;
        tracing::info!(url, count = headlines.len(), "fetched feed headlines");
        Ok(headlines)
    }
}

/// Parse feed bytes into up to `max_items` headline strings.
///
/// Entries without a title, or with a blank title, are skipped without
/// counting toward the limit. Order follows the feed document.
pub fn parse_headlines(body: &[u8], max_items: usize) -> Result<Vec<String>> {
    let feed = feed_rs::parser::parse(body).map_err(|e| Error::FeedParse(e.to_string()))?;

    Ok(feed
        .entries
        .into_iter()
        .filter_map(|entry| entry.title.map(|t| t.content))
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .take(max_items)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS_FIXTURE: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example Wire</title>
    <item><title>Stock markets rally to record highs</title></item>
    <item><title>Earthquake kills dozens</title></item>
    <item><title>  </title></item>
    <item><title>Meeting rescheduled to Tuesday</title></item>
  </channel>
</rss>"#;

    const ATOM_FIXTURE: &[u8] = br#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example Atom Wire</title>
  <id>urn:example:wire</id>
  <updated>2026-08-07T00:00:00Z</updated>
  <entry>
    <title>Peace agreement reached</title>
    <id>urn:example:1</id>
    <updated>2026-08-07T00:00:00Z</updated>
  </entry>
  <entry>
    <title>Wildfire threatens suburbs</title>
    <id>urn:example:2</id>
    <updated>2026-08-07T00:00:00Z</updated>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_rss_titles_in_order() {
        let headlines = parse_headlines(RSS_FIXTURE, 10).unwrap();
        assert_eq!(
            headlines,
            vec![
                "Stock markets rally to record highs",
                "Earthquake kills dozens",
                "Meeting rescheduled to Tuesday",
            ]
        );
    }

    #[test]
    fn test_parse_respects_max_items() {
        let headlines = parse_headlines(RSS_FIXTURE, 2).unwrap();
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0], "Stock markets rally to record highs");
    }

    #[test]
    fn test_parse_atom() {
        let headlines = parse_headlines(ATOM_FIXTURE, 10).unwrap();
        assert_eq!(
            headlines,
            vec!["Peace agreement reached", "Wildfire threatens suburbs"]
        );
    }

    #[test]
    fn test_parse_rejects_malformed_xml() {
        assert!(matches!(
            parse_headlines(b"this is not xml", 10),
            Err(Error::FeedParse(_))
        ));
    }

    #[test]
    fn test_fetcher_builds() {
        assert!(FeedFetcher::new(Duration::from_secs(10), "headline-sentiment/test").is_ok());
    }
}
