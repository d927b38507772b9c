use std::time::Duration;

use scraper::{Html, Selector};

use crate::error::{LinkError, Result};

/// A hyperlink as it appears in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    pub text: String,
}

/// A fetched page reduced to its anchors, in document order
#[derive(Debug, Clone)]
pub struct Page {
    /// URL the content was served from, after redirects
    pub url: String,
    pub anchors: Vec<Anchor>,
}

impl Page {
    /// Parse HTML and collect every `<a href>` element
    pub fn parse(url: &str, html: &str) -> Result<Self> {
        let document = Html::parse_document(html);
        let selector = Selector::parse("a[href]")
            .map_err(|e| LinkError::parse(format!("invalid anchor selector: {}", e)))?;

        let anchors = document
            .select(&selector)
            .filter_map(|el| {
                let href = el.value().attr("href")?.trim().to_string();
                let text = collapse_whitespace(&el.text().collect::<String>());
                Some(Anchor { href, text })
            })
            .collect();

        Ok(Self {
            url: url.to_string(),
            anchors,
        })
    }
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The HTTP + HTML collaborator used by the cascade
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<Page>;
}

/// Transport settings for [`HttpFetcher`]
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_redirects: 10,
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
        }
    }
}

/// Blocking fetcher backed by reqwest
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_settings(FetchSettings::default())
    }

    pub fn with_settings(settings: FetchSettings) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(settings.user_agent)
            .timeout(settings.timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.max_redirects))
            .build()?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Page> {
        log::debug!("GET {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LinkError::status(url, status.as_u16()));
        }

        let final_url = response.url().to_string();
        if final_url != url {
            log::debug!("{} redirected to {}", url, final_url);
        }

        let body = response
            .text()
            .map_err(|e| LinkError::parse(format!("could not read body of {}: {}", url, e)))?;

        Page::parse(&final_url, &body)
    }
}
