use maclink::core::matcher::{Matcher, Strategy};
use maclink::core::page::{Page, PageFetcher};
use maclink::core::profile::{Indirection, SiteProfile};
use maclink::{LinkError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory web: serves fixed HTML per URL and records every request
#[derive(Default)]
pub struct FakeWeb {
    pages: HashMap<String, String>,
    redirects: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl FakeWeb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn redirect(mut self, from: &str, to: &str) -> Self {
        self.redirects.insert(from.to_string(), to.to_string());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PageFetcher for FakeWeb {
    fn fetch(&self, url: &str) -> Result<Page> {
        self.requests.borrow_mut().push(url.to_string());

        let target = self.redirects.get(url).map(String::as_str).unwrap_or(url);
        match self.pages.get(target) {
            Some(html) => Page::parse(target, html),
            None => Err(LinkError::status(url, 404)),
        }
    }
}

/// Wrap anchors in a minimal document
pub fn html(body: &str) -> String {
    format!("<html><head><title>t</title></head><body>{}</body></html>", body)
}

/// A GitHub-style product hosted at https://x.com
pub fn x_profile() -> SiteProfile {
    let platform = || Matcher::text_any(&["macos", "mac"]);

    SiteProfile {
        name: "x",
        product: "X",
        page_url: "https://x.com".to_string(),
        base_url: "https://x.com".to_string(),
        domain_root: "https://x.com".to_string(),
        strategies: vec![
            Strategy::new(
                "download-text",
                Matcher::all(vec![Matcher::text_contains("download"), platform()]),
            ),
            Strategy::new(
                "release-href",
                Matcher::all(vec![
                    Matcher::href_any(&["/releases", "/download", ".dmg"]),
                    Matcher::any(vec![platform(), Matcher::text_contains("download")]),
                ]),
            ),
            Strategy::new("disk-image-href", Matcher::href_contains(".dmg")),
            Strategy::new("releases-href", Matcher::href_contains("/releases")),
        ],
        link_filter: None,
        direct_asset: Some(Matcher::href_any(&["/download/", ".dmg"])),
        preference: Some(Matcher::text_any(&["universal", "arm64"])),
        indirection: Some(Indirection {
            listing: Matcher::all(vec![
                Matcher::href_contains("/releases"),
                Matcher::not(Matcher::href_contains("/tag/")),
                Matcher::not(Matcher::href_contains("/download/")),
            ]),
            asset: Matcher::all(vec![
                Matcher::href_contains(".dmg"),
                Matcher::href_contains("/download/"),
            ]),
            latest_release: Some("https://x.com/releases/latest".to_string()),
        }),
    }
}
