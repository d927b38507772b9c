use url::Url;

use super::page::PageFetcher;
use super::profile::{Indirection, SiteProfile};
use super::target::resolve;
use crate::error::StageFailure;

/// Follows a releases listing to the installer it links to.
///
/// At most two pages are fetched per call: the listing itself and, when it
/// has no matching asset, the profile's fixed "latest release" page. Links on
/// those pages are never treated as listings again.
pub struct Follower<'a> {
    fetcher: &'a dyn PageFetcher,
    profile: &'a SiteProfile,
}

impl<'a> Follower<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, profile: &'a SiteProfile) -> Self {
        Self { fetcher, profile }
    }

    pub fn follow(&self, listing_url: &str) -> Result<String, Vec<StageFailure>> {
        let Some(indirection) = self.profile.indirection.as_ref() else {
            return Err(vec![StageFailure::new(
                "indirection",
                format!("{} has no listing rules", self.profile.name),
            )]);
        };

        let mut failures = Vec::new();

        match self.search(indirection, listing_url) {
            Ok(url) => return Ok(url),
            Err(failure) => failures.push(failure),
        }

        if let Some(latest) = indirection.latest_release.as_deref() {
            if latest != listing_url {
                log::debug!("Falling back to {}", latest);
                match self.search(indirection, latest) {
                    Ok(url) => return Ok(url),
                    Err(failure) => failures.push(failure),
                }
            }
        }

        Err(failures)
    }

    /// Fetch one listing page and return its first asset link
    fn search(&self, indirection: &Indirection, url: &str) -> Result<String, StageFailure> {
        let stage = format!("listing {}", url);
        let page = self
            .fetcher
            .fetch(url)
            .map_err(|e| StageFailure::new(stage.clone(), e.to_string()))?;

        let root = origin(&page.url).unwrap_or_else(|| self.profile.domain_root.clone());

        for anchor in &page.anchors {
            if !indirection.asset.matches(&anchor.text, &anchor.href) {
                continue;
            }
            match resolve(&anchor.href, &page.url, &root) {
                Ok(resolved) => {
                    log::debug!("Asset on {}: {}", url, resolved);
                    return Ok(resolved);
                }
                Err(e) => log::debug!("Skipping asset link {:?}: {}", anchor.href, e),
            }
        }

        Err(StageFailure::new(stage, "no installer link on page"))
    }
}

fn origin(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed.host_str()?;
    Some(parsed.origin().ascii_serialization())
}
