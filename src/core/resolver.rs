use std::fmt;

use super::extract::{extract, Candidate};
use super::indirection::Follower;
use super::page::{HttpFetcher, Page, PageFetcher};
use super::profile::SiteProfile;
use super::target::resolve;
use crate::error::{LinkError, Result, StageFailure};

/// Which part of the cascade produced a resolved URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Tier `n` matched the installer directly
    Direct(usize),
    /// Tier `n` matched a releases listing, which was followed
    Listing(usize),
    /// No tier matched; the profile's latest-release page supplied the asset
    Fallback,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Direct(n) => write!(f, "tier {}", n),
            Tier::Listing(n) => write!(f, "tier {} via listing", n),
            Tier::Fallback => write!(f, "latest-release fallback"),
        }
    }
}

/// Absolute, percent-encoded download URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    pub url: String,
    pub tier: Tier,
}

#[derive(Debug)]
enum State {
    Searching(usize),
    Indirecting { url: String, origin: Tier },
    Succeeded(ResolvedUrl),
    Failed(LinkError),
}

/// Runs the cascade for one site profile
pub struct Resolver<'a> {
    fetcher: &'a dyn PageFetcher,
    profile: &'a SiteProfile,
}

impl<'a> Resolver<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, profile: &'a SiteProfile) -> Self {
        Self { fetcher, profile }
    }

    /// Produce exactly one download URL, or the reason there is none.
    ///
    /// Only a failure to fetch the product page itself is reported as a
    /// network or parse error; everything after that ends in `NotFound`.
    pub fn resolve(&self) -> Result<ResolvedUrl> {
        log::info!("Resolving {} from {}", self.profile.product, self.profile.page_url);

        let page = self.fetcher.fetch(&self.profile.page_url)?;
        log::debug!("{} anchors on {}", page.anchors.len(), page.url);

        let mut attempt = Attempt {
            fetcher: self.fetcher,
            profile: self.profile,
            page,
            indirected: false,
            failures: Vec::new(),
        };

        let mut state = State::Searching(1);
        loop {
            state = match state {
                State::Succeeded(resolved) => {
                    log::info!("Resolved {} ({})", resolved.url, resolved.tier);
                    return Ok(resolved);
                }
                State::Failed(err) => return Err(err),
                active => attempt.step(active),
            };
        }
    }
}

/// Resolve a profile over the network with default fetch settings
pub fn resolve_site(profile: &SiteProfile) -> Result<ResolvedUrl> {
    let fetcher = HttpFetcher::new()?;
    Resolver::new(&fetcher, profile).resolve()
}

/// State owned by a single resolution
struct Attempt<'a> {
    fetcher: &'a dyn PageFetcher,
    profile: &'a SiteProfile,
    page: Page,
    indirected: bool,
    failures: Vec<StageFailure>,
}

impl Attempt<'_> {
    fn step(&mut self, state: State) -> State {
        match state {
            State::Searching(tier) => self.search(tier),
            State::Indirecting { url, origin } => self.indirect(&url, origin),
            done => done,
        }
    }

    fn search(&mut self, tier: usize) -> State {
        let profile = self.profile;
        let strategies = &profile.strategies;
        let found = extract(&self.page, strategies, tier - 1);

        let matched = found.as_ref().map_or(strategies.len() + 1, |m| m.tier);
        for skipped in tier..matched {
            let name = strategies[skipped - 1].name;
            log::debug!("Tier {} ({}): no matching links", skipped, name);
            self.record(skipped, name, "no matching links");
        }

        let Some(found) = found else {
            return self.exhausted();
        };

        log::debug!(
            "Tier {} ({}): {} candidate(s)",
            found.tier,
            found.strategy,
            found.candidates.len()
        );

        match self.choose(&found.candidates) {
            Some(url) if self.profile.is_listing(&url) => State::Indirecting {
                url,
                origin: Tier::Listing(found.tier),
            },
            Some(url) => State::Succeeded(ResolvedUrl {
                url,
                tier: Tier::Direct(found.tier),
            }),
            None => {
                self.record(
                    found.tier,
                    found.strategy,
                    format!("none of {} candidate(s) usable", found.candidates.len()),
                );
                State::Searching(found.tier + 1)
            }
        }
    }

    /// Pick the URL for one tier: the first preferred usable candidate,
    /// else the first usable one.
    fn choose(&self, candidates: &[Candidate]) -> Option<String> {
        let mut first_usable = None;

        for candidate in candidates {
            if let Some(filter) = &self.profile.link_filter {
                if !filter.matches(&candidate.text, &candidate.href) {
                    log::debug!("Filtered out {:?}", candidate.href);
                    continue;
                }
            }

            let url = match resolve(&candidate.href, &self.profile.base_url, &self.profile.domain_root) {
                Ok(url) => url,
                Err(e) => {
                    log::debug!("Skipping {:?}: {}", candidate.href, e);
                    continue;
                }
            };

            let usable = self.profile.is_listing(&url)
                || self
                    .profile
                    .direct_asset
                    .as_ref()
                    .map_or(true, |asset| asset.matches_url(&url));
            if !usable {
                log::debug!("Not an installer link: {}", url);
                continue;
            }

            match &self.profile.preference {
                Some(preferred) if preferred.matches(&candidate.text, &candidate.href) => {
                    return Some(url);
                }
                Some(_) => {
                    first_usable.get_or_insert(url);
                }
                None => return Some(url),
            }
        }

        first_usable
    }

    fn exhausted(&mut self) -> State {
        match self.profile.latest_release() {
            Some(latest) => {
                log::debug!("All tiers exhausted, trying {}", latest);
                State::Indirecting {
                    url: latest.to_string(),
                    origin: Tier::Fallback,
                }
            }
            None => self.fail(),
        }
    }

    fn indirect(&mut self, url: &str, origin: Tier) -> State {
        if self.indirected {
            self.failures.push(StageFailure::new(
                "indirection",
                format!("refusing to follow a second listing: {}", url),
            ));
            return self.fail();
        }
        self.indirected = true;

        match Follower::new(self.fetcher, self.profile).follow(url) {
            Ok(asset) => State::Succeeded(ResolvedUrl { url: asset, tier: origin }),
            Err(failures) => {
                for failure in &failures {
                    log::debug!("{}", failure);
                }
                self.failures.extend(failures);
                self.fail()
            }
        }
    }

    fn record<R: Into<String>>(&mut self, tier: usize, strategy: &str, reason: R) {
        self.failures.push(StageFailure::new(
            format!("tier {} ({})", tier, strategy),
            reason,
        ));
    }

    fn fail(&mut self) -> State {
        State::Failed(LinkError::not_found(
            self.profile.product,
            std::mem::take(&mut self.failures),
        ))
    }
}
