// Built-in site profiles.
//
// Each product is pure data over the shared matching vocabulary; the
// cascade in `resolver` knows nothing about any particular site.

use super::matcher::{Matcher, Strategy};

/// How to get from a releases listing to a concrete asset
#[derive(Debug, Clone)]
pub struct Indirection {
    /// Resolved URLs matching this are listings, not assets
    pub listing: Matcher,
    /// Anchors on a listing page that point at the installer
    pub asset: Matcher,
    /// Fetched when the listing has no asset, or when every tier came up empty
    pub latest_release: Option<String>,
}

/// Immutable per-product configuration
#[derive(Debug, Clone)]
pub struct SiteProfile {
    /// Subcommand name, e.g. `better-display`
    pub name: &'static str,
    pub product: &'static str,
    /// Page fetched first
    pub page_url: String,
    /// Base for page-relative hrefs
    pub base_url: String,
    /// Base for root-relative (`/…`) hrefs
    pub domain_root: String,
    /// Tiers, most specific first
    pub strategies: Vec<Strategy>,
    /// Candidates whose href fails this are skipped before resolving
    pub link_filter: Option<Matcher>,
    /// A resolved URL that is not a listing must match this to be accepted
    pub direct_asset: Option<Matcher>,
    /// Among usable candidates of one tier, the first match wins
    pub preference: Option<Matcher>,
    pub indirection: Option<Indirection>,
}

impl SiteProfile {
    pub fn is_listing(&self, url: &str) -> bool {
        self.indirection
            .as_ref()
            .is_some_and(|ind| ind.listing.matches_url(url))
    }

    pub fn latest_release(&self) -> Option<&str> {
        self.indirection
            .as_ref()
            .and_then(|ind| ind.latest_release.as_deref())
    }
}

/// BetterDisplay, distributed as a `.dmg` through GitHub releases
pub fn better_display() -> SiteProfile {
    let repo = "https://github.com/waydabber/BetterDisplay";
    let platform = || Matcher::text_any(&["macos", "mac"]);

    SiteProfile {
        name: "better-display",
        product: "BetterDisplay",
        page_url: format!("{}?tab=readme-ov-file", repo),
        base_url: repo.to_string(),
        domain_root: "https://github.com".to_string(),
        strategies: vec![
            Strategy::new(
                "download-text",
                Matcher::all(vec![
                    Matcher::text_contains("download"),
                    Matcher::any(vec![platform(), Matcher::text_any(&["app", "for"])]),
                ]),
            ),
            Strategy::new(
                "release-href",
                Matcher::all(vec![
                    Matcher::href_any(&["/releases", "/download", "dmg"]),
                    Matcher::any(vec![platform(), Matcher::text_contains("download")]),
                ]),
            ),
            Strategy::new("disk-image-href", Matcher::href_contains("dmg")),
        ],
        link_filter: None,
        direct_asset: Some(Matcher::href_any(&["/download/", ".dmg"])),
        preference: None,
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
            latest_release: Some(format!("{}/releases/latest", repo)),
        }),
    }
}

/// Cursor, which offers several macOS builds on one download page
pub fn cursor() -> SiteProfile {
    SiteProfile {
        name: "cursor",
        product: "Cursor",
        page_url: "https://cursor.com/download".to_string(),
        base_url: "https://cursor.com/".to_string(),
        domain_root: "https://cursor.com".to_string(),
        strategies: vec![
            Strategy::new(
                "download-mac-text",
                Matcher::all(vec![
                    Matcher::text_contains("download"),
                    Matcher::text_contains("mac"),
                ]),
            ),
            Strategy::new("mac-text-prefix", Matcher::text_starts_with("mac")),
            Strategy::new(
                "mac-anywhere",
                Matcher::any(vec![
                    Matcher::text_contains("mac"),
                    Matcher::href_contains("mac"),
                ]),
            ),
            Strategy::new(
                "installer-href",
                Matcher::all(vec![
                    Matcher::href_contains("cursor"),
                    Matcher::href_any(&["dmg", "zip"]),
                ]),
            ),
        ],
        link_filter: Some(Matcher::any(vec![
            Matcher::href_any(&["cursor", "download"]),
            Matcher::href_starts_with("http"),
        ])),
        direct_asset: None,
        preference: Some(Matcher::text_any(&["universal", "arm64"])),
        indirection: None,
    }
}

/// Rectangle Pro, a single download button on the product page
pub fn rectangle_pro() -> SiteProfile {
    SiteProfile {
        name: "rectangle-pro",
        product: "Rectangle Pro",
        page_url: "https://rectangleapp.com/pro".to_string(),
        base_url: "https://rectangleapp.com/pro".to_string(),
        domain_root: "https://rectangleapp.com".to_string(),
        strategies: vec![
            Strategy::new("download-text", Matcher::text_contains("download")),
            Strategy::new("installer-href", Matcher::href_any(&["download", "dmg", "zip"])),
        ],
        link_filter: Some(Matcher::any(vec![
            Matcher::href_any(&["rectangle", "download", "dmg", "zip"]),
            Matcher::href_starts_with("http"),
        ])),
        direct_asset: None,
        preference: Some(Matcher::any(vec![
            Matcher::href_any(&["dmg", "zip"]),
            Matcher::text_contains("download"),
        ])),
        indirection: None,
    }
}

/// Every configured product, in the order they are listed by the CLI
pub fn all() -> Vec<SiteProfile> {
    vec![better_display(), cursor(), rectangle_pro()]
}

pub fn find(name: &str) -> Option<SiteProfile> {
    all().into_iter().find(|profile| profile.name == name)
}
