use super::support::{html, x_profile, FakeWeb};
use maclink::commands::resolve::run;
use maclink::core::resolver::{Resolver, Tier};

#[test]
fn test_direct_download_link() {
    let web = FakeWeb::new().page(
        "https://x.com",
        &html(r#"<a href="/about">About</a><a href="/dl/App.dmg">Download for macOS</a>"#),
    );
    let profile = x_profile();

    let resolved = Resolver::new(&web, &profile).resolve().unwrap();
    assert_eq!(resolved.url, "https://x.com/dl/App.dmg");
    assert_eq!(resolved.tier, Tier::Direct(1));
    assert_eq!(web.requests(), vec!["https://x.com"]);
}

#[test]
fn test_releases_href_tier_follows_listing() {
    let web = FakeWeb::new()
        .page("https://x.com", &html(r#"<a href="/releases">Releases</a>"#))
        .page(
            "https://x.com/releases",
            &html(r#"<a href="/releases/tag/v1">v1</a><a href="/releases/download/v1/App.dmg">App.dmg</a>"#),
        );
    let profile = x_profile();

    let resolved = Resolver::new(&web, &profile).resolve().unwrap();
    assert_eq!(resolved.url, "https://x.com/releases/download/v1/App.dmg");
    assert_eq!(resolved.tier, Tier::Listing(4));
    assert_eq!(web.requests(), vec!["https://x.com", "https://x.com/releases"]);
}

#[test]
fn test_nothing_found_exits_1() {
    let web = FakeWeb::new()
        .page("https://x.com", &html(r#"<a href="/about">About</a>"#))
        .page("https://x.com/releases/latest", &html(r#"<a href="/docs">Docs</a>"#));
    let profile = x_profile();

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(&profile, &web, &mut out, &mut err).unwrap();

    assert_eq!(code, 1);
    assert!(out.is_empty());
    let stderr = String::from_utf8(err).unwrap();
    assert!(stderr.contains("Could not find macOS download link for X"));
}

#[test]
fn test_unsafe_path_characters_encoded() {
    let web = FakeWeb::new().page(
        "https://x.com",
        &html(r#"<a href="/dl/My App (v1).dmg">Download for macOS</a>"#),
    );
    let profile = x_profile();

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(&profile, &web, &mut out, &mut err).unwrap();

    assert_eq!(code, 0);
    assert!(err.is_empty());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "https://x.com/dl/My%20App%20%28v1%29.dmg\n"
    );
}

#[test]
fn test_unicode_path_encoded() {
    let web = FakeWeb::new().page(
        "https://x.com",
        &html(r#"<a href="https://x.com/dl/Café Ünïcode.dmg">Download for Mac</a>"#),
    );
    let profile = x_profile();

    let resolved = Resolver::new(&web, &profile).resolve().unwrap();
    assert_eq!(
        resolved.url,
        "https://x.com/dl/Caf%C3%A9%20%C3%9Cn%C3%AFcode.dmg"
    );
}
