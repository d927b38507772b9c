use url::Url;

use super::normalize::normalize;
use crate::error::{LinkError, Result};

/// Turn an href found on a page into an absolute, normalized URL.
///
/// `/path` joins onto `domain_root`, `http…` is taken as-is and anything
/// else is resolved relative to `base_url`.
pub fn resolve(href: &str, base_url: &str, domain_root: &str) -> Result<String> {
    let href = href.trim();
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
    {
        return Err(LinkError::invalid_url(format!("'{}' is not a navigable link", href)));
    }

    let absolute = if href.starts_with('/') {
        join(domain_root, href)?
    } else if href.starts_with("http") {
        href.to_string()
    } else {
        join(base_url, href)?
    };

    normalize(&absolute)
}

fn join(base: &str, href: &str) -> Result<String> {
    let base = Url::parse(base)
        .map_err(|e| LinkError::invalid_url(format!("base '{}': {}", base, e)))?;
    let joined = base
        .join(href)
        .map_err(|e| LinkError::invalid_url(format!("'{}': {}", href, e)))?;
    Ok(joined.to_string())
}
