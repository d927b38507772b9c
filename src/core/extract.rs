use super::matcher::Strategy;
use super::page::Page;

/// A hyperlink considered as a possible download target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub href: String,
    pub text: String,
    /// Page the anchor was found on
    pub source: String,
}

/// Candidates matched by one strategy
#[derive(Debug, Clone)]
pub struct TierMatch {
    /// 1-based position of the strategy in the cascade
    pub tier: usize,
    pub strategy: &'static str,
    pub candidates: Vec<Candidate>,
}

/// The first tier after the first `after` tiers whose strategy matched anything.
///
/// `after = 0` starts at the top of the cascade. Strategies are evaluated
/// lazily, so a tier is only scanned once every earlier tier in range came up empty.
pub fn extract(page: &Page, strategies: &[Strategy], after: usize) -> Option<TierMatch> {
    strategies
        .iter()
        .enumerate()
        .skip(after)
        .map(|(index, strategy)| TierMatch {
            tier: index + 1,
            strategy: strategy.name,
            candidates: candidates_for(page, strategy),
        })
        .find(|tier| !tier.candidates.is_empty())
}

/// Every anchor on `page` accepted by one strategy, in document order
fn candidates_for(page: &Page, strategy: &Strategy) -> Vec<Candidate> {
    page.anchors
        .iter()
        .filter(|anchor| strategy.matcher.matches(&anchor.text, &anchor.href))
        .map(|anchor| Candidate {
            href: anchor.href.clone(),
            text: anchor.text.clone(),
            source: page.url.clone(),
        })
        .collect()
}
