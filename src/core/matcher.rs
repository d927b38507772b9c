// Matching vocabulary shared by strategies, link filters, preferences,
// listing rules and asset predicates.
//
// All comparisons are case-insensitive: needles are lowercased when the
// matcher is built and haystacks when it is evaluated.

/// How a single needle is compared against a haystack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Contains(String),
    StartsWith(String),
}

impl Pattern {
    fn is_match(&self, haystack: &str) -> bool {
        match self {
            Pattern::Contains(needle) => haystack.contains(needle.as_str()),
            Pattern::StartsWith(needle) => haystack.starts_with(needle.as_str()),
        }
    }
}

/// A composable predicate over an anchor's visible text and href
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    Text(Pattern),
    Href(Pattern),
    All(Vec<Matcher>),
    Any(Vec<Matcher>),
    Not(Box<Matcher>),
}

impl Matcher {
    pub fn text_contains(needle: &str) -> Self {
        Matcher::Text(Pattern::Contains(needle.to_lowercase()))
    }

    pub fn text_starts_with(needle: &str) -> Self {
        Matcher::Text(Pattern::StartsWith(needle.to_lowercase()))
    }

    pub fn href_contains(needle: &str) -> Self {
        Matcher::Href(Pattern::Contains(needle.to_lowercase()))
    }

    pub fn href_starts_with(needle: &str) -> Self {
        Matcher::Href(Pattern::StartsWith(needle.to_lowercase()))
    }

    /// Text contains at least one of `needles`
    pub fn text_any(needles: &[&str]) -> Self {
        Matcher::Any(needles.iter().map(|n| Self::text_contains(n)).collect())
    }

    /// Href contains at least one of `needles`
    pub fn href_any(needles: &[&str]) -> Self {
        Matcher::Any(needles.iter().map(|n| Self::href_contains(n)).collect())
    }

    pub fn all(matchers: Vec<Matcher>) -> Self {
        Matcher::All(matchers)
    }

    pub fn any(matchers: Vec<Matcher>) -> Self {
        Matcher::Any(matchers)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(matcher: Matcher) -> Self {
        Matcher::Not(Box::new(matcher))
    }

    /// Evaluate against an anchor
    pub fn matches(&self, text: &str, href: &str) -> bool {
        self.eval(&text.to_lowercase(), &href.to_lowercase())
    }

    /// Evaluate against a bare URL, treated as an href with no text
    pub fn matches_url(&self, url: &str) -> bool {
        self.eval("", &url.to_lowercase())
    }

    fn eval(&self, text: &str, href: &str) -> bool {
        match self {
            Matcher::Text(pattern) => pattern.is_match(text),
            Matcher::Href(pattern) => pattern.is_match(href),
            Matcher::All(matchers) => matchers.iter().all(|m| m.eval(text, href)),
            Matcher::Any(matchers) => matchers.iter().any(|m| m.eval(text, href)),
            Matcher::Not(matcher) => !matcher.eval(text, href),
        }
    }
}

/// A named tier of the cascade
#[derive(Debug, Clone)]
pub struct Strategy {
    pub name: &'static str,
    pub matcher: Matcher,
}

impl Strategy {
    pub fn new(name: &'static str, matcher: Matcher) -> Self {
        Self { name, matcher }
    }
}
