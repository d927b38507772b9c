// Core resolution logic

pub mod extract;
pub mod indirection;
pub mod matcher;
pub mod normalize;
pub mod page;
pub mod profile;
pub mod resolver;
pub mod target;

// Re-export commonly used items
pub use extract::{extract, Candidate, TierMatch};
pub use indirection::Follower;
pub use matcher::{Matcher, Pattern, Strategy};
pub use normalize::normalize;
pub use page::{Anchor, FetchSettings, HttpFetcher, Page, PageFetcher};
pub use profile::{Indirection, SiteProfile};
pub use resolver::{resolve_site, ResolvedUrl, Resolver, Tier};
