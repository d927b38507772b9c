// Command handlers module
pub mod resolve;
pub mod sites;
pub mod version;

// Re-exports for cleaner imports
pub use resolve::execute as resolve;
pub use sites::execute as sites;
pub use version::execute as version;
