//! RSS/Atom headline fetching.
//!
//! A thin pass-through: feed URL in, ordered headline strings out. One
//! blocking GET with a fixed timeout and no retry; parsing is separated
//! from fetching so tests run against in-repo fixtures, never the network.

pub mod fetcher;

pub use fetcher::{parse_headlines, FeedFetcher};
