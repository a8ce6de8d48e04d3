//! Review video-platform channel subscriptions one card at a time.
//!
//! Swiping a card left unsubscribes, swiping right keeps the subscription. The card stack itself
//! lives in the `swipedeck` (bookkeeping) and `swipedeck-adapter` (gestures, springs) crates; this
//! crate wires them to a paginated subscription listing and an unsubscribe endpoint:
//!
//! - [`PagedFeed`] walks the listing page by page through a [`PageSource`]
//! - [`ReviewSession`] feeds pages into the deck when it runs low and unsubscribes on left swipes
//! - [`view`] turns deck snapshots and records into display-ready read models
//!
//! HTTP, authentication and rendering are left to the embedding application.
#![forbid(unsafe_code)]

mod config;
mod format;
mod session;
mod source;
mod subscription;
mod unsubscribe;
pub mod view;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, SessionConfig};
pub use format::{format_compact, format_compact_str};
pub use session::ReviewSession;
pub use source::{FetchError, Page, PageSource, PagedFeed};
pub use subscription::{
    Channel, ChannelStatistics, ContentDetail, PageInfo, Subscription, SubscriptionPage,
    Thumbnail, Thumbnails,
};
pub use unsubscribe::{UnsubscribeError, Unsubscriber};
pub use view::{BackgroundTint, CardContentView, CardStat, ScoreReadout};

pub use swipedeck::{DeckSnapshot, Direction, SwipeTally};
pub use swipedeck_adapter::{ReleaseOutcome, TickOutcome};
