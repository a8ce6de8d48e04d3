//! Read models for the sub-renderers around the card list.
//!
//! Each model is built from a [`DeckSnapshot`] and reads only the fields it needs, so the
//! background, the score readout and the card list can render from one shared handle.

use swipedeck::{DeckSnapshot, Direction};

use crate::{Subscription, format_compact, format_compact_str};

/// Which half of the screen is tinted more strongly while dragging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackgroundTint {
    /// Left half (unsubscribe side).
    pub left_highlighted: bool,
    /// Right half (keep side).
    pub right_highlighted: bool,
}

impl BackgroundTint {
    pub fn from_snapshot(snapshot: &DeckSnapshot) -> Self {
        Self {
            left_highlighted: snapshot.active_direction == Some(Direction::Left),
            right_highlighted: snapshot.active_direction == Some(Direction::Right),
        }
    }
}

/// Progress and tally readout; switches to a completion summary once every card is decided.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreReadout {
    pub consumed: usize,
    pub total: usize,
    pub unsubscribed: usize,
    pub kept: usize,
    /// Width shares of the tally bar, `0.5` each before the first swipe.
    pub unsubscribed_share: f32,
    pub kept_share: f32,
    pub completed: bool,
}

impl ScoreReadout {
    /// `None` while the total is unknown (or zero): there is nothing meaningful to show.
    pub fn from_snapshot(snapshot: &DeckSnapshot) -> Option<Self> {
        let total = snapshot.total_count.filter(|&t| t > 0)?;
        Some(Self {
            consumed: snapshot.consumed,
            total,
            unsubscribed: snapshot.tally.left,
            kept: snapshot.tally.right,
            unsubscribed_share: snapshot.tally.left_ratio(),
            kept_share: snapshot.tally.right_ratio(),
            completed: snapshot.all_consumed,
        })
    }

    pub fn progress_label(&self) -> String {
        format!("{} / {}", self.consumed, self.total)
    }
}

/// One labelled statistic on a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardStat {
    pub label: &'static str,
    pub value: String,
}

/// Display-ready content of a subscription card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardContentView {
    pub title: String,
    /// Trimmed; `None` when blank.
    pub description: Option<String>,
    /// Channel banner, falling back to the thumbnail.
    pub backdrop_url: Option<String>,
    pub avatar_url: Option<String>,
    pub channel_url: Option<String>,
    pub stats: [CardStat; 4],
}

impl CardContentView {
    pub fn new(item: &Subscription) -> Self {
        let statistics = item.channel.as_ref().and_then(|c| c.statistics.as_ref());
        let new_videos = item
            .content_detail
            .as_ref()
            .and_then(|d| d.new_item_count)
            .map(|n| format_compact(n as f64))
            .unwrap_or_default();

        Self {
            title: item.title.clone().unwrap_or_default(),
            description: item
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_owned),
            backdrop_url: item
                .banner_url()
                .or_else(|| item.thumbnail_url())
                .map(str::to_owned),
            avatar_url: item.thumbnail_url().map(str::to_owned),
            channel_url: item.channel_url(),
            stats: [
                CardStat {
                    label: "new videos",
                    value: new_videos,
                },
                CardStat {
                    label: "videos",
                    value: format_compact_str(statistics.and_then(|s| s.video_count.as_deref())),
                },
                CardStat {
                    label: "country",
                    value: item
                        .channel
                        .as_ref()
                        .and_then(|c| c.country.clone())
                        .unwrap_or_default(),
                },
                CardStat {
                    label: "subscribers",
                    value: format_compact_str(
                        statistics.and_then(|s| s.subscriber_count.as_deref()),
                    ),
                },
            ],
        }
    }
}
