use serde::{Deserialize, Serialize};

use crate::{FetchError, Page};

/// One channel subscription joined with the channel's public metadata.
///
/// Every field is optional on the wire; the deck never inspects any of them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subscription {
    /// Subscription id, the handle used to unsubscribe.
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub channel_id: Option<String>,
    pub thumbnails: Option<Thumbnails>,
    pub published_at: Option<String>,
    pub content_detail: Option<ContentDetail>,
    pub channel: Option<Channel>,
}

impl Subscription {
    pub fn channel_url(&self) -> Option<String> {
        self.channel_id
            .as_deref()
            .map(|id| format!("https://youtube.com/channel/{id}"))
    }

    /// Highest-resolution thumbnail available.
    pub fn thumbnail_url(&self) -> Option<&str> {
        let thumbnails = self.thumbnails.as_ref()?;
        [&thumbnails.high, &thumbnails.medium, &thumbnails.default]
            .into_iter()
            .find_map(|t| t.as_ref().and_then(|t| t.url.as_deref()))
    }

    pub fn banner_url(&self) -> Option<&str> {
        self.channel.as_ref()?.banner_external_url.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentDetail {
    pub total_item_count: Option<u64>,
    pub new_item_count: Option<u64>,
    pub activity_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Channel {
    pub id: Option<String>,
    pub statistics: Option<ChannelStatistics>,
    pub country: Option<String>,
    pub banner_external_url: Option<String>,
}

/// Channel counters. The upstream API encodes the counts as decimal strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelStatistics {
    pub view_count: Option<String>,
    pub subscriber_count: Option<String>,
    pub hidden_subscriber_count: Option<bool>,
    pub video_count: Option<String>,
}

/// One page of the aggregated subscription listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionPage {
    pub next_page_token: Option<String>,
    pub page_info: Option<PageInfo>,
    pub items: Option<Vec<Subscription>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    pub total_results: Option<usize>,
    pub results_per_page: Option<usize>,
}

impl SubscriptionPage {
    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<SubscriptionPage> for Page<Subscription> {
    fn from(page: SubscriptionPage) -> Self {
        Page {
            items: page.items.unwrap_or_default(),
            next_page_token: page.next_page_token.filter(|t| !t.is_empty()),
            total_count: page.page_info.and_then(|info| info.total_results),
        }
    }
}
