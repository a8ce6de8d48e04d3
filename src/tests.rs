use crate::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use swipedeck_adapter::GesturePhase;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn sub(i: usize) -> Subscription {
    Subscription {
        id: Some(format!("sub-{i}")),
        title: Some(format!("Channel {i}")),
        ..Subscription::default()
    }
}

fn page(range: std::ops::Range<usize>, next: Option<&str>, total: Option<usize>) -> Page<Subscription> {
    Page {
        items: range.map(sub).collect(),
        next_page_token: next.map(str::to_owned),
        total_count: total,
    }
}

/// Two pages: 20 items then 5, 25 in total.
fn two_page_source(
    calls: Arc<AtomicUsize>,
) -> impl FnMut(Option<&str>) -> Result<Page<Subscription>, FetchError> {
    move |token: Option<&str>| {
        calls.fetch_add(1, Ordering::Relaxed);
        match token {
            None => Ok(page(0..20, Some("p1"), Some(25))),
            Some("p1") => Ok(page(20..25, None, Some(25))),
            Some(other) => Err(FetchError::Status {
                status: 400,
                message: format!("unknown token {other}"),
            }),
        }
    }
}

#[derive(Default)]
struct RecordingUnsubscriber {
    ids: Mutex<Vec<String>>,
    fail: bool,
}

impl Unsubscriber for RecordingUnsubscriber {
    fn unsubscribe(&self, id: &str) -> Result<(), UnsubscribeError> {
        self.ids.lock().unwrap().push(id.to_owned());
        if self.fail {
            return Err(UnsubscribeError::Rejected {
                id: id.to_owned(),
                status: 500,
            });
        }
        Ok(())
    }
}

fn decide<S>(session: &mut ReviewSession<S>, direction: Direction, now_ms: u64) {
    assert!(session.swipe(direction, now_ms));
    let mut now = now_ms;
    loop {
        now += 16;
        match session.tick(now) {
            TickOutcome::Committed { .. } => return,
            TickOutcome::Animating { .. } => {}
            other => panic!("unexpected tick outcome {other:?}"),
        }
    }
}

#[test]
fn format_compact_matches_english_compact_notation() {
    assert_eq!(format_compact(0.0), "0");
    assert_eq!(format_compact(12.34), "12.3");
    assert_eq!(format_compact(999.0), "999");
    assert_eq!(format_compact(1000.0), "1K");
    assert_eq!(format_compact(1234.0), "1.2K");
    assert_eq!(format_compact(15_400.0), "15.4K");
    assert_eq!(format_compact(999_999.0), "1M");
    assert_eq!(format_compact(1_500_000.0), "1.5M");
    assert_eq!(format_compact(2_000_000_000.0), "2B");
    assert_eq!(format_compact(-1234.0), "-1.2K");
    assert_eq!(format_compact(f64::NAN), "");
    assert_eq!(format_compact(f64::INFINITY), "");
}

#[test]
fn format_compact_str_rejects_blank_and_garbage() {
    assert_eq!(format_compact_str(None), "");
    assert_eq!(format_compact_str(Some("")), "");
    assert_eq!(format_compact_str(Some("   ")), "");
    assert_eq!(format_compact_str(Some("lots")), "");
    assert_eq!(format_compact_str(Some(" 48200 ")), "48.2K");
}

#[test]
fn subscription_page_parses_camel_case_json() {
    let json = r#"{
        "nextPageToken": "CAUQAA",
        "pageInfo": { "totalResults": 42, "resultsPerPage": 20 },
        "items": [{
            "id": "abc",
            "title": "Rust Channel",
            "channelId": "UC123",
            "thumbnails": { "medium": { "url": "https://img/m.jpg" } },
            "contentDetail": { "totalItemCount": 120, "newItemCount": 3 },
            "channel": {
                "statistics": { "subscriberCount": "1520000", "videoCount": "830" },
                "country": "KR"
            }
        }, {}]
    }"#;
    let parsed = SubscriptionPage::from_json(json).unwrap();
    let page: Page<Subscription> = parsed.into();
    assert_eq!(page.total_count, Some(42));
    assert_eq!(page.next_page_token.as_deref(), Some("CAUQAA"));
    assert_eq!(page.items.len(), 2);

    let first = &page.items[0];
    assert_eq!(first.id.as_deref(), Some("abc"));
    assert_eq!(first.thumbnail_url(), Some("https://img/m.jpg"));
    assert_eq!(first.channel_url().as_deref(), Some("https://youtube.com/channel/UC123"));
    assert_eq!(page.items[1], Subscription::default());
}

#[test]
fn subscription_page_rejects_malformed_json() {
    let err = SubscriptionPage::from_json("{ not json").unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn empty_next_token_ends_pagination() {
    let page: Page<Subscription> = SubscriptionPage {
        next_page_token: Some(String::new()),
        ..SubscriptionPage::default()
    }
    .into();
    assert!(page.next_page_token.is_none());
    assert!(page.items.is_empty());
}

#[test]
fn paged_feed_walks_pages_until_exhausted() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut feed = PagedFeed::new(two_page_source(Arc::clone(&calls)));
    assert!(feed.has_more());
    assert_eq!(feed.total_count(), None);

    let first: Vec<Subscription> = feed.load_more().unwrap();
    assert_eq!(first.len(), 20);
    assert_eq!(feed.total_count(), Some(25));
    assert!(feed.has_more());

    let second: Vec<Subscription> = feed.load_more().unwrap();
    assert_eq!(second[0].id.as_deref(), Some("sub-20"));
    assert!(!feed.has_more());
    assert_eq!(feed.pages_loaded(), 2);
    assert_eq!(feed.items_loaded(), 25);

    let none: Vec<Subscription> = feed.load_more().unwrap();
    assert!(none.is_empty());
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn paged_feed_keeps_cursor_after_failure() {
    let mut fail_next = true;
    let mut feed = PagedFeed::new(move |token: Option<&str>| {
        if std::mem::take(&mut fail_next) {
            return Err(FetchError::Transport("connection reset".to_owned()));
        }
        assert!(token.is_none());
        Ok(page(0..3, None, Some(3)))
    });

    let err = feed.load_more::<Subscription>().unwrap_err();
    assert_eq!(err.to_string(), "transport failure: connection reset");
    assert_eq!(feed.pages_loaded(), 0);
    assert!(feed.has_more());

    assert_eq!(feed.load_more::<Subscription>().unwrap().len(), 3);
    assert!(!feed.has_more());
}

#[test]
fn session_loads_first_page_through_prefetch_and_pages_on_demand() {
    init_tracing();
    let calls = Arc::new(AtomicUsize::new(0));
    let unsubscriber = Arc::new(RecordingUnsubscriber::default());
    let mut session = ReviewSession::new(
        two_page_source(Arc::clone(&calls)),
        unsubscriber.clone(),
        &SessionConfig::default(),
    );

    assert!(session.is_load_requested());
    assert!(session.deck().is_empty());
    assert!(session.score().is_none());

    assert_eq!(session.pump().unwrap(), 20);
    assert_eq!(session.deck().total_count(), Some(25));
    assert!(session.deck().has_more());
    assert!(!session.is_load_requested());
    assert_eq!(session.frames().len(), 5);

    // Nothing outstanding: pumping is a no-op.
    assert_eq!(session.pump().unwrap(), 0);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    let mut now = 0;
    for i in 0..10 {
        let direction = if i % 2 == 0 { Direction::Left } else { Direction::Right };
        decide(&mut session, direction, now);
        now += 1000;
    }
    assert_eq!(session.deck().remaining_count(), 10);
    assert!(session.is_load_requested());

    assert_eq!(session.pump().unwrap(), 5);
    assert!(!session.deck().has_more());
    assert_eq!(session.deck().len(), 25);
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    assert_eq!(
        *unsubscriber.ids.lock().unwrap(),
        ["sub-0", "sub-2", "sub-4", "sub-6", "sub-8"]
    );
    assert_eq!(session.failed_unsubscribes(), 0);

    let score = session.score().unwrap();
    assert_eq!(score.progress_label(), "10 / 25");
    assert_eq!(score.unsubscribed, 5);
    assert_eq!(score.kept, 5);
    assert_eq!(score.unsubscribed_share, 0.5);
    assert!(!score.completed);
}

#[test]
fn session_completes_after_last_decision() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut session = ReviewSession::new(
        two_page_source(Arc::clone(&calls)),
        Arc::new(RecordingUnsubscriber::default()),
        &SessionConfig::default(),
    );
    session.pump().unwrap();

    let mut now = 0;
    for _ in 0..25 {
        session.pump().unwrap();
        decide(&mut session, Direction::Right, now);
        now += 1000;
    }
    assert!(session.score().unwrap().completed);
    assert!(session.frames().is_empty());
    assert!(!session.swipe(Direction::Left, now));
}

#[test]
fn failed_unsubscribe_is_logged_not_rolled_back() {
    init_tracing();
    let unsubscriber = Arc::new(RecordingUnsubscriber {
        fail: true,
        ..RecordingUnsubscriber::default()
    });
    let mut session = ReviewSession::new(
        two_page_source(Arc::new(AtomicUsize::new(0))),
        unsubscriber.clone(),
        &SessionConfig::default(),
    );
    session.pump().unwrap();

    decide(&mut session, Direction::Left, 0);
    assert_eq!(session.failed_unsubscribes(), 1);
    assert_eq!(session.deck().consumed(), 1);
    assert_eq!(session.deck().tally(), SwipeTally { left: 1, right: 0 });
    assert_eq!(session.deck().top().unwrap().value.id.as_deref(), Some("sub-1"));
}

#[test]
fn subscription_without_id_is_skipped() {
    let unsubscriber = Arc::new(RecordingUnsubscriber::default());
    let mut session = ReviewSession::new(
        |_: Option<&str>| -> Result<Page<Subscription>, FetchError> {
            Ok(Page {
                items: vec![Subscription::default(), sub(1)],
                next_page_token: None,
                total_count: Some(2),
            })
        },
        unsubscriber.clone(),
        &SessionConfig::default(),
    );
    session.pump().unwrap();

    decide(&mut session, Direction::Left, 0);
    decide(&mut session, Direction::Left, 1000);
    assert_eq!(*unsubscriber.ids.lock().unwrap(), ["sub-1"]);
    assert!(session.score().unwrap().completed);
}

#[test]
fn failed_fetch_leaves_prefetch_latched() {
    init_tracing();
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);
    let mut session = ReviewSession::new(
        move |_: Option<&str>| -> Result<Page<Subscription>, FetchError> {
            c.fetch_add(1, Ordering::Relaxed);
            Err(FetchError::Status {
                status: 503,
                message: "unavailable".to_owned(),
            })
        },
        Arc::new(RecordingUnsubscriber::default()),
        &SessionConfig::default(),
    );

    assert!(session.pump().is_err());
    assert!(session.deck().is_prefetch_pending());
    assert!(!session.is_load_requested());
    assert_eq!(session.pump().unwrap(), 0);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn background_tint_follows_drag_preview() {
    let mut session = ReviewSession::new(
        two_page_source(Arc::new(AtomicUsize::new(0))),
        Arc::new(RecordingUnsubscriber::default()),
        &SessionConfig::default(),
    );
    session.pump().unwrap();
    assert_eq!(session.background_tint(), BackgroundTint::default());

    assert!(session.on_drag_start());
    session.on_drag(-140.0, 0.0, 0);
    assert!(session.background_tint().left_highlighted);
    assert!(!session.background_tint().right_highlighted);
    session.on_drag(130.0, 0.0, 16);
    assert!(session.background_tint().right_highlighted);

    assert_eq!(
        session.on_drag_end(32),
        ReleaseOutcome::Commit(Direction::Right)
    );
    assert_eq!(session.background_tint(), BackgroundTint::default());
    assert_eq!(
        session.controller().phase(),
        GesturePhase::Committing(Direction::Right)
    );
}

#[test]
fn session_config_defaults_and_overrides() {
    let config = SessionConfig::from_json_str("{}").unwrap();
    assert_eq!(config, SessionConfig::default());
    assert_eq!(config.visible_count, 5);
    assert_eq!(config.prefetch_threshold, 10);
    assert_eq!(config.dead_zone, 100.0);
    assert_eq!(config.spring_stiffness, 400.0);
    assert_eq!(config.spring_damping, 30.0);

    let config =
        SessionConfig::from_json_str(r#"{ "visible_count": 3, "dead_zone": 60, "viewport_width": 390 }"#)
            .unwrap();
    assert_eq!(config.deck_options().visible_count, 3);
    assert_eq!(config.gesture_options().dead_zone, 60.0);
    assert_eq!(config.viewport_width, Some(390.0));
}

#[test]
fn session_config_rejects_bad_values() {
    let err = SessionConfig::from_json_str(r#"{ "visible_count": 0 }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "visible_count",
            ..
        }
    ));

    let err = SessionConfig::from_json_str(r#"{ "spring_mass": -1 }"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid session config: `spring_mass` must be positive"
    );

    assert!(matches!(
        SessionConfig::from_json_str(r#"{ "visible_count": "five" }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn card_content_view_formats_channel_stats() {
    let json = r#"{
        "id": "abc",
        "title": "Rust Channel",
        "description": "   ",
        "channelId": "UC123",
        "thumbnails": { "high": { "url": "https://img/h.jpg" } },
        "contentDetail": { "newItemCount": 1234 },
        "channel": {
            "statistics": { "subscriberCount": "1520000", "videoCount": "830" },
            "country": "KR",
            "bannerExternalUrl": "https://img/banner.jpg"
        }
    }"#;
    let item: Subscription = serde_json::from_str(json).unwrap();
    let view = CardContentView::new(&item);

    assert_eq!(view.title, "Rust Channel");
    assert_eq!(view.description, None);
    assert_eq!(view.backdrop_url.as_deref(), Some("https://img/banner.jpg"));
    assert_eq!(view.avatar_url.as_deref(), Some("https://img/h.jpg"));
    let values: Vec<(&str, &str)> = view
        .stats
        .iter()
        .map(|s| (s.label, s.value.as_str()))
        .collect();
    assert_eq!(
        values,
        [
            ("new videos", "1.2K"),
            ("videos", "830"),
            ("country", "KR"),
            ("subscribers", "1.5M"),
        ]
    );
}
