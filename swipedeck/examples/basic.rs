// Example: window, fan layout, decisions and an edge-triggered "load more".
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use swipedeck::{Deck, DeckOptions, Direction};

fn main() {
    let requests = Arc::new(AtomicUsize::new(0));
    let r = Arc::clone(&requests);
    let mut deck = Deck::new(
        (1..=12).collect::<Vec<u32>>(),
        DeckOptions::new()
            .with_has_more(true)
            .with_prefetch_threshold(8)
            .with_on_load_more(Some(move || {
                r.fetch_add(1, Ordering::Relaxed);
            })),
    );

    let layout = deck.layout();
    for (entry, pose) in deck.window().iter().zip(&layout) {
        println!(
            "key={} value={} z={} y={} rotate={}",
            entry.key, entry.value, pose.z_index, pose.pos_y, pose.rotate
        );
    }

    for direction in [Direction::Left, Direction::Right, Direction::Left, Direction::Left] {
        deck.record_decision(direction);
        println!(
            "consumed={} remaining={} tally={:?} load_requests={}",
            deck.consumed(),
            deck.remaining_count(),
            deck.tally(),
            requests.load(Ordering::Relaxed)
        );
    }

    // The next page arrives.
    deck.extend_items(13..=24);
    println!(
        "after page: remaining={} pending={}",
        deck.remaining_count(),
        deck.is_prefetch_pending()
    );
}
