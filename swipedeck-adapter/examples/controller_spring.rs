use swipedeck::DeckOptions;
use swipedeck_adapter::{GestureOptions, SwipeController, TickOutcome};

fn main() {
    // Example: a frame loop driving the fly-out spring without holding any UI objects.
    //
    // An adapter would:
    // - forward pointer events to on_drag_start / on_drag / on_drag_end
    // - call tick(now_ms) in a frame loop / timer
    // - apply the top card's drag transform and every card's stack pose when rendering
    let mut c = SwipeController::new(
        vec!["alpha", "beta", "gamma"],
        DeckOptions::new().with_total_count(Some(3)),
        GestureOptions::new(),
    )
    .with_on_swipe_left(Some(|item: &&str| println!("unsubscribe {item}")));
    c.set_viewport_width(Some(1280.0));

    c.on_drag_start();
    for (i, dx) in [-20.0, -60.0, -110.0, -160.0].into_iter().enumerate() {
        c.on_drag(dx, 4.0, i as u64 * 16);
        println!("dx={dx} preview={:?}", c.deck().active_direction());
    }
    println!("release: {:?}", c.on_drag_end(64));

    let mut now_ms = 64u64;
    loop {
        now_ms += 16;
        match c.tick(now_ms) {
            TickOutcome::Animating { x, .. } => {
                if now_ms % 80 == 0 {
                    println!("t={now_ms} x={x:.1} rotate={:.1}", c.drag_transform().rotate);
                }
            }
            outcome => {
                println!("t={now_ms} {outcome:?}");
                break;
            }
        }
    }

    for frame in c.frames() {
        println!(
            "key={} value={} draggable={} pose={:?}",
            frame.entry.key, frame.entry.value, frame.draggable, frame.pose
        );
    }
    println!("tally={:?}", c.deck().tally());
}
