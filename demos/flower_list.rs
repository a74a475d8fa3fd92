//! Flower list demo: End-to-end run of the actor, controller, and diff.
//!
//! Submits a flower list, then a refreshed version of it, and prints every
//! notification the render boundary would receive.

use crossbeam_channel::unbounded;
use rebind::{ImageRef, Item, ListActor, ListEvent};

fn initial_flowers() -> Vec<Item> {
    vec![
        Item::new(1, "Rose").with_description("red"),
        Item::new(2, "Tulip")
            .with_image(ImageRef::new("tulip.png"))
            .with_description("yellow"),
        Item::new(3, "Daisy").with_description("white"),
    ]
}

fn refreshed_flowers() -> Vec<Item> {
    vec![
        // Daisy moved to the front.
        Item::new(3, "Daisy").with_description("white"),
        // Rose gained its image: expect a single-field payload.
        Item::new(1, "Rose")
            .with_image(ImageRef::new("rose.png"))
            .with_description("red"),
        // Tulip dropped, Fern inserted.
        Item::new(4, "Fern")
            .with_image(ImageRef::new("fern.png"))
            .with_description("green"),
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Rebind Flower List Demo");
    println!("=======================");
    println!();

    let (events_tx, events_rx) = unbounded::<ListEvent>();
    let actor = ListActor::spawn(events_tx);
    let handle = actor.handle();

    handle.submit(initial_flowers());
    handle.submit(refreshed_flowers());

    // 3 insertions, then the refresh's move/remove/insert/update batch.
    let mut received = 0;
    while received < 7 {
        match events_rx.recv() {
            Ok(event) => {
                println!("  {event:?}");
                received += 1;
            }
            Err(_) => break,
        }
    }

    // Let the snapshot swap land before reading.
    while handle.len() != 3 || handle.identity_key(0) != Ok(rebind::ItemId::new(3)) {
        std::thread::yield_now();
    }

    println!();
    println!("Committed rows:");
    for position in 0..handle.len() {
        let item = handle.get(position).expect("position in range");
        println!(
            "  [{position}] {} ({})",
            item.name(),
            item.image().map_or("placeholder.png", ImageRef::as_str)
        );
    }

    handle
        .dispatch_click(1, |item| println!("\nClicked: {}", item.name()))
        .expect("row 1 exists");

    actor.join();
    println!("\nDone.");
}
