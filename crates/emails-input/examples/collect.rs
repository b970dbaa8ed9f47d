//! Emails Input Walkthrough Example
//!
//! Drives the collection controller the way a host UI would: pasted blobs,
//! programmatic adds, chip removal, and a reset, with a chip arena kept in
//! sync from the change signal. Enable logging to watch the mutations:
//!
//! Run with: RUST_LOG=emails_input=debug cargo run -p emails-input --example collect

use std::sync::Arc;

use parking_lot::Mutex;

use emails_input::prelude::*;

fn print_chips(arena: &ChipArena) {
    for chip in arena.ordered() {
        let marker = if chip.is_valid() { "ok " } else { "BAD" };
        println!("  [{marker}] {} ({})", chip.text(), chip.id());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let input = EmailsInput::new(
        EmailsInputOptions::new()
            .with_placeholder("add more people…")
            .with_max_length(512),
    )?;

    // The view layer: a chip arena reconciled from every snapshot.
    let arena = Arc::new(Mutex::new(ChipArena::new()));
    let nodes = arena.clone();
    input.subscribe(move |items| {
        nodes.lock().sync(items);
    });

    // A paste: messy separators, a duplicate, and one malformed entry.
    println!("pasting a blob...");
    input.commit_input("ada@example.com,  grace@example.com ,ada@example.com, not-an-email,");
    print_chips(&arena.lock());

    // A programmatic add, as a host API call would do.
    println!("adding programmatically...");
    let snapshot = input.add("alan@example.com");
    println!("  collection size is now {}", snapshot.len());

    // Remove one chip by identity, like a chip-close button.
    let doomed = snapshot[0].id();
    println!("removing {doomed}...");
    input.collection().remove_item(doomed);
    print_chips(&arena.lock());

    // Reset broadcasts the empty snapshot even if already empty.
    println!("resetting...");
    input.reset();
    println!("  arena now holds {} chip(s)", arena.lock().len());

    Ok(())
}
