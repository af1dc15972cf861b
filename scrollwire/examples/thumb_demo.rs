//! Interactive demo: click and wheel around the pane's right edge and
//! watch the semantic events land in `thumb_demo.log`.
//!
//! Run with `cargo run --example thumb_demo`, then press `q` to quit.

use std::fs::File;

use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use scrollwire::prelude::*;
use scrollwire::runtime;

fn build_tree() -> Element {
    Element::new("root")
        .with_rect(OffsetBox::new(0.0, 0.0, 120.0, 40.0))
        .child(
            Element::new("pane")
                .with_rect(OffsetBox::new(10.0, 2.0, 60.0, 36.0))
                .scrollable(true)
                .child(Element::text("lots of scrollable content")),
        )
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("thumb_demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let root = build_tree();
    let mut listener = attach_selector(&root, "#pane").expect("pane exists");

    let mut callbacks = Callbacks::new();
    for event in ScrollbarEvent::ALL {
        callbacks = callbacks.on(event, move || info!("{event}"));
    }
    listener.listen(callbacks);

    runtime::run(&root, &mut listener).await
}
