// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Queued toasts.
//!
//! Three toasts are requested at once with queueing enabled. They appear one
//! after another; the second is dismissed early by a tap.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_toast_demos --example toast_queue`

use std::time::Duration;

use understory_toast::{Host, Position, Settings, ToastRequest, Toaster};
use understory_toast_demos::{ConsoleHost, Event};

fn main() {
    env_logger::init();

    let mut toaster = Toaster::with_settings(Settings {
        queue_enabled: true,
        ..Settings::default()
    });
    let mut host = ConsoleHost::new(1, 390.0, 844.0);

    toaster.make_toast(
        &mut host,
        ToastRequest::message("Connected")
            .duration(Duration::from_secs(1))
            .on_completion(|tapped| println!("first done (tapped: {tapped})")),
    );
    let second = toaster.make_toast(
        &mut host,
        ToastRequest::message("3 new messages")
            .title("Inbox")
            .position(Position::Top)
            .on_completion(|tapped| println!("second done (tapped: {tapped})")),
    );
    toaster.make_toast(
        &mut host,
        ToastRequest::message("Synced")
            .image("check")
            .position(Position::Center)
            .on_completion(|tapped| println!("third done (tapped: {tapped})")),
    );
    // An empty request is logged and dropped.
    toaster.make_toast(&mut host, ToastRequest::new());

    println!("queued: {}", toaster.queued_toasts(host.id()));

    // The second toast starts fading in at 1.4s; tap it a second later.
    if let Some(view) = second {
        host.schedule(Duration::from_millis(2400), Event::Tap(view));
    }
    host.run(&mut toaster);
    println!("idle at {}ms", host.now().as_millis());
}
