// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activity overlay next to overlapping toasts.
//!
//! Shows a spinner, two overlapping toasts, then hides everything at once.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_toast_demos --example activity`

use kurbo::Point;
use understory_toast::{Host, Position, ToastRequest, Toaster};
use understory_toast_demos::ConsoleHost;

fn main() {
    env_logger::init();

    let mut toaster = Toaster::new();
    let mut host = ConsoleHost::new(1, 390.0, 844.0);

    toaster.make_toast_activity(&mut host, Position::Center);
    // Ignored: the host already shows one.
    toaster.make_toast_activity(&mut host, Point::new(40.0, 40.0));

    toaster.make_toast(&mut host, ToastRequest::message("Uploading…"));
    toaster.make_toast(
        &mut host,
        ToastRequest::message("Still working").position(Position::Top),
    );
    println!(
        "active: {:?}, activity: {:?}",
        toaster.active_toasts(host.id()).collect::<Vec<_>>(),
        toaster.activity(host.id())
    );

    // Take everything down while it is still fading in.
    toaster.hide_all_toasts(&mut host, true, true);
    host.run(&mut toaster);
    println!(
        "active: {}, activity: {:?}",
        toaster.active_toasts(host.id()).count(),
        toaster.activity(host.id())
    );
}
