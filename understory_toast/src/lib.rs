// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Toast: transient toast and activity overlays for UI hosts.
//!
//! ## Overview
//!
//! A toast is a small card (message, optional title and image) that fades in
//! over a host container, stays for a while, and fades out. This crate owns
//! everything about toasts except drawing them: where they go, when they fade,
//! how they are dismissed, and in which order queued toasts appear.
//!
//! The toolkit provides two traits:
//!
//! - [`Host`]: bounds, safe area, attach/detach, opacity fades, one-shot timers.
//! - [`ContentBuilder`]: turns a [`ToastContent`] and a [`Style`] into a measured view.
//!
//! A single [`Toaster`] drives any number of hosts. Its [`Settings`] hold the
//! shared style, default duration and position, tap-to-dismiss, and whether
//! toasts queue or overlap.
//!
//! ## Event loop
//!
//! Nothing here blocks or spawns. Fades and timers are started on the host
//! with a token; the toolkit hands the token back when the work is done (see
//! [`host`] for the protocol). Late or duplicate tokens are ignored.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Rect, Size};
//! use understory_toast::{
//!     ContentBuilder, ContentNode, DismissTimer, Host, HostId, OverlayFlags, Style,
//!     ToastContent, ToastRequest, Toaster, Transition,
//! };
//!
//! #[derive(Default)]
//! struct Window {
//!     next: u32,
//!     fades: Vec<Transition>,
//!     timers: Vec<DismissTimer>,
//! }
//!
//! impl Host for Window {
//!     type View = u32;
//!     fn id(&self) -> HostId { HostId(1) }
//!     fn bounds(&self) -> Rect { Rect::new(0.0, 0.0, 320.0, 480.0) }
//!     fn attach(&mut self, _: u32, _: Point, _: OverlayFlags) {}
//!     fn detach(&mut self, _: u32) {}
//!     fn fade(&mut self, _: u32, _: f64, _: Duration, t: Transition) { self.fades.push(t); }
//!     fn start_timer(&mut self, _: Duration, t: DismissTimer) { self.timers.push(t); }
//!     fn cancel_timer(&mut self, t: DismissTimer) { self.timers.retain(|x| *x != t); }
//! }
//!
//! impl ContentBuilder for Window {
//!     type Image = ();
//!     fn build_toast(&mut self, _: ToastContent<()>, _: &Style) -> ContentNode<u32> {
//!         self.next += 1;
//!         ContentNode { view: self.next, size: Size::new(200.0, 40.0) }
//!     }
//!     fn build_activity(&mut self, style: &Style) -> ContentNode<u32> {
//!         self.next += 1;
//!         ContentNode { view: self.next, size: style.activity_size }
//!     }
//! }
//!
//! let mut toaster = Toaster::new();
//! let mut window = Window::default();
//! let view = toaster
//!     .make_toast(&mut window, ToastRequest::message("Saved"))
//!     .unwrap();
//!
//! // The event loop reports the fade-in; the toast arms its timer.
//! for t in core::mem::take(&mut window.fades) {
//!     toaster.animation_finished(&mut window, t);
//! }
//! // The timer fires; the toast fades out and is gone once that finishes.
//! for t in core::mem::take(&mut window.timers) {
//!     toaster.timer_fired(&mut window, t);
//! }
//! for t in core::mem::take(&mut window.fades) {
//!     toaster.animation_finished(&mut window, t);
//! }
//! assert_eq!(toaster.phase(HostId(1), view), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod activity;
pub mod content;
pub mod error;
pub mod host;
pub mod position;
pub mod settings;
pub mod store;
pub mod style;
pub mod toaster;

#[cfg(test)]
mod mock;

pub use content::{ContentBuilder, ContentNode, ToastContent, build};
pub use error::ToastError;
pub use host::{DismissTimer, Host, HostId, OverlayFlags, Transition};
pub use position::{Placement, Position};
pub use settings::Settings;
pub use store::{ActivityId, Completion, Phase, ToastId};
pub use style::{Color, Font, FontWeight, Style, TextAlignment};
pub use toaster::{ShowOptions, ToastRequest, Toaster};
