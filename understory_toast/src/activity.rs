// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activity overlay: at most one indeterminate spinner card per host.
//!
//! The overlay has no timer and no queue. It stays until
//! [`Toaster::hide_toast_activity`] (or [`Toaster::hide_all_toasts`] with
//! `include_activity`) fades it out. While an overlay exists on a host,
//! including while it fades out, further show requests for that host do
//! nothing.

use core::fmt::Debug;

use log::{debug, trace};

use crate::content::ContentBuilder;
use crate::host::{Host, HostId, OverlayFlags, Transition};
use crate::position::Placement;
use crate::store::ActivityId;
use crate::toaster::Toaster;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ActivityPhase {
    Appearing,
    Visible,
    Disappearing,
}

/// The activity overlay attached to one host.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ActivityOverlay<V> {
    id: ActivityId,
    view: V,
    phase: ActivityPhase,
}

impl<V: Copy + Eq + Debug> Toaster<V> {
    /// Show the activity overlay on `host`, centered on `placement`.
    ///
    /// Does nothing if the host already has one.
    pub fn make_toast_activity<H>(&mut self, host: &mut H, placement: impl Into<Placement>)
    where
        H: ContentBuilder<View = V>,
    {
        let host_id = host.id();
        if self
            .hosts
            .get(&host_id)
            .is_some_and(|state| state.activity.is_some())
        {
            trace!("activity already shown on {host_id:?}");
            return;
        }
        let style = self.settings().style;
        let node = host.build_activity(&style);
        let center = placement.into().anchor(
            node.size,
            host.bounds(),
            host.safe_area(),
            style.vertical_padding,
        );
        let id = ActivityId(self.next_activity);
        self.next_activity += 1;
        self.hosts.entry(host_id).or_default().activity = Some(ActivityOverlay {
            id,
            view: node.view,
            phase: ActivityPhase::Appearing,
        });
        debug!("showing activity {:?} on {host_id:?}", node.view);
        host.attach(node.view, center, OverlayFlags::ACTIVITY);
        host.fade(node.view, 1.0, style.fade_duration, Transition::ActivityIn(id));
    }

    /// Fade out and detach the activity overlay on `host`, if any.
    pub fn hide_toast_activity<H: Host<View = V>>(&mut self, host: &mut H) {
        let fade = self.settings().style.fade_duration;
        let Some(overlay) = self
            .hosts
            .get_mut(&host.id())
            .and_then(|state| state.activity.as_mut())
        else {
            return;
        };
        if overlay.phase == ActivityPhase::Disappearing {
            return;
        }
        overlay.phase = ActivityPhase::Disappearing;
        debug!("hiding activity {:?}", overlay.view);
        host.fade(overlay.view, 0.0, fade, Transition::ActivityOut(overlay.id));
    }

    /// The activity overlay's view on `host`, including while it fades out.
    pub fn activity(&self, host: HostId) -> Option<V> {
        self.hosts
            .get(&host)
            .and_then(|state| state.activity.as_ref())
            .map(|overlay| overlay.view)
    }

    pub(crate) fn finish_activity_in(&mut self, host: HostId, id: ActivityId) {
        let overlay = self
            .hosts
            .get_mut(&host)
            .and_then(|state| state.activity.as_mut())
            .filter(|overlay| overlay.id == id);
        match overlay {
            Some(overlay) if overlay.phase == ActivityPhase::Appearing => {
                overlay.phase = ActivityPhase::Visible;
            }
            _ => trace!("stale activity fade-in {id:?} ignored"),
        }
    }

    pub(crate) fn finish_activity_out<H: Host<View = V>>(&mut self, host: &mut H, id: ActivityId) {
        let Some(state) = self.hosts.get_mut(&host.id()) else {
            return;
        };
        let finished = state
            .activity
            .filter(|overlay| overlay.id == id && overlay.phase == ActivityPhase::Disappearing);
        match finished {
            Some(overlay) => {
                state.activity = None;
                host.detach(overlay.view);
            }
            None => trace!("stale activity fade-out {id:?} ignored"),
        }
    }
}
