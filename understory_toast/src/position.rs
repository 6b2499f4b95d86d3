// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbolic placement of a toast within its host.
//!
//! Pure functions of their inputs; nothing here touches host state.

use kurbo::{Insets, Point, Rect, Size};

/// Where a toast sits vertically in its host. Toasts are always centered horizontally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// Against the top edge, below the top safe-area inset.
    Top,
    /// Centered in the host.
    Center,
    /// Against the bottom edge, above the bottom safe-area inset.
    #[default]
    Bottom,
}

impl Position {
    /// Resolve to the toast's center point in host coordinates.
    ///
    /// `host_insets` are safe-area exclusion zones; pass [`Insets::ZERO`] when the
    /// host has none. `vertical_padding` is the gap kept between the toast and
    /// the (inset) top or bottom edge; it is unused for [`Position::Center`].
    ///
    /// ```
    /// use kurbo::{Insets, Point, Rect, Size};
    /// use understory_toast::Position;
    ///
    /// let host = Rect::new(0.0, 0.0, 320.0, 480.0);
    /// let toast = Size::new(100.0, 40.0);
    /// assert_eq!(Position::Top.resolve(toast, host, Insets::ZERO, 10.0), Point::new(160.0, 30.0));
    /// assert_eq!(Position::Bottom.resolve(toast, host, Insets::ZERO, 10.0), Point::new(160.0, 450.0));
    /// ```
    pub fn resolve(
        self,
        toast: Size,
        host_bounds: Rect,
        host_insets: Insets,
        vertical_padding: f64,
    ) -> Point {
        let center = host_bounds.center();
        let half_height = toast.height / 2.0;
        let y = match self {
            Self::Top => host_bounds.y0 + half_height + vertical_padding + host_insets.y0,
            Self::Center => center.y,
            Self::Bottom => host_bounds.y1 - half_height - vertical_padding - host_insets.y1,
        };
        Point::new(center.x, y)
    }
}

/// The "position or point" argument accepted by the show operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// A symbolic position, resolved against the host when the toast is requested.
    Position(Position),
    /// An explicit center point in host coordinates, used as-is.
    Point(Point),
}

impl Default for Placement {
    fn default() -> Self {
        Self::Position(Position::default())
    }
}

impl From<Position> for Placement {
    fn from(position: Position) -> Self {
        Self::Position(position)
    }
}

impl From<Point> for Placement {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl Placement {
    /// Resolve to a concrete center point. See [`Position::resolve`].
    pub fn anchor(
        self,
        toast: Size,
        host_bounds: Rect,
        host_insets: Insets,
        vertical_padding: f64,
    ) -> Point {
        match self {
            Self::Position(p) => p.resolve(toast, host_bounds, host_insets, vertical_padding),
            Self::Point(pt) => pt,
        }
    }
}
