// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual parameters for toast cards and the activity overlay.
//!
//! [`Style`] is plain data, copied at the point of use. The library only reads
//! `vertical_padding` (for placement) and `fade_duration` (for fades); the rest
//! is handed to the [`ContentBuilder`](crate::content::ContentBuilder) that
//! draws the card.
//!
//! Three fields are fractions and are clamped to `[0.0, 1.0]` on every
//! assignment: [`Style::max_width_percentage`], [`Style::max_height_percentage`],
//! and [`Style::shadow_opacity`]. Non-finite input is stored as `0.0`.

use core::time::Duration;

use kurbo::{Size, Vec2};

/// A straight-alpha RGBA color with `f32` channels in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Create a color from its channels.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Font weight requested from the toolkit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    /// The toolkit's regular system weight.
    #[default]
    Regular,
    /// The toolkit's bold system weight.
    Bold,
}

/// A system font request: point size and weight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// Point size.
    pub size: f64,
    /// Weight.
    pub weight: FontWeight,
}

impl Font {
    /// Regular system font at `size`.
    pub const fn regular(size: f64) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    /// Bold system font at `size`.
    pub const fn bold(size: f64) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
        }
    }
}

/// Horizontal alignment of a text block inside the card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlignment {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

/// Visual configuration for a toast card.
///
/// Start from [`Style::default`] and assign the public fields. The clamped
/// fractions are private, so struct-update syntax is not available; use their
/// `set_*` or `with_*` methods instead:
///
/// ```
/// use understory_toast::Style;
///
/// let mut style = Style::default().with_max_width_percentage(1.5);
/// style.vertical_padding = 12.0;
/// style.display_shadow = true;
///
/// assert_eq!(style.max_width_percentage(), 1.0);
/// assert_eq!(style.vertical_padding, 12.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    /// Card background.
    pub background_color: Color,
    /// Title text color.
    pub title_color: Color,
    /// Message text color.
    pub message_color: Color,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "de::unit_interval"))]
    max_width_percentage: f64,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "de::unit_interval"))]
    max_height_percentage: f64,
    /// Space between the card edge and its content, left and right.
    pub horizontal_padding: f64,
    /// Space between the card edge and its content, top and bottom.
    ///
    /// Also used as the gap between a top/bottom toast and the host edge.
    pub vertical_padding: f64,
    /// Card corner radius.
    pub corner_radius: f64,
    /// Title font.
    pub title_font: Font,
    /// Message font.
    pub message_font: Font,
    /// Title alignment.
    pub title_alignment: TextAlignment,
    /// Message alignment.
    pub message_alignment: TextAlignment,
    /// Maximum title lines; `0` means unlimited. Overflow is truncated, not wrapped.
    pub title_number_of_lines: usize,
    /// Maximum message lines; `0` means unlimited. Overflow is truncated, not wrapped.
    pub message_number_of_lines: usize,
    /// Draw a drop shadow behind the card.
    pub display_shadow: bool,
    /// Shadow color.
    pub shadow_color: Color,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "de::unit_interval"))]
    shadow_opacity: f64,
    /// Shadow blur radius.
    pub shadow_radius: f64,
    /// Shadow offset.
    pub shadow_offset: Vec2,
    /// Size of the image slot, when the toast carries an image.
    pub image_size: Size,
    /// Size of the activity overlay card.
    pub activity_size: Size,
    /// Length of the fade-in and fade-out animations.
    pub fade_duration: Duration,
    /// Activity spinner color.
    pub activity_indicator_color: Color,
    /// Activity card background.
    pub activity_background_color: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background_color: Color::BLACK.with_alpha(0.8),
            title_color: Color::WHITE,
            message_color: Color::WHITE,
            max_width_percentage: 0.8,
            max_height_percentage: 0.8,
            horizontal_padding: 10.0,
            vertical_padding: 10.0,
            corner_radius: 10.0,
            title_font: Font::bold(16.0),
            message_font: Font::regular(16.0),
            title_alignment: TextAlignment::Left,
            message_alignment: TextAlignment::Left,
            title_number_of_lines: 0,
            message_number_of_lines: 0,
            display_shadow: false,
            shadow_color: Color::BLACK,
            shadow_opacity: 0.8,
            shadow_radius: 6.0,
            shadow_offset: Vec2::new(4.0, 4.0),
            image_size: Size::new(80.0, 80.0),
            activity_size: Size::new(100.0, 100.0),
            fade_duration: Duration::from_millis(200),
            activity_indicator_color: Color::WHITE,
            activity_background_color: Color::BLACK.with_alpha(0.8),
        }
    }
}

impl Style {
    /// Maximum card width as a fraction of the host width.
    pub fn max_width_percentage(&self) -> f64 {
        self.max_width_percentage
    }

    /// Maximum card height as a fraction of the host height.
    pub fn max_height_percentage(&self) -> f64 {
        self.max_height_percentage
    }

    /// Shadow opacity.
    pub fn shadow_opacity(&self) -> f64 {
        self.shadow_opacity
    }

    /// Set the maximum width fraction, clamped to `[0.0, 1.0]`.
    pub fn set_max_width_percentage(&mut self, value: f64) {
        self.max_width_percentage = clamp_unit(value);
    }

    /// Set the maximum height fraction, clamped to `[0.0, 1.0]`.
    pub fn set_max_height_percentage(&mut self, value: f64) {
        self.max_height_percentage = clamp_unit(value);
    }

    /// Set the shadow opacity, clamped to `[0.0, 1.0]`.
    pub fn set_shadow_opacity(&mut self, value: f64) {
        self.shadow_opacity = clamp_unit(value);
    }

    /// Builder form of [`Style::set_max_width_percentage`].
    #[must_use]
    pub fn with_max_width_percentage(mut self, value: f64) -> Self {
        self.set_max_width_percentage(value);
        self
    }

    /// Builder form of [`Style::set_max_height_percentage`].
    #[must_use]
    pub fn with_max_height_percentage(mut self, value: f64) -> Self {
        self.set_max_height_percentage(value);
        self
    }

    /// Builder form of [`Style::set_shadow_opacity`].
    #[must_use]
    pub fn with_shadow_opacity(mut self, value: f64) -> Self {
        self.set_shadow_opacity(value);
        self
    }
}

/// Clamp to the unit interval; NaN maps to `0.0`.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(feature = "serde")]
mod de {
    use serde::{Deserialize, Deserializer};

    pub(super) fn unit_interval<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        f64::deserialize(d).map(super::clamp_unit)
    }
}
