// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What goes on a toast card, and the toolkit hook that turns it into a view.
//!
//! Layout is not done here. The toolkit implements [`ContentBuilder`] and is
//! free to arrange image, title, and message as it likes (typically image on
//! the left, title over message on the right, capped by
//! [`Style::max_width_percentage`] and [`Style::max_height_percentage`]). The
//! toaster only needs the measured [`ContentNode::size`] to place the card.

use alloc::string::String;

use kurbo::Size;

use crate::error::ToastError;
use crate::host::Host;
use crate::style::Style;

/// The text and image of one toast. Holds at least one of the three.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastContent<I> {
    message: Option<String>,
    title: Option<String>,
    image: Option<I>,
}

impl<I> ToastContent<I> {
    /// Validate a message/title/image triple.
    ///
    /// Fails with [`ToastError::MissingContent`] when all three are absent.
    pub fn new(
        message: Option<String>,
        title: Option<String>,
        image: Option<I>,
    ) -> Result<Self, ToastError> {
        if message.is_none() && title.is_none() && image.is_none() {
            return Err(ToastError::MissingContent);
        }
        Ok(Self {
            message,
            title,
            image,
        })
    }

    /// A message-only toast.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            title: None,
            image: None,
        }
    }

    /// A toast with a title over its message.
    pub fn titled(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            title: Some(title.into()),
            image: None,
        }
    }

    /// Add or replace the image.
    #[must_use]
    pub fn with_image(mut self, image: I) -> Self {
        self.image = Some(image);
        self
    }

    /// Message text, if any.
    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Title text, if any.
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Image, if any.
    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }
}

/// A built overlay view together with its measured size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentNode<V> {
    /// The toolkit view, not yet attached.
    pub view: V,
    /// Measured size, used to anchor the view.
    pub size: Size,
}

/// Builds overlay views for a [`Host`].
pub trait ContentBuilder: Host {
    /// Toolkit image type carried by toasts.
    type Image;

    /// Build a toast card for `content`, styled with `style`.
    fn build_toast(
        &mut self,
        content: ToastContent<Self::Image>,
        style: &Style,
    ) -> ContentNode<Self::View>;

    /// Build an activity indicator card of `style.activity_size`.
    fn build_activity(&mut self, style: &Style) -> ContentNode<Self::View>;
}

/// Validate the parts and build a toast card.
///
/// Fails with [`ToastError::MissingContent`] when message, title, and image
/// are all absent; the builder is not called in that case.
pub fn build<B: ContentBuilder>(
    builder: &mut B,
    message: Option<String>,
    title: Option<String>,
    image: Option<B::Image>,
    style: &Style,
) -> Result<ContentNode<B::View>, ToastError> {
    let content = ToastContent::new(message, title, image)?;
    Ok(builder.build_toast(content, style))
}
