//! Drawing surfaces and the backing-size policy shared by both engines.
//!
//! A [`Surface`] is the raster target behind a visible canvas element: it has a
//! backing resolution, an on-screen CSS box, and pixel content. The engines only
//! talk to this trait, so they run identically against the browser canvas
//! ([`crate::web::WebSurface`]) and the headless [`MemorySurface`].
//!
//! [`sync_backing_size`] keeps the backing resolution equal to the CSS box and
//! carries the existing pixels across the resize when it can.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::color::Rgb;
use crate::coords::{Point, Rect, Size};
use crate::raster::Raster;

/// Failures reported by surface operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The backing buffer has zero area, so there is nothing to read.
    #[error("surface has zero area")]
    EmptySurface,
    /// The platform canvas rejected the call.
    #[error("canvas call failed: {0}")]
    Platform(String),
}

/// Color and width for a stroked segment. Caps and joins are always round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub width: f64,
}

/// A raster drawing target.
pub trait Surface {
    /// Saved pixel content, as returned by [`Surface::snapshot`].
    type Snapshot;

    /// Current backing-buffer resolution.
    fn backing_size(&self) -> Size;

    /// Current on-screen size in whole CSS pixels.
    fn css_size(&self) -> Size;

    /// Current bounding box in viewport coordinates. Read fresh on every event.
    fn bounds(&self) -> Rect;

    /// Reallocate the backing buffer. Existing content is discarded.
    fn set_backing_size(&mut self, size: Size);

    /// Capture the current pixel content.
    ///
    /// # Errors
    ///
    /// Fails when the buffer has zero area or the platform refuses the read.
    fn snapshot(&self) -> Result<Self::Snapshot, SurfaceError>;

    /// Write a snapshot back 1:1 with its top-left corner at the origin.
    ///
    /// Content outside the current buffer is clipped.
    ///
    /// # Errors
    ///
    /// Fails when the platform refuses the write.
    fn restore(&mut self, snapshot: &Self::Snapshot) -> Result<(), SurfaceError>;

    /// Stroke one straight segment.
    ///
    /// # Errors
    ///
    /// Fails when the platform rejects the drawing call.
    fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) -> Result<(), SurfaceError>;

    /// Make every pixel transparent.
    ///
    /// # Errors
    ///
    /// Fails when the platform rejects the drawing call.
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Draw a single line of status text centered on the surface.
    ///
    /// # Errors
    ///
    /// Fails when the platform rejects the drawing call.
    fn draw_placeholder(&mut self, text: &str, color: Rgb) -> Result<(), SurfaceError>;
}

/// Outcome of [`sync_backing_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSync {
    /// Backing size already matched the CSS box.
    Unchanged,
    /// The CSS box had zero area (element hidden); nothing was touched.
    SkippedZeroArea,
    /// The backing buffer was reallocated. `preserved` tells whether the
    /// previous content was carried over.
    Resized { preserved: bool },
}

/// Align the backing resolution with the CSS box, preserving content 1:1.
///
/// Growing the surface leaves blank margins right and below; shrinking clips.
/// A failed snapshot never blocks the resize, the old content is simply lost.
pub fn sync_backing_size<S: Surface + ?Sized>(surface: &mut S) -> SizeSync {
    let target = surface.css_size();
    if target.is_empty() {
        return SizeSync::SkippedZeroArea;
    }
    let current = surface.backing_size();
    if current == target {
        return SizeSync::Unchanged;
    }

    let saved = if current.is_empty() {
        None
    } else {
        match surface.snapshot() {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                log::debug!("resize snapshot failed, content will be dropped: {err}");
                None
            }
        }
    };

    surface.set_backing_size(target);
    log::debug!("surface resized {current:?} -> {target:?}");

    let preserved = match saved {
        Some(snapshot) => match surface.restore(&snapshot) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("resize restore failed: {err}");
                false
            }
        },
        None => false,
    };
    SizeSync::Resized { preserved }
}

/// Log a failed drawing call. Drawing failures never reach the host.
pub(crate) fn report(what: &str, result: Result<(), SurfaceError>) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err}");
    }
}

/// Headless surface backed by a [`Raster`].
///
/// The CSS box is set explicitly with [`MemorySurface::set_layout`], standing in
/// for browser layout. Placeholder text cannot be rasterized without a font
/// stack, so the last placeholder is recorded instead.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    raster: Raster,
    layout: Rect,
    placeholder: Option<(String, Rgb)>,
}

impl MemorySurface {
    /// A surface laid out at `layout` with a matching backing buffer.
    #[must_use]
    pub fn new(layout: Rect) -> Self {
        Self {
            raster: Raster::new(layout.rounded_size()),
            layout,
            placeholder: None,
        }
    }

    /// A surface whose backing buffer differs from its layout box.
    #[must_use]
    pub fn with_backing(layout: Rect, backing: Size) -> Self {
        Self {
            raster: Raster::new(backing),
            layout,
            placeholder: None,
        }
    }

    /// Simulate a layout change (window resize, fullscreen, panel toggle).
    pub fn set_layout(&mut self, layout: Rect) {
        self.layout = layout;
    }

    #[must_use]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Direct pixel access for seeding content.
    pub fn raster_mut(&mut self) -> &mut Raster {
        &mut self.raster
    }

    /// The last placeholder drawn since the surface was last cleared.
    #[must_use]
    pub fn placeholder(&self) -> Option<(&str, Rgb)> {
        self.placeholder.as_ref().map(|(text, color)| (text.as_str(), *color))
    }
}

impl Surface for MemorySurface {
    type Snapshot = Raster;

    fn backing_size(&self) -> Size {
        self.raster.size()
    }

    fn css_size(&self) -> Size {
        self.layout.rounded_size()
    }

    fn bounds(&self) -> Rect {
        self.layout
    }

    fn set_backing_size(&mut self, size: Size) {
        self.raster = Raster::new(size);
        self.placeholder = None;
    }

    fn snapshot(&self) -> Result<Raster, SurfaceError> {
        if self.raster.size().is_empty() {
            return Err(SurfaceError::EmptySurface);
        }
        Ok(self.raster.clone())
    }

    fn restore(&mut self, snapshot: &Raster) -> Result<(), SurfaceError> {
        self.raster.blit(snapshot, 0, 0);
        Ok(())
    }

    fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) -> Result<(), SurfaceError> {
        self.raster.stroke_segment(from, to, style.width, style.color);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.raster.clear();
        self.placeholder = None;
        Ok(())
    }

    fn draw_placeholder(&mut self, text: &str, color: Rgb) -> Result<(), SurfaceError> {
        self.placeholder = Some((text.to_owned(), color));
        Ok(())
    }
}
