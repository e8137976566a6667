//! Drawing surface abstraction.
//!
//! The engine only ever issues three kinds of axis-aligned rectangle calls.
//! Any backend that can clear, fill and outline a pixel rectangle can host the
//! game: a terminal framebuffer, a browser canvas, or the headless
//! [`RecordingSurface`].

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const GREY: Rgb = Rgb::new(128, 128, 128);

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// A 2D drawing context of fixed pixel size.
pub trait DrawSurface {
    /// Width and height in pixels
    fn size(&self) -> (u32, u32);

    /// Reset a rectangle to the background
    fn clear_rect(&mut self, rect: PixelRect);

    /// Paint a solid rectangle
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);

    /// Paint a 1-pixel outline along the rectangle's edges
    fn stroke_rect(&mut self, rect: PixelRect, color: Rgb);
}

/// One recorded drawing call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Clear(PixelRect),
    Fill(PixelRect, Rgb),
    Stroke(PixelRect, Rgb),
}

/// Headless surface that records every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Filled rectangles in call order
    pub fn fills(&self) -> impl Iterator<Item = PixelRect> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Fill(rect, _) => Some(*rect),
            _ => None,
        })
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, rect: PixelRect) {
        self.calls.push(DrawCall::Clear(rect));
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.calls.push(DrawCall::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.calls.push(DrawCall::Stroke(rect, color));
    }
}
