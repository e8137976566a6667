//! Pixel framebuffer that implements the engine's drawing surface.

use crate::engine::{DrawSurface, PixelRect, Rgb};

/// Default background color
pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);

/// 2D framebuffer of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    background: Rgb,
    pixels: Vec<Rgb>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            background: BACKGROUND,
            pixels: vec![BACKGROUND; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.pixels.resize(len, self.background);
    }

    #[inline(always)]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width as u32 || y >= self.height as u32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    fn paint(&mut self, rect: PixelRect, color: Rgb) {
        let x_end = rect.x.saturating_add(rect.w).min(self.width as u32);
        let y_end = rect.y.saturating_add(rect.h).min(self.height as u32);
        for y in rect.y..y_end {
            for x in rect.x..x_end {
                self.set(x, y, color);
            }
        }
    }
}

impl DrawSurface for FrameBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    fn clear_rect(&mut self, rect: PixelRect) {
        let background = self.background;
        self.paint(rect, background);
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.paint(rect, color);
    }

    fn stroke_rect(&mut self, rect: PixelRect, color: Rgb) {
        if rect.is_empty() {
            return;
        }
        let right = rect.x + rect.w - 1;
        let bottom = rect.y + rect.h - 1;
        for x in rect.x..=right {
            self.set(x, rect.y, color);
            self.set(x, bottom, color);
        }
        for y in rect.y..=bottom {
            self.set(rect.x, y, color);
            self.set(right, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn fill_is_clipped_to_bounds() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill_rect(PixelRect::new(2, 2, 10, 10), RED);

        assert_eq!(fb.get(3, 3), Some(RED));
        assert_eq!(fb.get(1, 1), Some(BACKGROUND));
        assert_eq!(fb.get(4, 4), None);
    }

    #[test]
    fn stroke_leaves_interior_untouched() {
        let mut fb = FrameBuffer::new(5, 5);
        fb.fill_rect(PixelRect::new(0, 0, 3, 3), RED);
        fb.stroke_rect(PixelRect::new(0, 0, 3, 3), BLUE);

        assert_eq!(fb.get(1, 1), Some(RED));
        assert_eq!(fb.get(0, 0), Some(BLUE));
        assert_eq!(fb.get(2, 1), Some(BLUE));
        assert_eq!(fb.get(1, 2), Some(BLUE));
        assert_eq!(fb.get(3, 3), Some(BACKGROUND));
    }

    #[test]
    fn clear_rect_restores_background() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.fill_rect(PixelRect::new(0, 0, 3, 3), RED);
        fb.clear_rect(PixelRect::new(1, 1, 2, 2));
        assert_eq!(fb.get(0, 0), Some(RED));
        assert_eq!(fb.get(1, 1), Some(BACKGROUND));
        assert_eq!(fb.get(2, 2), Some(BACKGROUND));
    }
}
