//! Viewport geometry for document elements.

/// Bounding rectangle in viewport coordinates (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    pub fn size(&self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Parse the `data-rect` attribute form: `"left,top,width,height"`.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split(',').map(|p| p.trim().parse::<f32>());
        let rect = Self {
            left: parts.next()?.ok()?,
            top: parts.next()?.ok()?,
            width: parts.next()?.ok()?,
            height: parts.next()?.ok()?,
        };
        if parts.next().is_some() || rect.width < 0.0 || rect.height < 0.0 {
            return None;
        }
        Some(rect)
    }
}

/// Rendered size of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Absolute position written to an element's style.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub top: f32,
    pub left: f32,
}

/// Font metrics used to measure elements that have no explicit geometry.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextMetrics {
    /// Advance width of one character at the base font size.
    pub char_width: f32,
    /// Line height at the base font size.
    pub line_height: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self { char_width: 8.0, line_height: 24.0 }
    }
}
