use super::{attr, Point, Shape, Style};
use std::fmt;

/// A run of text.
///
/// Unlike the other shapes this element has content and a closing tag. The content is written
/// as-is: it is not XML-escaped, so callers must not pass markup characters they don't intend.
#[derive(Debug, Clone)]
pub struct Text {
    point: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    data: String,
    style: Style,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            point: Point::ORIGIN,
            offset: Point::ORIGIN,
            font_size: 1,
            font_family: None,
            font_weight: None,
            data: String::new(),
            style: Style::default(),
        }
    }
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference point (`x`/`y`).
    pub fn with_point(mut self, point: impl Into<Point>) -> Self {
        self.point = point.into();
        self
    }

    /// The offset from the reference point (`dx`/`dy`).
    pub fn with_offset(mut self, offset: impl Into<Point>) -> Self {
        self.offset = offset.into();
        self
    }

    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    pub fn with_font_weight(mut self, font_weight: impl Into<String>) -> Self {
        self.font_weight = Some(font_weight.into());
        self
    }

    /// The text content.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

impl Shape for Text {
    fn element_name(&self) -> &'static str {
        "text"
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str("<text")?;
        attr(out, "x", self.point.x)?;
        attr(out, "y", self.point.y)?;
        attr(out, "dx", self.offset.x)?;
        attr(out, "dy", self.offset.y)?;
        attr(out, "font-size", self.font_size)?;
        if let Some(ref family) = self.font_family {
            attr(out, "font-family", family)?;
        }
        if let Some(ref weight) = self.font_weight {
            attr(out, "font-weight", weight)?;
        }
        self.style.render(out)?;
        write!(out, ">{}</text>", self.data)
    }
}
