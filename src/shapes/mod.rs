//! The shape primitives a [`Document`](crate::Document) is made of.
//!
//! Every shape shares a [`Style`] (fill, stroke, stroke width, line cap and join) and adds its own
//! geometry. Shapes are built with consuming `with_*` methods, so a whole shape can be written as
//! one expression and handed to the document.
//!
//! Attributes are always written as a leading space followed by `name="value"`, and the
//! attribute order of each element is fixed.

mod circle;
mod polyline;
mod text;

pub use circle::Circle;
pub use kurbo::Point;
pub use polyline::Polyline;
pub use text::Text;

use crate::style::Color;
use dyn_clone::DynClone;
use std::fmt;

/// Common behavior for all shapes.
pub trait Shape: DynClone + fmt::Debug {
    /// The SVG element this shape renders as.
    fn element_name(&self) -> &'static str;

    /// The paint properties shared by every shape.
    fn style(&self) -> &Style;

    fn style_mut(&mut self) -> &mut Style;

    /// Write this shape as a single SVG element.
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    fn with_fill_color(mut self, color: impl Into<Color>) -> Self
    where
        Self: Sized,
    {
        self.style_mut().fill = color.into();
        self
    }

    fn with_stroke_color(mut self, color: impl Into<Color>) -> Self
    where
        Self: Sized,
    {
        self.style_mut().stroke = color.into();
        self
    }

    /// Negative or otherwise meaningless widths are written out as given.
    fn with_stroke_width(mut self, width: f64) -> Self
    where
        Self: Sized,
    {
        self.style_mut().stroke_width = width;
        self
    }

    fn with_stroke_line_cap(mut self, line_cap: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.style_mut().line_cap = Some(line_cap.into());
        self
    }

    fn with_stroke_line_join(mut self, line_join: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.style_mut().line_join = Some(line_join.into());
        self
    }
}

dyn_clone::clone_trait_object!(Shape);

/// Fill and stroke properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub line_cap: Option<String>,
    pub line_join: Option<String>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Color::NONE,
            stroke: Color::NONE,
            stroke_width: 1.,
            line_cap: None,
            line_join: None,
        }
    }
}

impl Style {
    /// Writes `fill`, `stroke`, `stroke-width`, then `stroke-linecap` and `stroke-linejoin` if
    /// they are set.
    pub(crate) fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        attr(out, "fill", &self.fill)?;
        attr(out, "stroke", &self.stroke)?;
        attr(out, "stroke-width", self.stroke_width)?;
        if let Some(ref line_cap) = self.line_cap {
            attr(out, "stroke-linecap", line_cap)?;
        }
        if let Some(ref line_join) = self.line_join {
            attr(out, "stroke-linejoin", line_join)?;
        }
        Ok(())
    }
}

pub(crate) fn attr(out: &mut dyn fmt::Write, name: &str, value: impl fmt::Display) -> fmt::Result {
    write!(out, " {}=\"{}\"", name, value)
}

/// Options for angled joins in strokes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LineJoin {
    /// The outer edges of the two segments are extended until they intersect.
    #[default]
    Miter,
    /// The two segments are joined by a circular arc.
    Round,
    /// The notch between the two segments is filled with a straight edge.
    Bevel,
}

impl LineJoin {
    pub fn as_str(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// Options for the cap of stroked lines.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LineCap {
    /// The stroke is squared off at the endpoint of the path.
    #[default]
    Butt,
    /// The stroke ends in a semicircular arc with a diameter equal to the line width.
    Round,
    /// The stroke projects past the end of the path by half the line width, and is squared off.
    Square,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

impl From<LineJoin> for String {
    fn from(join: LineJoin) -> Self {
        join.as_str().to_owned()
    }
}

impl From<LineCap> for String {
    fn from(cap: LineCap) -> Self {
        cap.as_str().to_owned()
    }
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
