use super::{Point, Shape, Style};
use std::fmt;

/// An open sequence of connected line segments.
///
/// The `points` attribute is left out entirely when there are no points. Each point is written
/// as `x,y ` (including a space after the last one).
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    points: Vec<Point>,
    style: Style,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point to the end of the line.
    pub fn add_point(mut self, point: impl Into<Point>) -> Self {
        self.points.push(point.into());
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
            style: Style::default(),
        }
    }
}

impl Extend<Point> for Polyline {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl Shape for Polyline {
    fn element_name(&self) -> &'static str {
        "polyline"
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str("<polyline")?;
        if !self.points.is_empty() {
            out.write_str(" points=\"")?;
            for point in &self.points {
                write!(out, "{},{} ", point.x, point.y)?;
            }
            out.write_char('"')?;
        }
        self.style.render(out)?;
        out.write_str(" />")
    }
}
