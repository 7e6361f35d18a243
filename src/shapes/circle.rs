use super::{attr, Point, Shape, Style};
use std::fmt;

/// A circle, rendered as `<circle cx cy r fill stroke stroke-width [linecap] [linejoin] />`.
#[derive(Debug, Clone)]
pub struct Circle {
    shape: kurbo::Circle,
    style: Style,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            shape: kurbo::Circle::new(Point::ORIGIN, 1.),
            style: Style::default(),
        }
    }
}

impl Circle {
    /// A unit circle at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center(mut self, center: impl Into<Point>) -> Self {
        self.shape.center = center.into();
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.shape.radius = radius;
        self
    }

    pub fn center(&self) -> Point {
        self.shape.center
    }

    pub fn radius(&self) -> f64 {
        self.shape.radius
    }
}

impl From<kurbo::Circle> for Circle {
    fn from(shape: kurbo::Circle) -> Self {
        Self {
            shape,
            style: Style::default(),
        }
    }
}

impl Shape for Circle {
    fn element_name(&self) -> &'static str {
        "circle"
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str("<circle")?;
        attr(out, "cx", self.shape.center.x)?;
        attr(out, "cy", self.shape.center.y)?;
        attr(out, "r", self.shape.radius)?;
        self.style.render(out)?;
        out.write_str(" />")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    fn render(circle: &Circle) -> String {
        let mut out = String::new();
        circle.render(&mut out).unwrap();
        out
    }

    #[test]
    fn default_circle() {
        assert_eq!(
            render(&Circle::new()),
            r#"<circle cx="0" cy="0" r="1" fill="none" stroke="none" stroke-width="1" />"#
        );
    }

    #[test]
    fn chained_setters() {
        let circle = Circle::new()
            .with_fill_color("white")
            .with_stroke_width(2.)
            .with_radius(5.)
            .with_center((20., 30.5))
            .with_stroke_color(Color::rgb(0, 0, 255));
        assert_eq!(
            render(&circle),
            r#"<circle cx="20" cy="30.5" r="5" fill="white" stroke="rgb(0,0,255)" stroke-width="2" />"#
        );
    }

    #[test]
    fn later_setter_wins() {
        let circle = Circle::new().with_radius(2.).with_radius(3.);
        assert_eq!(circle.radius(), 3.);
    }

    #[test]
    fn line_cap_and_join() {
        let circle = Circle::new()
            .with_stroke_line_join("round")
            .with_stroke_line_cap("square");
        assert_eq!(
            render(&circle),
            r#"<circle cx="0" cy="0" r="1" fill="none" stroke="none" stroke-width="1" stroke-linecap="square" stroke-linejoin="round" />"#
        );
    }

    #[test]
    fn negative_values_are_written_verbatim() {
        let circle = Circle::new().with_radius(-1.5).with_stroke_width(-2.);
        assert_eq!(
            render(&circle),
            r#"<circle cx="0" cy="0" r="-1.5" fill="none" stroke="none" stroke-width="-2" />"#
        );
    }

    #[test]
    fn from_kurbo() {
        let circle = Circle::from(kurbo::Circle::new((1., 2.), 3.));
        assert_eq!(circle.center(), Point::new(1., 2.));
        assert_eq!(circle.radius(), 3.);
        assert_eq!(circle.style(), &Style::default());
    }
}
