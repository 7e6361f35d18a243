//! Build a scene out of circles, polylines and text, then write it out as an SVG document.
//!
//! ```
//! use svgdoc::{Circle, Document, Shape};
//!
//! let mut doc = Document::new();
//! doc.add(Circle::new().with_center((50., 50.)).with_radius(10.).with_fill_color("red"));
//! assert!(doc.to_svg_string().contains(r#"<circle cx="50" cy="50" r="10" fill="red""#));
//! ```
mod document;
mod error;
pub mod shapes;
pub mod style;

pub use document::Document;
pub use error::{Error, Result};
pub use shapes::{Circle, LineCap, LineJoin, Point, Polyline, Shape, Style, Text};
pub use style::{Color, Rgb, Rgba};
