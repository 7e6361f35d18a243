use crate::{
    error::{Error, Result},
    shapes::Shape,
};
use std::{
    fmt, fs,
    io::{self, Write},
    path::Path,
    slice,
};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;
const SVG_CLOSE: &str = "</svg>";

/// An ordered collection of shapes making up one SVG file.
///
/// Shapes are painted in the order they were added, so later shapes cover earlier ones. Rendering
/// only reads the document, and the same document always renders to the same bytes.
#[derive(Debug, Clone, Default)]
pub struct Document {
    shapes: Vec<Box<dyn Shape>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `shape` and append it on top of everything added so far.
    pub fn add(&mut self, shape: impl Shape + 'static) {
        self.shapes.push(Box::new(shape));
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The shapes in painting order.
    pub fn iter(&self) -> slice::Iter<'_, Box<dyn Shape>> {
        self.shapes.iter()
    }

    /// Write the whole document: declaration, root element, every shape, closing tag.
    pub fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        log::debug!("rendering svg document with {} shapes", self.shapes.len());
        out.write_str(XML_DECLARATION)?;
        out.write_str(SVG_OPEN)?;
        for (idx, shape) in self.shapes.iter().enumerate() {
            log::trace!("rendering shape {} ({})", idx, shape.element_name());
            shape.render(out)?;
        }
        out.write_str(SVG_CLOSE)
    }

    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }

    pub fn to_svg(&self, mut writer: impl io::Write) -> io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }

    pub fn to_svg_file(&self, filename: impl AsRef<Path>) -> Result<()> {
        let path = filename.as_ref();
        log::debug!("writing svg document to {}", path.display());
        let write = || -> io::Result<()> {
            let file = io::BufWriter::new(fs::File::create(path)?);
            self.to_svg(file)
        };
        write().map_err(|source| Error::WriteFile {
            path: path.to_owned(),
            source,
        })
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render(f)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Box<dyn Shape>;
    type IntoIter = slice::Iter<'a, Box<dyn Shape>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Polyline, Text};

    #[test]
    fn empty_document() {
        assert_eq!(
            Document::new().to_svg_string(),
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#,
                "</svg>"
            )
        );
    }

    #[test]
    fn shapes_render_in_insertion_order() {
        let mut doc = Document::new();
        doc.add(Text::new().with_data("A"));
        doc.add(Circle::new().with_radius(2.));
        doc.add(Polyline::new().add_point((1., 1.)));
        assert_eq!(doc.len(), 3);

        let svg = doc.to_svg_string();
        let a = svg.find("<text").unwrap();
        let b = svg.find("<circle").unwrap();
        let c = svg.find("<polyline").unwrap();
        assert!(a < b && b < c);
        assert!(svg.ends_with("/></svg>"));

        let names: Vec<_> = doc.iter().map(|shape| shape.element_name()).collect();
        assert_eq!(names, ["text", "circle", "polyline"]);
    }

    #[test]
    fn render_is_idempotent() {
        let mut doc = Document::new();
        doc.add(Circle::new().with_fill_color("red"));
        assert_eq!(doc.to_svg_string(), doc.to_svg_string());
    }

    #[test]
    fn added_shape_is_a_copy() {
        let circle = Circle::new().with_radius(4.);
        let mut doc = Document::new();
        doc.add(circle.clone());
        doc.add(circle.with_radius(8.));
        let svg = doc.to_svg_string();
        assert!(svg.contains(r#"r="4""#));
        assert!(svg.contains(r#"r="8""#));
    }

    #[test]
    fn cloned_document_is_independent() {
        let mut doc = Document::new();
        doc.add(Circle::new());
        let snapshot = doc.clone();
        doc.add(Circle::new());
        assert_eq!(snapshot.len(), 1);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn to_svg_matches_display() {
        let mut doc = Document::new();
        doc.add(Polyline::new());
        let mut buf = Vec::new();
        doc.to_svg(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), doc.to_string());
    }
}
