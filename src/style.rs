use std::fmt;

/// A fill or stroke color.
///
/// Renders (through [`fmt::Display`]) as the bare attribute value: `none`, the name verbatim,
/// `rgb(r,g,b)` or `rgba(r,g,b,a)`. Channel values are not clamped.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Color {
    /// No paint at all.
    #[default]
    None,
    /// A keyword like `red`, or any other value the consumer understands (e.g. `url(#grad)`).
    Named(String),
    Rgb(Rgb),
    Rgba(Rgba),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub alpha: f64,
}

impl Color {
    pub const NONE: Color = Color::None;

    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }

    pub fn rgb(red: u32, green: u32, blue: u32) -> Self {
        Color::Rgb(Rgb { red, green, blue })
    }

    pub fn rgba(red: u32, green: u32, blue: u32, alpha: f64) -> Self {
        Color::Rgba(Rgba {
            red,
            green,
            blue,
            alpha,
        })
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Color::None)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Named(name) => f.write_str(name),
            Color::Rgb(Rgb { red, green, blue }) => write!(f, "rgb({},{},{})", red, green, blue),
            Color::Rgba(Rgba {
                red,
                green,
                blue,
                alpha,
            }) => write!(f, "rgba({},{},{},{})", red, green, blue, alpha),
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_owned())
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Color::Named(name)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::Rgba(rgba)
    }
}

impl From<(u32, u32, u32)> for Color {
    fn from((red, green, blue): (u32, u32, u32)) -> Self {
        Color::rgb(red, green, blue)
    }
}

impl From<(u32, u32, u32, f64)> for Color {
    fn from((red, green, blue, alpha): (u32, u32, u32, f64)) -> Self {
        Color::rgba(red, green, blue, alpha)
    }
}
