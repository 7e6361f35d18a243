use anyhow::{Context, Result};
use std::{env, io};
use svgdoc::{Circle, Color, Document, LineCap, LineJoin, Point, Polyline, Shape, Text};

/// A bus route with two stops and their labels.
fn demo() -> Document {
    let route = [
        Point::new(50., 50.),
        Point::new(250., 250.),
        Point::new(450., 80.),
    ];
    let mut doc = Document::new();

    doc.add(
        route
            .iter()
            .copied()
            .collect::<Polyline>()
            .with_stroke_color(Color::rgb(140, 198, 63))
            .with_stroke_width(16.)
            .with_stroke_line_cap(LineCap::Round)
            .with_stroke_line_join(LineJoin::Round),
    );

    for (stop, name) in [(route[0], "Start"), (route[2], "Finish")] {
        doc.add(Circle::new().with_center(stop).with_radius(6.).with_fill_color("white"));
        let label = Text::new()
            .with_point(stop)
            .with_offset((7., 15.))
            .with_font_size(20)
            .with_font_family("Verdana")
            .with_font_weight("bold")
            .with_data(name);
        // light halo underneath the text itself
        doc.add(
            label
                .clone()
                .with_fill_color(Color::rgba(255, 255, 255, 0.85))
                .with_stroke_color(Color::rgba(255, 255, 255, 0.85))
                .with_stroke_width(3.)
                .with_stroke_line_cap(LineCap::Round)
                .with_stroke_line_join(LineJoin::Round),
        );
        doc.add(label.with_fill_color("black"));
    }

    doc
}

fn main() -> Result<()> {
    let doc = demo();
    match env::args_os().nth(1) {
        Some(path) => doc
            .to_svg_file(&path)
            .with_context(|| format!("writing demo to {:?}", path))?,
        None => doc
            .to_svg(io::stdout().lock())
            .context("writing demo to stdout")?,
    }
    Ok(())
}
