extern crate fletch;
use fletch::{Arrow, Point, Size};

/// Renders a sample arrow with visible control point handles and writes
/// the markup to arrow.svg in the current directory.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let arrow = Arrow::new(
        Size::new(400.0, 200.0),
        Point::new(40.0, 160.0),
        Point::new(360.0, 40.0),
        0.5,
        10.0,
        true,
    );

    let markup = arrow.to_svg();
    std::fs::write("arrow.svg", &markup)?;
    println!("wrote arrow.svg ({} bytes)", markup.len());

    Ok(())
}
