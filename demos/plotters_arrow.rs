extern crate plotters;
use plotters::prelude::*;

extern crate fletch;
use fletch::{Arrow, Point, Size};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let arrow = Arrow::new(
        Size::new(400.0, 200.0),
        Point::new(40.0, 160.0),
        Point::new(360.0, 40.0),
        0.5,
        10.0,
        true,
    );
    let (cp1, cp2) = arrow.control_points();
    let curve = arrow.curve();

    // the control polygon start -> cp1 -> cp2 -> end
    let polygon = vec![
        (arrow.start.x, arrow.start.y),
        (cp1.x, cp1.y),
        (cp2.x, cp2.y),
        (arrow.end.x, arrow.end.y),
    ];

    // render the path of the curve to desired accuracy
    let nsteps: usize = 1000;
    let mut arrow_graph: Vec<(f64, f64)> = Vec::with_capacity(nsteps);
    for t in 0..nsteps {
        let t = t as f64 * 1f64 / (nsteps as f64);
        let p = curve.eval_casteljau(t);
        arrow_graph.push((p.x, p.y));
    }

    let root = BitMapBackend::new("curved_arrow.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    // setup the chart over the arrow's drawing surface, y flipped to
    // match the svg coordinate system (origin top left)
    let mut chart = ChartBuilder::on(&root)
        .caption("Curved Arrow", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0.0..arrow.size.x, arrow.size.y..0.0)?;

    chart.configure_mesh().draw()?;

    // draw the control points and endpoints
    chart
        .draw_series(PointSeries::of_element(
            polygon.clone(),
            5,
            &BLUE,
            &|coord, size, style| {
                EmptyElement::at(coord)
                    + Circle::new((0, 0), size, style)
                    + Text::new(
                        format!("{:?}", coord),
                        (0, 15),
                        ("sans-serif", 15).into_font(),
                    )
            },
        ))?
        .label("Control Points")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // draw the actual arrow curve
    chart
        .draw_series(LineSeries::new(arrow_graph, &RED))?
        .label("Arrow")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    // draw the handles start -> cp1 and end -> cp2
    chart.draw_series(LineSeries::new(
        vec![polygon[0], polygon[1]],
        &BLUE.mix(0.5),
    ))?;
    chart.draw_series(LineSeries::new(
        vec![polygon[3], polygon[2]],
        &BLUE.mix(0.5),
    ))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
