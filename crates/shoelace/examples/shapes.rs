//! Build each shape and print its area.
//!
//! Usage:
//!   cargo run -p shoelace --example shapes

use shoelace::prelude::*;

fn points(raw: &[[f64; 2]]) -> Result<Vec<Point>, GeomError> {
    raw.iter().map(|c| Point::new(c)).collect()
}

fn main() -> Result<(), GeomError> {
    let triangle = Triangle::new(points(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]])?)?;
    println!("triangle area: {}", triangle.area());

    let square = Square::new(points(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])?)?;
    println!("square area:   {}", square.area());

    let ngon = CcwNgon::new(points(&[
        [0.0, 0.0],
        [0.5, 0.25],
        [1.0, 0.0],
        [0.75, 0.5],
        [1.0, 1.0],
        [0.5, 0.75],
        [0.0, 1.0],
        [0.25, 5.0],
    ])?)?;
    println!("ngon area:     {}", ngon.area());

    let rectangle = Square::new(points(&[[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [0.0, 1.0]])?)?;
    println!("rect area:     {}", rectangle.area());

    match Triangle::new(square.into_vertices()) {
        Ok(_) => println!("unexpected: four-point triangle accepted"),
        Err(e) => println!("rejected: {e}"),
    }
    match Point::new(&[0.0, 1.0, 2.0]) {
        Ok(_) => println!("unexpected: 3D point accepted"),
        Err(e) => println!("rejected: {e}"),
    }
    Ok(())
}
