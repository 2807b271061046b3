//! Walk the point toolkit over a small fixed scene.
//!
//! Usage:
//!   cargo run -p planimetry --example line_toolkit
//!
//! Prints distances, angles, a line equation, a reflection and an
//! intersection, including how the degenerate cases report themselves.

use planimetry::prelude::*;

fn main() {
    let o = Coordinate::new(0.0, 0.0);
    let a = Coordinate::new(4.0, 0.0);
    let b = Coordinate::new(0.0, 3.0);

    println!("o = {o}, a = {a}, b = {b}");
    println!("|oa| = {}", o.distance(a));
    println!("midpoint(oa) = {}", o.midpoint(a));
    println!("angle(ob, +x) = {} deg", o.angle_with_positive_x(b));
    println!("triangle area(o,a,b) = {}", o.triangle_area(a, b));

    match o.line_equation(Coordinate::new(1.0, 1.0)) {
        Ok(eq) => println!("diagonal: {eq}"),
        Err(e) => println!("diagonal: {e}"),
    }

    match Coordinate::new(3.0, 0.0).reflect(o, Coordinate::new(2.0, 2.0)) {
        Ok(p) => println!("(3.0,0.0) across y=x -> {p}"),
        Err(e) => println!("reflection failed: {e}"),
    }

    match line_intersection(
        o,
        Coordinate::new(2.0, 2.0),
        Coordinate::new(0.0, 2.0),
        Coordinate::new(2.0, 0.0),
    ) {
        Ok(p) => println!("y=x meets y=-x+2 at {p}"),
        Err(e) => println!("no crossing: {e}"),
    }

    // Vertical reference lines are rejected rather than folded into IEEE inf.
    match o.line_equation(Coordinate::new(0.0, 5.0)) {
        Ok(eq) => println!("vertical: {eq}"),
        Err(e) => println!("vertical: {e}"),
    }
}
