use concaveman::{concaveman, convex_hull, Options, Point};

fn sample_cloud() -> Vec<Point> {
    // a deterministic blob with a bite taken out of the right side
    let mut points = Vec::new();
    for i in 0..40 {
        for j in 0..40 {
            let x = i as f64 * 2.5;
            let y = j as f64 * 2.5;
            let in_notch = x > 60.0 && (y - 50.0).abs() < 0.6 * (x - 60.0);
            if !in_notch {
                points.push(Point::new(x, y));
            }
        }
    }
    points
}

fn main() {
    let points = sample_cloud();
    println!("input: {} points", points.len());

    let convex = convex_hull(&points);
    println!("convex hull: {} vertices", convex.len());

    // The default settings follow the shape fairly closely
    let hull = concaveman(&points, Options::default());
    println!("concave hull (default): {} vertices", hull.len() - 1);

    // A lower concavity hugs the point set tighter
    let tight = concaveman(
        &points,
        Options {
            concavity: 1.0,
            length_threshold: 0.0,
        },
    );
    println!("concave hull (concavity = 1): {} vertices", tight.len() - 1);

    println!("\ndefault hull ring:");
    for p in &hull {
        println!("  ({:.1}, {:.1})", p.x, p.y);
    }
}
