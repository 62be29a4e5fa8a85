use concaveman::geometry::Rect;
use concaveman::rtree::RTree;
use concaveman::Point;

fn main() {
    let mut tree: RTree<Point> = RTree::new(9).unwrap();

    // Insert some points
    tree.insert(Point::new(10.0, 20.0));
    tree.insert(Point::new(80.0, 30.0));
    tree.insert(Point::new(45.0, 70.0));
    tree.insert(Point::new(12.0, 22.0));

    // Query the tree for points in a box around (10, 20)
    let query = Rect {
        min_x: 5.0,
        min_y: 15.0,
        max_x: 15.0,
        max_y: 25.0,
    };
    let results = tree.range_search(&query);
    println!("points in {:?}: {:?}", query, results);

    // Bulk-load a grid of points on top of the existing tree
    let grid: Vec<Point> = (0..10)
        .flat_map(|i| (0..10).map(move |j| Point::new(i as f64 * 10.0, j as f64 * 10.0)))
        .collect();
    tree.load(grid);
    println!("tree now holds {} points", tree.len());

    // Remove one of the original points again
    let removed = tree.remove(&Point::new(80.0, 30.0));
    println!("removed (80, 30): {}", removed);
    println!("tree now holds {} points", tree.len());

    // Callback-driven search can stop early
    let mut first_match = None;
    tree.search(&query, |p| {
        first_match = Some(*p);
        false
    });
    println!("first match in {:?}: {:?}", query, first_match);
}
