//! Print the hulls of a few reference shapes.
//!
//! Usage:
//!   cargo run -p octohull --example shapes
//!   cargo run -p octohull --example shapes -- debug   # also log intermediate paths

use octohull::{convex_hull, Point};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn fmt_path(path: &[Point]) -> String {
    let parts: Vec<String> = path.iter().map(|p| format!("({}, {})", p.x, p.y)).collect();
    format!("[{}]", parts.join(", "))
}

fn main() {
    if std::env::args().nth(1).as_deref() == Some("debug") {
        SubscriberBuilder::default()
            .with_target(false)
            .with_max_level(Level::DEBUG)
            .init();
    }
    let shapes: [(&str, Vec<Point>); 5] = [
        ("triangle", pts(&[(1, 1), (3, 3), (2, 2)])),
        ("square", pts(&[(0, 0), (1, 0), (1, 1), (0, 1)])),
        (
            "octagon",
            pts(&[(0, 1), (1, 0), (2, 0), (3, 1), (3, 2), (2, 3), (1, 3), (0, 2)]),
        ),
        (
            "cross",
            pts(&[
                (0, 1),
                (1, 1),
                (1, 0),
                (2, 0),
                (2, 1),
                (3, 1),
                (3, 2),
                (2, 2),
                (2, 3),
                (1, 3),
                (1, 2),
                (0, 2),
            ]),
        ),
        (
            "random",
            pts(&[(0, 3), (2, 2), (1, 1), (2, 1), (3, 0), (0, 0), (3, 3)]),
        ),
    ];
    for (name, points) in shapes {
        match convex_hull(&points) {
            Ok(hull) => println!("{name:<8}: {}", fmt_path(&hull)),
            Err(e) => eprintln!("{name:<8}: {e}"),
        }
    }
}
