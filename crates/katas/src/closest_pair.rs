//! Closest pair of points in the plane, divide and conquer in O(n log n).

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Find the two closest points, or `None` for fewer than two points.
pub fn closest_pair(points: &[Point]) -> Option<(Point, Point)> {
    if points.len() < 2 {
        return None;
    }
    let mut by_x = points.to_vec();
    by_x.sort_by(|a, b| a.x.total_cmp(&b.x));
    let mut by_y = points.to_vec();
    by_y.sort_by(|a, b| a.y.total_cmp(&b.y));
    Some(closest_recursive(&by_x, &by_y))
}

fn closest_recursive(px: &[Point], py: &[Point]) -> (Point, Point) {
    let n = px.len();
    if n <= 3 {
        return brute_force(px);
    }

    let mid = n / 2;
    let mid_point = px[mid];
    let (left_px, right_px) = px.split_at(mid);

    // Split the y-sorted list around the dividing line, keeping its order
    let mut left_py = Vec::new();
    let mut right_py = Vec::new();
    for &p in py {
        if p.x <= mid_point.x {
            left_py.push(p);
        } else {
            right_py.push(p);
        }
    }

    let left_closest = closest_recursive(left_px, &left_py);
    let right_closest = closest_recursive(right_px, &right_py);

    let left_dist = distance(left_closest.0, left_closest.1);
    let right_dist = distance(right_closest.0, right_closest.1);
    let mut delta = left_dist.min(right_dist);
    let mut best = if left_dist <= right_dist { left_closest } else { right_closest };

    // Only points within delta of the dividing line can beat the halves
    let strip: Vec<Point> = py
        .iter()
        .copied()
        .filter(|p| (p.x - mid_point.x).abs() < delta)
        .collect();

    for i in 0..strip.len() {
        for j in i + 1..strip.len() {
            if strip[j].y - strip[i].y >= delta {
                break;
            }
            let d = distance(strip[i], strip[j]);
            if d < delta {
                delta = d;
                best = (strip[i], strip[j]);
            }
        }
    }
    best
}

fn brute_force(points: &[Point]) -> (Point, Point) {
    let mut min_dist = f64::MAX;
    let mut best = (points[0], points[1]);
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            let d = distance(points[i], points[j]);
            if d < min_dist {
                min_dist = d;
                best = (points[i], points[j]);
            }
        }
    }
    best
}
