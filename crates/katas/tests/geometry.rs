use katas::{Point, closest_pair, spiralize};

fn pair_matches(result: (Point, Point), a: Point, b: Point) -> bool {
    (result.0 == a && result.1 == b) || (result.0 == b && result.1 == a)
}

#[test]
fn closest_pair_known_fixture() {
    let points = [
        Point::new(2.0, 2.0),
        Point::new(2.0, 8.0),
        Point::new(5.0, 5.0),
        Point::new(6.0, 3.0),
        Point::new(6.0, 7.0),
        Point::new(7.0, 4.0),
        Point::new(7.0, 9.0),
    ];
    let result = closest_pair(&points).expect("two or more points");
    assert!(pair_matches(result, Point::new(6.0, 3.0), Point::new(7.0, 4.0)));
}

#[test]
fn closest_pair_trivial_inputs() {
    assert_eq!(closest_pair(&[]), None);
    assert_eq!(closest_pair(&[Point::new(1.0, 1.0)]), None);

    let two = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
    let result = closest_pair(&two).expect("two points");
    assert!(pair_matches(result, two[0], two[1]));
}

#[test]
fn closest_pair_finds_duplicates() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(9.0, 9.0),
        Point::new(4.0, 4.0),
        Point::new(4.0, 4.0),
        Point::new(1.0, 8.0),
    ];
    let (a, b) = closest_pair(&points).expect("two or more points");
    assert_eq!(a, b);
    assert_eq!(a, Point::new(4.0, 4.0));
}

#[test]
fn closest_pair_agrees_with_brute_force() {
    // deterministic scatter, coordinates from a small LCG
    let mut state = 42u64;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as f64 / 1000.0
    };
    let points: Vec<Point> = (0..200).map(|_| Point::new(next(), next())).collect();

    let (a, b) = closest_pair(&points).expect("two or more points");
    let fast = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();

    let mut brute = f64::MAX;
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            let d = ((points[i].x - points[j].x).powi(2)
                + (points[i].y - points[j].y).powi(2))
            .sqrt();
            brute = brute.min(d);
        }
    }
    assert_eq!(fast, brute);
}

fn rows(grid: &[Vec<u8>]) -> Vec<String> {
    grid.iter()
        .map(|row| row.iter().map(|&c| if c == 1 { '1' } else { '0' }).collect())
        .collect()
}

#[test]
fn spiralize_five() {
    assert_eq!(
        rows(&spiralize(5)),
        ["11111", "00001", "11101", "10001", "11111"]
    );
}

#[test]
fn spiralize_eight() {
    assert_eq!(
        rows(&spiralize(8)),
        [
            "11111111",
            "00000001",
            "11111101",
            "10000101",
            "10100101",
            "10111101",
            "10000001",
            "11111111",
        ]
    );
}

#[test]
fn spiralize_degenerate_sizes() {
    assert!(spiralize(0).is_empty());
    assert_eq!(rows(&spiralize(1)), ["1"]);
    assert_eq!(rows(&spiralize(2)), ["11", "01"]);
}
