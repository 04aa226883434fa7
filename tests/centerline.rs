use path_overlay::{
    fuse_and_project, synthesize_centerlines, Point, PolarLine, Segment,
};

fn seg(x0: i32, y0: i32, x1: i32, y1: i32) -> Segment {
    Segment::new(Point::new(x0, y0), Point::new(x1, y1))
}

#[test]
fn parallel_vertical_segments_interpolate_to_the_middle() {
    let segments = [seg(0, 0, 0, 100), seg(50, 0, 50, 100)];
    let centerlines = synthesize_centerlines(&segments);
    assert_eq!(centerlines, vec![seg(25, 0, 25, 100)]);
}

#[test]
fn detector_output_flows_through_the_whole_geometric_core() {
    // Two slightly noisy clusters around vertical lines at x=100 and x=300.
    let raw = [
        PolarLine { rho: 100.0, theta: 0.0 },
        PolarLine { rho: 103.0, theta: 0.015 },
        PolarLine { rho: 98.0, theta: 0.005 },
        PolarLine { rho: 300.0, theta: 0.0 },
        PolarLine { rho: 304.0, theta: 0.01 },
    ];
    let segments = fuse_and_project(&raw);
    assert_eq!(segments.len(), 2, "expected two fused path segments");

    let centerlines = synthesize_centerlines(&segments);
    assert_eq!(centerlines.len(), 1);
    let mid_x = 0.5 * (centerlines[0].p0.x + centerlines[0].p1.x) as f32;
    assert!(
        (mid_x - 200.0).abs() <= 6.0,
        "centerline foot far from x=200: {mid_x}"
    );
}

#[test]
fn three_segments_drop_the_unpaired_tail() {
    let segments = [
        seg(0, 0, 0, 100),
        seg(40, 0, 40, 100),
        seg(500, 0, 500, 100),
    ];
    let centerlines = synthesize_centerlines(&segments);
    assert_eq!(centerlines, vec![seg(20, 0, 20, 100)]);
}

#[test]
fn crossing_segments_take_the_intersection_branch() {
    // An X shape: same-side endpoints far apart, cross endpoints close.
    let first = seg(0, 0, 100, 100);
    let second = seg(120, 0, 20, 100);
    let centerlines = synthesize_centerlines(&[first, second]);
    assert_eq!(centerlines.len(), 1);
    // Carriers y = x and y = 120 - x cross at (60, 60); the second endpoint
    // is the midpoint of the cross endpoints (0, 0) and (20, 100).
    assert_eq!(centerlines[0].p0, Point::new(60, 60));
    assert_eq!(centerlines[0].p1, Point::new(10, 50));
}
