/// Asserts that every agent's position lies within `[0, width) x [0, height)`.
#[macro_export]
macro_rules! assert_in_bounds {
    ($position:expr, $width:expr, $height:expr) => {
        let p = $position;
        assert!(
            p.x >= 0.0 && p.x < $width as f64 && p.y >= 0.0 && p.y < $height as f64,
            "Position ({}, {}) escaped the {}x{} world",
            p.x,
            p.y,
            $width,
            $height
        );
    };
}

/// Asserts two floats are equal within an absolute tolerance.
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left, $right);
        assert!((l - r).abs() < $tol, "{} is not within {} of {}", l, $tol, r);
    };
}
