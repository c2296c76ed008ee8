/// A step along the line with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The step length.
    pub x: f64,

    /// The objective value at `x`.
    pub objective: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, objective: f64) -> Self {
        Self { x, objective }
    }
}
