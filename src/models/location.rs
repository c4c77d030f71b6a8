//! Location type.

use serde::{Deserialize, Serialize};

/// A named point to be visited by a tour.
///
/// Locations are identified by their position in the input list; the name is
/// only carried through to the final visiting order.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
///
/// let a = Location::new("a", 0.0, 0.0);
/// let b = Location::new("b", 3.0, 4.0);
/// assert_eq!(a.name(), "a");
/// assert!((a.euclidean_to(&b) - 5.0).abs() < 1e-10);
/// assert!((a.manhattan_to(&b) - 7.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a new location.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Location name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns a copy with both coordinates multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.name.clone(), self.x * factor, self.y * factor)
    }

    /// Straight-line distance to another location.
    pub fn euclidean_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// City-block distance to another location.
    pub fn manhattan_to(&self, other: &Location) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}
