//! Distance metrics between locations.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::models::Location;

/// How the distance between two locations is measured.
///
/// Both metrics produce whole numbers: Euclidean distances are rounded to the
/// nearest integer (ties to even), Manhattan distances are truncated.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::distance::Metric;
///
/// let a = Location::new("a", 0.0, 0.0);
/// let b = Location::new("b", 500.0, 1000.0);
/// assert_eq!(Metric::Euclidean.distance(&a, &b), 1118.0);
/// assert_eq!(Metric::Manhattan.distance(&a, &b), 1500.0);
/// assert_eq!("manhattan".parse::<Metric>().unwrap(), Metric::Manhattan);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// City-block distance.
    Manhattan,
}

impl Metric {
    /// Distance between two locations under this metric.
    pub fn distance(self, a: &Location, b: &Location) -> f64 {
        match self {
            Metric::Euclidean => a.euclidean_to(b).round_ties_even(),
            Metric::Manhattan => a.manhattan_to(b).trunc(),
        }
    }

    /// Lowercase metric name.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Manhattan => "manhattan",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" => Ok(Metric::Euclidean),
            "manhattan" => Ok(Metric::Manhattan),
            other => Err(Error::invalid_input(format!(
                "unknown distance metric '{other}' (expected euclidean or manhattan)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_rounds_half_to_even() {
        let origin = Location::new("o", 0.0, 0.0);
        assert_eq!(
            Metric::Euclidean.distance(&origin, &Location::new("p", 2.5, 0.0)),
            2.0
        );
        assert_eq!(
            Metric::Euclidean.distance(&origin, &Location::new("q", 3.5, 0.0)),
            4.0
        );
        assert_eq!(
            Metric::Euclidean.distance(&origin, &Location::new("r", 1000.0, 2000.0)),
            2236.0
        );
    }

    #[test]
    fn test_manhattan_truncates() {
        let a = Location::new("a", 0.0, 0.0);
        let b = Location::new("b", 1.4, 1.5);
        assert_eq!(Metric::Manhattan.distance(&a, &b), 2.0);
    }

    #[test]
    fn test_parse_and_display() {
        for metric in [Metric::Euclidean, Metric::Manhattan] {
            assert_eq!(metric.to_string().parse::<Metric>().unwrap(), metric);
        }
        assert_eq!("Euclidean".parse::<Metric>().unwrap(), Metric::Euclidean);
        assert!("chebyshev".parse::<Metric>().is_err());
        assert_eq!(Metric::default(), Metric::Euclidean);
    }
}
