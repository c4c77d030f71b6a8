//! Loading location files.
//!
//! A location file is a CSV with a `name,x,y` header. Coordinates are scaled
//! up by a power of ten until their spread has a target number of
//! whole-number digits. Metrics round distances to integers, and small
//! coordinate ranges would otherwise collapse into ties.

use std::path::Path;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::models::Location;

/// Default number of whole-number digits to scale coordinates to.
pub const DEFAULT_TARGET_DIGITS: u32 = 3;

/// Reads, scales and returns the locations in `path`, plus the scale applied.
///
/// Divide tour lengths by the returned scale to get back to the file's units.
pub fn etl<P: AsRef<Path>>(path: P, target_digits: u32) -> Result<(Vec<Location>, f64)> {
    let raw = extract(path)?;
    transform(raw, target_digits)
}

/// Reads location records from a CSV file.
pub fn extract<P: AsRef<Path>>(path: P) -> Result<Vec<Location>> {
    let path = path.as_ref();
    let reader = csv::Reader::from_path(path)?;
    let locations = read_locations(reader)?;
    debug!("read {} locations from {}", locations.len(), path.display());
    Ok(locations)
}

/// Reads location records from any CSV source with a `name,x,y` header.
pub fn read_locations<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<Location>> {
    let mut locations = Vec::new();
    for record in reader.deserialize() {
        let location: Location = record?;
        if !location.x().is_finite() || !location.y().is_finite() {
            return Err(Error::invalid_data(format!(
                "location '{}' has non-finite coordinates",
                location.name()
            )));
        }
        locations.push(location);
    }
    Ok(locations)
}

/// Scales coordinates so their spread has `target_digits` whole-number
/// digits.
///
/// Only ever scales up: data that already has enough digits gets a scale of
/// `1.0`. Fails on empty input or when either coordinate has no spread.
pub fn transform(locations: Vec<Location>, target_digits: u32) -> Result<(Vec<Location>, f64)> {
    if locations.is_empty() {
        return Err(Error::invalid_data("no locations to scale"));
    }

    let xs: Vec<f64> = locations.iter().map(Location::x).collect();
    let ys: Vec<f64> = locations.iter().map(Location::y).collect();
    let min_digits = whole_number_digits(&xs)
        .ok_or_else(|| Error::invalid_data("x coordinates have no spread"))?
        .min(
            whole_number_digits(&ys)
                .ok_or_else(|| Error::invalid_data("y coordinates have no spread"))?,
        );

    let log10_scale = (i64::from(target_digits) - min_digits).max(0);
    let exponent = i32::try_from(log10_scale)
        .map_err(|_| Error::invalid_input(format!("target digits {target_digits} too large")))?;
    let scale = 10f64.powi(exponent);
    info!("scaling coordinates by {scale} ({min_digits} whole-number digits, target {target_digits})");

    let scaled = locations.iter().map(|loc| loc.scaled(scale)).collect();
    Ok((scaled, scale))
}

/// Number of whole-number digits of the population standard deviation,
/// computed as `trunc(log10(stddev)) + 1`.
///
/// Spreads strictly between 0.1 and 10 give one digit; smaller spreads give zero or a
/// negative count, which scales the data up further. Returns `None` for
/// empty input or zero spread, where the digit count is undefined.
pub fn whole_number_digits(values: &[f64]) -> Option<i64> {
    let stddev = population_stddev(values)?;
    if stddev <= 0.0 || !stddev.is_finite() {
        return None;
    }
    // Truncation toward zero: 0.5 -> log10 -0.3 -> 0 -> one digit.
    Some(stddev.log10() as i64 + 1)
}

fn population_stddev(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some(variance.sqrt())
}
