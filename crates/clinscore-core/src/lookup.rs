//! Threshold tables that map a measurement to points.
//!
//! Rows are `(threshold, points)` scanned in order; the first matching row
//! wins and `otherwise` covers values past the last row.

/// Ascending rows, `value < threshold`.
pub fn below(rows: &[(f64, i64)], value: f64, otherwise: i64) -> i64 {
    rows.iter()
        .find(|(threshold, _)| value < *threshold)
        .map_or(otherwise, |(_, points)| *points)
}

/// Ascending rows, `value <= threshold`.
pub fn up_to(rows: &[(f64, i64)], value: f64, otherwise: i64) -> i64 {
    rows.iter()
        .find(|(threshold, _)| value <= *threshold)
        .map_or(otherwise, |(_, points)| *points)
}

/// Descending rows, `value >= threshold`.
pub fn at_least(rows: &[(f64, i64)], value: f64, otherwise: i64) -> i64 {
    rows.iter()
        .find(|(threshold, _)| value >= *threshold)
        .map_or(otherwise, |(_, points)| *points)
}
