//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, +180] degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Index of the equal segment of width `span` that contains `deg`, reduced
/// modulo `count`.
pub(crate) fn segment_index(deg: f64, span: f64, count: u8) -> u8 {
    let raw = (normalize_360(deg) / span).floor() as u32;
    (raw % count as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_positive() {
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert_eq!(normalize_360(360.0), 0.0);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn pm180_basic() {
        assert!((normalize_to_pm180(190.0) - (-170.0)).abs() < 1e-12);
        assert!((normalize_to_pm180(-190.0) - 170.0).abs() < 1e-12);
        assert_eq!(normalize_to_pm180(180.0), 180.0);
        assert_eq!(normalize_to_pm180(-180.0), 180.0);
    }

    #[test]
    fn segment_index_wraps_count() {
        assert_eq!(segment_index(359.999, 12.0, 30), 29);
        assert_eq!(segment_index(360.0, 12.0, 30), 0);
        assert_eq!(segment_index(-0.5, 30.0, 12), 11);
    }
}
