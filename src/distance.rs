//! The distance metric used to compare colors.

/// The largest value [`squared_euclidean_distance`] can return.
pub const MAX_DISTANCE: u32 = 3 * 255 * 255;

/// Squared euclidean distance between two colors.
///
/// The square root is skipped since only the ordering of distances matters for nearest color lookups.
#[must_use]
#[inline]
pub fn squared_euclidean_distance(x: [u8; 3], y: [u8; 3]) -> u32 {
    let mut dist = 0;
    for c in 0..3 {
        let d = u32::from(x[c].abs_diff(y[c]));
        dist += d * d;
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_distances() {
        assert_eq!(squared_euclidean_distance([10, 10, 10], [0, 0, 0]), 300);
        assert_eq!(squared_euclidean_distance([10, 10, 10], [255, 255, 255]), 180075);
        assert_eq!(squared_euclidean_distance([0, 1, 1], [1, 1, 1]), 1);
        assert_eq!(squared_euclidean_distance([0, 0, 0], [255, 255, 255]), MAX_DISTANCE);
    }

    #[test]
    fn symmetric_and_zero_on_equal() {
        let colors = [[0, 0, 0], [1, 2, 3], [255, 0, 128], [17, 200, 99]];
        for &x in &colors {
            assert_eq!(squared_euclidean_distance(x, x), 0);
            for &y in &colors {
                assert_eq!(squared_euclidean_distance(x, y), squared_euclidean_distance(y, x));
            }
        }
    }
}
