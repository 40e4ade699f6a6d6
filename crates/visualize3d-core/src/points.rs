//! Conversions from loosely shaped numeric data into point arrays.

use glam::Vec3;

use crate::error::{Result, VizError};

/// Interprets a flat buffer as consecutive `x, y, z` triples.
///
/// Fails with [`VizError::SizeMismatch`] if the length is not a multiple of 3.
pub fn points_from_flat(values: &[f32]) -> Result<Vec<Vec3>> {
    if values.len() % 3 != 0 {
        return Err(VizError::SizeMismatch {
            expected: values.len() / 3 * 3 + 3,
            actual: values.len(),
        });
    }
    Ok(values
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect())
}

/// Interprets each row as one point. Every row must have exactly 3 entries.
pub fn points_from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Vec<Vec3>> {
    rows.iter()
        .map(|row| match *row.as_ref() {
            [x, y, z] => Ok(Vec3::new(x, y, z)),
            ref other => Err(VizError::SizeMismatch {
                expected: 3,
                actual: other.len(),
            }),
        })
        .collect()
}

/// Returns the centroid of `points`, or `None` if empty.
#[must_use]
pub fn centroid(points: &[Vec3]) -> Option<Vec3> {
    if points.is_empty() {
        return None;
    }
    let sum: Vec3 = points.iter().copied().sum();
    Some(sum / points.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_flat() {
        let pts = points_from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(pts, vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);
    }

    #[test]
    fn test_flat_bad_width() {
        let err = points_from_flat(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert!(matches!(err, VizError::SizeMismatch { actual: 4, .. }));
    }

    #[test]
    fn test_rows_bad_width() {
        let rows = vec![vec![0.0, 0.0, 0.0], vec![1.0, 1.0]];
        let err = points_from_rows(&rows).unwrap_err();
        assert!(matches!(
            err,
            VizError::SizeMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_rows_arrays() {
        let rows = [[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]];
        assert_eq!(points_from_rows(&rows).unwrap()[1], Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_centroid() {
        assert_eq!(centroid(&[]), None);
        let c = centroid(&[Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0)]).unwrap();
        assert_eq!(c, Vec3::new(1.0, 2.0, 3.0));
    }

    proptest! {
        #[test]
        fn prop_flat_len(n in 0usize..200) {
            let values = vec![0.5f32; n * 3];
            prop_assert_eq!(points_from_flat(&values).unwrap().len(), n);
        }
    }
}
