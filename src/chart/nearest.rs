/// Index of the position closest to `x`.
///
/// Scans left to right and keeps the first minimum, so equidistant
/// neighbours resolve to the lower index. Returns `None` only for an empty
/// slice; any finite `x` (including far outside the axis) resolves to some
/// index. A non-finite `x` resolves to the first position.
pub fn nearest_index(positions: &[f32], x: f32) -> Option<usize> {
    if !x.is_finite() {
        return (!positions.is_empty()).then_some(0);
    }
    let mut best: Option<(usize, f32)> = None;
    for (i, &px) in positions.iter().enumerate() {
        let dist = (px - x).abs();
        match best {
            Some((_, d)) if dist >= d => {}
            _ => best = Some((i, dist)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_hit_returns_that_index() {
        let xs = [48.0, 72.0, 96.0, 120.0];
        for (i, &x) in xs.iter().enumerate() {
            assert_eq!(nearest_index(&xs, x), Some(i));
        }
    }

    #[test]
    fn tie_goes_to_first() {
        let xs = [0.0, 10.0, 20.0];
        assert_eq!(nearest_index(&xs, 5.0), Some(0));
        assert_eq!(nearest_index(&xs, 15.0), Some(1));
    }

    #[test]
    fn unset_pointer_resolves_to_leftmost() {
        let xs = [48.0, 72.0, 96.0];
        assert_eq!(nearest_index(&xs, 0.0), Some(0));
    }

    #[test]
    fn out_of_range_is_clamped() {
        let xs = [48.0, 72.0, 96.0];
        assert_eq!(nearest_index(&xs, -1_000.0), Some(0));
        assert_eq!(nearest_index(&xs, 1_000.0), Some(2));
        assert_eq!(nearest_index(&[], 10.0), None);
    }

    #[test]
    fn nan_pointer_does_not_poison_the_scan() {
        let xs = [48.0, 72.0, 96.0];
        assert_eq!(nearest_index(&xs, f32::NAN), Some(0));
    }
}
