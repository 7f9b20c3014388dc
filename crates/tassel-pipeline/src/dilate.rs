//! Morphological dilation of a binary mask.
//!
//! Grows the subject outward one pixel layer per step using the
//! 8-connected neighbourhood, approximating the padding margin of a
//! physical patch. Each step reads the full output of the previous step,
//! so `n` steps give a true square-structuring-element dilation of
//! radius `n`.
//!
//! Border pixels (first/last row and column) are never set by the
//! neighbourhood rule. They keep whatever value the input had.

use crate::style::MAX_DILATION_STEPS;
use crate::types::Mask;

/// Dilate `mask` by `radius` pixels.
///
/// `radius` is clamped to [`MAX_DILATION_STEPS`]. A radius of zero
/// returns an exact copy of the input.
#[must_use = "returns the dilated mask"]
pub fn dilate(mask: &Mask, radius: u32) -> Mask {
    let steps = radius.min(MAX_DILATION_STEPS);
    let mut current = mask.clone();
    for _ in 0..steps {
        let next = dilate_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    log::debug!(
        "dilate: radius {radius} ({steps} steps), {} -> {} pixels",
        mask.count(),
        current.count()
    );
    current
}

/// One 8-connected dilation step over the interior of the mask.
fn dilate_once(mask: &Mask) -> Mask {
    let (w, h) = (mask.width(), mask.height());
    let mut out = mask.clone();
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            if mask.get(x, y) {
                continue;
            }
            let touched = mask.get(x - 1, y - 1)
                || mask.get(x, y - 1)
                || mask.get(x + 1, y - 1)
                || mask.get(x - 1, y)
                || mask.get(x + 1, y)
                || mask.get(x - 1, y + 1)
                || mask.get(x, y + 1)
                || mask.get(x + 1, y + 1);
            if touched {
                out.set(x, y, true);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(size: u32, cx: u32, cy: u32) -> Mask {
        Mask::from_fn(size, size, |x, y| x == cx && y == cy)
    }

    #[test]
    fn zero_radius_is_identity() {
        let mask = Mask::from_fn(12, 9, |x, y| (x * 7 + y * 3) % 5 == 0);
        assert_eq!(dilate(&mask, 0), mask);
    }

    #[test]
    fn single_step_grows_to_three_by_three() {
        let grown = dilate(&dot(9, 4, 4), 1);
        assert_eq!(grown.count(), 9);
        for y in 3..=5 {
            for x in 3..=5 {
                assert!(grown.get(x, y), "({x}, {y}) should be set");
            }
        }
    }

    #[test]
    fn radius_n_grows_square_of_side_two_n_plus_one() {
        let grown = dilate(&dot(21, 10, 10), 4);
        assert_eq!(grown.count(), 81);
        assert!(grown.get(6, 6));
        assert!(grown.get(14, 14));
        assert!(!grown.get(5, 10));
    }

    #[test]
    fn monotonic_across_radii() {
        let mask = Mask::from_fn(40, 40, |x, y| (x == 20 && y == 20) || (x == 5 && y == 33));
        let mut previous = dilate(&mask, 0);
        for r in 1..=25 {
            let current = dilate(&mask, r);
            assert!(previous.is_subset_of(&current), "radius {r} shrank the mask");
            previous = current;
        }
    }

    #[test]
    fn radius_above_cap_matches_cap() {
        let mask = dot(140, 70, 70);
        let capped = dilate(&mask, MAX_DILATION_STEPS);
        assert_eq!(dilate(&mask, MAX_DILATION_STEPS + 1), capped);
        assert_eq!(dilate(&mask, 1000), capped);
        assert_eq!(capped.count(), 121 * 121);
    }

    #[test]
    fn border_is_never_set_by_growth() {
        let grown = dilate(&dot(6, 2, 2), 10);
        for i in 0..6 {
            assert!(!grown.get(i, 0));
            assert!(!grown.get(i, 5));
            assert!(!grown.get(0, i));
            assert!(!grown.get(5, i));
        }
        assert_eq!(grown.count(), 16);
    }

    #[test]
    fn full_mask_is_unchanged() {
        let full = Mask::from_fn(10, 10, |_, _| true);
        for r in [0, 1, 5, 60, 200] {
            assert_eq!(dilate(&full, r), full);
        }
    }

    #[test]
    fn empty_mask_stays_empty() {
        assert!(dilate(&Mask::new(10, 10), 30).is_empty());
    }

    #[test]
    fn tiny_masks_are_returned_unchanged() {
        let mask = Mask::from_fn(2, 7, |x, y| x == 0 && y == 3);
        assert_eq!(dilate(&mask, 5), mask);
    }
}
