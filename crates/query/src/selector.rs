//! Positional selection over a step's type-filtered matches.
use crate::ast::IndexSelector;

/// Resolves a possibly negative index against a sequence of `len` items.
pub fn index_position(len: usize, index: i64) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let position = if index < 0 { index.checked_add(len)? } else { index };
    (0..len).contains(&position).then_some(position as usize)
}

/// Positions selected by `start:stop:step` over `len` items.
///
/// Bounds are clamped the way sequence slicing usually works: negative bounds
/// count from the end, out-of-range bounds are pulled to the nearest edge, and a
/// negative step walks backwards. `step` must not be zero.
pub fn slice_positions(len: usize, start: Option<i64>, stop: i64, step: Option<i64>) -> Vec<usize> {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let step = step.unwrap_or(1);
    let mut positions = Vec::new();

    if step > 0 {
        let mut current = clamp_bound(start.unwrap_or(0), len, 0, len);
        let stop = clamp_bound(stop, len, 0, len);
        while current < stop {
            positions.push(current as usize);
            match current.checked_add(step) {
                Some(next) => current = next,
                None => break,
            }
        }
    } else if step < 0 {
        let mut current = clamp_bound(start.unwrap_or(len - 1), len, -1, len - 1);
        let stop = clamp_bound(stop, len, -1, len - 1);
        while current > stop {
            positions.push(current as usize);
            match current.checked_add(step) {
                Some(next) => current = next,
                None => break,
            }
        }
    }
    positions
}

fn clamp_bound(bound: i64, len: i64, lower: i64, upper: i64) -> i64 {
    let bound = if bound < 0 { bound.saturating_add(len) } else { bound };
    bound.clamp(lower, upper)
}

/// The outcome of applying an [`IndexSelector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Selected(Vec<T>),
    /// An integer index fell outside the matches.
    OutOfRange { index: i64, len: usize },
}

impl IndexSelector {
    pub fn apply<T: Copy>(&self, items: &[T]) -> Selection<T> {
        match *self {
            IndexSelector::None => Selection::Selected(items.to_vec()),
            IndexSelector::Index(index) => match index_position(items.len(), index) {
                Some(position) => Selection::Selected(vec![items[position]]),
                None => Selection::OutOfRange {
                    index,
                    len: items.len(),
                },
            },
            IndexSelector::Slice { start, stop, step } => Selection::Selected(
                slice_positions(items.len(), start, stop, step)
                    .into_iter()
                    .map(|position| items[position])
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_position() {
        assert_eq!(index_position(3, 0), Some(0));
        assert_eq!(index_position(3, -1), Some(2));
        assert_eq!(index_position(3, -3), Some(0));
        assert_eq!(index_position(3, 3), None);
        assert_eq!(index_position(3, -4), None);
        assert_eq!(index_position(0, 0), None);
    }

    #[test]
    fn test_forward_slices() {
        assert_eq!(slice_positions(3, Some(0), 2, None), vec![0, 1]);
        assert_eq!(slice_positions(5, None, 5, Some(2)), vec![0, 2, 4]);
        assert_eq!(slice_positions(5, Some(-2), 10, None), vec![3, 4]);
        assert_eq!(slice_positions(5, Some(-10), -3, None), vec![0, 1]);
        assert!(slice_positions(5, Some(3), 1, None).is_empty());
        assert!(slice_positions(0, None, 3, None).is_empty());
    }

    #[test]
    fn test_backward_slices() {
        assert_eq!(slice_positions(3, Some(2), 0, Some(-1)), vec![2, 1]);
        assert_eq!(slice_positions(3, None, -4, Some(-1)), vec![2, 1, 0]);
        assert_eq!(slice_positions(6, Some(10), 0, Some(-2)), vec![5, 3, 1]);
        assert!(slice_positions(3, Some(0), 2, Some(-1)).is_empty());
    }

    #[test]
    fn test_apply_selector() {
        let items = ['a', 'b', 'c'];
        assert_eq!(
            IndexSelector::Index(-1).apply(&items),
            Selection::Selected(vec!['c'])
        );
        assert_eq!(
            IndexSelector::Index(5).apply(&items),
            Selection::OutOfRange { index: 5, len: 3 }
        );
        assert_eq!(
            IndexSelector::Slice { start: Some(1), stop: 3, step: None }.apply(&items),
            Selection::Selected(vec!['b', 'c'])
        );
        assert_eq!(
            IndexSelector::None.apply(&items),
            Selection::Selected(items.to_vec())
        );
    }
}
