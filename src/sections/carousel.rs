//! Wrap-around stepping shared by the offers and features carousels.

pub fn step_forward(start: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (start + 1) % len }
}

pub fn step_back(start: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (start + len - 1) % len }
}

/// Indices of the `count` slides visible from `start`, wrapping past the end.
pub fn visible_window(start: usize, len: usize, count: usize) -> Vec<usize> {
    (0..count.min(len)).map(|i| (start + i) % len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_wraps_both_directions() {
        assert_eq!(step_forward(9, 10), 0);
        assert_eq!(step_forward(3, 10), 4);
        assert_eq!(step_back(0, 10), 9);
        assert_eq!(step_back(4, 10), 3);
    }

    #[test]
    fn window_wraps_past_the_end() {
        assert_eq!(visible_window(8, 10, 4), vec![8, 9, 0, 1]);
        assert_eq!(visible_window(0, 10, 3), vec![0, 1, 2]);
    }

    #[test]
    fn window_is_clamped_to_slide_count() {
        assert_eq!(visible_window(1, 2, 4), vec![1, 0]);
        assert_eq!(visible_window(0, 0, 4), Vec::<usize>::new());
    }
}
