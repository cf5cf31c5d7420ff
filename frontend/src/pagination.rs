/// Dashboard loading phases exposed to rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
    /// Nothing fetched yet; the page shows its full-screen spinner.
    Initial,
    /// Data loaded and no growth request outstanding.
    Idle,
    /// A growth request is inside its simulated round-trip window.
    LoadingMore,
}

impl LoadingState {
    /// Growth is admissible only when idle: never before the first fetch
    /// resolves, and never while another growth request is outstanding.
    pub fn accepts_growth(&self) -> bool {
        matches!(self, LoadingState::Idle)
    }
}

/// Number of additional records revealed per growth step.
pub const DEFAULT_BATCH: usize = 9;

/// Batched prefix pagination over an already-fetched list.
///
/// Owns the full fetch result and reveals it in fixed-size batches. The
/// visible window is always `all[0..offset]` in fetch order, never a
/// filtered or reordered subset, and `offset` never decreases.
#[derive(Debug, Clone, PartialEq)]
pub struct Pager<T> {
    all: Vec<T>,
    offset: usize,
    batch: usize,
}

impl<T> Pager<T> {
    /// Takes ownership of the full list and opens the first batch.
    pub fn new(all: Vec<T>) -> Self {
        Self::with_batch(all, DEFAULT_BATCH)
    }

    /// Same as [`Pager::new`] with a caller-chosen batch size (must be > 0).
    pub fn with_batch(all: Vec<T>, batch: usize) -> Self {
        debug_assert!(batch > 0, "batch size must be positive");
        let offset = batch.min(all.len());
        Self { all, offset, batch }
    }

    /// The currently revealed prefix.
    pub fn visible(&self) -> &[T] {
        &self.all[..self.offset]
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn visible_len(&self) -> usize {
        self.offset
    }

    /// Whether the whole list is revealed.
    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.all.len()
    }

    /// Reveals the next batch, clamped to the end of the list.
    ///
    /// Returns `false` without changing anything when already exhausted, so
    /// callers may invoke it unconditionally.
    pub fn grow(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.offset = (self.offset + self.batch).min(self.all.len());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager_of(n: usize) -> Pager<usize> {
        Pager::new((0..n).collect())
    }

    #[test]
    fn test_initial_window_is_one_batch() {
        let pager = pager_of(20);
        assert_eq!(pager.visible_len(), DEFAULT_BATCH);
        assert_eq!(pager.len(), 20);
        assert!(!pager.is_exhausted());
    }

    #[test]
    fn test_initial_window_clamps_to_short_lists() {
        let pager = pager_of(4);
        assert_eq!(pager.visible_len(), 4);
        assert!(pager.is_exhausted());
    }

    #[test]
    fn test_empty_list_is_immediately_exhausted() {
        let mut pager = pager_of(0);
        assert_eq!(pager.visible_len(), 0);
        assert!(pager.is_empty());
        assert!(pager.is_exhausted());
        assert!(!pager.grow());
    }

    #[test]
    fn test_visible_is_a_prefix_in_fetch_order() {
        let mut pager = Pager::new(vec![30, 10, 50, 20, 40, 60, 15, 25, 35, 45, 55]);
        assert_eq!(pager.visible(), &[30, 10, 50, 20, 40, 60, 15, 25, 35]);
        pager.grow();
        assert_eq!(
            pager.visible(),
            &[30, 10, 50, 20, 40, 60, 15, 25, 35, 45, 55]
        );
    }

    #[test]
    fn test_growth_scenario_twenty_items() {
        // N=20, B=9: 9 -> 18 -> 20 (clamped) -> no-op.
        let mut pager = pager_of(20);
        assert_eq!(pager.visible_len(), 9);

        assert!(pager.grow());
        assert_eq!(pager.visible_len(), 18);

        assert!(pager.grow());
        assert_eq!(pager.visible_len(), 20);
        assert!(pager.is_exhausted());

        assert!(!pager.grow());
        assert_eq!(pager.visible_len(), 20);
    }

    #[test]
    fn test_growth_arithmetic_without_exhaustion() {
        let mut pager = Pager::with_batch((0..100).collect::<Vec<_>>(), 7);
        for k in 1..=5 {
            assert!(pager.grow());
            assert_eq!(pager.visible_len(), 7 * (k + 1));
        }
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let mut pager = pager_of(10);
        assert!(pager.grow());
        assert!(pager.is_exhausted());

        let snapshot = pager.visible().to_vec();
        for _ in 0..5 {
            assert!(!pager.grow());
            assert_eq!(pager.visible(), snapshot.as_slice());
        }
    }

    #[test]
    fn test_offset_is_monotonic() {
        let mut pager = Pager::with_batch((0..50).collect::<Vec<_>>(), 9);
        let mut last = pager.visible_len();
        for _ in 0..10 {
            pager.grow();
            assert!(pager.visible_len() >= last);
            last = pager.visible_len();
        }
        assert_eq!(last, 50);
    }

    #[test]
    fn test_custom_batch_size() {
        let mut pager = Pager::with_batch((0..5).collect::<Vec<_>>(), 2);
        assert_eq!(pager.visible_len(), 2);
        pager.grow();
        assert_eq!(pager.visible_len(), 4);
        pager.grow();
        assert_eq!(pager.visible_len(), 5);
        assert!(!pager.grow());
    }

    #[test]
    fn test_loading_state_gates_growth() {
        assert!(!LoadingState::Initial.accepts_growth());
        assert!(LoadingState::Idle.accepts_growth());
        assert!(!LoadingState::LoadingMore.accepts_growth());
    }
}
