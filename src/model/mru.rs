use super::handle::DocumentHandle;

/// Documents ordered by recency of focus, most recent first.
///
/// A handle appears at most once. Lists stay small (tens of entries), so
/// lookups are linear scans over a `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MruList {
    items: Vec<DocumentHandle>,
}

impl MruList {
    pub fn new() -> Self {
        MruList { items: Vec::new() }
    }

    /// Seed a list from the host's document set, keeping host order and
    /// dropping handles that are not valid (or repeated).
    pub fn seeded<I, F>(handles: I, is_valid: F) -> Self
    where
        I: IntoIterator<Item = DocumentHandle>,
        F: Fn(DocumentHandle) -> bool,
    {
        let mut list = MruList::new();
        for handle in handles {
            if is_valid(handle) && !list.contains(handle) {
                list.items.push(handle);
            }
        }
        list
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn front(&self) -> Option<DocumentHandle> {
        self.items.first().copied()
    }

    pub fn contains(&self, handle: DocumentHandle) -> bool {
        self.items.contains(&handle)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = DocumentHandle> + '_ {
        self.items.iter().copied()
    }

    /// Move `handle` to the front, inserting it if absent.
    pub fn promote_to_front(&mut self, handle: DocumentHandle) {
        self.remove(handle);
        self.items.insert(0, handle);
    }

    /// Move `handle` to the back, inserting it if absent.
    pub fn push_back(&mut self, handle: DocumentHandle) {
        self.remove(handle);
        self.items.push(handle);
    }

    /// Remove `handle` if present. Returns whether anything was removed.
    pub fn remove(&mut self, handle: DocumentHandle) -> bool {
        match self.items.iter().position(|&h| h == handle) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Drop every entry the oracle rejects, keeping relative order.
    /// Returns the handles that were dropped.
    pub fn reconcile<F>(&mut self, is_valid: F) -> Vec<DocumentHandle>
    where
        F: Fn(DocumentHandle) -> bool,
    {
        let mut dropped = Vec::new();
        self.items.retain(|&h| {
            let keep = is_valid(h);
            if !keep {
                dropped.push(h);
            }
            keep
        });
        dropped
    }

    /// Walk one step deeper into history: the least recent entry becomes the
    /// most recent. Returns the new front, which the caller should focus.
    ///
    /// The rotated entry is only reinserted if it is still valid.
    pub fn cycle_forward<F>(&mut self, is_valid: F) -> Option<DocumentHandle>
    where
        F: Fn(DocumentHandle) -> bool,
    {
        let last = self.items.pop()?;
        self.reconcile(&is_valid);
        if is_valid(last) {
            self.items.insert(0, last);
        }
        self.front()
    }

    /// Walk one step back toward the present: `current` is taken out, the
    /// host's live document is demoted to the back, and the entry that was
    /// second becomes the front. Returns the new front.
    ///
    /// `current` is the cached current handle rather than the list front, so
    /// a focus change the list has not seen yet does not lose an entry. When
    /// the host has no live document (its window was hidden), `current`
    /// itself goes to the back.
    pub fn cycle_backward<F>(
        &mut self,
        current: Option<DocumentHandle>,
        live_current: Option<DocumentHandle>,
        is_valid: F,
    ) -> Option<DocumentHandle>
    where
        F: Fn(DocumentHandle) -> bool,
    {
        if self.items.is_empty() {
            return None;
        }
        if let Some(current) = current {
            self.remove(current);
        }
        self.reconcile(&is_valid);
        // With nothing focused in the host, the demoted entry is `current`
        if let Some(demoted) = live_current.or(current)
            && is_valid(demoted)
        {
            self.push_back(demoted);
        }
        self.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn h(n: u32) -> DocumentHandle {
        DocumentHandle(n)
    }

    fn list(ns: &[u32]) -> MruList {
        MruList::seeded(ns.iter().map(|&n| h(n)), |_| true)
    }

    fn ids(l: &MruList) -> Vec<u32> {
        l.iter().map(|d| d.0).collect()
    }

    #[test]
    fn seeded_skips_invalid_and_duplicates() {
        let l = MruList::seeded([h(1), h(2), h(1), h(3)], |d| d != h(2));
        assert_eq!(ids(&l), vec![1, 3]);
    }

    #[test]
    fn promote_moves_existing_entry() {
        let mut l = list(&[1, 2, 3]);
        l.promote_to_front(h(3));
        assert_eq!(ids(&l), vec![3, 1, 2]);
    }

    #[test]
    fn promote_inserts_missing_entry() {
        let mut l = list(&[1, 2]);
        l.promote_to_front(h(9));
        assert_eq!(ids(&l), vec![9, 1, 2]);
    }

    #[test]
    fn promote_twice_is_same_as_once() {
        let mut once = list(&[1, 2, 3]);
        once.promote_to_front(h(2));
        let mut twice = list(&[1, 2, 3]);
        twice.promote_to_front(h(2));
        twice.promote_to_front(h(2));
        assert_eq!(once, twice);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut l = list(&[1, 2]);
        assert!(!l.remove(h(5)));
        assert_eq!(ids(&l), vec![1, 2]);
        assert!(l.remove(h(1)));
        assert_eq!(ids(&l), vec![2]);
    }

    #[test]
    fn reconcile_keeps_order_and_is_idempotent() {
        let mut l = list(&[4, 1, 3, 2]);
        let dropped = l.reconcile(|d| d.0 % 2 == 0);
        assert_eq!(dropped, vec![h(1), h(3)]);
        assert_eq!(ids(&l), vec![4, 2]);
        let snapshot = l.clone();
        assert!(l.reconcile(|d| d.0 % 2 == 0).is_empty());
        assert_eq!(l, snapshot);
    }

    #[test]
    fn cycle_forward_rotates_last_to_front() {
        let mut l = list(&[20, 10]);
        assert_eq!(l.cycle_forward(|_| true), Some(h(10)));
        assert_eq!(ids(&l), vec![10, 20]);
    }

    #[test]
    fn cycle_forward_single_entry_is_unchanged() {
        let mut l = list(&[7]);
        assert_eq!(l.cycle_forward(|_| true), Some(h(7)));
        assert_eq!(ids(&l), vec![7]);
    }

    #[test]
    fn cycle_forward_empty_is_noop() {
        let mut l = MruList::new();
        assert_eq!(l.cycle_forward(|_| true), None);
        assert!(l.is_empty());
    }

    #[test]
    fn cycle_forward_drops_invalid_entries() {
        let mut l = list(&[1, 2, 3, 4]);
        assert_eq!(l.cycle_forward(|d| d != h(2)), Some(h(4)));
        assert_eq!(ids(&l), vec![4, 1, 3]);
    }

    #[test]
    fn cycle_forward_drops_invalid_last_entry() {
        let mut l = list(&[1, 2, 3, 4]);
        assert_eq!(l.cycle_forward(|d| d != h(4)), Some(h(1)));
        assert_eq!(ids(&l), vec![1, 2, 3]);
    }

    #[test]
    fn cycle_backward_skips_invalid_live_document() {
        let mut l = list(&[1, 2, 3]);
        // Live document 9 is a quickfix-like window the list never tracked
        assert_eq!(l.cycle_backward(Some(h(1)), Some(h(9)), |d| d != h(9)), Some(h(2)));
        assert_eq!(ids(&l), vec![2, 3]);
    }

    #[test]
    fn cycle_backward_without_live_document_demotes_current() {
        let mut l = list(&[1, 2, 3]);
        assert_eq!(l.cycle_backward(Some(h(1)), None, |_| true), Some(h(2)));
        assert_eq!(ids(&l), vec![2, 3, 1]);
    }

    #[test]
    fn cycle_backward_reveals_second_entry() {
        let mut l = list(&[1, 2, 3]);
        assert_eq!(l.cycle_backward(Some(h(1)), Some(h(1)), |_| true), Some(h(2)));
        assert_eq!(ids(&l), vec![2, 3, 1]);
    }

    #[test]
    fn cycle_backward_uses_cached_current() {
        // The host switched to 3 without the list hearing about it.
        let mut l = list(&[1, 2, 3]);
        assert_eq!(l.cycle_backward(Some(h(1)), Some(h(3)), |_| true), Some(h(2)));
        assert_eq!(ids(&l), vec![2, 3]);
    }

    #[test]
    fn cycle_forward_then_backward_restores_order() {
        let mut l = list(&[1, 2, 3, 4]);
        let front = l.cycle_forward(|_| true);
        assert_eq!(front, Some(h(4)));
        // The host focuses 4, which becomes current and live.
        l.cycle_backward(front, front, |_| true);
        assert_eq!(ids(&l), vec![1, 2, 3, 4]);
    }

    #[test]
    fn cycles_never_duplicate() {
        let mut l = list(&[1, 2, 3]);
        for step in 0..12u32 {
            if step % 3 == 0 {
                l.cycle_backward(l.front(), Some(h(step % 4 + 1)), |_| true);
            } else {
                l.cycle_forward(|_| true);
            }
            let mut seen = ids(&l);
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), l.len());
        }
    }
}
