// history.rs - Ring of recent board hashes for spotting repeats

use std::collections::VecDeque;

/// Remembers the hashes of the last `capacity` generations.
///
/// A still life or short oscillator shows up as a hash seen again within
/// the window.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    seen     : VecDeque<u64>,
    capacity : usize,
}

impl CycleDetector {
    pub fn new(capacity: usize) -> Self {
        Self {
            seen: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn contains(&self, hash: u64) -> bool {
        self.seen.contains(&hash)
    }

    /// Returns true if `hash` is already in the window, otherwise records it.
    pub fn observe(&mut self, hash: u64) -> bool {
        if self.contains(hash) {
            return true;
        }
        if self.capacity == 0 {
            return false;
        }
        if self.seen.len() == self.capacity {
            self.seen.pop_front();
        }
        self.seen.push_back(hash);
        false
    }

    pub fn reset(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_repeat() {
        let mut detector = CycleDetector::new(4);
        assert!(!detector.observe(1));
        assert!(!detector.observe(2));
        assert!(detector.observe(1));
        assert!(detector.contains(2));
        assert!(!detector.contains(3));
    }

    #[test]
    fn forgets_old_hashes() {
        let mut detector = CycleDetector::new(2);
        detector.observe(1);
        detector.observe(2);
        detector.observe(3);
        assert_eq!(detector.len(), 2);
        assert!(!detector.observe(1));
    }

    #[test]
    fn reset_empties_window() {
        let mut detector = CycleDetector::new(3);
        detector.observe(5);
        detector.reset();
        assert!(detector.is_empty());
        assert!(!detector.observe(5));
    }

    #[test]
    fn zero_capacity_never_fires() {
        let mut detector = CycleDetector::new(0);
        assert!(!detector.observe(9));
        assert!(!detector.observe(9));
    }
}
