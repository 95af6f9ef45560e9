//! A max-heap over the keys `0..n` with non-negative floating point values.
//!
//! Keys can be temporarily removed and later restored with their old value, which is how the
//! variable selector lazily drops assigned variables and reinserts them on backtracking.
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::vlsi_assert_moderate;

#[derive(Clone, Debug, Default)]
pub(crate) struct KeyValueHeap {
    /// The values stored as a heap; the value of key `i` is at `map_key_to_position[i]`.
    values: Vec<f64>,
    map_key_to_position: Vec<u32>,
    map_position_to_key: Vec<u32>,
    /// The index past the last element in the heap.
    end_position: u32,
}

impl KeyValueHeap {
    /// Returns the key with the maximum value without removing it, in O(1).
    pub(crate) fn peek_max(&self) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(self.map_position_to_key[0])
        }
    }

    pub(crate) fn get_value(&self, key: u32) -> f64 {
        vlsi_assert_moderate!((key as usize) < self.map_key_to_position.len());
        self.values[self.map_key_to_position[key as usize] as usize]
    }

    /// Removes the key with the maximum value and returns it, in O(log n).
    pub(crate) fn pop_max(&mut self) -> Option<u32> {
        let best_key = self.peek_max()?;
        self.delete_key(best_key);
        Some(best_key)
    }

    /// Increments the value of `key`; the key does not need to be present in the heap.
    pub(crate) fn increment(&mut self, key: u32, increment: f64) {
        let position = self.map_key_to_position[key as usize];
        self.values[position as usize] += increment;
        if self.is_key_present(key) {
            self.sift_up(position);
        }
    }

    /// Puts a previously deleted key back with the value it had when it was deleted.
    pub(crate) fn restore_key(&mut self, key: u32) {
        if !self.is_key_present(key) {
            let position = self.map_key_to_position[key as usize];
            vlsi_assert_moderate!(position >= self.end_position);
            self.swap_positions(position, self.end_position);
            self.end_position += 1;
            self.sift_up(self.end_position - 1);
        }
    }

    /// Removes `key` from the heap while remembering its value.
    pub(crate) fn delete_key(&mut self, key: u32) {
        if self.is_key_present(key) {
            let position = self.map_key_to_position[key as usize];
            self.swap_positions(position, self.end_position - 1);
            self.end_position -= 1;
            if position < self.end_position {
                self.sift_down(position);
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.end_position == 0
    }

    pub(crate) fn is_key_present(&self, key: u32) -> bool {
        self.map_key_to_position[key as usize] < self.end_position
    }

    /// Adds the next key, `n`, with the given value.
    pub(crate) fn grow(&mut self, value: f64) {
        let new_key = self.values.len() as u32;
        self.values.push(value);
        self.map_key_to_position.push(new_key);
        self.map_position_to_key.push(new_key);
        self.swap_positions(self.end_position, new_key);
        self.end_position += 1;
        self.sift_up(self.end_position - 1);
    }

    /// Divides every value, including those of deleted keys.
    pub(crate) fn divide_values(&mut self, divisor: f64) {
        for value in self.values.iter_mut() {
            *value /= divisor;
        }
    }

    /// Restores all keys with value zero. Without a seed the keys are laid out in increasing
    /// order; with a seed the initial order is shuffled, which changes how ties are broken.
    pub(crate) fn reset(&mut self, random_seed: Option<u64>) {
        self.end_position = self.values.len() as u32;
        self.values.iter_mut().for_each(|value| *value = 0.0);

        let mut keys = (0..self.values.len() as u32).collect::<Vec<_>>();
        if let Some(seed) = random_seed {
            keys.shuffle(&mut SmallRng::seed_from_u64(seed));
        }

        for (position, key) in keys.into_iter().enumerate() {
            self.map_position_to_key[position] = key;
            self.map_key_to_position[key as usize] = position as u32;
        }
    }

    fn swap_positions(&mut self, a: u32, b: u32) {
        let a = a as usize;
        let b = b as usize;

        let key_a = self.map_position_to_key[a] as usize;
        let key_b = self.map_position_to_key[b] as usize;

        self.values.swap(a, b);
        self.map_position_to_key.swap(a, b);
        self.map_key_to_position.swap(key_a, key_b);
    }

    fn sift_up(&mut self, mut position: u32) {
        while position > 0 {
            let parent_position = KeyValueHeap::get_parent_position(position);
            if self.values[parent_position as usize] >= self.values[position as usize] {
                break;
            }
            self.swap_positions(parent_position, position);
            position = parent_position;
        }
    }

    fn sift_down(&mut self, mut position: u32) {
        vlsi_assert_moderate!(position < self.end_position);

        while !self.is_heap_locally(position) {
            let largest_child_position = self.get_largest_child_position(position);
            self.swap_positions(largest_child_position, position);
            position = largest_child_position;
        }
    }

    fn is_heap_locally(&self, position: u32) -> bool {
        self.is_leaf(position)
            || self.values[position as usize]
                >= self.values[self.get_largest_child_position(position) as usize]
    }

    fn is_leaf(&self, position: u32) -> bool {
        KeyValueHeap::get_left_child_position(position) >= self.end_position
    }

    fn get_largest_child_position(&self, position: u32) -> u32 {
        vlsi_assert_moderate!(!self.is_leaf(position));

        let left_child_position = KeyValueHeap::get_left_child_position(position);
        let right_child_position = left_child_position + 1;

        if right_child_position < self.end_position
            && self.values[right_child_position as usize]
                > self.values[left_child_position as usize]
        {
            right_child_position
        } else {
            left_child_position
        }
    }

    fn get_parent_position(child_position: u32) -> u32 {
        vlsi_assert_moderate!(child_position > 0, "Root has no parent.");
        (child_position - 1) / 2
    }

    fn get_left_child_position(position: u32) -> u32 {
        2 * position + 1
    }
}

#[cfg(test)]
mod tests {
    use super::KeyValueHeap;

    fn heap_with_values(values: &[f64]) -> KeyValueHeap {
        let mut heap = KeyValueHeap::default();
        for &value in values {
            heap.grow(value);
        }
        heap
    }

    #[test]
    fn pops_keys_in_decreasing_value_order() {
        let mut heap = heap_with_values(&[3.0, 9.0, 1.0, 7.0, 5.0]);

        let popped = std::iter::from_fn(|| heap.pop_max()).collect::<Vec<_>>();

        assert_eq!(popped, vec![1, 3, 4, 0, 2]);
    }

    #[test]
    fn restored_key_keeps_its_value() {
        let mut heap = heap_with_values(&[1.0, 2.0, 3.0]);
        heap.delete_key(2);
        assert_eq!(heap.peek_max(), Some(1));

        heap.restore_key(2);
        assert_eq!(heap.peek_max(), Some(2));
        assert_eq!(heap.get_value(2), 3.0);
    }

    #[test]
    fn increment_of_deleted_key_is_visible_after_restore() {
        let mut heap = heap_with_values(&[1.0, 2.0]);
        heap.delete_key(0);
        heap.increment(0, 5.0);
        assert_eq!(heap.peek_max(), Some(1));

        heap.restore_key(0);
        assert_eq!(heap.peek_max(), Some(0));
    }

    #[test]
    fn seeded_reset_keeps_every_key() {
        let mut heap = heap_with_values(&[1.0, 2.0, 3.0, 4.0]);
        heap.reset(Some(42));

        let mut popped = std::iter::from_fn(|| heap.pop_max()).collect::<Vec<_>>();
        popped.sort_unstable();

        assert_eq!(popped, vec![0, 1, 2, 3]);
    }
}
