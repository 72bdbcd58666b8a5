//! Slice initialization helpers.

/// Set every element of `arr` to `value`.
pub fn init_array<T: Clone>(arr: &mut [T], value: T) {
    arr.fill(value);
}

/// Set every element of `arr` to its type's default (`0`, `0.0`, `""`).
pub fn reset_array<T: Default + Clone>(arr: &mut [T]) {
    arr.fill(T::default());
}
