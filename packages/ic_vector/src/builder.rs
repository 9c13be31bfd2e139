use std::marker::PhantomData;

use crate::{DEFAULT_GROWTH_STEP, DropPolicy, Result, Vector};

/// Builder for creating an instance of [`Vector`].
///
/// You only need to use this builder if you want to customize the drop policy. The shorthand
/// [`Vector::new()`][1] covers configuring the growth step alone.
///
/// # Examples
///
/// ```
/// use ic_vector::{DropPolicy, Vector};
///
/// let vector = Vector::<u32>::builder()
///     .growth_step(4)
///     .drop_policy(DropPolicy::MayDropItems)
///     .build()
///     .unwrap();
///
/// assert_eq!(vector.capacity(), 4);
/// ```
///
/// [1]: Vector::new
#[must_use]
pub struct VectorBuilder<T> {
    growth_step: usize,
    drop_policy: DropPolicy,

    _item: PhantomData<T>,
}

impl<T> std::fmt::Debug for VectorBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorBuilder")
            .field(
                "item_type",
                &std::format_args!("{}", std::any::type_name::<T>()),
            )
            .field("growth_step", &self.growth_step)
            .field("drop_policy", &self.drop_policy)
            .finish()
    }
}

impl<T> VectorBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            growth_step: DEFAULT_GROWTH_STEP.get(),
            drop_policy: DropPolicy::default(),
            _item: PhantomData,
        }
    }

    /// Sets the growth step of the vector.
    ///
    /// The growth step is both the initial capacity of the vector and the factor by which
    /// the capacity is multiplied whenever the vector runs out of room. It must be non-zero,
    /// which is validated by [`build()`][Self::build].
    ///
    /// # Examples
    ///
    /// ```
    /// use ic_vector::Vector;
    ///
    /// let mut vector = Vector::<u32>::builder().growth_step(2).build().unwrap();
    ///
    /// vector.append(1);
    /// vector.append(2);
    /// vector.append(3);
    ///
    /// assert_eq!(vector.capacity(), 4);
    /// ```
    pub fn growth_step(mut self, growth_step: usize) -> Self {
        self.growth_step = growth_step;
        self
    }

    /// Sets the [drop policy][DropPolicy] for the vector. This governs how
    /// to treat remaining elements when the vector is disposed of.
    pub fn drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    /// Builds the vector with the specified configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`][crate::Error::InvalidConfiguration] if `T` is
    /// zero-sized or the growth step is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ic_vector::{Error, Vector};
    ///
    /// let result = Vector::<u32>::builder().growth_step(0).build();
    /// assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    /// ```
    pub fn build(self) -> Result<Vector<T>> {
        Vector::new_inner(self.growth_step, self.drop_policy)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn defaults() {
        let vector = VectorBuilder::<u32>::new().build().unwrap();

        assert_eq!(vector.growth_step(), DEFAULT_GROWTH_STEP.get());
        assert_eq!(vector.capacity(), DEFAULT_GROWTH_STEP.get());
        assert_eq!(vector.drop_policy(), DropPolicy::MayDropItems);
    }

    #[test]
    fn applies_settings() {
        let vector = VectorBuilder::<u64>::new()
            .growth_step(3)
            .drop_policy(DropPolicy::MustNotDropItems)
            .build()
            .unwrap();

        assert_eq!(vector.growth_step(), 3);
        assert_eq!(vector.capacity(), 3);
        assert_eq!(vector.drop_policy(), DropPolicy::MustNotDropItems);
    }

    #[test]
    fn zero_sized_type_is_rejected() {
        let result = VectorBuilder::<()>::new().growth_step(10).build();

        assert_eq!(
            result.unwrap_err(),
            Error::InvalidConfiguration {
                element_size: 0,
                growth_step: 10,
            }
        );
    }

    #[test]
    fn debug_mentions_item_type() {
        let builder = VectorBuilder::<u16>::new().growth_step(7);
        let output = format!("{builder:?}");

        assert!(output.contains("u16"));
        assert!(output.contains("growth_step: 7"));
    }
}
