/// Determines element dropping behavior when the vector is disposed of.
///
/// By default, the vector drops its remaining elements when it is disposed of or dropped.
///
/// # Examples
///
/// ```
/// use ic_vector::{DropPolicy, Vector};
///
/// // The drop policy is set at vector creation time.
/// let vector = Vector::<u32>::builder()
///     .drop_policy(DropPolicy::MustNotDropItems)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DropPolicy {
    /// The vector will drop its remaining elements when it is disposed of. This is the default.
    #[default]
    MayDropItems,

    /// The vector will panic if it still contains elements when it is disposed of.
    ///
    /// Use this when every element must be taken out through [`delete()`][1] before the
    /// vector goes away, for example because each element must be handed back to some
    /// external owner rather than dropped.
    ///
    /// [1]: crate::Vector::delete
    MustNotDropItems,
}
