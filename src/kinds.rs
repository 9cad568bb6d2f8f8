//! Container kinds.
//!
//! A kind is the "flavor" a pack is tagged with. It only exists at the type
//! level, so rebuilding items under another kind is checked by the compiler:
//! a `Pack<T, Tuple>` and a `Pack<T, Plain>` never compare equal because they
//! are not even the same type.

/// Marker trait for container kinds.
///
/// Declare new kinds with the [`kind!`](crate::kind!) macro.
pub trait Kind: 'static {
    /// Name used when debug-printing packs of this kind.
    const NAME: &'static str;
}

/// Declare zero-sized container kinds.
///
/// ```
/// use pack_algorithms::{kind, Kind};
/// kind!(
///     /// Arguments of a call.
///     Args
/// );
/// assert_eq!(Args::NAME, "Args");
/// ```
#[macro_export]
macro_rules! kind {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl $crate::Kind for $name {
                const NAME: &'static str = stringify!($name);
            }
        )+
    };
}

kind!(
    /// The basic container kind, used when nothing else is asked for.
    Plain,
    /// A second general purpose kind, handy for pairs and argument lists.
    Tuple
);
