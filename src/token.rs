//! Type tokens: Rust types as comparable values.
//!
//! A `Pack<Token>` is literally a list of types. Tokens only support identity
//! comparison and an ordering; nothing inspects the underlying type.
use std::any::{type_name, TypeId};
use std::fmt;
use std::marker::PhantomData;

/// Type-level integral constant, the tag behind [`Token::lit`].
pub struct Lit<const N: usize>(PhantomData<()>);

/// Identity of a type.
///
/// Ordering puts every named type first (by name), then integral constants
/// numerically (see [`Token::lit`]).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token {
    value: Option<usize>,
    name: &'static str,
    id: TypeId,
}

impl Token {
    /// Token of type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Token {
            value: None,
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Token of the integral constant `N`.
    ///
    /// Such tokens compare by value: `lit::<2>() < lit::<10>()`.
    /// Build them only through this function, `Token::of::<Lit<N>>()` is a
    /// plain named type.
    pub fn lit<const N: usize>() -> Self {
        Token {
            value: Some(N),
            name: type_name::<Lit<N>>(),
            id: TypeId::of::<Lit<N>>(),
        }
    }

    /// The "no value" token (the unit type).
    pub fn void() -> Self {
        Token::of::<()>()
    }

    /// Is this the token of type `T`?
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.value.is_none() && self.id == TypeId::of::<T>()
    }

    /// Name of the type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Value of an integral constant token.
    pub fn value(&self) -> Option<usize> {
        self.value
    }
}

impl Default for Token {
    fn default() -> Self {
        Token::void()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{}", value),
            None => f.write_str(self.name),
        }
    }
}

/// Build a pack of type tokens.
///
/// ```
/// use pack_algorithms::{tokens, Token};
/// let p = tokens![i32, char, ()];
/// assert_eq!(p.find(&Token::of::<char>()), 1);
/// ```
#[macro_export]
macro_rules! tokens {
    (kind = $kind:ty; $($item:ty),* $(,)?) => {
        $crate::Pack::<$crate::Token, $kind>::from_vec(vec![$($crate::Token::of::<$item>()),*])
    };
    ($($item:ty),* $(,)?) => {
        $crate::Pack::<$crate::Token, $crate::Plain>::from_vec(vec![$($crate::Token::of::<$item>()),*])
    };
}

/// Build a pack of integral constant tokens.
///
/// ```
/// use pack_algorithms::lits;
/// assert_eq!(lits![3, 1, 2].sort(), lits![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! lits {
    (kind = $kind:ty; $($value:expr),* $(,)?) => {
        $crate::Pack::<$crate::Token, $kind>::from_vec(vec![$($crate::Token::lit::<{ $value }>()),*])
    };
    ($($value:expr),* $(,)?) => {
        $crate::Pack::<$crate::Token, $crate::Plain>::from_vec(vec![$($crate::Token::lit::<{ $value }>()),*])
    };
}
