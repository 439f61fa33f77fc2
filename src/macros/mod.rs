//! Registration macro for structs.
//!
//! [`macro@crate::walkable`] implements [`Walk`](crate::traits::Walk) and
//! [`Shape`](crate::traits::Shape) for a struct from a list of its fields:
//!
//! - `field` walks the field and reports failures under its name.
//! - `..field` walks an embedded field: its own fields behave as if declared
//!   on the outer struct, and no path segment is added for it.
//! - Fields left out of the list are not walked.
//! - Type parameters are accepted (`Name<T, U>`); each one gets
//!   `Walk + Shape` bounds and a trailing `where` clause adds more. Structs
//!   with lifetime parameters need a hand-written impl.
//! - `check = borrowed` registers a [`ValidateSelf`](crate::traits::ValidateSelf)
//!   impl, `check = owned` a [`ValidateSelfOwned`](crate::traits::ValidateSelfOwned)
//!   impl. Without a `check` clause the struct has no self-check of its own.
//!
//! # Examples
//!
//! ```
//! use deep_check::{walkable, Failure, ValidateSelf};
//!
//! struct Entry {
//!     key: String,
//!     value: i32,
//! }
//!
//! impl ValidateSelf for Entry {
//!     fn validate_self(&self) -> Result<(), Failure> {
//!         if !self.key.is_empty() {
//!             return Err("non-empty key".into());
//!         }
//!         if self.value != 42 {
//!             return Err("wrong value".into());
//!         }
//!         Ok(())
//!     }
//! }
//!
//! struct Tagged {
//!     entry: Entry,
//!     label: &'static str,
//! }
//!
//! walkable!(Entry { key, value } check = borrowed);
//! walkable!(Tagged { ..entry });
//!
//! let tagged = Tagged { entry: Entry { key: String::new(), value: 1 }, label: "x" };
//! let failure = deep_check::validate_self_recursively(&tagged).unwrap_err();
//! assert_eq!(failure.message(), "wrong value");
//! assert_eq!(failure.path_string(), "");
//! ```

/// Implements [`Walk`](crate::traits::Walk) and [`Shape`](crate::traits::Shape)
/// for a struct.
///
/// # Syntax
///
/// - `walkable!(Name { a, b })` - walk fields `a` and `b`
/// - `walkable!(Name { ..inner, b })` - `inner` is embedded
/// - `walkable!(Name { 0, 1 })` - tuple struct fields
/// - `walkable!(Name { a } check = borrowed)` - self-check through `&self`
/// - `walkable!(Name { a } check = owned)` - self-check on a clone
/// - `walkable!(Name<T> { a } check = owned where T: Clone)` - generic struct
///
/// # Examples
///
/// ```
/// use deep_check::{walkable, Failure, ValidateSelfOwned};
///
/// #[derive(Clone)]
/// struct Port(u16);
///
/// impl ValidateSelfOwned for Port {
///     fn validate_self_owned(self) -> Result<(), Failure> {
///         if self.0 == 0 { Err("port must be non-zero".into()) } else { Ok(()) }
///     }
/// }
///
/// struct Listener {
///     ports: Vec<Port>,
/// }
///
/// walkable!(Port { 0 } check = owned);
/// walkable!(Listener { ports });
///
/// let listener = Listener { ports: vec![Port(80), Port(0)] };
/// let failure = deep_check::validate_self_recursively(&listener).unwrap_err();
/// assert_eq!(format!("{:#}", failure), "port must be non-zero (at ports[1])");
/// ```
#[macro_export]
macro_rules! walkable {
    (@fields $out:ident $this:ident;) => {};
    (@fields $out:ident $this:ident; .. $field:tt $(, $($rest:tt)*)?) => {
        $out.push($crate::types::Field::embedded(stringify!($field), &$this.$field));
        $crate::walkable!(@fields $out $this; $($($rest)*)?);
    };
    (@fields $out:ident $this:ident; $field:tt $(, $($rest:tt)*)?) => {
        $out.push($crate::types::Field::named(stringify!($field), &$this.$field));
        $crate::walkable!(@fields $out $this; $($($rest)*)?);
    };
    (@check borrowed) => {
        #[inline]
        fn borrowed_check(&self) -> ::core::option::Option<&dyn $crate::traits::ValidateSelf> {
            ::core::option::Option::Some(self)
        }
    };
    (@check owned) => {
        #[inline]
        fn owned_check(&self) -> ::core::option::Option<&dyn $crate::traits::OwnedCheck> {
            ::core::option::Option::Some(self)
        }
    };
    ($ty:ident { $($fields:tt)* } $(check = $binding:ident)? $(;)?) => {
        impl $crate::traits::Walk for $ty {
            fn node(&self) -> $crate::types::Node<'_> {
                #[allow(unused_variables)]
                let this = self;
                #[allow(unused_mut)]
                let mut fields = $crate::types::Fields::new();
                $crate::walkable!(@fields fields this; $($fields)*);
                $crate::types::Node::Struct(fields)
            }

            $($crate::walkable!(@check $binding);)?
        }

        impl $crate::traits::Shape for $ty {
            const KIND: $crate::types::Kind = $crate::types::Kind::Struct;
        }
    };
    (
        $ty:ident < $($param:ident),+ > { $($fields:tt)* }
        $(check = $binding:ident)?
        $(where $($bound:tt)+)?
    ) => {
        impl<$($param),+> $crate::traits::Walk for $ty<$($param),+>
        where
            $($param: $crate::traits::Walk + $crate::traits::Shape,)+
            $($($bound)+)?
        {
            fn node(&self) -> $crate::types::Node<'_> {
                #[allow(unused_variables)]
                let this = self;
                #[allow(unused_mut)]
                let mut fields = $crate::types::Fields::new();
                $crate::walkable!(@fields fields this; $($fields)*);
                $crate::types::Node::Struct(fields)
            }

            $($crate::walkable!(@check $binding);)?
        }

        impl<$($param),+> $crate::traits::Shape for $ty<$($param),+>
        where
            $($param: $crate::traits::Walk + $crate::traits::Shape,)+
            $($($bound)+)?
        {
            const KIND: $crate::types::Kind = $crate::types::Kind::Struct;
        }
    };
}
