use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;

use crate::traits::{Shape, Walk};
use crate::types::{Kind, Node};

macro_rules! impl_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Walk for $ty {
                #[inline]
                fn node(&self) -> Node<'_> {
                    Node::Other
                }
            }

            impl Shape for $ty {
                const KIND: Kind = Kind::Other;
            }
        )*
    };
}

impl_leaf!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    core::time::Duration,
    core::net::IpAddr,
    core::net::SocketAddr,
);

impl<T: ?Sized> Walk for core::marker::PhantomData<T> {
    #[inline]
    fn node(&self) -> Node<'_> {
        Node::Other
    }
}

impl<T: ?Sized> Shape for core::marker::PhantomData<T> {
    const KIND: Kind = Kind::Other;
}

impl Shape for str {
    const KIND: Kind = Kind::Other;
}

// `Shape` for these comes from the pointer impls over `str`.
macro_rules! impl_str_pointer {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl Walk for $ptr {
                #[inline]
                fn node(&self) -> Node<'_> {
                    Node::Other
                }
            }
        )*
    };
}

impl_str_pointer!(&str, &mut str, Box<str>, Rc<str>, Arc<str>);

#[cfg(feature = "std")]
impl_leaf!(
    std::path::PathBuf,
    std::ffi::OsString,
    std::time::SystemTime,
    std::time::Instant,
);
