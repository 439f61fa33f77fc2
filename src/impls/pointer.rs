use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;

use crate::traits::{Shape, Walk};
use crate::types::{Kind, Node};

// Non-nullable pointers are transparent for `Shape`: an absent `Box<Vec<T>>`
// is still an absent sequence.
macro_rules! impl_pointer {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Walk + ?Sized> Walk for $ptr<T> {
                #[inline]
                fn node(&self) -> Node<'_> {
                    Node::Reference((**self).as_walk())
                }
            }

            impl<T: Shape + ?Sized> Shape for $ptr<T> {
                const KIND: Kind = T::KIND;
            }
        )*
    };
}

impl_pointer!(Box, Rc, Arc);

impl<T: Walk + ?Sized> Walk for &T {
    #[inline]
    fn node(&self) -> Node<'_> {
        Node::Reference((**self).as_walk())
    }
}

impl<T: Shape + ?Sized> Shape for &T {
    const KIND: Kind = T::KIND;
}

impl<T: Walk + ?Sized> Walk for &mut T {
    #[inline]
    fn node(&self) -> Node<'_> {
        Node::Reference((**self).as_walk())
    }
}

impl<T: Shape + ?Sized> Shape for &mut T {
    const KIND: Kind = T::KIND;
}

impl<T: Walk + Shape> Walk for Option<T> {
    #[inline]
    fn node(&self) -> Node<'_> {
        match self {
            Some(value) => Node::Reference(value),
            None => Node::Null(T::KIND),
        }
    }
}

impl<T> Shape for Option<T> {
    const KIND: Kind = Kind::Reference;
}
