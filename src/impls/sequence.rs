use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::traits::{Sequence, Shape, Walk};
use crate::types::{Kind, Node};

impl<T: Walk> Sequence for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn element(&self, index: usize) -> Option<&dyn Walk> {
        self.get(index).map(|element| element as &dyn Walk)
    }
}

impl<T: Walk> Walk for Vec<T> {
    #[inline]
    fn node(&self) -> Node<'_> {
        Node::Sequence(self)
    }
}

impl<T> Shape for Vec<T> {
    const KIND: Kind = Kind::Sequence;
}

impl<T: Walk> Sequence for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn element(&self, index: usize) -> Option<&dyn Walk> {
        self.get(index).map(|element| element as &dyn Walk)
    }
}

impl<T: Walk> Walk for VecDeque<T> {
    #[inline]
    fn node(&self) -> Node<'_> {
        Node::Sequence(self)
    }
}

impl<T> Shape for VecDeque<T> {
    const KIND: Kind = Kind::Sequence;
}

impl<T: Walk, const N: usize> Sequence for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn element(&self, index: usize) -> Option<&dyn Walk> {
        self.get(index).map(|element| element as &dyn Walk)
    }
}

impl<T: Walk, const N: usize> Walk for [T; N] {
    #[inline]
    fn node(&self) -> Node<'_> {
        Node::Sequence(self)
    }
}

impl<T, const N: usize> Shape for [T; N] {
    const KIND: Kind = Kind::Sequence;
}

impl<T> Shape for [T] {
    const KIND: Kind = Kind::Sequence;
}

// `[T]` is unsized and cannot become a `&dyn Walk`, so the pointers that own
// or borrow a slice present the sequence themselves instead of forwarding.
macro_rules! impl_slice_pointer {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: Walk> Sequence for $ptr {
                #[inline]
                fn len(&self) -> usize {
                    (**self).len()
                }

                #[inline]
                fn element(&self, index: usize) -> Option<&dyn Walk> {
                    (**self).get(index).map(|element| element as &dyn Walk)
                }
            }

            impl<T: Walk> Walk for $ptr {
                #[inline]
                fn node(&self) -> Node<'_> {
                    Node::Sequence(self)
                }
            }
        )*
    };
}

impl_slice_pointer!(&[T], &mut [T], Box<[T]>, Rc<[T]>, Arc<[T]>);
