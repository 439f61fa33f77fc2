//! `Walk` and `Shape` impls for core, alloc and (with `std`) std types.

mod leaf;
mod pointer;
mod sequence;
