use std::cell::Cell;

use deep_check::{walkable, Failure, ValidateSelf, ValidateSelfOwned};

pub struct A {
    pub k: String,
    pub v: i32,
}

impl A {
    pub fn with_value(v: i32) -> Self {
        Self { k: String::new(), v }
    }
}

impl ValidateSelf for A {
    fn validate_self(&self) -> Result<(), Failure> {
        if !self.k.is_empty() {
            return Err("non-empty key".into());
        }
        if self.v != 42 {
            return Err("wrong value".into());
        }
        Ok(())
    }
}

walkable!(A { k, v } check = borrowed);

pub struct B {
    pub valid: bool,
    pub a: A,
}

impl ValidateSelf for B {
    fn validate_self(&self) -> Result<(), Failure> {
        if !self.valid {
            return Err("not valid".into());
        }
        Ok(())
    }
}

walkable!(B { valid, a } check = borrowed);

pub struct C {
    pub b: Option<Box<B>>,
}

walkable!(C { b });

pub struct D {
    pub a: A,
    pub other: String,
}

walkable!(D { ..a, other });

#[derive(Clone)]
pub struct ByValue {
    pub valid: bool,
}

impl ValidateSelfOwned for ByValue {
    fn validate_self_owned(self) -> Result<(), Failure> {
        if !self.valid {
            return Err("not valid".into());
        }
        Ok(())
    }
}

walkable!(ByValue { valid } check = owned);

pub struct ByReference {
    pub valid: bool,
}

impl ValidateSelf for ByReference {
    fn validate_self(&self) -> Result<(), Failure> {
        if !self.valid {
            return Err("not valid".into());
        }
        Ok(())
    }
}

walkable!(ByReference { valid } check = borrowed);

/// Counts how many times its self-check ran.
#[derive(Default)]
pub struct Counter {
    pub hits: Cell<u32>,
}

impl ValidateSelf for Counter {
    fn validate_self(&self) -> Result<(), Failure> {
        self.hits.set(self.hits.get() + 1);
        Ok(())
    }
}

walkable!(Counter {} check = borrowed);

/// Fails its own check and carries a counter that must never be reached.
pub struct Rejecting {
    pub counter: Counter,
}

impl ValidateSelf for Rejecting {
    fn validate_self(&self) -> Result<(), Failure> {
        Err("rejected".into())
    }
}

walkable!(Rejecting { counter } check = borrowed);

pub struct Batch {
    pub items: Option<Vec<A>>,
    pub boxed_items: Option<Box<Vec<A>>>,
}

walkable!(Batch { items, boxed_items });
