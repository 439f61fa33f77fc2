use std::collections::VecDeque;
use std::rc::Rc;

use deep_check::traits::Shape;
use deep_check::types::Kind;
use deep_check::{validate_self_recursively, walkable, NIL_REFERENCE};

use super::expect_failure;
use crate::fixtures::*;

fn values(vs: &[i32]) -> Vec<A> {
    vs.iter().copied().map(A::with_value).collect()
}

#[test]
fn empty_and_passing_sequences_yield_no_failure() {
    assert!(validate_self_recursively(&values(&[])).is_ok());
    assert!(validate_self_recursively(&values(&[42])).is_ok());
    assert!(validate_self_recursively(&values(&[42, 42])).is_ok());
}

#[test]
fn first_failing_element_is_reported() {
    expect_failure(validate_self_recursively(&values(&[1])), "wrong value");
    expect_failure(validate_self_recursively(&values(&[1, 1])), "wrong value");

    let second = validate_self_recursively(&values(&[42, 1])).unwrap_err();
    assert_eq!(second.message(), "wrong value");
    assert_eq!(second.path_string(), "[1]");

    let first = validate_self_recursively(&values(&[1, 42])).unwrap_err();
    assert_eq!(first.message(), "wrong value");
    assert_eq!(first.path_string(), "[0]");
}

#[test]
fn elements_are_visited_in_index_order() {
    let mixed = vec![
        A { k: String::new(), v: 42 },
        A { k: "key".into(), v: 42 },
        A { k: String::new(), v: 1 },
    ];

    let failure = validate_self_recursively(&mixed).unwrap_err();
    assert_eq!(failure.message(), "non-empty key");
    assert_eq!(failure.path_string(), "[1]");
}

#[test]
fn arrays_and_deques_are_sequences() {
    let array = [A::with_value(42), A::with_value(7)];
    expect_failure(validate_self_recursively(&array), "wrong value");

    let deque: VecDeque<A> = values(&[42, 42, 3]).into();
    let failure = validate_self_recursively(&deque).unwrap_err();
    assert_eq!(failure.path_string(), "[2]");
}

#[test]
fn nested_sequences_report_full_path() {
    let grid = vec![values(&[42]), values(&[42, 42, 0])];

    let failure = validate_self_recursively(&grid).unwrap_err();
    assert_eq!(failure.path_string(), "[1][2]");
}

#[test]
fn absent_elements_follow_the_member_policy() {
    let with_gap = vec![Some(A::with_value(42)), None];
    let failure = validate_self_recursively(&with_gap).unwrap_err();
    assert_eq!(failure.message(), NIL_REFERENCE);
    assert_eq!(failure.path_string(), "[1]");

    let absent_rows: Vec<Option<Vec<A>>> = vec![None, Some(values(&[42]))];
    assert!(validate_self_recursively(&absent_rows).is_ok());
}

#[test]
fn sequence_fields_inside_structs_are_walked() {
    let batch = Batch {
        items: Some(values(&[42, 5])),
        boxed_items: None,
    };

    let failure = validate_self_recursively(&batch).unwrap_err();
    assert_eq!(format!("{:#}", failure), "wrong value (at items[1])");
}

struct Sheet {
    title: &'static str,
    rows: Box<[A]>,
    spare: Option<Box<[A]>>,
}

walkable!(Sheet { title, rows, spare });

#[test]
fn boxed_slices_report_the_first_failing_element() {
    let rows: Box<[A]> = values(&[42, 3, 1]).into_boxed_slice();
    let failure = validate_self_recursively(&rows).unwrap_err();
    assert_eq!(failure.message(), "wrong value");
    assert_eq!(failure.path_string(), "[1]");

    let passing: Box<[A]> = values(&[42, 42]).into_boxed_slice();
    assert!(validate_self_recursively(&passing).is_ok());
}

#[test]
fn borrowed_slices_are_sequences() {
    let owned = values(&[42, 42, 7]);
    let slice: &[A] = &owned;

    let failure = validate_self_recursively(&slice).unwrap_err();
    assert_eq!(failure.path_string(), "[2]");

    let head: &[A] = &owned[..2];
    assert!(validate_self_recursively(&head).is_ok());

    let shared: Rc<[A]> = values(&[0]).into();
    assert_eq!(validate_self_recursively(&shared).unwrap_err().path_string(), "[0]");
}

#[test]
fn absent_boxed_slice_counts_as_empty() {
    assert_eq!(<Box<[A]> as Shape>::KIND, Kind::Sequence);
    assert_eq!(<&str as Shape>::KIND, Kind::Other);

    let sheet = Sheet {
        title: "totals",
        rows: values(&[42]).into_boxed_slice(),
        spare: None::<Box<[A]>>,
    };
    assert!(validate_self_recursively(&sheet).is_ok());

    let broken = Sheet {
        title: "",
        rows: values(&[42]).into_boxed_slice(),
        spare: Some(values(&[42, 42, 5]).into_boxed_slice()),
    };
    let failure = validate_self_recursively(&broken).unwrap_err();
    assert_eq!(format!("{:#}", failure), "wrong value (at spare[2])");
}
