use deep_check::{
    is_valid, validate, validate_self_recursively, validate_tags, Failure, FieldNilPolicy,
    NoTagRules, TagRules, Validator, WalkerConfig,
};

use crate::fixtures::*;

fn key_required(a: &A) -> Result<(), Failure> {
    if a.k.is_empty() {
        Err("k: required".into())
    } else {
        Ok(())
    }
}

struct Counted {
    counter: Counter,
    name: String,
}

deep_check::walkable!(Counted { counter, name });

#[test]
fn tag_rule_failure_short_circuits_the_walk() {
    let counted = Counted {
        counter: Counter::default(),
        name: String::new(),
    };
    let rules = |c: &Counted| -> Result<(), Failure> {
        if c.name.is_empty() {
            Err("name: required".into())
        } else {
            Ok(())
        }
    };

    let failure = validate(&rules, &counted).unwrap_err();
    assert_eq!(failure.message(), "name: required");
    assert_eq!(counted.counter.hits.get(), 0);
}

#[test]
fn walk_runs_after_passing_tag_rules() {
    let counted = Counted {
        counter: Counter::default(),
        name: "set".into(),
    };
    let rules = |_: &Counted| -> Result<(), Failure> { Ok(()) };

    assert!(validate(&rules, &counted).is_ok());
    assert_eq!(counted.counter.hits.get(), 1);
}

#[test]
fn self_check_failure_surfaces_through_validate() {
    let keyed = A { k: "key".into(), v: 42 };

    let failure = validate(&key_required, &keyed).unwrap_err();
    assert_eq!(failure.message(), "non-empty key");
}

#[test]
fn rules_and_self_checks_can_reject_for_different_reasons() {
    let unkeyed = A::with_value(42);

    assert_eq!(validate(&key_required, &unkeyed).unwrap_err().message(), "k: required");
    assert!(validate_self_recursively(&unkeyed).is_ok());
    assert!(validate_tags(&key_required, &unkeyed).is_err());
}

#[test]
fn is_valid_mirrors_validate() {
    assert!(is_valid(&NoTagRules, &A::with_value(42)));
    assert!(!is_valid(&NoTagRules, &A::with_value(1)));
    assert!(!is_valid(&key_required, &A::with_value(42)));
}

#[test]
fn no_tag_rules_accepts_anything() {
    assert!(NoTagRules.check(&A::with_value(0)).is_ok());
    assert!(validate_tags(&NoTagRules, "not walkable either").is_ok());
}

#[test]
fn validator_applies_rules_and_walker_config() {
    let validator = Validator::new(|c: &C| -> Result<(), Failure> {
        match &c.b {
            Some(b) if !b.valid => Err("b.valid: must be true".into()),
            _ => Ok(()),
        }
    });

    let empty = C { b: None };
    assert_eq!(
        validator.validate(&empty).unwrap_err().message(),
        "object is invalid: nil reference"
    );

    let lenient = validator.with_config(WalkerConfig::new().field_nil(FieldNilPolicy::Ignore));
    assert!(lenient.is_valid(&empty));
    assert_eq!(lenient.walker().config().field_nil_policy(), FieldNilPolicy::Ignore);

    let invalid = C {
        b: Some(Box::new(B { valid: false, a: A::with_value(42) })),
    };
    assert_eq!(
        lenient.validate(&invalid).unwrap_err().message(),
        "b.valid: must be true"
    );
    assert_eq!(lenient.validate_self(&invalid).unwrap_err().message(), "not valid");
    assert!(lenient.validate_tags(&invalid).is_err());
}

#[test]
fn default_validator_only_walks() {
    let validator: Validator = Validator::default();

    assert!(validator.is_valid(&vec![A::with_value(42)]));
    assert_eq!(
        validator.validate(&vec![A::with_value(42), A::with_value(0)]).unwrap_err().message(),
        "wrong value"
    );
}
