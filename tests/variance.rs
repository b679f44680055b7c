//! Writes through an ancestor level accept only bottom-type values;
//! lookups with other values quietly find nothing.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use tola_covariant::prelude::*;

fn is_mismatch<T>(result: Result<T>, level: usize) -> bool {
    matches!(result, Err(Error::TypeMismatch { level: l, .. }) if l == level)
}

#[test]
fn test_writes_of_foreign_values_are_rejected() {
    let list = pets(&["Rex"]);

    assert!(is_mismatch(list.top().add(cat("Tom")), 1));
    assert!(is_mismatch(list.top().set(0, cat("Tom")), 1));
    assert!(is_mismatch(list.view::<L2>().add(poodle("Fifi")), 2));
    assert!(is_mismatch(list.view::<L2>().insert(0, poodle("Fifi")), 2));

    assert_eq!(names(&list), vec!["Rex"]);
}

#[test]
fn test_mismatch_names_the_bottom_type() {
    let list = pets(&[]);
    match list.top().add(cat("Tom")) {
        Err(Error::TypeMismatch { expected, level }) => {
            assert!(expected.ends_with("Labrador"));
            assert_eq!(level, 1);
        }
        other => panic!("expected a type mismatch, got {:?}", other),
    }
}

#[test]
fn test_type_is_checked_before_index() {
    let list = pets(&["Rex"]);
    assert!(is_mismatch(list.top().insert(9, cat("Tom")), 1));
    assert!(is_mismatch(list.top().set(9, cat("Tom")), 1));
    assert_eq!(
        list.top().insert(9, Labrador::new("Max")),
        Err(Error::IndexOutOfRange { index: 9, len: 1 })
    );
}

#[test]
fn test_genuine_values_pass_through_ancestor_handles() {
    let list = pets(&[]);
    let as_animal: Rc<dyn Animal> = Labrador::new("Rex");
    let as_dog: Rc<dyn Dog> = Labrador::new("Fido");

    list.top().add(as_animal.clone()).unwrap();
    list.view::<L2>().insert(0, as_dog).unwrap();
    assert_eq!(names(&list), vec!["Fido", "Rex"]);

    let stored = list.bottom().get(1).unwrap();
    assert!(same(&stored, &as_animal));
}

#[test]
fn test_lookups_with_foreign_values_find_nothing() {
    let list = pets(&["Rex"]);
    let tom = cat("Tom");

    assert!(!list.top().contains(&tom));
    assert_eq!(list.top().index_of(&tom), None);
    assert_eq!(list.top().last_index_of(&tom), None);
    assert!(!list.top().remove(&tom));
    assert_eq!(list.top().binary_search(&tom), None);
    assert_eq!(list.top().index_of_from(&tom, 0), Ok(None));
    assert_eq!(list.top().index_of_in(&tom, 0, 1), Ok(None));
    assert_eq!(list.top().last_index_of_in(&tom, 0, 1), Ok(None));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_bounded_lookups_validate_range_before_probe() {
    let list = pets(&["Rex"]);
    let tom = cat("Tom");

    assert!(list.top().index_of_from(&tom, 2).is_err());
    assert_eq!(
        list.top().index_of_in(&tom, 1, 1),
        Err(Error::RangeOutOfBounds { index: 1, count: 1, len: 1 })
    );
    assert!(list.top().last_index_of_in(&tom, 1, 1).is_err());
    assert!(
        list.top()
            .binary_search_range_by(0, 2, &tom, |a, b| a.name().cmp(b.name()))
            .is_err()
    );
}

#[test]
fn test_lookups_compare_by_value() {
    let list = pets(&["Rex", "Fido", "Rex"]);
    let rex: Rc<dyn Animal> = Labrador::new("Rex");

    assert!(list.top().contains(&rex));
    assert_eq!(list.top().index_of(&rex), Some(0));
    assert_eq!(list.top().last_index_of(&rex), Some(2));
    assert_eq!(list.top().index_of_from(&rex, 1), Ok(Some(2)));
    assert_eq!(list.top().last_index_of_in(&rex, 1, 2), Ok(Some(0)));

    assert!(list.view::<L2>().remove(&(Labrador::new("Fido") as Rc<dyn Dog>)));
    assert_eq!(names(&list), vec!["Rex", "Rex"]);
}

#[test]
fn test_bottom_level_writes_never_mismatch() {
    let list = pets(&[]);
    for name in ["a", "b", "c"] {
        list.bottom().add(Labrador::new(name)).unwrap();
    }
    list.bottom().set(1, Labrador::new("z")).unwrap();
    assert_eq!(names(&list), vec!["a", "z", "c"]);
}
