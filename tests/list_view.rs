//! Generic access to levels: `ListView`, `ListAt` and read-only façades.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use tola_covariant::prelude::*;

fn all_names(animals: &impl ListView<Item = dyn Animal>) -> Vec<String> {
    animals
        .iter()
        .map(|animal| animal.map(|animal| animal.name().to_string()))
        .collect::<Result<_>>()
        .unwrap_or_default()
}

fn adopt(dogs: &impl ListView<Item = dyn Dog>, dog: Rc<dyn Dog>) -> Result<usize> {
    dogs.add(dog)?;
    Ok(dogs.len())
}

fn count_dogs(list: &impl ListAt<L2, Item = dyn Dog>) -> usize {
    list.at_level().len()
}

#[test]
fn test_list_view_accepts_any_matching_level() {
    let list = pets(&["Rex", "Fido"]);
    assert_eq!(all_names(&list.top()), vec!["Rex", "Fido"]);

    let mixed: CovariantList<Chain2<dyn Animal, Labrador>> = list.unwrap().into();
    assert_eq!(all_names(&mixed.top()), vec!["Rex", "Fido"]);
}

#[test]
fn test_list_view_writes_are_checked() {
    let list = pets(&[]);
    let dogs = list.view::<L2>();
    assert_eq!(adopt(&dogs, Labrador::new("Rex")), Ok(1));
    assert!(adopt(&dogs, poodle("Fifi")).is_err());
    assert_eq!(ListView::len(&dogs), 1);

    let rex: Rc<dyn Dog> = Labrador::new("Rex");
    assert!(ListView::contains(&dogs, &rex));
    assert_eq!(ListView::index_of(&dogs, &rex), Some(0));
    assert!(ListView::remove(&dogs, &rex));
    assert!(ListView::is_empty(&dogs));
}

#[test]
fn test_list_at_selects_a_level() {
    let list = pets(&["a", "b"]);
    assert_eq!(count_dogs(&list), 2);
    let top = ListAt::<L1>::at_level(&list);
    assert_eq!(ListView::get(&top, 1).unwrap().name(), "b");
}

#[test]
fn test_read_only_is_live() {
    let list = pets(&["a"]);
    let read_only = list.top().as_read_only();
    assert_eq!(read_only.len(), 1);

    list.bottom().add(Labrador::new("b")).unwrap();
    assert_eq!(read_only.len(), 2);
    assert_eq!(read_only.get(1).unwrap().name(), "b");
    assert_eq!(read_only.index_of(&(Labrador::new("b") as Rc<dyn Animal>)), Some(1));
    assert!(!read_only.contains(&cat("a")));
    assert!(read_only.exists(|animal| animal.name() == "a"));
    assert_eq!(read_only.iter().count(), 2);

    let names: Vec<String> = read_only
        .into_iter()
        .map(|animal| animal.unwrap().name().to_string())
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}
