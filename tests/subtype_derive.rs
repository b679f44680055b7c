//! `#[derive(Subtype)]` and `is_a!` declare the same relations.

mod common;

use common::*;
use tola_covariant::prelude::*;
use tola_covariant::Ancestor;

trait Shape: Object {
    fn area(&self) -> u32;
}

trait Polygon: Shape {
    fn sides(&self) -> u32;
}

#[derive(Debug, PartialEq)]
struct Square(u32);

impl Shape for Square {
    fn area(&self) -> u32 {
        self.0 * self.0
    }
}

impl Polygon for Square {
    fn sides(&self) -> u32 {
        4
    }
}

tola_covariant::is_a!(Square: dyn Shape, dyn Polygon);

#[derive(Debug, PartialEq, Subtype)]
#[is_a(dyn Shape)]
struct Tagged<T: 'static> {
    side: u32,
    tag: T,
}

impl<T: 'static> Shape for Tagged<T> {
    fn area(&self) -> u32 {
        self.side * self.side
    }
}

#[test]
fn test_macro_declared_relation() {
    let square = Rc::new(Square(3));
    let shape = <Square as IsA<dyn Shape>>::upcast(square.clone());
    assert_eq!(shape.area(), 9);

    let back = <Square as IsA<dyn Shape>>::downcast(&shape).unwrap();
    assert!(Rc::ptr_eq(&back, &square));
    assert_eq!(<Square as IsA<dyn Polygon>>::upcast_ref(&square).sides(), 4);
}

#[test]
fn test_downcast_rejects_other_implementors() {
    let tagged: Rc<dyn Shape> = Rc::new(Tagged { side: 2, tag: "x" });
    assert!(<Square as IsA<dyn Shape>>::downcast(&tagged).is_none());
    assert!(<Tagged<&'static str> as IsA<dyn Shape>>::downcast(&tagged).is_some());
    assert!(<Tagged<u8> as IsA<dyn Shape>>::downcast(&tagged).is_none());
}

#[test]
fn test_derived_relation_through_ancestor() {
    let rex = Labrador::new("Rex");
    let dog = <dyn Dog as Ancestor<Labrador>>::widen(rex.clone());
    assert_eq!(dog.breed(), "labrador");
    assert!(<dyn Dog as Ancestor<Labrador>>::narrow(&dog).is_some());

    let fifi = poodle("Fifi");
    assert!(<dyn Dog as Ancestor<Labrador>>::narrow(&fifi).is_none());
}

#[test]
fn test_repeated_attributes_accumulate() {
    let wolf = Wolf::new(4);
    let canine = <Wolf as IsA<dyn Canine>>::upcast(wolf.clone());
    let entity = <Wolf as IsA<dyn Entity>>::upcast(wolf);
    assert_eq!(canine.id(), entity.id());
}

#[test]
fn test_every_type_is_its_own_subtype() {
    let square = Rc::new(Square(1));
    assert!(<Square as IsA<Square>>::downcast(&square).is_some());
}

#[test]
fn test_generic_subtype_in_a_list() {
    let list: CovariantList2<dyn Shape, Tagged<u8>> = CovariantList::new();
    list.bottom().add(Rc::new(Tagged { side: 3, tag: 1 })).unwrap();
    assert_eq!(list.top().get(0).unwrap().area(), 9);
    assert!(list.top().add(Rc::new(Square(1))).is_err());
    assert_eq!(list.bottom().get(0).unwrap().tag, 1);
}
