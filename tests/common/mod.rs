//! Shared hierarchies for the integration tests.
//!
//! ```text
//! Animal ⊇ Dog ⊇ Labrador          (Cat: Animal only, Poodle: Dog only)
//! Entity ⊇ Organism ⊇ Mammal ⊇ Canine ⊇ Wolf
//! ```

#![allow(dead_code)]

use tola_covariant::prelude::*;
use tola_covariant::chain;

// =============================================================================
// Animal ⊇ Dog ⊇ Labrador
// =============================================================================

pub trait Animal: Object {
    fn name(&self) -> &str;
}

pub trait Dog: Animal {
    fn breed(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Subtype)]
#[is_a(dyn Animal, dyn Dog)]
pub struct Labrador {
    pub name: String,
}

impl Labrador {
    pub fn new(name: &str) -> Rc<Self> {
        Rc::new(Labrador {
            name: name.to_string(),
        })
    }
}

impl Animal for Labrador {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Dog for Labrador {
    fn breed(&self) -> &str {
        "labrador"
    }
}

/// An animal that is not a dog.
#[derive(Debug)]
pub struct Cat {
    pub name: String,
}

impl Animal for Cat {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A dog that is not a labrador.
#[derive(Debug)]
pub struct Poodle {
    pub name: String,
}

impl Animal for Poodle {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Dog for Poodle {
    fn breed(&self) -> &str {
        "poodle"
    }
}

pub type Pets = chain![dyn Animal, dyn Dog, Labrador];

pub fn cat(name: &str) -> Rc<dyn Animal> {
    Rc::new(Cat {
        name: name.to_string(),
    })
}

pub fn poodle(name: &str) -> Rc<dyn Dog> {
    Rc::new(Poodle {
        name: name.to_string(),
    })
}

/// Pets list holding labradors with the given names, in order.
pub fn pets(names: &[&str]) -> CovariantList<Pets> {
    names.iter().map(|name| Labrador::new(name)).collect()
}

/// Names seen through the top level.
pub fn names(list: &CovariantList<Pets>) -> Vec<String> {
    list.top()
        .to_vec()
        .iter()
        .map(|animal| animal.name().to_string())
        .collect()
}

/// Whether two handles point at the same allocation.
pub fn same<A: ?Sized, B: ?Sized>(a: &Rc<A>, b: &Rc<B>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

// =============================================================================
// Entity ⊇ Organism ⊇ Mammal ⊇ Canine ⊇ Wolf
// =============================================================================

pub trait Entity: Object {
    fn id(&self) -> u32;
}

pub trait Organism: Entity {}
pub trait Mammal: Organism {}
pub trait Canine: Mammal {}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Subtype)]
#[is_a(dyn Entity, dyn Organism)]
#[is_a(dyn Mammal, dyn Canine)]
pub struct Wolf {
    pub id: u32,
}

impl Wolf {
    pub fn new(id: u32) -> Rc<Self> {
        Rc::new(Wolf { id })
    }
}

impl Entity for Wolf {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Organism for Wolf {}
impl Mammal for Wolf {}
impl Canine for Wolf {}

/// A mammal that is not a wolf.
#[derive(Debug)]
pub struct Whale;

impl Entity for Whale {
    fn id(&self) -> u32 {
        0
    }
}

impl Organism for Whale {}
impl Mammal for Whale {}
