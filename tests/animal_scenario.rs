//! Animal ⊇ Dog ⊇ Labrador, end to end.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use tola_covariant::prelude::*;

#[test]
fn test_labradors_as_animals() -> Result<()> {
    let list: CovariantList3<dyn Animal, dyn Dog, Labrador> = CovariantList::new();
    let l1 = Labrador::new("L1");
    list.bottom().add(l1.clone())?;

    let animals = list.top();
    assert_eq!(animals.len(), 1);
    assert!(same(&animals.get(0)?, &l1));

    let plain = cat("Generic");
    assert!(matches!(
        animals.add(plain.clone()),
        Err(Error::TypeMismatch { level: 1, .. })
    ));
    assert_eq!(animals.len(), 1);

    assert!(!animals.remove(&plain));
    assert_eq!(animals.len(), 1);

    let dogs = list.view::<L2>();
    assert_eq!(dogs.get(0)?.breed(), "labrador");
    Ok(())
}
