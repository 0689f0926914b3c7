use std::num::NonZeroU16;

use crate::locator::{GrammarLocator, NameLocator};

fn id(n: u16) -> Option<NonZeroU16> {
    NonZeroU16::new(n)
}

#[test]
fn ids_follow_registration_order() {
    let locator = NameLocator::new()
        .validator("NUM")
        .validator("PLUS")
        .actor("PUSH");

    assert_eq!(locator.find_validator("NUM"), id(1));
    assert_eq!(locator.find_validator("PLUS"), id(2));
    assert_eq!(locator.find_actor("PUSH"), id(1));
    assert_eq!(locator.find_validator("PUSH"), None);
    assert_eq!(locator.find_actor("missing"), None);
}

#[test]
fn re_registering_keeps_the_id() {
    let mut locator = NameLocator::new();
    assert_eq!(locator.add_actor("A"), id(1));
    assert_eq!(locator.add_actor("B"), id(2));
    assert_eq!(locator.add_actor("A"), id(1));
    assert_eq!(locator.actors().count(), 2);
}

#[test]
fn reverse_lookup() {
    let locator = NameLocator::new().validator("NUM").actor("PUSH");
    assert_eq!(locator.validator_name(NonZeroU16::MIN), Some("NUM"));
    assert_eq!(locator.actor_name(NonZeroU16::MIN), Some("PUSH"));
    assert_eq!(locator.actor_name(NonZeroU16::new(2).unwrap()), None);

    let names: Vec<_> = locator.validators().map(|(_, name)| name).collect();
    assert_eq!(names, ["NUM"]);
}

#[test]
fn references_are_locators() {
    fn lookup(locator: impl GrammarLocator) -> Option<NonZeroU16> {
        locator.find_validator("NUM")
    }
    let locator = NameLocator::new().validator("NUM");
    assert_eq!(lookup(&locator), id(1));
}
