//! Validator and actor name lookup.

use std::num::NonZeroU16;

use indexmap::IndexSet;

/// Resolves the names in `validator>actor` terminals to ids.
///
/// Ids are nonzero; zero is reserved for "absent". Any id above
/// [`MAX_INDEX`](rulewalk_bytecode::MAX_INDEX) is rejected by the compiler.
pub trait GrammarLocator {
    fn find_validator(&self, name: &str) -> Option<NonZeroU16>;
    fn find_actor(&self, name: &str) -> Option<NonZeroU16>;
}

impl<T: GrammarLocator + ?Sized> GrammarLocator for &T {
    fn find_validator(&self, name: &str) -> Option<NonZeroU16> {
        (*self).find_validator(name)
    }

    fn find_actor(&self, name: &str) -> Option<NonZeroU16> {
        (*self).find_actor(name)
    }
}

/// Locator backed by two name tables. Ids follow registration order,
/// starting at 1.
#[derive(Debug, Clone, Default)]
pub struct NameLocator {
    validators: IndexSet<String>,
    actors: IndexSet<String>,
}

impl NameLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validator(mut self, name: impl Into<String>) -> Self {
        self.add_validator(name);
        self
    }

    pub fn actor(mut self, name: impl Into<String>) -> Self {
        self.add_actor(name);
        self
    }

    /// Registers a validator; re-registering returns the existing id.
    ///
    /// `None` once the table outgrows 16-bit ids.
    pub fn add_validator(&mut self, name: impl Into<String>) -> Option<NonZeroU16> {
        let (index, _) = self.validators.insert_full(name.into());
        id_for(index)
    }

    pub fn add_actor(&mut self, name: impl Into<String>) -> Option<NonZeroU16> {
        let (index, _) = self.actors.insert_full(name.into());
        id_for(index)
    }

    pub fn validator_name(&self, id: NonZeroU16) -> Option<&str> {
        self.validators
            .get_index(usize::from(id.get()) - 1)
            .map(String::as_str)
    }

    pub fn actor_name(&self, id: NonZeroU16) -> Option<&str> {
        self.actors
            .get_index(usize::from(id.get()) - 1)
            .map(String::as_str)
    }

    pub fn validators(&self) -> impl Iterator<Item = (NonZeroU16, &str)> {
        entries(&self.validators)
    }

    pub fn actors(&self) -> impl Iterator<Item = (NonZeroU16, &str)> {
        entries(&self.actors)
    }
}

impl GrammarLocator for NameLocator {
    fn find_validator(&self, name: &str) -> Option<NonZeroU16> {
        self.validators.get_index_of(name).and_then(id_for)
    }

    fn find_actor(&self, name: &str) -> Option<NonZeroU16> {
        self.actors.get_index_of(name).and_then(id_for)
    }
}

fn id_for(index: usize) -> Option<NonZeroU16> {
    u16::try_from(index + 1).ok().and_then(NonZeroU16::new)
}

fn entries(names: &IndexSet<String>) -> impl Iterator<Item = (NonZeroU16, &str)> {
    names
        .iter()
        .enumerate()
        .map_while(|(i, name)| Some((id_for(i)?, name.as_str())))
}
