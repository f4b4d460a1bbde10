//! Fixed-ratio matching: release as soon as every class has at least its
//! share of the recipe pending.

use rv_core::{ActorClass, Element};

use crate::{ClassCounts, QuotaError, QuotaPolicy, QuotaResult, Wakeups};

/// A fixed recipe, e.g. 2 hydrogen : 1 oxygen.
///
/// Whichever arrival first makes every `pending[c] >= recipe[c]` triggers the
/// release, so the order in which classes show up does not matter.
#[derive(Clone, Debug)]
pub struct Stoichiometric<C: ActorClass> {
    recipe: ClassCounts<C>,
}

impl<C: ActorClass> Stoichiometric<C> {
    /// Build from `(class, count)` pairs.  Classes left out need zero actors.
    pub fn new<I: IntoIterator<Item = (C, usize)>>(recipe: I) -> QuotaResult<Self> {
        let recipe = ClassCounts::from_pairs(recipe);
        if recipe.is_empty() {
            return Err(QuotaError::Policy("recipe needs at least one actor".into()));
        }
        Ok(Self { recipe })
    }

    pub fn recipe(&self) -> &ClassCounts<C> {
        &self.recipe
    }

    /// How many complete groups `totals` can make: the number of releases a
    /// population with these class totals will produce in any interleaving.
    pub fn groups_for(&self, totals: &ClassCounts<C>) -> usize {
        self.recipe
            .iter()
            .map(|(class, need)| totals.of(class) / need)
            .min()
            .unwrap_or(0)
    }
}

impl Stoichiometric<Element> {
    /// H₂O: two hydrogen atoms and one oxygen atom.
    pub fn water() -> Self {
        Self {
            recipe: ClassCounts::from_pairs([(Element::Hydrogen, 2), (Element::Oxygen, 1)]),
        }
    }
}

impl<C: ActorClass> QuotaPolicy<C> for Stoichiometric<C> {
    fn group_size(&self) -> usize {
        self.recipe.total()
    }

    fn release(&self, pending: &ClassCounts<C>, arrived: C) -> Option<Wakeups<C>> {
        // An arrival of a class the recipe does not use can never complete it.
        if self.recipe.of(arrived) == 0 {
            return None;
        }
        self.recipe
            .iter()
            .all(|(class, need)| pending.of(class) >= need)
            .then(|| self.recipe.clone())
    }
}
