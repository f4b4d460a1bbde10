//! Display-name lookup table.
//!
//! Named actors draw a random entry; duplicates across actors are allowed
//! (the numeric id is what identifies them).

use crate::ActorRng;

/// The fixed name pool.
pub const NAMES: [&str; 50] = [
    "Erik", "Sara", "Gustav", "Hanna", "Oscar",
    "Emilia", "Johan", "Elin", "Filip", "Julia",
    "Anders", "Moa", "Sebastian", "Frida", "Axel",
    "Linnea", "Karl", "Linnéa", "Jesper", "Ida",
    "Simon", "Wilma", "David", "Ellen", "Nils",
    "Ebba", "Björn", "Evelina", "Mikael", "Jenny",
    "Maria", "Magnus", "Anna", "Daniel", "Cecilia",
    "Ludvig", "Nora", "Peter", "Emma", "Victor",
    "Felicia", "Robin", "Maja", "Jonathan", "Alma",
    "Johannes", "Elsa", "Samuel", "Tove", "Janne",
];

/// Pick a uniformly random name from [`NAMES`].
pub fn random_name(rng: &mut ActorRng) -> &'static str {
    NAMES[rng.gen_range(0..NAMES.len())]
}
