//! Random employee name generation using curated name pools.
//!
//! All generation is deterministic (same RNG seed = same names).

use crate::employee::Gender;
use crate::rng::DeskRng;

/// Deterministic name generator drawing from a fixed per-gender pool.
pub struct NameGenerator;

impl NameGenerator {
    /// Pick a name matching the given gender.
    pub fn random_name(rng: &mut DeskRng, gender: Gender) -> &'static str {
        let pool = match gender {
            Gender::Male => Self::male_names(),
            Gender::Female => Self::female_names(),
        };
        *rng.pick(pool)
    }

    fn male_names() -> &'static [&'static str] {
        &["Bahubali", "Kattappa", "Ballaldeva", "KumaraVarma", "PushpaRaj"]
    }

    fn female_names() -> &'static [&'static str] {
        &["Devasena", "Avantika", "Sivagami", "Srivalli", "Sita"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_generation_is_deterministic() {
        let mut rng1 = DeskRng::from_seed(12345);
        let mut rng2 = DeskRng::from_seed(12345);

        let name1 = NameGenerator::random_name(&mut rng1, Gender::Male);
        let name2 = NameGenerator::random_name(&mut rng2, Gender::Male);

        assert_eq!(name1, name2, "Same seed should produce same name");
    }

    #[test]
    fn names_come_from_the_matching_pool() {
        let mut rng = DeskRng::from_seed(9);
        for _ in 0..50 {
            let male = NameGenerator::random_name(&mut rng, Gender::Male);
            assert!(
                NameGenerator::male_names().contains(&male),
                "{male} not in male pool"
            );
            let female = NameGenerator::random_name(&mut rng, Gender::Female);
            assert!(
                NameGenerator::female_names().contains(&female),
                "{female} not in female pool"
            );
        }
    }
}
