use rand::seq::SliceRandom;
use rand::Rng;

/// Ingredients offered by "surprise me"
pub const DEFAULT_POOL: &[&str] = &[
    "chicken", "beef", "pork", "egg", "rice", "lime", "bread", "tomato", "onion", "garlic",
    "cheese", "Butter", "spinach", "pepper", "salmon", "tofu", "sugar", "potatoes", "bacon",
];

/// Number of ingredients in a random suggestion
pub const DEFAULT_COUNT: usize = 2;

/// Pick up to `count` distinct ingredients from `pool`
pub fn pick_random<'a, R: Rng + ?Sized>(pool: &[&'a str], count: usize, rng: &mut R) -> Vec<&'a str> {
    pool.choose_multiple(rng, count).copied().collect()
}

/// Random comma-separated suggestion such as "chicken, tomato"
pub fn random_suggestion<S: AsRef<str>>(pool: &[S], count: usize) -> String {
    let pool: Vec<&str> = pool.iter().map(AsRef::as_ref).collect();
    pick_random(&pool, count, &mut rand::thread_rng()).join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_pick_is_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = pick_random(DEFAULT_POOL, 5, &mut rng);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(picked.len(), 5);
            assert_eq!(unique.len(), 5);
            assert!(picked.iter().all(|p| DEFAULT_POOL.contains(p)));
        }
    }

    #[test]
    fn test_count_larger_than_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_random(&["a", "b"], 5, &mut rng).len(), 2);
        assert!(pick_random(&[], 2, &mut rng).is_empty());
    }

    #[test]
    fn test_random_suggestion_format() {
        let suggestion = random_suggestion(DEFAULT_POOL, DEFAULT_COUNT);
        let parts: Vec<&str> = suggestion.split(", ").collect();
        assert_eq!(parts.len(), 2);
        assert_ne!(parts[0], parts[1]);
    }
}
