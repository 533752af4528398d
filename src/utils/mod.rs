//! Small helpers shared across modules.

use rand::Rng;
use uuid::Uuid;

/// Builds a v4 UUID from RNG bytes so seeded runs stay reproducible.
pub fn random_uuid(rng: &mut impl Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_same_seed_same_uuid() {
        let a = random_uuid(&mut ChaCha8Rng::seed_from_u64(5));
        let b = random_uuid(&mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(a, b);
        assert_eq!(a.get_version_num(), 4);
    }

    #[test]
    fn test_consecutive_uuids_differ() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        assert_ne!(random_uuid(&mut rng), random_uuid(&mut rng));
    }
}
