use std::hash::{BuildHasher, Hasher};

/// A hasher which sends every element to the same bucket, forcing the backing map to resolve
/// membership by equality alone. Worst-case adversarial input for a hash table.
#[derive(Debug)]
pub struct CollidingHasher;

impl Hasher for CollidingHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

#[derive(Debug, Default)]
pub struct CollidingHasherBuilder;

impl BuildHasher for CollidingHasherBuilder {
    type Hasher = CollidingHasher;

    fn build_hasher(&self) -> Self::Hasher {
        CollidingHasher
    }
}
