use {
    bevy::prelude::*,
    rand::{SeedableRng, rngs::StdRng},
};

/// The single source of randomness for shuffles, hints and placement jitter.
///
/// Injected as a resource so tests can pin a seed and assert deterministic
/// behavior; the running game seeds from OS entropy.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct GameRng(pub StdRng);

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}
