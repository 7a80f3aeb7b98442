/// Number of points sampled from the model surface.
pub const PARTICLE_COUNT: usize = 20_000;

/// Edge length of each particle quad in world units.
pub const PARTICLE_SIZE: f32 = 0.01;

/// Alpha below which sprite fragments are discarded.
pub const PARTICLE_ALPHA_CUTOFF: f32 = 0.5;

/// Side length in pixels of the generated circle sprite.
pub const SPRITE_RESOLUTION: u32 = 64;

/// Vertical travel of the particle cloud bob, world units.
pub const BOB_AMPLITUDE: f32 = 0.2;

/// Seconds for one leg (up or down) of the bob.
pub const BOB_HALF_PERIOD: f32 = 2.0;
