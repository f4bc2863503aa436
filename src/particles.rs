use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Canvas area (square pixels) per particle
const AREA_PER_PARTICLE: f32 = 9000.0;

/// Particle radius range [min, max)
const MIN_SIZE: f32 = 1.0;
const MAX_SIZE: f32 = 3.0;

/// Max absolute velocity component at creation
const MAX_SPEED: f32 = 0.2;

/// Distance a particle is shoved per frame while inside the pointer radius
const REPULSION_STEP: f32 = 5.0;

/// Particles within `size * REPULSION_EDGE_FACTOR` of an edge are not shoved toward it
const REPULSION_EDGE_FACTOR: f32 = 10.0;

/// Mouse position over the canvas and its influence radius
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    /// None until the first motion event arrives
    pub position: Option<(f32, f32)>,
    pub radius: f32,
}

impl Pointer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            position: None,
            radius: Self::radius_for(width, height),
        }
    }

    pub fn radius_for(width: f32, height: f32) -> f32 {
        (height / 100.0) * (width / 100.0)
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Some((x, y));
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.radius = Self::radius_for(width, height);
    }
}

/// A single drifting dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub direction_x: f32,
    pub direction_y: f32,
    pub size: f32,
}

impl Particle {
    /// Advance one frame: reflect at the canvas edges, dodge the pointer, then move
    pub fn update(&mut self, width: f32, height: f32, pointer: &Pointer) {
        if self.x > width || self.x < 0.0 {
            self.direction_x = -self.direction_x;
        }
        if self.y > height || self.y < 0.0 {
            self.direction_y = -self.direction_y;
        }

        if let Some((px, py)) = pointer.position {
            let dx = px - self.x;
            let dy = py - self.y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance < pointer.radius + self.size {
                let guard = self.size * REPULSION_EDGE_FACTOR;
                if px < self.x && self.x < width - guard {
                    self.x += REPULSION_STEP;
                }
                if px > self.x && self.x > guard {
                    self.x -= REPULSION_STEP;
                }
                if py < self.y && self.y < height - guard {
                    self.y += REPULSION_STEP;
                }
                if py > self.y && self.y > guard {
                    self.y -= REPULSION_STEP;
                }
            }
        }

        self.x += self.direction_x;
        self.y += self.direction_y;
    }
}

/// Ambient particle backdrop state
pub struct ParticleField {
    pub width: f32,
    pub height: f32,
    pub particles: Vec<Particle>,
    pub paused: bool,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Deterministic field for reproducible runs
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: f32, height: f32, rng: StdRng) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            paused: false,
            rng,
        };
        field.reinitialize();
        field
    }

    /// Number of particles a canvas of this size holds
    pub fn particle_count_for(width: f32, height: f32) -> usize {
        ((width * height) / AREA_PER_PARTICLE).floor().max(0.0) as usize
    }

    /// Discard every particle and spawn a fresh batch sized to the canvas
    pub fn reinitialize(&mut self) {
        let count = Self::particle_count_for(self.width, self.height);
        self.particles.clear();
        self.particles.reserve(count);

        for _ in 0..count {
            let size = self.rng.gen_range(MIN_SIZE..MAX_SIZE);
            let x = self.inset_sample(self.width, size * 2.0);
            let y = self.inset_sample(self.height, size * 2.0);
            let direction_x = self.rng.gen_range(-MAX_SPEED..MAX_SPEED);
            let direction_y = self.rng.gen_range(-MAX_SPEED..MAX_SPEED);

            self.particles.push(Particle {
                x,
                y,
                direction_x,
                direction_y,
                size,
            });
        }

        log::debug!(
            "spawned {} particles on {}x{} canvas",
            count,
            self.width,
            self.height
        );
    }

    /// Uniform position in [inset, extent - inset), or the midpoint when the axis is too short
    fn inset_sample(&mut self, extent: f32, inset: f32) -> f32 {
        let span = extent - inset * 2.0;
        if span > 0.0 {
            self.rng.gen::<f32>() * span + inset
        } else {
            extent / 2.0
        }
    }

    /// Advance every particle by one frame
    pub fn step(&mut self, pointer: &Pointer) {
        if self.paused {
            return;
        }
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.update(width, height, pointer);
        }
    }

    /// Resize the canvas and regenerate all particles
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.reinitialize();
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}
