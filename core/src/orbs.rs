pub const BACKDROP_FILL: &str = "#f5f5f4";

const RADIUS_MIN: f64 = 100.0;
const RADIUS_RANGE: f64 = 200.0;
const SPEED_RANGE: f64 = 0.2;
const ALPHA_MIN: f64 = 0.1;
const ALPHA_RANGE: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Gray,
    Stone,
    Teal,
    Indigo,
    Purple,
}

impl Tint {
    pub const PALETTE: [Tint; 5] = [Tint::Gray, Tint::Stone, Tint::Teal, Tint::Indigo, Tint::Purple];

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Tint::Gray => (229, 231, 235),
            Tint::Stone => (214, 211, 209),
            Tint::Teal => (204, 251, 241),
            Tint::Indigo => (224, 231, 255),
            Tint::Purple => (250, 245, 255),
        }
    }

    pub fn rgba(self, alpha: f64) -> String {
        let (r, g, b) = self.rgb();
        format!("rgba({r}, {g}, {b}, {alpha})")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub dx: f64,
    pub dy: f64,
    pub tint: Tint,
    pub alpha: f64,
}

impl Orb {
    fn step(&mut self, width: f64, height: f64) {
        self.x += self.dx;
        self.y += self.dy;
        if self.x < -self.radius || self.x > width + self.radius {
            self.dx = -self.dx;
        }
        if self.y < -self.radius || self.y > height + self.radius {
            self.dy = -self.dy;
        }
    }
}

/// Soft gradient blobs drifting behind the book.
#[derive(Clone, Debug)]
pub struct OrbField {
    width: f64,
    height: f64,
    orbs: Vec<Orb>,
}

impl OrbField {
    pub fn spawn(width: f64, height: f64, count: usize, seed: u64) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let mut rng = SplitMix::new(seed);
        let orbs = (0..count)
            .map(|_| {
                let x = rng.next_unit() * width;
                let y = rng.next_unit() * height;
                let radius = RADIUS_MIN + rng.next_unit() * RADIUS_RANGE;
                let dx = (rng.next_unit() - 0.5) * SPEED_RANGE;
                let dy = (rng.next_unit() - 0.5) * SPEED_RANGE;
                let tint_index = (rng.next_unit() * Tint::PALETTE.len() as f64) as usize;
                let tint = Tint::PALETTE[tint_index.min(Tint::PALETTE.len() - 1)];
                let alpha = ALPHA_MIN + rng.next_unit() * ALPHA_RANGE;
                Orb {
                    x,
                    y,
                    radius,
                    dx,
                    dy,
                    tint,
                    alpha,
                }
            })
            .collect();
        Self {
            width,
            height,
            orbs,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for orb in &mut self.orbs {
            orb.step(width, height);
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = if width.is_finite() { width.max(1.0) } else { 1.0 };
        self.height = if height.is_finite() { height.max(1.0) } else { 1.0 };
    }
}

struct SplitMix {
    state: u64,
}

impl SplitMix {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / ((1u64 << 53) as f64)
    }
}
