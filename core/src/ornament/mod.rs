use crate::*;
use alloc::vec::Vec;
use rand::rngs::SmallRng;

pub use random::*;

mod random;

/// A decorative, non-interactive particle placed from random samples.
pub trait Ornament: Sized {
    /// How many are scattered when the caller does not ask for a specific amount.
    const DEFAULT_COUNT: usize;

    /// `index` is the position within the batch, some kinds stagger by it.
    fn sample(index: usize, rng: &mut SmallRng) -> Self;
}

/// Emoji drifting up and down behind the page.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FloatingMotif {
    /// Percent of the viewport
    pub top: f64,
    /// Percent of the viewport
    pub left: f64,
    /// Font size in pixels
    pub size: f64,
    /// Seconds
    pub duration: f64,
    /// Seconds
    pub delay: f64,
    pub emoji: &'static str,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Balloon {
    pub left: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
    /// Degrees, applied as a hue-rotate filter
    pub hue: i16,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ribbon {
    pub top: f64,
    pub left: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Petal {
    pub left: f64,
    pub delay: f64,
    pub duration: f64,
    /// Degrees, one decimal
    pub rotation: f64,
    pub emoji: &'static str,
}

/// Puff rising out of the genie's lamp, puffs are staggered by their index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SmokePuff {
    pub left: f64,
    pub delay: f64,
    pub duration: f64,
    /// Diameter in pixels
    pub size: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sparkle {
    pub top: f64,
    pub left: f64,
    pub size: f64,
    pub delay: f64,
}

/// Piece of the celebratory burst. Horizontal placement is a fraction of the viewport width so it follows resizes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    /// Fraction of the viewport width, `0.0..1.0`
    pub x: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
    /// Degrees on the color wheel
    pub hue: u16,
    /// Total rotation in degrees over one fall
    pub spin: f64,
    /// Horizontal sway in pixels over one fall
    pub drift: f64,
}

/// Everything behind the page, scattered once per mount.
#[derive(Clone, Debug, PartialEq)]
pub struct Backdrop {
    pub floating: Vec<FloatingMotif>,
    pub balloons: Vec<Balloon>,
    pub ribbons: Vec<Ribbon>,
}

impl Backdrop {
    /// Static blurred blobs, their placement is done in the stylesheet.
    pub const BLOB_COUNT: usize = 8;
    /// Distinct blob styles, blobs cycle through them.
    pub const BLOB_STYLES: usize = 5;

    pub fn generate(seed: u64) -> Self {
        let mut ornaments = RandomOrnaments::new(seed);
        Self {
            floating: ornaments.scatter_default(),
            balloons: ornaments.scatter_default(),
            ribbons: ornaments.scatter_default(),
        }
    }
}

/// Scene specific particle effect.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneDressing {
    Petals(Vec<Petal>),
    Smoke(Vec<SmokePuff>),
    Sparkles(Vec<Sparkle>),
}

impl SceneDressing {
    pub fn petals(&self) -> &[Petal] {
        match self {
            SceneDressing::Petals(petals) => petals,
            _ => &[],
        }
    }

    pub fn smoke(&self) -> &[SmokePuff] {
        match self {
            SceneDressing::Smoke(smoke) => smoke,
            _ => &[],
        }
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        match self {
            SceneDressing::Sparkles(sparkles) => sparkles,
            _ => &[],
        }
    }
}

/// Particles of one opened overlay, scattered once when it opens.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneOrnaments {
    pub scene: Scene,
    pub dressing: SceneDressing,
    pub confetti: Vec<ConfettiPiece>,
}

impl SceneOrnaments {
    pub fn generate(scene: Scene, seed: u64) -> Self {
        let mut ornaments = RandomOrnaments::new(seed);
        let dressing = match scene {
            Scene::Flowers => SceneDressing::Petals(ornaments.scatter_default()),
            Scene::Genie => SceneDressing::Smoke(ornaments.scatter_default()),
            Scene::Video => SceneDressing::Sparkles(ornaments.scatter_default()),
        };
        let confetti = ornaments.scatter(scene.burst_pieces());
        Self {
            scene,
            dressing,
            confetti,
        }
    }
}
