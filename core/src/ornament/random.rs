use super::*;
use core::ops::Range;
use rand::prelude::*;

const FLOATING_EMOJI: &[&str] = &["✨", "🎀", "🎂", "💖", "🌈", "💫", "🌸", "🪄", "🎈"];
const PETAL_EMOJI: &[&str] = &["🌸", "🌺", "🌷"];

const PERCENT: Range<f64> = 0.0..100.0;

const FLOATING_SIZE: Range<f64> = 16.0..36.0;
const FLOATING_DURATION: Range<f64> = 8.0..20.0;
const FLOATING_DELAY: Range<f64> = 0.0..6.0;

const BALLOON_SIZE: Range<f64> = 20.0..50.0;
const BALLOON_DURATION: Range<f64> = 14.0..26.0;
const BALLOON_DELAY: Range<f64> = 0.0..8.0;
const BALLOON_HUE: Range<i16> = -20..40;

const RIBBON_SIZE: Range<f64> = 18.0..40.0;
const RIBBON_DURATION: Range<f64> = 5.0..11.0;
const RIBBON_DELAY: Range<f64> = 0.0..5.0;

const PETAL_DELAY: Range<f64> = 0.0..6.0;
const PETAL_DURATION: Range<f64> = 6.0..12.0;
/// Tenths of a degree
const PETAL_ROTATION: Range<i16> = -300..300;

const SMOKE_LEFT: Range<f64> = 42.0..58.0;
const SMOKE_STAGGER: f64 = 0.28;
const SMOKE_DURATION: Range<f64> = 5.0..8.0;
const SMOKE_SIZE: Range<f64> = 14.0..34.0;

const SPARKLE_SIZE: Range<f64> = 2.0..6.0;
const SPARKLE_DELAY: Range<f64> = 0.0..3.0;

const CONFETTI_SIZE: Range<f64> = 6.0..12.0;
const CONFETTI_DURATION: Range<f64> = 3.0..6.0;
const CONFETTI_DELAY: Range<f64> = 0.0..2.5;
const CONFETTI_HUE: Range<u16> = 0..360;
const CONFETTI_SPIN: Range<f64> = -540.0..540.0;
const CONFETTI_DRIFT: Range<f64> = -60.0..60.0;

fn pick(rng: &mut SmallRng, choices: &'static [&'static str]) -> &'static str {
    choices[rng.random_range(0..choices.len())]
}

/// Uniform sampling for every ornament kind, seeded so a layout can be reproduced.
#[derive(Clone, Debug)]
pub struct RandomOrnaments {
    rng: SmallRng,
}

impl RandomOrnaments {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn scatter<T: Ornament>(&mut self, count: usize) -> Vec<T> {
        (0..count).map(|i| T::sample(i, &mut self.rng)).collect()
    }

    pub fn scatter_default<T: Ornament>(&mut self) -> Vec<T> {
        self.scatter(T::DEFAULT_COUNT)
    }
}

impl Ornament for FloatingMotif {
    const DEFAULT_COUNT: usize = 10;

    fn sample(_index: usize, rng: &mut SmallRng) -> Self {
        Self {
            top: rng.random_range(PERCENT),
            left: rng.random_range(PERCENT),
            size: rng.random_range(FLOATING_SIZE),
            duration: rng.random_range(FLOATING_DURATION),
            delay: rng.random_range(FLOATING_DELAY),
            emoji: pick(rng, FLOATING_EMOJI),
        }
    }
}

impl Ornament for Balloon {
    const DEFAULT_COUNT: usize = 7;

    fn sample(_index: usize, rng: &mut SmallRng) -> Self {
        Self {
            left: rng.random_range(PERCENT),
            size: rng.random_range(BALLOON_SIZE),
            duration: rng.random_range(BALLOON_DURATION),
            delay: rng.random_range(BALLOON_DELAY),
            hue: rng.random_range(BALLOON_HUE),
        }
    }
}

impl Ornament for Ribbon {
    const DEFAULT_COUNT: usize = 5;

    fn sample(_index: usize, rng: &mut SmallRng) -> Self {
        Self {
            top: rng.random_range(PERCENT),
            left: rng.random_range(PERCENT),
            size: rng.random_range(RIBBON_SIZE),
            duration: rng.random_range(RIBBON_DURATION),
            delay: rng.random_range(RIBBON_DELAY),
        }
    }
}

impl Ornament for Petal {
    const DEFAULT_COUNT: usize = 28;

    fn sample(_index: usize, rng: &mut SmallRng) -> Self {
        Self {
            left: rng.random_range(PERCENT),
            delay: rng.random_range(PETAL_DELAY),
            duration: rng.random_range(PETAL_DURATION),
            rotation: f64::from(rng.random_range(PETAL_ROTATION)) / 10.0,
            emoji: pick(rng, PETAL_EMOJI),
        }
    }
}

impl Ornament for SmokePuff {
    const DEFAULT_COUNT: usize = 12;

    fn sample(index: usize, rng: &mut SmallRng) -> Self {
        Self {
            left: rng.random_range(SMOKE_LEFT),
            delay: index as f64 * SMOKE_STAGGER,
            duration: rng.random_range(SMOKE_DURATION),
            size: rng.random_range(SMOKE_SIZE),
        }
    }
}

impl Ornament for Sparkle {
    const DEFAULT_COUNT: usize = 26;

    fn sample(_index: usize, rng: &mut SmallRng) -> Self {
        Self {
            top: rng.random_range(PERCENT),
            left: rng.random_range(PERCENT),
            size: rng.random_range(SPARKLE_SIZE),
            delay: rng.random_range(SPARKLE_DELAY),
        }
    }
}

impl Ornament for ConfettiPiece {
    const DEFAULT_COUNT: usize = 240;

    fn sample(_index: usize, rng: &mut SmallRng) -> Self {
        Self {
            x: rng.random_range(0.0..1.0),
            size: rng.random_range(CONFETTI_SIZE),
            duration: rng.random_range(CONFETTI_DURATION),
            delay: rng.random_range(CONFETTI_DELAY),
            hue: rng.random_range(CONFETTI_HUE),
            spin: rng.random_range(CONFETTI_SPIN),
            drift: rng.random_range(CONFETTI_DRIFT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within(range: &Range<f64>, value: f64) -> bool {
        range.contains(&value)
    }

    fn close_to(a: f64, b: f64) -> bool {
        (-1e-9..1e-9).contains(&(a - b))
    }

    #[test]
    fn floating_motifs_stay_in_range() {
        let motifs: Vec<FloatingMotif> = RandomOrnaments::new(3).scatter(200);
        for m in motifs {
            assert!(within(&PERCENT, m.top) && within(&PERCENT, m.left));
            assert!(within(&FLOATING_SIZE, m.size));
            assert!(within(&FLOATING_DURATION, m.duration));
            assert!(within(&FLOATING_DELAY, m.delay));
            assert!(FLOATING_EMOJI.contains(&m.emoji));
        }
    }

    #[test]
    fn balloons_and_ribbons_stay_in_range() {
        let mut ornaments = RandomOrnaments::new(11);
        for b in ornaments.scatter::<Balloon>(200) {
            assert!(within(&BALLOON_SIZE, b.size));
            assert!(within(&BALLOON_DURATION, b.duration));
            assert!(BALLOON_HUE.contains(&b.hue));
        }
        for r in ornaments.scatter::<Ribbon>(200) {
            assert!(within(&RIBBON_SIZE, r.size));
            assert!(within(&RIBBON_DURATION, r.duration));
            assert!(within(&RIBBON_DELAY, r.delay));
        }
    }

    #[test]
    fn petal_rotation_has_one_decimal() {
        for p in RandomOrnaments::new(5).scatter::<Petal>(200) {
            assert!((-30.0..30.0).contains(&p.rotation));
            let tenths = p.rotation * 10.0;
            let nearest = (if tenths < 0.0 { tenths - 0.5 } else { tenths + 0.5 }) as i64;
            assert!(close_to(tenths, nearest as f64));
            assert!(PETAL_EMOJI.contains(&p.emoji));
        }
    }

    #[test]
    fn smoke_is_staggered_by_index() {
        let puffs: Vec<SmokePuff> = RandomOrnaments::new(9).scatter_default();
        assert_eq!(puffs.len(), 12);
        for (i, puff) in puffs.iter().enumerate() {
            assert!(close_to(puff.delay, i as f64 * 0.28));
            assert!(within(&SMOKE_LEFT, puff.left));
            assert!(within(&SMOKE_SIZE, puff.size));
        }
    }

    #[test]
    fn sparkles_and_confetti_stay_in_range() {
        let mut ornaments = RandomOrnaments::new(21);
        for s in ornaments.scatter::<Sparkle>(200) {
            assert!(within(&SPARKLE_SIZE, s.size));
            assert!(within(&SPARKLE_DELAY, s.delay));
        }
        for c in ornaments.scatter::<ConfettiPiece>(500) {
            assert!((0.0..1.0).contains(&c.x));
            assert!(CONFETTI_HUE.contains(&c.hue));
            assert!(within(&CONFETTI_DRIFT, c.drift));
        }
    }
}
