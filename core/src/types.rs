use crate::ornament::{ConfettiPiece, Ornament};

/// Number of eggs on the selection screen, each one gates exactly one scene.
pub const EGG_COUNT: usize = 3;

/// Position of an egg on the selection screen, `0..EGG_COUNT`
pub type EggIndex = usize;

/// Whole seconds, used for the genie countdown
pub type Seconds = u8;

/// The overlay revealed by cracking an egg.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scene {
    Flowers,
    Genie,
    Video,
}

impl Scene {
    pub const ALL: [Scene; EGG_COUNT] = [Scene::Flowers, Scene::Genie, Scene::Video];

    /// Confetti in the video burst, the other scenes use the regular amount.
    pub const DENSE_BURST: usize = 500;

    pub const fn from_egg(egg: EggIndex) -> Option<Self> {
        match egg {
            0 => Some(Scene::Flowers),
            1 => Some(Scene::Genie),
            2 => Some(Scene::Video),
            _ => None,
        }
    }

    pub const fn egg(self) -> EggIndex {
        use Scene::*;
        match self {
            Flowers => 0,
            Genie => 1,
            Video => 2,
        }
    }

    /// 1-based act number, matches the `overlay--act{n}` styling hooks.
    pub const fn number(self) -> u8 {
        self.egg() as u8 + 1
    }

    pub const fn label(self) -> &'static str {
        use Scene::*;
        match self {
            Flowers => "Flowers",
            Genie => "Genie wish",
            Video => "Video",
        }
    }

    /// Amount of confetti in the celebratory burst shown over this scene.
    pub const fn burst_pieces(self) -> usize {
        match self {
            Scene::Video => Self::DENSE_BURST,
            _ => ConfettiPiece::DEFAULT_COUNT,
        }
    }
}

/// Visible area of the window in CSS pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Negative and NaN dimensions collapse to zero.
    pub fn from_css_pixels(width: f64, height: f64) -> Self {
        // float to int `as` casts saturate and map NaN to 0
        Self {
            width: width as u32,
            height: height as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenes_map_back_to_their_egg() {
        for (egg, scene) in Scene::ALL.into_iter().enumerate() {
            assert_eq!(Scene::from_egg(egg), Some(scene));
            assert_eq!(scene.egg(), egg);
            assert_eq!(scene.number() as usize, egg + 1);
        }
        assert_eq!(Scene::from_egg(EGG_COUNT), None);
    }

    #[test]
    fn video_gets_the_denser_burst() {
        assert_eq!(Scene::Video.burst_pieces(), 500);
        assert_eq!(Scene::Flowers.burst_pieces(), ConfettiPiece::DEFAULT_COUNT);
        assert_eq!(Scene::Genie.burst_pieces(), 240);
    }

    #[test]
    fn viewport_from_css_pixels_saturates() {
        assert_eq!(
            ViewportSize::from_css_pixels(1280.7, 720.2),
            ViewportSize::new(1280, 720)
        );
        assert_eq!(
            ViewportSize::from_css_pixels(-5.0, f64::NAN),
            ViewportSize::new(0, 0)
        );
    }
}
