use crate::*;

/// Placement of the celebratory burst over an open scene, always covering the current viewport.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BurstLayout {
    pub pieces: usize,
    pub viewport: ViewportSize,
}

impl BurstLayout {
    pub const fn for_scene(scene: Scene, viewport: ViewportSize) -> Self {
        Self {
            pieces: scene.burst_pieces(),
            viewport,
        }
    }

    /// Horizontal start of a piece in pixels.
    pub fn left_px(&self, piece: &ConfettiPiece) -> f64 {
        piece.x * f64::from(self.viewport.width)
    }

    /// Distance a piece falls to leave the bottom edge, in pixels.
    pub fn fall_px(&self, piece: &ConfettiPiece) -> f64 {
        f64::from(self.viewport.height) + piece.size * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(x: f64) -> ConfettiPiece {
        ConfettiPiece {
            x,
            size: 10.0,
            duration: 4.0,
            delay: 0.0,
            hue: 0,
            spin: 0.0,
            drift: 0.0,
        }
    }

    #[test]
    fn follows_viewport_size() {
        let small = BurstLayout::for_scene(Scene::Flowers, ViewportSize::new(400, 800));
        let wide = BurstLayout::for_scene(Scene::Flowers, ViewportSize::new(1600, 900));
        let p = piece(0.5);
        assert_eq!(small.left_px(&p), 200.0);
        assert_eq!(wide.left_px(&p), 800.0);
        assert_eq!(small.fall_px(&p), 820.0);
        assert_eq!(wide.fall_px(&p), 920.0);
    }

    #[test]
    fn piece_count_follows_scene() {
        let viewport = ViewportSize::new(1, 1);
        assert_eq!(BurstLayout::for_scene(Scene::Video, viewport).pieces, 500);
        assert_eq!(BurstLayout::for_scene(Scene::Genie, viewport).pieces, 240);
    }
}
