use crate::game::bird::Bird;
use crate::game::model::GameRules;
use crate::game::sprites::SpriteSet;
use rand::Rng;

/// One obstacle pair. `gap_top` is where the top pipe ends; the bottom pipe
/// starts a fixed gap below it. `top` and `bottom` are the sprite blit
/// offsets derived from it.
#[derive(Clone, Debug)]
pub struct Pipe {
    pub x: f32,
    pub gap_top: f32,
    pub top: f32,
    pub bottom: f32,
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, rules: &GameRules, pipe_height: f32, rng: &mut impl Rng) -> Pipe {
        let gap_top = rng.gen_range(rules.gap_top_min, rules.gap_top_max) as f32;
        Pipe {
            x,
            gap_top,
            top: gap_top - pipe_height,
            bottom: gap_top + rules.pipe_gap,
            passed: false,
        }
    }

    pub fn advance(&mut self, rules: &GameRules) {
        self.x -= rules.pipe_vel;
    }

    /// Silhouette-accurate collision: the bird's current frame mask against
    /// both pipe masks at their relative offsets. The bird's y is rounded to
    /// the pixel grid first, matching the blit position.
    pub fn collides(&self, bird: &Bird, sprites: &SpriteSet) -> bool {
        let bird_mask = &sprites.bird[bird.frame].mask;
        let dx = (self.x - bird.x).round() as i32;
        let top_dy = (self.top - bird.y.round()).round() as i32;
        let bottom_dy = (self.bottom - bird.y.round()).round() as i32;

        bird_mask.overlaps(&sprites.pipe_top.mask, (dx, top_dy))
            || bird_mask.overlaps(&sprites.pipe_bottom.mask, (dx, bottom_dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::sprites::PIPE_HEIGHT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_gap_pipe(x: f32, gap_top: f32) -> Pipe {
        let rules = GameRules::default();
        Pipe {
            x,
            gap_top,
            top: gap_top - PIPE_HEIGHT as f32,
            bottom: gap_top + rules.pipe_gap,
            passed: false,
        }
    }

    #[test]
    fn gap_geometry_stays_in_bounds() {
        let rules = GameRules::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let pipe = Pipe::new(rules.spawn_x, &rules, PIPE_HEIGHT as f32, &mut rng);
            assert!(pipe.gap_top >= rules.gap_top_min as f32);
            assert!(pipe.gap_top < rules.gap_top_max as f32);
            assert_eq!(pipe.bottom - pipe.gap_top, rules.pipe_gap);
            assert_eq!(pipe.top, pipe.gap_top - PIPE_HEIGHT as f32);
            assert!(!pipe.passed);
        }
    }

    #[test]
    fn advance_moves_left_at_constant_speed() {
        let rules = GameRules::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut pipe = Pipe::new(600f32, &rules, PIPE_HEIGHT as f32, &mut rng);
        pipe.advance(&rules);
        pipe.advance(&rules);
        assert_eq!(pipe.x, 590f32);
    }

    #[test]
    fn bird_inside_the_gap_does_not_collide() {
        let sprites = SpriteSet::generate();
        let bird = Bird::new(230f32, 350f32);
        // Gap spans 250..450, the bird sprite sits at 350..398.
        let pipe = fixed_gap_pipe(230f32, 250f32);
        assert!(!pipe.collides(&bird, &sprites));
    }

    #[test]
    fn bird_clipping_the_top_pipe_collides() {
        let sprites = SpriteSet::generate();
        let bird = Bird::new(230f32, 350f32);
        // Top pipe reaches down to 440, well into the bird.
        let pipe = fixed_gap_pipe(230f32, 440f32);
        assert!(pipe.collides(&bird, &sprites));
    }

    #[test]
    fn bird_clipping_the_bottom_pipe_collides() {
        let sprites = SpriteSet::generate();
        let bird = Bird::new(230f32, 350f32);
        // Bottom pipe starts at 360, inside the bird's rows.
        let pipe = fixed_gap_pipe(230f32, 160f32);
        assert!(pipe.collides(&bird, &sprites));
    }

    #[test]
    fn horizontally_separated_sprites_do_not_collide() {
        let sprites = SpriteSet::generate();
        let bird = Bird::new(230f32, 350f32);
        let width = sprites.bird[0].width as f32;
        // Pipe starts flush with the bird's right edge, no column shared.
        let pipe = fixed_gap_pipe(230f32 + width, 440f32);
        assert!(!pipe.collides(&bird, &sprites));
    }
}
