use quicksilver::{
    geom::{Rectangle, Transform},
    graphics::{
        Background::{Col, Img},
        Color, Image, PixelFormat,
    },
    lifecycle::Window,
    Result,
};

use crate::game::model::Phase;
use crate::game::sprites::{Sprite, SpriteSet};
use crate::game::world::World;
use crate::gui::text;
use crate::WIN_WIDTH;

const SKY: Color = Color { r: 0.44, g: 0.75, b: 0.91, a: 1.0 };
const WHITE: [u8; 4] = [255, 255, 255, 255];
const INK: [u8; 4] = [24, 24, 24, 255];
const ALERT: [u8; 4] = [204, 44, 44, 255];

const SCORE_SCALE: usize = 4;
const HEADLINE_SCALE: usize = 5;
const BUTTON_SCALE: usize = 3;

/// Owns every texture the game blits. Built once from the painted sprite
/// set; the world keeps the matching masks.
pub struct Renderer {
    bird: [Image; 3],
    pipe_top: Image,
    pipe_bottom: Image,
    base: Image,
}

fn upload(sprite: &Sprite) -> Result<Image> {
    Image::from_raw(
        &sprite.rgba,
        sprite.width as u32,
        sprite.height as u32,
        PixelFormat::RGBA,
    )
}

fn blit_text(window: &mut Window, message: &str, scale: usize, color: [u8; 4], x: f32, y: f32) -> Result<()> {
    let (width, height, rgba) = text::rasterize(message, scale, color);
    let image = Image::from_raw(&rgba, width as u32, height as u32, PixelFormat::RGBA)?;
    window.draw(
        &Rectangle::new((x, y), (width as f32, height as f32)),
        Img(&image),
    );
    Ok(())
}

fn blit_text_centered(window: &mut Window, message: &str, scale: usize, color: [u8; 4], center_x: f32, y: f32) -> Result<()> {
    let (width, _) = text::measure(message, scale);
    blit_text(window, message, scale, color, center_x - width as f32 / 2f32, y)
}

impl Renderer {
    pub fn new(sprites: &SpriteSet) -> Result<Renderer> {
        Ok(Renderer {
            bird: [
                upload(&sprites.bird[0])?,
                upload(&sprites.bird[1])?,
                upload(&sprites.bird[2])?,
            ],
            pipe_top: upload(&sprites.pipe_top)?,
            pipe_bottom: upload(&sprites.pipe_bottom)?,
            base: upload(&sprites.base)?,
        })
    }

    /// Screen rectangle of the restart control; clicks are accepted only
    /// inside it.
    pub fn restart_button() -> Rectangle {
        Rectangle::new((WIN_WIDTH as f32 / 2f32 - 70f32, 500f32), (140f32, 50f32))
    }

    pub fn draw(&mut self, window: &mut Window, world: &mut World) -> Result<()> {
        window.clear(SKY)?;

        for pipe in world.pipes() {
            window.draw(
                &Rectangle::new((pipe.x, pipe.top), self.pipe_top.area().size()),
                Img(&self.pipe_top),
            );
            window.draw(
                &Rectangle::new((pipe.x, pipe.bottom), self.pipe_bottom.area().size()),
                Img(&self.pipe_bottom),
            );
        }

        let frame = world.bird_mut().animate();
        let bird = world.bird();
        let image = &self.bird[frame];
        // The tilt only rotates the blit; collision uses the unrotated mask.
        window.draw_ex(
            &Rectangle::new((bird.x, bird.y), image.area().size()),
            Img(image),
            Transform::rotate(-bird.tilt),
            0,
        );

        let base = world.base();
        window.draw(
            &Rectangle::new((base.x1, base.y), self.base.area().size()),
            Img(&self.base),
        );
        window.draw(
            &Rectangle::new((base.x2, base.y), self.base.area().size()),
            Img(&self.base),
        );

        let score = format!("SCORE: {}", world.score());
        let (score_width, _) = text::measure(&score, SCORE_SCALE);
        blit_text(
            window,
            &score,
            SCORE_SCALE,
            WHITE,
            WIN_WIDTH as f32 - score_width as f32 - 20f32,
            10f32,
        )?;

        if world.phase() == Phase::GameOver {
            self.draw_game_over(window, world)?;
        }
        Ok(())
    }

    fn draw_game_over(&mut self, window: &mut Window, world: &World) -> Result<()> {
        let center_x = WIN_WIDTH as f32 / 2f32;

        blit_text_centered(window, "GAME OVER!", HEADLINE_SCALE, ALERT, center_x, 400f32)?;

        let button = Renderer::restart_button();
        window.draw(&button, Col(Color::WHITE));
        let (_, label_height) = text::measure("RESTART", BUTTON_SCALE);
        blit_text_centered(
            window,
            "RESTART",
            BUTTON_SCALE,
            INK,
            center_x,
            button.pos.y + (button.size.y - label_height as f32) / 2f32,
        )?;

        blit_text_centered(window, "TOP 5 SCORES", SCORE_SCALE, WHITE, center_x, 100f32)?;
        for (rank, score) in world.high_scores().iter().enumerate() {
            blit_text_centered(
                window,
                &format!("{}. {}", rank + 1, score),
                SCORE_SCALE,
                WHITE,
                center_x,
                150f32 + rank as f32 * 40f32,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quicksilver::geom::{Shape, Vector};

    #[test]
    fn restart_button_matches_the_drawn_rectangle() {
        let button = Renderer::restart_button();
        assert_eq!(button.pos, Vector::new(180, 500));
        assert_eq!(button.size, Vector::new(140, 50));
        assert!(button.contains(Vector::new(250, 525)));
        assert!(!button.contains(Vector::new(250, 560)));
        assert!(!button.contains(Vector::new(170, 525)));
    }
}
