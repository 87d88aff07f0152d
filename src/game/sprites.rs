use crate::game::mask::Mask;

const BODY: [u8; 4] = [231, 193, 66, 255];
const BELLY: [u8; 4] = [243, 227, 158, 255];
const WING: [u8; 4] = [214, 150, 48, 255];
const EYE_WHITE: [u8; 4] = [255, 255, 255, 255];
const EYE_PUPIL: [u8; 4] = [32, 32, 32, 255];
const BEAK: [u8; 4] = [224, 120, 50, 255];
const PIPE_BODY: [u8; 4] = [0, 156, 60, 255];
const PIPE_RIM: [u8; 4] = [0, 128, 48, 255];
const PIPE_SHINE: [u8; 4] = [120, 200, 96, 255];
const GRASS: [u8; 4] = [106, 190, 48, 255];
const GRASS_EDGE: [u8; 4] = [70, 140, 32, 255];
const DIRT: [u8; 4] = [222, 184, 120, 255];
const DIRT_BAND: [u8; 4] = [196, 148, 86, 255];

pub const BIRD_WIDTH: usize = 68;
pub const BIRD_HEIGHT: usize = 48;
pub const PIPE_WIDTH: usize = 104;
pub const PIPE_HEIGHT: usize = 640;
pub const BASE_WIDTH: usize = 672;
pub const BASE_HEIGHT: usize = 70;

/// One piece of painted art: the RGBA pixels the renderer uploads and the
/// silhouette the collision test scans, derived from the same buffer.
#[derive(Clone, Debug)]
pub struct Sprite {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
    pub mask: Mask,
}

impl Sprite {
    pub fn flipped_vertical(&self) -> Sprite {
        let row = self.width * 4;
        let mut rgba = Vec::with_capacity(self.rgba.len());
        for y in (0..self.height).rev() {
            rgba.extend_from_slice(&self.rgba[y * row..(y + 1) * row]);
        }
        let mask = Mask::from_alpha(self.width, self.height, &rgba);
        Sprite { width: self.width, height: self.height, rgba, mask }
    }
}

struct Canvas {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Canvas {
        Canvas { width, height, rgba: vec![0u8; width * height * 4] }
    }

    fn put(&mut self, x: i32, y: i32, color: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let at = (y as usize * self.width + x as usize) * 4;
        self.rgba[at..at + 4].copy_from_slice(&color);
    }

    fn rect(&mut self, x: i32, y: i32, width: usize, height: usize, color: [u8; 4]) {
        for py in y..y + height as i32 {
            for px in x..x + width as i32 {
                self.put(px, py, color);
            }
        }
    }

    fn ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: [u8; 4]) {
        for dy in -ry..=ry {
            let span = 1f32 - (dy as f32 / ry as f32).powi(2);
            let half = (rx as f32 * span.sqrt()).round() as i32;
            for dx in -half..=half {
                self.put(cx + dx, cy + dy, color);
            }
        }
    }

    fn finish(self) -> Sprite {
        let mask = Mask::from_alpha(self.width, self.height, &self.rgba);
        Sprite { width: self.width, height: self.height, rgba: self.rgba, mask }
    }
}

/// All art the game uses, painted once at start-up. Images for the renderer
/// are uploaded from `rgba`; the world keeps the masks for collision.
pub struct SpriteSet {
    pub bird: [Sprite; 3],
    pub pipe_top: Sprite,
    pub pipe_bottom: Sprite,
    pub base: Sprite,
}

impl SpriteSet {
    pub fn generate() -> SpriteSet {
        let bird = [paint_bird(18), paint_bird(26), paint_bird(34)];
        let pipe_bottom = paint_pipe();
        let pipe_top = pipe_bottom.flipped_vertical();
        SpriteSet { bird, pipe_top, pipe_bottom, base: paint_base() }
    }
}

/// The three flap frames differ only in where the wing sits.
fn paint_bird(wing_y: i32) -> Sprite {
    let mut canvas = Canvas::new(BIRD_WIDTH, BIRD_HEIGHT);
    canvas.ellipse(32, 26, 26, 17, BODY);
    canvas.ellipse(30, 33, 16, 8, BELLY);
    canvas.ellipse(22, wing_y, 10, 6, WING);
    canvas.ellipse(46, 16, 7, 7, EYE_WHITE);
    canvas.ellipse(48, 16, 3, 3, EYE_PUPIL);
    canvas.rect(54, 22, 14, 10, BEAK);
    canvas.finish()
}

/// A bottom pipe: the gap-facing rim is at the top of the sprite; the top
/// pipe is this art flipped vertically.
fn paint_pipe() -> Sprite {
    let mut canvas = Canvas::new(PIPE_WIDTH, PIPE_HEIGHT);
    canvas.rect(6, 36, PIPE_WIDTH - 12, PIPE_HEIGHT - 36, PIPE_BODY);
    canvas.rect(18, 36, 12, PIPE_HEIGHT - 36, PIPE_SHINE);
    canvas.rect(0, 0, PIPE_WIDTH, 36, PIPE_RIM);
    canvas.rect(12, 4, 12, 28, PIPE_SHINE);
    canvas.finish()
}

fn paint_base() -> Sprite {
    let mut canvas = Canvas::new(BASE_WIDTH, BASE_HEIGHT);
    canvas.rect(0, 0, BASE_WIDTH, 4, GRASS_EDGE);
    canvas.rect(0, 4, BASE_WIDTH, 20, GRASS);
    canvas.rect(0, 24, BASE_WIDTH, 6, DIRT_BAND);
    canvas.rect(0, 30, BASE_WIDTH, BASE_HEIGHT - 30, DIRT);
    canvas.finish()
}
