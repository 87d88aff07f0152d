use quicksilver::{
    geom::{Shape, Vector},
    input::{ButtonState, Key, MouseButton},
    lifecycle::{run, Event, Settings, State, Window},
    Result,
};

use flappy::game::model::{GameRules, Phase};
use flappy::game::sprites::SpriteSet;
use flappy::game::world::World;
use flappy::gui::Renderer;
use flappy::score::ScoreStore;
use flappy::{SCORE_FILE, TICK_RATE, WIN_HEIGHT, WIN_WIDTH};

use rand::rngs::StdRng;
use rand::SeedableRng;

struct FlappyGame {
    world: World,
    renderer: Renderer,
}

impl State for FlappyGame {
    fn new() -> Result<Self> {
        let sprites = SpriteSet::generate();
        let renderer = Renderer::new(&sprites)?;
        let store = ScoreStore::new(SCORE_FILE);
        let world = World::new(GameRules::default(), sprites, store, StdRng::from_entropy());
        Ok(FlappyGame { world, renderer })
    }

    fn event(&mut self, event: &Event, window: &mut Window) -> Result<()> {
        match event {
            Event::MouseButton(MouseButton::Left, ButtonState::Pressed) => {
                match self.world.phase() {
                    Phase::Playing => self.world.flap(),
                    Phase::GameOver => {
                        if Renderer::restart_button().contains(window.mouse().pos()) {
                            self.world.restart();
                        }
                    }
                }
            }
            Event::Key(Key::Escape, ButtonState::Pressed) => window.close(),
            _ => {}
        }
        Ok(())
    }

    fn update(&mut self, _window: &mut Window) -> Result<()> {
        self.world.tick();
        Ok(())
    }

    fn draw(&mut self, window: &mut Window) -> Result<()> {
        self.renderer.draw(window, &mut self.world)
    }
}

fn main() {
    let settings = Settings {
        update_rate: 1000.0 / TICK_RATE,
        draw_rate: 1000.0 / TICK_RATE,
        ..Settings::default()
    };
    run::<FlappyGame>(
        "Flappy",
        Vector::new(WIN_WIDTH as f32, WIN_HEIGHT as f32),
        settings,
    );
}
