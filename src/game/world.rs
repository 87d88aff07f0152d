use crate::game::base::Base;
use crate::game::bird::Bird;
use crate::game::model::{GameRules, Phase};
use crate::game::pipe::Pipe;
use crate::game::sprites::SpriteSet;
use crate::score::ScoreStore;
use rand::rngs::StdRng;
use std::collections::vec_deque::VecDeque;

/// The whole simulation for one session: entities, score, phase and the
/// persisted high-score list. Everything is advanced by `tick`, exactly one
/// call per frame; nothing moves while the phase is `GameOver`.
pub struct World {
    rules: GameRules,
    sprites: SpriteSet,
    store: ScoreStore,
    rng: StdRng,
    bird: Bird,
    base: Base,
    pipes: VecDeque<Pipe>,
    score: u32,
    high_scores: Vec<u32>,
    phase: Phase,
}

impl World {
    pub fn new(rules: GameRules, sprites: SpriteSet, store: ScoreStore, mut rng: StdRng) -> World {
        let high_scores = store.load();
        let bird = Bird::new(rules.bird_start_x, rules.bird_start_y);
        let base = Base::new(rules.ground_y, sprites.base.width as f32);
        let mut pipes = VecDeque::new();
        let pipe_height = sprites.pipe_bottom.height as f32;
        pipes.push_back(Pipe::new(rules.spawn_x, &rules, pipe_height, &mut rng));
        World {
            rules,
            sprites,
            store,
            rng,
            bird,
            base,
            pipes,
            score: 0,
            high_scores,
            phase: Phase::Playing,
        }
    }

    pub fn tick(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }

        self.bird.advance(&self.rules);

        let mut crashed = false;
        let mut spawn = false;
        for pipe in self.pipes.iter_mut() {
            if pipe.collides(&self.bird, &self.sprites) {
                crashed = true;
            }
            if !pipe.passed && pipe.x < self.bird.x {
                pipe.passed = true;
                spawn = true;
                self.score += 1;
            }
            pipe.advance(&self.rules);
        }

        let pipe_width = self.sprites.pipe_bottom.width as f32;
        self.pipes.retain(|pipe| pipe.x + pipe_width >= 0f32);

        if self.bird.y + self.sprites.bird[0].height as f32 >= self.rules.ground_y {
            crashed = true;
        }

        if spawn {
            let pipe_height = self.sprites.pipe_bottom.height as f32;
            let pipe = Pipe::new(self.rules.spawn_x, &self.rules, pipe_height, &mut self.rng);
            self.pipes.push_back(pipe);
        }

        self.base.advance(&self.rules);

        if crashed {
            self.game_over();
        }
    }

    /// Transition to `GameOver`, committing the session score to the store.
    /// Runs at most once per session; the updated list is what the game
    /// over screen shows.
    fn game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.high_scores = self.store.update(self.score);
    }

    /// The primary input while playing.
    pub fn flap(&mut self) {
        if self.phase == Phase::Playing {
            self.bird.jump(&self.rules);
        }
    }

    /// Fresh session in place: entities and score back to their starting
    /// values, high scores untouched. Restarting never re-enters the outer
    /// loop, so any number of rounds runs on the same stack frame.
    pub fn restart(&mut self) {
        self.bird = Bird::new(self.rules.bird_start_x, self.rules.bird_start_y);
        self.base = Base::new(self.rules.ground_y, self.sprites.base.width as f32);
        self.pipes.clear();
        let pipe_height = self.sprites.pipe_bottom.height as f32;
        let pipe = Pipe::new(self.rules.spawn_x, &self.rules, pipe_height, &mut self.rng);
        self.pipes.push_back(pipe);
        self.score = 0;
        self.phase = Phase::Playing;
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    pub fn base(&self) -> &Base {
        &self.base
    }

    pub fn pipes(&self) -> impl Iterator<Item = &Pipe> + '_ {
        self.pipes.as_slices().0.iter().chain(self.pipes.as_slices().1)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_scores(&self) -> &[u32] {
        &self.high_scores
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::fs;

    fn temp_store(tag: &str) -> ScoreStore {
        let path = std::env::temp_dir().join(format!(
            "flappy_world_{}_{}.json",
            tag,
            std::process::id()
        ));
        fs::remove_file(&path).ok();
        ScoreStore::new(path)
    }

    fn world_with(rules: GameRules, tag: &str) -> World {
        World::new(
            rules,
            SpriteSet::generate(),
            temp_store(tag),
            StdRng::seed_from_u64(42),
        )
    }

    /// A pipe spawned just ahead of the bird, with a gap the falling bird
    /// stays inside for a while. gen_range(300, 301) pins the gap top.
    fn close_pipe_rules() -> GameRules {
        GameRules {
            spawn_x: 240f32,
            gap_top_min: 300,
            gap_top_max: 301,
            ..GameRules::default()
        }
    }

    #[test]
    fn pipe_is_passed_exactly_once() {
        let mut world = world_with(close_pipe_rules(), "passed_once");
        // Spawned at 240, moving 5 per tick: drops below the bird's x of
        // 230 on the fourth tick.
        for _ in 0..3 {
            world.tick();
        }
        assert_eq!(world.score(), 0);
        world.tick();
        assert_eq!(world.score(), 1);
        assert_eq!(world.phase(), Phase::Playing);
        // The pass scheduled one replacement pipe at the spawn line.
        assert_eq!(world.pipes().count(), 2);
        assert_eq!(world.pipes().last().unwrap().x, 240f32);
        // The old pipe never scores again.
        world.tick();
        world.tick();
        assert_eq!(world.pipes().filter(|pipe| pipe.passed).count(), 1);
    }

    #[test]
    fn ground_contact_ends_the_session() {
        let mut world = world_with(GameRules::default(), "ground");
        let mut ticks = 0;
        while world.phase() == Phase::Playing && ticks < 100 {
            world.tick();
            ticks += 1;
        }
        assert_eq!(world.phase(), Phase::GameOver);
        let ground = world.rules().ground_y;
        assert!(world.bird().y + 48f32 >= ground);
        // The default spawn line is far enough out that no pipe was hit.
        assert_eq!(world.score(), 0);
    }

    #[test]
    fn simulation_freezes_after_game_over() {
        let mut world = world_with(GameRules::default(), "frozen");
        for _ in 0..100 {
            world.tick();
        }
        assert_eq!(world.phase(), Phase::GameOver);
        let bird_y = world.bird().y;
        let pipe_x = world.pipes().next().unwrap().x;
        world.tick();
        assert_eq!(world.bird().y, bird_y);
        assert_eq!(world.pipes().next().unwrap().x, pipe_x);
    }

    #[test]
    fn flapping_is_ignored_after_game_over() {
        let mut world = world_with(GameRules::default(), "no_flap");
        for _ in 0..100 {
            world.tick();
        }
        let vel = world.bird().vel;
        world.flap();
        assert_eq!(world.bird().vel, vel);
    }

    #[test]
    fn restart_resets_the_session_but_keeps_high_scores() {
        let mut world = world_with(close_pipe_rules(), "restart");
        while world.phase() == Phase::Playing {
            world.tick();
        }
        assert!(world.score() >= 1);
        let high_scores = world.high_scores().to_vec();
        assert_eq!(high_scores[0], world.score());

        world.restart();
        assert_eq!(world.phase(), Phase::Playing);
        assert_eq!(world.score(), 0);
        assert_eq!(world.bird().x, 230f32);
        assert_eq!(world.bird().y, 350f32);
        assert_eq!(world.pipes().count(), 1);
        assert_eq!(world.pipes().next().unwrap().x, 240f32);
        assert_eq!(world.high_scores(), &high_scores[..]);
    }
}
