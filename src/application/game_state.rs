use std::time::Instant;

use log::{debug, info};

use crate::config::SimulationConfig;
use crate::domain::{Algorithm, Cell, Rule, SparseGrid, default_rule, rule_by_name};

pub const MIN_SPEED: f64 = 1.0;
pub const MAX_SPEED: f64 = 60.0;

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic and owns
/// the fixed-timestep clock that drives it.
pub struct GameState {
    pub grid: SparseGrid,
    pub rule: Box<dyn Rule>,
    pub algorithm: Algorithm,
    pub is_running: bool,
    pub generation: u64,
    /// Generations per second
    pub updates_per_second: f64,
    /// Seconds banked towards the next generation
    accumulator: f64,
    /// Fraction of cells brought to life by `randomize`
    pub random_density: f64,
    pub last_evolution_time_ms: f32,  // Evolution performance metric
    pub last_render_time_ms: f32,     // Render performance metric
    /// Index of pattern pending placement (None = normal mode)
    pub pending_pattern_index: Option<usize>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            grid: SparseGrid::new(),
            rule: default_rule(),
            algorithm: Algorithm::default(),
            is_running: false,
            generation: 0,
            updates_per_second: 10.0,
            accumulator: 0.0,
            random_density: 0.3,
            last_evolution_time_ms: 0.0,
            last_render_time_ms: 0.0,
            pending_pattern_index: None,
        }
    }

    /// Build from an already validated config section
    pub fn from_config(config: &SimulationConfig) -> Self {
        let mut state = Self::new();
        if let Some(rule) = rule_by_name(&config.rule) {
            state.rule = rule;
        }
        state.algorithm = config.algorithm;
        state.random_density = config.random_density;
        state.set_speed(config.generations_per_second);
        state.set_running(config.start_running);
        state
    }

    /// Set the cellular automaton rule
    pub fn set_rule(&mut self, rule: Box<dyn Rule>) {
        info!("rule: {}", rule.name());
        self.rule = rule;
    }

    /// Set the evolution algorithm
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        info!("algorithm: {}", algorithm.name());
        self.algorithm = algorithm;
    }

    /// Start or stop the clock. Stopping drops banked time so a resume
    /// never replays ticks that were owed while paused.
    pub fn set_running(&mut self, running: bool) {
        if self.is_running != running {
            info!("{} at generation {}", if running { "running" } else { "paused" }, self.generation);
        }
        self.is_running = running;
        if !running {
            self.accumulator = 0.0;
        }
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.set_running(running);
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        let running = !self.is_running;
        self.set_running(running);
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.generation = 0;
        self.set_running(false);
        self
    }

    /// Seed the inclusive rectangle `min..=max` with random live cells
    pub fn randomize(mut self, min: Cell, max: Cell) -> Self {
        let mut rng = rand::rng();
        self.grid.randomize_region(min, max, self.random_density, &mut rng);
        self.generation = 0;
        self.set_running(false);
        self
    }

    pub fn set_speed(&mut self, generations_per_second: f64) {
        self.updates_per_second = generations_per_second.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f64) -> Self {
        self.set_speed(self.updates_per_second + delta);
        self
    }

    /// Advance exactly one generation, running or not
    pub fn step_once(mut self) -> Self {
        self.advance();
        self
    }

    /// Feed `delta_time` seconds of wall clock into the fixed-timestep
    /// accumulator and run as many generations as it has paid for.
    pub fn tick(mut self, delta_time: f64) -> Self {
        if !self.is_running {
            return self;
        }

        self.accumulator += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        while self.accumulator >= update_interval {
            self.advance();
            self.accumulator -= update_interval;
        }

        self
    }

    fn advance(&mut self) {
        let start = Instant::now();
        self.grid = self.algorithm.step(&self.grid, self.rule.as_ref());
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        debug!(
            "generation {}: {} alive ({:.2}ms)",
            self.generation,
            self.grid.count(),
            self.last_evolution_time_ms
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
