//! Risible Radar game engine
//!
//! The player walks a radar set around a 256x256 playfield scattered with
//! targets. A sweep line turns 3 degrees per frame; when it passes a
//! target within range an echo blooms and slowly fades. Walking right up
//! to a target gathers it, and some targets carry bonuses. The game lasts
//! a fixed number of sweeps.
//!
//! [`Game::tick`] is pure state advance; [`Game::render`] draws the frame.

pub mod input;
pub mod pacer;
pub mod render;
pub mod rng;
pub mod target;

use heapless::Vec;

pub use input::{direction_from, Direction, Joystick};
pub use pacer::FramePacer;
pub use rng::Xorshift32;
pub use target::{Echo, Player, Target};

use crate::config::{RadarConfig, MAX_ECHOES, MAX_TARGETS};

/// Scope centre on the panel, both axes
pub const CENTRE: i32 = 64;

/// Column gathered targets stack in
pub const GUTTER_X: i32 = 6;

/// First gutter row
const GATHER_TOP: i32 = 3;

/// Gutter rows per gathered target
const GATHER_STEP: i32 = 6;

/// What happened during one [`Game::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// The player moved
    pub moved: bool,
    /// Echoes spawned this frame
    pub echoes: u8,
    /// Targets gathered this frame
    pub gathered: u8,
    /// The sweep passed 180 degrees and a sweep was used up
    pub sweep_done: bool,
    /// No sweeps left
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: RadarConfig,
    targets: Vec<Target, MAX_TARGETS>,
    echoes: [Echo; MAX_ECHOES],
    player: Player,
    /// Sweep angle for the next tick
    angle: i32,
    /// Sweep angle drawn by `render`
    sweep: i32,
    sweeps: u32,
    duration: u32,
    gather_y: i32,
    rings: bool,
    axes: bool,
    heading: Option<Direction>,
}

impl Game {
    /// Scatter targets using `seed` and place the bonuses
    pub fn new(config: RadarConfig, seed: u32) -> Self {
        let mut rng = Xorshift32::new(seed);
        let count = config.targets.clamp(1, MAX_TARGETS);

        let mut game = Self::empty(config);
        for _ in 0..count {
            let x = rng.range(0, config.playfield);
            let y = rng.range(0, config.playfield);
            let size = rng.range(1, 3);
            let _ = game.targets.push(Target::new(x, y, size));
        }

        let last = count as i32 - 1;
        game.targets[rng.range(0, last) as usize].rings = true;
        game.targets[rng.range(0, last) as usize].axes = true;
        game.targets[rng.range(0, last) as usize].time = true;
        game.targets[rng.range(0, last) as usize].time = true;

        game.relocate();
        game
    }

    /// A game with a fixed target layout and no bonuses
    ///
    /// Targets beyond [`MAX_TARGETS`] are ignored.
    pub fn with_targets(config: RadarConfig, targets: &[Target]) -> Self {
        let mut game = Self::empty(config);
        for t in targets.iter().take(MAX_TARGETS) {
            let _ = game.targets.push(*t);
        }
        game.relocate();
        game
    }

    fn empty(config: RadarConfig) -> Self {
        Self {
            config,
            targets: Vec::new(),
            echoes: [Echo::default(); MAX_ECHOES],
            player: Player {
                x: config.playfield / 2,
                y: config.playfield / 2,
            },
            angle: 0,
            sweep: 0,
            sweeps: 0,
            duration: config.duration,
            gather_y: GATHER_TOP,
            rings: false,
            axes: false,
            heading: None,
        }
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn targets_mut(&mut self) -> &mut [Target] {
        &mut self.targets
    }

    pub fn echoes(&self) -> &[Echo] {
        &self.echoes
    }

    pub fn sweeps(&self) -> u32 {
        self.sweeps
    }

    /// Game length in sweeps, bonuses included
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn angle(&self) -> i32 {
        self.angle
    }

    pub fn rings(&self) -> bool {
        self.rings
    }

    pub fn axes(&self) -> bool {
        self.axes
    }

    pub fn is_over(&self) -> bool {
        self.sweeps >= self.duration
    }

    /// Advance one frame with the joystick reading `input`
    pub fn tick(&mut self, input: Option<Direction>) -> TickReport {
        let mut report = TickReport::default();
        let angle = self.angle;
        let running = !self.is_over();

        self.heading = if running { input } else { None };

        // Age before detection: a new echo is drawn at full lifetime
        for echo in self.echoes.iter_mut() {
            echo.age = (echo.age - 1).max(0);
        }

        if running {
            if let Some(dir) = input {
                report.moved = self.walk(dir);
                if report.moved {
                    self.relocate();
                }
            }
            self.detect(angle, &mut report);
        }

        if angle == 180 {
            self.sweeps += 1;
            report.sweep_done = true;
        }

        self.sweep = angle;
        self.angle = (angle + self.config.sweep_step).rem_euclid(360);
        report.game_over = self.is_over();
        report
    }

    /// Step one pixel, staying on the playfield
    fn walk(&mut self, dir: Direction) -> bool {
        let max = self.config.playfield - 1;
        let p = &mut self.player;
        let before = *p;
        match dir {
            Direction::North => p.y = (p.y - 1).max(0),
            Direction::South => p.y = (p.y + 1).min(max),
            Direction::West => p.x = (p.x - 1).max(0),
            Direction::East => p.x = (p.x + 1).min(max),
        }
        *p != before
    }

    /// Bearings and ranges of the active targets from the player
    fn relocate(&mut self) {
        let player = self.player;
        for t in self.targets.iter_mut().filter(|t| t.active) {
            t.locate(player);
        }
    }

    fn free_echo_slot(&self) -> usize {
        self.echoes.iter().position(|e| !e.is_live()).unwrap_or(0)
    }

    fn detect(&mut self, angle: i32, report: &mut TickReport) {
        let radius = self.config.radius as f32;
        let pickup = radius / 3.0;
        let tolerance = self.config.bearing_tolerance as f32;

        for i in 0..self.targets.len() {
            let t = self.targets[i];
            if !t.active {
                continue;
            }

            if t.bearing_offset(angle) < tolerance && t.range < radius {
                let slot = self.free_echo_slot();
                self.echoes[slot] = Echo {
                    x: CENTRE + (t.x - self.player.x),
                    y: CENTRE + (t.y - self.player.y),
                    age: self.config.echo_lifetime,
                    radius: t.size,
                };
                report.echoes += 1;

                if t.range < pickup {
                    let g = &mut self.targets[i];
                    g.active = false;
                    g.x = GUTTER_X;
                    g.y = self.gather_y;
                    self.gather_y += GATHER_STEP;
                    report.gathered += 1;
                }
            }

            if t.range < pickup {
                self.rings |= t.rings;
                self.axes |= t.axes;
                if t.time {
                    self.duration = (self.duration + self.config.time_bonus)
                        .min(self.config.max_duration)
                        .max(self.duration);
                    self.targets[i].time = false;
                }
            }
        }
    }
}
