use std::path::PathBuf;

use anyhow::{anyhow, ensure, Result};
use clap::Parser;
use log::LevelFilter;

use crate::food::FOOD_ROWS;
use crate::game::Rules;
use crate::{Arena, CELLS_ACROSS};

#[derive(Parser, Debug)]
#[command(name = "errorsnake", about = "Eat the errors, don't bite yourself")]
pub struct Args {
    /// Canvas width in pixels; one grid cell is a fortieth of it
    #[arg(long, default_value_t = 400)]
    pub width: i32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 300)]
    pub height: i32,

    /// Frames per second at the start of a game
    #[arg(long, default_value_t = 8.0)]
    pub base_fps: f64,

    /// Speed up once every this many points
    #[arg(long, default_value_t = 5)]
    pub speed_every: u32,

    /// Frames per second added on each speed up
    #[arg(long, default_value_t = 1.0)]
    pub speed_step: f64,

    /// Frames per second the speed ups never go past
    #[arg(long, default_value_t = 60.0)]
    pub max_fps: f64,

    /// Seed for food placement, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "errorsnake.log")]
    pub log_file: PathBuf,

    /// One of off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub arena: Arena,
    pub rules: Rules,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Settings {
    pub fn from_args(args: &Args) -> Result<Self> {
        ensure!(
            args.width >= CELLS_ACROSS * 2,
            "width must be at least {} pixels, got {}",
            CELLS_ACROSS * 2,
            args.width
        );

        let arena = Arena::new(args.width, args.height);
        ensure!(arena.cell % 2 == 0, "width / {} must be even, got a cell of {}", CELLS_ACROSS, arena.cell);
        // The snake starts at the centre, which is only a cell centre when
        // both sides are a whole number of cell pairs
        ensure!(
            args.width % (arena.cell * 2) == 0,
            "width must be a multiple of {} pixels, got {}",
            arena.cell * 2,
            args.width
        );
        ensure!(
            args.height % (arena.cell * 2) == 0,
            "height must be a multiple of {} pixels, got {}",
            arena.cell * 2,
            args.height
        );
        ensure!(
            args.height >= arena.cell * FOOD_ROWS,
            "height must be at least {} cells ({} pixels) to hold the food, got {}",
            FOOD_ROWS,
            arena.cell * FOOD_ROWS,
            args.height
        );

        let rules = Rules {
            base_fps: args.base_fps,
            speed_every: args.speed_every,
            speed_step: args.speed_step,
            max_fps: args.max_fps,
        };
        ensure!(rules.base_fps > 0.0, "base fps must be positive, got {}", rules.base_fps);
        ensure!(rules.max_fps >= rules.base_fps, "max fps {} is below base fps {}", rules.max_fps, rules.base_fps);
        ensure!(rules.speed_every > 0, "speed-every must be at least 1");
        ensure!(rules.speed_step >= 0.0, "speed step must not be negative, got {}", rules.speed_step);

        let log_level = args
            .log_level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("unknown log level {:?}", args.log_level))?;

        Ok(Settings { arena, rules, seed: args.seed, log_file: args.log_file.clone(), log_level })
    }
}
