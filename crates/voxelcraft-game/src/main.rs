//! Headless Voxelcraft driver.
//!
//! Loads the config, starts a session and plays a short scripted sequence
//! through the real input, physics and block-editing paths, logging the HUD
//! as it goes.
//!
//! Run with: `cargo run -p voxelcraft-game -- --frames 240`

mod script;

use std::path::Path;

use clap::Parser;
use tracing::{info, warn};
use voxelcraft_config::{AppDirs, CliArgs, Config};
use voxelcraft_input::{Bindings, KeyboardState, MouseState};
use voxelcraft_math::BlockCoord;
use voxelcraft_session::{CONTROLS_HELP, FrameClock, GameState, PlaceOutcome};
use voxelcraft_voxel::BlockType;

/// Fixed frame time used by the scripted run.
const FRAME_DT: f32 = 1.0 / 60.0;
/// Log the HUD every this many frames.
const HUD_INTERVAL: u32 = 30;

/// What the scripted run did.
#[derive(Debug, Default)]
struct RunSummary {
    frames: u32,
    placed: Vec<PlaceOutcome>,
    destroyed: Vec<(BlockCoord, BlockType)>,
    last_hud: Option<String>,
    returned_to_menu: bool,
}

fn run_script(config: &Config, frames: u32) -> RunSummary {
    let bindings = Bindings::default();
    let mut keyboard = KeyboardState::new();
    let mut mouse = MouseState::new();
    let mut state = GameState::default();
    let mut summary = RunSummary::default();

    state.start_game(config);
    let max_dt = state
        .session()
        .map_or(config.physics.max_dt, |session| session.params().max_dt);
    let mut clock = FrameClock::new(max_dt);

    for frame in 0..frames {
        for event in script::events_for(frame) {
            event.apply(&mut keyboard, &mut mouse);
        }
        let input = bindings.frame_input(&keyboard, &mouse);
        keyboard.clear_transients();
        mouse.clear_transients();

        if input.menu {
            summary.returned_to_menu = state.return_to_menu();
            break;
        }

        let Some(session) = state.session_mut() else {
            break;
        };

        let dt = clock.advance(FRAME_DT);
        let report = session.frame(&input, dt);
        summary.frames += 1;

        if let Some(outcome) = report.placed {
            info!(frame, ?outcome, "place");
            summary.placed.push(outcome);
        }
        if let Some(destroyed) = report.destroyed {
            info!(frame, coord = %destroyed.0, block = %destroyed.1, "destroy");
            summary.destroyed.push(destroyed);
        }
        if report.step.respawned {
            warn!(frame, "player respawned");
        }

        if frame % HUD_INTERVAL == 0 {
            let hud = session.hud().to_string();
            info!(frame, "{hud}");
            summary.last_hud = Some(hud);
        }
    }

    if state.is_playing() {
        summary.returned_to_menu = state.return_to_menu();
    }
    info!(
        frames = summary.frames,
        simulated_s = clock.total_time(),
        "scripted run finished"
    );
    summary
}

fn main() {
    let args = CliArgs::parse();

    let dirs = match &args.config {
        Some(dir) => AppDirs::at(dir),
        None => AppDirs::resolve().unwrap_or_else(|e| {
            eprintln!("{e}, using ./voxelcraft");
            AppDirs::at(Path::new("voxelcraft"))
        }),
    };

    let mut config = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    if let Err(e) =
        voxelcraft_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config))
    {
        eprintln!("Failed to initialise logging: {e}");
    }

    info!("Voxelcraft (headless)");
    info!("{CONTROLS_HELP}");
    info!(
        "Physics: gravity={} jump={} speed={} | reach={}",
        config.physics.gravity,
        config.physics.jump_speed,
        config.physics.move_speed,
        config.targeting.reach,
    );

    let summary = run_script(&config, args.frames);
    info!(
        frames = summary.frames,
        placed = summary.placed.len(),
        destroyed = summary.destroyed.len(),
        menu = summary.returned_to_menu,
        "done"
    );
}
