//! Hen Dash entry point
//!
//! Headless native runner: drives the simulation clock in real time with an
//! autopilot standing in for the keyboard, restarting after every game over.
//!
//! Usage: `hen-dash [--settings PATH] [--seed N] [--frames N] [--json]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::{self, BufWriter};
    use std::path::PathBuf;

    use clap::Parser;
    use hen_dash::consts::*;
    use hen_dash::renderer::{JsonLinesRenderer, LogRenderer};
    use hen_dash::sim::{GameSession, KeyBindings, player_hitbox};
    use hen_dash::{KeyState, Renderer, Settings, SimulationClock};

    /// Headless Hen Dash runner
    #[derive(Debug, Parser)]
    #[command(name = "hen-dash")]
    #[command(about = "Runs the Hen Dash simulation with an autopilot")]
    pub struct Options {
        /// Settings file (defaults to hen_dash_settings.json)
        #[arg(long)]
        pub settings: Option<PathBuf>,
        /// Fixed RNG seed, overriding the settings file
        #[arg(long)]
        pub seed: Option<u64>,
        /// Stop after this many frames
        #[arg(long)]
        pub frames: Option<u64>,
        /// Stream frame snapshots to stdout as JSON lines
        #[arg(long)]
        pub json: bool,
    }

    /// Plays the game: jumps at close obstacles, takes every dash, restarts
    pub fn autopilot(session: &GameSession, keys: &KeyBindings, input: &mut KeyState) {
        input.clear();

        if session.is_game_over() {
            input.press(&keys.restart);
            return;
        }

        // Jump when the next obstacle will reach the hitbox within a few ticks
        let hitbox = player_hitbox();
        let lookahead = session.phase.speed * 6.0;
        let threat = session.environment.obstacles.iter().any(|o| {
            let gap = o.x() - hitbox.right();
            (0.0..=lookahead).contains(&gap)
        });
        if threat {
            input.press(&keys.jump);
        }

        if session.dash.active && session.dash.fill() < 0.5 {
            input.press(session.dash.direction.key(keys));
        }
    }

    fn drive<D: Renderer + ?Sized>(
        clock: &mut SimulationClock,
        renderer: &mut D,
        frames: Option<u64>,
    ) {
        let mut input = KeyState::new();
        clock.run(&mut input, renderer, |clock, input| {
            if frames.is_some_and(|limit| clock.frames() >= limit) {
                clock.stop();
                return;
            }
            autopilot(clock.session(), clock.keys(), input);
        });
    }

    pub fn main() {
        env_logger::init();
        log::info!("Hen Dash (native) starting...");

        let options = Options::parse();

        let path = options
            .settings
            .clone()
            .unwrap_or_else(|| PathBuf::from(Settings::FILE_NAME));
        let mut settings = Settings::load(&path);
        if options.seed.is_some() {
            settings.seed = options.seed;
        }

        let mut clock = SimulationClock::from_settings(&settings);
        log::info!(
            "Player hitbox {:?}, ground at {}",
            player_hitbox(),
            GROUND_LEVEL
        );

        if options.json {
            let mut renderer = JsonLinesRenderer::new(BufWriter::new(io::stdout().lock()));
            drive(&mut clock, &mut renderer, options.frames);
            let written = renderer.written();
            if let Err(e) = renderer.finish() {
                log::error!("Could not flush snapshots: {}", e);
            }
            log::info!("Wrote {} snapshots", written);
        } else {
            drive(&mut clock, &mut LogRenderer, options.frames);
        }

        let session = clock.session();
        log::info!(
            "Finished after {} frames; best score {}",
            clock.frames(),
            session.high_score.best()
        );
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `SimulationClock::tick` from their own timer
}
