//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Subsystems run
//! in a fixed order so a seeded random source replays a run exactly:
//! speed phase, jump, dash, physics, prune/scroll, collision, spawning,
//! animation.

use super::collision::first_hit;
use super::dash::DashEvent;
use super::input::{InputSource, KeyBindings};
use super::phase::SpeedPhase;
use super::rng::RandomSource;
use super::state::GameSession;

/// What happened during one step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// False when the session was already over and nothing ran
    pub stepped: bool,
    pub phase_changed: bool,
    pub dash: Option<DashEvent>,
    pub spawned_obstacle: bool,
    pub spawned_cloud: bool,
    /// This step ended the run
    pub game_over: bool,
}

/// Advance the session by one fixed step
pub fn step<I, R>(
    session: &mut GameSession,
    input: &I,
    keys: &KeyBindings,
    rng: &mut R,
) -> TickOutcome
where
    I: InputSource + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut outcome = TickOutcome::default();
    if session.is_game_over() {
        return outcome;
    }
    outcome.stepped = true;

    session.tick += 1;

    // Difficulty tier and base speed
    let phase = SpeedPhase::for_tick(session.tick);
    if phase.index != session.phase.index {
        log::info!("Speed phase {} at tick {}", phase.index, session.tick);
        outcome.phase_changed = true;
    }
    session.phase = phase;
    session.player.horizontal_speed = phase.speed;

    if input.is_held(&keys.jump) {
        session.player.try_jump();
    }

    // A resolving dash overrides the phase speed for this step
    outcome.dash = session
        .dash
        .update(phase, &mut session.player, input, keys, rng);

    session.player.integrate();

    session
        .environment
        .advance(session.player.horizontal_speed);

    if let Some(index) = first_hit(&session.environment.obstacles, session.player.camera_y) {
        log::debug!(
            "Hit obstacle {} {:?}",
            index,
            session.environment.obstacles[index].rect
        );
        outcome.game_over = session.trigger_game_over();
        return outcome;
    }

    let speed = session.player.horizontal_speed;
    outcome.spawned_obstacle = session
        .environment
        .spawn_obstacle(phase, speed, rng)
        .is_some();
    outcome.spawned_cloud = session
        .environment
        .spawn_cloud(phase, speed, rng)
        .is_some();

    session.player.animation = session.player.select_animation(session.tick);

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::KeyState;
    use crate::sim::collision::Rect;
    use crate::sim::dash::DashDirection;
    use crate::sim::environment::Obstacle;
    use crate::sim::player::AnimationFrame;
    use crate::sim::rng::RngState;
    use crate::sim::rng::testing::ScriptedRng;

    fn run(session: &mut GameSession, ticks: u64, rng: &mut ScriptedRng) {
        let keys = KeyBindings::default();
        let input = KeyState::new();
        for _ in 0..ticks {
            step(session, &input, &keys, rng);
        }
    }

    #[test]
    fn test_quiet_run_advances_phase() {
        let mut session = GameSession::new();
        let mut rng = ScriptedRng::closed();
        run(&mut session, 1200, &mut rng);
        assert_eq!(session.tick, 1200);
        assert_eq!(session.phase.index, 3);
        assert_eq!(session.player.horizontal_speed, 12.0);
        assert_eq!(session.player.camera_x, 499.0 * 8.0 + 500.0 * 10.0 + 201.0 * 12.0);
        assert_eq!(session.player.animation, AnimationFrame::Run(0));
        assert!(session.is_running());
    }

    #[test]
    fn test_draw_order_within_tick() {
        let mut session = GameSession::new();
        let keys = KeyBindings::default();
        let input = KeyState::new();
        // dash roll misses, obstacle spawns (gate, width, height), cloud gate misses
        let mut rng = ScriptedRng::new([2, 1, 45, 60, 2]);
        let outcome = step(&mut session, &input, &keys, &mut rng);
        assert_eq!(
            rng.calls,
            vec![(1, 200), (1, 100), (30, 60), (40, 80), (1, 100)]
        );
        assert!(outcome.spawned_obstacle);
        assert!(!outcome.spawned_cloud);
        assert_eq!(
            session.environment.obstacles[0].rect,
            Rect::new(1700.0, 690.0, 45.0, 60.0)
        );
    }

    #[test]
    fn test_collision_triggers_game_over_once() {
        let mut session = GameSession::new();
        // After the first step's scroll of 8 this sits at (600, 660, 60, 70)
        session.environment.obstacles.push(Obstacle {
            rect: Rect::new(608.0, 660.0, 60.0, 70.0),
        });
        let keys = KeyBindings::default();
        let input = KeyState::new();
        let mut rng = ScriptedRng::closed();

        let outcome = step(&mut session, &input, &keys, &mut rng);
        assert!(outcome.game_over);
        assert!(session.is_game_over());
        assert_eq!(session.score, 1);
        assert_eq!(session.high_score.best(), 1);

        for _ in 0..5 {
            let outcome = step(&mut session, &input, &keys, &mut rng);
            assert!(!outcome.stepped);
            assert!(!outcome.game_over);
        }
        assert_eq!(session.tick, 1);
        assert_eq!(session.environment.obstacles[0].rect.pos.x, 600.0);
    }

    #[test]
    fn test_jump_over_obstacle() {
        let mut session = GameSession::new();
        let keys = KeyBindings::default();
        let mut rng = ScriptedRng::closed();
        // Overlaps the hitbox on ticks 7..=17 at speed 8
        session
            .environment
            .obstacles
            .push(Obstacle::on_ground(730.0, 30.0, 40.0));

        let mut input = KeyState::new();
        input.press("w");
        step(&mut session, &input, &keys, &mut rng);
        input.release("w");
        assert!(!session.player.is_grounded);
        assert_eq!(session.player.animation, AnimationFrame::Jump);

        for _ in 0..30 {
            step(&mut session, &input, &keys, &mut rng);
        }
        assert!(session.is_running());
        assert!(session.player.is_grounded);
    }

    #[test]
    fn test_standing_still_hits_obstacle() {
        let mut session = GameSession::new();
        let mut rng = ScriptedRng::closed();
        session
            .environment
            .obstacles
            .push(Obstacle::on_ground(730.0, 30.0, 40.0));
        run(&mut session, 30, &mut rng);
        assert!(session.is_game_over());
    }

    #[test]
    fn test_dash_overrides_speed_for_one_tick() {
        let mut session = GameSession::new();
        let keys = KeyBindings::default();
        let mut input = KeyState::new();
        // Dash starts: roll 1, duration 60, direction right
        let mut rng = ScriptedRng::new([1, 60, 1]);
        let outcome = step(&mut session, &input, &keys, &mut rng);
        assert!(matches!(
            outcome.dash,
            Some(DashEvent::Started {
                direction: DashDirection::Right,
                ..
            })
        ));

        input.press("d");
        let outcome = step(&mut session, &input, &keys, &mut rng);
        assert!(matches!(outcome.dash, Some(DashEvent::Resolved { speed, .. }) if speed == 100.0));
        assert_eq!(session.player.horizontal_speed, 100.0);

        input.release("d");
        step(&mut session, &input, &keys, &mut rng);
        assert_eq!(session.player.horizontal_speed, 8.0);
    }

    #[test]
    fn test_leftward_dash_spawns_on_left() {
        let mut session = GameSession::new();
        let keys = KeyBindings::default();
        let mut input = KeyState::new();
        input.press("a");
        // Tick 1: dash left starts, both spawn gates miss.
        // Tick 2: resolves at -100, obstacle spawns on the left edge.
        let mut rng = ScriptedRng::new([1, 60, 0, 2, 2, 1, 30, 40, 2]);
        step(&mut session, &input, &keys, &mut rng);
        assert!(session.environment.obstacles.is_empty());
        step(&mut session, &input, &keys, &mut rng);
        assert_eq!(session.player.horizontal_speed, -100.0);
        assert_eq!(session.environment.obstacles[0].x(), -199.0);

        // Forward scroll resumes and pushes it out of the band
        step(&mut session, &input, &keys, &mut rng);
        assert_eq!(session.player.horizontal_speed, 8.0);
        assert!(session.environment.obstacles.is_empty());
    }

    #[test]
    fn test_reset_flow_keeps_high_score() {
        let mut session = GameSession::new();
        let mut rng = ScriptedRng::closed();
        run(&mut session, 1200, &mut rng);
        session.trigger_game_over();
        assert_eq!(session.score, 1200);

        assert!(session.reset());
        assert_eq!(session.tick, 0);
        assert!(session.is_running());
        assert_eq!(session.high_score.best(), 1200);

        run(&mut session, 800, &mut rng);
        session.trigger_game_over();
        assert_eq!(session.score, 800);
        assert_eq!(session.high_score.best(), 1200);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with same seed and inputs should end up identical
        let keys = KeyBindings::default();
        let mut s1 = GameSession::new();
        let mut s2 = GameSession::new();
        let mut rng1 = RngState::new(99999).to_rng();
        let mut rng2 = RngState::new(99999).to_rng();

        let mut input = KeyState::new();
        for t in 0..3000u64 {
            if t % 37 == 0 {
                input.press("w");
            } else {
                input.release("w");
            }
            if t % 11 == 0 {
                input.press("d");
            } else {
                input.release("d");
            }
            step(&mut s1, &input, &keys, &mut rng1);
            step(&mut s2, &input, &keys, &mut rng2);
        }

        assert_eq!(s1.tick, s2.tick);
        assert_eq!(
            serde_json::to_string(&s1).unwrap(),
            serde_json::to_string(&s2).unwrap()
        );
    }
}
