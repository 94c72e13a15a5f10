pub mod aabb;
pub mod board;
pub mod config;
pub mod player;

use serde::{Deserialize, Serialize};

use aabb::Aabb;
use board::Board;
use config::PhysicsConfig;
use player::{CollisionWorld, PlayerSlot, PlayerState};

/// A running two-player simulation: the static board plus both player
/// states. All per-tick work is synchronous; nothing here suspends or
/// shares mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    players: [PlayerState; 2],
    config: PhysicsConfig,
}

/// Collision view handed to one player for one operation: the board plus a
/// snapshot of the other player's current box. Built per actor so the core
/// never holds a back-reference into the session.
struct BoardView<'a> {
    board: &'a Board,
    tile_size: f32,
    other: Option<Aabb>,
}

impl CollisionWorld for BoardView<'_> {
    fn tiles_near(&self, probe: &Aabb) -> Vec<Aabb> {
        self.board
            .tiles_around(probe, self.tile_size)
            .iter()
            .map(|t| t.bounding_box(self.tile_size))
            .collect()
    }

    fn other_player_box(&self, _slot: PlayerSlot) -> Option<Aabb> {
        self.other
    }
}

impl Session {
    pub fn new(
        board: Board,
        config: PhysicsConfig,
        spawn_one: (f32, f32),
        spawn_two: (f32, f32),
    ) -> Self {
        Self {
            board,
            players: [
                PlayerState::new(PlayerSlot::One, spawn_one.0, spawn_one.1),
                PlayerState::new(PlayerSlot::Two, spawn_two.0, spawn_two.1),
            ],
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn player(&self, slot: PlayerSlot) -> &PlayerState {
        &self.players[Self::index(slot)]
    }

    fn index(slot: PlayerSlot) -> usize {
        match slot {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    /// Advance physics one tick for both players, slot One first, always.
    /// The fixed order is the determinism contract: whoever resolves
    /// second sees the first mover's already-committed position.
    pub fn tick(&mut self) {
        for slot in [PlayerSlot::One, PlayerSlot::Two] {
            let other = self.players[Self::index(slot.other())].bounding_box(&self.config);
            let view = BoardView {
                board: &self.board,
                tile_size: self.config.tile_size,
                other: Some(other),
            };
            self.players[Self::index(slot)].tick(&view, &self.config);
        }
    }

    /// Apply a movement input to one player, resolved against the board
    /// and the other player's current position.
    pub fn move_player(&mut self, slot: PlayerSlot, dx: f32, dy: f32) {
        let other = self.players[Self::index(slot.other())].bounding_box(&self.config);
        let view = BoardView {
            board: &self.board,
            tile_size: self.config.tile_size,
            other: Some(other),
        };
        self.players[Self::index(slot)].apply_move(&view, &self.config, dx, dy);
    }

    pub fn jump(&mut self, slot: PlayerSlot) {
        self.players[Self::index(slot)].jump(&self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_board() -> Board {
        Board::from_rows(&[
            "........", //
            "########",
        ])
    }

    fn settled_session() -> Session {
        let mut session = Session::new(
            floor_board(),
            PhysicsConfig::default(),
            (2.0, 3.0),
            (5.0, 3.0),
        );
        for _ in 0..200 {
            session.tick();
        }
        session
    }

    #[test]
    fn both_players_settle_on_the_floor() {
        let session = settled_session();
        for slot in [PlayerSlot::One, PlayerSlot::Two] {
            let p = session.player(slot);
            assert!(p.grounded, "{slot:?} should be grounded");
            assert_eq!(p.vel_y, 0.0);
            // Resting anchor is 1.25 (tile top 0.5 plus half the player
            // height); grounding can stop up to one step short of contact.
            assert!(p.y >= 1.25 && p.y < 1.6, "rest y = {}", p.y);
        }
    }

    #[test]
    fn second_player_lands_on_the_first() {
        let mut session = Session::new(
            floor_board(),
            PhysicsConfig::default(),
            (2.0, 3.0),
            (2.0, 5.5),
        );
        for _ in 0..300 {
            session.tick();
        }

        let one = session.player(PlayerSlot::One);
        let two = session.player(PlayerSlot::Two);
        assert!(one.grounded);
        assert!(two.grounded, "upper player should ground on the lower one");
        assert!(two.y > one.y + 1.0);

        let cfg = session.config();
        assert!(
            !one.bounding_box(cfg).intersects(&two.bounding_box(cfg)),
            "stacked players must not overlap"
        );
    }

    #[test]
    fn players_block_each_other_horizontally() {
        let mut session = settled_session();
        // Walk player two up against player one, then keep pushing
        for _ in 0..100 {
            session.move_player(PlayerSlot::Two, -1.0, 0.0);
        }

        let cfg = session.config();
        let one = session.player(PlayerSlot::One);
        let two = session.player(PlayerSlot::Two);
        assert!(two.x > one.x, "pusher must stop on the near side");
        assert!(!one.bounding_box(cfg).intersects(&two.bounding_box(cfg)));
    }

    #[test]
    fn move_only_affects_the_addressed_player() {
        let mut session = settled_session();
        let two_before = *session.player(PlayerSlot::Two);

        session.move_player(PlayerSlot::One, 1.0, 0.0);

        assert_eq!(*session.player(PlayerSlot::Two), two_before);
        assert!(session.player(PlayerSlot::One).x > 2.0);
    }

    #[test]
    fn jump_arc_returns_to_rest() {
        let mut session = settled_session();
        let rest_y = session.player(PlayerSlot::One).y;

        session.jump(PlayerSlot::One);
        assert!(!session.player(PlayerSlot::One).grounded);
        assert_eq!(
            session.player(PlayerSlot::One).vel_y,
            session.config().jump_impulse
        );

        session.tick();
        assert!(
            session.player(PlayerSlot::One).y > rest_y,
            "first airborne tick should rise"
        );

        for _ in 0..300 {
            session.tick();
        }
        let p = session.player(PlayerSlot::One);
        assert!(p.grounded, "player should land again");
        assert_eq!(p.vel_y, 0.0);
        assert!(p.y >= 1.25 && p.y < 1.6);
    }

    #[test]
    fn airborne_jump_is_ignored() {
        let mut session = settled_session();
        session.jump(PlayerSlot::One);
        let vel_after_first = session.player(PlayerSlot::One).vel_y;

        session.jump(PlayerSlot::One);
        assert_eq!(session.player(PlayerSlot::One).vel_y, vel_after_first);
    }

    #[test]
    fn session_state_json_round_trip() {
        let session = settled_session();
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.players, session.players);
        assert_eq!(restored.board.width, session.board.width);
        assert_eq!(restored.board.height, session.board.height);
    }
}
