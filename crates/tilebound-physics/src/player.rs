use serde::{Deserialize, Serialize};

use crate::aabb::Aabb;
use crate::config::PhysicsConfig;

/// Identity of one of the two players in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn other(self) -> PlayerSlot {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }
}

/// World-query capability consumed by collision checks. Implementations
/// supply the obstacles near a probe box and the other actor's current
/// bounding box; the physics core never holds a reference back into the
/// world.
pub trait CollisionWorld {
    /// Solid obstacle boxes near `probe`. Must include every tile the probe
    /// box could overlap; returning extra tiles is harmless.
    fn tiles_near(&self, probe: &Aabb) -> Vec<Aabb>;

    /// Current bounding box of the player opposite `slot`, if one exists.
    fn other_player_box(&self, slot: PlayerSlot) -> Option<Aabb>;
}

/// State of a single player: anchor position, vertical velocity, and the
/// grounded flag. The anchor is the center of the player's footprint; the
/// bounding box extends half an extent in each direction from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub slot: PlayerSlot,
    pub x: f32,
    pub y: f32,
    pub vel_y: f32,
    pub grounded: bool,
}

impl PlayerState {
    /// Spawn airborne at the given anchor; gravity takes over on the first
    /// tick.
    pub fn new(slot: PlayerSlot, x: f32, y: f32) -> Self {
        Self {
            slot,
            x,
            y,
            vel_y: 0.0,
            grounded: false,
        }
    }

    pub fn bounding_box(&self, cfg: &PhysicsConfig) -> Aabb {
        self.box_at(cfg, self.x, self.y)
    }

    /// Bounding box the player would have at `(x, y)`. Pure; used for both
    /// current-position and what-if queries.
    pub fn box_at(&self, cfg: &PhysicsConfig, x: f32, y: f32) -> Aabb {
        Aabb::from_anchor(x, y, cfg.player_width, cfg.player_height)
    }

    /// Whether moving by `(dx, dy)` would overlap a tile or the other
    /// player. The other player is tested at its CURRENT position: each
    /// actor resolves against the world as it stands when its turn comes.
    pub fn would_collide(
        &self,
        world: &impl CollisionWorld,
        cfg: &PhysicsConfig,
        dx: f32,
        dy: f32,
    ) -> bool {
        let probe = self.box_at(cfg, self.x + dx, self.y + dy);
        for tile in world.tiles_near(&probe) {
            if probe.intersects(&tile) {
                return true;
            }
        }
        if let Some(other) = world.other_player_box(self.slot) {
            if probe.intersects(&other) {
                return true;
            }
        }
        false
    }

    /// Move by the requested deltas scaled by the per-tick move speed,
    /// resolving one axis at a time. A blocked axis drops its delta
    /// entirely rather than clamping to contact, so the player slides
    /// along whichever axis remains free.
    pub fn apply_move(
        &mut self,
        world: &impl CollisionWorld,
        cfg: &PhysicsConfig,
        dx: f32,
        dy: f32,
    ) {
        if !dx.is_finite() || !dy.is_finite() {
            tracing::debug!(slot = ?self.slot, "Dropped non-finite move delta");
            return;
        }
        let dx = dx * cfg.move_speed;
        let dy = dy * cfg.move_speed;

        if !self.would_collide(world, cfg, dx, 0.0) {
            self.x += dx;
        }
        // Y resolves from the possibly-updated X
        if !self.would_collide(world, cfg, 0.0, dy) {
            self.y += dy;
        }
    }

    /// Advance vertical physics one tick: integrate gravity, probe the
    /// resulting displacement once, update the grounded flag, and commit
    /// the new position only while airborne and unblocked. A tick that
    /// grounds the player also freezes its position for that tick.
    pub fn tick(&mut self, world: &impl CollisionWorld, cfg: &PhysicsConfig) {
        self.vel_y -= cfg.gravity;
        let blocked = self.would_collide(world, cfg, 0.0, self.vel_y);

        if self.vel_y < 0.0 {
            if blocked {
                self.vel_y = 0.0;
                self.grounded = true;
            } else {
                self.grounded = false;
            }
        } else if blocked {
            self.vel_y = 0.0;
        }

        if !self.grounded && !blocked {
            self.y += self.vel_y;
        }
    }

    /// Jump if grounded; airborne jumps are ignored.
    pub fn jump(&mut self, cfg: &PhysicsConfig) {
        if self.grounded {
            self.vel_y = cfg.jump_impulse;
            self.grounded = false;
        }
    }
}
