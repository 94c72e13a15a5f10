use serde::{Deserialize, Serialize};

/// Gravity magnitude subtracted from vertical velocity each tick.
pub const GRAVITY: f32 = 0.01;
/// Distance moved per tick per unit of input delta.
pub const MOVE_SPEED: f32 = 0.1;
/// Vertical velocity granted by a jump.
pub const JUMP_IMPULSE: f32 = 0.3;
/// Player width for AABB collision.
pub const PLAYER_WIDTH: f32 = 0.5;
/// Player height for AABB collision.
pub const PLAYER_HEIGHT: f32 = 1.5;
/// Tile size in world units.
pub const TILE_SIZE: f32 = 1.0;

/// Configurable physics parameters, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_impulse: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub tile_size: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_impulse: JUMP_IMPULSE,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            tile_size: TILE_SIZE,
        }
    }
}

impl PhysicsConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("TILEBOUND_PHYSICS_CONFIG")
            .unwrap_or_else(|_| "config/physics.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<PhysicsConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    PhysicsConfig::default()
                },
            },
            Err(_) => PhysicsConfig::default(),
        }
    }
}
