use serde::{Deserialize, Serialize};

use crate::aabb::Aabb;

/// Tile types for the board grid. Everything except `Empty` is solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Empty,
    Brick,
    Wall,
}

impl TileKind {
    pub fn is_solid(self) -> bool {
        !matches!(self, TileKind::Empty)
    }
}

/// A placed tile. Immutable after construction; collision reads it through
/// `bounding_box` only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    /// Anchor position in world units (same anchor convention as players).
    pub x: f32,
    pub y: f32,
}

impl Tile {
    pub fn bounding_box(&self, tile_size: f32) -> Aabb {
        Aabb::from_anchor(self.x, self.y, tile_size, tile_size)
    }
}

/// Static tile grid, stored row-major (y * width + x) with y increasing
/// upward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub width: u32,
    pub height: u32,
    tiles: Vec<TileKind>,
}

impl Board {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileKind::Empty; (width * height) as usize],
        }
    }

    /// Build a board from a text layout, rows listed top-first the way a
    /// level reads: `#` wall, `b` brick, anything else empty.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
        let mut board = Self::new(width, height);
        for (row_idx, row) in rows.iter().enumerate() {
            let y = height - 1 - row_idx as u32;
            for (x, c) in row.chars().enumerate() {
                let kind = match c {
                    '#' => TileKind::Wall,
                    'b' => TileKind::Brick,
                    _ => TileKind::Empty,
                };
                board.tiles[(y * width) as usize + x] = kind;
            }
        }
        board
    }

    /// Tile kind at grid cell `(x, y)`; out-of-bounds cells are `Empty`.
    pub fn kind_at(&self, x: i32, y: i32) -> TileKind {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return TileKind::Empty;
        }
        self.tiles[y as usize * self.width as usize + x as usize]
    }

    /// Solid tiles in the grid neighborhood of `probe`, inflated by one
    /// tile in every direction. The caller's probe box must already cover
    /// the whole displacement it is testing; the inflation keeps the
    /// neighborhood a strict superset of anything that box can touch.
    pub fn tiles_around(&self, probe: &Aabb, tile_size: f32) -> Vec<Tile> {
        // Cell (cx, cy) spans [cx*size - size/2, cx*size + size/2].
        let min_cx = (probe.x / tile_size - 0.5).floor() as i32 - 1;
        let max_cx = (probe.right() / tile_size + 0.5).ceil() as i32 + 1;
        let min_cy = (probe.y / tile_size - 0.5).floor() as i32 - 1;
        let max_cy = (probe.top() / tile_size + 0.5).ceil() as i32 + 1;

        let mut tiles = Vec::new();
        for cy in min_cy..=max_cy {
            for cx in min_cx..=max_cx {
                let kind = self.kind_at(cx, cy);
                if kind.is_solid() {
                    tiles.push(Tile {
                        kind,
                        x: cx as f32 * tile_size,
                        y: cy as f32 * tile_size,
                    });
                }
            }
        }
        tiles
    }
}
