//! Hand-laid demo dungeon: rectangular rooms joined by L-shaped tunnels.

use game_core::{Position, StaticTile, TileGrid};

pub const MAP_WIDTH: u32 = 60;
pub const MAP_HEIGHT: u32 = 24;

/// Rectangular room; the outer ring stays wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// First and last floor cells.
    pub const fn inner(&self) -> (Position, Position) {
        (
            Position::new(self.x + 1, self.y + 1),
            Position::new(self.x + self.width - 1, self.y + self.height - 1),
        )
    }
}

pub const ROOMS: [Room; 5] = [
    Room::new(2, 2, 10, 7),
    Room::new(18, 3, 12, 6),
    Room::new(36, 2, 14, 8),
    Room::new(8, 13, 12, 8),
    Room::new(32, 14, 16, 7),
];

/// Carves every room, then tunnels from each room to the next.
pub fn build_map() -> TileGrid {
    let mut map = TileGrid::filled(MAP_WIDTH, MAP_HEIGHT, StaticTile::wall());

    for room in ROOMS {
        let (from, to) = room.inner();
        map.fill_rect(from, to, StaticTile::floor());
    }
    for pair in ROOMS.windows(2) {
        tunnel(&mut map, pair[0].center(), pair[1].center());
    }

    map
}

/// Horizontal leg first, then vertical.
fn tunnel(map: &mut TileGrid, from: Position, to: Position) {
    let corner = Position::new(to.x, from.y);
    map.fill_rect(from, corner, StaticTile::floor());
    map.fill_rect(corner, to, StaticTile::floor());
}
