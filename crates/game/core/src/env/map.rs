use crate::state::{Color, Position};

/// Static map oracle exposing immutable layout information.
pub trait MapOracle {
    fn dimensions(&self) -> MapDimensions;
    fn tile(&self, position: Position) -> Option<StaticTile>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// Out-of-bounds positions are not walkable.
    fn is_walkable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(StaticTile::is_walkable)
    }

    /// Out-of-bounds positions block sight.
    fn is_transparent(&self, position: Position) -> bool {
        self.tile(position).is_some_and(StaticTile::is_transparent)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of an in-bounds position.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }
}

/// Glyph and colors for drawing one tile in one lighting state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGraphic {
    pub glyph: char,
    pub fg: Color,
    pub bg: Color,
}

impl TileGraphic {
    pub const fn new(glyph: char, fg: Color, bg: Color) -> Self {
        Self { glyph, fg, bg }
    }
}

/// Graphic for tiles that were never seen.
pub const SHROUD: TileGraphic = TileGraphic::new(' ', Color::WHITE, Color::BLACK);

/// Immutable descriptor for a tile in the static layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    terrain: TerrainKind,
    /// Drawn when the tile is in view.
    pub light: TileGraphic,
    /// Drawn when the tile was explored but is out of view.
    pub dark: TileGraphic,
}

impl StaticTile {
    /// Creates a tile with the default graphics for the given terrain.
    pub const fn new(terrain: TerrainKind) -> Self {
        let (light, dark) = match terrain {
            TerrainKind::Floor => (
                TileGraphic::new(' ', Color::WHITE, Color::new(200, 180, 50)),
                TileGraphic::new(' ', Color::WHITE, Color::new(50, 50, 150)),
            ),
            TerrainKind::Wall => (
                TileGraphic::new(' ', Color::WHITE, Color::new(130, 110, 50)),
                TileGraphic::new(' ', Color::WHITE, Color::new(0, 0, 100)),
            ),
        };
        Self {
            terrain,
            light,
            dark,
        }
    }

    pub const fn floor() -> Self {
        Self::new(TerrainKind::Floor)
    }

    pub const fn wall() -> Self {
        Self::new(TerrainKind::Wall)
    }

    pub fn terrain(self) -> TerrainKind {
        self.terrain
    }

    pub fn is_walkable(self) -> bool {
        self.terrain.is_walkable()
    }

    pub fn is_transparent(self) -> bool {
        self.terrain.is_transparent()
    }
}

/// Canonical terrain classes for static map tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Floor,
    Wall,
}

impl TerrainKind {
    pub fn is_walkable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }

    pub fn is_transparent(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }
}

/// Width×height grid of tiles, row-major. Generated elsewhere, read here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    dimensions: MapDimensions,
    tiles: Vec<StaticTile>,
}

impl TileGrid {
    /// Creates a grid where every cell holds `tile`.
    pub fn filled(width: u32, height: u32, tile: StaticTile) -> Self {
        let dimensions = MapDimensions::new(width, height);
        Self {
            dimensions,
            tiles: vec![tile; dimensions.area()],
        }
    }

    /// Replaces a single cell. Intended for map construction; returns false
    /// when `position` is out of bounds.
    pub fn set_tile(&mut self, position: Position, tile: StaticTile) -> bool {
        match self.dimensions.index_of(position) {
            Some(index) => {
                self.tiles[index] = tile;
                true
            }
            None => false,
        }
    }

    /// Carves a rectangle of `tile`, clipped to the grid.
    pub fn fill_rect(&mut self, from: Position, to: Position, tile: StaticTile) {
        for y in from.y.min(to.y)..=from.y.max(to.y) {
            for x in from.x.min(to.x)..=from.x.max(to.x) {
                self.set_tile(Position::new(x, y), tile);
            }
        }
    }
}

impl MapOracle for TileGrid {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        self.dimensions
            .index_of(position)
            .map(|index| self.tiles[index])
    }
}
