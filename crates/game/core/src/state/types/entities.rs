use super::{Color, EntityId, Inventory, ItemHandle, Position};

/// Draw ordering for entities sharing a tile. Later variants draw on top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderOrder {
    Corpse,
    Item,
    #[default]
    Actor,
}

/// Combat capability. An entity carrying one is an actor.
///
/// `hp` is signed: melee applies the full difference and death handling
/// happens outside the core, so a defender may sit below zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub hp: i32,
    pub max_hp: i32,
    pub power: i32,
    pub defense: i32,
}

impl Fighter {
    /// Creates a fighter at full health.
    pub const fn new(max_hp: i32, power: i32, defense: i32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            power,
            defense,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Restores up to `amount` hit points without exceeding `max_hp`.
    ///
    /// Returns the amount actually recovered.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if self.hp >= self.max_hp || amount <= 0 {
            return 0;
        }
        let restored = (self.hp + amount).min(self.max_hp);
        let recovered = restored - self.hp;
        self.hp = restored;
        recovered
    }
}

/// Marks an entity as a usable item. Behavior lives behind the item oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Consumable {
    pub handle: ItemHandle,
}

impl Consumable {
    pub const fn new(handle: ItemHandle) -> Self {
        Self { handle }
    }
}

/// Anything placed on the map: the player, monsters, items.
///
/// Capabilities are optional attachments queried explicitly; there is no
/// class hierarchy. The inventory is boxed because it owns whole entities.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub glyph: char,
    pub color: Color,
    pub blocks_movement: bool,
    pub render_order: RenderOrder,

    pub fighter: Option<Fighter>,
    pub inventory: Option<Box<Inventory>>,
    pub consumable: Option<Consumable>,
}

impl Entity {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        position: Position,
        glyph: char,
        color: Color,
        blocks_movement: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            glyph,
            color,
            blocks_movement,
            render_order: RenderOrder::Actor,
            fighter: None,
            inventory: None,
            consumable: None,
        }
    }

    /// Blocking combatant.
    pub fn actor(
        id: EntityId,
        name: impl Into<String>,
        position: Position,
        glyph: char,
        color: Color,
        fighter: Fighter,
    ) -> Self {
        Self::new(id, name, position, glyph, color, true).with_fighter(fighter)
    }

    /// Non-blocking item placeholder drawn as `!`. Attach a consumable with
    /// [`Entity::with_consumable`].
    pub fn item(id: EntityId, name: impl Into<String>, position: Position) -> Self {
        Self::new(id, name, position, '!', Color::WHITE, false).with_render_order(RenderOrder::Item)
    }

    pub fn with_fighter(mut self, fighter: Fighter) -> Self {
        self.fighter = Some(fighter);
        self
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = Some(Box::new(inventory));
        self
    }

    pub fn with_consumable(mut self, consumable: Consumable) -> Self {
        self.consumable = Some(consumable);
        self
    }

    pub fn with_render_order(mut self, render_order: RenderOrder) -> Self {
        self.render_order = render_order;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn is_actor(&self) -> bool {
        self.fighter.is_some()
    }

    pub fn is_item(&self) -> bool {
        self.consumable.is_some()
    }

    pub fn is_alive(&self) -> bool {
        self.fighter.is_some_and(|fighter| fighter.is_alive())
    }

    pub fn inventory(&self) -> Option<&Inventory> {
        self.inventory.as_deref()
    }

    pub fn inventory_mut(&mut self) -> Option<&mut Inventory> {
        self.inventory.as_deref_mut()
    }
}

/// The live entity set of the active map.
///
/// Iteration order is insertion order; every "first match" query relies on
/// it, so the backing store must stay an ordered `Vec`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    entities: Vec<Entity>,
    next_id: u32,
}

impl EntitiesState {
    pub fn empty() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 0,
        }
    }

    /// Allocates a fresh identifier. Identifiers are never reused.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Allocates an identifier, builds the entity with it, and appends it.
    pub fn spawn(&mut self, build: impl FnOnce(EntityId) -> Entity) -> EntityId {
        let id = self.allocate_id();
        self.insert(build(id));
        id
    }

    /// Appends an entity to the end of the set.
    pub fn insert(&mut self, entity: Entity) {
        debug_assert!(
            self.get(entity.id).is_none(),
            "entity {} inserted twice",
            entity.id
        );
        self.next_id = self.next_id.max(entity.id.0 + 1);
        self.entities.push(entity);
    }

    /// Removes an entity, preserving the order of the rest.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|entity| entity.id == id)?;
        Some(self.entities.remove(index))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Entities carrying a fighter capability, alive or not.
    pub fn actors(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|entity| entity.is_actor())
    }

    /// Item entities lying at `position`, in insertion order.
    pub fn items_at(&self, position: Position) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(move |entity| entity.is_item() && entity.position == position)
    }

    /// First entity with `blocks_movement` at `position`.
    pub fn blocking_entity_at(&self, position: Position) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|entity| entity.blocks_movement && entity.position == position)
    }

    /// First entity with a fighter at `position`, regardless of blocking.
    pub fn actor_at(&self, position: Position) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|entity| entity.is_actor() && entity.position == position)
    }
}

impl Default for EntitiesState {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orc(id: u32, position: Position) -> Entity {
        Entity::actor(
            EntityId(id),
            "Orc",
            position,
            'o',
            Color::new(63, 127, 63),
            Fighter::new(10, 3, 0),
        )
    }

    #[test]
    fn blocking_lookup_uses_insertion_order() {
        let mut entities = EntitiesState::empty();
        let here = Position::new(2, 2);
        entities.insert(orc(7, here));
        entities.insert(orc(3, here));

        assert_eq!(entities.blocking_entity_at(here).unwrap().id, EntityId(7));
        assert!(entities.blocking_entity_at(Position::new(0, 0)).is_none());
    }

    #[test]
    fn actor_lookup_ignores_blocking_flag() {
        let mut entities = EntitiesState::empty();
        let here = Position::new(1, 1);
        let mut ghost = orc(1, here);
        ghost.blocks_movement = false;
        entities.insert(Entity::item(EntityId(0), "Potion", here));
        entities.insert(ghost);

        assert!(entities.blocking_entity_at(here).is_none());
        assert_eq!(entities.actor_at(here).unwrap().id, EntityId(1));
    }

    #[test]
    fn allocated_ids_skip_inserted_ids() {
        let mut entities = EntitiesState::empty();
        entities.insert(orc(5, Position::ORIGIN));
        assert_eq!(entities.allocate_id(), EntityId(6));
    }

    #[test]
    fn heal_clamps_to_max_hp() {
        let mut fighter = Fighter::new(30, 5, 2);
        fighter.hp = 25;
        assert_eq!(fighter.heal(10), 5);
        assert_eq!(fighter.hp, 30);
        assert_eq!(fighter.heal(10), 0);
    }
}
