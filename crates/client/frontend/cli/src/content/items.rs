use game_core::{ActionError, Color, Impossible, ItemActionContext, ItemHandle, ItemOracle};

pub const HEALING_POTION: ItemHandle = ItemHandle(0);
pub const POTION_COLOR: Color = Color::new(127, 0, 255);

/// Consumable definitions keyed by handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    HealingPotion { amount: i32 },
}

impl ItemKind {
    pub fn from_handle(handle: ItemHandle) -> Option<Self> {
        match handle {
            HEALING_POTION => Some(Self::HealingPotion { amount: 4 }),
            _ => None,
        }
    }
}

/// Effects for the demo's consumables.
pub struct DemoItems;

impl ItemOracle for DemoItems {
    fn activate(
        &self,
        handle: ItemHandle,
        ctx: &mut ItemActionContext<'_, '_>,
    ) -> Result<(), ActionError> {
        let Some(kind) = ItemKind::from_handle(handle) else {
            tracing::warn!(handle = handle.0, "unknown consumable");
            return Err(Impossible::consumable("Nothing happens.").into());
        };

        match kind {
            ItemKind::HealingPotion { amount } => {
                let recovered = ctx.actor_fighter_mut()?.heal(amount);
                if recovered <= 0 {
                    return Err(Impossible::consumable("Your health is already full.").into());
                }
                let potion = ctx.consume()?;
                let color = ctx.palette().health_recovered;
                ctx.message(
                    format!("You consume the {}, and recover {recovered} HP!", potion.name),
                    color,
                );
            }
        }
        Ok(())
    }
}
