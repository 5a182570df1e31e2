use crate::api::types::EntityHandle;
use crate::components::entity::EntityKind;
use crate::core::world::World;

/// Re-run a HUD line's updater against this frame's [`HudView`](crate::components::hud::HudView).
pub fn refresh_text(world: &mut World, handle: EntityHandle) {
    let view = world.hud_view();
    if let Some(EntityKind::HudText(hud)) = world.get_mut(handle).map(|e| &mut e.kind) {
        hud.refresh(&view);
    }
}
