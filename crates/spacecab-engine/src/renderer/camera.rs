use glam::Vec2;

use crate::api::types::EntityHandle;
use crate::core::world::World;
use crate::renderer::painter::Painter;

/// 2D camera: a world-space point that ends up at the centre of the viewport.
pub struct Camera {
    /// Camera centre in world space.
    pub position: Vec2,
    /// Entity to track, if any. A stale handle leaves the camera where it was.
    pub follow: Option<EntityHandle>,
    /// Viewport size in screen units.
    pub viewport: Vec2,
}

impl Camera {
    /// A camera centred on the middle of the viewport, i.e. world (0,0) at the
    /// top-left corner of the screen.
    pub fn new(width: f32, height: f32) -> Self {
        let viewport = Vec2::new(width, height);
        Self {
            position: viewport / 2.0,
            follow: None,
            viewport,
        }
    }

    pub fn with_follow(mut self, target: EntityHandle) -> Self {
        self.follow = Some(target);
        self
    }

    pub fn set_follow(&mut self, target: Option<EntityHandle>) {
        self.follow = target;
    }

    /// Resize the viewport (e.g. on window resize). The camera centre is kept.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Snap to the followed entity's position.
    pub fn update(&mut self, world: &World) {
        if let Some(target) = self.follow.and_then(|h| world.get(h)) {
            self.position = target.pos;
        }
    }

    /// World-to-screen translation.
    pub fn offset(&self) -> Vec2 {
        -(self.position - self.viewport / 2.0)
    }

    pub fn world_to_screen(&self, point: Vec2) -> Vec2 {
        point + self.offset()
    }

    /// Push the world-to-screen transform. Pair with [`Camera::end`].
    pub fn begin(&self, painter: &mut dyn Painter) {
        painter.save();
        painter.translate(self.offset());
    }

    pub fn end(&self, painter: &mut dyn Painter) {
        painter.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::{Entity, EntityKind};
    use crate::components::layer::Layer;

    #[test]
    fn default_camera_has_zero_offset() {
        let cam = Camera::new(800.0, 600.0);
        assert_eq!(cam.offset(), Vec2::ZERO);
        assert_eq!(cam.world_to_screen(Vec2::new(5.0, 6.0)), Vec2::new(5.0, 6.0));
    }

    #[test]
    fn follow_centres_target() {
        let mut world = World::default();
        let h = world.spawn(
            Entity::new(EntityKind::Plain).with_pos(Vec2::new(1000.0, -200.0)),
            Layer::CRAFT,
            None,
        );
        let mut cam = Camera::new(800.0, 600.0).with_follow(h);
        cam.update(&world);
        assert_eq!(cam.position, Vec2::new(1000.0, -200.0));
        assert_eq!(cam.world_to_screen(Vec2::new(1000.0, -200.0)), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn stale_follow_keeps_last_position() {
        let mut world = World::default();
        let h = world.spawn(
            Entity::new(EntityKind::Plain).with_pos(Vec2::new(50.0, 60.0)),
            Layer::CRAFT,
            None,
        );
        let mut cam = Camera::new(100.0, 100.0).with_follow(h);
        cam.update(&world);
        world.get_mut(h).unwrap().ttl = 0.0;
        world.cleanup();
        cam.update(&world);
        assert_eq!(cam.position, Vec2::new(50.0, 60.0));
    }

    #[test]
    fn resize_recentres_offset() {
        let mut cam = Camera::new(100.0, 100.0);
        cam.position = Vec2::ZERO;
        cam.resize(200.0, 50.0);
        assert_eq!(cam.offset(), Vec2::new(100.0, 25.0));
    }
}
