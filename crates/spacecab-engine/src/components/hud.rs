use std::fmt;

use glam::Vec2;

use crate::components::entity::{Entity, EntityKind};
use crate::renderer::painter::{Color, TextAlign, TextStyle};

/// Read-only facts a HUD line may display, captured once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView {
    pub credits: i64,
}

/// Recomputes a HUD line every frame.
pub type TextUpdater = Box<dyn FnMut(&HudView) -> String>;

/// Screen-space text, unaffected by the camera.
pub struct HudText {
    pub text: String,
    pub style: TextStyle,
    pub updater: Option<TextUpdater>,
}

impl HudText {
    pub fn refresh(&mut self, view: &HudView) {
        if let Some(update) = self.updater.as_mut() {
            self.text = update(view);
        }
    }
}

impl fmt::Debug for HudText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HudText")
            .field("text", &self.text)
            .field("style", &self.style)
            .field("updater", &self.updater.is_some())
            .finish()
    }
}

pub struct HudTextConfig {
    /// Screen position of the text anchor.
    pub pos: Vec2,
    pub text: String,
    pub font: String,
    pub align: TextAlign,
    pub color: Color,
    pub updater: Option<TextUpdater>,
}

impl Default for HudTextConfig {
    fn default() -> Self {
        let style = TextStyle::default();
        Self {
            pos: Vec2::ZERO,
            text: String::new(),
            font: style.font,
            align: style.align,
            color: Color::WHITE,
            updater: None,
        }
    }
}

impl HudTextConfig {
    pub fn into_entity(self) -> Entity {
        Entity::new(EntityKind::HudText(HudText {
            text: self.text,
            style: TextStyle {
                font: self.font,
                align: self.align,
            },
            updater: self.updater,
        }))
        .with_pos(self.pos)
        .with_color(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_runs_updater() {
        let mut hud = HudText {
            text: "CREDITS:".into(),
            style: TextStyle::default(),
            updater: Some(Box::new(|v: &HudView| format!("CREDITS: {}", v.credits))),
        };
        hud.refresh(&HudView {
            credits: 25,
            ..Default::default()
        });
        assert_eq!(hud.text, "CREDITS: 25");
    }

    #[test]
    fn static_text_is_kept() {
        let mut hud = HudText {
            text: "hello".into(),
            style: TextStyle::default(),
            updater: None,
        };
        hud.refresh(&HudView::default());
        assert_eq!(hud.text, "hello");
    }
}
