//! Opaque visual handle for slot overlays.
//!
//! The slot systems never talk to a concrete UI toolkit. They mutate
//! [`SlotWidget`] components through the [`SlotVisual`] trait, and the host
//! renderer reads the resulting plain state (visibility, fill fraction,
//! label, sprite key) when drawing.

use bevy_ecs::prelude::Component;
use std::sync::Arc;

/// Mutation surface the presentation systems use on any visual handle.
pub trait SlotVisual {
    fn set_visible(&mut self, visible: bool);
    fn set_fill(&mut self, fraction: f32);
    fn set_text(&mut self, text: &str);
    fn set_text_visible(&mut self, visible: bool);
    fn set_sprite(&mut self, tex_key: &str);
}

/// Plain widget state for one overlay element.
///
/// One entity with a `SlotWidget` backs each fill bar, countdown label,
/// icon and disabled overlay of a slot. The host renderer decides what the
/// fields mean visually (radial fill, tint, font); this component only
/// carries the state.
#[derive(Component, Clone, Debug)]
pub struct SlotWidget {
    pub visible: bool,
    /// Fill fraction in `[0, 1]` for progress-bar widgets.
    pub fill: f32,
    pub text: Arc<str>,
    pub text_visible: bool,
    /// Texture key for icon widgets, resolved by the host renderer.
    pub tex_key: Option<String>,
}

impl Default for SlotWidget {
    fn default() -> Self {
        SlotWidget {
            visible: false,
            fill: 0.0,
            text: Arc::from(""),
            text_visible: false,
            tex_key: None,
        }
    }
}

impl SlotVisual for SlotWidget {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_fill(&mut self, fraction: f32) {
        self.fill = fraction;
    }

    fn set_text(&mut self, text: &str) {
        if &*self.text != text {
            self.text = Arc::from(text);
        }
    }

    fn set_text_visible(&mut self, visible: bool) {
        self.text_visible = visible;
    }

    fn set_sprite(&mut self, tex_key: &str) {
        self.tex_key = Some(tex_key.to_string());
    }
}
