use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// An icon the host renderer can draw for a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct IconDef {
    /// Texture key understood by the host renderer.
    pub tex_key: String,
    /// Icon size in pixels.
    pub width: f32,
    pub height: f32,
}

/// Icon definitions keyed by string IDs, filled by the host at startup.
///
/// Slot bindings reference icons by key; unknown keys are logged and the
/// icon widget is left empty.
#[derive(Resource, Debug, Clone, Default)]
pub struct IconStore {
    map: FxHashMap<String, IconDef>,
}

impl IconStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, icon: IconDef) {
        self.map.insert(key.into(), icon);
    }

    pub fn get(&self, key: &str) -> Option<&IconDef> {
        self.map.get(key)
    }
}
