use bevy_ecs::prelude::*;

/// Event emitted by the host when a button widget is clicked.
///
/// The `button` field is the widget entity a slot binding registered; the
/// [`button_click_observer`](crate::systems::slotbar::button_click_observer)
/// resolves it to the bound slot and uses its action.
#[derive(Event, Debug, Clone, Copy)]
pub struct ButtonClickEvent {
    pub button: Entity,
}
