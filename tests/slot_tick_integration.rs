//! Tick integration tests for action timers and slot widget updates.

use bevy_ecs::prelude::*;

use slotbar::components::action::Action;
use slotbar::components::actionslot::{ActionSlot, OverlayConfig};
use slotbar::components::widget::SlotWidget;
use slotbar::presenter::DisplayMode;
use slotbar::resources::worldtime::WorldTime;
use slotbar::systems::action::action_tick_system;
use slotbar::systems::slot::slot_update_system;
use slotbar::systems::time::update_world_time;

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
    });
    world
}

fn tick_actions(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(action_tick_system);
    schedule.run(world);
}

fn tick_slots(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(slot_update_system);
    schedule.run(world);
}

/// Spawns a slot with cooldown fill/text widgets bound to `action`.
fn spawn_slot(world: &mut World, action: Entity, config: OverlayConfig) -> (Entity, Entity, Entity) {
    let fill = world.spawn(SlotWidget::default()).id();
    let text = world.spawn(SlotWidget::default()).id();
    let slot = world
        .spawn(
            ActionSlot::new()
                .with_action(action)
                .with_cooldown(config),
        )
        .id();
    let mut slot_ref = world.get_mut::<ActionSlot>(slot).unwrap();
    slot_ref.cooldown_fill = Some(fill);
    slot_ref.cooldown_text = Some(text);
    (slot, fill, text)
}

fn seconds_overlay() -> OverlayConfig {
    OverlayConfig {
        enabled: true,
        mode: DisplayMode::SecondsOnly,
        show_text: true,
    }
}

// =============================================================================
// Action Timer Tests
// =============================================================================

#[test]
fn action_cooldown_counts_down() {
    let mut world = make_world(0.5);
    let mut action = Action::new(2.0, 1.0);
    action.use_action();
    let entity = world.spawn((action,)).id();

    tick_actions(&mut world);

    let action = world.get::<Action>(entity).unwrap();
    assert!(approx_eq(action.remaining_cooldown, 1.5));
    assert!(approx_eq(action.remaining_duration, 0.5));
}

#[test]
fn action_timers_clamp_at_zero() {
    let mut world = make_world(10.0);
    let mut action = Action::new(2.0, 1.0);
    action.use_action();
    let entity = world.spawn((action,)).id();

    tick_actions(&mut world);

    let action = world.get::<Action>(entity).unwrap();
    assert!(approx_eq(action.remaining_cooldown, 0.0));
    assert!(approx_eq(action.remaining_duration, 0.0));
    assert!(action.ready());
}

#[test]
fn action_use_fails_while_on_cooldown() {
    let mut action = Action::new(5.0, 2.0);
    assert!(action.use_action());
    assert!(!action.use_action());
    assert!(approx_eq(action.remaining_cooldown, 5.0));
}

#[test]
fn time_scale_stretches_cooldowns() {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(0.5));

    let mut action = Action::new(2.0, 0.0);
    action.use_action();
    let entity = world.spawn((action,)).id();

    update_world_time(&mut world, 1.0); // effective delta 0.5
    tick_actions(&mut world);

    let action = world.get::<Action>(entity).unwrap();
    assert!(approx_eq(action.remaining_cooldown, 1.5));
}

// =============================================================================
// Slot Widget Update Tests
// =============================================================================

#[test]
fn slot_hides_overlay_when_action_is_ready() {
    let mut world = make_world(0.0);
    let action = world.spawn(Action::new(5.0, 0.0)).id();
    let (_slot, fill, text) = spawn_slot(&mut world, action, seconds_overlay());

    tick_slots(&mut world);

    let fill_widget = world.get::<SlotWidget>(fill).unwrap();
    let text_widget = world.get::<SlotWidget>(text).unwrap();
    assert!(!fill_widget.visible);
    assert!(!text_widget.text_visible);
}

#[test]
fn slot_shows_fill_and_label_during_cooldown() {
    let mut world = make_world(0.0);
    let mut action = Action::new(10.0, 0.0);
    action.use_action();
    action.remaining_cooldown = 4.2;
    let action = world.spawn(action).id();
    let (_slot, fill, text) = spawn_slot(&mut world, action, seconds_overlay());

    tick_slots(&mut world);

    let fill_widget = world.get::<SlotWidget>(fill).unwrap();
    let text_widget = world.get::<SlotWidget>(text).unwrap();
    assert!(fill_widget.visible);
    assert!(approx_eq(fill_widget.fill, 0.42));
    assert!(text_widget.text_visible);
    assert_eq!(&*text_widget.text, "5s");
}

#[test]
fn show_text_false_keeps_label_hidden_while_fill_shows() {
    let mut world = make_world(0.0);
    let mut action = Action::new(10.0, 0.0);
    action.use_action();
    let action = world.spawn(action).id();
    let config = OverlayConfig {
        show_text: false,
        ..seconds_overlay()
    };
    let (_slot, fill, text) = spawn_slot(&mut world, action, config);

    tick_slots(&mut world);

    let fill_widget = world.get::<SlotWidget>(fill).unwrap();
    let text_widget = world.get::<SlotWidget>(text).unwrap();
    assert!(fill_widget.visible);
    assert!(!text_widget.text_visible);
}

#[test]
fn disabled_overlay_config_hides_running_cooldown() {
    let mut world = make_world(0.0);
    let mut action = Action::new(10.0, 0.0);
    action.use_action();
    let action = world.spawn(action).id();
    let config = OverlayConfig {
        enabled: false,
        ..seconds_overlay()
    };
    let (_slot, fill, text) = spawn_slot(&mut world, action, config);

    tick_slots(&mut world);

    let fill_widget = world.get::<SlotWidget>(fill).unwrap();
    let text_widget = world.get::<SlotWidget>(text).unwrap();
    assert!(!fill_widget.visible);
    assert!(!text_widget.text_visible);
}

#[test]
fn missing_action_leaves_widgets_untouched() {
    let mut world = make_world(0.0);
    let fake_action = Entity::from_bits(99999);
    let (_slot, fill, text) = spawn_slot(&mut world, fake_action, seconds_overlay());

    // Pre-set widget state to prove the update skipped it.
    world.get_mut::<SlotWidget>(fill).unwrap().fill = 0.75;

    tick_slots(&mut world);

    let fill_widget = world.get::<SlotWidget>(fill).unwrap();
    let text_widget = world.get::<SlotWidget>(text).unwrap();
    assert!(approx_eq(fill_widget.fill, 0.75));
    assert!(!fill_widget.visible);
    assert_eq!(&*text_widget.text, "");
}

#[test]
fn zero_total_skips_the_tick_without_panicking() {
    let mut world = make_world(0.0);
    let action = world
        .spawn(Action {
            remaining_cooldown: 5.0,
            total_cooldown: 0.0,
            remaining_duration: 0.0,
            total_duration: 0.0,
        })
        .id();
    let (_slot, fill, _text) = spawn_slot(&mut world, action, seconds_overlay());

    tick_slots(&mut world);

    // Widget keeps its previous (default) state.
    let fill_widget = world.get::<SlotWidget>(fill).unwrap();
    assert!(!fill_widget.visible);
    assert!(approx_eq(fill_widget.fill, 0.0));
}

#[test]
fn duration_overlay_updates_independently() {
    let mut world = make_world(0.0);
    let mut action = Action::new(0.0, 8.0);
    action.use_action();
    action.remaining_duration = 2.0;
    let action = world.spawn(action).id();

    let duration_fill = world.spawn(SlotWidget::default()).id();
    let slot = world
        .spawn(ActionSlot::new().with_action(action).with_duration(
            OverlayConfig {
                enabled: true,
                mode: DisplayMode::HoursThenMinutesThenSeconds,
                show_text: true,
            },
        ))
        .id();
    world.get_mut::<ActionSlot>(slot).unwrap().duration_fill = Some(duration_fill);

    tick_slots(&mut world);

    let widget = world.get::<SlotWidget>(duration_fill).unwrap();
    assert!(widget.visible);
    assert!(approx_eq(widget.fill, 0.25));
}

#[test]
fn disabled_slot_shows_disabled_overlay() {
    let mut world = make_world(0.0);
    let action = world.spawn(Action::new(5.0, 0.0)).id();

    let overlay = world.spawn(SlotWidget::default()).id();
    let slot = world
        .spawn(ActionSlot {
            action: Some(action),
            enabled: false,
            disabled_overlay: Some(overlay),
            ..ActionSlot::new()
        })
        .id();

    tick_slots(&mut world);

    assert!(world.get::<SlotWidget>(overlay).unwrap().visible);

    world.get_mut::<ActionSlot>(slot).unwrap().enabled = true;
    tick_slots(&mut world);

    assert!(!world.get::<SlotWidget>(overlay).unwrap().visible);
}

#[test]
fn repeated_ticks_with_frozen_time_are_stable() {
    let mut world = make_world(0.0);
    let mut action = Action::new(10.0, 0.0);
    action.use_action();
    action.remaining_cooldown = 6.0;
    let action = world.spawn(action).id();
    let (_slot, fill, text) = spawn_slot(&mut world, action, seconds_overlay());

    tick_slots(&mut world);
    let first_fill = world.get::<SlotWidget>(fill).unwrap().fill;
    let first_text = world.get::<SlotWidget>(text).unwrap().text.clone();

    tick_slots(&mut world);
    let second = world.get::<SlotWidget>(fill).unwrap();
    assert!(approx_eq(second.fill, first_fill));
    assert_eq!(world.get::<SlotWidget>(text).unwrap().text, first_text);
}
