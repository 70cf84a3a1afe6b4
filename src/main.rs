//! Slotbar headless demo.
//!
//! Builds a world with two actions on a slot bar, runs the tick schedule at
//! a fixed delta, fires a shortcut and prints the overlay widget states
//! once per simulated second. Useful for eyeballing the presentation rules
//! without a renderer.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=info cargo run -- --ticks 300 --dt 0.0166
//! ```

mod components;
mod events;
mod presenter;
mod resources;
mod systems;

use crate::components::action::Action;
use crate::components::actionslot::ActionSlot;
use crate::components::slotbar::{SlotBar, SlotBinding};
use crate::components::widget::SlotWidget;
use crate::events::input::ShortcutEvent;
use crate::resources::barconfig::BarConfig;
use crate::resources::iconstore::{IconDef, IconStore};
use crate::resources::worldtime::WorldTime;
use crate::systems::action::action_tick_system;
use crate::systems::barconfig::apply_barconfig_changes;
use crate::systems::slot::slot_update_system;
use crate::systems::slotbar::{bar_spawn_system, button_click_observer, shortcut_observer};
use crate::systems::time::update_world_time;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Slotbar demo
#[derive(Parser)]
#[command(version, about = "Headless action-slot bar demo")]
struct Cli {
    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Fixed frame delta in seconds.
    #[arg(long, default_value_t = 0.1)]
    dt: f32,

    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Optional JSON bar layout to load instead of the built-in demo bar.
    #[arg(long, value_name = "PATH")]
    layout: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(match &cli.config {
        Some(path) => BarConfig::with_path(path.clone()),
        None => BarConfig::default(),
    });

    let mut icons = IconStore::new();
    icons.insert(
        "fireball",
        IconDef {
            tex_key: "icons/fireball".into(),
            width: 32.0,
            height: 32.0,
        },
    );
    icons.insert(
        "sprint",
        IconDef {
            tex_key: "icons/sprint".into(),
            width: 32.0,
            height: 32.0,
        },
    );
    world.insert_resource(icons);

    world.add_observer(shortcut_observer);
    world.add_observer(button_click_observer);
    world.flush();

    let bar_entity = match &cli.layout {
        Some(path) => world
            .spawn(SlotBar::from_layout(path.to_string_lossy().to_string()))
            .id(),
        None => {
            let fireball = world.spawn(Action::new(8.0, 3.0)).id();
            let sprint = world.spawn(Action::new(30.0, 10.0)).id();
            world
                .spawn(SlotBar::new(vec![
                    SlotBinding::new(fireball)
                        .with_icon("fireball")
                        .with_shortcut(0),
                    SlotBinding::new(sprint).with_icon("sprint").with_shortcut(1),
                ]))
                .id()
        }
    };

    let mut schedule = Schedule::default();
    schedule.add_systems((
        apply_barconfig_changes,
        bar_spawn_system,
        action_tick_system,
        slot_update_system,
    ));

    let mut last_report = -1i32;
    for tick in 0..cli.ticks {
        update_world_time(&mut world, cli.dt);
        schedule.run(&mut world);

        // Press both shortcuts once the bar has spawned.
        if tick == 1 {
            world.trigger(ShortcutEvent {
                index: 0,
                pressed: true,
            });
            world.trigger(ShortcutEvent {
                index: 1,
                pressed: true,
            });
            world.flush();
        }

        let elapsed = world.resource::<WorldTime>().elapsed;
        if elapsed as i32 > last_report {
            last_report = elapsed as i32;
            report(&world, bar_entity, elapsed);
        }
    }
}

/// Prints the widget state of every slot on the bar.
fn report(world: &World, bar_entity: Entity, elapsed: f32) {
    let Some(bar) = world.get::<SlotBar>(bar_entity).cloned() else {
        return;
    };
    println!("t={:.1}s", elapsed);
    for (i, binding) in bar.bindings.iter().enumerate() {
        let Some(slot_entity) = binding.slot else {
            continue;
        };
        let Some(slot) = world.get::<ActionSlot>(slot_entity).cloned() else {
            continue;
        };
        let cooldown = describe(world, slot.cooldown_fill, slot.cooldown_text);
        let duration = describe(world, slot.duration_fill, slot.duration_text);
        println!("  slot {}: cooldown {} | duration {}", i, cooldown, duration);
    }
}

fn describe(world: &World, fill: Option<Entity>, text: Option<Entity>) -> String {
    let fill_state = fill
        .and_then(|e| world.get::<SlotWidget>(e))
        .map(|w| {
            if w.visible {
                format!("{:.0}%", w.fill * 100.0)
            } else {
                "hidden".to_string()
            }
        })
        .unwrap_or_else(|| "n/a".to_string());
    let text_state = text
        .and_then(|e| world.get::<SlotWidget>(e))
        .map(|w| {
            if w.text_visible {
                w.text.to_string()
            } else {
                "-".to_string()
            }
        })
        .unwrap_or_else(|| "n/a".to_string());
    format!("{} {}", fill_state, text_state)
}
