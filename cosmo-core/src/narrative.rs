//! Turn narration: archetype draws and module-aware flavor text.

use crate::catalog::Catalog;
use crate::destination::EventVariant;
use crate::event::{EventArchetype, EventEffect, TripEvent, TripRng};
use crate::habitat::ModuleStates;

/// Display tables keyed by archetype name or module id.
mod tables {
    pub const EVENT_ICONS: &[(&str, &str)] = &[
        ("Solar Storm", "solar-storm.svg"),
        ("Minor Mechanical Failure", "wrench.svg"),
        ("Micrometeoroid Impact", "meteor.svg"),
        ("Power Surge", "surge.svg"),
        ("Optimized Navigation", "navigation.svg"),
    ];
    pub const DEFAULT_EVENT_ICON: &str = "event-default.svg";

    pub const MODULE_ICONS: &[(&str, &str)] = &[
        ("hidroponia", "plant.svg"),
        ("medico", "medical.svg"),
        ("airlock", "airlock.svg"),
        ("impressao3d", "printer3d.svg"),
        ("sanitario", "water-recycle.svg"),
        ("armazenamento", "storage.svg"),
        ("exercicios", "dumbbell.svg"),
        ("inflavel", "expand.svg"),
        ("pesquisa", "flask.svg"),
        ("alimentacao", "food.svg"),
        ("habitacional", "habitat.svg"),
        ("suporte_vida", "life-support.svg"),
        ("blindagem", "shield.svg"),
        ("controle", "control.svg"),
    ];
    pub const DEFAULT_MODULE_ICON: &str = "module-default.svg";

    pub const MODULE_TIPS: &[(&str, &str)] = &[
        ("hidroponia", "Food production steadies morale and reduces stock consumption."),
        ("medico", "The medical bay handles a mild illness among the crew."),
        ("airlock", "An EVA inspects the hull; the crew returns safely to the habitat."),
        ("impressao3d", "A part is printed for a quick subsystem repair."),
        ("sanitario", "Water recycling keeps reserves at adequate levels."),
        ("armazenamento", "Reorganized supplies improve access and safety."),
        ("exercicios", "The exercise routine eases fatigue in microgravity."),
        ("inflavel", "The expandable module adds usable volume for operations."),
        ("pesquisa", "A scientific experiment yields important mission data."),
        ("alimentacao", "A balanced meal improves crew cohesion."),
        ("habitacional", "Proper rest improves crew performance."),
        ("suporte_vida", "Oxygen and pressure levels remain stable."),
        ("blindagem", "Shielding readings stay green through a radiation spike."),
        ("controle", "Course corrections are computed ahead of schedule."),
    ];
    pub const DEFAULT_MODULE_TIP: &str = "The module contributes positively to the mission.";
}

fn lookup<'a>(table: &'a [(&str, &'a str)], key: &str) -> Option<&'a str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Extra sentence appended to an archetype given the modules on board.
fn flavor(archetype: &str, modules: &ModuleStates) -> Option<&'static str> {
    match archetype {
        "Solar Storm" if modules.contains("suporte_vida") => {
            Some("Life support systems keep conditions stable for the crew.")
        }
        "Solar Storm" => Some("Without Life Support the crew's response is worsened."),
        "Minor Mechanical Failure" if modules.contains("impressao3d") => {
            Some("The 3D printer fabricates a spare part and shortens the delay.")
        }
        "Micrometeoroid Impact" if modules.contains("armazenamento") => {
            Some("Cargo is well stowed; damage is minimal.")
        }
        "Power Surge" if modules.contains("controle") => {
            Some("The Command module quickly stabilizes the systems.")
        }
        "Optimized Navigation" if modules.contains("exercicios") => {
            Some("A physically fit crew follows procedures precisely.")
        }
        _ => None,
    }
}

/// Draw an archetype event for a turn where the event roll fired.
///
/// The personalized variant never draws effect-free archetypes, tags the
/// event with an icon and appends module-aware flavor.
pub fn draw_archetype_event(
    catalog: &Catalog,
    variant: EventVariant,
    modules: &ModuleStates,
    rng: &mut dyn TripRng,
) -> TripEvent {
    let pool: Vec<&EventArchetype> = match variant {
        EventVariant::Simple => catalog.events.iter().collect(),
        EventVariant::Personalized => catalog
            .events
            .iter()
            .filter(|e| e.effect != EventEffect::None)
            .collect(),
    };

    if pool.is_empty() {
        return stable_routine_event();
    }

    let archetype = pool[rng.pick(pool.len())];
    let mut event = TripEvent::from_archetype(archetype);

    if variant == EventVariant::Personalized {
        event.icon = Some(
            lookup(tables::EVENT_ICONS, &archetype.name)
                .unwrap_or(tables::DEFAULT_EVENT_ICON)
                .to_string(),
        );
        if let Some(extra) = flavor(&archetype.name, modules) {
            event.description.push(' ');
            event.description.push_str(extra);
        }
    }

    event
}

/// Event for a turn where nothing fired.
pub fn quiet_turn_event(
    catalog: &Catalog,
    variant: EventVariant,
    modules: &ModuleStates,
    turn: u32,
) -> TripEvent {
    match variant {
        EventVariant::Simple => all_clear_event(catalog),
        EventVariant::Personalized => module_operation_event(modules, turn),
    }
}

/// Narrate one of the selected modules at work, cycling in selection order.
pub fn module_operation_event(modules: &ModuleStates, turn: u32) -> TripEvent {
    let index = turn.saturating_sub(1) as usize % modules.len().max(1);
    let Some(instance) = modules.at(index) else {
        return stable_routine_event();
    };
    let id = instance.id();

    TripEvent {
        name: format!("Module Operation: {}", instance.module.name),
        description: lookup(tables::MODULE_TIPS, id)
            .unwrap_or(tables::DEFAULT_MODULE_TIP)
            .to_string(),
        effect: EventEffect::None,
        icon: Some(
            lookup(tables::MODULE_ICONS, id)
                .unwrap_or(tables::DEFAULT_MODULE_ICON)
                .to_string(),
        ),
    }
}

/// Generic narrative used when there are no modules to talk about.
pub fn stable_routine_event() -> TripEvent {
    TripEvent {
        name: "Stable Routine".to_string(),
        description: "The crew follows standard procedures while systems operate normally."
            .to_string(),
        effect: EventEffect::None,
        icon: Some("calm.svg".to_string()),
    }
}

fn all_clear_event(catalog: &Catalog) -> TripEvent {
    catalog
        .events
        .iter()
        .find(|e| e.effect == EventEffect::None)
        .map(TripEvent::from_archetype)
        .unwrap_or_else(|| {
            let mut event = stable_routine_event();
            event.icon = None;
            event
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn modules(ids: &[&str]) -> ModuleStates {
        ModuleStates::from_selection(&Catalog::builtin(), ids).unwrap()
    }

    #[test]
    fn personalized_draw_never_returns_all_clear() {
        let catalog = Catalog::builtin();
        let on_board = modules(&["medico"]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let event =
                draw_archetype_event(&catalog, EventVariant::Personalized, &on_board, &mut rng);
            assert_ne!(event.effect, EventEffect::None);
            assert!(event.icon.is_some());
        }
    }

    #[test]
    fn simple_draw_can_return_every_archetype() {
        let catalog = Catalog::builtin();
        let on_board = modules(&["medico"]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let event = draw_archetype_event(&catalog, EventVariant::Simple, &on_board, &mut rng);
            assert!(event.icon.is_none());
            seen.insert(event.name);
        }
        assert_eq!(seen.len(), catalog.events.len());
    }

    #[test]
    fn solar_storm_flavor_depends_on_life_support() {
        let with = flavor("Solar Storm", &modules(&["suporte_vida"])).unwrap();
        let without = flavor("Solar Storm", &modules(&["medico"])).unwrap();
        assert!(with.contains("stable"));
        assert!(without.contains("worsened"));
    }

    #[test]
    fn flavor_needs_the_matching_module() {
        assert!(flavor("Power Surge", &modules(&["medico"])).is_none());
        assert!(flavor("Power Surge", &modules(&["controle"])).is_some());
        assert!(flavor("Minor Mechanical Failure", &modules(&["impressao3d"])).is_some());
    }

    #[test]
    fn module_operation_cycles_through_selection() {
        let on_board = modules(&["hidroponia", "medico"]);

        let first = module_operation_event(&on_board, 1);
        let second = module_operation_event(&on_board, 2);
        let third = module_operation_event(&on_board, 3);

        assert_eq!(first.name, "Module Operation: Food Production (Hydroponics)");
        assert_eq!(first.icon.as_deref(), Some("plant.svg"));
        assert_eq!(second.name, "Module Operation: Medical Bay");
        assert_eq!(third.name, first.name);
    }

    #[test]
    fn empty_selection_falls_back_to_routine() {
        let event = module_operation_event(&ModuleStates::new(), 4);
        assert_eq!(event.name, "Stable Routine");
        assert_eq!(event.effect, EventEffect::None);
    }

    #[test]
    fn simple_quiet_turn_is_all_clear() {
        let catalog = Catalog::builtin();
        let event = quiet_turn_event(&catalog, EventVariant::Simple, &modules(&["medico"]), 1);
        assert_eq!(event.name, "All Clear");
    }
}
