//! egui panel for the tracker settings and actions
//!
//! The panel only collects input: it draws the settings widgets and returns
//! the actions the user triggered. `dispatch_action` runs them against the
//! world and produces the report line to show. Keeping the two apart means
//! the wiring is testable without an egui context.

use autotrack_core::ObjectId;
use autotrack_scene::{SceneWorld, TrackerSettings};
use autotrack_tracker::{ops, ParentOutcome};

/// Actions returned by the panel that the app must handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    CreateTarget,
    ApplyToSelection,
    RemoveConstraints,
    ParentTarget,
}

/// Draw the tracker panel. Returns a list of actions to process.
pub fn tracker_panel(
    ui: &mut egui::Ui,
    settings: &mut TrackerSettings,
    world: &mut SceneWorld,
    active: Option<ObjectId>,
) -> Vec<PanelAction> {
    let mut actions = Vec::new();

    ui.heading("AutoTrack");
    ui.separator();

    ui.checkbox(&mut settings.enabled, "Enable tracking");

    ui.label("Track target name:");
    ui.text_edit_singleline(&mut settings.target_name);

    // Collapsible kind toggles; the expand state is a setting so it
    // survives with the document
    if ui
        .selectable_label(settings.show_kind_options, "Affect what?")
        .clicked()
    {
        settings.show_kind_options = !settings.show_kind_options;
    }
    if settings.show_kind_options {
        ui.indent("kind_options", |ui| {
            ui.checkbox(&mut settings.apply_to_meshes, "Meshes");
            ui.checkbox(&mut settings.apply_to_lights, "Lights");
            ui.checkbox(&mut settings.apply_to_cameras, "Cameras");
        });
    }

    ui.separator();
    ui.label("Target controls:");
    if ui.button("Add Track Target").clicked() {
        actions.push(PanelAction::CreateTarget);
    }

    ui.label("Apply/remove constraints:");
    if ui.button("Apply to Selected").clicked() {
        actions.push(PanelAction::ApplyToSelection);
    }
    if ui.button("Remove Constraints").clicked() {
        actions.push(PanelAction::RemoveConstraints);
    }

    ui.separator();
    ui.label("Target parenting:");
    let selected_text = settings
        .parent_target
        .clone()
        .unwrap_or_else(|| "(none)".to_string());
    egui::ComboBox::from_label("Parent")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut settings.parent_target, None, "(none)");
            for info in world.all_objects() {
                if info.name != settings.target_name {
                    ui.selectable_value(
                        &mut settings.parent_target,
                        Some(info.name.clone()),
                        &info.name,
                    );
                }
            }
        });
    if ui.button("Parent").clicked() {
        actions.push(PanelAction::ParentTarget);
    }

    // Per-object exclusion toggle for the active object
    if let Some(id) = active {
        let name = world.get_name(id).map(String::from);
        if let (Some(name), Some(data)) = (name, world.data_mut(id)) {
            ui.separator();
            ui.label(format!("Object: {}", name));
            ui.checkbox(&mut data.exclude, "Exclude from tracking");
        }
    }

    actions
}

/// Run a panel action against the world and return the report line.
pub fn dispatch_action(
    action: PanelAction,
    world: &mut SceneWorld,
    settings: &TrackerSettings,
) -> String {
    match action {
        PanelAction::CreateTarget => {
            let id = ops::create_target(world, settings);
            let name = world.get_name(id).unwrap_or(&settings.target_name);
            format!("Created track target '{}'", name)
        }
        PanelAction::ApplyToSelection => {
            let count = ops::apply_to_selection(world, settings);
            format!("Track constraint applied to {} object(s)", count)
        }
        PanelAction::RemoveConstraints => {
            let count = ops::remove_constraints(world);
            format!("Removed {} constraint(s)", count)
        }
        PanelAction::ParentTarget => match ops::parent_target(world, settings) {
            Ok(ParentOutcome::Parented(parent)) => {
                format!("Track target parented to '{}'", parent)
            }
            Ok(ParentOutcome::Unparented) => "Track target unparented".to_string(),
            Err(err) => {
                log::warn!("parent operation failed: {}", err);
                format!("Warning: {}", err)
            }
        },
    }
}
