use client_core::ModalView;
use eframe::egui;
use shared::validation::ProductField;

use crate::controller::orchestration::ModalAction;

const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 53, 69);
const PRIMARY: egui::Color32 = egui::Color32::from_rgb(13, 110, 253);
const MODAL_WIDTH: f32 = 460.0;

/// Draws the modal for `view` and returns what the user did this frame.
///
/// The backdrop is static: clicking outside or pressing escape does nothing,
/// only the close button and the footer buttons act.
pub fn show_product_modal(ctx: &egui::Context, view: &ModalView) -> Vec<ModalAction> {
    let mut actions = Vec::new();

    match view {
        ModalView::Hidden => {}
        ModalView::DeleteConfirmation {
            title,
            prompt,
            product_title,
            cancel_label,
            confirm_label,
        } => {
            egui::Modal::new(egui::Id::new("product_modal")).show(ctx, |ui| {
                ui.set_width(MODAL_WIDTH);
                modal_header(ui, title, &mut actions);
                ui.separator();
                ui.label(*prompt);
                ui.label(egui::RichText::new(format!("{product_title}?")).strong());
                ui.separator();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let confirm = egui::Button::new(
                        egui::RichText::new(*confirm_label).color(egui::Color32::WHITE),
                    )
                    .fill(DANGER);
                    if ui.add(confirm).clicked() {
                        actions.push(ModalAction::ConfirmDelete);
                    }
                    if ui.button(*cancel_label).clicked() {
                        actions.push(ModalAction::Cancel);
                    }
                });
            });
        }
        ModalView::Form {
            title,
            fields,
            cancel_label,
            submit_label,
            submit_enabled,
        } => {
            egui::Modal::new(egui::Id::new("product_modal")).show(ctx, |ui| {
                ui.set_width(MODAL_WIDTH);
                modal_header(ui, title, &mut actions);
                ui.separator();

                for field in fields {
                    ui.label(field.label);
                    let mut value = field.value.clone();
                    let editor = if field.field == ProductField::Description {
                        egui::TextEdit::multiline(&mut value).desired_rows(3)
                    } else {
                        egui::TextEdit::singleline(&mut value)
                    };
                    let response = ui.add(editor.desired_width(f32::INFINITY));
                    if response.changed() {
                        actions.push(ModalAction::Change(field.field, value));
                    }
                    if response.lost_focus() {
                        actions.push(ModalAction::Blur(field.field));
                    }
                    if let Some(error) = field.error {
                        ui.colored_label(ui.visuals().error_fg_color, error);
                    }
                    ui.add_space(6.0);
                }

                ui.separator();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let submit = egui::Button::new(
                        egui::RichText::new(*submit_label).color(egui::Color32::WHITE),
                    )
                    .fill(PRIMARY);
                    if ui.add_enabled(*submit_enabled, submit).clicked() {
                        actions.push(ModalAction::Submit);
                    }
                    if ui.button(*cancel_label).clicked() {
                        actions.push(ModalAction::Cancel);
                    }
                });
            });
        }
    }

    actions
}

fn modal_header(ui: &mut egui::Ui, title: &str, actions: &mut Vec<ModalAction>) {
    ui.horizontal(|ui| {
        ui.heading(title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✕").clicked() {
                actions.push(ModalAction::Cancel);
            }
        });
    });
}
