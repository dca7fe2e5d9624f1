use std::time::{Duration, Instant};

use client_core::{ToastKind, ToastPosition, ToastQueue};
use eframe::egui;

pub const TOAST_TTL: Duration = Duration::from_secs(4);

pub fn show_toasts(ctx: &egui::Context, queue: &ToastQueue) {
    queue.expire(Instant::now(), TOAST_TTL);
    let toasts = queue.snapshot();

    let corners = [
        (
            ToastPosition::TopCenter,
            "toasts_top_center",
            egui::Align2::CENTER_TOP,
            egui::vec2(0.0, 16.0),
        ),
        (
            ToastPosition::BottomRight,
            "toasts_bottom_right",
            egui::Align2::RIGHT_BOTTOM,
            egui::vec2(-16.0, -16.0),
        ),
    ];

    for (position, id, anchor, offset) in corners {
        if !toasts.iter().any(|toast| toast.position == position) {
            continue;
        }
        egui::Area::new(egui::Id::new(id))
            .anchor(anchor, offset)
            .order(egui::Order::Tooltip)
            .interactable(false)
            .show(ctx, |ui| {
                for toast in toasts.iter().filter(|toast| toast.position == position) {
                    let fill = match toast.kind {
                        ToastKind::Success => egui::Color32::from_rgb(25, 135, 84),
                        ToastKind::Error => egui::Color32::from_rgb(220, 53, 69),
                    };
                    egui::Frame::new()
                        .fill(fill)
                        .corner_radius(egui::CornerRadius::same(6))
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&toast.message).color(egui::Color32::WHITE),
                            );
                        });
                    ui.add_space(6.0);
                }
            });
    }
}
