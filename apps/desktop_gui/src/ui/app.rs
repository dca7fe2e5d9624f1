use std::{sync::Arc, time::Duration};

use client_core::{ModalProps, ProductModal, ToastQueue};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{
    domain::{ModalMode, Product},
    messages::Locale,
};

use crate::backend_bridge::{
    commands::{BackendCommand, ModalId},
    host::ChannelHost,
};
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{
    apply_modal_actions, close_modal, dispatch_backend_command, OpenModal,
};
use crate::ui::{modal_window::show_product_modal, toasts::show_toasts};

pub struct ProductAdminApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    ui_tx: Sender<UiEvent>,
    locale: Locale,
    products: Vec<Product>,
    modal: Option<OpenModal>,
    next_modal_id: u64,
    toasts: ToastQueue,
    status: String,
    /// Flipped whenever the modal reports a mutation; a reload is issued
    /// whenever it differs from the value the list was last loaded for.
    refresh_data: bool,
    loaded_for: Option<bool>,
}

impl ProductAdminApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        ui_tx: Sender<UiEvent>,
        locale: Locale,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            ui_tx,
            locale,
            products: Vec::new(),
            modal: None,
            next_modal_id: 0,
            toasts: ToastQueue::new(),
            status: "Loading products...".to_string(),
            refresh_data: false,
            loaded_for: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ProductsLoaded(products) => {
                    self.status = format!("{} products", products.len());
                    self.products = products;
                }
                UiEvent::Notify { kind, message } => self.toasts.push(kind, message),
                UiEvent::ModalClosed(closed) => {
                    close_modal(&mut self.modal, closed);
                }
                UiEvent::ProductsChanged => self.refresh_data = !self.refresh_data,
                UiEvent::Error(err) => self.status = err.status_line(),
            }
        }
    }

    fn reload_if_stale(&mut self) {
        if self.loaded_for == Some(self.refresh_data) {
            return;
        }
        self.loaded_for = Some(self.refresh_data);
        dispatch_backend_command(&self.cmd_tx, BackendCommand::ListProducts, &mut self.status);
    }

    fn open_modal(&mut self, mode: ModalMode, product: Product) {
        self.next_modal_id += 1;
        let id = ModalId(self.next_modal_id);
        let modal = ProductModal::open(
            ModalProps {
                show: true,
                title: self.locale.messages().modal_title(mode).to_string(),
                mode,
                product,
                host: Arc::new(ChannelHost::new(self.ui_tx.clone(), id)),
            },
            self.locale,
        );
        self.modal = Some(OpenModal { id, modal });
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        let new_label = self.locale.messages().modal_title(ModalMode::Create);
        let mut open_create = false;
        let mut reload = false;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Products");
                ui.separator();
                if ui.button(new_label).clicked() {
                    open_create = true;
                }
                if ui.button("⟳").on_hover_text("Reload").clicked() {
                    reload = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&self.status);
                });
            });
        });

        if open_create {
            self.open_modal(ModalMode::Create, Product::empty());
        }
        if reload {
            dispatch_backend_command(&self.cmd_tx, BackendCommand::ListProducts, &mut self.status);
        }
    }

    fn show_product_table(&mut self, ctx: &egui::Context) {
        let mut requested: Option<(ModalMode, Product)> = None;
        let messages = self.locale.messages();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("product_table")
                    .striped(true)
                    .num_columns(6)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        ui.strong("#");
                        ui.strong(messages.title_label);
                        ui.strong(messages.price_label);
                        ui.strong(messages.category_label);
                        ui.label("");
                        ui.label("");
                        ui.end_row();

                        for product in &self.products {
                            ui.label(product.id.to_string());
                            ui.label(&product.title);
                            ui.label(format!("{:.2}", product.price));
                            ui.label(&product.category);
                            if ui.small_button("✏").clicked() {
                                requested = Some((ModalMode::Update, product.clone()));
                            }
                            if ui.small_button("🗑").clicked() {
                                requested = Some((ModalMode::Delete, product.clone()));
                            }
                            ui.end_row();
                        }
                    });
            });
        });

        if let Some((mode, product)) = requested {
            self.open_modal(mode, product);
        }
    }

    fn show_modal(&mut self, ctx: &egui::Context) {
        let Some(open) = self.modal.as_mut() else {
            return;
        };
        let actions = show_product_modal(ctx, &open.modal.view());
        for cmd in apply_modal_actions(open, actions) {
            dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
        }
    }
}

impl eframe::App for ProductAdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.reload_if_stale();

        self.show_top_bar(ctx);
        self.show_product_table(ctx);
        self.show_modal(ctx);
        show_toasts(ctx, &self.toasts);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
