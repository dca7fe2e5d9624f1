//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{ClientSettings, HttpProductService, PersistenceInvoker, ProductService};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::{
    commands::BackendCommand,
    host::{ChannelHost, ChannelNotifier},
};
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Commands are handled one at a time, in queue order.
pub fn launch(settings: ClientSettings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let service: Arc<dyn ProductService> =
                match HttpProductService::from_settings(&settings) {
                    Ok(service) => Arc::new(service),
                    Err(err) => {
                        let _ = ui_tx.try_send(UiEvent::Error(UiError::from_service(
                            UiErrorContext::BackendStartup,
                            &err,
                        )));
                        tracing::error!(error = %err, "failed to build product HTTP client");
                        return;
                    }
                };
            tracing::info!(api = %settings.api_base_url, "backend worker ready");

            let invoker = PersistenceInvoker::new(
                Arc::clone(&service),
                Arc::new(ChannelNotifier::new(ui_tx.clone())),
                settings.locale,
            );

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::ListProducts => match service.list_products().await {
                        Ok(products) => {
                            tracing::debug!(count = products.len(), "loaded products");
                            let _ = ui_tx.try_send(UiEvent::ProductsLoaded(products));
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "failed to load products");
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_service(
                                UiErrorContext::LoadProducts,
                                &err,
                            )));
                        }
                    },
                    BackendCommand::SaveProduct { modal, product } => {
                        // outcome is reported through the notifier and host
                        let host = ChannelHost::new(ui_tx.clone(), modal);
                        let _ = invoker.save(&product, &host).await;
                    }
                    BackendCommand::DeleteProduct { modal, id } => {
                        let host = ChannelHost::new(ui_tx.clone(), modal);
                        let _ = invoker.delete(id, &host).await;
                    }
                }
            }
        });
    });
}
