use super::*;

#[test]
fn quiet_mode_keeps_notifications_out_of_the_toast_queue() {
    let toasts = ToastQueue::new();

    notifier(true, &toasts).success("Product created");
    notifier(true, &toasts).error("An error has occurred");

    assert!(toasts.is_empty());
}

#[test]
fn default_mode_queues_notifications_for_printing() {
    let toasts = ToastQueue::new();

    notifier(false, &toasts).success("Product created");

    let queued = toasts.drain();
    assert_eq!(queued.len(), 1);
    assert_eq!(queued[0].kind, ToastKind::Success);
    assert_eq!(queued[0].message, "Product created");
}

#[test]
fn modal_title_follows_locale() {
    let host = Arc::new(CliHost::default());
    let modal = open_modal(ModalMode::Update, Product::empty(), host, Locale::Spanish);

    match modal.view() {
        ModalView::Form { title, .. } => assert_eq!(title, "Editar producto"),
        _ => panic!("update modal should render the form"),
    }
}

#[test]
fn cancelled_delete_closes_without_refresh() {
    let host = Arc::new(CliHost::default());
    let modal = open_modal(ModalMode::Delete, Product::empty(), host.clone(), Locale::English);

    modal.cancel();

    assert!(host.closed.load(Ordering::SeqCst));
    assert!(!host.changed.load(Ordering::SeqCst));
}
