use std::sync::Mutex;

use super::*;
use async_trait::async_trait;

use crate::notify::{ToastKind, ToastQueue};

#[derive(Debug, Clone, PartialEq)]
enum ServiceCall {
    Create(Product),
    Update(ProductId, Product),
    Delete(ProductId),
}

#[derive(Default)]
struct RecordingService {
    calls: Mutex<Vec<ServiceCall>>,
    fail_with: Option<u16>,
}

impl RecordingService {
    fn failing(status: u16) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(status),
        }
    }

    fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().expect("calls").clone()
    }

    fn record(&self, call: ServiceCall) -> Result<(), ServiceError> {
        self.calls.lock().expect("calls").push(call);
        match self.fail_with {
            Some(status) => Err(ServiceError::Status {
                url: "fake://products".to_string(),
                status,
                code: None,
                message: "simulated failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProductService for RecordingService {
    async fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(Vec::new())
    }

    async fn create_product(&self, product: &Product) -> Result<Product, ServiceError> {
        self.record(ServiceCall::Create(product.clone()))?;
        let mut created = product.clone();
        created.id = ProductId(99);
        Ok(created)
    }

    async fn update_product(
        &self,
        id: ProductId,
        product: &Product,
    ) -> Result<Product, ServiceError> {
        self.record(ServiceCall::Update(id, product.clone()))?;
        Ok(product.clone())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ServiceError> {
        self.record(ServiceCall::Delete(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostCall {
    Close,
    NotifyChanged,
}

#[derive(Default)]
struct RecordingHost {
    calls: Mutex<Vec<HostCall>>,
}

impl RecordingHost {
    fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().expect("host calls").clone()
    }
}

impl ModalHost for RecordingHost {
    fn close(&self) {
        self.calls.lock().expect("host calls").push(HostCall::Close);
    }

    fn notify_changed(&self) {
        self.calls
            .lock()
            .expect("host calls")
            .push(HostCall::NotifyChanged);
    }
}

struct Harness {
    locale: Locale,
    service: Arc<RecordingService>,
    host: Arc<RecordingHost>,
    toasts: ToastQueue,
    invoker: PersistenceInvoker,
}

impl Harness {
    fn new(service: RecordingService, locale: Locale) -> Self {
        let service = Arc::new(service);
        let toasts = ToastQueue::new();
        let invoker = PersistenceInvoker::new(
            service.clone(),
            Arc::new(toasts.clone()),
            locale,
        );
        Self {
            locale,
            service,
            host: Arc::new(RecordingHost::default()),
            toasts,
            invoker,
        }
    }

    fn ok() -> Self {
        Self::new(RecordingService::default(), Locale::English)
    }

    fn open(&self, mode: ModalMode, product: Product) -> ProductModal {
        ProductModal::open(
            ModalProps {
                show: true,
                title: "Product".to_string(),
                mode,
                product,
                host: self.host.clone(),
            },
            self.locale,
        )
    }
}

fn widget(id: i64) -> Product {
    Product {
        id: ProductId(id),
        title: "Widget".to_string(),
        price: 9.99,
        description: "A widget".to_string(),
        category: "Tools".to_string(),
        image: "http://x/y.png".to_string(),
    }
}

fn invalid_products() -> Vec<Product> {
    let mut products = vec![Product::empty()];
    let blanks: [fn(&mut Product); 4] = [
        |p| p.title.clear(),
        |p| p.description.clear(),
        |p| p.category.clear(),
        |p| p.image.clear(),
    ];
    for blank in blanks {
        let mut product = widget(0);
        blank(&mut product);
        products.push(product);
    }
    let mut negative = widget(7);
    negative.price = -1.0;
    products.push(negative);
    products
}

#[tokio::test]
async fn invalid_products_never_reach_the_service() {
    let harness = Harness::ok();

    for product in invalid_products() {
        let mut modal = harness.open(ModalMode::Create, product.clone());
        let ModalView::Form { submit_enabled, .. } = modal.view() else {
            panic!("create mode renders the form");
        };
        assert!(!submit_enabled, "submit enabled for {product:?}");
        assert!(modal.submit(&harness.invoker).await.is_none());
    }

    assert!(harness.service.calls().is_empty());
    assert!(harness.host.calls().is_empty());
    assert!(harness.toasts.is_empty());
}

#[tokio::test]
async fn empty_price_input_blocks_submission() {
    let harness = Harness::ok();
    let mut modal = harness.open(ModalMode::Update, widget(7));
    modal.change(ProductField::Price, "");

    assert!(modal.submit(&harness.invoker).await.is_none());
    assert_eq!(
        modal.form().visible_error(ProductField::Price),
        Some("Price is required")
    );
    assert!(harness.service.calls().is_empty());
}

#[tokio::test]
async fn submit_disabled_while_any_field_is_invalid() {
    let harness = Harness::ok();
    let mut modal = harness.open(ModalMode::Update, widget(7));

    let ModalView::Form { submit_enabled, .. } = modal.view() else {
        panic!("update mode renders the form");
    };
    assert!(submit_enabled);

    modal.change(ProductField::Image, "");
    let ModalView::Form {
        submit_enabled,
        fields,
        ..
    } = modal.view()
    else {
        panic!("update mode renders the form");
    };
    assert!(!submit_enabled);
    let image = fields
        .iter()
        .find(|field| field.field == ProductField::Image)
        .expect("image field");
    // not touched yet, so the message stays hidden
    assert_eq!(image.error, None);

    modal.blur(ProductField::Image);
    let ModalView::Form { fields, .. } = modal.view() else {
        panic!("update mode renders the form");
    };
    let image = fields
        .iter()
        .find(|field| field.field == ProductField::Image)
        .expect("image field");
    assert_eq!(image.error, Some("Image URL is required"));
}

#[tokio::test]
async fn new_product_is_created_once_then_closes_and_refreshes() {
    let harness = Harness::ok();
    let mut modal = harness.open(ModalMode::Create, widget(0));

    let outcome = modal.submit(&harness.invoker).await.expect("submitted");

    assert_eq!(outcome.expect("success"), Mutation::Created);
    assert_eq!(harness.service.calls(), vec![ServiceCall::Create(widget(0))]);
    assert_eq!(
        harness.host.calls(),
        vec![HostCall::Close, HostCall::NotifyChanged]
    );
    let toasts = harness.toasts.snapshot();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].message, "Product created");
}

#[tokio::test]
async fn existing_product_is_updated_by_id() {
    let harness = Harness::ok();
    let mut modal = harness.open(ModalMode::Update, widget(7));
    modal.change(ProductField::Title, "Widget v2");

    let outcome = modal.submit(&harness.invoker).await.expect("submitted");

    assert_eq!(outcome.expect("success"), Mutation::Updated);
    let mut expected = widget(7);
    expected.title = "Widget v2".to_string();
    assert_eq!(
        harness.service.calls(),
        vec![ServiceCall::Update(ProductId(7), expected)]
    );
    assert_eq!(
        harness.host.calls(),
        vec![HostCall::Close, HostCall::NotifyChanged]
    );
    assert_eq!(harness.toasts.snapshot()[0].message, "Product updated");
}

#[tokio::test]
async fn id_decides_create_versus_update_regardless_of_mode() {
    let harness = Harness::ok();
    let mut modal = harness.open(ModalMode::Update, widget(0));

    let outcome = modal.submit(&harness.invoker).await.expect("submitted");

    assert_eq!(outcome.expect("success"), Mutation::Created);
    assert!(matches!(
        harness.service.calls().as_slice(),
        [ServiceCall::Create(_)]
    ));
}

#[tokio::test]
async fn delete_confirm_deletes_once_then_closes_and_refreshes() {
    let harness = Harness::ok();
    let modal = harness.open(ModalMode::Delete, widget(5));

    let outcome = modal
        .confirm_delete(&harness.invoker)
        .await
        .expect("confirmed");

    assert_eq!(outcome.expect("success"), Mutation::Deleted);
    assert_eq!(
        harness.service.calls(),
        vec![ServiceCall::Delete(ProductId(5))]
    );
    assert_eq!(
        harness.host.calls(),
        vec![HostCall::Close, HostCall::NotifyChanged]
    );
    assert_eq!(harness.toasts.snapshot()[0].message, "Product deleted");
}

#[tokio::test]
async fn failed_save_keeps_modal_open_and_reports_error() {
    let harness = Harness::new(RecordingService::failing(503), Locale::English);
    let mut modal = harness.open(ModalMode::Create, widget(0));

    let outcome = modal.submit(&harness.invoker).await.expect("submitted");

    let err = outcome.expect_err("simulated failure");
    assert_eq!(err.status(), Some(503));
    assert_eq!(harness.service.calls().len(), 1);
    assert!(harness.host.calls().is_empty());
    let toasts = harness.toasts.snapshot();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Error);
    assert_eq!(toasts[0].message, "An error has occurred");

    // the form is untouched and can be retried
    assert!(modal.form().is_valid());
    assert!(modal.submit(&harness.invoker).await.is_some());
    assert_eq!(harness.service.calls().len(), 2);
}

#[tokio::test]
async fn failed_delete_keeps_modal_open_and_reports_error() {
    let harness = Harness::new(RecordingService::failing(500), Locale::English);
    let modal = harness.open(ModalMode::Delete, widget(5));

    let outcome = modal
        .confirm_delete(&harness.invoker)
        .await
        .expect("confirmed");

    assert!(outcome.is_err());
    assert!(harness.host.calls().is_empty());
    assert_eq!(harness.toasts.snapshot()[0].kind, ToastKind::Error);
}

#[tokio::test]
async fn cancel_closes_without_persistence_in_either_mode() {
    let harness = Harness::ok();
    for mode in [ModalMode::Create, ModalMode::Update, ModalMode::Delete] {
        harness.open(mode, widget(3)).cancel();
    }

    assert!(harness.service.calls().is_empty());
    assert_eq!(harness.host.calls(), vec![HostCall::Close; 3]);
    assert!(harness.toasts.is_empty());
}

#[tokio::test]
async fn mode_selects_view_and_actions_do_not_cross() {
    let harness = Harness::ok();

    let delete_modal = harness.open(ModalMode::Delete, widget(5));
    match delete_modal.view() {
        ModalView::DeleteConfirmation {
            product_title,
            cancel_label,
            confirm_label,
            ..
        } => {
            assert_eq!(product_title, "Widget");
            assert_eq!(cancel_label, "Cancel");
            assert_eq!(confirm_label, "Delete");
        }
        other => panic!("unexpected view: {other:?}"),
    }

    let mut delete_modal = delete_modal;
    assert!(delete_modal.submit(&harness.invoker).await.is_none());

    let form_modal = harness.open(ModalMode::Create, widget(0));
    assert!(matches!(form_modal.view(), ModalView::Form { .. }));
    assert!(form_modal.confirm_delete(&harness.invoker).await.is_none());

    assert!(harness.service.calls().is_empty());
}

#[tokio::test]
async fn hidden_modal_renders_nothing_and_sends_nothing() {
    let harness = Harness::ok();
    let mut modal = ProductModal::open(
        ModalProps {
            show: false,
            title: "Product".to_string(),
            mode: ModalMode::Create,
            product: widget(0),
            host: harness.host.clone(),
        },
        Locale::English,
    );

    assert_eq!(modal.view(), ModalView::Hidden);
    assert!(modal.submit(&harness.invoker).await.is_none());
    assert!(harness.service.calls().is_empty());
}

#[tokio::test]
async fn spanish_create_notifies_producto_creado() {
    let harness = Harness::new(RecordingService::default(), Locale::Spanish);
    let mut modal = harness.open(ModalMode::Create, widget(0));

    let ModalView::Form {
        submit_label,
        cancel_label,
        ..
    } = modal.view()
    else {
        panic!("create mode renders the form");
    };
    assert_eq!(submit_label, "Guardar");
    assert_eq!(cancel_label, "Cancelar");

    modal.submit(&harness.invoker).await.expect("submitted").expect("ok");

    assert_eq!(harness.service.calls(), vec![ServiceCall::Create(widget(0))]);
    assert_eq!(harness.toasts.snapshot()[0].message, "Producto Creado");
    assert_eq!(
        harness.host.calls(),
        vec![HostCall::Close, HostCall::NotifyChanged]
    );
}
