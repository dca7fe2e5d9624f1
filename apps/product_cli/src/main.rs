use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use client_core::{
    config::{load_settings_from, SETTINGS_FILE},
    HttpProductService, ModalHost, ModalProps, ModalView, Notifier, PersistenceInvoker,
    ProductModal, ProductService, ToastKind, ToastQueue, TracingNotifier,
};
use shared::{
    domain::{ModalMode, Product, ProductId},
    messages::Locale,
    validation::ProductField,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Create, update or delete products from the command line")]
struct Cli {
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long)]
    locale: Option<Locale>,
    #[arg(long, default_value = SETTINGS_FILE)]
    settings: PathBuf,
    /// Send notifications to the log instead of printing them.
    #[arg(long)]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List,
    Create {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Edits an existing product; omitted fields keep their current value.
    Update {
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
    Delete {
        id: i64,
        /// Confirm the deletion instead of cancelling.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct FieldArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    price: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    image: Option<String>,
}

impl FieldArgs {
    fn apply(self, modal: &mut ProductModal) {
        let edits = [
            (ProductField::Title, self.title),
            (ProductField::Price, self.price),
            (ProductField::Description, self.description),
            (ProductField::Category, self.category),
            (ProductField::Image, self.image),
        ];
        for (field, value) in edits {
            if let Some(value) = value {
                modal.change(field, value);
                modal.blur(field);
            }
        }
    }
}

#[derive(Default)]
struct CliHost {
    closed: AtomicBool,
    changed: AtomicBool,
}

impl ModalHost for CliHost {
    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn notify_changed(&self) {
        self.changed.store(true, Ordering::SeqCst);
    }
}

fn open_modal(
    mode: ModalMode,
    product: Product,
    host: Arc<CliHost>,
    locale: Locale,
) -> ProductModal {
    ProductModal::open(
        ModalProps {
            show: true,
            title: locale.messages().modal_title(mode).to_string(),
            mode,
            product,
            host,
        },
        locale,
    )
}

fn notifier(quiet: bool, toasts: &ToastQueue) -> Arc<dyn Notifier> {
    if quiet {
        Arc::new(TracingNotifier)
    } else {
        Arc::new(toasts.clone())
    }
}

async fn find_product(service: &dyn ProductService, id: ProductId) -> Result<Product> {
    service
        .list_products()
        .await
        .context("failed to list products")?
        .into_iter()
        .find(|product| product.id == id)
        .with_context(|| format!("no product with id {id}"))
}

fn print_toasts(toasts: &ToastQueue) {
    for toast in toasts.drain() {
        match toast.kind {
            ToastKind::Success => println!("{}", toast.message),
            ToastKind::Error => eprintln!("{}", toast.message),
        }
    }
}

fn print_field_errors(modal: &ProductModal) {
    if let ModalView::Form { fields, .. } = modal.view() {
        for field in fields {
            if let Some(error) = field.error {
                eprintln!("  {}: {error}", field.label);
            }
        }
    }
}

async fn submit(
    modal: &mut ProductModal,
    invoker: &PersistenceInvoker,
    toasts: &ToastQueue,
) -> Result<()> {
    let outcome = modal.submit(invoker).await;
    print_toasts(toasts);
    match outcome {
        None => {
            print_field_errors(modal);
            bail!("product is not valid; nothing was sent")
        }
        Some(result) => {
            result?;
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let cli = Cli::parse();

    let mut settings = load_settings_from(&cli.settings, |key| std::env::var(key).ok())
        .with_context(|| format!("failed to load settings from '{}'", cli.settings.display()))?;
    if let Some(api_url) = &cli.api_url {
        settings.set_api_base_url(api_url)?;
    }
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }

    let service: Arc<dyn ProductService> =
        Arc::new(HttpProductService::from_settings(&settings)?);
    let toasts = ToastQueue::new();
    let invoker = PersistenceInvoker::new(
        Arc::clone(&service),
        notifier(cli.quiet, &toasts),
        settings.locale,
    );
    let host = Arc::new(CliHost::default());

    match cli.command {
        Command::List => {
            let products = service.list_products().await.context("failed to list products")?;
            for product in products {
                println!(
                    "{:>4}  {:<40}  {:>10.2}  {}",
                    product.id.0, product.title, product.price, product.category
                );
            }
            return Ok(());
        }
        Command::Create { fields } => {
            let mut modal =
                open_modal(ModalMode::Create, Product::empty(), host.clone(), settings.locale);
            fields.apply(&mut modal);
            submit(&mut modal, &invoker, &toasts).await?;
        }
        Command::Update { id, fields } => {
            let product = find_product(service.as_ref(), ProductId(id)).await?;
            let mut modal = open_modal(ModalMode::Update, product, host.clone(), settings.locale);
            fields.apply(&mut modal);
            submit(&mut modal, &invoker, &toasts).await?;
        }
        Command::Delete { id, yes } => {
            let product = find_product(service.as_ref(), ProductId(id)).await?;
            let modal = open_modal(ModalMode::Delete, product, host.clone(), settings.locale);
            if let ModalView::DeleteConfirmation {
                prompt,
                product_title,
                ..
            } = modal.view()
            {
                println!("{prompt} {product_title}?");
            }
            if !yes {
                modal.cancel();
                println!("not confirmed; pass --yes to delete");
                return Ok(());
            }
            let outcome = modal.confirm_delete(&invoker).await;
            print_toasts(&toasts);
            if let Some(result) = outcome {
                result?;
            }
        }
    }

    tracing::debug!(
        closed = host.closed.load(Ordering::SeqCst),
        refresh = host.changed.load(Ordering::SeqCst),
        "modal finished"
    );
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
