//! GrubMart vendor admin console
//!
//! Command line front end for the menu and order views: list, add, and
//! remove menu items, work active orders through accept/reject/complete,
//! and watch both order views with periodic refresh.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, missing_docs, rust_2018_idioms)]

use clap::{Parser, Subcommand};
use grubmart_client::{ApiClient, ImageUpload};
use grubmart_console::{
    ActiveOrdersView, AddItemForm, CompletedOrdersView, ConsoleError, MenuView, OrderPoller,
    PrepTimeMode, Result, render,
};
use grubmart_core::types::{Category, OrderAction, PrepTime};
use grubmart_core::Config;
use parking_lot::RwLock;
use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{info, warn};

/// Command line interface for the GrubMart admin console
#[derive(Parser)]
#[command(
    name = "grubmart-console",
    version = env!("CARGO_PKG_VERSION"),
    about = "Vendor admin console for the GrubMart backend",
    long_about = "Manage the GrubMart menu and work customer orders from the command line: add and remove menu items, accept, reject, or complete orders, and watch the order views with periodic refresh."
)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Enable structured JSON logging
    #[arg(long)]
    json: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Manage the menu
    Menu {
        /// Menu subcommand
        #[command(subcommand)]
        action: MenuCommands,
    },

    /// Work customer orders
    Orders {
        /// Orders subcommand
        #[command(subcommand)]
        action: OrderCommands,
    },

    /// Watch active and completed orders with periodic refresh
    Watch,

    /// Inspect configuration
    Config {
        /// Show resolved configuration
        #[arg(short, long)]
        show: bool,

        /// Validate configuration values
        #[arg(short, long)]
        validate: bool,
    },
}

/// Menu management commands
#[derive(Subcommand)]
enum MenuCommands {
    /// List all menu items
    List,

    /// Add a menu item
    Add {
        /// Product name
        #[arg(long)]
        name: String,

        /// Product description (clamped to the configured word limit)
        #[arg(long)]
        description: String,

        /// Price in whole currency units
        #[arg(long)]
        price: String,

        /// Category (DelightMeals, FastFood, Snacks, GrubMart)
        #[arg(long)]
        category: String,

        /// Preparation time, e.g. "15 min" or "10-20 min"
        #[arg(long, value_name = "TIME")]
        prep_time: Option<String>,

        /// Path to the product image
        #[arg(long, value_name = "FILE")]
        image: PathBuf,
    },

    /// Remove a menu item
    Remove {
        /// Item identifier
        #[arg(value_name = "ID")]
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Order workflow commands
#[derive(Subcommand)]
enum OrderCommands {
    /// List orders awaiting action
    Active,

    /// List closed orders
    Completed,

    /// Accept a pending order
    Accept {
        /// Order identifier
        #[arg(value_name = "ORDER_ID")]
        order_id: String,
    },

    /// Reject a pending order
    Reject {
        /// Order identifier
        #[arg(value_name = "ORDER_ID")]
        order_id: String,
    },

    /// Mark an accepted order as on the way
    Complete {
        /// Order identifier
        #[arg(value_name = "ORDER_ID")]
        order_id: String,
    },
}

/// Main entry point for the admin console
///
/// # Errors
///
/// Returns error if configuration loading or the requested operation fails
#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for development convenience)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logging(&cli);

    let config = load_config(cli.config.as_deref()).await?;
    let client = ApiClient::new(&config.api)?;

    match cli.command {
        Commands::Menu { action } => handle_menu_command(action, &client, &config).await,
        Commands::Orders { action } => handle_order_command(action, &client, &config).await,
        Commands::Watch => watch_orders(&client, &config).await,
        Commands::Config { show, validate } => handle_config_command(&config, show, validate),
    }
}

/// Initialize logging system
fn init_logging(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Load configuration from file or environment
///
/// # Errors
///
/// Returns error if the configuration file cannot be read or parsed
async fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    if let Some(path) = config_path {
        info!("Loading configuration from: {}", path.display());

        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ConsoleError::Core(grubmart_core::Error::configuration(format!(
                "Failed to parse config file: {e}"
            )))
        })?;

        Ok(config)
    } else {
        Ok(Config::load()?)
    }
}

/// Handle menu subcommands
async fn handle_menu_command(
    action: MenuCommands,
    client: &ApiClient,
    config: &Config,
) -> Result<()> {
    match action {
        MenuCommands::List => {
            let mut view = MenuView::new();
            view.refresh(client).await?;
            print!("{}", render::menu_table(&view.items, &config.menu.currency));
            Ok(())
        }
        MenuCommands::Add {
            name,
            description,
            price,
            category,
            prep_time,
            image,
        } => add_menu_item(client, config, &name, &description, &price, &category, prep_time.as_deref(), &image).await,
        MenuCommands::Remove { id, yes } => remove_menu_item(client, &id, yes).await,
    }
}

/// Add a menu item by driving the add-item form
#[allow(clippy::too_many_arguments)]
async fn add_menu_item(
    client: &ApiClient,
    config: &Config,
    name: &str,
    description: &str,
    price: &str,
    category: &str,
    prep_time: Option<&str>,
    image_path: &std::path::Path,
) -> Result<()> {
    let mut form = AddItemForm::new(&config.menu);

    form.set_name(name);
    form.set_description(description);
    if form.remaining_words() == 0 && form.description != description.trim() {
        warn!(
            max_words = config.menu.max_description_words,
            "description was shortened to the word limit"
        );
    }
    form.set_price(price);
    form.set_category(category.parse::<Category>()?);

    if let Some(raw) = prep_time {
        match raw.parse::<PrepTime>()? {
            PrepTime::Minutes(minutes) => {
                form.set_prep_mode(PrepTimeMode::Absolute);
                form.set_prep_minutes(&minutes.to_string());
            }
            PrepTime::Range { min, max } => {
                form.set_prep_mode(PrepTimeMode::Range);
                form.set_prep_range_min(&min.to_string());
                form.set_prep_range_max(&max.to_string());
            }
        }
    }

    form.set_image(load_image(image_path).await?);

    let result = form.submit(client).await;
    for notice in form.take_notices() {
        println!("{}", notice.message);
    }
    result
}

/// Read an image file and guess its MIME type from the extension
async fn load_image(path: &std::path::Path) -> Result<ImageUpload> {
    let bytes = tokio::fs::read(path).await?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(ToString::to_string)
        .ok_or_else(|| ConsoleError::validation("image", "Image path has no file name"))?;

    let content_type = match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    };

    Ok(ImageUpload {
        filename,
        content_type: content_type.to_string(),
        bytes,
    })
}

/// Remove a menu item, prompting for confirmation unless `--yes`
async fn remove_menu_item(client: &ApiClient, id: &str, yes: bool) -> Result<()> {
    if !yes {
        print!("Remove item {id}? [y/N]: ");
        std::io::stdout().flush()?;

        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Aborted");
            return Ok(());
        }
    }

    let mut view = MenuView::new();
    let result = view.delete(client, &id.to_string()).await;
    for notice in view.take_notices() {
        println!("{}", notice.message);
    }
    result
}

/// Handle order subcommands
async fn handle_order_command(
    action: OrderCommands,
    client: &ApiClient,
    config: &Config,
) -> Result<()> {
    match action {
        OrderCommands::Active => {
            let mut view = ActiveOrdersView::new();
            view.refresh(client).await?;
            if view.orders.is_empty() {
                println!("No active orders");
            }
            for order in &view.orders {
                print!("{}", render::order_card(order, &config.menu.currency));
            }
            Ok(())
        }
        OrderCommands::Completed => {
            let mut view = CompletedOrdersView::new();
            view.refresh(client).await?;
            if view.orders.is_empty() {
                println!("No completed orders");
            }
            for order in &view.orders {
                print!("{}", render::history_line(order, &config.menu.currency));
            }
            Ok(())
        }
        OrderCommands::Accept { order_id } => {
            apply_order_action(client, &order_id, OrderAction::Accept).await
        }
        OrderCommands::Reject { order_id } => {
            apply_order_action(client, &order_id, OrderAction::Reject).await
        }
        OrderCommands::Complete { order_id } => {
            apply_order_action(client, &order_id, OrderAction::Complete).await
        }
    }
}

/// Apply a vendor action against the current active orders
async fn apply_order_action(client: &ApiClient, order_id: &str, action: OrderAction) -> Result<()> {
    let mut view = ActiveOrdersView::new();
    view.refresh(client).await?;

    let order_id = order_id.to_string();
    let Some(order) = view.orders.iter().find(|o| o.order_id == order_id) else {
        return Err(ConsoleError::validation(
            "orderId",
            format!("Order {order_id} is not in the active list"),
        ));
    };

    if !order.available_actions().contains(&action) {
        return Err(ConsoleError::validation(
            "status",
            format!(
                "Order {order_id} is {} and cannot be {}ed",
                order.status,
                action.label().to_lowercase()
            ),
        ));
    }

    let result = view.apply(client, &order_id, action).await;
    for notice in view.take_notices() {
        println!("{}", notice.message);
    }
    result
}

/// Watch both order views, refreshing until Ctrl+C
async fn watch_orders(client: &ApiClient, config: &Config) -> Result<()> {
    let period = Duration::from_secs(config.polling.interval_seconds);
    let active = Arc::new(RwLock::new(ActiveOrdersView::new()));
    let completed = Arc::new(RwLock::new(CompletedOrdersView::new()));

    let mut poller = OrderPoller::new(period);
    poller.watch_active(client.clone(), Arc::clone(&active));
    poller.watch_completed(client.clone(), Arc::clone(&completed));

    info!(
        interval_seconds = config.polling.interval_seconds,
        "Watching orders. Press Ctrl+C to stop."
    );

    let mut ticker = tokio::time::interval(period);
    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down");
                break;
            }
            _ = ticker.tick() => {
                print_order_views(&active.read(), &completed.read(), &config.menu.currency);
            }
        }
    }

    poller.stop().await;
    Ok(())
}

/// Print both order views
fn print_order_views(active: &ActiveOrdersView, completed: &CompletedOrdersView, currency: &str) {
    println!("=== Active orders ({}) ===", active.orders.len());
    for order in &active.orders {
        print!("{}", render::order_card(order, currency));
    }
    println!("=== Completed orders ({}) ===", completed.orders.len());
    for order in &completed.orders {
        print!("{}", render::history_line(order, currency));
    }
}

/// Handle configuration commands
///
/// # Errors
///
/// Returns error if configuration cannot be serialized
fn handle_config_command(config: &Config, show: bool, validate: bool) -> Result<()> {
    if validate {
        validate_config(config);
    }

    if show {
        let config_toml = toml::to_string_pretty(config).map_err(|e| {
            ConsoleError::Core(grubmart_core::Error::configuration(format!(
                "Failed to serialize configuration: {e}"
            )))
        })?;
        println!("{config_toml}");
    }

    Ok(())
}

/// Validate configuration values
fn validate_config(config: &Config) {
    info!("Validating configuration...");

    if !config.api.base_url.starts_with("http") {
        warn!(base_url = %config.api.base_url, "base URL does not look like an HTTP URL");
    }
    if config.api.request_timeout == 0 {
        warn!("request timeout is zero, requests will fail immediately");
    }
    if config.polling.interval_seconds == 0 {
        warn!("polling interval is zero, views will refresh continuously");
    }
    if config.menu.max_description_words == 0 {
        warn!("description word limit is zero, descriptions will be rejected");
    }

    info!("Configuration validation completed");
}
