//! # Order Desk Demo
//!
//! Non-interactive walk through the desk:
//!
//! 1. Loads [`DeskConfig`] from the environment and sets up tracing (`RUST_LOG`).
//! 2. Optionally fills the desk with random data: `ORDER_DESK_SEED` picks the seed and the
//!    second argument the number of records per kind (default 20).
//! 3. Starts the actor system and places a sample order through the handles.
//! 4. Shuts the system down, prints sorted listings and the bucket layout.
//! 5. Writes the document to the path given as the first argument (default `order_desk`).
//!
//! ```bash
//! RUST_LOG=info ORDER_DESK_SEED=42 cargo run -p order-desk -- snapshot 50
//! ```

use order_desk::desk::{DeskConfig, OrderDesk};
use order_desk::export::save_document;
use order_desk::generator::{generate, GeneratorPlan};
use order_desk::lifecycle::DeskSystem;
use order_desk::menu_store::ResolvedFood;
use order_desk::model::{ClientCreate, FoodCreate, MenuCreate, OrderCreate, OrderStatus};
use std::env;
use table_framework::tracing::setup_tracing;
use table_framework::ActorClient;
use tracing::{error, info, warn, Instrument};

const DEFAULT_OUTPUT: &str = "order_desk";
const DEFAULT_RECORDS: usize = 20;

/// Ids used by the hand-placed sample, clear of the generated `1..=n` range.
const SAMPLE_FOOD: i32 = 9001;
const SAMPLE_CLIENT: i32 = 9001;
const SAMPLE_MENU: i32 = 9001;
const SAMPLE_ORDER: i32 = 9001;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = DeskConfig::from_env();
    let mut args = env::args().skip(1);
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let records = match args.next() {
        Some(raw) => raw.parse::<usize>()?,
        None => DEFAULT_RECORDS,
    };

    info!(?config, "Starting order desk");
    let mut desk = OrderDesk::with_config(&config);

    match env::var("ORDER_DESK_SEED") {
        Ok(raw) => {
            let seed: u64 = raw.parse()?;
            let report = generate(&mut desk, &GeneratorPlan::uniform(records), seed);
            info!(?report, "Random data ready");
        }
        Err(_) => info!("ORDER_DESK_SEED not set, skipping random data"),
    }

    let system = DeskSystem::start(desk, &config);

    let span = tracing::info_span!("sample_order");
    let placed = async {
        system
            .foods
            .insert(SAMPLE_FOOD, FoodCreate::new("Taco", 2.5, true))
            .await?;
        system
            .clients
            .insert(SAMPLE_CLIENT, ClientCreate::new("Ana", "5512345678"))
            .await?;
        system
            .menus
            .insert(SAMPLE_MENU, MenuCreate::new("2024-01-01", vec![SAMPLE_FOOD]))
            .await?;
        let order = OrderCreate::new(
            SAMPLE_CLIENT,
            "2024-02-02",
            vec![SAMPLE_MENU],
            OrderStatus::Pending,
        );
        system.orders.insert(SAMPLE_ORDER, order).await?;
        system
            .orders
            .update_status(SAMPLE_ORDER, OrderStatus::InProgress)
            .await?;
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await;

    match placed {
        Ok(()) => info!(order_id = SAMPLE_ORDER, "Sample order placed"),
        Err(e) => error!(error = %e, "Sample order failed"),
    }

    // Rejected on purpose: no client has this id.
    let ghost = OrderCreate::new(-5, "2024-02-02", Vec::new(), OrderStatus::Pending);
    if let Err(e) = system.orders.insert(SAMPLE_ORDER + 1, ghost).await {
        warn!(error = %e, "Order for unknown client rejected");
    }

    match system.orders.search_by_key(SAMPLE_ORDER).await? {
        Some(order) => println!("Found order {order}"),
        None => println!("Order {SAMPLE_ORDER} not found"),
    }

    let desk = system.shutdown().await?;
    print_listings(&desk);

    let path = save_document(&desk, &output)?;
    println!("\nDocument saved to '{}'", path.display());

    let released = desk.release();
    info!(?released, "Application completed successfully");
    Ok(())
}

fn print_listings(desk: &OrderDesk) {
    println!("\nFoods by price:");
    for food in desk.foods.sorted_by_price() {
        println!("  {food}");
    }

    println!("\nClients by id:");
    for client in desk.clients.sorted_by_id().as_slice() {
        println!("  {client}");
    }

    println!("\nMenus by id:");
    for menu in desk.menus.sorted_by_id().as_slice() {
        println!("  {menu}");
        for resolved in menu.resolve_foods(&desk.foods) {
            match resolved {
                ResolvedFood::Found(food) => println!("    - {food}"),
                ResolvedFood::Missing(id) => println!("    - Food {id} not found"),
            }
        }
    }

    println!("\nOrders by id:");
    for order in desk.orders.sorted_by_id().as_slice() {
        println!("  {order}");
    }

    println!("\nFood table:");
    for (bucket, chain) in desk.foods.bucket_chains() {
        let row: Vec<String> = chain.iter().map(ToString::to_string).collect();
        println!("  Bucket {bucket}: {} -> NULL", row.join(" -> "));
    }
}
