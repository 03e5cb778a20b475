//! # Seed Data Generator
//!
//! Populates the database with sample items and employees for development.
//!
//! ## Usage
//! ```bash
//! # Seed into the default dev database
//! cargo run -p veda-db --bin seed
//!
//! # Specify database path
//! cargo run -p veda-db --bin seed -- --db ./data/veda.db
//! ```
//!
//! Each item gets a plausible purchase/selling price pair and opening stock
//! split between the shop counter and the warehouse. Run with
//! `RUST_LOG=debug` to watch the repository logging.

use std::env;

use tracing_subscriber::EnvFilter;

use veda_core::{NewEmployee, NewItem};
use veda_db::{Database, DbConfig};

/// Sample catalog: (name, description, purchase cents, selling cents, shop, warehouse)
const ITEMS: &[(&str, &str, i64, i64, i64, i64)] = &[
    ("Ashwagandha Churna 100g", "Withania somnifera root powder", 6000, 10000, 50, 200),
    ("Triphala Churna 100g", "Three-fruit digestive blend", 4000, 7500, 40, 150),
    ("Brahmi Ghrita 150ml", "Herbal ghee preparation", 18000, 28000, 12, 40),
    ("Chyawanprash 500g", "Classical herbal jam", 22000, 32500, 25, 80),
    ("Neem Capsules 60ct", "Azadirachta indica extract", 9000, 15000, 30, 120),
    ("Tulsi Drops 30ml", "Holy basil concentrate", 5500, 9900, 45, 100),
    ("Shatavari Powder 100g", "Asparagus racemosus root", 7000, 12000, 35, 90),
    ("Amla Juice 500ml", "Indian gooseberry pressing", 6500, 11000, 20, 60),
    ("Giloy Ras 500ml", "Guduchi stem juice", 7500, 12500, 18, 50),
    ("Arjuna Capsules 60ct", "Terminalia arjuna bark", 9500, 16000, 22, 70),
    ("Mulethi Powder 100g", "Licorice root powder", 4500, 8000, 28, 85),
    ("Shilajit Resin 20g", "Purified mineral pitch", 35000, 55000, 8, 25),
    ("Haritaki Churna 100g", "Terminalia chebula powder", 4200, 7800, 32, 95),
    ("Sitopaladi Churna 60g", "Respiratory support blend", 5200, 9500, 26, 75),
    ("Yashtimadhu Tablets 60ct", "Licorice tablets", 6800, 11500, 24, 65),
    ("Punarnava Capsules 60ct", "Boerhavia diffusa extract", 8800, 14500, 16, 55),
    ("Trikatu Churna 60g", "Three-pungent digestive mix", 3800, 7000, 38, 110),
    ("Kumkumadi Oil 12ml", "Saffron facial oil", 28000, 45000, 10, 30),
    ("Mahanarayan Oil 200ml", "Muscle and joint massage oil", 14000, 23000, 14, 45),
    ("Moringa Capsules 90ct", "Moringa oleifera leaf", 7800, 13000, 20, 60),
];

/// Sample roster: (name, designation, salary cents, commission bps)
const EMPLOYEES: &[(&str, &str, i64, u32)] = &[
    ("Meera Joshi", "Senior Salesperson", 3_200_000, 1000),
    ("Arjun Nair", "Salesperson", 2_400_000, 750),
    ("Kavita Rao", "Trainee", 1_600_000, 500),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Surface repository debug!/info! logs when RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./veda_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Veda POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./veda_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Veda POS Seed Data Generator");
    println!("===============================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing data
    let existing = db.items().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding items...");

    let mut seeded = 0;
    for (name, description, purchase, selling, shop, warehouse) in ITEMS {
        let new_item = NewItem {
            name: name.to_string(),
            description: Some(description.to_string()),
            purchase_price_cents: *purchase,
            selling_price_cents: *selling,
            stock_shop: *shop,
            stock_warehouse: *warehouse,
        };

        if let Err(e) = db.items().insert(&new_item).await {
            eprintln!("Failed to insert {}: {}", name, e);
            continue;
        }

        seeded += 1;
    }

    println!("✓ Seeded {} items", seeded);

    println!();
    println!("Seeding employees...");

    let mut hired = 0;
    for (name, designation, salary, commission_bps) in EMPLOYEES {
        let new_employee = NewEmployee {
            name: name.to_string(),
            designation: designation.to_string(),
            salary_cents: *salary,
            commission_rate_bps: *commission_bps,
        };

        if let Err(e) = db.employees().insert(&new_employee).await {
            eprintln!("Failed to insert {}: {}", name, e);
            continue;
        }

        hired += 1;
    }

    println!("✓ Seeded {} employees", hired);

    // Sanity checks against the freshly seeded data
    println!();
    println!("Verifying...");
    let sellable = db.items().list_in_stock().await?;
    println!("  Items with shop stock: {}", sellable.len());

    let low = db.items().list_low_stock(10).await?;
    println!("  Items at or below 10 units: {}", low.len());

    let inventory = db.reports().inventory_report().await?;
    println!("  Inventory report rows: {}", inventory.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
