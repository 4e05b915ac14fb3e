//! # Seed Catalog
//!
//! Fills the database with a small bilingual catalog for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./gharim_dev.db
//! cargo run -p gharim-db --bin seed
//!
//! # Specify database path and image base URL
//! cargo run -p gharim-db --bin seed -- --db ./data/gharim.db --base-url http://localhost:8080
//! ```
//!
//! Every section gets a few products. Image URLs point at
//! `{base-url}/storage/v1/object/public/products/images/seed-{n}.jpg`; the
//! files themselves are not created.

use chrono::{Duration, Utc};
use std::env;

use gharim_core::Product;
use gharim_db::media::PUBLIC_OBJECT_PATH;
use gharim_db::{generate_product_id, Database, DbConfig};

/// (section, name_en, name_ar, description_en, description_ar, price in IQD)
type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    i64,
);

const CATALOG: &[SeedRow] = &[
    (
        "coffee",
        "Cardamom Arabic Coffee",
        "قهوة عربية بالهيل",
        "Light roast ground with green cardamom",
        "تحميص خفيف مطحون مع الهيل الأخضر",
        12_000,
    ),
    (
        "coffee",
        "Turkish Coffee 250g",
        "قهوة تركية ٢٥٠ غرام",
        "Fine grind for the dallah",
        "طحنة ناعمة للدلة",
        8_500,
    ),
    (
        "coffee",
        "Iraqi Black Tea",
        "شاي عراقي أسود",
        "Strong leaf tea for istikan glasses",
        "شاي ورق قوي لاستكانات الشاي",
        6_000,
    ),
    (
        "sweets",
        "Basra Dates",
        "تمر البصرة",
        "Barhi dates from Abu Al-Khaseeb",
        "تمر برحي من أبي الخصيب",
        5_000,
    ),
    (
        "sweets",
        "Mann al-Sama",
        "من السما",
        "Traditional Iraqi nougat with cardamom",
        "حلوى عراقية تقليدية بالهيل",
        15_000,
    ),
    (
        "sweets",
        "Kleicha Box",
        "علبة كليچة",
        "Date-filled pastries, box of twelve",
        "معجنات محشوة بالتمر، ١٢ قطعة",
        10_000,
    ),
    (
        "gifts",
        "Gift Hamper",
        "سلة هدايا",
        "Coffee, dates and sweets in a woven basket",
        "قهوة وتمر وحلويات في سلة خوص",
        45_000,
    ),
    (
        "gifts",
        "Brass Dallah",
        "دلة نحاسية",
        "Hand-finished brass coffee pot",
        "دلة قهوة نحاسية مشغولة يدوياً",
        35_000,
    ),
    (
        "traditional",
        "Prayer Beads",
        "مسبحة",
        "33 beads, olive wood",
        "٣٣ خرزة من خشب الزيتون",
        9_000,
    ),
    (
        "traditional",
        "Embroidered Shemagh",
        "شماغ مطرز",
        "Cotton, red and white",
        "قطن، أحمر وأبيض",
        20_000,
    ),
    (
        "books",
        "Riyad as-Salihin",
        "رياض الصالحين",
        "Hardcover, Arabic text",
        "غلاف مقوى، نص عربي",
        18_000,
    ),
    (
        "books",
        "Stories of the Prophets",
        "قصص الأنبياء",
        "Illustrated edition for children",
        "طبعة مصورة للأطفال",
        14_000,
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./gharim_dev.db");
    let mut base_url = String::from("http://localhost:8080");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--base-url" | "-b" => {
                if i + 1 < args.len() {
                    base_url = args[i + 1].trim_end_matches('/').to_string();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Gharim Store Seed Catalog");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>        Database file path (default: ./gharim_dev.db)");
                println!("  -b, --base-url <URL>   Public base URL for image links");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Gharim Store Seed Catalog");
    println!("============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = Utc::now();
    let mut inserted = 0;

    for (index, row) in CATALOG.iter().enumerate() {
        let product = seed_product(row, index, &base_url, start);

        if let Err(e) = db.products().insert(&product).await {
            eprintln!("Failed to insert {}: {}", product.name_en, e);
            continue;
        }
        inserted += 1;
    }

    println!("✓ Inserted {} products", inserted);
    println!();

    let mut seen: Vec<&str> = Vec::new();
    for &(section, ..) in CATALOG {
        if seen.contains(&section) {
            continue;
        }
        seen.push(section);
        let count = db.products().list(Some(section)).await?.len();
        println!("  {:<12} {} products", section, count);
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds one product. Later rows get later timestamps so "newest first"
/// lists them in reverse catalog order.
fn seed_product(
    row: &SeedRow,
    index: usize,
    base_url: &str,
    start: chrono::DateTime<Utc>,
) -> Product {
    let (section, name_en, name_ar, description_en, description_ar, price) = *row;

    Product {
        id: generate_product_id(),
        name_en: name_en.to_string(),
        name_ar: name_ar.to_string(),
        description_en: Some(description_en.to_string()),
        description_ar: Some(description_ar.to_string()),
        price,
        image_url: format!(
            "{}/{}/images/seed-{}.jpg",
            base_url,
            PUBLIC_OBJECT_PATH,
            index + 1
        ),
        section: section.to_string(),
        created_at: start + Duration::seconds(index as i64),
    }
}
