use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blockfile::config::Config;
use blockfile::repo::{
    AuthRepo, CatalogFilters, CatalogRepo, HttpAuthRepo, HttpCatalogRepo, HttpProductFileRepo,
    HttpProductRepo, HttpRankingsRepo, ProductFileRepo, ProductRepo, RankingsRepo,
};
use blockfile::Http;

/// Command-line client for the BlockFile storefront
#[derive(Parser, Debug)]
#[command(name = "blockfile")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Directory for downloaded files
    #[arg(long, value_name = "PATH")]
    downloads_dir: Option<PathBuf>,

    /// Username to log in with before running the command
    #[arg(short, long, requires = "password")]
    user: Option<String>,

    /// Password for --user
    #[arg(short, long, requires = "user")]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the product catalog
    Catalog {
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Filter by product name
        #[arg(long, default_value = "")]
        name: String,
        /// Filter by author
        #[arg(long, default_value = "")]
        author: String,
        /// Filter by category
        #[arg(long, default_value = "")]
        category: String,
    },
    /// Show one product with its comments
    Detail { product_id: i64 },
    /// Download a purchased product's file
    Download { product_id: i64 },
    /// Show the three ranking tables
    Rankings {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::load(
        args.config.as_ref(),
        args.base_url.as_deref(),
        args.downloads_dir.as_ref(),
    )?;

    info!("Using backend at {}", config.base_url);

    let http = Http::new(&config.base_url)?;

    // Authenticate up front when credentials were given; the session cookie
    // is replayed on every later request.
    if let (Some(user), Some(password)) = (&args.user, &args.password) {
        let auth: Arc<dyn AuthRepo> = Arc::new(HttpAuthRepo::new(http.clone()));
        let session = auth.login(user, password).await?;
        info!(
            "Logged in as {} (balance {})",
            session.username, session.balance
        );
    }

    match args.command {
        Command::Catalog {
            page,
            name,
            author,
            category,
        } => {
            let repo: Arc<dyn CatalogRepo> = Arc::new(HttpCatalogRepo::new(http));
            let filters = CatalogFilters {
                name,
                author,
                category,
            };
            let listing = repo.page(page, &filters).await?;
            println!("Page {}/{}", listing.page, listing.total_pages);
            for product in listing.items {
                println!(
                    "#{:<6} {:<40} {:<20} ${:.2}",
                    product.id, product.name, product.author, product.price
                );
            }
        }
        Command::Detail { product_id } => {
            let repo: Arc<dyn ProductRepo> = Arc::new(HttpProductRepo::new(http));
            let view = repo.detail(product_id).await?;
            let detail = &view.detail;
            println!("{} v{} by {}", detail.name, detail.version, detail.author);
            println!("Category: {}", detail.category);
            if let Some(price) = detail.price {
                println!("Price: ${price:.2}");
            }
            println!(
                "Purchases: {}  Rating: {:.1}",
                detail.purchases, detail.average_rating
            );
            println!("\n{}", detail.description);
            if !view.comments.is_empty() {
                println!("\nComments:");
                for comment in &view.comments {
                    println!("  [{}*] {}: {}", comment.rating, comment.client, comment.body);
                }
            }
        }
        Command::Download { product_id } => {
            let repo: Arc<dyn ProductFileRepo> = Arc::new(HttpProductFileRepo::new(
                http,
                config.downloads_dir(),
            ));
            let path = repo.download(product_id).await?;
            println!("Saved to {}", path.display());
        }
        Command::Rankings { page } => {
            let repo: Arc<dyn RankingsRepo> = Arc::new(HttpRankingsRepo::new(http));

            let most = repo.most_purchased(page).await?;
            println!("Most purchased (page {}/{}):", most.page, most.total_pages);
            for item in most.items {
                println!("  {:>3}. {} ({} purchases)", item.top, item.name, item.purchases);
            }

            let buyers = repo.top_buyers(page).await?;
            println!("\nTop buyers (page {}/{}):", buyers.page, buyers.total_pages);
            for item in buyers.items {
                println!("  {:>3}. {} ({} purchases)", item.top, item.name, item.purchases);
            }

            let rated = repo.best_rated(page).await?;
            println!("\nBest rated (page {}/{}):", rated.page, rated.total_pages);
            for item in rated.items {
                println!(
                    "  {:>3}. {} ({:.1} over {} ratings)",
                    item.top, item.name, item.average, item.rating_count
                );
            }
        }
    }

    Ok(())
}
