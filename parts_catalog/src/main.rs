//! Parts Catalog - storefront catalog and community gallery
//!
//! Browse the parts catalog with search, generation/category filters and
//! sorting, view the community gallery, and submit a car to it.

use clap::{Parser, Subcommand};
use parts_catalog::filter::{parse_category_filter, parse_generation_filter};
use parts_catalog::formatters::{
    format_filter_summary, format_gallery, format_product_details, format_product_grid,
};
use parts_catalog::{Action, GalleryField, SortMode, Storefront, StorefrontClient};

/// Parts storefront client - browse the catalog and the community gallery
#[derive(Parser, Debug)]
#[command(name = "parts_catalog")]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the storefront serving /api/products and /api/gallery
    #[arg(short, long, global = true, default_value = "http://localhost:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog products
    Products {
        /// Search brand, part, or generation
        #[arg(short, long, default_value = "")]
        query: String,

        /// Generation filter: all, e46, f80
        #[arg(short, long, default_value = "all")]
        generation: String,

        /// Category filter: all, wheels, suspension, engine, exhaust, aero, drivetrain, maintenance
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Sort mode: default, price-asc, price-desc, brand-asc
        #[arg(short, long, default_value = "default")]
        sort: String,
    },
    /// Show details for one product
    Details {
        /// Product ID
        id: u64,
    },
    /// List community gallery entries
    Gallery,
    /// Submit your car to the community gallery
    Submit {
        /// Your name
        #[arg(long)]
        name: String,

        /// Car details
        #[arg(long)]
        car: String,

        /// Image URL
        #[arg(long)]
        image_url: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize logging. Set RUST_LOG to control the level (e.g. RUST_LOG=debug)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Using storefront at {}", args.base_url);

    let mut storefront = Storefront::new(StorefrontClient::new(&args.base_url));

    match args.command {
        Command::Products {
            query,
            generation,
            category,
            sort,
        } => {
            let actions = match criteria_actions(query, &generation, &category, &sort) {
                Ok(actions) => actions,
                Err(e) => {
                    log::error!("Invalid filter: {}", e);
                    std::process::exit(1);
                }
            };

            storefront.load().await;
            for action in actions {
                storefront.dispatch(action);
            }

            let state = storefront.state();
            println!(
                "{}\n",
                format_filter_summary(state.criteria(), state.visible().len(), state.products().len())
            );
            print!("{}", format_product_grid(state.visible()));
        }
        Command::Details { id } => {
            storefront.load().await;
            storefront.dispatch(Action::OpenDetails(id));

            match storefront.state().details() {
                Some(product) => print!("{}", format_product_details(product)),
                None => {
                    log::error!("Product {} not found", id);
                    std::process::exit(1);
                }
            }
        }
        Command::Gallery => {
            storefront.load().await;
            print!("{}", format_gallery(storefront.state().gallery()));
        }
        Command::Submit {
            name,
            car,
            image_url,
        } => {
            // The product list plays no part in a submission
            match storefront.client().fetch_gallery().await {
                Ok(gallery) => storefront.dispatch(Action::GalleryLoaded(gallery)),
                Err(e) => log::warn!("Failed to load gallery: {}", e),
            }
            storefront.dispatch(Action::EditGalleryForm(GalleryField::Name, name));
            storefront.dispatch(Action::EditGalleryForm(GalleryField::Car, car));
            storefront.dispatch(Action::EditGalleryForm(GalleryField::ImageUrl, image_url));

            let result = storefront.submit_gallery().await;
            if let Some(message) = storefront.state().gallery_message() {
                println!("{message}");
            }
            match result {
                Ok(()) => print!("\n{}", format_gallery(storefront.state().gallery())),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Translate command-line filter arguments into store actions
fn criteria_actions(
    query: String,
    generation: &str,
    category: &str,
    sort: &str,
) -> parts_catalog::Result<Vec<Action>> {
    Ok(vec![
        Action::SetGeneration(parse_generation_filter(generation)?),
        Action::SetCategory(parse_category_filter(category)?),
        Action::SetSort(SortMode::parse(sort)?),
        Action::SetQuery(query),
    ])
}
