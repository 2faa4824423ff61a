use clap::{Args, Parser, Subcommand};
use stockroom::filter::{FieldFilter, SortMode};
use stockroom::model::{ProductId, ProductStatus};

#[derive(Parser, Debug)]
#[command(name = "stockroom", version)]
#[command(about = "Browse and extend a product inventory from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global inventory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products, filtered and sorted
    #[command(alias = "ls")]
    List(ListArgs),

    /// Add a product
    #[command(alias = "new")]
    Add(AddArgs),

    /// Show one product in detail
    #[command(alias = "v")]
    Show {
        /// Product id
        id: ProductId,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories with product counts
    Categories,

    /// Get or set configuration
    Config {
        /// Configuration key (default-sort, currency, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the inventory store
    Init,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive text matched against name, sku and category
    #[arg(short, long)]
    pub search: Option<String>,

    /// newest, oldest, price-high or price-low
    #[arg(long)]
    pub sort: Option<SortMode>,

    /// Exact category, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: FieldFilter<String>,

    /// in-stock, out-of-stock, or "all"
    #[arg(long, default_value = "all")]
    pub status: FieldFilter<ProductStatus>,

    /// Product to show in the detail panel
    #[arg(long)]
    pub select: Option<ProductId>,

    /// Print the composed view as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub sku: String,

    #[arg(long, default_value = "")]
    pub category: String,

    /// Unit price, e.g. 12.50
    #[arg(long, default_value = "")]
    pub price: String,

    /// Quantity on hand
    #[arg(long, default_value = "")]
    pub stock: String,

    /// Utilization percentage, 0 to 100
    #[arg(long, default_value = "")]
    pub capacity: String,

    /// in-stock or out-of-stock
    #[arg(long, default_value = "in-stock")]
    pub status: ProductStatus,

    #[arg(long, default_value = "")]
    pub brand: String,

    #[arg(long, default_value = "")]
    pub location: String,

    #[arg(long, default_value = "")]
    pub weight: String,

    #[arg(long, default_value = "")]
    pub image: String,

    /// Print the created product as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_filters() {
        let cli = Cli::parse_from([
            "stockroom",
            "list",
            "-s",
            "elec",
            "--sort",
            "price-high",
            "--status",
            "out-of-stock",
            "-c",
            "Electronics",
        ]);
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.search.as_deref(), Some("elec"));
                assert_eq!(args.sort, Some(SortMode::PriceHigh));
                assert_eq!(args.status, FieldFilter::Only(ProductStatus::OutOfStock));
                assert_eq!(args.category, FieldFilter::Only("Electronics".to_string()));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn list_filters_default_to_all() {
        let cli = Cli::parse_from(["stockroom", "ls"]);
        match cli.command {
            Some(Commands::List(args)) => {
                assert!(args.category.is_all());
                assert!(args.status.is_all());
                assert_eq!(args.sort, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_sort() {
        assert!(Cli::try_parse_from(["stockroom", "list", "--sort", "random"]).is_err());
    }

    #[test]
    fn add_requires_name_and_sku() {
        assert!(Cli::try_parse_from(["stockroom", "add", "--name", "X"]).is_err());
        let cli = Cli::try_parse_from(["stockroom", "-g", "add", "--name", "X", "--sku", "X1"])
            .unwrap();
        assert!(cli.global);
        match cli.command {
            Some(Commands::Add(args)) => assert_eq!(args.status, ProductStatus::InStock),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
