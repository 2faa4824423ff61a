use super::print::{
    print_categories, print_config, print_json, print_messages, print_product_detail, print_view,
};
use super::setup::{AddArgs, Cli, Commands, ListArgs};
use clap::Parser;
use stockroom::api::{ConfigAction, ListQuery};
use stockroom::error::Result;
use stockroom::init::{initialize, StockroomContext};
use stockroom::model::{ProductDraft, ProductId};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "STOCKROOM_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut ctx = initialize(&cwd, cli.global);

    match cli.command {
        Some(Commands::List(args)) => handle_list(&ctx, args),
        Some(Commands::Add(args)) => handle_add(&mut ctx, args),
        Some(Commands::Show { id, json }) => handle_show(&ctx, id, json),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&mut ctx),
        None => handle_list(&ctx, ListArgs::default()),
    }
}

/// Diagnostics go to stderr. `STOCKROOM_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "stockroom=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn handle_list(ctx: &StockroomContext, args: ListArgs) -> Result<()> {
    let json = args.json;
    let query = ListQuery {
        search: args.search,
        sort: args.sort,
        category: args.category,
        status: args.status,
        select: args.select,
    };
    let result = ctx.api.list(query)?;

    if let Some(view) = &result.view {
        if json {
            return print_json(view);
        }
        print_view(view, &ctx.api.settings().currency);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut StockroomContext, args: AddArgs) -> Result<()> {
    let json = args.json;
    let draft = ProductDraft {
        name: args.name,
        sku: args.sku,
        category: args.category,
        price: args.price,
        stock: args.stock,
        capacity: args.capacity,
        status: args.status,
        image: args.image,
        brand: args.brand,
        location: args.location,
        weight: args.weight,
    };
    let result = ctx.api.create(draft)?;

    if json {
        if let Some(product) = result.affected_products.first() {
            return print_json(product);
        }
    }
    print_messages(&result.messages);
    if let Some(product) = result.affected_products.first() {
        print_product_detail(product, &ctx.api.settings().currency);
    }
    Ok(())
}

fn handle_show(ctx: &StockroomContext, id: ProductId, json: bool) -> Result<()> {
    let result = ctx.api.show(id)?;
    if let Some(product) = result.affected_products.first() {
        if json {
            return print_json(product);
        }
        print_product_detail(product, &ctx.api.settings().currency);
    }
    Ok(())
}

fn handle_categories(ctx: &StockroomContext) -> Result<()> {
    let result = ctx.api.categories()?;
    print_categories(&result.categories);
    Ok(())
}

fn handle_config(ctx: &StockroomContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut StockroomContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
