use crate::commands::{CategorySummary, CmdResult};
use crate::error::Result;
use crate::filter::category_options;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let products = store.load_products()?;
    let summaries = category_options(&products)
        .into_iter()
        .map(|name| CategorySummary {
            count: products.iter().filter(|p| p.category == name).count(),
            name,
        })
        .collect();
    Ok(CmdResult::default().with_categories(summaries))
}
