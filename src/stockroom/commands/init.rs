use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::fs;
use std::path::Path;

/// Creates the store directory and, if absent, an empty collection file.
pub fn run<S: DataStore>(store: &mut S, dir: &Path) -> Result<CmdResult> {
    fs::create_dir_all(dir)?;

    let mut result = CmdResult::default();
    let existing = store.location().is_some_and(|path| path.exists());
    if existing {
        result.add_message(CmdMessage::info(format!(
            "Stockroom already initialized at {}",
            dir.display()
        )));
        return Ok(result);
    }

    store.save_products(&[])?;
    result.add_message(CmdMessage::success(format!(
        "Initialized stockroom at {}",
        dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{Product, ProductId};
    use crate::store::fs::FileStore;
    use tempfile::TempDir;

    #[test]
    fn creates_empty_collection() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".stockroom");
        let mut store = FileStore::new(dir.clone());

        let result = run(&mut store, &dir).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(store.data_path().exists());
        assert!(store.load_products().unwrap().is_empty());
    }

    #[test]
    fn leaves_existing_collection_alone() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_path_buf();
        let mut store = FileStore::new(dir.clone());
        store
            .save_products(&[Product::new(ProductId(1), "Keep", "K1")])
            .unwrap();

        let result = run(&mut store, &dir).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(store.load_products().unwrap().len(), 1);
    }
}
