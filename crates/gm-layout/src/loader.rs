//! Loading and persisting layouts.

use gm_config::LayoutConfig;
use gm_store::{LayoutStore, LayoutStoreExt};

use crate::error::LayoutError;
use crate::item::LayoutItem;
use crate::order::{ordinal_of, sort_by_ordinal};

/// A layout sorted by key ordinal, with the next free ordinal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedLayout {
    pub items: Vec<LayoutItem>,
    /// Strictly greater than every ordinal in `items`; 0 for an empty layout.
    /// A key holding `u64::MAX` has no successor and is left out.
    pub next_ordinal: u64,
}

impl LoadedLayout {
    /// Sort `items` by ordinal and derive the next free ordinal.
    #[must_use]
    pub fn from_items(mut items: Vec<LayoutItem>, config: &LayoutConfig) -> Self {
        if items.is_empty() {
            return Self {
                items,
                next_ordinal: 0,
            };
        }
        sort_by_ordinal(&mut items, &config.separator);
        let next_ordinal = items
            .iter()
            .filter_map(|item| successor(&item.key, &config.separator))
            .max()
            .unwrap_or(0);
        Self {
            items,
            next_ordinal,
        }
    }

    /// Key the next added item will get.
    #[must_use]
    pub fn next_key(&self, config: &LayoutConfig) -> String {
        config.key_for(self.next_ordinal)
    }

    /// Append a new item with the next key and advance the counter.
    ///
    /// Fails with [`LayoutError::OrdinalsExhausted`] once the counter cannot
    /// advance any further.
    pub fn add_item(
        &mut self,
        value: impl Into<String>,
        config: &LayoutConfig,
    ) -> Result<&LayoutItem, LayoutError> {
        let next = self
            .next_ordinal
            .checked_add(1)
            .ok_or(LayoutError::OrdinalsExhausted)?;
        let item = LayoutItem::generate(self.next_key(config), config).with_value(value);
        self.next_ordinal = next;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove the item with `key`, returning it if present.
    ///
    /// The counter is left untouched so removed keys are never reused.
    pub fn remove_item(&mut self, key: &str) -> Option<LayoutItem> {
        let index = self.items.iter().position(|item| item.key == key)?;
        Some(self.items.remove(index))
    }
}

/// Ordinal following the one in `key`, if the key has one that can advance.
fn successor(key: &str, separator: &str) -> Option<u64> {
    let ordinal = ordinal_of(key, separator)?;
    let next = ordinal.checked_add(1);
    if next.is_none() {
        tracing::warn!(key, "layout key ordinal cannot be advanced, ignoring it for new keys");
    }
    next
}

/// Load the layout for a session.
///
/// A layout persisted under `config.storage_key` replaces `default`. A missing
/// or corrupt persisted value falls back to `default` without an error.
///
/// # Example
///
/// ```
/// use gm_config::LayoutConfig;
/// use gm_layout::{LayoutItem, load_layout};
/// use gm_store::NullStore;
///
/// let config = LayoutConfig::default();
/// let default = vec![
///     LayoutItem::generate("item-0", &config),
///     LayoutItem::generate("item-3", &config),
///     LayoutItem::generate("item-1", &config),
/// ];
/// let layout = load_layout(&NullStore, default, &config);
/// let keys: Vec<_> = layout.items.iter().map(|i| i.key.as_str()).collect();
/// assert_eq!(keys, ["item-0", "item-1", "item-3"]);
/// assert_eq!(layout.next_ordinal, 4);
/// ```
pub fn load_layout<S>(store: &S, default: Vec<LayoutItem>, config: &LayoutConfig) -> LoadedLayout
where
    S: LayoutStore + ?Sized,
{
    let items = match store.get_json::<Vec<LayoutItem>>(&config.storage_key) {
        Some(persisted) => {
            tracing::debug!(count = persisted.len(), "loaded persisted layout");
            persisted
        }
        None => {
            tracing::debug!(count = default.len(), "using default layout");
            default
        }
    };
    LoadedLayout::from_items(items, config)
}

/// Persist `items` under `config.storage_key`.
pub fn save_layout<S>(store: &S, items: &[LayoutItem], config: &LayoutConfig) -> Result<(), LayoutError>
where
    S: LayoutStore + ?Sized,
{
    store.set_json(&config.storage_key, items)?;
    tracing::debug!(count = items.len(), "saved layout");
    Ok(())
}

/// Drop the persisted layout so the next load uses the default again.
pub fn reset_layout<S>(store: &S, config: &LayoutConfig) -> Result<(), LayoutError>
where
    S: LayoutStore + ?Sized,
{
    store.remove(&config.storage_key)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gm_store::{FileStore, LayoutStore, MemoryStore, NullStore};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use crate::default_layout;
    use crate::item::VerticalPosition;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    fn items(keys: &[&str]) -> Vec<LayoutItem> {
        keys.iter()
            .map(|key| LayoutItem::generate(*key, &config()))
            .collect()
    }

    fn keys(layout: &LoadedLayout) -> Vec<&str> {
        layout.items.iter().map(|i| i.key.as_str()).collect()
    }

    #[test]
    fn test_empty_default() {
        let layout = load_layout(&NullStore, Vec::new(), &config());
        assert!(layout.items.is_empty());
        assert_eq!(layout.next_ordinal, 0);
    }

    #[test]
    fn test_default_sorted_with_next_ordinal() {
        let layout = load_layout(&NullStore, items(&["item-0", "item-3", "item-1"]), &config());
        assert_eq!(keys(&layout), vec!["item-0", "item-1", "item-3"]);
        assert_eq!(layout.next_ordinal, 4);
    }

    #[test]
    fn test_persisted_layout_replaces_default() {
        let store = MemoryStore::new().with_value(
            "layout",
            r#"[{"i":"item-7","x":0,"y":0,"w":2,"h":1,"value":"b"},
                {"i":"item-5","x":2,"y":null,"w":2,"h":1,"value":"a"}]"#,
        );
        let layout = load_layout(&store, items(&["item-0"]), &config());
        assert_eq!(keys(&layout), vec!["item-5", "item-7"]);
        assert_eq!(layout.next_ordinal, 8);
    }

    #[test]
    fn test_persisted_empty_layout() {
        let store = MemoryStore::new().with_value("layout", "[]");
        let layout = load_layout(&store, items(&["item-0", "item-1"]), &config());
        assert!(layout.items.is_empty());
        assert_eq!(layout.next_ordinal, 0);
    }

    #[test]
    fn test_corrupt_persisted_layout_falls_back() {
        let store = MemoryStore::new().with_value("layout", "[{oops");
        let layout = load_layout(&store, items(&["item-2"]), &config());
        assert_eq!(keys(&layout), vec!["item-2"]);
        assert_eq!(layout.next_ordinal, 3);
    }

    #[test]
    fn test_custom_storage_key() {
        let config = LayoutConfig {
            storage_key: "poster".to_owned(),
            ..LayoutConfig::default()
        };
        let store = MemoryStore::new()
            .with_value("layout", r#"[{"i":"item-1","w":1,"h":1}]"#)
            .with_value("poster", r#"[{"i":"item-9","w":1,"h":1}]"#);
        let layout = load_layout(&store, Vec::new(), &config);
        assert_eq!(keys(&layout), vec!["item-9"]);
        assert_eq!(layout.next_ordinal, 10);
    }

    #[test]
    fn test_malformed_key_does_not_lower_counter() {
        let layout = load_layout(&NullStore, items(&["item-4", "oops", "item-2"]), &config());
        assert_eq!(keys(&layout), vec!["oops", "item-2", "item-4"]);
        assert_eq!(layout.next_ordinal, 5);
    }

    #[test]
    fn test_add_item_uses_next_key() {
        let config = config();
        let mut layout = load_layout(&NullStore, items(&["item-0", "item-1"]), &config);

        let added = layout.add_item("## New", &config).unwrap();
        assert_eq!(added.key, "item-2");
        assert_eq!(added.value, "## New");
        assert_eq!(layout.next_ordinal, 3);
        assert_eq!(layout.next_key(&config), "item-3");
    }

    #[test]
    fn test_removed_keys_not_reused() {
        let config = config();
        let mut layout = load_layout(&NullStore, items(&["item-0", "item-1"]), &config);

        let removed = layout.remove_item("item-1").unwrap();
        assert_eq!(removed.key, "item-1");
        assert!(layout.remove_item("item-1").is_none());
        assert_eq!(layout.add_item("", &config).unwrap().key, "item-2");
    }

    #[test]
    fn test_save_then_load() {
        let config = config();
        let store = MemoryStore::new();
        let mut layout = load_layout(&store, Vec::new(), &config);
        layout.add_item("first", &config).unwrap();
        layout.add_item("second", &config).unwrap();
        save_layout(&store, &layout.items, &config).unwrap();

        let reloaded = load_layout(&store, Vec::new(), &config);
        assert_eq!(reloaded, layout);
    }

    #[test]
    fn test_reset_restores_default() {
        let config = config();
        let store = MemoryStore::new().with_value("layout", r#"[{"i":"item-5","w":1,"h":1}]"#);
        reset_layout(&store, &config).unwrap();

        let layout = load_layout(&store, items(&["item-0"]), &config);
        assert_eq!(keys(&layout), vec!["item-0"]);
    }

    #[test]
    fn test_max_ordinal_does_not_wrap_counter() {
        let max = format!("item-{}", u64::MAX);
        let layout = load_layout(&NullStore, items(&["item-3", max.as_str()]), &config());
        assert_eq!(keys(&layout), vec!["item-3", max.as_str()]);
        assert_eq!(layout.next_ordinal, 4);
    }

    #[test]
    fn test_only_max_ordinal() {
        let max = format!("item-{}", u64::MAX);
        let layout = load_layout(&NullStore, items(&[max.as_str()]), &config());
        assert_eq!(layout.next_ordinal, 0);
    }

    #[test]
    fn test_add_item_fails_when_ordinals_exhausted() {
        let config = config();
        let last = format!("item-{}", u64::MAX - 1);
        let mut layout = load_layout(&NullStore, items(&[last.as_str()]), &config);
        assert_eq!(layout.next_ordinal, u64::MAX);

        let err = layout.add_item("", &config).unwrap_err();
        assert!(matches!(err, LayoutError::OrdinalsExhausted));
        assert_eq!(layout.items.len(), 1);
        assert_eq!(layout.next_ordinal, u64::MAX);
    }

    #[test]
    fn test_file_store_session_cycle() {
        let tmp = TempDir::new().unwrap();
        let config = config();

        // First session: nothing persisted, template loads, user adds an item.
        let store = FileStore::new(tmp.path().join("state"));
        let mut layout = load_layout(&store, default_layout(&config), &config);
        assert_eq!(layout.next_ordinal, 7);
        let added = layout.add_item("## Projects", &config).unwrap().clone();
        assert_eq!(added.key, "item-7");
        assert_eq!(added.y, VerticalPosition::AppendToEnd);
        save_layout(&store, &layout.items, &config).unwrap();

        // Second session with a fresh handle on the same directory.
        let store = FileStore::new(tmp.path().join("state"));
        let reloaded = load_layout(&store, Vec::new(), &config);
        assert_eq!(reloaded.items.len(), 8);
        assert_eq!(reloaded.items.last(), Some(&added));
        assert_eq!(reloaded.next_ordinal, 8);
    }

    #[test]
    fn test_file_store_writes_plain_json() {
        let tmp = TempDir::new().unwrap();
        let config = config();
        let store = FileStore::new(tmp.path());

        let items = vec![LayoutItem::generate("item-0", &config).with_value("hi")];
        save_layout(&store, &items, &config).unwrap();

        let raw = std::fs::read_to_string(tmp.path().join("layout.json")).unwrap();
        assert_eq!(
            raw,
            r#"[{"i":"item-0","x":0,"y":null,"w":6,"h":2,"value":"hi"}]"#
        );
    }

    #[test]
    fn test_file_store_unordered_file_sorted() {
        let tmp = TempDir::new().unwrap();
        let config = config();
        let store = FileStore::new(tmp.path());
        store
            .set(
                "layout",
                r#"[{"i":"item-0","x":0,"y":0,"w":1,"h":1},
                    {"i":"item-3","x":0,"y":1,"w":1,"h":1},
                    {"i":"item-1","x":0,"y":2,"w":1,"h":1}]"#,
            )
            .unwrap();

        let layout = load_layout(&store, Vec::new(), &config);
        assert_eq!(keys(&layout), vec!["item-0", "item-1", "item-3"]);
        assert_eq!(layout.next_ordinal, 4);
    }

    #[test]
    fn test_file_store_reset_then_template() {
        let tmp = TempDir::new().unwrap();
        let config = config();
        let store = FileStore::new(tmp.path());

        save_layout(&store, &[], &config).unwrap();
        assert!(load_layout(&store, default_layout(&config), &config).items.is_empty());

        reset_layout(&store, &config).unwrap();
        let layout = load_layout(&store, default_layout(&config), &config);
        assert_eq!(layout.items, default_layout(&config));
    }

    #[test]
    fn test_file_store_corrupt_file_falls_back() {
        let tmp = TempDir::new().unwrap();
        let config = config();
        std::fs::write(tmp.path().join("layout.json"), "not json").unwrap();

        let store = FileStore::new(tmp.path());
        let layout = load_layout(&store, default_layout(&config), &config);
        assert_eq!(layout.items.len(), 7);
    }
}
