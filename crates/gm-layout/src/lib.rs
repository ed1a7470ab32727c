//! Layout items, ordinal keys and persisted layout loading for gridmark.
//!
//! Every item on the grid has a key `<prefix><separator><ordinal>`, e.g.
//! `item-3`. Ordinals give layouts a stable order and let a session hand out
//! new keys that never collide with existing ones.
//!
//! - [`LayoutItem::generate`]: new item with default geometry
//! - [`compare_by_ordinal`] / [`sort_by_ordinal`]: numeric key ordering
//! - [`load_layout`]: persisted-or-default layout plus the next free ordinal
//! - [`save_layout`] / [`reset_layout`]: write back or drop the persisted layout
//!
//! The store is passed in explicitly, so loading works against any
//! [`gm_store::LayoutStore`].

mod error;
mod item;
mod loader;
mod order;
mod template;
mod value;

pub use error::LayoutError;
pub use item::{LayoutItem, VerticalPosition};
pub use loader::{LoadedLayout, load_layout, reset_layout, save_layout};
pub use order::{compare_by_ordinal, ordinal_of, sort_by_ordinal};
pub use template::default_layout;
pub use value::deep_clone;
