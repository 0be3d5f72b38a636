pub mod catalog;
pub mod config;
pub mod content;
pub mod gesture;
pub mod orbs;
pub mod sheet;
pub mod stack;

pub use catalog::{magazine, page_by_id, MAGAZINE_CONTENT, MAGAZINE_TITLE};
pub use config::{ConfigError, ViewerConfig, CONFIG_KEYS};
pub use content::{
    Alignment, BackPage, CoverPage, ImagePage, PageContent, PageId, PageKind, QuotePage, TextPage,
};
pub use gesture::{key_intent, NavIntent, SwipeTracker, SWIPE_THRESHOLD_PX};
pub use orbs::{Orb, OrbField, Tint, BACKDROP_FILL};
pub use sheet::{sheet_at, sheet_count, sheets, Face, Sheet};
pub use stack::{ActiveFaces, SheetStack, Spread};
