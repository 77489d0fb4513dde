//! Value objects - immutable types that represent domain concepts

mod flags;
mod page;
mod steam_id;

pub use flags::{FlagParseError, Flags};
pub use page::{total_pages, Page, PageRequest};
pub use steam_id::{SteamId, SteamIdParseError};
