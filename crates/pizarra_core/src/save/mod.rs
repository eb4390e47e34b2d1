// Persistence for the tactical board layout
// JSON blobs under two independent keys, versioned with a legacy fallback

pub mod error;
pub mod format;
pub mod store;

pub use error::SaveError;
pub use format::{decode_formation, decode_layout, encode_formation, encode_layout, TokenLayout};
pub use store::{FileStore, LayoutStore, MemoryStore};

pub const LAYOUT_VERSION: u32 = 1;

/// Storage key for the token layout, kept stable so existing boards
/// keep hydrating.
pub const STORAGE_KEY_TOKENS: &str = "clan_team_tactics_tokens";

/// Storage key for the active formation.
pub const STORAGE_KEY_FORMATION: &str = "clan_team_tactics_formation";
