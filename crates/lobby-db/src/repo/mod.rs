//! Repository modules for database operations.
//!
//! List queries back the read endpoints. The `ensure` operations are
//! create-if-absent: they insert a row when its unique key is free and
//! otherwise return the existing row untouched.

pub mod bet_type_configs;
pub mod chat_rooms;
pub mod leagues;
pub mod sports;

pub use bet_type_configs::BetTypeConfigRepo;
pub use chat_rooms::ChatRoomRepo;
pub use leagues::LeagueRepo;
pub use sports::SportRepo;

use chrono::SecondsFormat;
use uuid::Uuid;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
