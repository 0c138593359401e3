//! Record identifiers.

use uuid::Uuid;

/// A fresh random identifier (UUID v4, hyphenated).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
