//! v001 -- Initial schema creation.
//!
//! Creates the `client_state` key/value table.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS client_state (
    key        TEXT PRIMARY KEY NOT NULL,   -- e.g. token, user, language
    value      TEXT NOT NULL,
    updated_at TEXT NOT NULL                -- RFC-3339
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
