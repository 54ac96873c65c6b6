//! Bootstrap DDL for the catalog tables.
//!
//! No foreign keys: category deletion is deliberately unguarded and
//! orphaned rows are the caller's responsibility.

use rusqlite::Connection;

pub fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS categories (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            description TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS attribute_definitions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            category_id INTEGER NOT NULL,
            name        TEXT NOT NULL,
            slug        TEXT NOT NULL,
            data_type   TEXT NOT NULL DEFAULT 'string',
            is_required INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS products (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            category_id INTEGER NOT NULL,
            name        TEXT NOT NULL,
            sku         TEXT NOT NULL,
            price       REAL NOT NULL DEFAULT 0,
            is_active   INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS product_attribute_values (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            product_id       INTEGER NOT NULL,
            attribute_def_id INTEGER NOT NULL,
            int_value        INTEGER,
            float_value      REAL,
            bool_value       INTEGER,
            string_value     TEXT,
            json_value       TEXT
        );

        CREATE TABLE IF NOT EXISTS product_images (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            product_id   INTEGER NOT NULL,
            storage_path TEXT NOT NULL
        );",
    )
}
