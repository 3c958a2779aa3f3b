use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `study_sessions` table exists.
fn sessions_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='study_sessions'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `study_sessions` table has a `location` column.
fn sessions_has_location_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('study_sessions')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "location" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `study_sessions` table with the canonical schema.
fn create_sessions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS study_sessions (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            start_time        TEXT NOT NULL,
            end_time          TEXT NOT NULL,
            duration          INTEGER NOT NULL CHECK(duration > 0),
            subject           TEXT NOT NULL
                CHECK(subject IN ('General','Math','Science','History','Language')),
            weather_condition TEXT NOT NULL DEFAULT 'Unknown',
            location          TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_start ON study_sessions(start_time);
        CREATE INDEX IF NOT EXISTS idx_sessions_subject ON study_sessions(subject);
        "#,
    )?;
    Ok(())
}

/// Create the singleton `study_goals` table.
fn create_goals_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS study_goals (
            id          INTEGER PRIMARY KEY CHECK(id = 1),
            daily_goal  INTEGER NOT NULL DEFAULT 0,
            weekly_goal INTEGER NOT NULL DEFAULT 0,
            timestamp   TEXT NOT NULL DEFAULT (datetime('now','localtime'))
        );
        "#,
    )?;
    Ok(())
}

/// Create the `settings` key-value table (JSON-encoded values).
fn create_settings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Migrate a pre-location `study_sessions` table (older database files
/// created before the location column existed).
fn migrate_add_location_column(conn: &Connection) -> Result<()> {
    let version = "20260801_0001_add_session_location";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if sessions_has_location_column(conn)? {
        return Ok(());
    }

    // 2) Apply
    conn.execute(
        "ALTER TABLE study_sessions ADD COLUMN location TEXT NOT NULL DEFAULT '';",
        [],
    )?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added location to study_sessions')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'location' to study_sessions table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Sessions table: create fresh, or upgrade a legacy file
    if !sessions_table_exists(conn)? {
        create_sessions_table(conn)?;
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_sessions_start ON study_sessions(start_time);
            CREATE INDEX IF NOT EXISTS idx_sessions_subject ON study_sessions(subject);
            "#,
        )?;

        migrate_add_location_column(conn)?;
    }

    // 3) Goals + settings
    create_goals_table(conn)?;
    create_settings_table(conn)?;

    Ok(())
}
