//! SQLite fixture shared by the integration tests.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::Connection;
use std::path::{Path, PathBuf};
use tokio::runtime::Builder;

const FIXTURE_SQL: &str = r#"
CREATE TABLE creatures (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    type TEXT NOT NULL,
    total INTEGER NOT NULL,
    hp INTEGER NOT NULL,
    attack INTEGER NOT NULL,
    defense INTEGER NOT NULL,
    sp_atk INTEGER NOT NULL,
    sp_def INTEGER NOT NULL,
    speed INTEGER NOT NULL,
    evolution TEXT
);

CREATE TABLE moves (
    name TEXT NOT NULL,
    type TEXT NOT NULL,
    category TEXT NOT NULL,
    power,
    accuracy,
    pp INTEGER NOT NULL
);

INSERT INTO creatures VALUES
    (1, 'Bulbasaur', 'Grass/Poison', 318, 45, 49, 49, 65, 65, 45, 'Ivysaur'),
    (2, 'Ivysaur', 'Grass/Poison', 405, 60, 62, 63, 80, 80, 60, 'Venusaur'),
    (3, 'Venusaur', 'Grass / Poison', 525, 80, 82, 83, 100, 100, 80, 'None'),
    (4, 'Charmander', 'Fire', 309, 39, 52, 43, 60, 50, 65, 'Charmeleon'),
    (5, 'Charmeleon', 'Fire', 405, 58, 64, 58, 80, 65, 80, 'Charizard'),
    (6, 'Charizard', 'Fire/Flying', 534, 78, 84, 78, 109, 85, 100, ''),
    (7, 'Squirtle', 'Water', 314, 44, 48, 65, 50, 64, 43, 'Wartortle'),
    (8, 'Wartortle', 'Water', 405, 59, 63, 80, 65, 80, 58, 'Blastoise'),
    (9, 'Blastoise', 'Water', 530, 79, 83, 100, 85, 105, 78, NULL);

INSERT INTO moves VALUES
    ('Tackle', 'Normal', 'Physical', 40, 100, 35),
    ('Ember', 'Fire', 'Special', 40, 100, 25),
    ('Growl', 'Normal', 'Status', '—', 100, 40),
    ('Swift', 'Normal', 'Special', 60, NULL, 20),
    ('Fly', 'Flying', 'Physical', 90, 95, 15),
    ('Tackle', 'Normal', 'physical', 35, 95, 35),
    ('Flamethrower', 'Fire', 'Special', 90.0, 100.0, 15);
"#;

/// Writes the fixture database into `dir` and returns its path.
pub fn build_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("pokedex.db");
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("fixture runtime");

    runtime.block_on(async {
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete);
        let mut conn = SqliteConnection::connect_with(&options)
            .await
            .expect("create fixture database");
        sqlx::raw_sql(FIXTURE_SQL)
            .execute(&mut conn)
            .await
            .expect("populate fixture database");
        conn.close().await.expect("close fixture database");
    });
    path
}
