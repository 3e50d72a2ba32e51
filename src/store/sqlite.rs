use crate::errors::{StoreError, StoreResult};
use crate::navigation::FIRST_ID;
use crate::store::RecordStore;
use schema::{BaseStats, Creature, MoveCategory, MoveRecord};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Connection, Encode, FromRow, Sqlite, Type};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, warn};

macro_rules! select_creatures {
    ($tail:literal) => {
        concat!(
            "SELECT id, name, type AS type_label, total, hp, attack, defense, ",
            "sp_atk, sp_def, speed, evolution FROM creatures ",
            $tail
        )
    };
}

// power and accuracy are read as text so that dash sentinels decode to None;
// REAL cells come back as "90.0" and are narrowed in `optional_number`
macro_rules! select_moves {
    ($tail:literal) => {
        concat!(
            "SELECT name, type AS type_label, category, ",
            "CAST(power AS TEXT) AS power, CAST(accuracy AS TEXT) AS accuracy, pp ",
            "FROM moves ",
            $tail
        )
    };
}

const CREATURE_BY_ID: &str = select_creatures!("WHERE id = ?");
const CREATURE_BEFORE: &str =
    select_creatures!("WHERE id < ?1 AND id >= ?2 ORDER BY id DESC LIMIT 1");
const CREATURE_AFTER: &str = select_creatures!("WHERE id > ?1 AND id <= ?2 ORDER BY id LIMIT 1");
const CREATURES_BY_NAME: &str = select_creatures!("WHERE name = ? COLLATE NOCASE ORDER BY id");
const CREATURES_BY_TYPE: &str =
    select_creatures!("WHERE instr(lower(type), lower(?)) > 0 ORDER BY id");
const MAX_CREATURE_ID: &str = "SELECT MAX(id) FROM creatures";
const MOVES_BY_NAME: &str = select_moves!("WHERE name = ? COLLATE NOCASE ORDER BY rowid");
const MOVES_BY_TYPE: &str = select_moves!("WHERE instr(lower(type), lower(?)) > 0 ORDER BY rowid");

#[derive(Debug, FromRow)]
struct CreatureRow {
    id: i64,
    name: String,
    type_label: String,
    total: i64,
    hp: i64,
    attack: i64,
    defense: i64,
    sp_atk: i64,
    sp_def: i64,
    speed: i64,
    evolution: Option<String>,
}

#[derive(Debug, FromRow)]
struct MoveRow {
    name: String,
    type_label: String,
    category: String,
    power: Option<String>,
    accuracy: Option<String>,
    pp: i64,
}

fn narrow<T: TryFrom<i64>>(table: &'static str, column: &str, value: i64) -> StoreResult<T> {
    T::try_from(value)
        .map_err(|_| StoreError::malformed(table, format!("{} out of range: {}", column, value)))
}

/// Empty cells, "None" and dashes all mean the creature does not evolve.
fn evolution_from_cell(cell: Option<String>) -> Option<String> {
    let cell = cell?;
    let trimmed = cell.trim();
    match trimmed {
        "" | "-" | "—" => None,
        _ if trimmed.eq_ignore_ascii_case("none") => None,
        _ => Some(trimmed.to_string()),
    }
}

/// Whole numbers stored as INTEGER or REAL decode; anything else is a sentinel.
fn optional_number<T: TryFrom<i64>>(cell: Option<String>) -> Option<T> {
    let cell = cell?;
    let text = cell.trim();
    let whole = match text.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            let value: f64 = text.parse().ok()?;
            if !value.is_finite() || value.fract() != 0.0 {
                return None;
            }
            value as i64
        }
    };
    T::try_from(whole).ok()
}

impl CreatureRow {
    fn into_record(self) -> StoreResult<Creature> {
        const TABLE: &str = "creatures";
        Ok(Creature {
            id: narrow(TABLE, "id", self.id)?,
            name: self.name,
            type_label: self.type_label,
            total: narrow(TABLE, "total", self.total)?,
            base_stats: BaseStats {
                hp: narrow(TABLE, "hp", self.hp)?,
                attack: narrow(TABLE, "attack", self.attack)?,
                defense: narrow(TABLE, "defense", self.defense)?,
                sp_attack: narrow(TABLE, "sp_atk", self.sp_atk)?,
                sp_defense: narrow(TABLE, "sp_def", self.sp_def)?,
                speed: narrow(TABLE, "speed", self.speed)?,
            },
            evolution: evolution_from_cell(self.evolution),
        })
    }
}

impl MoveRow {
    fn into_record(self) -> StoreResult<MoveRecord> {
        let category = MoveCategory::from_str(self.category.trim())
            .unwrap_or_else(|_| MoveCategory::Other(self.category.clone()));
        Ok(MoveRecord {
            name: self.name,
            type_label: self.type_label,
            category,
            power: optional_number(self.power),
            accuracy: optional_number(self.accuracy),
            pp: narrow("moves", "pp", self.pp)?,
        })
    }
}

fn decode_creatures(
    operation: &'static str,
    rows: Vec<CreatureRow>,
    arg: &str,
) -> StoreResult<Vec<Creature>> {
    debug!(operation, arg, rows = rows.len(), "store query");
    rows.into_iter().map(CreatureRow::into_record).collect()
}

fn decode_moves(
    operation: &'static str,
    rows: Vec<MoveRow>,
    arg: &str,
) -> StoreResult<Vec<MoveRecord>> {
    debug!(operation, arg, rows = rows.len(), "store query");
    rows.into_iter().map(MoveRow::into_record).collect()
}

async fn release(conn: SqliteConnection) {
    if let Err(err) = conn.close().await {
        warn!(error = %err, "database connection did not close cleanly");
    }
}

/// Record store backed by a read-only SQLite file.
///
/// Every operation opens its own connection and closes it before returning,
/// whether the query succeeded or not. The `sqlx` driver is async, so the
/// store drives it on a private current-thread runtime; calling it from
/// inside another Tokio runtime will panic.
#[derive(Debug)]
pub struct SqliteStore {
    path: PathBuf,
    runtime: Runtime,
}

impl SqliteStore {
    /// Does not touch the file; a missing database is reported by the first query.
    pub fn new(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            path: path.into(),
            runtime,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn connect(&self) -> StoreResult<SqliteConnection> {
        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .read_only(true)
            .create_if_missing(false);
        SqliteConnection::connect_with(&options)
            .await
            .map_err(|source| StoreError::Open {
                path: self.path.clone(),
                source,
            })
    }

    async fn fetch_rows<R, A>(&self, sql: &'static str, arg: A) -> StoreResult<Vec<R>>
    where
        R: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
        A: 'static + Send + for<'q> Encode<'q, Sqlite> + Type<Sqlite>,
    {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, R>(sql)
            .bind(arg)
            .fetch_all(&mut conn)
            .await;
        release(conn).await;
        Ok(result?)
    }

    async fn fetch_neighbour(
        &self,
        sql: &'static str,
        id: i64,
        bound: i64,
    ) -> StoreResult<Vec<CreatureRow>> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, CreatureRow>(sql)
            .bind(id)
            .bind(bound)
            .fetch_all(&mut conn)
            .await;
        release(conn).await;
        Ok(result?)
    }

    async fn fetch_max_id(&self) -> StoreResult<Option<i64>> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_scalar::<_, Option<i64>>(MAX_CREATURE_ID)
            .fetch_one(&mut conn)
            .await;
        release(conn).await;
        Ok(result?)
    }

    fn run<T>(
        &self,
        operation: &'static str,
        future: impl Future<Output = StoreResult<T>>,
    ) -> StoreResult<T> {
        let result = self.runtime.block_on(future);
        if let Err(err) = &result {
            warn!(operation, path = %self.path.display(), error = %err, "store operation failed");
        }
        result
    }
}

impl RecordStore for SqliteStore {
    fn find_creature_by_id(&self, id: u32) -> StoreResult<Option<Creature>> {
        const OP: &str = "find_creature_by_id";
        let rows = self.run(OP, self.fetch_rows(CREATURE_BY_ID, i64::from(id)))?;
        let creatures = decode_creatures(OP, rows, &id.to_string())?;
        Ok(creatures.into_iter().next())
    }

    fn find_creature_before(&self, id: u32) -> StoreResult<Option<Creature>> {
        const OP: &str = "find_creature_before";
        let future = self.fetch_neighbour(CREATURE_BEFORE, i64::from(id), i64::from(FIRST_ID));
        let rows = self.run(OP, future)?;
        let creatures = decode_creatures(OP, rows, &id.to_string())?;
        Ok(creatures.into_iter().next())
    }

    fn find_creature_after(&self, id: u32, max: u32) -> StoreResult<Option<Creature>> {
        const OP: &str = "find_creature_after";
        let future = self.fetch_neighbour(CREATURE_AFTER, i64::from(id), i64::from(max));
        let rows = self.run(OP, future)?;
        let creatures = decode_creatures(OP, rows, &id.to_string())?;
        Ok(creatures.into_iter().next())
    }

    fn find_creatures_by_name(&self, name: &str) -> StoreResult<Vec<Creature>> {
        const OP: &str = "find_creatures_by_name";
        let rows = self.run(OP, self.fetch_rows(CREATURES_BY_NAME, name.to_string()))?;
        decode_creatures(OP, rows, name)
    }

    fn find_creatures_by_type_contains(&self, label: &str) -> StoreResult<Vec<Creature>> {
        const OP: &str = "find_creatures_by_type_contains";
        let rows = self.run(OP, self.fetch_rows(CREATURES_BY_TYPE, label.to_string()))?;
        decode_creatures(OP, rows, label)
    }

    fn max_creature_id(&self) -> StoreResult<u32> {
        let max = self.run("max_creature_id", self.fetch_max_id())?;
        debug!(operation = "max_creature_id", ?max, "store query");
        max.map_or(Ok(0), |id| narrow("creatures", "id", id))
    }

    fn find_moves_by_name(&self, name: &str) -> StoreResult<Vec<MoveRecord>> {
        const OP: &str = "find_moves_by_name";
        let rows = self.run(OP, self.fetch_rows(MOVES_BY_NAME, name.to_string()))?;
        decode_moves(OP, rows, name)
    }

    fn find_moves_by_type_contains(&self, label: &str) -> StoreResult<Vec<MoveRecord>> {
        const OP: &str = "find_moves_by_type_contains";
        let rows = self.run(OP, self.fetch_rows(MOVES_BY_TYPE, label.to_string()))?;
        decode_moves(OP, rows, label)
    }
}
