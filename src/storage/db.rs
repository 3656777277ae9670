//! SQLite storage layer for Footy

use std::path::{Path, PathBuf};

use anyhow::Context;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::models::{
    validate_name, validate_stat_values, BootColor, BootColorListing, Color, DbStats, Player,
    PlayerDetail, Stat, Team, TeamRoster, TopScorer,
};
use crate::error::{Error, Result};

/// Get the default database path
pub fn default_db_path() -> anyhow::Result<PathBuf> {
    let config_dir = dirs::home_dir()
        .context("Could not find home directory")?
        .join(".footy");

    std::fs::create_dir_all(&config_dir)?;
    Ok(config_dir.join("footy.db"))
}

/// Database connection wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Run migrations
    fn migrate(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS teams (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS stats (
                id INTEGER PRIMARY KEY,
                goals INTEGER NOT NULL DEFAULT 0,
                assists INTEGER NOT NULL DEFAULT 0,
                player_id INTEGER NOT NULL,
                FOREIGN KEY (player_id) REFERENCES players(id)
            );

            CREATE TABLE IF NOT EXISTS boot_colors (
                id INTEGER PRIMARY KEY,
                color TEXT NOT NULL,
                player_id INTEGER NOT NULL UNIQUE,
                FOREIGN KEY (player_id) REFERENCES players(id)
            );

            CREATE TABLE IF NOT EXISTS player_teams (
                player_id INTEGER NOT NULL,
                team_id INTEGER NOT NULL,
                PRIMARY KEY (player_id, team_id),
                FOREIGN KEY (player_id) REFERENCES players(id),
                FOREIGN KEY (team_id) REFERENCES teams(id)
            );

            -- Indexes for common queries
            CREATE INDEX IF NOT EXISTS idx_stats_player_id ON stats(player_id);
            CREATE INDEX IF NOT EXISTS idx_player_teams_team_id ON player_teams(team_id);
            "#,
        )?;
        Ok(())
    }

    // ==================== Players ====================

    /// Register a new player
    pub fn add_player(&mut self, name: &str) -> Result<Player> {
        let name = validate_name(name)?;

        let tx = self.conn.transaction()?;
        match tx.execute("INSERT INTO players (name) VALUES (?1)", params![name]) {
            Ok(_) => {}
            Err(e) if is_constraint_violation(&e) => {
                return Err(Error::Conflict(format!("player '{name}' already exists")));
            }
            Err(e) => return Err(e.into()),
        }
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!(id, %name, "added player");
        Ok(Player { id, name })
    }

    /// Get a player by id
    pub fn get_player(&self, id: i64) -> Result<Option<Player>> {
        player_by_id(&self.conn, id)
    }

    /// Fetch a player's stat totals, boot color, and team memberships
    pub fn player_detail(&self, id: i64) -> Result<PlayerDetail> {
        let player =
            player_by_id(&self.conn, id)?.ok_or_else(|| Error::not_found(format!("player {id}")))?;

        let (total_goals, total_assists) = self.conn.query_row(
            "SELECT COALESCE(SUM(goals), 0), COALESCE(SUM(assists), 0)
             FROM stats WHERE player_id = ?1",
            params![id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        let boot_color = self
            .conn
            .query_row(
                "SELECT color FROM boot_colors WHERE player_id = ?1",
                params![id],
                |row| row.get::<_, String>(0),
            )
            .optional()?
            .map(|s| s.parse::<Color>())
            .transpose()?;

        let mut stmt = self.conn.prepare(
            "SELECT t.name FROM teams t
             JOIN player_teams pt ON pt.team_id = t.id
             WHERE pt.player_id = ?1
             ORDER BY t.name",
        )?;
        let teams = stmt
            .query_map(params![id], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;

        Ok(PlayerDetail {
            id: player.id,
            name: player.name,
            total_goals,
            total_assists,
            boot_color,
            teams,
        })
    }

    /// Delete a player after clearing their memberships, stats, and boot color.
    ///
    /// Returns the number of memberships, stats, and boot color rows removed.
    pub fn delete_player(&mut self, id: i64) -> Result<(usize, usize, usize)> {
        let tx = self.conn.transaction()?;
        if player_by_id(&tx, id)?.is_none() {
            return Err(Error::not_found(format!("player {id}")));
        }

        // Dependent rows go first so the foreign keys never dangle
        let memberships =
            tx.execute("DELETE FROM player_teams WHERE player_id = ?1", params![id])?;
        let stats = tx.execute("DELETE FROM stats WHERE player_id = ?1", params![id])?;
        let boots = tx.execute("DELETE FROM boot_colors WHERE player_id = ?1", params![id])?;
        tx.execute("DELETE FROM players WHERE id = ?1", params![id])?;
        tx.commit()?;

        debug!(id, memberships, stats, boots, "deleted player");
        Ok((memberships, stats, boots))
    }

    // ==================== Teams ====================

    /// Register a new team
    pub fn add_team(&mut self, name: &str) -> Result<Team> {
        let name = validate_name(name)?;

        let tx = self.conn.transaction()?;
        match tx.execute("INSERT INTO teams (name) VALUES (?1)", params![name]) {
            Ok(_) => {}
            Err(e) if is_constraint_violation(&e) => {
                return Err(Error::Conflict(format!("team '{name}' already exists")));
            }
            Err(e) => return Err(e.into()),
        }
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!(id, %name, "added team");
        Ok(Team { id, name })
    }

    /// Get a team by id
    pub fn get_team(&self, id: i64) -> Result<Option<Team>> {
        team_by_id(&self.conn, id)
    }

    /// Fetch a team and its member names
    pub fn team_roster(&self, id: i64) -> Result<TeamRoster> {
        let team =
            team_by_id(&self.conn, id)?.ok_or_else(|| Error::not_found(format!("team {id}")))?;

        let mut stmt = self.conn.prepare(
            "SELECT p.name FROM players p
             JOIN player_teams pt ON pt.player_id = p.id
             WHERE pt.team_id = ?1
             ORDER BY p.name",
        )?;
        let players = stmt
            .query_map(params![id], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;

        Ok(TeamRoster {
            id: team.id,
            name: team.name,
            players,
        })
    }

    /// Delete a team after clearing its roster entries.
    ///
    /// Returns the number of membership rows removed.
    pub fn delete_team(&mut self, id: i64) -> Result<usize> {
        let tx = self.conn.transaction()?;
        if team_by_id(&tx, id)?.is_none() {
            return Err(Error::not_found(format!("team {id}")));
        }

        let memberships =
            tx.execute("DELETE FROM player_teams WHERE team_id = ?1", params![id])?;
        tx.execute("DELETE FROM teams WHERE id = ?1", params![id])?;
        tx.commit()?;

        debug!(id, memberships, "deleted team");
        Ok(memberships)
    }

    // ==================== Memberships ====================

    /// Add a player to a team's roster
    pub fn add_player_to_team(&mut self, player_id: i64, team_id: i64) -> Result<(Player, Team)> {
        let tx = self.conn.transaction()?;
        let player = player_by_id(&tx, player_id)?
            .ok_or_else(|| Error::not_found(format!("player {player_id}")))?;
        let team = team_by_id(&tx, team_id)?
            .ok_or_else(|| Error::not_found(format!("team {team_id}")))?;

        match tx.execute(
            "INSERT INTO player_teams (player_id, team_id) VALUES (?1, ?2)",
            params![player_id, team_id],
        ) {
            Ok(_) => {}
            Err(e) if is_constraint_violation(&e) => {
                return Err(Error::Conflict(format!(
                    "'{}' is already in team '{}'",
                    player.name, team.name
                )));
            }
            Err(e) => return Err(e.into()),
        }
        tx.commit()?;

        debug!(player_id, team_id, "added membership");
        Ok((player, team))
    }

    /// Remove a player from a team's roster
    pub fn remove_player_from_team(
        &mut self,
        player_id: i64,
        team_id: i64,
    ) -> Result<(Player, Team)> {
        let tx = self.conn.transaction()?;
        let player = player_by_id(&tx, player_id)?
            .ok_or_else(|| Error::not_found(format!("player {player_id}")))?;
        let team = team_by_id(&tx, team_id)?
            .ok_or_else(|| Error::not_found(format!("team {team_id}")))?;

        let removed = tx.execute(
            "DELETE FROM player_teams WHERE player_id = ?1 AND team_id = ?2",
            params![player_id, team_id],
        )?;
        if removed == 0 {
            return Err(Error::not_found(format!(
                "membership of '{}' in '{}'",
                player.name, team.name
            )));
        }
        tx.commit()?;

        debug!(player_id, team_id, "removed membership");
        Ok((player, team))
    }

    // ==================== Stats ====================

    /// Record a stat entry for a player
    pub fn add_stat(&mut self, player_id: i64, goals: i64, assists: i64) -> Result<(Player, Stat)> {
        validate_stat_values(goals, assists)?;

        let tx = self.conn.transaction()?;
        let player = player_by_id(&tx, player_id)?
            .ok_or_else(|| Error::not_found(format!("player {player_id}")))?;

        tx.execute(
            "INSERT INTO stats (goals, assists, player_id) VALUES (?1, ?2, ?3)",
            params![goals, assists, player_id],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!(id, player_id, goals, assists, "added stat");
        Ok((
            player,
            Stat {
                id,
                goals,
                assists,
                player_id,
            },
        ))
    }

    /// Get a stat entry by id
    pub fn get_stat(&self, id: i64) -> Result<Option<Stat>> {
        self.conn
            .query_row(
                "SELECT id, goals, assists, player_id FROM stats WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Stat {
                        id: row.get(0)?,
                        goals: row.get(1)?,
                        assists: row.get(2)?,
                        player_id: row.get(3)?,
                    })
                },
            )
            .optional()
            .map_err(Error::from)
    }

    /// Delete a single stat entry
    pub fn delete_stat(&mut self, id: i64) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM stats WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(Error::not_found(format!("stat {id}")));
        }
        debug!(id, "deleted stat");
        Ok(())
    }

    /// Aggregate total goals per player, highest first.
    ///
    /// Ties are broken by ascending player id so the ordering is stable
    /// across engines and runs.
    pub fn top_scorers(&self, limit: usize) -> Result<Vec<TopScorer>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.name, SUM(s.goals) AS total_goals
             FROM players p
             JOIN stats s ON s.player_id = p.id
             GROUP BY p.id
             ORDER BY total_goals DESC, p.id ASC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(TopScorer {
                player_id: row.get(0)?,
                name: row.get(1)?,
                total_goals: row.get(2)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    // ==================== Boot colors ====================

    /// Record a player's boot color
    pub fn add_boot_color(&mut self, player_id: i64, color: &str) -> Result<(Player, BootColor)> {
        let color: Color = color.parse()?;

        let tx = self.conn.transaction()?;
        let player = player_by_id(&tx, player_id)?
            .ok_or_else(|| Error::not_found(format!("player {player_id}")))?;

        let existing: Option<String> = tx
            .query_row(
                "SELECT color FROM boot_colors WHERE player_id = ?1",
                params![player_id],
                |row| row.get(0),
            )
            .optional()?;
        if existing.is_some() {
            return Err(Error::Conflict(format!(
                "player '{}' already has a boot color",
                player.name
            )));
        }

        // The UNIQUE constraint still guards against a racing insert
        match tx.execute(
            "INSERT INTO boot_colors (color, player_id) VALUES (?1, ?2)",
            params![color.as_str(), player_id],
        ) {
            Ok(_) => {}
            Err(e) if is_constraint_violation(&e) => {
                return Err(Error::Conflict(format!(
                    "player '{}' already has a boot color",
                    player.name
                )));
            }
            Err(e) => return Err(e.into()),
        }
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!(id, player_id, %color, "added boot color");
        Ok((
            player,
            BootColor {
                id,
                color,
                player_id,
            },
        ))
    }

    /// Get a boot color entry by id
    pub fn get_boot_color(&self, id: i64) -> Result<Option<BootColor>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, color, player_id FROM boot_colors WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, i64>(2)?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((id, color, player_id)) => Ok(Some(BootColor {
                id,
                color: color.parse()?,
                player_id,
            })),
            None => Ok(None),
        }
    }

    /// List every boot color with the owning player's name resolved
    pub fn list_boot_colors(&self) -> Result<Vec<BootColorListing>> {
        let mut stmt = self.conn.prepare(
            "SELECT b.id, b.color, p.name
             FROM boot_colors b
             LEFT JOIN players p ON p.id = b.player_id
             ORDER BY b.id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, color, player_name)| {
                Ok(BootColorListing {
                    id,
                    color: color.parse()?,
                    player_name,
                })
            })
            .collect()
    }

    /// Delete a boot color entry
    pub fn delete_boot_color(&mut self, id: i64) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM boot_colors WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(Error::not_found(format!("boot color {id}")));
        }
        debug!(id, "deleted boot color");
        Ok(())
    }

    // ==================== Ad hoc queries ====================

    /// Run a read-only SQL statement, returning column names and
    /// stringified rows
    pub fn run_sql(&self, query: &str) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let mut stmt = self.conn.prepare(query)?;
        if !stmt.readonly() {
            return Err(Error::Validation(
                "only read-only statements are allowed here".to_string(),
            ));
        }

        let columns: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
        let column_count = columns.len();

        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut rendered = Vec::with_capacity(column_count);
            for i in 0..column_count {
                rendered.push(format_value(row.get_ref(i)?));
            }
            out.push(rendered);
        }

        Ok((columns, out))
    }

    // ==================== Stats overview ====================

    /// Get row counts for every table
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            players: self.count("players")?,
            teams: self.count("teams")?,
            stats: self.count("stats")?,
            boot_colors: self.count("boot_colors")?,
            memberships: self.count("player_teams")?,
        })
    }

    /// Get the database file size in bytes, if known
    pub fn file_size(&self) -> Option<u64> {
        self.conn
            .path()
            .filter(|p| !p.is_empty())
            .and_then(|p| std::fs::metadata(p).ok())
            .map(|m| m.len())
    }

    fn count(&self, table: &str) -> Result<i64> {
        // Table names come from the fixed list above, never from input
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
            .map_err(Error::from)
    }
}

fn player_by_id(conn: &Connection, id: i64) -> Result<Option<Player>> {
    conn.query_row(
        "SELECT id, name FROM players WHERE id = ?1",
        params![id],
        |row| {
            Ok(Player {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(Error::from)
}

fn team_by_id(conn: &Connection, id: i64) -> Result<Option<Team>> {
    conn.query_row(
        "SELECT id, name FROM teams WHERE id = ?1",
        params![id],
        |row| {
            Ok(Team {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(Error::from)
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn format_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<{} bytes>", b.len()),
    }
}
