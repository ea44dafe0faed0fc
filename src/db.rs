/// SQLite access for recorded agent moves
///
/// The arena runner logs one row per decision into a `moves` table. This
/// module does the single read the report needs: open the database
/// read-only, pull every row in display order, and hand back owned
/// records. The connection is dropped as soon as the store goes out of
/// scope; there is no write path.
use crate::types::MoveRecord;
use log::debug;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

pub struct MoveStore {
    conn: Connection,
}

impl MoveStore {
    /// Open an existing results database (never creates one)
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        let conn = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!("Opened results database at {}", path.as_ref().display());
        Ok(Self { conn })
    }

    /// Read every recorded move, ordered by game, then episode, then turn
    pub fn fetch_moves(&self) -> rusqlite::Result<Vec<MoveRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT game_name, episode, turn, action, reasoning,
                    agent_type, agent_model, board_state, timestamp
             FROM moves
             ORDER BY game_name, episode, turn",
        )?;

        let moves = stmt
            .query_map([], |row| {
                Ok(MoveRecord {
                    game_name: row.get(0)?,
                    episode: row.get(1)?,
                    turn: row.get(2)?,
                    action: row.get(3)?,
                    reasoning: row.get(4)?,
                    agent_type: row.get(5)?,
                    agent_model: row.get(6)?,
                    board_state: row.get(7)?,
                    timestamp: row.get(8)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Fetched {} move records", moves.len());
        Ok(moves)
    }
}
