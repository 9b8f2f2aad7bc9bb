//! Redis Store Module
//!
//! Store backend talking to an external Redis server over one connection.

use tracing::info;

use crate::error::Result;
use crate::store::Store;

// == Redis Store ==
/// Store backed by a single Redis connection.
///
/// The connection is opened once and reused; there is no pooling or
/// reconnection, so a dropped connection surfaces as `Error::Store` on the
/// next command.
pub struct RedisStore {
    conn: redis::Connection,
}

impl RedisStore {
    // == Constructor ==
    /// Connects to the Redis server at `url` (e.g. `redis://127.0.0.1/`).
    pub fn open(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let conn = client.get_connection()?;
        info!("Connected to Redis at {}", url);
        Ok(Self { conn })
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

impl Store for RedisStore {
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(redis::cmd("GET").arg(key).query(&mut self.conn)?)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        Ok(redis::cmd("SET").arg(key).arg(value).query(&mut self.conn)?)
    }

    fn setex(&mut self, key: &str, ttl_secs: u64, value: &[u8]) -> Result<()> {
        Ok(redis::cmd("SETEX")
            .arg(key)
            .arg(ttl_secs)
            .arg(value)
            .query(&mut self.conn)?)
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        Ok(redis::cmd("INCR").arg(key).query(&mut self.conn)?)
    }

    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        Ok(redis::cmd("RPUSH").arg(key).arg(value).query(&mut self.conn)?)
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        Ok(redis::cmd("LRANGE")
            .arg(key)
            .arg(start as i64)
            .arg(stop as i64)
            .query(&mut self.conn)?)
    }

    fn flushall(&mut self) -> Result<()> {
        Ok(redis::cmd("FLUSHALL").query(&mut self.conn)?)
    }
}
