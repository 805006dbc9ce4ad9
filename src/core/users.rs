use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use rand::Rng;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Salted SHA-256, stored as "salt$digest" (both hex). The raw password
/// never reaches the database.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::thread_rng().r#gen();
    let salt_hex = hex(&salt);

    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(password.as_bytes());

    format!("{}${:x}", salt_hex, hasher.finalize())
}

pub fn verify_password(stored: &str, password: &str) -> bool {
    let Some((salt_hex, digest)) = stored.split_once('$') else {
        return false;
    };

    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(password.as_bytes());

    format!("{:x}", hasher.finalize()) == digest
}

/// High-level business logic for admin account commands.
pub struct UserLogic;

impl UserLogic {
    pub fn add(pool: &mut DbPool, username: &str, password: &str) -> AppResult<i64> {
        let id = queries::insert_user(&pool.conn, username, &hash_password(password))?;
        oplog(
            &pool.conn,
            "add",
            &format!("user {id}"),
            &format!("User '{username}' added"),
        )?;
        success(format!("User '{username}' added with id {id}."));
        Ok(id)
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        queries::delete_user(&pool.conn, id)?;
        oplog(&pool.conn, "del", &format!("user {id}"), "User deleted")?;
        success(format!("User {id} deleted."));
        Ok(())
    }
}
