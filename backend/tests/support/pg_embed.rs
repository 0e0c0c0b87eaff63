//! Embedded PostgreSQL bootstrap for the Diesel adapter suites.
//!
//! `pg-embed-setup-unpriv` installs binaries and data under `/var/tmp` unless
//! `PG_RUNTIME_DIR` and `PG_DATA_DIR` say otherwise. Sandboxed runners often
//! cannot write there, so when either variable is unset both are pointed at
//! a fresh directory under the cargo target dir for the bootstrap call.
//!
//! Environments without the binaries (or without network access to fetch
//! them) skip the suites unless `REQUIRE_TEST_CLUSTER` is truthy, in which
//! case setup failures panic so CI cannot silently pass.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use uuid::Uuid;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const BOOTSTRAP_ATTEMPTS: u32 = 3;
const BOOTSTRAP_BACKOFF_MS: u64 = 500;

fn scratch_root() -> PathBuf {
    std::env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("target"))
        .join("pg-embed")
}

fn scratch_dirs() -> std::io::Result<(String, String)> {
    let base = scratch_root().join(format!("cluster-{}-{}", std::process::id(), Uuid::new_v4()));
    let install = base.join("install");
    let data = base.join("data");
    std::fs::create_dir_all(&install)?;
    std::fs::create_dir_all(&data)?;
    Ok((
        install.to_string_lossy().into_owned(),
        data.to_string_lossy().into_owned(),
    ))
}

fn looks_transient(message: &str) -> bool {
    let lower = message.to_lowercase();
    [
        "connection reset",
        "connection refused",
        "timed out",
        "timeout",
        "temporarily unavailable",
        "dns error",
        "error decoding response body",
    ]
    .iter()
    .any(|needle| lower.contains(needle))
}

/// Start a private cluster, retrying downloads that fail transiently.
pub fn start_cluster() -> Result<TestCluster, String> {
    let _serialised = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let needs_dirs =
        std::env::var_os("PG_RUNTIME_DIR").is_none() || std::env::var_os("PG_DATA_DIR").is_none();
    let _env = if needs_dirs {
        let (install, data) = scratch_dirs().map_err(|err| err.to_string())?;
        Some(env_lock::lock_env([
            ("PG_RUNTIME_DIR", Some(install)),
            ("PG_DATA_DIR", Some(data)),
        ]))
    } else {
        None
    };

    let mut last_error = String::new();
    for attempt in 0..BOOTSTRAP_ATTEMPTS {
        match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                last_error = format!("{err:?}");
                if attempt + 1 == BOOTSTRAP_ATTEMPTS || !looks_transient(&last_error) {
                    break;
                }
                std::thread::sleep(Duration::from_millis(BOOTSTRAP_BACKOFF_MS << attempt));
            }
        }
    }
    Err(last_error)
}

/// Create an empty database named `name` on `cluster` and return its URL.
pub fn create_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let connection = cluster.connection();
    let mut admin = Client::connect(&connection.database_url("postgres"), NoTls)
        .map_err(|err| describe_postgres_error(&err))?;
    // DROP/CREATE DATABASE refuse to run inside a transaction block, so each
    // statement goes out on its own.
    admin
        .batch_execute(&format!("DROP DATABASE IF EXISTS \"{name}\""))
        .map_err(|err| describe_postgres_error(&err))?;
    admin
        .batch_execute(&format!("CREATE DATABASE \"{name}\""))
        .map_err(|err| describe_postgres_error(&err))?;
    Ok(connection.database_url(name))
}

/// Render a `postgres` error with its SQLSTATE and server message.
pub fn describe_postgres_error(error: &postgres::Error) -> String {
    match error.as_db_error() {
        Some(db) => format!("postgres error {:?}: {}", db.code(), db.message()),
        None => error.to_string(),
    }
}

fn cluster_required() -> bool {
    std::env::var("REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip (returning `None`) when no cluster is available, or panic when
/// `REQUIRE_TEST_CLUSTER` demands one.
pub fn skip_or_fail<T>(reason: impl std::fmt::Display) -> Option<T> {
    assert!(
        !cluster_required(),
        "embedded PostgreSQL unavailable: {reason}"
    );
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}
