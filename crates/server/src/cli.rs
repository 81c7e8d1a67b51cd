use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Persist records in the sqlite database
    Sqlite,
    /// Keep records in process memory, lost on restart
    Memory,
}

#[derive(Debug, Clone, Parser)]
#[clap(name = "exercise tracker")]
pub struct Cli {
    #[clap(long, env, default_value = "public")]
    pub public_dir: PathBuf,
    #[clap(long, env, default_value = "views")]
    pub views_dir: PathBuf,
    #[clap(long, env, default_value = "exercise.sqlite")]
    pub sqlite_connection_string: String,
    #[clap(long, env, value_enum, default_value = "sqlite")]
    pub record_store: StoreKind,
    #[clap(long, env, default_value = "3000")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,
    #[clap(long, env, default_value = "16384")]
    pub max_body_bytes: usize,
}
