pub mod action;
pub mod init;
pub mod storage;
pub mod web;

use action::ActionError;
use anyhow::Error as AnyhowError;
use config::ConfigError;
use init::InitContextError;
use sea_orm::DbErr;
use std::io::Error as IoError;
use storage::StorageError;
use thiserror::Error;
use web::WebError;

pub type BKResult<T, E = BKError> = anyhow::Result<T, E>;
pub type WebResult<T, E = WebError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;
pub type ActionOutcome<T, E = ActionError> = Result<T, E>;

#[derive(Error, Debug)]
pub enum BKError {
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    InitContextError(#[from] InitContextError),
    #[error("Shutdown error: {0}")]
    ShutdownError(String),
}

impl From<String> for BKError {
    #[inline]
    fn from(e: String) -> Self {
        BKError::Msg(e)
    }
}

impl From<&str> for BKError {
    #[inline]
    fn from(e: &str) -> Self {
        BKError::Msg(e.to_string())
    }
}

impl From<DbErr> for BKError {
    #[inline]
    fn from(e: DbErr) -> Self {
        BKError::StorageError(StorageError::DBError(e))
    }
}
