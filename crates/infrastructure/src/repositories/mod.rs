pub mod list_backup_repository;

pub use list_backup_repository::SqliteListBackupRepository;
