use std::path::Path;

use notes_core::fs::{rename_with_fallback, temp_path_for, StoreLock};

use crate::app::{missing_store_message, AppContext};
use crate::cli::BackupArgs;

pub fn handle_backup(ctx: &AppContext, args: &BackupArgs) -> anyhow::Result<()> {
    let source = ctx.store_path()?;
    if !source.exists() {
        return Err(anyhow::anyhow!(missing_store_message(source)));
    }

    let _lock = StoreLock::acquire(source)?;
    let bytes = backup_atomic_copy(source, Path::new(&args.destination))?;
    tracing::info!(bytes, destination = %args.destination, "backup written");

    if !ctx.quiet() {
        println!("Backed up store to {}", args.destination);
    }
    Ok(())
}

fn backup_atomic_copy(source: &Path, destination: &Path) -> anyhow::Result<u64> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to create backup directory {}: {}",
                    parent.display(),
                    e
                )
            })?;
        }
    }

    let temp_path = temp_path_for(destination)?;
    let bytes = std::fs::copy(source, &temp_path).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        anyhow::anyhow!(
            "Failed to copy store from {} to {}: {}",
            source.display(),
            destination.display(),
            e
        )
    })?;

    rename_with_fallback(&temp_path, destination)?;
    Ok(bytes)
}
