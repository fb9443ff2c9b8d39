//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

/// Ensure a directory exists, creating it (and parents) when missing.
pub async fn ensure_dir(dir: impl AsRef<Path>) -> anyhow::Result<()> {
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_dir;

    #[tokio::test]
    async fn creates_nested_dirs() -> anyhow::Result<()> {
        let base = std::env::temp_dir().join(format!("dealership_env_{}", std::process::id()));
        let nested = base.join("a/b");
        ensure_dir(&nested).await?;
        assert!(tokio::fs::metadata(&nested).await?.is_dir());
        // idempotent
        ensure_dir(&nested).await?;
        tokio::fs::remove_dir_all(&base).await?;
        Ok(())
    }
}
