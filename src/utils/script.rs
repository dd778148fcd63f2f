//! Executable script writing.

use color_eyre::eyre::WrapErr;
use std::path::Path;

/// Write a shell script to disk and mark it executable (0755 on unix).
pub fn write_executable_script(script_path: &Path, content: &str) -> color_eyre::eyre::Result<()> {
    std::fs::write(script_path, content)
        .wrap_err_with(|| format!("Failed to write script {:?}", script_path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(script_path)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(script_path, perms)
            .wrap_err_with(|| format!("Failed to mark {:?} executable", script_path))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_script_written_executable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("teardown.sh");

        write_executable_script(&path, "#!/bin/sh\necho done\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "#!/bin/sh\necho done\n");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("teardown.sh");
        assert!(write_executable_script(&path, "").is_err());
    }
}
