//! Structural checks keeping `tests/unit/` a mirror of `src/`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Entry points and module organization files don't need their own test file
    fn exempt(relative: &str) -> bool {
        relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn rust_files(dir: &Path, base: &Path, found: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                rust_files(&path, base, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let relative = path
                    .strip_prefix(base)
                    .map_err(io::Error::other)?
                    .to_string_lossy()
                    .replace('\\', "/");
                found.insert(relative);
            }
        }
        Ok(())
    }

    fn collect(dir: &str) -> BTreeSet<String> {
        let base = Path::new(dir);
        let mut found = BTreeSet::new();
        if let Err(error) = rust_files(base, base, &mut found) {
            unreachable!("Failed to scan {dir}: {error}");
        }
        found.retain(|relative| !exempt(relative));
        found
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let tests = collect("tests/unit");
        let missing: Vec<_> = collect("src")
            .into_iter()
            .filter(|relative| !tests.contains(relative))
            .map(|relative| format!("  - src/{relative} -> tests/unit/{relative}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = collect("src");
        let orphaned: Vec<_> = collect("tests/unit")
            .into_iter()
            .filter(|relative| !sources.contains(relative))
            .map(|relative| format!("  - tests/unit/{relative} -> src/{relative} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without sources:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let mut files = BTreeSet::new();
        if let Err(error) = rust_files(Path::new("tests"), Path::new("tests"), &mut files) {
            unreachable!("Failed to scan tests: {error}");
        }

        let empty: Vec<_> = files
            .into_iter()
            .filter(|relative| !relative.ends_with("mod.rs"))
            .filter(|relative| {
                fs::read_to_string(Path::new("tests").join(relative))
                    .map_or(true, |content| !content.contains("#[test]"))
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without #[test] functions:\n  - {}",
            empty.join("\n  - ")
        );
    }
}
