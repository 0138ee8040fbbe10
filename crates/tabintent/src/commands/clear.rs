use tabintent_store::Paths;

pub fn run(paths: &Paths, yes: bool) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!("this deletes all saved intents; re-run with --yes to confirm");
    }
    let mut app = super::open(paths)?;
    app.clear_all()?;
    println!("✓ Cleared history, tab bindings and suppressions");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clear_requires_confirmation() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::at(temp.path());
        assert!(run(&paths, false).is_err());
        assert!(!paths.store_dir().exists());
        run(&paths, true).unwrap();
        assert!(paths.store_dir().join("analytics.json").exists());
    }
}
