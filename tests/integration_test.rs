use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// Run against an empty config file so the user's own config never leaks in
fn catalog_cmd(config_dir: &tempfile::TempDir) -> Result<Command> {
    let config_path = config_dir.path().join("config.toml");
    if !config_path.exists() {
        fs::write(&config_path, "")?;
    }
    let mut cmd = Command::cargo_bin("atomic-catalog")?;
    cmd.arg("--config")
        .arg(&config_path)
        .env_remove("ATOMIC_CATALOG_FORMAT");
    Ok(cmd)
}

#[test]
fn test_version_command() -> Result<()> {
    let mut cmd = Command::cargo_bin("atomic-catalog")?;
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("atomic-catalog 0.1.0"));
    Ok(())
}

#[test]
fn test_version_subcommand() -> Result<()> {
    let mut cmd = Command::cargo_bin("atomic-catalog")?;
    cmd.arg("version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("atomic-catalog 0.1.0"));
    Ok(())
}

#[test]
fn test_help_command() -> Result<()> {
    let mut cmd = Command::cargo_bin("atomic-catalog")?;
    cmd.arg("--help");
    cmd.assert().success().stdout(predicate::str::contains(
        "A catalog of atomic and bootc container image variants",
    ));
    Ok(())
}

#[test]
fn test_list_filters_by_desktop_and_driver() -> Result<()> {
    let dir = tempdir()?;
    let mut cmd = catalog_cmd(&dir)?;
    cmd.args(["list", "--desktop", "kde", "--nvidia", "open"]);
    cmd.assert().success().stdout(
        "ghcr.io/ublue-os/bazzite-nvidia-open\n\
         ghcr.io/ublue-os/bazzite-asus-nvidia-open\n\
         ghcr.io/secureblue/kinoite-nvidia-open-hardened\n\
         ghcr.io/secureblue/kinoite-nvidia-open-userns-hardened\n",
    );
    Ok(())
}

#[test]
fn test_list_long_format() -> Result<()> {
    let dir = tempdir()?;
    let mut cmd = catalog_cmd(&dir)?;
    cmd.args(["list", "--category", "wayblue", "--stability", "experimental", "--long"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "qtile-nvidia-open-gdm\tqtile\topen\texperimental\tghcr.io/wayblueorg/qtile-nvidia-open-gdm",
        ))
        .stdout(predicate::str::contains("sway").not());
    Ok(())
}

#[test]
fn test_list_rejects_unknown_values() -> Result<()> {
    let dir = tempdir()?;
    let mut cmd = catalog_cmd(&dir)?;
    cmd.args(["list", "--desktop", "enlightenment"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("enlightenment"));

    let mut cmd = catalog_cmd(&dir)?;
    cmd.args(["list", "--category", "nonexistent"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: nonexistent"));
    Ok(())
}

#[test]
fn test_config_hides_categories_and_experimental_images() -> Result<()> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("config.toml"),
        "include_experimental = false\nhidden_categories = [\"Bazzite\"]\n",
    )?;

    let mut cmd = catalog_cmd(&dir)?;
    cmd.arg("list");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ghcr.io/ublue-os/bluefin"))
        .stdout(predicate::str::contains("bazzite").not())
        .stdout(predicate::str::contains("qtile").not())
        .stdout(predicate::str::contains("quay.io/fedora-ostree-desktops").not());
    Ok(())
}

#[test]
fn test_list_requested_category_ignores_hidden_list() -> Result<()> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("config.toml"),
        "hidden_categories = [\"wayblue\"]\n",
    )?;

    let mut cmd = catalog_cmd(&dir)?;
    cmd.args(["list", "--category", "wayblue"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ghcr.io/wayblueorg/river-nvidia-gdm"));

    let mut cmd = catalog_cmd(&dir)?;
    cmd.arg("list");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("wayblueorg").not());
    Ok(())
}

#[test]
fn test_show_category() -> Result<()> {
    let dir = tempdir()?;
    let mut cmd = catalog_cmd(&dir)?;
    cmd.args(["show", "aurora"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Aurora (stable)"))
        .stdout(predicate::str::contains("Registry: ghcr.io\n"))
        .stdout(predicate::str::contains("Hello stargazer, a new experience awaits."))
        .stdout(predicate::str::contains("ghcr.io/ublue-os/aurora-dx-nvidia"));
    Ok(())
}

#[test]
fn test_show_unknown_category() -> Result<()> {
    let dir = tempdir()?;
    let mut cmd = catalog_cmd(&dir)?;
    cmd.args(["show", "ubuntu"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: ubuntu"));
    Ok(())
}

#[test]
fn test_export_json_to_file() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("catalog.json");
    let mut cmd = catalog_cmd(&dir)?;
    cmd.arg("export").arg("--output").arg(&output);
    cmd.assert().success();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output)?)?;
    let categories = value["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 10);
    assert_eq!(categories[0]["category"], "Bazzite");
    assert_eq!(categories[0]["images"][0]["name"], "bazzite");
    Ok(())
}

#[test]
fn test_export_format_from_env_and_config() -> Result<()> {
    let dir = tempdir()?;
    let mut cmd = catalog_cmd(&dir)?;
    cmd.arg("export").env("ATOMIC_CATALOG_FORMAT", "toml");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[[categories]]"));

    fs::write(dir.path().join("config.toml"), "default_format = \"toml\"\n")?;
    let mut cmd = catalog_cmd(&dir)?;
    cmd.arg("export");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[[categories.images]]"));

    let mut cmd = catalog_cmd(&dir)?;
    cmd.args(["export", "--format", "json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
    Ok(())
}

#[test]
fn test_export_rejects_unknown_format() -> Result<()> {
    let dir = tempdir()?;
    let mut cmd = catalog_cmd(&dir)?;
    cmd.args(["export", "--format", "yaml"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown ExportFormat `yaml`"));

    let mut cmd = catalog_cmd(&dir)?;
    cmd.arg("export").env("ATOMIC_CATALOG_FORMAT", "xml");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown ExportFormat `xml`"));
    Ok(())
}

#[test]
fn test_validate_builtin_catalog() -> Result<()> {
    let dir = tempdir()?;
    let mut cmd = catalog_cmd(&dir)?;
    cmd.arg("validate");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Catalog OK: 10 categories, 156 images"));
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("config.toml"), "include_experimental = \"maybe\"\n")?;
    let mut cmd = catalog_cmd(&dir)?;
    cmd.arg("list");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
    Ok(())
}
