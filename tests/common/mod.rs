use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HARVEST_WITH_SCYTHE: &str = r#"{
  "Name": "Harvest With Scythe",
  "Author": "bcmpinc",
  "Version": "4.9",
  "Description": "Allows harvesting all crops and forage with the scythe.",
  "UniqueID": "bcmpinc.HarvestWithScythe",
  "EntryDll": "HarvestWithScythe.dll",
  "MinimumApiVersion": "3.11.0",
  "UpdateKeys": [ "GitHub:bcmpinc/StardewHack" ],
  "Dependencies": [
    {
      "UniqueID": "bcmpinc.StardewHack",
      "MinimumVersion": "4.9"
    }
  ]
}
"#;

pub const STARDEW_HACK: &str = r#"{
  "Name": "StardewHack",
  "Author": "bcmpinc",
  "Version": "4.9",
  "Description": "Library for modifying Stardew Valley's code.",
  "UniqueID": "bcmpinc.StardewHack",
  "EntryDll": "StardewHack.dll",
  "MinimumApiVersion": "3.11.0",
  "UpdateKeys": [ "GitHub:bcmpinc/StardewHack" ]
}
"#;

/// Writes `<root>/<package>/manifest.json` and returns its path.
#[allow(unused)]
pub fn write_manifest(root: &Path, package: &str, content: &str) -> PathBuf {
    let dir = root.join(package);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("manifest.json");
    fs::write(&path, content).unwrap();
    path
}

/// Helper to create a mod folder with two packages
#[allow(unused)]
pub fn create_mod_folder() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), "HarvestWithScythe", HARVEST_WITH_SCYTHE);
    write_manifest(temp.path(), "StardewHack", STARDEW_HACK);
    temp
}

#[allow(unused)]
pub fn read_manifest(root: &Path, package: &str) -> String {
    fs::read_to_string(root.join(package).join("manifest.json")).unwrap()
}

/// Helper to run manifest-bump from inside `root`
pub fn run_bump(root: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("manifest-bump");
    cmd.args(extra_args).current_dir(root).env("NO_COLOR", "1");

    cmd.assert()
}
