#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Which files a fake build output directory contains.
pub struct BuildOutput {
    pub apk: bool,
    pub mapping: bool,
    pub symbol: bool,
}

impl BuildOutput {
    pub const FULL: BuildOutput = BuildOutput {
        apk: true,
        mapping: true,
        symbol: true,
    };

    /// Writes the selected files into `dir` and returns it.
    pub fn write(&self, dir: &Path) -> PathBuf {
        fs::create_dir_all(dir).expect("build dir");
        if self.apk {
            fs::write(dir.join("app-release.apk"), b"PK\x03\x04 fake apk").expect("apk");
        }
        if self.mapping {
            fs::write(
                dir.join("mapping.txt"),
                "com.example.App -> a.a:\n    void onCreate() -> a\n",
            )
            .expect("mapping");
        }
        if self.symbol {
            fs::write(dir.join("R.txt"), "int string app_name 0x7f0e001b\n").expect("R.txt");
        }
        dir.to_path_buf()
    }
}
