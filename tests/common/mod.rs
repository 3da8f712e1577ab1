//! Common test utilities for intmerge integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding input and output files for one merge run
pub struct MergeFixture {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the fixture root
    pub path: PathBuf,
}

impl MergeFixture {
    /// Create a new empty fixture
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write an input file with the given contents
    pub fn write_input(&self, name: &str, contents: &str) -> PathBuf {
        let file_path = self.path.join(name);
        std::fs::write(&file_path, contents).expect("Failed to write input file");
        file_path
    }

    /// Path where the merged output should land
    pub fn output_path(&self) -> PathBuf {
        self.path.join("merged.txt")
    }

    /// Read the merged output back
    #[allow(dead_code)]
    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output_path()).expect("Failed to read output file")
    }

    /// Check whether the output file exists
    #[allow(dead_code)]
    pub fn output_exists(&self) -> bool {
        self.output_path().exists()
    }
}
