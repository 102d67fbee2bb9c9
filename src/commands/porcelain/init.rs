use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

const DEFAULT_BRANCH: &str = "main";

impl Repository {
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .git/objects directory")?;

        fs::create_dir_all(self.git_path().join("refs"))
            .context("Failed to create .git/refs directory")?;

        // re-running init must not clobber an existing branch pointer
        let head_path = self.git_path().join("HEAD");
        if !head_path.exists() {
            fs::write(&head_path, format!("ref: refs/heads/{DEFAULT_BRANCH}\n"))
                .context("Failed to create initial HEAD reference")?;
        }

        write!(
            self.writer(),
            "Initialized empty Git repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
