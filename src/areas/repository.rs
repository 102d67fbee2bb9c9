use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

pub const GIT_DIR: &str = ".git";

/// Handle over one repository root, bundling the object database and the
/// workspace view with the output sink commands write to.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
}

impl Repository {
    /// Open a handle rooted at `path`, creating the root directory itself
    /// when it does not exist yet. The metadata directory is only created
    /// by `init`.
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;

        let database = Database::new(path.join(GIT_DIR).join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_path(&self) -> PathBuf {
        self.path.join(GIT_DIR)
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
