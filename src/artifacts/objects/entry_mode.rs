use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::StoreError;

/// File mode tag of a tree entry.
///
/// The tree builder only ever emits `Regular` and `Directory`; the other
/// two modes exist so trees written by real git decode and re-encode
/// without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// Regular file (100644)
    Regular,
    /// Executable file (100755)
    Executable,
    /// Symbolic link (120000)
    Symlink,
    /// Subdirectory (40000)
    Directory,
}

impl EntryMode {
    /// The mode digits as they appear in tree entry bytes.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryMode::Regular => "100644",
            EntryMode::Executable => "100755",
            EntryMode::Symlink => "120000",
            EntryMode::Directory => "40000",
        }
    }

    /// The object type this mode points at.
    pub fn object_type(&self) -> ObjectType {
        match self {
            EntryMode::Directory => ObjectType::Tree,
            _ => ObjectType::Blob,
        }
    }
}

impl TryFrom<&str> for EntryMode {
    type Error = StoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "100644" => Ok(EntryMode::Regular),
            "100755" => Ok(EntryMode::Executable),
            "120000" => Ok(EntryMode::Symlink),
            "40000" => Ok(EntryMode::Directory),
            _ => Err(StoreError::MalformedObject(format!(
                "invalid entry mode: {value}"
            ))),
        }
    }
}

impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
