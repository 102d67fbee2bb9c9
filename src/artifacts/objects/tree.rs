use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::{encode_object, Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::OBJECT_ID_RAW_LENGTH;
use crate::errors::{StoreError, StoreResult};
use bytes::Bytes;
use derive_new::new;

/// One directory slot: a mode tag, a file name and the ID of the blob or
/// subtree it points at.
///
/// Encoded as `<mode> <name>\0` followed by the 20 raw digest bytes, with
/// no delimiter before the next entry.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    mode: EntryMode,
    name: String,
    oid: ObjectId,
}

impl TreeEntry {
    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }
}

/// One directory level. Construction sorts entries by name so that the
/// same set of entries always encodes to the same bytes, which keeps tree
/// IDs deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn new(mut entries: Vec<TreeEntry>) -> Self {
        entries.sort_by(|left, right| left.name.as_bytes().cmp(right.name.as_bytes()));
        Self { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    /// Pretty-printed listing, one `<mode> <type> <hex-id>\t<name>` line
    /// per entry.
    pub fn display(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{} {} {}\t{}\n",
                    entry.mode,
                    entry.mode.object_type(),
                    entry.oid,
                    entry.name
                )
            })
            .collect()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> Bytes {
        let mut content = Vec::new();

        for entry in &self.entries {
            content.extend_from_slice(entry.mode.as_str().as_bytes());
            content.push(b' ');
            content.extend_from_slice(entry.name.as_bytes());
            content.push(0);
            content.extend_from_slice(entry.oid.as_bytes());
        }

        encode_object(self.object_type(), &content)
    }
}

impl Unpackable for Tree {
    /// Decode entries in stored order. The order is trusted as written;
    /// re-sorting here would mask a store that produced unsorted trees.
    fn deserialize(content: Bytes) -> StoreResult<Self> {
        let bytes = content.as_ref();
        let mut entries = Vec::new();
        let mut offset = 0;

        while offset < bytes.len() {
            let space = bytes[offset..].iter().position(|&byte| byte == b' ').ok_or_else(|| {
                StoreError::MalformedObject("tree entry missing mode terminator".to_string())
            })?;
            let mode_tag = std::str::from_utf8(&bytes[offset..offset + space])
                .map_err(|_| StoreError::MalformedObject("non-ASCII entry mode".to_string()))?;
            let mode = EntryMode::try_from(mode_tag)?;
            offset += space + 1;

            let nul = bytes[offset..].iter().position(|&byte| byte == 0).ok_or_else(|| {
                StoreError::MalformedObject("tree entry missing name terminator".to_string())
            })?;
            let name = std::str::from_utf8(&bytes[offset..offset + nul])
                .map_err(|_| StoreError::MalformedObject("non-UTF-8 entry name".to_string()))?
                .to_string();
            offset += nul + 1;

            let digest_end = offset + OBJECT_ID_RAW_LENGTH;
            if digest_end > bytes.len() {
                return Err(StoreError::MalformedObject(format!(
                    "truncated object ID for entry {name:?}"
                )));
            }
            let oid = ObjectId::from_slice(&bytes[offset..digest_end])?;
            offset = digest_end;

            entries.push(TreeEntry::new(mode, name, oid));
        }

        Ok(Self { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }
}
