use crate::areas::compression;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{split_object, Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{StoreError, StoreResult};
use bytes::Bytes;
use fake::rand;
use std::io::Write;
use std::path::Path;

/// The object database: a content-addressed map from object IDs to
/// compressed payloads, fanned out on disk by the first two hex digits
/// of the ID.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

// TODO: implement packfiles for better performance and storage efficiency
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store an object and return its ID.
    ///
    /// Identical content always lands at the same path, so storing is
    /// idempotent: an object that already exists on disk is left
    /// untouched.
    pub fn store(&self, object: &impl Object) -> StoreResult<ObjectId> {
        let object_id = object.object_id();
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            self.write_object(&object_path, &object.serialize())?;
        }

        Ok(object_id)
    }

    /// Load and decompress the raw payload of an object.
    pub fn load(&self, object_id: &ObjectId) -> StoreResult<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        let compressed_content = std::fs::read(&object_path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound(*object_id)
            } else {
                StoreError::Io(source)
            }
        })?;

        compression::decompress(&compressed_content)
    }

    /// Load an object and decode it into its typed representation.
    pub fn parse_object(&self, object_id: &ObjectId) -> StoreResult<ObjectBox> {
        let payload = self.load(object_id)?;
        let (object_type, content) = split_object(&payload)?;
        let content = payload.slice_ref(content);

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Blob::deserialize(content)?)),
            ObjectType::Tree => Ok(ObjectBox::Tree(Tree::deserialize(content)?)),
            ObjectType::Commit => Ok(ObjectBox::Commit(Commit::deserialize(content)?)),
        }
    }

    fn write_object(&self, object_path: &Path, payload: &Bytes) -> StoreResult<()> {
        let object_dir = object_path.parent().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid object path {}", object_path.display()),
            )
        })?;
        std::fs::create_dir_all(object_dir)?;

        let compressed_content = compression::compress(payload)?;

        // write to a temp file first, then rename onto the final path so
        // readers never observe a partially written object
        let temp_object_path = object_dir.join(Self::generate_temp_name());
        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)?;
        file.write_all(&compressed_content)?;

        std::fs::rename(&temp_object_path, object_path)?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
