use crate::artifacts::objects::object::{encode_object, Object, Packable, Unpackable};
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::StoreResult;
use bytes::Bytes;
use derive_new::new;

/// Opaque file content. The store never inspects or transcodes the bytes.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Bytes {
        encode_object(self.object_type(), &self.content)
    }
}

impl Unpackable for Blob {
    fn deserialize(content: Bytes) -> StoreResult<Self> {
        Ok(Self::new(content))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }
}
