//! Commit object
//!
//! A commit records one snapshot of the project plus the metadata around
//! it. Its content is line-oriented text:
//!
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>        (omitted for a root commit)
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! The encoder guarantees the message ends with a newline so the stored
//! bytes match what other git tooling produces for the same inputs.

use crate::artifacts::objects::object::{encode_object, Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{StoreError, StoreResult};
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;

/// Author or committer identity with its timestamp.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl Author {
    /// Create a new identity stamped with the current local time.
    pub fn new(name: String, email: String) -> Self {
        Author {
            name,
            email,
            timestamp: chrono::Local::now().fixed_offset(),
        }
    }

    pub fn new_with_timestamp(
        name: String,
        email: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// Format as stored in a commit header:
    /// `Name <email> <unix-seconds> <±hhmm>`.
    pub fn display(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )
    }

    /// Parse the stored header form back into an identity.
    ///
    /// The timestamp is parsed as `<unix-seconds> <offset>` so the instant
    /// survives a round trip exactly; re-encoding a parsed identity yields
    /// the original bytes.
    pub fn try_parse(value: &str) -> StoreResult<Self> {
        let email_start = value.find('<').ok_or_else(|| {
            StoreError::MalformedObject(format!("identity missing '<': {value:?}"))
        })?;
        let email_end = value.find('>').ok_or_else(|| {
            StoreError::MalformedObject(format!("identity missing '>': {value:?}"))
        })?;
        if email_end < email_start {
            return Err(StoreError::MalformedObject(format!(
                "identity brackets out of order: {value:?}"
            )));
        }

        let name = value[..email_start].trim_end().to_string();
        let email = value[email_start + 1..email_end].to_string();

        let timestamp = value[email_end + 1..].strip_prefix(' ').ok_or_else(|| {
            StoreError::MalformedObject(format!("identity missing timestamp: {value:?}"))
        })?;
        let timestamp = chrono::DateTime::parse_from_str(timestamp, "%s %z").map_err(|_| {
            StoreError::MalformedObject(format!("invalid identity timestamp: {timestamp:?}"))
        })?;

        Ok(Author {
            name,
            email,
            timestamp,
        })
    }

    /// Load an identity from `<prefix>_NAME`, `<prefix>_EMAIL` and
    /// optionally `<prefix>_DATE` environment variables.
    ///
    /// An unparsable or missing date falls back to the current time.
    pub fn load_from_env(prefix: &str) -> anyhow::Result<Self> {
        let name =
            std::env::var(format!("{prefix}_NAME")).with_context(|| format!("{prefix}_NAME not set"))?;
        let email = std::env::var(format!("{prefix}_EMAIL"))
            .with_context(|| format!("{prefix}_EMAIL not set"))?;
        let timestamp = std::env::var(format!("{prefix}_DATE")).ok().and_then(|date_str| {
            chrono::DateTime::parse_from_rfc2822(&date_str)
                .or_else(|_| chrono::DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                .ok()
        });

        match timestamp {
            Some(ts) => Ok(Author::new_with_timestamp(name, email, ts)),
            None => Ok(Author::new(name, email)),
        }
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }
}

/// Commit object pointing at a tree snapshot.
///
/// At most one parent is supported; a root commit has none and its content
/// simply omits the parent header.
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Commit {
    tree_oid: ObjectId,
    parent: Option<ObjectId>,
    author: Author,
    committer: Author,
    message: String,
}

impl Commit {
    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Pretty-printed form, identical to the stored content.
    pub fn display(&self) -> String {
        self.content_text()
    }

    fn content_text(&self) -> String {
        let mut header_lines = vec![];

        header_lines.push(format!("tree {}", self.tree_oid));
        if let Some(parent) = &self.parent {
            header_lines.push(format!("parent {parent}"));
        }
        header_lines.push(format!("author {}", self.author.display()));
        header_lines.push(format!("committer {}", self.committer.display()));

        let mut text = header_lines.join("\n");
        text.push_str("\n\n");
        text.push_str(&self.message);
        if !self.message.ends_with('\n') {
            text.push('\n');
        }

        text
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        encode_object(self.object_type(), self.content_text().as_bytes())
    }
}

impl Unpackable for Commit {
    fn deserialize(content: Bytes) -> StoreResult<Self> {
        let text = String::from_utf8(content.to_vec())
            .map_err(|_| StoreError::MalformedObject("non-UTF-8 commit text".to_string()))?;
        let (headers, message) = text.split_once("\n\n").ok_or_else(|| {
            StoreError::MalformedObject("missing blank line before commit message".to_string())
        })?;

        let mut lines = headers.lines();

        let tree_line = lines
            .next()
            .ok_or_else(|| StoreError::MalformedObject("missing tree header".to_string()))?;
        let tree_oid = tree_line.strip_prefix("tree ").ok_or_else(|| {
            StoreError::MalformedObject(format!("expected tree header, found {tree_line:?}"))
        })?;
        let tree_oid = ObjectId::try_parse(tree_oid)?;

        let mut next = lines
            .next()
            .ok_or_else(|| StoreError::MalformedObject("missing author header".to_string()))?;
        let parent = match next.strip_prefix("parent ") {
            Some(parent_oid) => {
                let parent_oid = ObjectId::try_parse(parent_oid)?;
                next = lines
                    .next()
                    .ok_or_else(|| StoreError::MalformedObject("missing author header".to_string()))?;
                if next.starts_with("parent ") {
                    return Err(StoreError::MalformedObject(
                        "more than one parent header".to_string(),
                    ));
                }
                Some(parent_oid)
            }
            None => None,
        };

        let author = next.strip_prefix("author ").ok_or_else(|| {
            StoreError::MalformedObject(format!("expected author header, found {next:?}"))
        })?;
        let author = Author::try_parse(author)?;

        let committer_line = lines
            .next()
            .ok_or_else(|| StoreError::MalformedObject("missing committer header".to_string()))?;
        let committer = committer_line.strip_prefix("committer ").ok_or_else(|| {
            StoreError::MalformedObject(format!(
                "expected committer header, found {committer_line:?}"
            ))
        })?;
        let committer = Author::try_parse(committer)?;

        if let Some(extra) = lines.next() {
            return Err(StoreError::MalformedObject(format!(
                "unexpected commit header: {extra:?}"
            )));
        }

        Ok(Self::new(
            tree_oid,
            parent,
            author,
            committer,
            message.to_string(),
        ))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
