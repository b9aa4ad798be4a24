use crate::error::{NotesError, Result};
use crate::field::{Body, BodyRule, IntoField, Tag, TagRule};
use crate::id::IdGenerator;
use serde_json::{Map, Value};
use std::fmt;

/// Key of the tag list in the mapping form of a record.
pub const TAGS_KEY: &str = "Tags";
/// Key of the body in the mapping form of a record.
pub const NOTE_KEY: &str = "Note";

/// A note: one body and an ordered set of tags under a fixed id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: String,
    body: Body,
    tags: Vec<Tag>,
}

impl Record {
    /// Creates an untagged record with the next id from `ids`.
    pub fn new<B: IntoField<BodyRule>>(ids: &IdGenerator, body: B) -> Result<Self> {
        Self::with_tags(ids, body, std::iter::empty::<Tag>())
    }

    /// Creates a record with the next id from `ids`.
    ///
    /// Body and tags are validated before an id is drawn, so a rejected
    /// record does not consume one.
    pub fn with_tags<B, I, T>(ids: &IdGenerator, body: B, tags: I) -> Result<Self>
    where
        B: IntoField<BodyRule>,
        I: IntoIterator<Item = T>,
        T: IntoField<TagRule>,
    {
        let (body, tags) = coerce(body, tags)?;
        Ok(Self {
            id: ids.next_id()?,
            body,
            tags,
        })
    }

    /// Rebuilds a record under an explicit id, e.g. when loading from disk.
    /// No generator is involved, so nothing guards against the id clashing
    /// with one issued later.
    pub fn restore<B, I, T>(id: impl Into<String>, body: B, tags: I) -> Result<Self>
    where
        B: IntoField<BodyRule>,
        I: IntoIterator<Item = T>,
        T: IntoField<TagRule>,
    {
        let (body, tags) = coerce(body, tags)?;
        Ok(Self {
            id: id.into(),
            body,
            tags,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub fn set_body<B: IntoField<BodyRule>>(&mut self, body: B) -> Result<()> {
        self.body = body.into_field()?;
        Ok(())
    }

    /// Appends a tag. Fails if an equal tag is already present.
    pub fn add_tag<T: IntoField<TagRule>>(&mut self, tag: T) -> Result<()> {
        let tag = tag.into_field()?;
        if self.has_tag(&tag) {
            return Err(NotesError::Value("duplicate tag".to_string()));
        }
        self.tags.push(tag);
        Ok(())
    }

    /// Removes the first tag equal to `tag`, keeping the others in order.
    pub fn remove_tag<T: IntoField<TagRule>>(&mut self, tag: T) -> Result<()> {
        let tag = tag.into_field()?;
        let pos = self.tags.iter().position(|t| *t == tag).ok_or_else(|| {
            NotesError::NotFound(format!("tag {} not on note {}", tag, self.id))
        })?;
        self.tags.remove(pos);
        Ok(())
    }

    /// `{id: {"Tags": [...], "Note": body}}`
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(self.id.clone(), self.entry());
        map
    }

    /// The value half of [`Record::to_mapping`].
    pub fn entry(&self) -> Value {
        let tags = self.tags.iter().map(|t| Value::from(t.value())).collect();
        let mut entry = Map::new();
        entry.insert(TAGS_KEY.to_string(), Value::Array(tags));
        entry.insert(NOTE_KEY.to_string(), Value::from(self.body.value()));
        Value::Object(entry)
    }

    /// Rebuilds a record from one `(id, entry)` pair of the mapping form.
    pub fn from_entry(id: &str, entry: &Value) -> Result<Self> {
        let fields = entry
            .as_object()
            .ok_or_else(|| NotesError::Type(format!("note {} must be an object", id)))?;

        let tags = match fields.get(TAGS_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(Tag::from_json)
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(NotesError::Type(format!(
                    "tags of note {} must be a list, got {}",
                    id, other
                )))
            }
        };
        let body = Body::from_json(fields.get(NOTE_KEY).unwrap_or(&Value::Null))?;

        Self::restore(id, body, tags)
    }
}

fn coerce<B, I, T>(body: B, tags: I) -> Result<(Body, Vec<Tag>)>
where
    B: IntoField<BodyRule>,
    I: IntoIterator<Item = T>,
    T: IntoField<TagRule>,
{
    let body = body.into_field()?;
    let mut coerced: Vec<Tag> = Vec::new();
    for tag in tags {
        let tag = tag.into_field()?;
        if coerced.contains(&tag) {
            return Err(NotesError::Value("duplicate tag".to_string()));
        }
        coerced.push(tag);
    }
    Ok((body, coerced))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.tags.iter().map(Tag::value).collect();
        write!(
            f,
            "\n\tID: {}\n\tNote tags: {}\n\t{}\n",
            self.id,
            tags.join(" "),
            self.body
        )
    }
}
