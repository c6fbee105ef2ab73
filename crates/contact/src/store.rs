use async_trait::async_trait;

/// Typed value of one record-store field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyValue {
    Title(String),
    Email(String),
    PhoneNumber(String),
    RichText(String),
}

impl PropertyValue {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyValue::Title(v)
            | PropertyValue::Email(v)
            | PropertyValue::PhoneNumber(v)
            | PropertyValue::RichText(v) => v,
        }
    }
}

/// Ordered field name → value map handed to a [`RecordStore`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordFields(Vec<(String, PropertyValue)>);

impl RecordFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any previous value stored under `name`.
    pub fn with(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        let name = name.into();
        self.0.retain(|(n, _)| n != &name);
        self.0.push((name, value));
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Identifies a record created in the external store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordHandle {
    pub id: String,
    pub url: Option<String>,
}

/// Write capability of the external record store.
///
/// Implementations own their credentials and collection identifier and must
/// report a missing one as [`dit_shared::Error::Configuration`] without
/// performing any I/O.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create_record(&self, fields: &RecordFields) -> dit_shared::Result<RecordHandle>;
}
