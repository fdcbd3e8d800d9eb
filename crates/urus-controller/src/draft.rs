//! The edit draft owned by the controller while a record is selected.

use urus_core::{FieldKind, FileUpload, Record, RecordRef, ResourceSchema, UpdatePayload};

/// A pending value for one draft field.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftValue {
    /// Text, dates and flags, submitted as text parts.
    Text(String),
    /// A staged file, replacing the previous value wholesale.
    File(FileUpload),
}

/// The mutable edit form for one selected record.
///
/// At most one draft exists per controller; selecting a new record replaces
/// the draft, never merges it. Fields keep the schema's form order.
#[derive(Debug, Clone)]
pub struct EditDraft {
    id: RecordRef,
    fields: Vec<(String, DraftValue)>,
}

impl EditDraft {
    /// Seed a draft from a record's current field values.
    ///
    /// Every schema field gets an entry: strings are copied, flags are
    /// stringified, and anything absent starts empty. Image fields prefill
    /// with their current URL until a file is staged.
    pub(crate) fn from_record(schema: &ResourceSchema, record: &Record) -> Self {
        let fields = schema
            .fields()
            .iter()
            .map(|spec| {
                let current = match spec.kind() {
                    FieldKind::Flag => record.value.get_bool(spec.name()).map(|b| b.to_string()),
                    _ => record.value.get_str(spec.name()).map(str::to_string),
                };
                (
                    spec.name().to_string(),
                    DraftValue::Text(current.unwrap_or_default()),
                )
            })
            .collect();

        Self {
            id: record.id.clone(),
            fields,
        }
    }

    /// The identity reference of the record under edit.
    pub fn id(&self) -> &RecordRef {
        &self.id
    }

    /// The draft fields in form order.
    pub fn fields(&self) -> &[(String, DraftValue)] {
        &self.fields
    }

    /// The pending value of one field.
    pub fn get(&self, name: &str) -> Option<&DraftValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Replace a field's pending value; appends when the field was absent.
    pub(crate) fn set(&mut self, name: &str, value: DraftValue) {
        match self.fields.iter_mut().find(|(field, _)| field == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    /// Convert the draft into an update payload.
    pub(crate) fn to_payload(&self) -> UpdatePayload {
        let mut payload = UpdatePayload::new();
        for (name, value) in &self.fields {
            match value {
                DraftValue::Text(text) => payload.push_text(name, text),
                DraftValue::File(file) => payload.push_file(name, file.clone()),
            }
        }
        payload
    }
}
