use std::collections::BTreeMap;

use formcap_store::FeedbackStore;
use formcap_types::{FieldKind, FieldValue, FormDescriptor, SubmittedRecord};

use crate::error::{Error, Result};

/// The submit pipeline: validate -> extract -> timestamp -> append.
pub struct SubmitService<'a> {
    store: &'a FeedbackStore,
}

impl<'a> SubmitService<'a> {
    pub fn new(store: &'a FeedbackStore) -> Self {
        Self { store }
    }

    /// Run a submission end to end against a form descriptor. Validation
    /// failure aborts before extraction; nothing is persisted.
    pub fn submit(
        &self,
        form: &FormDescriptor,
        answers: &[(String, String)],
    ) -> Result<SubmittedRecord> {
        validate_answers(form, answers)?;
        let record = SubmittedRecord::new(extract_values(form, answers));
        self.store.append(&record)?;
        Ok(record)
    }
}

/// Every required field must have a non-blank answer. Checkbox groups and
/// unknown kinds are exempt: neither renders a required input. The first
/// violation in field order is reported, carrying the field id to focus.
pub fn validate_answers(form: &FormDescriptor, answers: &[(String, String)]) -> Result<()> {
    for field in &form.fields {
        if !(field.required && field.kind.enforces_required()) {
            continue;
        }
        let answered = answers
            .iter()
            .any(|(key, value)| *key == field.id && !value.trim().is_empty());
        if !answered {
            return Err(Error::MissingRequired(field.id.clone()));
        }
    }
    Ok(())
}

/// Fold answer pairs into the record's value map. A repeated key
/// accumulates into an ordered sequence instead of overwriting; keys that
/// name no renderable field in the descriptor are dropped, since no input
/// exists for them.
pub fn extract_values(
    form: &FormDescriptor,
    answers: &[(String, String)],
) -> BTreeMap<String, FieldValue> {
    let mut values: BTreeMap<String, FieldValue> = BTreeMap::new();

    for (key, value) in answers {
        let known = form
            .field(key)
            .is_some_and(|f| f.kind != FieldKind::Unknown);
        if !known {
            continue;
        }

        match values.get_mut(key) {
            Some(existing) => existing.push(value.clone()),
            None => {
                values.insert(key.clone(), FieldValue::Single(value.clone()));
            }
        }
    }

    values
}
