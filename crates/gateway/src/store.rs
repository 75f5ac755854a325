//! Field store boundary: the CRM's `GetFields` / `SetFields` pair.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fostering_protocol::{CaseSubject, Field};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};

use crate::{GatewayError, Result};

pub(crate) const GET_FIELDS: &str = "GetFields";
pub(crate) const SET_FIELDS: &str = "SetFields";

/// Everything the store returns for one case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    #[serde(default)]
    pub subject: CaseSubject,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// One `SetFields` call as the store saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWrite {
    pub case_reference: String,
    pub form: String,
    pub fields: Vec<Field>,
}

/// Flat custom-field storage for CRM cases.
///
/// No optimistic concurrency: overlapping writes to one case race and the
/// last one wins per field name.
#[async_trait]
pub trait FieldStore: Send + Sync {
    async fn get_fields(&self, case_reference: &str) -> Result<CaseRecord>;

    /// Writes `fields` through the integration `form`. All-or-nothing.
    async fn set_fields(&self, case_reference: &str, form: &str, fields: Vec<Field>)
        -> Result<()>;
}

/// Applies `incoming` over `existing`, replacing same-named fields in place
/// and appending new names in arrival order.
pub fn merge_fields(existing: &mut Vec<Field>, incoming: Vec<Field>) {
    let mut positions: HashMap<String, usize> = existing
        .iter()
        .enumerate()
        .map(|(idx, field)| (field.name.clone(), idx))
        .collect();

    for field in incoming {
        match positions.get(&field.name) {
            Some(&idx) => existing[idx].value = field.value,
            None => {
                positions.insert(field.name.clone(), existing.len());
                existing.push(field);
            }
        }
    }
}

/// Store held in memory. Keeps a journal of every write for inspection.
#[derive(Debug, Default)]
pub struct InMemoryFieldStore {
    cases: RwLock<HashMap<String, CaseRecord>>,
    writes: RwLock<Vec<FieldWrite>>,
}

impl InMemoryFieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, case_reference: impl Into<String>, record: CaseRecord) {
        self.cases.write().await.insert(case_reference.into(), record);
    }

    pub async fn writes(&self) -> Vec<FieldWrite> {
        self.writes.read().await.clone()
    }
}

#[async_trait]
impl FieldStore for InMemoryFieldStore {
    async fn get_fields(&self, case_reference: &str) -> Result<CaseRecord> {
        self.cases
            .read()
            .await
            .get(case_reference)
            .cloned()
            .ok_or_else(|| GatewayError::case_not_found(GET_FIELDS, case_reference))
    }

    async fn set_fields(
        &self,
        case_reference: &str,
        form: &str,
        fields: Vec<Field>,
    ) -> Result<()> {
        let mut cases = self.cases.write().await;
        let record = cases
            .get_mut(case_reference)
            .ok_or_else(|| GatewayError::case_not_found(SET_FIELDS, case_reference))?;

        self.writes.write().await.push(FieldWrite {
            case_reference: case_reference.to_string(),
            form: form.to_string(),
            fields: fields.clone(),
        });
        merge_fields(&mut record.fields, fields);
        Ok(())
    }
}

/// Store backed by one JSON document mapping case reference to record.
#[derive(Debug)]
pub struct JsonFileFieldStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileFieldStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<BTreeMap<String, CaseRecord>> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(BTreeMap::new());
        }
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write_document(&self, document: &BTreeMap<String, CaseRecord>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let bytes = serde_json::to_vec_pretty(document)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl FieldStore for JsonFileFieldStore {
    async fn get_fields(&self, case_reference: &str) -> Result<CaseRecord> {
        let mut document = self.read_document().await?;
        document
            .remove(case_reference)
            .ok_or_else(|| GatewayError::case_not_found(GET_FIELDS, case_reference))
    }

    async fn set_fields(
        &self,
        case_reference: &str,
        form: &str,
        fields: Vec<Field>,
    ) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        let record = document
            .get_mut(case_reference)
            .ok_or_else(|| GatewayError::case_not_found(SET_FIELDS, case_reference))?;

        let count = fields.len();
        merge_fields(&mut record.fields, fields);
        self.write_document(&document).await?;
        log::debug!(
            "Wrote {count} fields for case {case_reference} via {form} to {}",
            self.path.display()
        );
        Ok(())
    }
}
