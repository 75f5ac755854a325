use chrono::NaiveDate;
use fostering_codec::{encode_update, read_case, FieldBag};
use fostering_completion::CompletionRules;
use fostering_protocol::{CaseScoped, FosteringCase, SectionStatus, SectionUpdate, Workflow};

use crate::store::{GET_FIELDS, SET_FIELDS};
use crate::{FieldStore, GatewayConfig, GatewayError, Result};

/// Reads fostering cases from a field store and writes section updates back.
pub struct CaseService<S> {
    store: S,
    config: GatewayConfig,
    rules: CompletionRules,
}

impl<S: FieldStore> CaseService<S> {
    pub fn new(store: S, config: GatewayConfig) -> Self {
        let rules = config.completion_rules();
        Self {
            store,
            config,
            rules,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn get_case(&self, case_reference: &str) -> Result<FosteringCase> {
        let record = self
            .store
            .get_fields(case_reference)
            .await
            .map_err(|err| fail(err, GET_FIELDS, case_reference))?;
        log::info!(
            "Read {} fields for case {}",
            record.fields.len(),
            case_reference
        );

        let bag = FieldBag::new(record.fields);
        Ok(read_case(case_reference, record.subject, &bag)?)
    }

    /// Applies `update` using today's local date for date-relative rules.
    pub async fn update_section(
        &self,
        workflow: Workflow,
        update: &SectionUpdate,
    ) -> Result<SectionStatus> {
        let today = chrono::Local::now().date_naive();
        self.update_section_on(workflow, update, today).await
    }

    /// Computes the section status, encodes the section plus its status field
    /// and flushes them with a single `SetFields` call on the workflow's form.
    pub async fn update_section_on(
        &self,
        workflow: Workflow,
        update: &SectionUpdate,
        today: NaiveDate,
    ) -> Result<SectionStatus> {
        let case_reference = update.case_reference();
        let status = self.rules.evaluate(update, workflow, today)?;
        let fields = encode_update(update, workflow, status)?.build();
        let form = self.config.form_for(workflow);

        log::info!(
            "Writing {} fields for case {} section {} via {}",
            fields.len(),
            case_reference,
            update.section(),
            form
        );
        self.store
            .set_fields(case_reference, form, fields)
            .await
            .map_err(|err| fail(err, SET_FIELDS, case_reference))?;

        Ok(status)
    }
}

fn fail(err: GatewayError, operation: &'static str, case_reference: &str) -> GatewayError {
    log::warn!("{operation} failed for case {case_reference}: {err}");
    err.in_operation(operation, case_reference)
}
