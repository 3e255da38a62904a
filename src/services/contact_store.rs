//! Contact store service.
//!
//! Owns the list of records (the source of truth) and the current search query.
//! Everything a UI shell renders is derived from it through [`ContactStore::view`].

use crate::codec::{decode_bytes, encode};
use crate::domain::{format_birth_date, is_valid_email, is_valid_name, parse_phone_list};
use crate::edit::{apply_edit, rejection_message, validate_edit, EditMode, EditOutcome};
use crate::error::{ContactError, ContactResult};
use crate::models::{ContactField, ContactRecord};
use crate::report::ImportReport;
use crate::repositories::ContactRepository;
use crate::search::TableView;
use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

/// Raw input of the "add contact" form.
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub address: String,
    pub birth_date: NaiveDate,
    pub email: String,

    /// Comma-separated phone numbers as typed
    pub phones: String,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// In-memory contact list with validation-gated mutations.
#[derive(Debug)]
pub struct ContactStore {
    records: Vec<ContactRecord>,
    query: String,
    clock: fn() -> NaiveDate,
    report_limit: Option<usize>,
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore {
    /// Create an empty store using the local calendar date as "today".
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            query: String::new(),
            clock: local_today,
            report_limit: None,
        }
    }

    /// Use `clock` to decide which birth dates lie in the future.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// Cap the number of messages rendered in import reports.
    pub fn with_report_limit(mut self, limit: usize) -> Self {
        self.report_limit = Some(limit);
        self
    }

    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    pub fn get(&self, row: usize) -> Option<&ContactRecord> {
        self.records.get(row)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// Validate form input and append it as a new record.
    ///
    /// The phone field is checked first, then the three names, the email and the
    /// birth date. Returns the row of the new record.
    ///
    /// # Errors
    ///
    /// `InvalidPhoneSet`, `InvalidName`, `InvalidEmail` or `InvalidDate` for the
    /// first field that fails; the store is left unchanged.
    pub fn add(&mut self, input: NewContact) -> ContactResult<usize> {
        let phone_numbers = parse_phone_list(&input.phones);
        if phone_numbers.is_empty() {
            return Err(ContactError::InvalidPhoneSet(input.phones.trim().to_string()));
        }

        let first_name = input.first_name.trim();
        let last_name = input.last_name.trim();
        let middle_name = input.middle_name.trim();
        if let Some(bad) = [first_name, last_name, middle_name]
            .into_iter()
            .find(|name| !is_valid_name(name))
        {
            return Err(ContactError::InvalidName(bad.to_string()));
        }

        let email = input.email.trim();
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        if input.birth_date > self.today() {
            return Err(ContactError::InvalidDate(format_birth_date(Some(
                input.birth_date,
            ))));
        }

        self.records.push(ContactRecord {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            middle_name: middle_name.to_string(),
            address: input.address.trim().to_string(),
            birth_date: Some(input.birth_date),
            email: email.to_string(),
            phone_numbers,
        });

        let row = self.records.len() - 1;
        info!(row, "Contact added");
        Ok(row)
    }

    /// Remove the record at `row`. Out-of-range rows are ignored.
    pub fn remove(&mut self, row: usize) -> Option<ContactRecord> {
        if row < self.records.len() {
            info!(row, "Contact removed");
            Some(self.records.remove(row))
        } else {
            None
        }
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Apply an edit of one table cell.
    ///
    /// On rejection the record keeps its last committed value. In
    /// [`EditMode::Interactive`] the rejection is returned as the error; in
    /// [`EditMode::BulkImport`] it is appended to the report and the
    /// [`EditOutcome::Rejected`] outcome is returned.
    ///
    /// # Errors
    ///
    /// `NoSuchRow` if `row` is out of range, or the field error in interactive mode.
    pub fn edit_cell(
        &mut self,
        row: usize,
        field: ContactField,
        text: &str,
        mode: EditMode<'_>,
    ) -> ContactResult<EditOutcome> {
        let today = self.today();
        let record = self
            .records
            .get_mut(row)
            .ok_or(ContactError::NoSuchRow { row })?;

        match apply_edit(record, field, text, today) {
            EditOutcome::Rejected {
                field,
                reverted,
                error,
            } => match mode {
                EditMode::Interactive => {
                    warn!(row, %field, %error, "Edit rejected");
                    Err(error)
                }
                EditMode::BulkImport(report) => {
                    report.push(rejection_message(row, field, &error));
                    Ok(EditOutcome::Rejected {
                        field,
                        reverted,
                        error,
                    })
                }
            },
            committed => {
                debug!(row, %field, "Edit committed");
                Ok(committed)
            }
        }
    }

    /// Sort records ascending by one column. The sort is stable; birth dates sort
    /// chronologically with invalid dates first, other columns by display text.
    pub fn sort_by(&mut self, field: ContactField) {
        match field {
            ContactField::BirthDate => self.records.sort_by_key(|record| record.birth_date),
            _ => self
                .records
                .sort_by_cached_key(|record| record.display_text(field)),
        }
    }

    /// Set the search query. An empty query clears the filter.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn search(&self) -> &str {
        &self.query
    }

    /// Derived table view for the current query.
    pub fn view(&self) -> TableView {
        TableView::build(&self.records, &self.query)
    }

    /// Replace the contents of the store with the records stored in `repo`.
    ///
    /// Every record the decoder admits is kept, even with invalid fields; each
    /// such field is listed in the report so it can be corrected afterwards.
    /// Short lines are skipped and listed as well, as are lines that are not
    /// valid UTF-8 (those are still admitted, with replacement characters).
    ///
    /// # Errors
    ///
    /// `FileOpenFailure` if the storage cannot be read; the store is untouched.
    pub fn import_from(&mut self, repo: &dyn ContactRepository) -> ContactResult<ImportReport> {
        let bytes = repo.read_all()?;
        let outcome = decode_bytes(&bytes);

        let mut report = match self.report_limit {
            Some(limit) => ImportReport::new().with_limit(limit),
            None => ImportReport::new(),
        };
        report.damaged_lines = outcome.errors.len();
        for error in &outcome.errors {
            report.push(error.to_string());
        }

        self.records = outcome.records;
        report.added = self.records.len();
        for row in 0..self.records.len() {
            self.audit(row, &mut report);
        }

        info!(
            location = %repo.location(),
            added = report.added,
            problems = report.messages.len(),
            "Import finished"
        );
        Ok(report)
    }

    /// Check every field of the record at `row`, listing failures in `report`.
    fn audit(&self, row: usize, report: &mut ImportReport) {
        let Some(record) = self.records.get(row) else {
            return;
        };
        let today = self.today();
        for field in ContactField::ALL {
            if let Err(error) = validate_edit(field, &record.display_text(field), today) {
                report.push(rejection_message(row, field, &error));
            }
        }
    }

    /// Write the rows visible under the current search to `repo`.
    /// Returns the number of records written.
    pub fn export_to(&self, repo: &dyn ContactRepository) -> ContactResult<usize> {
        let view = self.view();
        let rows = view.visible_indices();
        repo.write_all(&encode(rows.iter().map(|&row| &self.records[row])))?;
        info!(location = %repo.location(), written = rows.len(), "Export finished");
        Ok(rows.len())
    }

    /// Write every record to `repo`, ignoring the search filter.
    pub fn export_all(&self, repo: &dyn ContactRepository) -> ContactResult<usize> {
        repo.write_all(&encode(&self.records))?;
        info!(location = %repo.location(), written = self.records.len(), "Export finished");
        Ok(self.records.len())
    }
}
