//! Expense store
//!
//! Owns the authoritative in-memory list of expenses and mirrors the whole
//! list to a [`PersistenceAdapter`] after every change. The in-memory list
//! wins when the two disagree: a failed write is reported as a warning on
//! the returned [`Persisted`] value and the change is kept.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::adapter::PersistenceAdapter;
use crate::error::{ExpenseError, ExpenseResult};
use crate::filter::{self, FilterSpec};
use crate::models::{Expense, ExpenseId};
use crate::validation::{validate, ExpenseInput};

/// Key the expense list is stored under
pub const STORAGE_KEY: &str = "expenses";

/// Result of a mutation that was applied in memory
///
/// `warning` is set when the durable write that followed the change failed.
#[derive(Debug)]
pub struct Persisted<T> {
    pub value: T,
    pub warning: Option<ExpenseError>,
}

impl<T> Persisted<T> {
    fn clean(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    /// Whether the change also reached durable storage
    pub fn is_durable(&self) -> bool {
        self.warning.is_none()
    }

    /// Drop the warning and keep the value
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Treat a persistence warning as an error
    pub fn into_result(self) -> ExpenseResult<T> {
        match self.warning {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }
}

/// The authoritative collection of expenses
pub struct ExpenseStore<A: PersistenceAdapter> {
    adapter: A,
    /// Insertion order
    expenses: Vec<Expense>,
    version: u64,
}

impl<A: PersistenceAdapter> ExpenseStore<A> {
    /// Load the store from `adapter`
    ///
    /// Missing, unreadable or corrupt data is treated as an empty store.
    pub fn load(adapter: A) -> Self {
        let expenses = match adapter.get(STORAGE_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Expense>>(&bytes) {
                Ok(expenses) => dedup_ids(expenses),
                Err(e) => {
                    warn!(error = %e, "stored expenses are corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("no stored expenses yet");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "failed to read stored expenses, starting empty");
                Vec::new()
            }
        };

        debug!(count = expenses.len(), "loaded expenses");

        Self {
            adapter,
            expenses,
            version: 0,
        }
    }

    /// Validate `input` and append it as a new expense
    pub fn add(&mut self, input: &ExpenseInput) -> ExpenseResult<Persisted<Expense>> {
        let draft = validate(input)?;

        let mut expense = Expense::from_draft(draft);
        while self.position(expense.id).is_some() {
            expense.id = ExpenseId::new();
        }

        debug!(id = %expense.id, "adding expense");
        self.expenses.push(expense.clone());
        Ok(self.commit(expense))
    }

    /// Validate `input` and replace the editable fields of expense `id`
    pub fn update(
        &mut self,
        id: ExpenseId,
        input: &ExpenseInput,
    ) -> ExpenseResult<Persisted<Expense>> {
        let draft = validate(input)?;

        let index = self
            .position(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let expense = &mut self.expenses[index];
        expense.apply_draft(draft);
        let updated = expense.clone();

        debug!(id = %id, "updated expense");
        Ok(self.commit(updated))
    }

    /// Remove expense `id`, returning it if it was present
    ///
    /// Removing an absent id changes nothing and writes nothing.
    pub fn remove(&mut self, id: ExpenseId) -> Persisted<Option<Expense>> {
        match self.position(id) {
            Some(index) => {
                let removed = self.expenses.remove(index);
                debug!(id = %id, "removed expense");
                self.commit(Some(removed))
            }
            None => Persisted::clean(None),
        }
    }

    /// Write the full collection to the adapter
    pub fn save(&mut self) -> ExpenseResult<()> {
        let bytes = serde_json::to_vec_pretty(&self.expenses)
            .map_err(|e| ExpenseError::PersistenceFailure(e.to_string()))?;

        self.adapter
            .set(STORAGE_KEY, &bytes)
            .map_err(|e| ExpenseError::PersistenceFailure(e.to_string()))
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.position(id).map(|i| &self.expenses[i])
    }

    /// Find an expense by full id or by an unambiguous short id like `exp-1a2b`
    pub fn find(&self, identifier: &str) -> ExpenseResult<&Expense> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return self
                .get(id)
                .ok_or_else(|| ExpenseError::expense_not_found(identifier));
        }

        let lowered = identifier.trim().to_ascii_lowercase();
        let needle = lowered.strip_prefix("exp-").unwrap_or(lowered.as_str());
        if needle.is_empty() {
            return Err(ExpenseError::expense_not_found(identifier));
        }

        let mut matches = self
            .expenses
            .iter()
            .filter(|e| e.id.as_uuid().simple().to_string().starts_with(needle));

        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense),
            (Some(_), Some(_)) => Err(ExpenseError::Validation(format!(
                "Ambiguous expense id: '{}'",
                identifier
            ))),
            (None, _) => Err(ExpenseError::expense_not_found(identifier)),
        }
    }

    /// All expenses in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Filtered, newest-first view of the expenses
    pub fn view(&self, spec: &FilterSpec) -> Vec<Expense> {
        filter::apply(&self.expenses, spec)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Counter bumped on every applied change; usable as a cache key
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Give back the adapter, e.g. to reload from it
    pub fn into_adapter(self) -> A {
        self.adapter
    }

    fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    fn commit<T>(&mut self, value: T) -> Persisted<T> {
        self.version += 1;
        match self.save() {
            Ok(()) => Persisted::clean(value),
            Err(e) => {
                warn!(error = %e, "change kept in memory but not persisted");
                Persisted {
                    value,
                    warning: Some(e),
                }
            }
        }
    }
}

fn dedup_ids(expenses: Vec<Expense>) -> Vec<Expense> {
    let mut seen = HashSet::new();
    let before = expenses.len();
    let unique: Vec<_> = expenses.into_iter().filter(|e| seen.insert(e.id)).collect();
    if unique.len() != before {
        warn!(dropped = before - unique.len(), "dropped expenses with duplicate ids");
    }
    unique
}
