//! A widget bound to a snapshot store.
//!
//! Every state-changing call persists the full snapshot before returning, so
//! storage always mirrors the in-memory widget.

use crate::domain::{Submission, Suggestion};
use crate::error::Result;
use crate::lookup::{BrandLookup, LookupRequest};
use crate::storage::{KeyValueStore, SnapshotStore};
use crate::widget::Autocomplete;

pub struct Session<S> {
    widget: Autocomplete,
    store: SnapshotStore<S>,
}

impl<S: KeyValueStore> Session<S> {
    /// Restore the widget from `store`, returning the lookup that refreshes
    /// restored text, if any.
    pub fn mount(store: SnapshotStore<S>) -> Result<(Self, Option<LookupRequest>)> {
        let snapshot = store.load()?;
        let (widget, request) = Autocomplete::mount(snapshot);
        Ok((Self { widget, store }, request))
    }

    pub fn widget(&self) -> &Autocomplete {
        &self.widget
    }

    pub fn store(&self) -> &SnapshotStore<S> {
        &self.store
    }

    pub fn input(&mut self, text: impl Into<String>) -> Result<Option<LookupRequest>> {
        let request = self.widget.input(text);
        self.persist()?;
        Ok(request)
    }

    pub fn apply_lookup(
        &mut self,
        request: &LookupRequest,
        result: std::result::Result<Vec<Suggestion>, crate::lookup::LookupError>,
    ) -> Result<bool> {
        let changed = self.widget.apply_lookup(request, result);
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Run `request` against `lookup` and apply the outcome
    pub async fn lookup<L>(&mut self, lookup: &L, request: &LookupRequest) -> Result<bool>
    where
        L: BrandLookup + ?Sized,
    {
        let result = lookup.search(&request.query).await;
        self.apply_lookup(request, result)
    }

    pub fn select(&mut self, index: usize) -> Result<Suggestion> {
        let selected = self.widget.select(index)?.clone();
        self.persist()?;
        Ok(selected)
    }

    pub fn submit(&mut self) -> Result<(Submission, Option<LookupRequest>)> {
        let outcome = self.widget.submit();
        self.persist()?;
        Ok(outcome)
    }

    /// Reset the widget and wipe its keys
    pub fn reset(&mut self) -> Result<()> {
        self.widget.reset();
        self.store.clear()
    }

    fn persist(&mut self) -> Result<()> {
        let snapshot = self.widget.snapshot();
        self.store.save(&snapshot)
    }
}
