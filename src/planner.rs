//! In-memory scenario list
//!
//! Scenarios are held behind `Arc` and never mutated in place: an edit clones
//! the current value, validates and projects the copy, then swaps it in. A
//! reader holding the previous `Arc` keeps a complete, consistent scenario.

use std::sync::Arc;

use log::info;

use crate::comparison::{Comparison, ScenarioRunner};
use crate::error::{PlannerError, PlannerResult};
use crate::projection::ProjectionResult;
use crate::scenario::Scenario;

#[derive(Debug, Clone)]
struct Entry {
    scenario: Arc<Scenario>,
    /// Most recent projection of `scenario`
    result: Arc<ProjectionResult>,
}

/// Ordered list of scenarios with their latest results
#[derive(Debug, Clone, Default)]
pub struct ScenarioBook {
    runner: ScenarioRunner,
    entries: Vec<Entry>,
}

impl ScenarioBook {
    pub fn new(runner: ScenarioRunner) -> Self {
        Self {
            runner,
            entries: Vec::new(),
        }
    }

    /// Build a book from scenarios, validating and projecting each
    pub fn from_scenarios(runner: ScenarioRunner, scenarios: Vec<Scenario>) -> PlannerResult<Self> {
        let mut book = Self::new(runner);
        for scenario in scenarios {
            book.add(scenario)?;
        }
        Ok(book)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: u32) -> PlannerResult<usize> {
        self.entries
            .iter()
            .position(|e| e.scenario.id == id)
            .ok_or(PlannerError::UnknownScenario(id))
    }

    fn evaluate(&self, scenario: Scenario) -> PlannerResult<Entry> {
        scenario.validate()?;
        let result = self.runner.run(&scenario);
        Ok(Entry {
            scenario: Arc::new(scenario),
            result: Arc::new(result),
        })
    }

    /// Append a new scenario
    pub fn add(&mut self, scenario: Scenario) -> PlannerResult<Arc<ProjectionResult>> {
        if self.entries.iter().any(|e| e.scenario.id == scenario.id) {
            return Err(PlannerError::DuplicateScenario(scenario.id));
        }
        let entry = self.evaluate(scenario)?;
        info!("Added scenario {} ({})", entry.scenario.id, entry.scenario.name);
        let result = Arc::clone(&entry.result);
        self.entries.push(entry);
        Ok(result)
    }

    /// Edit a copy of a scenario and replace the original if it stays valid.
    /// On error the book is unchanged.
    pub fn update<F>(&mut self, id: u32, edit: F) -> PlannerResult<Arc<ProjectionResult>>
    where
        F: FnOnce(&mut Scenario),
    {
        let idx = self.position(id)?;
        let mut draft = Scenario::clone(&self.entries[idx].scenario);
        edit(&mut draft);
        if draft.id != id {
            return Err(PlannerError::invalid(id, "scenario id cannot be changed by an edit"));
        }

        let entry = self.evaluate(draft)?;
        let result = Arc::clone(&entry.result);
        self.entries[idx] = entry;
        Ok(result)
    }

    /// Remove a scenario and return its last value
    pub fn remove(&mut self, id: u32) -> PlannerResult<Arc<Scenario>> {
        let idx = self.position(id)?;
        let entry = self.entries.remove(idx);
        info!("Removed scenario {}", id);
        Ok(entry.scenario)
    }

    pub fn get(&self, id: u32) -> Option<Arc<Scenario>> {
        self.entries
            .iter()
            .find(|e| e.scenario.id == id)
            .map(|e| Arc::clone(&e.scenario))
    }

    /// Latest projection of a scenario
    pub fn result(&self, id: u32) -> Option<Arc<ProjectionResult>> {
        self.entries
            .iter()
            .find(|e| e.scenario.id == id)
            .map(|e| Arc::clone(&e.result))
    }

    /// Scenarios in insertion order
    pub fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.entries.iter().map(|e| e.scenario.as_ref())
    }

    /// Compare the given scenarios, in the order the ids are listed
    pub fn compare(&self, ids: &[u32]) -> PlannerResult<Comparison> {
        let selected = ids
            .iter()
            .map(|&id| self.position(id).map(|idx| Scenario::clone(&self.entries[idx].scenario)))
            .collect::<PlannerResult<Vec<_>>>()?;
        Ok(self.runner.compare(&selected))
    }

    /// Compare every scenario in the book
    pub fn compare_all(&self) -> Comparison {
        let all: Vec<Scenario> = self.scenarios().cloned().collect();
        self.runner.compare(&all)
    }
}
