//! Demo scenario registry.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::error;

use super::builtins;
use super::types::{DemoScenario, DemoSummary};

/// Thread-safe scenario store, seeded with the built-in catalogue.
pub struct DemoRegistry {
    scenarios: RwLock<HashMap<String, DemoScenario>>,
}

impl DemoRegistry {
    pub fn new() -> Self {
        let registry = Self::empty();
        for scenario in builtins::all() {
            let id = scenario.id.clone();
            if let Err(e) = registry.register(scenario) {
                error!(scenario = %id, error = %e, "Failed to register builtin demo scenario");
            }
        }
        registry
    }

    /// Registry without the built-ins.
    pub fn empty() -> Self {
        Self {
            scenarios: RwLock::new(HashMap::new()),
        }
    }

    /// Register a scenario.
    ///
    /// # Errors
    /// Returns an error for a blank id, category or text, a risk above 100,
    /// or an id that is already taken.
    pub fn register(&self, scenario: DemoScenario) -> Result<(), String> {
        if scenario.id.trim().is_empty() {
            return Err("Scenario ID is required".to_string());
        }
        if scenario.category.trim().is_empty() {
            return Err("Scenario category is required".to_string());
        }
        if scenario.text.trim().is_empty() {
            return Err("Scenario text is required".to_string());
        }
        if scenario.expected_risk > 100 {
            return Err(format!(
                "Expected risk must be 0-100, got {}",
                scenario.expected_risk
            ));
        }

        let mut scenarios = self.scenarios.write().unwrap_or_else(PoisonError::into_inner);
        if scenarios.contains_key(&scenario.id) {
            return Err(format!("Scenario '{}' already exists", scenario.id));
        }
        scenarios.insert(scenario.id.clone(), scenario);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<DemoScenario> {
        self.scenarios
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Summaries sorted by id.
    pub fn list(&self) -> Vec<DemoSummary> {
        let scenarios = self.scenarios.read().unwrap_or_else(PoisonError::into_inner);
        let mut list: Vec<_> = scenarios.values().map(DemoScenario::to_summary).collect();
        list.sort_by(|a, b| a.id.cmp(&b.id));
        list
    }

    pub fn count(&self) -> usize {
        self.scenarios.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Default for DemoRegistry {
    fn default() -> Self {
        Self::new()
    }
}
