//! Load scenarios from JSON

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use super::Scenario;
use crate::error::{PlannerError, PlannerResult};

/// Either a single scenario object or an array of them
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ScenarioFile {
    Many(Vec<Scenario>),
    One(Box<Scenario>),
}

/// Load and validate all scenarios from a JSON file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> PlannerResult<Vec<Scenario>> {
    let path = path.as_ref();
    debug!("Loading scenarios from {}", path.display());
    let file = File::open(path)?;
    load_scenarios_from_reader(BufReader::new(file))
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> PlannerResult<Vec<Scenario>> {
    let file: ScenarioFile = serde_json::from_reader(reader)?;
    let scenarios = match file {
        ScenarioFile::Many(list) => list,
        ScenarioFile::One(one) => vec![*one],
    };

    let mut seen = HashSet::new();
    for scenario in &scenarios {
        if !seen.insert(scenario.id) {
            return Err(PlannerError::DuplicateScenario(scenario.id));
        }
        scenario.validate()?;
    }

    debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::GoalType;

    #[test]
    fn test_load_array() {
        let json = r#"[
            {"id": 1, "name": "A", "goalType": "retirement", "years": 25, "monthlyInvestment": 10000},
            {"id": 2, "name": "B", "goalType": "portfolio-analysis", "years": 20, "currentAge": 35,
             "assets": [{"assetClass": "gold", "label": "Gold", "currentValue": 100000,
                         "annualGrowthRatePct": 8, "liquidityScore": 7, "riskScore": 4}]}
        ]"#;
        let scenarios = load_scenarios_from_reader(json.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[1].goal_type, GoalType::PortfolioAnalysis);
        assert_eq!(scenarios[1].assets.len(), 1);
    }

    #[test]
    fn test_load_single_object() {
        let json = r#"{"id": 4, "name": "Solo", "goalType": "custom", "years": 3}"#;
        let scenarios = load_scenarios_from_reader(json.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].id, 4);
    }

    #[test]
    fn test_unknown_risk_profile_rejected() {
        let json = r#"{"id": 4, "name": "Solo", "goalType": "custom", "years": 3, "riskProfile": "yolo"}"#;
        assert!(matches!(
            load_scenarios_from_reader(json.as_bytes()),
            Err(PlannerError::Json(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "goalType": "custom", "years": 3},
            {"id": 1, "name": "B", "goalType": "custom", "years": 4}
        ]"#;
        assert!(matches!(
            load_scenarios_from_reader(json.as_bytes()),
            Err(PlannerError::DuplicateScenario(1))
        ));
    }

    #[test]
    fn test_invalid_scenario_rejected() {
        let json = r#"{"id": 9, "name": "Bad", "goalType": "custom", "years": 0}"#;
        assert!(matches!(
            load_scenarios_from_reader(json.as_bytes()),
            Err(PlannerError::InvalidScenario { id: 9, .. })
        ));
    }
}
