//! Tests for list editing and property patches.
use canevas::catalog::templates_in;
use canevas::node::{
    DecisionData, EventData, EventType, FormulaData, NodeData, ScenarioData, TaskData, Value,
    Variable,
};
use canevas::panel::{
    FormulaPatch, NodePatch, ScenarioEdit, ScenarioPatch, TaskPatch, VariableEdit, add_scenario,
    add_variable, remove_scenario, remove_variable, update_scenario, update_variable,
};

#[test]
fn variable_lifecycle_from_empty() {
    let empty: Vec<Variable> = Vec::new();

    let one = add_variable(&empty);
    assert_eq!(one, vec![Variable::new("", 0.0)]);

    let named = update_variable(&one, 0, VariableEdit::Name("x".to_string()));
    assert_eq!(named, vec![Variable::new("x", 0.0)]);

    let valued = update_variable(&named, 0, VariableEdit::Value(Value::Number(12.5)));
    assert_eq!(valued, vec![Variable::new("x", 12.5)]);

    let gone = remove_variable(&valued, 0);
    assert!(gone.is_empty());
}

#[test]
fn list_operations_leave_their_input_alone() {
    let original = vec![Variable::new("a", 1.0), Variable::new("b", 2.0)];

    let added = add_variable(&original);
    assert_eq!(original.len(), 2);
    assert_eq!(added.len(), 3);

    let renamed = update_variable(&original, 0, VariableEdit::Name("z".to_string()));
    assert_eq!(original[0].name, "a");
    assert_eq!(renamed[0].name, "z");

    let removed = remove_variable(&original, 1);
    assert_eq!(original.len(), 2);
    assert_eq!(removed.len(), 1);
}

#[test]
fn out_of_range_edits_are_no_ops() {
    let original = vec![Variable::new("a", 1.0)];
    assert_eq!(
        update_variable(&original, 5, VariableEdit::Name("z".to_string())),
        original
    );
    assert_eq!(remove_variable(&original, 5), original);
}

#[test]
fn removing_shifts_later_entries_down() {
    let original = vec![
        Variable::new("a", 1.0),
        Variable::new("b", 2.0),
        Variable::new("c", 3.0),
    ];
    let removed = remove_variable(&original, 1);
    assert_eq!(removed.len(), 2);
    assert_eq!(removed[0].name, "a");
    assert_eq!(removed[1].name, "c");
}

#[test]
fn first_scenario_gets_the_default_shape() {
    let scenarios = add_scenario(&[]);
    assert_eq!(scenarios.len(), 1);

    let scenario = &scenarios[0];
    assert_eq!(scenario.name, "Scénario 1");
    assert_eq!(scenario.description, "Nouveau scénario");
    assert!(scenario.active);
    assert_eq!(scenario.variables, vec![Variable::new("", 0.0)]);

    let more = add_scenario(&scenarios);
    assert_eq!(more[1].name, "Scénario 2");
}

#[test]
fn scenario_field_edits() {
    let scenarios = add_scenario(&[]);

    let renamed = update_scenario(&scenarios, 0, ScenarioEdit::Name("Crise".to_string()));
    assert_eq!(renamed[0].name, "Crise");
    assert_eq!(scenarios[0].name, "Scénario 1");

    let deactivated = update_scenario(&renamed, 0, ScenarioEdit::Active(false));
    assert!(!deactivated[0].active);

    let vars = vec![Variable::new("tjm", 495.0)];
    let with_vars = update_scenario(&deactivated, 0, ScenarioEdit::Variables(vars.clone()));
    assert_eq!(with_vars[0].variables, vars);

    assert!(remove_scenario(&with_vars, 0).is_empty());
}

#[test]
fn task_patch_merges_only_populated_fields() {
    let mut data = TaskData {
        label: "Prospection".to_string(),
        duration: 60.0,
        cost: 200.0,
        description: "Premier contact".to_string(),
        ..TaskData::default()
    };

    TaskPatch {
        cost: Some(250.0),
        assigned_to: Some("Alice".to_string()),
        ..TaskPatch::default()
    }
    .apply_to(&mut data);

    assert_eq!(data.label, "Prospection");
    assert_eq!(data.duration, 60.0);
    assert_eq!(data.cost, 250.0);
    assert_eq!(data.assigned_to.as_deref(), Some("Alice"));
    assert_eq!(data.description, "Premier contact");
}

#[test]
fn scenario_patch_sets_thresholds() {
    let mut data = ScenarioData::default();
    assert_eq!(data.threshold_or_default(), 15.0);
    assert_eq!(data.reference_variable_or_default(), "tauxMarge");

    ScenarioPatch {
        threshold: Some(20.0),
        reference_variable: Some("margeNette".to_string()),
        ..ScenarioPatch::default()
    }
    .apply_to(&mut data);

    assert_eq!(data.threshold_or_default(), 20.0);
    assert_eq!(data.reference_variable_or_default(), "margeNette");
}

#[test]
fn template_patch_fills_an_empty_description() {
    let template = &templates_in("Rentabilité")[0];
    let mut data = FormulaData::default();

    FormulaPatch::from_template(template, &data.description).apply_to(&mut data);

    assert_eq!(data.formula, template.formula);
    assert_eq!(data.variables, template.variables);
    assert_eq!(data.description, template.description);
}

#[test]
fn template_patch_keeps_an_existing_description() {
    let template = &templates_in("Rentabilité")[0];
    let mut data = FormulaData {
        description: "Ma description".to_string(),
        ..FormulaData::default()
    };

    FormulaPatch::from_template(template, &data.description).apply_to(&mut data);

    assert_eq!(data.formula, template.formula);
    assert_eq!(data.description, "Ma description");
}

#[test]
fn edge_patch_merges_cosmetics() {
    let mut data = canevas::document::EdgeData::default();
    canevas::panel::EdgePatch {
        label: Some("Oui".to_string()),
        animated: Some(true),
        stroke: Some("#10b981".to_string()),
        ..Default::default()
    }
    .apply_to(&mut data);

    assert_eq!(data.label, "Oui");
    assert!(data.animated);
    assert_eq!(data.stroke.as_deref(), Some("#10b981"));
    assert_eq!(data.stroke_width, None);
}

#[test]
fn mismatched_node_patch_is_dropped() {
    let mut data = NodeData::Event(EventData {
        label: "Départ".to_string(),
        description: String::new(),
        event_type: EventType::Start,
    });

    NodePatch::Decision(canevas::panel::DecisionPatch {
        label: Some("Hijack".to_string()),
        ..Default::default()
    })
    .apply_to(&mut data);

    assert_eq!(data.label(), "Départ");
}

#[test]
fn matching_node_patch_applies() {
    let mut data = NodeData::Decision(DecisionData::default());
    NodePatch::Decision(canevas::panel::DecisionPatch {
        rotation: Some(90),
        ..Default::default()
    })
    .apply_to(&mut data);
    assert_eq!(data.rotation(), 90);
}
