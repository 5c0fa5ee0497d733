use super::*;

fn flags(pairs: &[(&str, bool)]) -> Conditions {
    pairs.iter().map(|(name, value)| (*name, *value)).collect()
}

#[test]
fn always_is_true_for_any_flags() {
    let cond = Condition::parse("always").unwrap();
    assert_eq!(cond, Condition::Always);
    assert_eq!(cond.eval(&Conditions::new()), Ok(true));
    assert_eq!(cond.eval(&flags(&[(READ_ONLY, true)])), Ok(true));
}

#[test]
fn and_not_expression() {
    let cond = Condition::parse("canEdit && !readOnly").unwrap();
    assert_eq!(cond.eval(&flags(&[(CAN_EDIT, true)])), Ok(true));
    assert_eq!(cond.eval(&flags(&[(CAN_EDIT, false)])), Ok(false));
    assert_eq!(
        cond.eval(&flags(&[(CAN_EDIT, true), (READ_ONLY, true)])),
        Ok(false)
    );
}

#[test]
fn and_binds_tighter_than_or() {
    let cond = Condition::parse("canCreate || canEdit && readOnly").unwrap();
    assert_eq!(
        cond,
        Condition::Or(
            Box::new(Condition::Flag("canCreate".into())),
            Box::new(Condition::And(
                Box::new(Condition::Flag("canEdit".into())),
                Box::new(Condition::Flag("readOnly".into())),
            )),
        )
    );
}

#[test]
fn parentheses_override_precedence() {
    let cond = Condition::parse("(canCreate || canEdit) && readOnly").unwrap();
    assert_eq!(cond.eval(&flags(&[(CAN_CREATE, true)])), Ok(false));
    assert_eq!(
        cond.eval(&flags(&[(CAN_CREATE, true), (READ_ONLY, true)])),
        Ok(true)
    );
}

#[test]
fn double_negation() {
    let cond = Condition::parse("!!questionnairesEnabled").unwrap();
    assert_eq!(cond.eval(&flags(&[(QUESTIONNAIRES_ENABLED, true)])), Ok(true));
    assert_eq!(cond.eval(&Conditions::new()), Ok(false));
}

#[test]
fn literals() {
    assert_eq!(Condition::parse("true").unwrap(), Condition::Literal(true));
    let cond = Condition::parse("false || canEdit").unwrap();
    assert_eq!(cond.eval(&flags(&[(CAN_EDIT, true)])), Ok(true));
}

#[test]
fn unknown_flag_fails_evaluation() {
    let cond = Condition::parse("canDischarge").unwrap();
    assert_eq!(
        cond.eval(&Conditions::new()),
        Err(ConditionError::UnknownCondition("canDischarge".into()))
    );
}

#[test]
fn short_circuit_skips_unknown_flag() {
    let cond = Condition::parse("readOnly && canDischarge").unwrap();
    assert_eq!(cond.eval(&Conditions::new()), Ok(false));

    let cond = Condition::parse("!readOnly || canDischarge").unwrap();
    assert_eq!(cond.eval(&Conditions::new()), Ok(true));
}

#[test]
fn caller_defined_flags() {
    let cond = Condition::parse("hasBeds && !readOnly").unwrap();
    let conditions = Conditions::new().with("hasBeds", true);
    assert_eq!(cond.eval(&conditions), Ok(true));
}

#[test]
fn empty_expression_is_rejected() {
    assert_eq!(Condition::parse(""), Err(ConditionError::UnexpectedEnd));
    assert_eq!(Condition::parse("   "), Err(ConditionError::UnexpectedEnd));
}

#[test]
fn dangling_operator_is_rejected() {
    assert_eq!(
        Condition::parse("canEdit &&"),
        Err(ConditionError::UnexpectedEnd)
    );
    assert_eq!(Condition::parse("!"), Err(ConditionError::UnexpectedEnd));
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert_eq!(
        Condition::parse("(canEdit"),
        Err(ConditionError::UnexpectedEnd)
    );
    assert_eq!(
        Condition::parse("canEdit)"),
        Err(ConditionError::UnexpectedToken {
            token: ")".into(),
            offset: 7,
        })
    );
}

#[test]
fn adjacent_names_are_rejected() {
    assert_eq!(
        Condition::parse("canEdit readOnly"),
        Err(ConditionError::UnexpectedToken {
            token: "readOnly".into(),
            offset: 8,
        })
    );
}

#[test]
fn deep_nesting_is_an_error() {
    let bangs = format!("{}canEdit", "!".repeat(100_000));
    assert_eq!(
        Condition::parse(&bangs),
        Err(ConditionError::TooDeep(parser::MAX_DEPTH))
    );

    let parens = format!("{}canEdit{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_eq!(
        Condition::parse(&parens),
        Err(ConditionError::TooDeep(parser::MAX_DEPTH))
    );
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let input = format!("{}canEdit", "!".repeat(parser::MAX_DEPTH));
    let cond = Condition::parse(&input).unwrap();
    assert_eq!(cond.eval(&Conditions::new()), Ok(false));

    let input = format!(
        "{}canEdit{}",
        "(".repeat(parser::MAX_DEPTH),
        ")".repeat(parser::MAX_DEPTH)
    );
    assert_eq!(
        Condition::parse(&input),
        Ok(Condition::Flag("canEdit".into()))
    );
}

#[test]
fn display_reparses_to_same_tree() {
    for input in [
        "always",
        "canEdit && !readOnly",
        "(canCreate || canEdit) && readOnly",
        "!(canEdit && readOnly)",
        "true || questionnairesEnabled",
    ] {
        let cond = Condition::parse(input).unwrap();
        let reparsed: Condition = cond.to_string().parse().unwrap();
        assert_eq!(cond, reparsed, "{input}");
    }
}

#[test]
fn default_conditions_have_well_known_flags() {
    let conditions = Conditions::default();
    for name in [CAN_EDIT, CAN_CREATE, READ_ONLY, QUESTIONNAIRES_ENABLED] {
        assert_eq!(conditions.get(name), Some(false), "{name}");
    }
    assert_eq!(conditions.get("hasBeds"), None);
}

#[test]
fn deserialized_conditions_keep_well_known_flags() {
    let conditions: Conditions = serde_json::from_str(r#"{"canEdit": true}"#).unwrap();
    assert_eq!(conditions.get(CAN_EDIT), Some(true));
    assert_eq!(conditions.get(READ_ONLY), Some(false));

    let cond = Condition::parse("canEdit && !readOnly").unwrap();
    assert_eq!(cond.eval(&conditions), Ok(true));
}
