use recipe_cost::{parse_input, solve, CostEvaluator, ParserConfig};

#[test]
fn test_no_recipes_base_target() {
    assert_eq!(solve("0\nwood\n").unwrap(), 0);
}

#[test]
fn test_two_base_ingredients() {
    assert_eq!(solve("1\ntable=wood+nail\ntable\n").unwrap(), 1);
}

#[test]
fn test_three_base_ingredients() {
    assert_eq!(solve("1\nchair=wood+nail+screw\nchair\n").unwrap(), 2);
}

#[test]
fn test_cheaper_alternative_wins() {
    assert_eq!(solve("2\ntable=wood+nail\ntable=plank\ntable\n").unwrap(), 0);
}

#[test]
fn test_nested_recipe() {
    // cost(b) = 0 + 0 + 1, cost(a) = 1 + 0 + 1
    assert_eq!(solve("2\na=b+c\nb=d+e\na\n").unwrap(), 2);
}

#[test]
fn test_target_without_recipe_is_base_item() {
    assert_eq!(solve("2\na=b+c\nb=d+e\nzzz\n").unwrap(), 0);
}

#[test]
fn test_blank_target_costs_nothing() {
    assert_eq!(solve("1\na=b+c\n\n").unwrap(), 0);
    assert_eq!(solve("0\n   \n").unwrap(), 0);
}

#[test]
fn test_recipes_may_be_listed_before_their_ingredients() {
    let input = "3\nsword=blade+hilt\nblade=ingot+ingot\ningot=ore+coal\nsword\n";

    // ingot 1, blade 1 + 1 + 1, sword 3 + 0 + 1
    assert_eq!(solve(input).unwrap(), 4);
}

#[test]
fn test_alternative_never_exceeds_any_single_recipe() {
    let input = "4\nlamp=bulb+base+shade\nlamp=kit\nkit=box+manual\nbulb=glass+wire\nlamp\n";
    let problem = parse_input(input, &ParserConfig::default()).unwrap();
    let mut evaluator = CostEvaluator::new(&problem.book);

    let lamp = evaluator.cost("lamp").unwrap();
    let bulb = evaluator.cost("bulb").unwrap();
    let kit = evaluator.cost("kit").unwrap();

    assert_eq!(bulb, 1);
    assert_eq!(kit, 1);
    assert!(lamp <= bulb + 2);
    assert!(lamp <= kit);
    assert_eq!(lamp, 1);
    assert_eq!(
        evaluator.best_recipe("lamp").unwrap().ingredients(),
        ["kit"]
    );
}

#[test]
fn test_repeated_evaluation_uses_memo() {
    let input = "3\nbread=dough+oven\ndough=flour+water+yeast\ncake=dough+sugar+egg\nbread\n";
    let problem = parse_input(input, &ParserConfig::default()).unwrap();
    let mut evaluator = CostEvaluator::new(&problem.book);

    let first = evaluator.cost(&problem.target).unwrap();
    let computed = evaluator.evaluations();
    let second = evaluator.cost(&problem.target).unwrap();

    assert_eq!(first, 3);
    assert_eq!(first, second);
    assert_eq!(computed, 2);
    assert_eq!(evaluator.evaluations(), computed);

    // only cake itself is new, dough comes from the memo
    assert_eq!(evaluator.cost("cake").unwrap(), 4);
    assert_eq!(evaluator.evaluations(), computed + 1);
}

#[test]
fn test_custom_separators() {
    let config = ParserConfig {
        definition_separator: " <- ".to_string(),
        ingredient_separator: ",".to_string(),
        trim_whitespace: true,
    };

    let cost = recipe_cost::solve_with_config("1\ntable <- wood, nail\ntable\n", &config).unwrap();
    assert_eq!(cost, 1);
}

#[test]
fn test_overlapping_separators_fail_before_parsing() {
    let config = ParserConfig {
        definition_separator: "=".to_string(),
        ingredient_separator: "=>".to_string(),
        trim_whitespace: true,
    };

    assert!(matches!(
        recipe_cost::solve_with_config("1\na=b=>c\na\n", &config),
        Err(recipe_cost::CostError::InvalidConfig(_))
    ));
}
