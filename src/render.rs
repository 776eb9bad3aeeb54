use crate::rules::RuleList;

const SEPARATOR: &str = ", ";

/// Renders the rules as `[rule-a, rule-b]`. Items are not escaped, single
/// quotes are dropped from every item.
pub fn render(rules: &RuleList) -> String {
    let items: Vec<String> = rules.iter().map(|rule| rule.replace('\'', "")).collect();

    return format!("[{}]", items.join(SEPARATOR));
}
