use crate::ast;
use crate::value::ValueMap;

/// Evaluates `@skip` and `@include` against the bound `variables`.
///
/// A literal boolean argument decides the outcome. So does a variable that
/// is bound to a boolean. Anything else (an unbound variable, a non-boolean
/// value) keeps the selection, so data that cannot yet be evaluated is never
/// dropped.
pub(crate) fn is_included(
    directives: &[ast::query::Directive],
    variables: &ValueMap,
) -> bool {
    if condition(directives, "skip", variables) == Some(true) {
        log::trace!("dropping selection: @skip evaluated to true");
        return false;
    }
    if condition(directives, "include", variables) == Some(false) {
        log::trace!("dropping selection: @include evaluated to false");
        return false;
    }
    true
}

fn condition(
    directives: &[ast::query::Directive],
    directive_name: &str,
    variables: &ValueMap,
) -> Option<bool> {
    let directive = directives.iter().find(|directive| directive.name == directive_name)?;
    let (_, value) = directive.arguments.iter().find(|(name, _)| name == "if")?;
    match value {
        ast::Value::Boolean(bool) => Some(*bool),
        ast::Value::Variable(var_name) => variables.get(var_name)?.as_bool(),
        _ => None,
    }
}
