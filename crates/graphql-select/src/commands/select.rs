use crate::output_utils;
use crate::schema_args::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_selections::selection::SelectionTree;
use libgraphql_selections::selection::SelectionView;
use libgraphql_selections::Value;
use libgraphql_selections::ValueMap;
use std::fmt::Write;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct SelectCmd {
    #[command(flatten)]
    schema: SchemaArgs,

    #[arg(
        help="Traverse into the sub-selections of a field, given as \
             `Type.field`. Applied in order, after every --project.",
        long="field",
        value_name="TYPE.FIELD",
        value_parser=parse_field_coordinate,
    )]
    fields: Vec<(String, String)>,

    #[arg(
        help="Narrow or widen the view to a type. Applied in order.",
        long="project",
        value_name="TYPE",
    )]
    projections: Vec<String>,

    #[arg(
        help="The selections to bind: either a bare selection set body or a \
             document of fragment definitions.",
        long,
    )]
    selections: String,

    #[arg(
        help="The type the selections apply to.",
        long="type",
        value_name="TYPE",
    )]
    type_name: String,

    #[arg(
        help="Bind a variable to a JSON value, given as `name=<json>`.",
        long="var",
        value_name="NAME=JSON",
        value_parser=parse_variable,
    )]
    variables: Vec<(String, Value)>,
}
impl SelectCmd {
    fn select(self) -> anyhow::Result<String> {
        let schema = Arc::new(self.schema.load_schema()?);
        let tree = SelectionTree::parse(&schema, &self.type_name, &self.selections)
            .context("invalid selections")?;
        let variables: ValueMap = self.variables.into_iter().collect();

        let mut view = SelectionView::bind(schema, &tree, variables)
            .context("failed to bind selections")?;
        for type_name in &self.projections {
            view = view.selection_set_for_type(type_name)
                .with_context(|| format!("failed to project to `{type_name}`"))?;
        }
        for (type_name, field_name) in &self.fields {
            view = view.selection_set_for_field(type_name, field_name)
                .with_context(|| format!("failed to traverse `{type_name}.{field_name}`"))?;
        }

        Ok(describe(&view))
    }
}

#[inherent::inherent]
impl RunnableCommand for SelectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.select().into()
    }
}

fn describe(view: &SelectionView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} Selections on `{}`:",
        output_utils::GREEN_CHECK,
        view.type_name(),
    );
    let _ = writeln!(out, "{}", output_utils::indent(&view.print_as_field_set()));

    let _ = writeln!(out, "Type fields:");
    for (field_name, selected) in view.type_fields() {
        let selections =
            selected.iter()
                .map(|sel| format!("{} (on {})", sel.selection_name(), sel.type_condition()))
                .collect::<Vec<_>>()
                .join(", ");
        let _ = writeln!(out, "  {field_name}: {selections}");
    }

    let _ = writeln!(out, "Empty: {}", view.is_empty());
    let _ = write!(out, "Transitively empty: {}", view.is_transitively_empty());
    out
}

fn parse_field_coordinate(text: &str) -> Result<(String, String), String> {
    match text.split_once('.') {
        Some((type_name, field_name)) if !type_name.is_empty() && !field_name.is_empty() => {
            Ok((type_name.to_string(), field_name.to_string()))
        },
        _ => Err(format!("expected `Type.field`, found `{text}`")),
    }
}

fn parse_variable(text: &str) -> Result<(String, Value), String> {
    let Some((name, json)) = text.split_once('=') else {
        return Err(format!("expected `name=<json>`, found `{text}`"));
    };
    let value = serde_json::from_str(json)
        .map_err(|err| format!("invalid JSON for variable `{name}`: {err}"))?;
    Ok((name.trim().to_string(), value))
}
