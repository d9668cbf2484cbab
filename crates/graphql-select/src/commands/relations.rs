use crate::output_utils;
use crate::schema_args::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_selections::relations::TypeRelations;
use std::fmt::Write;

#[derive(Debug, clap::Args)]
pub(crate) struct RelationsCmd {
    #[command(flatten)]
    schema: SchemaArgs,

    #[arg(help="The type on the left of the relation.", name="A")]
    left: String,

    #[arg(help="The type on the right of the relation.", name="B")]
    right: String,
}
impl RelationsCmd {
    fn relations(self) -> anyhow::Result<String> {
        let schema = self.schema.load_schema()?;
        let relations = schema.type_relations();
        let (left, right) = (self.left.as_str(), self.right.as_str());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} `{left}` is {:?} `{right}`",
            output_utils::GREEN_CHECK,
            relations.relation_unwrapped(left, right)?,
        );
        let _ = writeln!(
            out,
            "`{right}` spreadable in `{left}`: {}",
            relations.is_spreadable(left, right)?,
        );
        let _ = writeln!(out, "{}", possible_object_types(relations, left)?);
        let _ = write!(out, "{}", possible_object_types(relations, right)?);
        Ok(out)
    }
}

#[inherent::inherent]
impl RunnableCommand for RelationsCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.relations().into()
    }
}

fn possible_object_types(relations: &TypeRelations, type_name: &str) -> anyhow::Result<String> {
    let types = relations.possible_object_types(type_name)?;
    Ok(format!(
        "Possible object types of `{type_name}`: {}",
        types.iter().map(String::as_str).collect::<Vec<_>>().join(", "),
    ))
}
