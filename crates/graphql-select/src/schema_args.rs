use anyhow::Context;
use libgraphql_selections::schema::Schema;
use libgraphql_selections::schema::SchemaBuilder;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Where to find the SDL that selections are checked against.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        long="schema",
        num_args=1..,
        required=true,
        value_name="FILE_OR_DIR",
    )]
    schema_paths: Vec<PathBuf>,
}
impl SchemaArgs {
    /// Find and load every schema file into a single [`Schema`].
    pub(crate) fn load_schema(&self) -> anyhow::Result<Schema> {
        let file_paths = self.find_schema_files()?;
        log::debug!("Loading {} GraphQL schema files...", file_paths.len());

        let schema =
            SchemaBuilder::new()
                .load_files(file_paths)
                .context("failed to load schema files")?
                .build()
                .context("failed to build schema")?;
        log::debug!("Built schema with {} types.", schema.all_types().len());
        Ok(schema)
    }

    fn find_schema_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let graphql_file_exts = normalized_exts(&self.graphql_file_exts);

        log::debug!("Scanning {} input paths...", self.schema_paths.len());
        let mut file_paths = vec![];
        for path in &self.schema_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry.with_context(|| {
                    format!("failed to scan {}", path.display())
                })?;
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }

                log::trace!("Found file at {path:#?}.");
                if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                    && graphql_file_exts.contains(&*ext) {
                    file_paths.push(canonicalize(path)?);
                }
            }
        }

        // A single explicitly named file is loaded whatever its extension.
        if file_paths.is_empty()
            && self.schema_paths.len() == 1
            && let Some(first_arg_path) = self.schema_paths.first()
            && first_arg_path.is_file() {
            let first_arg_path = canonicalize(first_arg_path)?;
            log::warn!(
                "Proceeding to load {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path);
        }

        if file_paths.is_empty() {
            anyhow::bail!("no GraphQL schema files found");
        }
        Ok(file_paths)
    }
}

fn canonicalize(path: &std::path::Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("failed to resolve {}", path.display()))
}

/// Extensions as compared against [`std::path::Path::extension`]: without a
/// leading dot.
fn normalized_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalized_exts;

    #[test]
    fn leading_dots_are_ignored() {
        let exts = normalized_exts(&[".graphql".to_string(), "gql".to_string()]);
        assert!(exts.contains("graphql"));
        assert!(exts.contains("gql"));
        assert_eq!(exts.len(), 2);
    }
}
