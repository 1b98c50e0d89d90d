use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use c2o_core::collection::{self, Collection};
use c2o_core::config::{self, C2oConfig, CONFIG_FILE_NAME, OutputFormat as ConfigFormat};
use c2o_core::convert;
use c2o_core::openapi::Document;

#[derive(Parser)]
#[command(name = "c2o", about = "Convert request collections to OpenAPI 3.0", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a collection file to an OpenAPI document
    Convert {
        /// Path to the collection file (JSON or YAML)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to write the OpenAPI document (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (defaults from --output extension, then config)
        #[arg(long)]
        format: Option<Format>,
    },

    /// Inspect the document a collection converts to
    Inspect {
        /// Path to the collection file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: Format,
    },

    /// Initialize a new c2o configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

impl From<ConfigFormat> for Format {
    fn from(format: ConfigFormat) -> Self {
        match format {
            ConfigFormat::Yaml => Format::Yaml,
            ConfigFormat::Json => Format::Json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
        } => cmd_convert(input, output, format),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "c2o", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<C2oConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Read and parse a collection file, dispatching on extension.
fn load_collection(path: &Path) -> Result<Collection> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let parsed = match ext {
        "yaml" | "yml" => collection::from_yaml(&content)?,
        _ => collection::from_json(&content)?,
    };

    Ok(parsed)
}

/// Serialize the document in the requested format.
fn render_document(document: &Document, format: Format) -> Result<String> {
    let rendered = match format {
        Format::Yaml => document.to_yaml()?,
        Format::Json => document.to_json_pretty()?,
    };
    Ok(rendered)
}

/// Pick the output format: explicit flag, then output file extension, then
/// config, then YAML.
fn resolve_format(flag: Option<Format>, output: Option<&Path>, cfg: Option<&C2oConfig>) -> Format {
    if let Some(format) = flag {
        return format;
    }
    if let Some(ext) = output.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
        if ext == "json" {
            return Format::Json;
        }
        if ext == "yaml" || ext == "yml" {
            return Format::Yaml;
        }
    }
    cfg.map(|c| c.format.into()).unwrap_or(Format::Yaml)
}

fn cmd_convert(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<Format>,
) -> Result<()> {
    let cfg = try_load_config()?;

    let input = input
        .or_else(|| cfg.as_ref().map(|c| PathBuf::from(&c.input)))
        .unwrap_or_else(|| PathBuf::from(C2oConfig::default().input));

    let collection = load_collection(&input)?;
    let document = convert(&collection);

    let format = resolve_format(format, output.as_deref(), cfg.as_ref());
    let rendered = render_document(&document, format)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
            fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "Converted {} ({} paths) → {}",
                input.display(),
                document.paths.len(),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn cmd_inspect(input: PathBuf, format: Format) -> Result<()> {
    let collection = load_collection(&input)?;
    let document = convert(&collection);

    let summary = build_inspect_summary(&document);

    match format {
        Format::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(document: &Document) -> serde_json::Value {
    let operations: Vec<serde_json::Value> = document
        .paths
        .iter()
        .flat_map(|(path, item)| {
            item.iter().map(move |(method, op)| {
                serde_json::json!({
                    "method": method,
                    "path": path,
                    "summary": op.summary,
                    "has_body": op.request_body.is_some(),
                    "parameters": op.parameters.len(),
                })
            })
        })
        .collect();

    serde_json::json!({
        "info": {
            "title": document.info.title,
            "version": document.info.version,
        },
        "paths": document.paths.len(),
        "operations": operations,
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_collection_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collection.json");
        fs::write(
            &path,
            r#"{"info": {"name": "T"}, "item": [{"name": "Ping", "request": {"method": "GET", "url": {"path": ["ping"]}}}]}"#,
        )
        .unwrap();

        let collection = load_collection(&path).unwrap();
        assert_eq!(collection.item.len(), 1);

        let document = convert(&collection);
        assert!(document.paths.contains_key("/ping"));
    }

    #[test]
    fn test_load_collection_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collection.yaml");
        fs::write(&path, "info:\n  name: T\nitem: []\n").unwrap();

        let collection = load_collection(&path).unwrap();
        assert!(collection.item.is_empty());
    }

    #[test]
    fn test_resolve_format_precedence() {
        let cfg = C2oConfig {
            format: ConfigFormat::Json,
            ..C2oConfig::default()
        };

        // Explicit flag wins
        assert!(matches!(
            resolve_format(Some(Format::Yaml), Some(Path::new("out.json")), Some(&cfg)),
            Format::Yaml
        ));
        // Then the output extension
        assert!(matches!(
            resolve_format(None, Some(Path::new("out.json")), None),
            Format::Json
        ));
        assert!(matches!(
            resolve_format(None, Some(Path::new("out.yml")), Some(&cfg)),
            Format::Yaml
        ));
        // Then the config
        assert!(matches!(resolve_format(None, None, Some(&cfg)), Format::Json));
        // Then YAML
        assert!(matches!(resolve_format(None, None, None), Format::Yaml));
    }

    #[test]
    fn test_inspect_summary() {
        let collection = collection::from_json(
            r#"{"item": [{"name": "Ping", "request": {"method": "GET", "url": {"path": ["ping"]}}}]}"#,
        )
        .unwrap();
        let document = convert(&collection);
        let summary = build_inspect_summary(&document);

        assert_eq!(summary["paths"], 1);
        assert_eq!(summary["operations"][0]["method"], "get");
        assert_eq!(summary["operations"][0]["path"], "/ping");
        assert_eq!(summary["operations"][0]["summary"], "Ping");
    }
}
