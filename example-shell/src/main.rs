use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use schemaform::{FieldType, FieldValue, FormEngine, FormSchema, ValidationErrors};
use schemaform_html::{HtmlOptions, HtmlRenderer};
use tracing_subscriber::EnvFilter;

/// Render an example form, optionally fill it in and submit it.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Shipped example to load: registration or conditional.
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(example_forms::NAMES.iter().copied()))]
    example: Option<String>,

    /// Load the schema from a JSON file instead.
    #[arg(long, conflicts_with = "example")]
    schema: Option<PathBuf>,

    /// Set a field as NAME=VALUE. Multiselect values are comma-separated, checkboxes take true/false.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,

    /// Submit after applying the values.
    #[arg(long)]
    submit: bool,

    /// Print only the form fragment instead of a full document.
    #[arg(long)]
    fragment: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let (engine, rejected) = fill(&args)?;

    let renderer = HtmlRenderer::new(HtmlOptions::new().full_document(!args.fragment));
    let html = engine.render_with(&renderer)?;
    print!("{html}");

    if let Some(errors) = rejected {
        for (name, error) in errors.iter() {
            eprintln!("{name}: {error}");
        }
        return Err(anyhow::Error::new(errors).context("submission rejected"));
    }

    Ok(())
}

/// Load the schema, apply the `--set` values and submit if asked to.
///
/// Returns the engine together with the errors of a rejected submit.
fn fill(args: &Args) -> anyhow::Result<(FormEngine, Option<ValidationErrors>)> {
    let schema = match (&args.schema, args.example.as_deref()) {
        (Some(path), _) => FormSchema::from_json_file(path)
            .with_context(|| format!("loading schema from {}", path.display()))?,
        (None, name) => {
            let name = name.unwrap_or("registration");
            example_forms::by_name(name).with_context(|| format!("unknown example '{name}'"))?
        }
    };

    let mut engine = FormEngine::new(schema).on_submit(|values| {
        eprintln!("Form submitted with values:\n{:#}", values.to_json());
    });

    for assignment in &args.set {
        let (name, raw) = assignment
            .split_once('=')
            .with_context(|| format!("expected NAME=VALUE, got '{assignment}'"))?;
        let value = parse_value(&engine, name, raw)?;
        tracing::debug!(field = name, ?value, "applying value from the command line");
        engine
            .set_value(name, value)
            .with_context(|| format!("setting '{name}'"))?;
        engine.blur(name).with_context(|| format!("leaving '{name}'"))?;
    }

    let rejected = if args.submit {
        engine.submit().err()
    } else {
        None
    };
    Ok((engine, rejected))
}

/// Interpret a command-line value according to the field's type.
fn parse_value(engine: &FormEngine, name: &str, raw: &str) -> anyhow::Result<FieldValue> {
    let Some(field) = engine.schema().field(name) else {
        bail!("the form has no field named '{name}'");
    };

    Ok(match field.kind {
        FieldType::Checkbox => FieldValue::Bool(
            raw.parse()
                .with_context(|| format!("'{name}' expects true or false"))?,
        ),
        FieldType::Multiselect => FieldValue::List(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        ),
        _ => FieldValue::Text(raw.to_string()),
    })
}
