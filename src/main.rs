//! exgen's main application entry point and orchestration logic.
//! Handles command-line argument parsing and dispatches the `new`, `list`
//! and `validate` subcommands into the library modules.

use exgen::{
    cli::{get_args, Args, Command, ListArgs, NewArgs, ValidateArgs},
    config::Layout,
    error::{default_error_handler, Error, Result},
    listing::{filter_by_tag, listing_footer, record_line, records_to_json},
    logger::init_logger,
    processor::create_exercise,
    registry::{load_registry, Document, Record, Strictness, Value},
    validate::{run_build, validate_structure},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let layout = Layout::from_root(&args.root);
    let strictness = if args.strict { Strictness::Strict } else { Strictness::Lenient };

    match args.command {
        Command::New(new_args) => cmd_new(&layout, strictness, new_args),
        Command::List(list_args) => cmd_list(&layout, strictness, list_args),
        Command::Validate(validate_args) => cmd_validate(&layout, validate_args),
    }
}

/// Builds a metadata record from `new` command flags.
fn record_from_flags(args: &NewArgs) -> Record {
    let mut record = Record::default();
    record.fields.insert("slug".into(), Value::Scalar(args.slug.clone()));
    if let Some(title) = &args.title {
        record.fields.insert("title".into(), Value::Scalar(title.clone()));
    }
    if let Some(prompt) = &args.prompt {
        record.fields.insert("prompt".into(), Value::Scalar(prompt.clone()));
    }
    if let Some(tags) = &args.tags {
        let tags = tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect();
        record.fields.insert("tags".into(), Value::List(tags));
    }
    record
        .fields
        .insert("difficulty".into(), Value::Scalar(args.difficulty.to_string()));
    record
}

fn cmd_new(layout: &Layout, strictness: Strictness, args: NewArgs) -> Result<()> {
    let record = if args.from_registry {
        let document = load_registry(&layout.registry, strictness)?;
        document.find_by_slug(&args.slug).cloned().ok_or_else(|| Error::SlugNotFound {
            slug: args.slug.clone(),
            registry: layout.registry.display().to_string(),
        })?
    } else {
        record_from_flags(&args)
    };

    let dest = create_exercise(layout, &args.slug, &record, &args.template)?;
    println!("{}", dest.display());
    Ok(())
}

fn cmd_list(layout: &Layout, strictness: Strictness, args: ListArgs) -> Result<()> {
    let document = if layout.registry.exists() {
        load_registry(&layout.registry, strictness)?
    } else {
        Document::default()
    };

    let tag = args.filter_by_tag.as_deref();
    let matched = filter_by_tag(&document, tag);

    if args.json {
        println!("{}", records_to_json(&matched)?);
        return Ok(());
    }

    for record in &matched {
        println!("{}", record_line(record));
    }
    println!("{}", listing_footer(matched.len(), tag));
    Ok(())
}

fn cmd_validate(layout: &Layout, args: ValidateArgs) -> Result<()> {
    validate_structure(&layout.root)?;
    println!("Structure OK");

    if args.run_build {
        run_build(&layout.root)?;
        println!("Build OK");
    }
    Ok(())
}
