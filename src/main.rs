use clap::Parser;
use neo_explorer::{
    Error, Result,
    database::NeoDatabase,
    extract::{load_approaches, load_neos},
    logging::init_logging,
    ui::{
        cli::{Args, OutputFormat},
        output::{print_approaches, print_load_summary, print_written},
    },
    write::{write_to_csv, write_to_json},
};
use std::process;

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);

    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let format = match &args.outfile {
        Some(path) => Some(OutputFormat::from_path(path).ok_or_else(|| {
            Error::Format(format!(
                "output file '{}' must end in .csv or .json",
                path.display()
            ))
        })?),
        None => None,
    };

    let neos = load_neos(&args.neofile)?;
    let approaches = load_approaches(&args.cadfile)?;
    let db = NeoDatabase::new(neos, approaches)?;
    print_load_summary(&db);

    let limit = args.limit.unwrap_or(usize::MAX);
    let pairs: Vec<_> = db.linked_pairs().take(limit).collect();

    match (&args.outfile, format) {
        (Some(path), Some(OutputFormat::Csv)) => {
            let count = write_to_csv(pairs, path)?;
            print_written(count, path);
        }
        (Some(path), Some(OutputFormat::Json)) => {
            let count = write_to_json(pairs, path)?;
            print_written(count, path);
        }
        _ => print_approaches(&db, &pairs),
    }

    Ok(())
}
