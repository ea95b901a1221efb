use citytab_lib::error::PipelineError;
use citytab_lib::pipeline::process;
use citytab_lib::record::CityRecord;
use citytab_lib::render::render_table;
use citytab_lib::report::ConsoleReporter;
use citytab_lib::sort::{sort_by_key, SortKey};
use citytab_lib::split::SplitConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "citytab")]
#[command(about = "City density table generator", long_about = None)]
struct Args {
    /// Input file path (delimited city records)
    #[arg(short, long)]
    input: PathBuf,

    /// Keep the first row instead of dropping it as a header
    #[arg(long)]
    keep_header: bool,

    /// Field delimiter
    #[arg(short, long, default_value = ",")]
    divider: String,

    /// Row delimiter
    #[arg(long, default_value = "\n")]
    end_of_row: String,

    /// Sort field: population, area, density or normalized-density
    #[arg(short, long, default_value = "normalized-density")]
    sort: String,

    /// Output format: table or json
    #[arg(short, long, default_value = "table")]
    format: String,

    /// Output file path (optional)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn resolve_sort_key(name: &str) -> Result<SortKey, PipelineError> {
    SortKey::from_name(name).ok_or_else(|| PipelineError::UnknownSortKey(name.to_string()))
}

fn build_output(format: &str, cities: &[CityRecord]) -> String {
    match format {
        "table" => render_table(cities).join("\n"),
        "json" => serde_json::json!({
            "count": cities.len(),
            "cities": cities,
        })
        .to_string(),
        _ => unreachable!(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Check if file exists
    if !args.input.exists() {
        eprintln!("Error: Input file does not exist: {}", args.input.display());
        std::process::exit(1);
    }

    // Validate format
    if args.format != "table" && args.format != "json" {
        eprintln!("Error: Unknown format '{}'. Use 'table' or 'json'", args.format);
        std::process::exit(1);
    }

    let sort_key = resolve_sort_key(&args.sort)?;

    let config = SplitConfig {
        remove_header: !args.keep_header,
        end_of_row: args.end_of_row.clone(),
        divider: args.divider.clone(),
    };

    let data = std::fs::read_to_string(&args.input)?;
    eprintln!("Read {} bytes from {}", data.len(), args.input.display());

    // Invalid rows are reported on stderr and excluded from the table
    let mut reporter = ConsoleReporter;
    let cities = process(&data, &config, &mut reporter)?;
    eprintln!("Built {} city records", cities.len());

    // The pipeline sorts by normalized density; re-sort only for other keys
    let cities = if sort_key == SortKey::NormalizedDensity {
        cities
    } else {
        sort_by_key(&cities, sort_key)
    };

    let output = build_output(&args.format, &cities);

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &output)?;
        eprintln!("Output written to {}", output_path.display());
    } else {
        println!("{output}");
    }

    Ok(())
}
