use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use labelled_numerics::{
    Catalog, ChunkOrder, EncodingMethod, LabelledValue, Number, RomanNumeral, StderrSink,
    arab2roman, catalogs, convert_formula, format_chunky, format_nice_roman, label2num,
    labelled_combinations, num2label, replace_all_arabs,
};

#[derive(Parser)]
#[command(
    name = "labnum",
    version,
    about = "Convert numbers to and from labelled sequences (Roman numerals, number words, formulas)"
)]
struct Cli {
    /// Mirror warnings into this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Emit JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a number in 0..=3999 as a Roman numeral.
    ToRoman(ToRomanArgs),
    /// Decode a Roman numeral (spaced or contiguous).
    FromRoman { numeral: String },
    /// Replace every number in the text by its Roman numeral.
    Replace {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Encode a number with a catalog.
    Encode(EncodeArgs),
    /// Decode a label sequence with a catalog.
    Decode(DecodeArgs),
    /// Split free text into catalog labels.
    Chunk(ChunkArgs),
    /// List every combination of catalog values summing to a target.
    Combinations(CombinationArgs),
    /// Expand a chemical formula and weigh it.
    Formula(FormulaArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Roman,
    Organic,
    English,
}

#[derive(Args, Clone)]
struct CatalogArgs {
    /// Built-in catalog.
    #[arg(long, value_enum, conflicts_with = "catalog")]
    preset: Option<Preset>,

    /// JSON catalog file such as {"H": 1, "O": 16}.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

impl CatalogArgs {
    fn resolve(&self, default: Preset) -> Result<Arc<Catalog>, AnyError> {
        if let Some(path) = &self.catalog {
            return Ok(Arc::new(Catalog::from_json_file(path)?));
        }
        Ok(match self.preset.unwrap_or(default) {
            Preset::Roman => catalogs::roman(),
            Preset::Organic => catalogs::organic_atoms(),
            Preset::English => catalogs::english_words(),
        })
    }
}

#[derive(Args, Clone)]
struct ToRomanArgs {
    #[arg(allow_hyphen_values = true, value_parser = parse_number)]
    number: Number,

    /// Keep the spaced chunk form instead of nice notation.
    #[arg(long)]
    spaced: bool,
}

#[derive(Args, Clone)]
struct EncodeArgs {
    #[arg(allow_hyphen_values = true, value_parser = parse_number)]
    number: Number,

    #[command(flatten)]
    catalog: CatalogArgs,

    #[arg(long, value_enum, default_value_t = EncodingMethod::Decimal)]
    method: EncodingMethod,

    #[arg(long, default_value = " ")]
    sep: String,
}

#[derive(Args, Clone)]
struct DecodeArgs {
    label: String,

    #[command(flatten)]
    catalog: CatalogArgs,

    #[arg(long, default_value = " ")]
    sep: String,
}

#[derive(Args, Clone)]
struct ChunkArgs {
    text: String,

    #[command(flatten)]
    catalog: CatalogArgs,

    #[arg(long, default_value = " ")]
    sep: String,

    /// Match labels anywhere, longest first (formula tallies).
    #[arg(long)]
    by_length: bool,
}

#[derive(Args, Clone)]
struct CombinationArgs {
    target: u64,

    #[command(flatten)]
    catalog: CatalogArgs,

    /// Restrict candidates to these labels (comma-separated).
    #[arg(long, value_delimiter = ',')]
    keys: Option<Vec<String>>,
}

#[derive(Args, Clone)]
struct FormulaArgs {
    formula: String,

    #[command(flatten)]
    catalog: CatalogArgs,
}

type AnyError = Box<dyn std::error::Error + Send + Sync>;

fn parse_number(s: &str) -> Result<Number, String> {
    s.parse().map_err(|err: labelled_numerics::Error| err.to_string())
}

fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();
    let sink = match &cli.log_file {
        Some(path) => StderrSink::new().with_log_file(path)?,
        None => StderrSink::new(),
    };
    let sink = sink.with_prefix("labnum");

    match &cli.command {
        Command::ToRoman(args) => run_to_roman(args, cli.json, &sink),
        Command::FromRoman { numeral } => run_from_roman(numeral, cli.json, &sink),
        Command::Replace { text } => {
            let replaced = replace_all_arabs(&text.join(" "), &sink)?;
            emit(cli.json, &replaced)
        }
        Command::Encode(args) => {
            let catalog = args.catalog.resolve(Preset::Roman)?;
            let label = num2label(args.number, &catalog, &args.sep, args.method)?;
            emit(cli.json, &label)
        }
        Command::Decode(args) => {
            let catalog = args.catalog.resolve(Preset::Roman)?;
            let value = label2num(&args.label, &catalog, &args.sep)?;
            emit(cli.json, &value)
        }
        Command::Chunk(args) => {
            let catalog = args.catalog.resolve(Preset::Roman)?;
            let order = if args.by_length {
                ChunkOrder::ByLabelLength
            } else {
                ChunkOrder::ByValue
            };
            let chunked = format_chunky(&args.text, &catalog, &args.sep, order, &sink);
            emit(cli.json, &chunked)
        }
        Command::Combinations(args) => run_combinations(args, cli.json),
        Command::Formula(args) => run_formula(args, cli.json),
    }
}

fn emit<T: Serialize + std::fmt::Display>(json: bool, payload: &T) -> Result<(), AnyError> {
    if json {
        serde_json::to_writer_pretty(std::io::stdout(), payload)?;
        println!();
    } else {
        println!("{payload}");
    }
    Ok(())
}

fn run_to_roman(args: &ToRomanArgs, json: bool, sink: &StderrSink) -> Result<(), AnyError> {
    let spaced = arab2roman(args.number, sink)?;
    let label = if args.spaced || args.number.is_float() {
        spaced
    } else {
        format_nice_roman(&spaced)
    };
    emit(json, &label)
}

fn run_from_roman(numeral: &str, json: bool, sink: &StderrSink) -> Result<(), AnyError> {
    let numeral = RomanNumeral::parse(numeral, sink)?;
    if json {
        #[derive(Serialize)]
        struct RomanJson<'a> {
            label: &'a str,
            nice_label: &'a str,
            arab: Number,
        }
        let payload = RomanJson {
            label: numeral.label(),
            nice_label: numeral.nice_label(),
            arab: numeral.arab(),
        };
        serde_json::to_writer_pretty(std::io::stdout(), &payload)?;
        println!();
    } else {
        println!("{} = {}", numeral.nice_label(), numeral.arab());
    }
    Ok(())
}

fn run_combinations(args: &CombinationArgs, json: bool) -> Result<(), AnyError> {
    let catalog = args.catalog.resolve(Preset::Organic)?;
    let keys: Option<Vec<&str>> = args
        .keys
        .as_ref()
        .map(|keys| keys.iter().map(String::as_str).collect());
    let found = labelled_combinations(args.target, &catalog, keys.as_deref());

    if json {
        #[derive(Serialize)]
        struct CombinationJson {
            labels: String,
            condensed: String,
            values: Vec<u64>,
        }
        let payload = found
            .iter()
            .map(|value| {
                Ok(CombinationJson {
                    labels: value.name().to_owned(),
                    condensed: value.condensed_name(),
                    values: value.values()?,
                })
            })
            .collect::<Result<Vec<_>, labelled_numerics::Error>>()?;
        serde_json::to_writer_pretty(std::io::stdout(), &payload)?;
        println!();
    } else {
        println!(
            "{} combinations for {} ({} candidate labels)",
            found.len(),
            args.target,
            keys.as_ref().map_or(catalog.len(), Vec::len)
        );
        for value in &found {
            println!("{}", value.condensed_name());
        }
    }
    Ok(())
}

fn run_formula(args: &FormulaArgs, json: bool) -> Result<(), AnyError> {
    let catalog = args.catalog.resolve(Preset::Organic)?;
    let labels = convert_formula(&args.formula)?;
    let value = LabelledValue::spaced(labels, catalog);
    let mass = value.sum_values()?;

    if json {
        #[derive(Serialize)]
        struct FormulaJson<'a> {
            labels: &'a str,
            condensed: String,
            mass: u64,
            mean: f64,
        }
        let payload = FormulaJson {
            labels: value.name(),
            condensed: value.condensed_name(),
            mass,
            mean: value.mean()?,
        };
        serde_json::to_writer_pretty(std::io::stdout(), &payload)?;
        println!();
    } else {
        println!("{} ({}) mass={mass}", value.condensed_name(), value.name());
    }
    Ok(())
}
