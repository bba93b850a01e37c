use clap::Parser;

use starling::{
    automaton::FiniteAutomaton,
    backends::{json::JsonGenerator, text::TextGenerator},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
enum DescriptionFormat {
    Text,
    Json,
}

impl std::fmt::Display for DescriptionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DescriptionFormat::Text => write!(f, "text"),
            DescriptionFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    automaton: String,

    #[arg(long, default_value_t = DescriptionFormat::Text)]
    format: DescriptionFormat,

    #[arg(short, long)]
    output: String,

    #[arg(long, default_value_t = DescriptionFormat::Text)]
    output_format: DescriptionFormat,

    #[arg(long, default_value_t = false)]
    print: bool,
}

fn main() {
    let args = Args::parse();

    let mut builder = FiniteAutomaton::builder();

    match args.format {
        DescriptionFormat::Text => builder = builder.text_description(&args.automaton).unwrap(),
        DescriptionFormat::Json => builder = builder.json_description(&args.automaton).unwrap(),
    }

    let automaton = builder.build().unwrap();
    let dfa = automaton.to_deterministic();

    if args.print {
        println!("{}", dfa);
    }

    match args.output_format {
        DescriptionFormat::Text => TextGenerator::new().generate(&args.output, &dfa),
        DescriptionFormat::Json => JsonGenerator::new().generate(&args.output, &dfa),
    }
}
