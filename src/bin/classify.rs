use clap::Parser;
use std::io::{stdout, BufWriter, Write};

use starling::{
    automaton::FiniteAutomaton,
    backends::simulator::Simulator,
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

    #[arg(long)]
    words_file: Option<String>,

    words: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let mut builder = FiniteAutomaton::builder();

    match args.format {
        DescriptionFormat::Text => builder = builder.text_description(&args.automaton).unwrap(),
        DescriptionFormat::Json => builder = builder.json_description(&args.automaton).unwrap(),
    }

    let automaton = builder.build().unwrap();
    let simulator = Simulator::new(&automaton);

    let mut words = args.words;

    if let Some(path) = &args.words_file {
        let content = std::fs::read_to_string(path).expect("Could not read words file");
        words.extend(content.lines().map(str::to_string));
    }

    let mut stream = BufWriter::new(stdout());

    for word in &words {
        let outcome = simulator.classify_text(word);
        writeln!(&mut stream, "{}\t{}", word, outcome).unwrap();
    }

    stream.flush().unwrap();
}
