use std::fs;
use std::io::Write as _;
use std::process;

use clap::{Parser, Subcommand};
use tabwriter::TabWriter;

use embridge_io::bridge;
use embridge_io::core::{Block, Document, validate_document};
use embridge_io::import::import_with_report;
use embridge_io::metadata;

#[derive(Debug, Parser)]
#[command(name = "embridge", version, about = "HTML ⇄ block-document bridge CLI")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Import arbitrary HTML into a best-effort document JSON.
    Import {
        /// Input HTML path
        input: String,
        /// Output minified JSON
        #[arg(long)]
        min: bool,
        /// Print the import report to stderr
        #[arg(long)]
        stats: bool,
    },
    /// Full incoming chain: embedded metadata first, importer fallback.
    FromHtml {
        /// Input HTML path
        input: String,
        /// Output minified JSON
        #[arg(long)]
        min: bool,
    },
    /// Attach a document's metadata marker to rendered HTML.
    Embed {
        /// Document JSON path
        document: String,
        /// Rendered HTML path
        html: String,
    },
    /// Extract the embedded document from HTML.
    Extract {
        /// Input HTML path
        input: String,
        /// Output minified JSON
        #[arg(long)]
        min: bool,
    },
    /// Remove the metadata marker from HTML.
    Strip {
        /// Input HTML path
        input: String,
    },
    /// List a document's blocks as an aligned table.
    Inspect {
        /// Document JSON path
        document: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Import { input, min, stats } => {
            let html = fs::read_to_string(&input)?;
            let (doc, report) = import_with_report(&html);
            if stats {
                eprintln!("{}", serde_json::to_string_pretty(&report)?);
            }
            println!("{}", document_json(&doc, min)?);
        }

        Command::FromHtml { input, min } => {
            let html = fs::read_to_string(&input)?;
            let doc = bridge::from_html(&html);
            println!("{}", document_json(&doc, min)?);
        }

        Command::Embed { document, html } => {
            let doc = load_document(&document);
            let markup = fs::read_to_string(&html)?;
            print!("{}", metadata::embed(&markup, &doc)?);
        }

        Command::Extract { input, min } => {
            let html = fs::read_to_string(&input)?;
            let Some(token) = metadata::extract(&html) else {
                eprintln!("no embedded metadata marker found");
                process::exit(1);
            };
            match metadata::decode(token) {
                Ok(doc) => println!("{}", document_json(&doc, min)?),
                Err(e) => {
                    // Exact error string, stable for CI / integrations.
                    eprintln!("{e}");
                    process::exit(2);
                }
            }
        }

        Command::Strip { input } => {
            let html = fs::read_to_string(&input)?;
            print!("{}", metadata::strip(&html));
        }

        Command::Inspect { document } => {
            let doc = load_document(&document);
            print!("{}", inspect_table(&doc)?);
        }
    }

    Ok(())
}

fn document_json(doc: &Document, min: bool) -> Result<String, serde_json::Error> {
    if min {
        serde_json::to_string(doc)
    } else {
        serde_json::to_string_pretty(doc)
    }
}

fn load_document(path: &str) -> Document {
    let s = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let doc: Document = match serde_json::from_str(&s) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    if let Err(msg) = validate_document(&doc) {
        eprintln!("{msg}");
        process::exit(2);
    }

    doc
}

fn inspect_table(doc: &Document) -> anyhow::Result<String> {
    let mut tw = TabWriter::new(Vec::new());
    writeln!(tw, "blockId\ttype\tchildren\tpreview")?;

    // Root first, then the remaining blocks in map order.
    if let Some(root) = doc.root() {
        write_row(&mut tw, embridge_io::core::ROOT_ID, root)?;
    }
    for (id, block) in &doc.blocks {
        if id != embridge_io::core::ROOT_ID {
            write_row(&mut tw, id, block)?;
        }
    }

    tw.flush()?;
    let bytes = tw.into_inner().map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_row(tw: &mut TabWriter<Vec<u8>>, id: &str, block: &Block) -> std::io::Result<()> {
    let children = match block.children() {
        Some(ids) => ids.len().to_string(),
        None => "-".to_string(),
    };
    writeln!(tw, "{id}\t{}\t{children}\t{}", block.type_name(), preview(block))
}

/// One-line content preview, bounded at 60 chars.
fn preview(block: &Block) -> String {
    let text: &str = match block {
        Block::Heading(d) => &d.props.text,
        Block::Text(d) => &d.props.text,
        Block::Button(d) => &d.props.text,
        Block::Image(d) => &d.props.url,
        Block::Html(d) => &d.props.contents,
        Block::EmailLayout(layout) => &layout.font_family,
        Block::Container(_) | Block::Divider(_) => "",
    };

    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .collect();

    if flat.chars().count() <= 60 {
        flat
    } else {
        let mut out: String = flat.chars().take(59).collect();
        out.push('…');
        out
    }
}
