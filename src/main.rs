//! CLI for gdoc2wechat - Google Docs to WeChat HTML converter

use clap::{Parser, ValueEnum};
use gdoc2wechat::adapters::gdocs;
use gdoc2wechat::{ConvertOptions, DocsToWechat, Language, StyleCatalog};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input document (Docs API `documents.get` JSON)
    input: PathBuf,

    /// Output HTML file path
    #[arg(default_value = "output.html")]
    output: PathBuf,

    /// Also write the intermediate Markdown to this file
    #[arg(long)]
    markdown: Option<PathBuf>,

    /// JSON file overriding inline styles
    #[arg(long)]
    styles: Option<PathBuf>,

    /// Document language (selects the stop section titles)
    #[arg(long, value_enum, default_value = "zh")]
    lang: Lang,

    /// Additional section title that ends the export (repeatable)
    #[arg(long = "stop-at", value_name = "TEXT")]
    stop_at: Vec<String>,

    /// Image placeholder URL template, `{id}` is replaced by the image id
    #[arg(long, value_name = "TEMPLATE")]
    image_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Lang {
    Zh,
    En,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::Zh => Language::Zh,
            Lang::En => Language::En,
        }
    }
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error converting document: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> gdoc2wechat::Result<()> {
    let mut options = ConvertOptions {
        language: args.lang.into(),
        extra_stop_sentinels: args.stop_at,
        ..Default::default()
    };
    if let Some(path) = &args.styles {
        options.styles = StyleCatalog::from_file(path)?;
    }
    if let Some(template) = args.image_url {
        options.image_placeholder = template;
    }

    let converter = DocsToWechat::new(options);
    let document = gdocs::read_document(&args.input)?;

    let markup = converter.extract_markup(&document);
    if let Some(path) = &args.markdown {
        std::fs::write(path, &markup)?;
        log::info!("wrote intermediate markdown to {}", path.display());
    }

    let html = converter.render_markup(&markup)?;
    std::fs::write(&args.output, &html)?;
    println!("Successfully converted to {:?}", args.output);
    println!("Image URLs are placeholders: upload the images and replace them before pasting.");
    Ok(())
}
