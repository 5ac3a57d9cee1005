use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use a4code::{Config, Mode, QuoteOptions, convert, quote_text};

mod cli;
use cli::{Cli, Commands, ModeArg};

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::RenderHtml => Mode::RenderHtml,
            ModeArg::TableOfContents => Mode::TableOfContents,
            ModeArg::StripTags => Mode::StripTags,
            ModeArg::WordsOnly => Mode::WordsOnly,
        }
    }
}

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = a4code::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    Ok(cfg)
}

fn read_input(file: &Option<PathBuf>, cfg: &Config) -> io::Result<String> {
    let input = read_all(file.as_ref())?;
    cfg.check_input_len(&input)?;
    Ok(input)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { file, mode } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_input(&file, &cfg)?;
            let mode = mode.map(Mode::from).unwrap_or(cfg.mode);
            log::debug!("Rendering in {} mode", mode);

            print!("{}", convert(&input, mode, Some(&cfg)));
            Ok(())
        }
        Commands::Words { file, json } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_input(&file, &cfg)?;
            let words = a4code::words::index_words(&input, Some(&cfg));

            if json {
                let out = serde_json::to_string(&words).map_err(io::Error::other)?;
                println!("{out}");
            } else {
                for word in &words {
                    println!("{word}");
                }
            }
            Ok(())
        }
        Commands::Quote {
            file,
            user,
            paragraphs,
            trim,
        } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_input(&file, &cfg)?;
            let options = QuoteOptions { paragraphs, trim };
            log::debug!("Quoting for {user:?} with {options:?}");

            print!("{}", quote_text(&user, &input, options));
            Ok(())
        }
    }
}
