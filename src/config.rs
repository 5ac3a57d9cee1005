use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::transpiler::Mode;

/// The command set to recognize.
/// Each flavor has a different set of default extensions enabled.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Flavor {
    /// Bold, italic and underline only
    #[default]
    Classic,
    /// Classic plus quotes, links, images, code and the other later commands
    Extended,
}

/// Commands beyond the classic bold/italic/underline set.
/// Bold, italic and underline are always recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extensions {
    /// `[^ x]`, `[sup x]`
    pub superscript: bool,
    /// `[. x]`, `[sub x]`
    pub subscript: bool,
    /// `[spoiler x]`
    pub spoilers: bool,
    /// `[quote x]` and `[quoteof name x]`
    pub quotes: bool,
    /// `[indent x]`
    pub indent: bool,
    /// `[hr]`
    pub horizontal_rules: bool,
    /// `[link url label]`
    pub links: bool,
    /// `[img url]`
    pub images: bool,
    /// `[code raw text]`
    pub code: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self::for_flavor(Flavor::default())
    }
}

impl Extensions {
    /// Get the default extension set for a given flavor.
    pub fn for_flavor(flavor: Flavor) -> Self {
        match flavor {
            Flavor::Classic => Self::classic_defaults(),
            Flavor::Extended => Self::extended_defaults(),
        }
    }

    fn classic_defaults() -> Self {
        Self {
            superscript: false,
            subscript: false,
            spoilers: false,
            quotes: false,
            indent: false,
            horizontal_rules: false,
            links: false,
            images: false,
            code: false,
        }
    }

    fn extended_defaults() -> Self {
        Self {
            superscript: true,
            subscript: true,
            spoilers: true,
            quotes: true,
            indent: true,
            horizontal_rules: true,
            links: true,
            images: true,
            code: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub flavor: Flavor,
    pub extensions: Extensions,
    /// Output mode used when the caller does not pick one
    pub mode: Mode,
    /// Refuse non-http(s) link and image targets
    pub sanitize_links: bool,
    /// Upper bound on input size, enforced by callers before converting
    pub max_input_bytes: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        let flavor = Flavor::default();
        Self {
            flavor,
            extensions: Extensions::for_flavor(flavor),
            mode: Mode::default(),
            sanitize_links: false,
            max_input_bytes: None,
        }
    }
}

impl Config {
    /// Reject input larger than `max_input_bytes`.
    pub fn check_input_len(&self, input: &str) -> io::Result<()> {
        match self.max_input_bytes {
            Some(max) if input.len() > max => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("input is {} bytes, limit is {max}", input.len()),
            )),
            _ => Ok(()),
        }
    }
}

/// On-disk shape of [`Config`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    flavor: Flavor,
    extensions: RawExtensions,
    mode: Mode,
    sanitize_links: bool,
    max_input_bytes: Option<usize>,
}

/// The `[extensions]` table. Keys it leaves out keep the flavor's default.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawExtensions {
    superscript: Option<bool>,
    subscript: Option<bool>,
    spoilers: Option<bool>,
    quotes: Option<bool>,
    indent: Option<bool>,
    horizontal_rules: Option<bool>,
    links: Option<bool>,
    images: Option<bool>,
    code: Option<bool>,
}

impl RawExtensions {
    fn over(self, base: Extensions) -> Extensions {
        Extensions {
            superscript: self.superscript.unwrap_or(base.superscript),
            subscript: self.subscript.unwrap_or(base.subscript),
            spoilers: self.spoilers.unwrap_or(base.spoilers),
            quotes: self.quotes.unwrap_or(base.quotes),
            indent: self.indent.unwrap_or(base.indent),
            horizontal_rules: self.horizontal_rules.unwrap_or(base.horizontal_rules),
            links: self.links.unwrap_or(base.links),
            images: self.images.unwrap_or(base.images),
            code: self.code.unwrap_or(base.code),
        }
    }
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            flavor: raw.flavor,
            extensions: raw.extensions.over(Extensions::for_flavor(raw.flavor)),
            mode: raw.mode,
            sanitize_links: raw.sanitize_links,
            max_input_bytes: raw.max_input_bytes,
        }
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Switch flavor and reset the extensions to its defaults.
    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.config.flavor = flavor;
        self.config.extensions = Extensions::for_flavor(flavor);
        self
    }

    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.config.extensions = extensions;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn sanitize_links(mut self, sanitize: bool) -> Self {
        self.config.sanitize_links = sanitize;
        self
    }

    pub fn max_input_bytes(mut self, max: usize) -> Self {
        self.config.max_input_bytes = Some(max);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".a4code.toml", "a4code.toml"];

pub fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<RawConfig>(s).map(Config::from).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("a4code").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("a4code")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .a4code.toml, a4code.toml
/// 3) XDG: $XDG_CONFIG_HOME/a4code/config.toml or ~/.config/a4code/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = xdg_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
