use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "a4code")]
#[command(author, version)]
#[command(about = "A converter for a4code bracket markup")]
#[command(
    long_about = "a4code converts the bracket markup used in forum posts, comments, blog \
    entries and news articles into inline HTML, feed-friendly text, or plain words for a \
    search index. Malformed markup never fails: unknown commands are ignored and unclosed \
    commands are closed at the end of the input."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a file as HTML
    a4code render post.a4

    # Render from stdin
    echo '[b Bold [i Italic]] plain' | a4code render

    # Feed summary (newlines kept, no <br />)
    a4code render --mode strip-tags post.a4

    # Words for the search index, as JSON
    a4code words --json post.a4

    # Reply text quoting another user
    a4code quote --user alice --paragraphs post.a4

CONFIGURATION:

a4code looks for configuration files in this order:
  1. Explicit --config path
  2. a4code.toml or .a4code.toml in current/parent directories
  3. ~/.config/a4code/config.toml (XDG)
  4. Built-in defaults

Example .a4code.toml:

    flavor = \"extended\"
    mode = \"render-html\"
    sanitize_links = true
    max_input_bytes = 65536

    [extensions]
    links = true
    images = false")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, a4code will \
        search for .a4code.toml or a4code.toml in the current directory and its parents, \
        then fall back to ~/.config/a4code/config.toml."
    )]
    pub config: Option<PathBuf>,
}

/// Output dialect selectable on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Inline HTML for display in a page
    RenderHtml,
    /// Recognize commands without emitting tags
    TableOfContents,
    /// HTML with plain newlines, for syndication feeds
    StripTags,
    /// Plain words for search indexing
    WordsOnly,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a document
    #[command(
        long_about = "Convert an a4code document and print the result to stdout. The output \
        mode defaults to the configured mode (render-html unless configured otherwise)."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Render to HTML
    a4code render post.a4

    # Render from stdin
    echo '[b bold' | a4code render

    # Strip line-break tags for a feed
    a4code render --mode strip-tags post.a4

MODES:

  render-html        <strong>, <i>, <u> and newlines as <br />
  strip-tags         same tags, newlines kept as plain newlines
  words-only         no markup at all, special characters become spaces
  table-of-contents  commands consumed, nothing emitted")]
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Output mode
        #[arg(long, value_enum)]
        #[arg(help = "Output mode (defaults to the configured mode)")]
        mode: Option<ModeArg>,
    },
    /// List the words a document contributes to the search index
    #[command(
        long_about = "Convert a document in words-only mode, split it into words and print \
        the distinct lowercase words in sorted order, one per line."
    )]
    Words {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Print a JSON array instead of one word per line
        #[arg(long)]
        json: bool,
    },
    /// Wrap a document in quote markup for a reply
    #[command(
        long_about = "Wrap a document in [quoteof \"user\" ...] markup, ready to be edited \
        into a reply. With --paragraphs each blank-line separated paragraph is quoted on its \
        own and paragraphs that only quote another quote are left out."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Quote a whole post
    a4code quote --user alice post.a4

    # Quote paragraph by paragraph, trimming whitespace
    a4code quote --user 'Arran on messenger' --paragraphs --trim post.a4")]
    Quote {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Name of the quoted author
        #[arg(long)]
        user: String,

        /// Quote each paragraph separately
        #[arg(long)]
        paragraphs: bool,

        /// Trim surrounding whitespace from the quoted text
        #[arg(long)]
        trim: bool,
    },
}
