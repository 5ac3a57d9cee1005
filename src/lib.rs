pub mod config;
pub mod quote;
pub mod transpiler;
pub mod words;

pub use config::Config;
pub use config::ConfigBuilder;
pub use config::Flavor;
pub use quote::{QuoteOptions, quote_text};
pub use transpiler::Mode;
pub use transpiler::Transpiler;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Converts a4code markup into the given output mode.
///
/// Conversion never fails; malformed markup degrades to best-effort output
/// with every opened tag closed.
///
/// # Examples
///
/// ```rust
/// use a4code::{Mode, convert};
///
/// let html = convert("[b Bold [i Italic]] plain", Mode::RenderHtml, None);
/// assert_eq!(html, "<strong>Bold <i>Italic</i></strong> plain");
/// ```
///
/// # Arguments
///
/// * `input` - The markup to convert
/// * `mode` - The output dialect
/// * `config` - Optional configuration (defaults to the classic command set)
pub fn convert(input: &str, mode: Mode, config: Option<&Config>) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let mut transpiler = match config {
        Some(config) => Transpiler::with_config(mode, config),
        None => Transpiler::new(mode),
    };
    transpiler.set_input(input);
    transpiler.process();
    transpiler.into_output()
}

/// Renders markup as inline HTML for display in a page.
pub fn render_html(input: &str) -> String {
    convert(input, Mode::RenderHtml, None)
}
