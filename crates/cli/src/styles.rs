use clap::builder::Styles;
use clap::builder::styling::AnsiColor;

/// Help colours for `nhbot`: scene names and flags stand out, errors in red.
pub fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Yellow.on_default().bold())
		.usage(AnsiColor::Yellow.on_default().bold())
		.literal(AnsiColor::Green.on_default().bold())
		.placeholder(AnsiColor::Blue.on_default())
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Red.on_default().bold())
		.error(AnsiColor::Red.on_default().bold())
}
