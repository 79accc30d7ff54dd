use anyhow::Context;
use clap::{ArgAction, Parser};
use spinner_color::util::{PALETTE, resolve_color};
use spinner_color::{Color, Config};

#[derive(Parser, Debug)]
#[command(name = "spinner-color")]
#[command(version, about = "CSS-compatible RGBA colors for loading spinners")]
struct Cli {
    /// Colors to convert: palette names or hex strings (#RGB, #RGBA, #RRGGBB, #RRGGBBAA)
    #[arg(value_name = "COLOR")]
    colors: Vec<String>,

    /// Print colors as hex instead of rgba()
    #[arg(long, short = 'x', action = ArgAction::SetTrue)]
    hex: bool,

    /// List the predefined palette
    #[arg(long, short = 'p', action = ArgAction::SetTrue)]
    palette: bool,

    /// Print the spinner colors resolved from the config file
    #[arg(long, action = ArgAction::SetTrue)]
    show_config: bool,

    /// Write a documented default config file
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "show_config")]
    init_config: bool,
}

impl Cli {
    fn render(&self, color: Color) -> String {
        if self.hex {
            color.to_hex()
        } else {
            color.to_string()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    if !cli.palette && !cli.show_config && cli.colors.is_empty() {
        // No flags: show usage
        println!("spinner-color: CSS-compatible RGBA colors for loading spinners");
        println!();
        println!("Usage:");
        println!("  spinner-color '#F00' 3498DB80   Convert colors to rgba()");
        println!("  spinner-color --hex white       Convert colors to hex");
        println!("  spinner-color --palette         List predefined colors");
        println!("  spinner-color --show-config     Print configured spinner colors");
        println!("  spinner-color --init-config     Write a default config file");
        println!("  spinner-color --help            Show help");
        return Ok(());
    }

    if cli.palette {
        for (name, color) in PALETTE {
            println!("{}: {}", name, cli.render(color));
        }
    }

    if cli.show_config {
        let config = Config::load()?;
        println!("color: {}", cli.render(config.spinner.resolved_color()));
        println!(
            "track_color: {}",
            cli.render(config.spinner.resolved_track_color())
        );
    }

    for text in &cli.colors {
        let color =
            resolve_color(text).with_context(|| format!("Failed to convert color '{text}'"))?;
        log::debug!("{} -> {:?}", text, color);
        println!("{}", cli.render(color));
    }

    Ok(())
}
