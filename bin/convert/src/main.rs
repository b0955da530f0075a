//! Print an RGB color in the other notations supported by rgb-convert.

use anyhow::{bail, Context};
use clap::Parser;
use rgb_convert::{Converter, Rgb, Target, Targets};

#[derive(Parser, Debug)]
#[command(author, version, about, arg_required_else_help = true)]
struct Cli {
    /// The color as three channels (`255 0 0`) or a hex value (`#FF0000`).
    #[arg(required = true, num_args = 1..=3, allow_negative_numbers = true)]
    color: Vec<String>,

    /// Notations to convert to, all of them if omitted.
    #[arg(long = "to", short = 't', value_delimiter = ',')]
    to: Vec<Target>,
}

fn parse_hex(hex: &str) -> anyhow::Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("expected six hex digits, got {hex:?}");
    }

    let channel = |at: usize| {
        u8::from_str_radix(&digits[at..at + 2], 16)
            .with_context(|| format!("invalid hex color {hex:?}"))
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

fn parse_color(args: &[String]) -> anyhow::Result<Rgb> {
    match args {
        [hex] => parse_hex(hex),
        [red, green, blue] => {
            let mut channels = [0i64; 3];
            for (channel, arg) in channels.iter_mut().zip([red, green, blue]) {
                *channel = arg
                    .parse()
                    .with_context(|| format!("invalid channel {arg:?}"))?;
            }
            Ok(Rgb::try_from(channels)?)
        }
        _ => bail!(
            "expected a hex color or three channels, got {} values",
            args.len()
        ),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let rgb = parse_color(&cli.color)?;

    let targets = if cli.to.is_empty() {
        Targets::all()
    } else {
        cli.to.iter().copied().collect()
    };
    log::debug!("converting {rgb} to {targets:?}");

    let converter: Converter = Converter::default();
    for (target, result) in converter.convert_many(rgb, targets) {
        match result {
            Ok(converted) => println!("{target}: {converted}"),
            Err(err) => println!("{target}: {err}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn channels() {
        assert_eq!(
            parse_color(&args(&["255", "75", "42"])).unwrap(),
            Rgb::new(255, 75, 42)
        );
        assert!(parse_color(&args(&["256", "0", "0"])).is_err());
        assert!(parse_color(&args(&["-1", "0", "0"])).is_err());
        assert!(parse_color(&args(&["red", "0", "0"])).is_err());
        assert!(parse_color(&args(&["1", "2"])).is_err());
    }

    #[test]
    fn hex() {
        assert_eq!(
            parse_color(&args(&["#FF4B2A"])).unwrap(),
            Rgb::new(255, 75, 42)
        );
        assert_eq!(parse_color(&args(&["008080"])).unwrap(), Rgb::new(0, 128, 128));
        assert!(parse_color(&args(&["#FFF"])).is_err());
        assert!(parse_color(&args(&["#GG0000"])).is_err());
        assert!(parse_color(&args(&["+F0000"])).is_err());
    }

    #[test]
    fn cli_parses_targets() {
        let cli = Cli::try_parse_from(["rgb-convert", "--to", "hex,hsl", "0", "0", "0"]).unwrap();
        assert_eq!(cli.to, vec![Target::Hex, Target::Hsl]);
        assert_eq!(cli.color, args(&["0", "0", "0"]));

        assert!(Cli::try_parse_from(["rgb-convert", "--to", "lab", "#000000"]).is_err());
    }
}
