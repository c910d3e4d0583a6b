use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use strokefit::{FitConfig, Point};

#[derive(Parser)]
#[command(name = "strokefit", about = "Fit a cubic bezier to each sampled stroke")]
struct Cli {
    /// Point file: one `x,y` per line, blank lines between strokes (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print the fitted curve flattened to this many points (at least 2)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(2..))]
    samples: Option<u64>,

    /// Print each curve as SVG path data
    #[arg(long)]
    svg: bool,

    /// Print per-stroke residual statistics
    #[arg(long)]
    report: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let strokes = match &cli.input {
        Some(path) => strokefit::input::read_strokes(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            strokefit::input::parse_strokes(&text)?
        }
    };
    if strokes.is_empty() {
        return Err("no points in input".into());
    }

    let mut config = FitConfig::default();
    if let Some(n) = cli.samples {
        config.samples = usize::try_from(n)?;
    }

    let total_points: usize = strokes.iter().map(Vec::len).sum();
    eprintln!();
    eprintln!("  strokefit \u{00b7} {} strokes, {} points", strokes.len(), total_points);
    eprintln!();

    let results = strokefit::fit_strokes(&strokes, &config);
    let mut failed = 0;
    for (i, (stroke, result)) in strokes.iter().zip(results).enumerate() {
        let curve = match result {
            Ok(curve) => curve,
            Err(err) => {
                eprintln!("  Stroke {:<4} {} points \u{2717} {}", i, stroke.len(), err);
                failed += 1;
                continue;
            }
        };
        let error = strokefit::evaluate_bezier(&curve, stroke)?;
        eprintln!("  Stroke {:<4} {} points \u{00b7} error {:.6}", i, stroke.len(), error);
        println!("{}", curve);

        if cli.svg {
            println!("{}", curve.to_svg());
        }
        if cli.report {
            print!("{}", strokefit::evaluate_report(&curve, stroke)?);
        }
        if cli.samples.is_some() {
            print_polyline(&curve.sample(config.samples)?);
        }
    }

    eprintln!();
    if failed > 0 {
        return Err(format!("{} of {} strokes could not be fitted", failed, strokes.len()).into());
    }
    Ok(())
}

fn print_polyline(points: &[Point]) {
    for p in points {
        println!("{},{}", p.x, p.y);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_below_two_are_rejected() {
        assert!(Cli::try_parse_from(["strokefit", "--samples", "0"]).is_err());
        assert!(Cli::try_parse_from(["strokefit", "--samples", "1"]).is_err());
        let cli = Cli::try_parse_from(["strokefit", "--samples", "2"]).unwrap();
        assert_eq!(cli.samples, Some(2));
        assert!(Cli::try_parse_from(["strokefit"]).unwrap().samples.is_none());
    }
}
