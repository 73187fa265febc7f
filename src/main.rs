use {
  std::{path::PathBuf, process},
  anyhow::{Context, Result},
  clap::{ArgAction, CommandFactory, Parser},
  humansize::{FileSize, file_size_opts as options},
  stained_glass::{
    composition::{render_to_file, OutputFormat},
    config::{self, CellFill, Config},
    profile
  }
};

const USAGE: &str = "Usage: stained-glass [<out>]";
const DEFAULT_OUTPUT: &str = "output.svg";

/// Generate a stained-glass image: translucent blobs under a Voronoi lattice seeded
/// along their rims.
#[derive(Parser, Debug)]
#[command(version, disable_help_flag = true)]
struct Cli {
  /// Output file; `.png` renders a raster image, anything else SVG.
  out: Vec<PathBuf>,
  /// Canvas width in pixels.
  #[arg(short, long, default_value_t = config::DEFAULT_WIDTH)]
  width: u32,
  /// Canvas height in pixels.
  #[arg(short, long, default_value_t = config::DEFAULT_HEIGHT)]
  height: u32,
  /// Comma-separated hex colors used for the background and blobs.
  #[arg(long, value_delimiter = ',')]
  palette: Option<Vec<String>>,
  /// Fixed background color instead of a random palette entry.
  #[arg(long)]
  background: Option<String>,
  /// Background luminance below which outlines are white.
  #[arg(long, default_value_t = config::DEFAULT_LUMINANCE_THRESHOLD)]
  threshold: f64,
  /// Arc length between perimeter seeds.
  #[arg(long, default_value_t = config::DEFAULT_RESOLUTION)]
  resolution: f64,
  /// Outline cells without filling them.
  #[arg(long)]
  hollow: bool,
  /// Print help.
  #[arg(long, action = ArgAction::Help)]
  help: Option<bool>,
}

impl Cli {
  fn config(&self) -> Result<Config> {
    let mut config = Config::new(self.width, self.height)?
      .with_threshold(self.threshold)?
      .with_resolution(self.resolution)?;
    if let Some(palette) = &self.palette {
      config = config.with_palette(palette.as_slice())?;
    }
    if let Some(background) = &self.background {
      config = config.with_background(background)?;
    }
    if self.hollow {
      config = config.with_cell_fill(CellFill::Hollow);
    }
    Ok(config)
  }
}

/// The single output path, `output.svg` when none is given; `None` for more than one.
fn output_path(out: &[PathBuf]) -> Option<PathBuf> {
  match out {
    [] => Some(PathBuf::from(DEFAULT_OUTPUT)),
    [path] => Some(path.clone()),
    _ => None
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  let path = match output_path(&cli.out) {
    Some(path) => path,
    None => {
      println!("{}\n\n{}", USAGE, Cli::command().render_help());
      process::exit(1);
    }
  };
  let config = cli.config()?;

  println!("Creating {} ( {} x {} )", OutputFormat::from_path(&path), config.width(), config.height());
  let composition = profile!("render", render_to_file(&config, &mut rand::thread_rng(), &path))
    .with_context(|| format!("failed to render {}", path.display()))?;

  println!(
    "{} blobs, {} seeds, {} cells",
    composition.blobs,
    composition.seeds.len(),
    composition.cells.len()
  );
  let written = std::fs::metadata(&path)?.len();
  println!(
    "{}: {}",
    path.display(),
    written.file_size(options::CONVENTIONAL).unwrap_or_else(|_| format!("{} B", written))
  );
  Ok(())
}

#[cfg(test)] mod tests {
  use super::*;

  #[test] fn command_is_well_formed() {
    Cli::command().debug_assert();
  }

  #[test] fn defaults() -> Result<()> {
    let cli = Cli::try_parse_from(["stained-glass"])?;
    assert_eq!((cli.width, cli.height), (5120, 2880));
    assert_eq!(output_path(&cli.out), Some(PathBuf::from("output.svg")));
    assert!(!cli.hollow);

    let config = cli.config()?;
    assert_eq!((config.width(), config.height()), (5120, 2880));
    assert_eq!(config.cell_fill, CellFill::InheritLast);
    Ok(())
  }

  #[test] fn short_h_is_height() -> Result<()> {
    let cli = Cli::try_parse_from(["stained-glass", "-h", "100", "-w", "200", "out.png"])?;
    assert_eq!((cli.width, cli.height), (200, 100));
    assert_eq!(output_path(&cli.out), Some(PathBuf::from("out.png")));
    assert_eq!(
      Cli::try_parse_from(["stained-glass", "--help"]).map_err(|e| e.kind()).err(),
      Some(clap::error::ErrorKind::DisplayHelp)
    );
    Ok(())
  }

  #[test] fn more_than_one_output() -> Result<()> {
    let cli = Cli::try_parse_from(["stained-glass", "a.svg", "b.svg"])?;
    assert_eq!(output_path(&cli.out), None);
    Ok(())
  }

  #[test] fn added_flags() -> Result<()> {
    let cli = Cli::try_parse_from([
      "stained-glass", "--palette", "#000,#fff,#f00", "--background", "#f00",
      "--threshold", "0.5", "--resolution", "40", "--hollow"
    ])?;
    let config = cli.config()?;
    assert_eq!(config.palette.colors().len(), 3);
    assert_eq!(config.background, Some(stained_glass::color::Color::new(255, 0, 0)));
    assert_eq!(config.luminance_threshold, 0.5);
    assert_eq!(config.resolution, 40.0);
    assert_eq!(config.cell_fill, CellFill::Hollow);

    let tiny = Cli::try_parse_from(["stained-glass", "--resolution", "1e-9"])?;
    assert!(tiny.config().is_err());
    Ok(())
  }
}
