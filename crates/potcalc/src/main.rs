use clap::Parser;
use potgeom::{Cylinder, Pot, VolumeModel, volume_to_liters};

/// Compute how much soil a plant pot holds.
///
/// Measurements are in centimeters. A pot is described by its base
/// diameter, top diameter and height; straight-walled pots (equal
/// diameters) are allowed.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Diameter measured at the base of the pot
    base: f64,

    /// Diameter measured at the top of the pot
    top: f64,

    /// Height of the pot
    height: f64,

    /// A second pot (BASE TOP HEIGHT) to compare against
    #[arg(long, num_args = 3, value_names = ["BASE", "TOP", "HEIGHT"])]
    compare: Option<Vec<f64>>,
}

fn pot_volume(base: f64, top: f64, height: f64) -> eyre::Result<f64> {
    if top == base {
        let cylinder = Cylinder {
            radius: base / 2.,
            height,
        };
        eyre::ensure!(
            cylinder.is_non_zero(),
            "pot measurements must be strictly positive, got base {base}, top {top}, height {height}"
        );
        return Ok(cylinder.volume());
    }
    Ok(Pot::new(base, top, height)?.volume())
}

fn report(label: &str, base: f64, top: f64, height: f64) -> eyre::Result<f64> {
    let volume = pot_volume(base, top, height)?;
    log::info!(
        "{label} {base}x{top}x{height} cm holds {volume:.1} cm3 ({:.2} l)",
        volume_to_liters(volume)
    );
    Ok(volume)
}

fn main_impl() -> eyre::Result<()> {
    let args = Args::parse();

    let volume = report("pot", args.base, args.top, args.height)?;

    if let Some(other) = &args.compare {
        let other_volume = report("other pot", other[0], other[1], other[2])?;
        log::info!(
            "difference in volume is {:.1} cm3",
            (volume - other_volume).abs()
        );
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .parse_filters("info")
        .init();

    match main_impl() {
        Ok(()) => {}
        Err(err) => {
            log::error!("Failure: {err:?}");
            std::process::exit(1);
        }
    }
}
