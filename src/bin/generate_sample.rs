use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use xvg_plot::rng::SimpleRng;

/// One synthetic observable in the style of a GROMACS analysis tool.
struct Observable {
    file: &'static str,
    title: &'static str,
    y_label: &'static str,
    /// y as a function of time (ps) before noise.
    signal: fn(f64) -> f64,
    noise: f64,
}

const OBSERVABLES: &[Observable] = &[
    Observable {
        file: "rmsd_backbone.xvg",
        title: "RMSD",
        y_label: "RMSD (nm)",
        signal: |t| 0.25 * (1.0 - (-t / 400.0).exp()),
        noise: 0.01,
    },
    Observable {
        file: "temperature.xvg",
        title: "GROMACS Energies",
        y_label: "(K)",
        signal: |_| 300.0,
        noise: 2.0,
    },
    Observable {
        file: "pressure.xvg",
        title: "GROMACS Energies",
        y_label: "(bar)",
        signal: |_| 1.0,
        noise: 120.0,
    },
    Observable {
        file: "potential.xvg",
        title: "GROMACS Energies",
        y_label: "(kJ/mol)",
        signal: |t| -4.52e5 + 800.0 * (-t / 150.0).exp(),
        noise: 350.0,
    },
];

/// Box-Muller transform for normal distribution
fn gauss(rng: &mut SimpleRng, mean: f64, std_dev: f64) -> f64 {
    let u1 = rng.next_f64().max(1e-15);
    let u2 = rng.next_f64();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

const N_FRAMES: usize = 501;
const DT_PS: f64 = 2.0;

fn write_observable(
    dir: &Path,
    obs: &Observable,
    rng: &mut SimpleRng,
) -> std::io::Result<PathBuf> {
    let path = dir.join(obs.file);
    let mut out = BufWriter::new(File::create(&path)?);

    writeln!(out, "# This file was created by generate_sample")?;
    writeln!(out, "# Synthetic data, not from a simulation")?;
    writeln!(out, "@    title \"{}\"", obs.title)?;
    writeln!(out, "@    xaxis  label \"Time (ps)\"")?;
    writeln!(out, "@    yaxis  label \"{}\"", obs.y_label)?;
    writeln!(out, "@TYPE xy")?;

    for i in 0..N_FRAMES {
        let t = i as f64 * DT_PS;
        let y = (obs.signal)(t) + gauss(rng, 0.0, obs.noise);
        writeln!(out, "{t:>12.3} {y:>14.6}")?;
    }
    out.flush()?;
    Ok(path)
}

fn main() -> std::io::Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)?;

    let mut rng = SimpleRng::new(42);
    for obs in OBSERVABLES {
        let path = write_observable(&dir, obs, &mut rng)?;
        println!("Wrote {N_FRAMES} frames to {}", path.display());
    }
    Ok(())
}
