//! Writes uniformly sampled hemisphere directions to stdout, one `x y z` line
//! per direction, for plotting the point cloud with an external tool.

extern crate anyhow;
extern crate hemisphere_sampling;
extern crate rand;
extern crate structopt;
#[macro_use]
extern crate tracing;
extern crate tracing_subscriber;

use anyhow::Context;
use hemisphere_sampling::{FromRng, Hemisphere, NormalPolicy, RandomSource, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use std::io::{self, BufWriter, Write};

#[derive(Debug, StructOpt)]
#[structopt(name = "hemisphere-cloud")]
struct Opt {
    /// Normal of the hemisphere as comma separated components
    #[structopt(long, default_value = "1,1,1", parse(try_from_str = parse_vec3))]
    normal: Vec3,

    /// Amount of directions to write
    #[structopt(long, default_value = "1000")]
    count: usize,

    /// Seed for reproducible output, random if omitted
    #[structopt(long)]
    seed: Option<u64>,

    /// How to treat a normal that is not unit length: trust, validate or renormalize
    #[structopt(long, default_value = "renormalize")]
    policy: NormalPolicy,
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let components = s
        .split(',')
        .map(|c| c.trim().parse::<f32>().map_err(|e| format!("{}: {}", c, e)))
        .collect::<Result<Vec<_>, _>>()?;

    match components.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("Expected three components, got \"{}\"", s)),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let opt = Opt::from_args();
    debug!(?opt, "parsed options");

    let hemisphere = Hemisphere::with_policy(opt.normal, opt.policy)
        .with_context(|| format!("cannot sample around normal {:?}", opt.normal))?;

    let rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_cloud(&hemisphere, opt.count, &mut FromRng(rng), &mut out)?;
    out.flush()?;

    info!(count = opt.count, "wrote point cloud");
    Ok(())
}

fn write_cloud<R, W>(hemisphere: &Hemisphere, count: usize, rng: &mut R, out: &mut W) -> anyhow::Result<()>
where
    R: RandomSource + ?Sized,
    W: Write,
{
    for dir in hemisphere.directions(rng).take(count) {
        let dir = dir?;
        writeln!(out, "{} {} {}", dir.x, dir.y, dir.z)?;
    }

    Ok(())
}
