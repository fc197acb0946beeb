#![forbid(unsafe_code)]

//! `bitpaint-demo` binary entry point.

use std::fs::File;
use std::io::{self, BufWriter};

use bitpaint_harness::scene::{self, Scene};
use bitpaint_harness::{cli, surface_checksum, write_ppm};
use bitpaint_render::PixelBuffer;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(opts: &cli::Opts) -> io::Result<()> {
    let mut buf = PixelBuffer::new(opts.width, opts.height);
    let mut surface = buf.surface();
    scene::render(&mut surface, &Scene::sample(opts.width, opts.height));

    let file = File::create(&opts.out)?;
    write_ppm(BufWriter::new(file), &surface)?;

    tracing::info!(
        path = %opts.out.display(),
        width = opts.width,
        height = opts.height,
        checksum = %surface_checksum(&surface),
        "wrote frame"
    );
    Ok(())
}

fn main() {
    let opts = cli::Opts::parse();
    init_tracing();

    if let Err(e) = run(&opts) {
        eprintln!("Failed to write {}: {e}", opts.out.display());
        std::process::exit(1);
    }
}
