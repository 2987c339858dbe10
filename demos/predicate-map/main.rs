//! Renders the sign of a predicate over a 256 × 256 grid of consecutive
//! floating point numbers as a grayscale PNG: black for negative, gray for
//! zero and white for positive.
//!
//! The plain `f64` predicates produce a noisy band around the degenerate
//! line; the sign-exact ones produce a clean split.

use std::cmp::Ordering;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use float_extras::f64::nextafter;
use nalgebra::SMatrix;
use robust_nd::{incircle, naive, orient2d, Coord};

fn columns<const M: usize>(points: [Coord<f64>; M]) -> SMatrix<f64, 2, M> {
    SMatrix::from_fn(|r, c| if r == 0 { points[c].x } else { points[c].y })
}

fn sign_map<F>(predicate: F, start: Coord<f64>, width: usize, height: usize) -> Vec<Ordering>
where
    F: Fn(Coord<f64>) -> f64,
{
    let mut yd = start.y;
    let mut data = Vec::with_capacity(width * height);

    for _ in 0..height {
        let mut xd = start.x;
        for _ in 0..width {
            let p = Coord { x: xd, y: yd };
            data.push(predicate(p).partial_cmp(&0.).unwrap_or(Ordering::Equal));
            xd = nextafter(xd, f64::INFINITY);
        }
        yd = nextafter(yd, f64::INFINITY);
    }

    data
}

fn write_png(data: &[Ordering], path: &Path, width: usize, height: usize) -> Result<(), png::EncodingError> {
    assert_eq!(data.len(), width * height);

    let file = File::create(path)?;
    let w = &mut BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width as u32, height as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    let pixels = data
        .iter()
        .map(|sign| match sign {
            Ordering::Less => 0u8,
            Ordering::Equal => 127,
            Ordering::Greater => 255,
        })
        .collect::<Vec<_>>();
    writer.write_image_data(&pixels)
}

fn usage(name: &str) -> ! {
    eprintln!(
        "Usage: {} {{naive | exact}} {{incircle | orient2d}} <output.png>",
        name
    );
    std::process::exit(1);
}

fn main() {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 4 {
        usage(&args[0])
    }

    let p1 = Coord { x: 12., y: 12. };
    let p2 = Coord { x: 24., y: 24. };
    let p3 = Coord { x: -12., y: -12. };
    let predicate: Box<dyn Fn(Coord<f64>) -> f64> = match (args[1].as_str(), args[2].as_str()) {
        ("naive", "incircle") => Box::new(move |p| naive::insphere(&columns([p1, p3, p2, p]))),
        ("naive", "orient2d") => Box::new(move |p| naive::orientation(&columns([p1, p, p2]))),
        ("exact", "incircle") => Box::new(move |p| incircle(p1, p3, p2, p)),
        ("exact", "orient2d") => Box::new(move |p| orient2d(p1, p, p2)),
        _ => usage(&args[0]),
    };

    let data = sign_map(predicate, Coord { x: 0.5, y: 0.5 }, 256, 256);
    if let Err(err) = write_png(&data, Path::new(&args[3]), 256, 256) {
        eprintln!("failed to write {}: {}", args[3], err);
        std::process::exit(1);
    }
}
