use std::collections::HashMap;

use image::RgbaImage;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Independent k-means restarts; the lowest-inertia run wins.
const RESTARTS: u64 = 10;
/// Iteration cap per restart.
const MAX_ITERATIONS: usize = 300;
/// Squared centroid shift below which a restart is considered converged.
const CONVERGENCE_TOL: f64 = 1e-8;

/// Unique exact RGBA colors and their pixel counts, in first-occurrence
/// row-major scan order.
fn color_histogram(image: &RgbaImage) -> Vec<([u8; 4], usize)> {
    let mut index: HashMap<[u8; 4], usize> = HashMap::new();
    let mut histogram: Vec<([u8; 4], usize)> = Vec::new();
    for pixel in image.pixels() {
        match index.get(&pixel.0) {
            Some(&slot) => histogram[slot].1 += 1,
            None => {
                index.insert(pixel.0, histogram.len());
                histogram.push((pixel.0, 1));
            }
        }
    }
    histogram
}

/// Number of distinct exact RGBA colors in the image.
pub fn unique_color_count(image: &RgbaImage) -> usize {
    color_histogram(image).len()
}

fn distance_squared(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

fn weighted_pick(weights: &[f64], total: f64, rng: &mut ChaCha8Rng) -> usize {
    let mut r = rng.r#gen::<f64>() * total;
    for (i, &w) in weights.iter().enumerate() {
        r -= w;
        if r <= 0.0 {
            return i;
        }
    }
    weights.len() - 1
}

/// k-means++ seeding over frequency-weighted color points.
fn init_centroids(
    points: &[[f64; 4]],
    counts: &[f64],
    k: usize,
    rng: &mut ChaCha8Rng,
) -> Vec<[f64; 4]> {
    let total: f64 = counts.iter().sum();
    let mut centroids = vec![points[weighted_pick(counts, total, rng)]];

    let mut best_dist = vec![f64::INFINITY; points.len()];
    while centroids.len() < k {
        let last = centroids[centroids.len() - 1];
        let mut weights = vec![0.0; points.len()];
        let mut weight_total = 0.0;
        for (i, point) in points.iter().enumerate() {
            best_dist[i] = best_dist[i].min(distance_squared(point, &last));
            weights[i] = best_dist[i] * counts[i];
            weight_total += weights[i];
        }
        let next = if weight_total > 0.0 {
            weighted_pick(&weights, weight_total, rng)
        } else {
            rng.gen_range(0..points.len())
        };
        centroids.push(points[next]);
    }
    centroids
}

/// Assign every point to its nearest centroid (lowest index on ties).
/// Returns the frequency-weighted inertia of the assignment.
fn assign_points(
    points: &[[f64; 4]],
    counts: &[f64],
    centroids: &[[f64; 4]],
    assignment: &mut [usize],
) -> f64 {
    let mut inertia = 0.0;
    for (i, point) in points.iter().enumerate() {
        let mut best = 0;
        let mut best_dist = distance_squared(point, &centroids[0]);
        for (c, centroid) in centroids.iter().enumerate().skip(1) {
            let dist = distance_squared(point, centroid);
            if dist < best_dist {
                best = c;
                best_dist = dist;
            }
        }
        assignment[i] = best;
        inertia += best_dist * counts[i];
    }
    inertia
}

/// One full Lloyd's run from a seeded k-means++ start.
fn run_lloyd(
    points: &[[f64; 4]],
    counts: &[f64],
    k: usize,
    mut rng: ChaCha8Rng,
) -> (Vec<[f64; 4]>, Vec<usize>, f64) {
    let mut centroids = init_centroids(points, counts, k, &mut rng);
    let mut assignment = vec![0usize; points.len()];
    let mut inertia = assign_points(points, counts, &centroids, &mut assignment);

    for _ in 0..MAX_ITERATIONS {
        let mut sums = vec![[0.0f64; 4]; k];
        let mut weights = vec![0.0f64; k];
        for (i, point) in points.iter().enumerate() {
            let cluster = assignment[i];
            for channel in 0..4 {
                sums[cluster][channel] += point[channel] * counts[i];
            }
            weights[cluster] += counts[i];
        }

        let mut shift = 0.0f64;
        for cluster in 0..k {
            // Clusters emptied by reassignment keep their previous centroid
            if weights[cluster] > 0.0 {
                let updated = [
                    sums[cluster][0] / weights[cluster],
                    sums[cluster][1] / weights[cluster],
                    sums[cluster][2] / weights[cluster],
                    sums[cluster][3] / weights[cluster],
                ];
                shift = shift.max(distance_squared(&centroids[cluster], &updated));
                centroids[cluster] = updated;
            }
        }

        inertia = assign_points(points, counts, &centroids, &mut assignment);
        if shift < CONVERGENCE_TOL {
            break;
        }
    }

    (centroids, assignment, inertia)
}

/// Quantize the image palette to at most `n_colors` exact RGBA colors using
/// seeded k-means over (R, G, B, A) as 4-dimensional points. If the image
/// already has `n_colors` or fewer unique colors the input is returned
/// unchanged. Same input, seed, and target always produce the same output.
pub fn cluster_colors(image: &RgbaImage, n_colors: usize, seed: u64) -> Result<RgbaImage> {
    if n_colors == 0 {
        return Err(Error::InvalidArgument {
            arg: "colors",
            value: n_colors.to_string(),
        });
    }

    let histogram = color_histogram(image);
    let unique = histogram.len();
    info!("Image has {} unique colors", unique);

    let k = n_colors.min(unique);
    if k == unique {
        info!("Palette already within {} colors; skipping clustering", n_colors);
        return Ok(image.clone());
    }
    info!("Clustering to {} colors", k);

    let points: Vec<[f64; 4]> = histogram
        .iter()
        .map(|(color, _)| {
            [
                color[0] as f64,
                color[1] as f64,
                color[2] as f64,
                color[3] as f64,
            ]
        })
        .collect();
    let counts: Vec<f64> = histogram.iter().map(|(_, count)| *count as f64).collect();

    let mut best: Option<(Vec<[f64; 4]>, Vec<usize>, f64)> = None;
    for restart in 0..RESTARTS {
        let rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(restart));
        let run = run_lloyd(&points, &counts, k, rng);
        debug!("k-means restart {}: inertia {:.3}", restart, run.2);
        if best.as_ref().is_none_or(|(_, _, inertia)| run.2 < *inertia) {
            best = Some(run);
        }
    }
    let (centroids, assignment, inertia) = best.expect("at least one restart runs");
    debug!("k-means best inertia: {:.3}", inertia);

    let rounded: Vec<[u8; 4]> = centroids
        .iter()
        .map(|c| {
            [
                c[0].round().clamp(0.0, 255.0) as u8,
                c[1].round().clamp(0.0, 255.0) as u8,
                c[2].round().clamp(0.0, 255.0) as u8,
                c[3].round().clamp(0.0, 255.0) as u8,
            ]
        })
        .collect();

    let remap: HashMap<[u8; 4], [u8; 4]> = histogram
        .iter()
        .enumerate()
        .map(|(i, (color, _))| (*color, rounded[assignment[i]]))
        .collect();

    let mut output = image.clone();
    for pixel in output.pixels_mut() {
        pixel.0 = remap[&pixel.0];
    }
    info!("Color clustering complete: remapped to {} colors", k);
    Ok(output)
}
