// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use rand::Rng;

use crate::geometry::{Point2, Polygon};

const SEEDS_PER_CENTROID: usize = 10;
const MAX_ITERATIONS: usize = 100;
const TOLERANCE: f64 = 1e-4;

/// Centroidal Voronoi approximation via k-means (Lloyd relaxation).
///
/// Clusters `10k` uniform random seeds in the unit square into
/// `k = count * bbox_area / polygon_area` centroids, where the ratio
/// compensates for the fraction of the bounding box the polygon actually
/// covers. Cluster centers are rescaled into the bounding box and filtered
/// for polygon containment, so the final count is approximate.
pub fn sample<R: Rng + ?Sized>(polygon: &Polygon, count: usize, rng: &mut R) -> Vec<Point2> {
    let area = polygon.area();
    let bb = polygon.aabb();
    if count == 0 || area <= 0.0 {
        return Vec::new();
    }

    let k = ((count as f64 * bb.area() / area).round() as usize).max(1);
    let seeds: Vec<Point2> = (0..k * SEEDS_PER_CENTROID)
        .map(|_| Point2::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
        .collect();

    let centroids = k_means(&seeds, k, rng);

    let scale = bb.max_extent();
    centroids
        .into_iter()
        .map(|c| Point2::new(c.x * scale + bb.min.x, c.y * scale + bb.min.y))
        .filter(|p| polygon.contains(p))
        .collect()
}

/// Lloyd's algorithm with k-means++ seeding, bounded to [`MAX_ITERATIONS`]
/// rounds or a maximum center shift below [`TOLERANCE`].
fn k_means<R: Rng + ?Sized>(seeds: &[Point2], k: usize, rng: &mut R) -> Vec<Point2> {
    if seeds.is_empty() {
        return Vec::new();
    }
    let k = k.min(seeds.len());
    let mut centers = plus_plus_init(seeds, k, rng);

    let mut assignment = vec![0usize; seeds.len()];
    for _ in 0..MAX_ITERATIONS {
        for (i, s) in seeds.iter().enumerate() {
            assignment[i] = nearest(s, &centers);
        }

        let mut sums = vec![(0.0, 0.0, 0usize); k];
        for (i, s) in seeds.iter().enumerate() {
            let slot = &mut sums[assignment[i]];
            slot.0 += s.x;
            slot.1 += s.y;
            slot.2 += 1;
        }

        let mut shift: f64 = 0.0;
        for (ci, &(sx, sy, n)) in sums.iter().enumerate() {
            if n == 0 {
                continue; // empty cluster keeps its previous center
            }
            let updated = Point2::new(sx / n as f64, sy / n as f64);
            shift = shift.max(centers[ci].distance_to(&updated));
            centers[ci] = updated;
        }
        if shift < TOLERANCE {
            break;
        }
    }

    centers
}

/// k-means++ seeding: each next center is drawn with probability
/// proportional to its squared distance from the nearest chosen center.
fn plus_plus_init<R: Rng + ?Sized>(seeds: &[Point2], k: usize, rng: &mut R) -> Vec<Point2> {
    let mut centers = Vec::with_capacity(k);
    centers.push(seeds[rng.random_range(0..seeds.len())]);

    let mut dist_sq: Vec<f64> = seeds
        .iter()
        .map(|s| s.distance_squared_to(&centers[0]))
        .collect();

    while centers.len() < k {
        let total: f64 = dist_sq.iter().sum();
        let next = if total > 0.0 {
            let mut target = rng.random_range(0.0..total);
            let mut chosen = seeds.len() - 1;
            for (i, d) in dist_sq.iter().enumerate() {
                if target < *d {
                    chosen = i;
                    break;
                }
                target -= d;
            }
            seeds[chosen]
        } else {
            // all seeds coincide with a center already
            seeds[rng.random_range(0..seeds.len())]
        };
        centers.push(next);
        for (i, s) in seeds.iter().enumerate() {
            dist_sq[i] = dist_sq[i].min(s.distance_squared_to(&next));
        }
    }

    centers
}

fn nearest(p: &Point2, centers: &[Point2]) -> usize {
    let mut best = 0;
    let mut best_d = f64::INFINITY;
    for (i, c) in centers.iter().enumerate() {
        let d = p.distance_squared_to(c);
        if d < best_d {
            best_d = d;
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::k_means;
    use crate::geometry::Point2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn k_means_separates_two_clusters() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seeds = Vec::new();
        for i in 0..50 {
            let t = i as f64 * 1e-3;
            seeds.push(Point2::new(0.1 + t, 0.1));
            seeds.push(Point2::new(0.9 - t, 0.9));
        }
        let mut centers = k_means(&seeds, 2, &mut rng);
        centers.sort_by(|a, b| a.x.total_cmp(&b.x));
        assert!(centers[0].x < 0.3 && centers[0].y < 0.3);
        assert!(centers[1].x > 0.7 && centers[1].y > 0.7);
    }
}
