use glint::{
    accel::{Accelerator, AcceleratorType},
    geometry::{Geometries, Geometry},
    math::{point3, vec3, Ray},
    shapes::Sphere,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use std::time::Instant;

const RAYS: usize = 200000;

fn random_spheres(rng: &mut Pcg32, count: usize) -> Geometries {
    let mut ret = Geometries::new();
    for _ in 0..count {
        let center = point3(
            rng.gen_range(-50.0..50.0),
            rng.gen_range(-50.0..50.0),
            rng.gen_range(-50.0..50.0),
        );
        let radius = rng.gen_range(0.2..1.5);
        if let Ok(sphere) = Sphere::new(center, radius) {
            ret.add(Geometry::new(sphere));
        }
    }
    ret
}

fn random_rays(rng: &mut Pcg32) -> Vec<Ray<f32>> {
    let mut ret = Vec::with_capacity(RAYS);
    while ret.len() < RAYS {
        let o = point3(
            rng.gen_range(-60.0..60.0),
            rng.gen_range(-60.0..60.0),
            rng.gen_range(-60.0..60.0),
        );
        let d = vec3(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if let Ok(ray) = Ray::new(o, d) {
            ret.push(ray);
        }
    }
    ret
}

fn bench_nearest(accel: &dyn Accelerator, rays: &[Ray<f32>]) -> usize {
    let start = Instant::now();
    let mut hits = 0;
    for ray in rays {
        if accel.nearest_hit(ray).is_some() {
            hits += 1;
        }
    }
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let us_per_ray = (elapsed_ns as f64) * 1e-3 / (rays.len() as f64);
    println!(
        "  nearest took {:7.1} ms total, {:0.4} us per ray, {} hits",
        elapsed_ms, us_per_ray, hits
    );
    hits
}

fn main() {
    let mut rng = Pcg32::seed_from_u64(0xb3a5);
    let rays = random_rays(&mut rng);

    for count in [10, 100, 1000, 10000] {
        let scene_rng = Pcg32::seed_from_u64(count as u64);
        println!("{} spheres", count);

        let mut hit_counts = Vec::new();
        for accelerator in [
            AcceleratorType::Linear,
            AcceleratorType::VoxelGrid { density: 1.0 },
            AcceleratorType::default(),
            AcceleratorType::VoxelGrid { density: 16.0 },
        ] {
            let accel = accelerator.build(random_spheres(&mut scene_rng.clone(), count));
            println!(" {:?}", accelerator);
            hit_counts.push(bench_nearest(accel.as_ref(), &rays));
        }

        if hit_counts.windows(2).any(|w| w[0] != w[1]) {
            panic!("Accelerators disagree on hit counts: {:?}", hit_counts);
        }
    }
}
