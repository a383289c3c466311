use crate::{
    camera::Camera,
    film::Film,
    integrators::{RadianceResult, Whitted},
    math::{Spectrum, BLACK},
    scene::Scene,
};

use rayon::prelude::*;

use std::{
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
    time::Instant,
};

/// Result of a finished or cancelled render.
pub struct RenderResult {
    pub film: Film,
    pub secs: f32,
    /// Total scene queries made
    pub rays: usize,
    /// `true` if the render was cancelled before all pixels were traced
    pub cancelled: bool,
}

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Traces every pixel of a [`Camera`] in parallel.
pub struct Renderer {
    integrator: Whitted,
    threads: usize,
    cancel: Arc<AtomicBool>,
}

impl Renderer {
    pub fn new(integrator: Whitted, threads: usize) -> Self {
        Self {
            integrator,
            threads,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns the flag that stops a running render when set.
    ///
    /// The flag is only checked between pixels.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Renders `scene` as seen by `camera`.
    ///
    /// Pixels skipped because of cancellation are left black.
    pub fn render(&self, scene: &Scene, camera: &Camera) -> Result<RenderResult> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("Render thread {}", i))
            .build()?;

        let (width, height) = camera.res();
        glint_info!(
            "Render: {}x{} pixels on {} threads, max level {}",
            width,
            height,
            self.threads,
            self.integrator.max_level()
        );

        let render_start = Instant::now();
        let rays = AtomicUsize::new(0);

        let rows: Vec<Vec<Spectrum<f32>>> = pool.install(|| {
            (0..height)
                .into_par_iter()
                .map(|y| {
                    let mut row_rays = 0;
                    let row = (0..width)
                        .map(|x| {
                            if self.cancel.load(Ordering::Relaxed) {
                                return BLACK;
                            }
                            let RadianceResult {
                                li,
                                ray_scene_intersections,
                            } = self.integrator.li(scene, &camera.ray(x, y));
                            row_rays += ray_scene_intersections;
                            li
                        })
                        .collect();
                    rays.fetch_add(row_rays, Ordering::Relaxed);
                    row
                })
                .collect()
        });

        let secs = render_start.elapsed().as_secs_f32();
        let cancelled = self.cancel.load(Ordering::Relaxed);
        if cancelled {
            glint_info!("Render: Cancelled after {:.2}s", secs);
        } else {
            glint_info!("Render: Finished in {:.2}s", secs);
        }
        let rays = rays.into_inner();
        glint_debug!(
            "Render: {} rays, {:.2} Mrays/s",
            rays,
            (rays as f32) / secs.max(1e-6) / 1e6
        );

        Ok(RenderResult {
            film: Film::from_rows(rows),
            secs,
            rays,
            cancelled,
        })
    }
}
