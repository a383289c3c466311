use super::RadianceResult;
use crate::{
    error::GeometryError,
    geometry::Hit,
    lights::LightSample,
    material::Material,
    math::{Normal, Point3, Ray, Spectrum, Vec3, BLACK, WHITE},
    scene::Scene,
    shapes::is_zero,
};

// Whitted: An Improved Illumination Model for Shaded Display
// https://dl.acm.org/doi/10.1145/358876.358882

/// Attenuation below which a path's contribution is ignored
pub const MIN_CALC_COLOR_K: f32 = 0.001;
/// Attenuation of a camera ray
pub const INITIAL_K: Spectrum<f32> = WHITE;
/// Normal offset for the origins of secondary rays
pub const DELTA: f32 = 0.1;
pub const DEFAULT_MAX_LEVEL: u32 = 10;

/// Recursive ray tracer with local Phong shading, hard shadows attenuated by transparent
/// occluders, and perfect reflection and transmission.
#[derive(Copy, Clone, Debug)]
pub struct Whitted {
    max_level: u32,
}

impl Default for Whitted {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

impl Whitted {
    /// Creates a new `Whitted` that follows at most `max_level` bounces of a camera ray.
    pub fn new(max_level: u32) -> Self {
        Self { max_level }
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Returns the color seen along `ray`.
    pub fn trace_ray(&self, scene: &Scene, ray: &Ray<f32>) -> Spectrum<f32> {
        self.li(scene, ray).li
    }

    /// Returns the color seen along `ray` and the number of scene queries it took.
    pub fn li(&self, scene: &Scene, ray: &Ray<f32>) -> RadianceResult {
        let mut tracer = Tracer { scene, rays: 0 };
        let li = match tracer.nearest_hit(ray) {
            Some(hit) => tracer.color(hit, ray, self.max_level, INITIAL_K),
            None => scene.background,
        };
        RadianceResult {
            li,
            ray_scene_intersections: tracer.rays,
        }
    }
}

/// Shading inputs derived from a hit, fixed for the duration of one shading call.
#[derive(Copy, Clone, Debug)]
struct ShadingContext<'a> {
    hit: Hit<'a>,
    /// Direction of the incoming ray
    v: Vec3<f32>,
    n: Normal<f32>,
    nv: f32,
}

impl<'a> ShadingContext<'a> {
    /// Returns `None` if the ray grazes the surface.
    fn new(hit: Hit<'a>, ray: &Ray<f32>) -> Option<Self> {
        let n = hit.geometry.normal(hit.p);
        let nv = n.dot_v(ray.d);
        if is_zero(nv) {
            None
        } else {
            Some(Self {
                hit,
                v: ray.d,
                n,
                nv,
            })
        }
    }

    fn material(&self) -> &'a Material {
        self.hit.geometry.material()
    }
}

/// Spawns a ray toward `d`, offsetting the origin to the side of the surface `d` points to.
fn offset_ray(p: Point3<f32>, n: Normal<f32>, d: Vec3<f32>) -> Result<Ray<f32>, GeometryError> {
    let offset = if d.dot_n(n) > 0.0 { DELTA } else { -DELTA };
    Ray::new(p + Vec3::from(n) * offset, d)
}

fn diffuse(material: &Material, nl: f32) -> Spectrum<f32> {
    // Lit from either side
    material.k_d * nl.abs()
}

fn specular(material: &Material, ctx: &ShadingContext, l: Vec3<f32>) -> Spectrum<f32> {
    let r = l.reflected(ctx.n);
    let minus_vr = -ctx.v.dot(r);
    if minus_vr <= 0.0 {
        BLACK
    } else {
        material.k_s * minus_vr.powi(material.shininess as i32)
    }
}

/// Per camera ray state.
struct Tracer<'a> {
    scene: &'a Scene,
    rays: usize,
}

impl<'a> Tracer<'a> {
    fn nearest_hit(&mut self, ray: &Ray<f32>) -> Option<Hit<'a>> {
        self.rays += 1;
        self.scene.nearest_hit(ray)
    }

    fn all_hits(&mut self, ray: &Ray<f32>, t_max: f32) -> Vec<Hit<'a>> {
        self.rays += 1;
        self.scene.all_hits(ray, t_max)
    }

    fn color(&mut self, hit: Hit<'a>, ray: &Ray<f32>, level: u32, k: Spectrum<f32>) -> Spectrum<f32> {
        let ctx = match ShadingContext::new(hit, ray) {
            Some(ctx) => ctx,
            None => return BLACK,
        };

        let mut color = hit.geometry.emission()
            + self.scene.ambient.intensity() * ctx.material().k_a
            + self.local_effects(&ctx, k);
        if level > 1 {
            color += self.global_effects(&ctx, level, k);
        }
        color
    }

    fn local_effects(&mut self, ctx: &ShadingContext<'a>, k: Spectrum<f32>) -> Spectrum<f32> {
        let scene = self.scene;
        let material = ctx.material();

        let mut color = BLACK;
        for light in &scene.lights {
            let sample = light.sample_li(ctx.hit.p);
            let nl = ctx.n.dot_v(sample.l);
            // Light and viewer have to be on the same side of the surface
            if nl * ctx.nv > 0.0 {
                let ktr = self.transparency(ctx, &sample);
                if !(ktr * k).all_below(MIN_CALC_COLOR_K) {
                    let li = sample.li * ktr;
                    color += li * (diffuse(material, nl) + specular(material, ctx, sample.l));
                }
            }
        }
        color
    }

    /// Returns the product of the transmission coefficients of everything between the
    /// hit and the light.
    fn transparency(&mut self, ctx: &ShadingContext<'a>, sample: &LightSample) -> Spectrum<f32> {
        let ray = match offset_ray(ctx.hit.p, ctx.n, -sample.l) {
            Ok(ray) => ray,
            Err(_) => return WHITE,
        };

        let mut ktr = WHITE;
        for hit in self.all_hits(&ray, sample.dist) {
            ktr *= hit.geometry.material().k_t;
            if ktr.all_below(MIN_CALC_COLOR_K) {
                return BLACK;
            }
        }
        ktr
    }

    fn global_effects(
        &mut self,
        ctx: &ShadingContext<'a>,
        level: u32,
        k: Spectrum<f32>,
    ) -> Spectrum<f32> {
        let material = ctx.material();
        let mut color = BLACK;

        let kkr = k * material.k_r;
        if !kkr.all_below(MIN_CALC_COLOR_K) {
            let ray = offset_ray(ctx.hit.p, ctx.n, ctx.v.reflected(ctx.n));
            color += self.global_effect(ray, level, material.k_r, kkr);
        }

        let kkt = k * material.k_t;
        if !kkt.all_below(MIN_CALC_COLOR_K) {
            let ray = offset_ray(ctx.hit.p, ctx.n, ctx.v);
            color += self.global_effect(ray, level, material.k_t, kkt);
        }

        color
    }

    fn global_effect(
        &mut self,
        ray: Result<Ray<f32>, GeometryError>,
        level: u32,
        kx: Spectrum<f32>,
        kkx: Spectrum<f32>,
    ) -> Spectrum<f32> {
        // A degenerate secondary ray sees nothing
        let hit = match &ray {
            Ok(ray) => self.nearest_hit(ray),
            Err(_) => None,
        };
        match (hit, ray) {
            (Some(hit), Ok(ray)) => self.color(hit, &ray, level - 1, kkx) * kx,
            _ => self.scene.background * kx,
        }
    }
}
