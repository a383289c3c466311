use super::{Result, Scene};
use crate::{
    accel::AcceleratorType,
    geometry::Geometry,
    lights::{AmbientLight, Attenuation, DirectionalLight, Light, PointLight, SpotLight},
    material::Material,
    math::{Point3, Spectrum, Vec3, WHITE},
    shapes::{Axis, Cylinder, Plane, Polygon, Sphere, Triangle, Tube},
};

use std::{collections::HashMap, io::Read};
use xml::{
    attribute::OwnedAttribute,
    reader::{EventReader, XmlEvent},
};

pub fn load(reader: impl Read, name: &str, accelerator: AcceleratorType) -> Result<Scene> {
    let mut builder = Scene::builder(name).accelerator(accelerator);
    let mut materials: HashMap<String, Material> = HashMap::new();
    let mut saw_root = false;
    let mut saw_ambient = false;

    // Names of the currently open elements
    let mut stack: Vec<String> = Vec::new();
    let mut indent = String::new();
    let mut parser = EventReader::new(reader);
    loop {
        match parser.next() {
            Ok(evt) => match evt {
                XmlEvent::StartDocument {
                    version,
                    encoding,
                    standalone,
                } => glint_trace!(
                    "Start document: XML - {}, encoding - {}, standalone {:?}",
                    version,
                    encoding,
                    standalone
                ),
                XmlEvent::StartElement {
                    name, attributes, ..
                } => {
                    glint_trace!("{}Begin: {}", indent, name);
                    indent += "  ";
                    for OwnedAttribute { name, value } in &attributes {
                        glint_trace!("{}  {}: {}", indent, name, value);
                    }

                    let element = name.local_name;
                    let parent = stack.last().map(String::as_str);
                    builder = match (parent, element.as_str()) {
                        (None, "scene") => {
                            if saw_root {
                                return Err("Multiple <scene> elements".into());
                            }
                            saw_root = true;
                            builder.background(parse_spectrum(&attributes, "background")?)
                        }
                        (Some("scene"), "ambient-light") => {
                            if saw_ambient {
                                return Err("Multiple <ambient-light> elements".into());
                            }
                            saw_ambient = true;
                            let color = parse_spectrum(&attributes, "color")?;
                            let k = match try_find_attr!(&attributes, "k") {
                                Some(_) => parse_spectrum(&attributes, "k")?,
                                None => WHITE,
                            };
                            builder.ambient(AmbientLight::new(color, k))
                        }
                        (Some("scene"), "material") => {
                            let id = find_attr!(&attributes, "id");
                            let material = parse_material(&attributes)
                                .map_err(|why| format!("<material id=\"{}\">: {}", id, why))?;
                            if materials.insert(id.to_string(), material).is_some() {
                                return Err(format!("Duplicate material id '{}'", id).into());
                            }
                            builder
                        }
                        (Some("scene"), "geometries") | (Some("scene"), "lights") => builder,
                        (Some("geometries"), shape) => {
                            let geometry = parse_geometry(shape, &attributes, &materials)
                                .map_err(|why| format!("<{}>: {}", shape, why))?;
                            builder.geometry(geometry)
                        }
                        (Some("lights"), light) => {
                            let light = parse_light(light, &attributes)
                                .map_err(|why| format!("<{}>: {}", light, why))?;
                            builder.boxed_light(light)
                        }
                        (Some(parent), element) => {
                            return Err(
                                format!("Unknown element '{}' in '{}'", element, parent).into()
                            )
                        }
                        (None, element) => {
                            return Err(format!("Unknown root element '{}'", element).into())
                        }
                    };

                    stack.push(element);
                }
                XmlEvent::EndElement { name } => {
                    indent.truncate(indent.len().saturating_sub(2));
                    glint_trace!("{}End: {}", indent, name);
                    stack.pop();
                }
                XmlEvent::ProcessingInstruction { name, .. } => {
                    return Err(format!("Unexpected processing instruction: {}", name).into())
                }
                XmlEvent::CData(data) => return Err(format!("Unexpected CDATA: {}", data).into()),
                XmlEvent::Characters(chars) => {
                    return Err(format!("Unexpected characters outside tags: {}", chars).into())
                }
                XmlEvent::EndDocument => {
                    glint_trace!("End document");
                    break;
                }
                XmlEvent::Whitespace(_) | XmlEvent::Comment(_) => (),
            },
            Err(err) => {
                glint_error!("XML error: {}", err);
                return Err(format!("XML error: {}", err).into());
            }
        }
    }

    if !saw_root {
        return Err("No <scene> element".into());
    }

    builder.build()
}

fn parse_floats(attributes: &[OwnedAttribute], name: &str) -> Result<Vec<f32>> {
    let value = find_attr!(attributes, name);
    let mut ret = Vec::new();
    for s in value.split_whitespace() {
        let v: f32 = s
            .parse()
            .map_err(|why| format!("Attribute '{}': '{}' {}", name, s, why))?;
        if !v.is_finite() {
            return Err(format!("Attribute '{}': '{}' is not finite", name, s).into());
        }
        ret.push(v);
    }
    Ok(ret)
}

fn parse_f32(attributes: &[OwnedAttribute], name: &str) -> Result<f32> {
    match parse_floats(attributes, name)?.as_slice() {
        &[v] => Ok(v),
        vs => Err(format!("Attribute '{}': Expected 1 value, got {}", name, vs.len()).into()),
    }
}

fn parse_triple(attributes: &[OwnedAttribute], name: &str) -> Result<[f32; 3]> {
    match parse_floats(attributes, name)?.as_slice() {
        &[x, y, z] => Ok([x, y, z]),
        vs => Err(format!("Attribute '{}': Expected 3 values, got {}", name, vs.len()).into()),
    }
}

fn parse_point(attributes: &[OwnedAttribute], name: &str) -> Result<Point3<f32>> {
    let [x, y, z] = parse_triple(attributes, name)?;
    Ok(Point3::new(x, y, z))
}

fn parse_vec(attributes: &[OwnedAttribute], name: &str) -> Result<Vec3<f32>> {
    let [x, y, z] = parse_triple(attributes, name)?;
    Ok(Vec3::new(x, y, z))
}

fn parse_spectrum(attributes: &[OwnedAttribute], name: &str) -> Result<Spectrum<f32>> {
    let [r, g, b] = parse_triple(attributes, name)?;
    Ok(Spectrum::new(r, g, b))
}

fn parse_u32(attributes: &[OwnedAttribute], name: &str) -> Result<u32> {
    let value = find_attr!(attributes, name);
    Ok(value
        .trim()
        .parse()
        .map_err(|why| format!("Attribute '{}': '{}' {}", name, value, why))?)
}

fn parse_material(attributes: &[OwnedAttribute]) -> Result<Material> {
    let mut material = Material::default();
    for attr in attributes {
        let name = attr.name.local_name.as_str();
        match name {
            "id" => (),
            "ka" => material.k_a = parse_spectrum(attributes, name)?,
            "kd" => material.k_d = parse_spectrum(attributes, name)?,
            "ks" => material.k_s = parse_spectrum(attributes, name)?,
            "kt" => material.k_t = parse_spectrum(attributes, name)?,
            "kr" => material.k_r = parse_spectrum(attributes, name)?,
            "shininess" => material.shininess = parse_u32(attributes, name)?,
            _ => return Err(format!("Unknown material attribute '{}'", name).into()),
        }
    }
    Ok(material)
}

fn parse_geometry(
    shape: &str,
    attributes: &[OwnedAttribute],
    materials: &HashMap<String, Material>,
) -> Result<Geometry> {
    let mut geometry = match shape {
        "sphere" => Geometry::new(Sphere::new(
            parse_point(attributes, "center")?,
            parse_f32(attributes, "radius")?,
        )?),
        "plane" => {
            let plane = if try_find_attr!(attributes, "normal").is_some() {
                Plane::new(
                    parse_point(attributes, "point")?,
                    parse_vec(attributes, "normal")?,
                )?
            } else {
                Plane::from_points(
                    parse_point(attributes, "p0")?,
                    parse_point(attributes, "p1")?,
                    parse_point(attributes, "p2")?,
                )?
            };
            Geometry::new(plane)
        }
        "triangle" => Geometry::new(Triangle::new(
            parse_point(attributes, "p0")?,
            parse_point(attributes, "p1")?,
            parse_point(attributes, "p2")?,
        )?),
        "polygon" => {
            let values = parse_floats(attributes, "vertices")?;
            if values.len() % 3 != 0 {
                return Err(format!(
                    "Attribute 'vertices': Expected a multiple of 3 values, got {}",
                    values.len()
                )
                .into());
            }
            let vertices = values
                .chunks_exact(3)
                .map(|c| Point3::new(c[0], c[1], c[2]))
                .collect();
            Geometry::new(Polygon::new(vertices)?)
        }
        "tube" => Geometry::new(Tube::new(
            parse_axis(attributes)?,
            parse_f32(attributes, "radius")?,
        )?),
        "cylinder" => Geometry::new(Cylinder::new(
            parse_axis(attributes)?,
            parse_f32(attributes, "radius")?,
            parse_f32(attributes, "height")?,
        )?),
        _ => return Err("Unknown geometry".into()),
    };

    if let Some(id) = try_find_attr!(attributes, "material") {
        match materials.get(id) {
            Some(material) => geometry = geometry.with_material(*material),
            None => return Err(format!("Unknown material '{}'", id).into()),
        }
    }
    if try_find_attr!(attributes, "emission").is_some() {
        geometry = geometry.with_emission(parse_spectrum(attributes, "emission")?);
    }

    Ok(geometry)
}

fn parse_axis(attributes: &[OwnedAttribute]) -> Result<Axis> {
    Ok(Axis::new(
        parse_point(attributes, "origin")?,
        parse_vec(attributes, "direction")?,
    )?)
}

fn parse_attenuation(attributes: &[OwnedAttribute]) -> Result<Attenuation> {
    let mut ret = Attenuation::default();
    if try_find_attr!(attributes, "kc").is_some() {
        ret.k_c = parse_f32(attributes, "kc")?;
    }
    if try_find_attr!(attributes, "kl").is_some() {
        ret.k_l = parse_f32(attributes, "kl")?;
    }
    if try_find_attr!(attributes, "kq").is_some() {
        ret.k_q = parse_f32(attributes, "kq")?;
    }
    if !(ret.k_c >= 0.0 && ret.k_l >= 0.0 && ret.k_q >= 0.0) || ret.factor(0.0) == 0.0 {
        return Err("Attenuation coefficients must be non-negative with kc > 0".into());
    }
    Ok(ret)
}

fn parse_point_light(attributes: &[OwnedAttribute]) -> Result<PointLight> {
    Ok(PointLight::new(
        parse_point(attributes, "position")?,
        parse_spectrum(attributes, "color")?,
    )
    .with_attenuation(parse_attenuation(attributes)?))
}

fn parse_light(light: &str, attributes: &[OwnedAttribute]) -> Result<Box<dyn Light>> {
    let ret: Box<dyn Light> = match light {
        "directional-light" => Box::new(DirectionalLight::new(
            parse_spectrum(attributes, "color")?,
            parse_vec(attributes, "direction")?,
        )?),
        "point-light" => Box::new(parse_point_light(attributes)?),
        "spot-light" => {
            let mut spot =
                SpotLight::new(parse_point_light(attributes)?, parse_vec(attributes, "direction")?)?;
            if try_find_attr!(attributes, "narrow-beam").is_some() {
                spot = spot.with_narrow_beam(parse_u32(attributes, "narrow-beam")?);
            }
            Box::new(spot)
        }
        _ => return Err("Unknown light".into()),
    };
    Ok(ret)
}
