//! Scene file parser.
//!
//! Line-by-line parsing of whitespace-separated commands. Blank lines and
//! lines starting with `#` are skipped.
//!
//! # Supported Commands
//!
//! - `size w h`, `output name`, `maxdepth d`
//! - `camera fromx fromy fromz atx aty atz upx upy upz fovy`
//! - `sphere x y z r`, `vertex x y z`, `tri i0 i1 i2`
//! - `pushTransform`, `popTransform`, `translate x y z`, `rotate x y z deg`, `scale x y z`
//! - `directional x y z r g b`, `point x y z r g b`, `attenuation c l q`
//! - `ambient r g b`, `diffuse r g b`, `specular r g b`, `emission r g b`, `shininess s`
//!
//! Wrong argument counts, unknown commands, bad vertex indices and popping
//! the root transform are logged and skipped. Malformed numbers and
//! singular transforms abort the parse.

use glint_math::{Mat4, Vec3};
use glint_renderer::{
    Attenuation, Camera, Color, DirectionalLight, GeometryError, Material, Object, PointLight,
    Scene, Sphere, Triangle,
};
use thiserror::Error;

/// Errors that can occur during scene parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid number at line {line}: {token:?}")]
    InvalidNumber { line: usize, token: String },

    #[error("Invalid value at line {line}: {message}")]
    InvalidValue { line: usize, message: String },

    #[error("Invalid geometry at line {line}: {source}")]
    Geometry {
        line: usize,
        #[source]
        source: GeometryError,
    },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Stack of composed object-to-world matrices.
///
/// Always holds at least one matrix; the bottom entry starts as identity.
#[derive(Debug, Clone)]
pub struct TransformStack {
    stack: Vec<Mat4>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self {
            stack: vec![Mat4::IDENTITY],
        }
    }
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current matrix captured by newly declared geometry.
    pub fn top(&self) -> Mat4 {
        self.stack.last().copied().unwrap_or(Mat4::IDENTITY)
    }

    /// Duplicate the top matrix.
    pub fn push(&mut self) {
        self.stack.push(self.top());
    }

    /// Pop the top matrix. Returns false (and leaves the stack alone) when
    /// only the root remains.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Post-multiply the top matrix, so the newest transform applies first
    /// to object-space points.
    pub fn apply(&mut self, transform: Mat4) {
        if let Some(top) = self.stack.last_mut() {
            *top *= transform;
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Parser state for one scene description.
struct SceneParser {
    scene: Scene,
    vertices: Vec<Vec3>,
    transforms: TransformStack,
    material: Material,
    attenuation: Attenuation,
}

impl SceneParser {
    fn new() -> Self {
        Self {
            scene: Scene::new(),
            vertices: Vec::new(),
            transforms: TransformStack::new(),
            material: Material::default(),
            attenuation: Attenuation::default(),
        }
    }

    fn parse(mut self, content: &str) -> ParseResult<Scene> {
        for (i, raw) in content.lines().enumerate() {
            let line = i + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let tokens: Vec<&str> = trimmed.split_whitespace().collect();
            let (command, args) = (tokens[0], &tokens[1..]);

            let Some(expected) = arg_count(command) else {
                log::warn!("Line {}: unknown command {:?}, skipping", line, command);
                continue;
            };
            if args.len() != expected {
                log::warn!(
                    "Line {}: {} expects {} arguments, got {}; skipping",
                    line,
                    command,
                    expected,
                    args.len()
                );
                continue;
            }

            log::debug!("Line {}: {}", line, trimmed);
            self.command(command, args, line)?;
        }

        Ok(self.scene)
    }

    fn command(&mut self, command: &str, args: &[&str], line: usize) -> ParseResult<()> {
        match command {
            "size" => {
                let width = parse_u32(args[0], line)?;
                let height = parse_u32(args[1], line)?;
                if width == 0 || height == 0 {
                    return Err(ParseError::InvalidValue {
                        line,
                        message: format!("image size must be nonzero, got {}x{}", width, height),
                    });
                }
                self.scene.width = width;
                self.scene.height = height;
            }
            "output" => self.scene.output = args[0].to_string(),
            "maxdepth" => self.scene.max_depth = parse_u32(args[0], line)?,
            "camera" => {
                let [fx, fy, fz, ax, ay, az, ux, uy, uz, fovy] = parse_floats::<10>(args, line)?;
                self.scene.camera = Camera::new(
                    Vec3::new(fx, fy, fz),
                    Vec3::new(ax, ay, az),
                    Vec3::new(ux, uy, uz),
                    fovy,
                );
            }
            "sphere" => {
                let [x, y, z, radius] = parse_floats::<4>(args, line)?;
                let sphere = Sphere::new(Vec3::new(x, y, z), radius, self.material);
                self.add_object(sphere.into(), line)?;
            }
            "vertex" => self.vertices.push(parse_vec3(args, line)?),
            "tri" => {
                let indices = [
                    parse_index(args[0], line)?,
                    parse_index(args[1], line)?,
                    parse_index(args[2], line)?,
                ];
                let Some([v0, v1, v2]) = self.resolve(indices) else {
                    log::warn!(
                        "Line {}: triangle vertex index {:?} out of range ({} vertices defined), skipping",
                        line,
                        indices,
                        self.vertices.len()
                    );
                    return Ok(());
                };
                let triangle = Triangle::new(v0, v1, v2, self.material);
                self.add_object(triangle.into(), line)?;
            }
            "pushTransform" => self.transforms.push(),
            "popTransform" => {
                if !self.transforms.pop() {
                    log::warn!("Line {}: popTransform on the root transform, ignoring", line);
                }
            }
            "translate" => {
                let offset = parse_vec3(args, line)?;
                self.transforms.apply(Mat4::from_translation(offset));
            }
            "rotate" => {
                let [x, y, z, degrees] = parse_floats::<4>(args, line)?;
                let axis = Vec3::new(x, y, z);
                if axis.length_squared() == 0.0 {
                    return Err(ParseError::InvalidValue {
                        line,
                        message: "rotation axis has zero length".to_string(),
                    });
                }
                self.transforms
                    .apply(Mat4::from_axis_angle(axis.normalize(), degrees.to_radians()));
            }
            "scale" => {
                let factors = parse_vec3(args, line)?;
                self.transforms.apply(Mat4::from_scale(factors));
            }
            "directional" => {
                let [x, y, z, r, g, b] = parse_floats::<6>(args, line)?;
                self.scene
                    .add_light(DirectionalLight::new(Vec3::new(x, y, z), Color::new(r, g, b)));
            }
            "point" => {
                let [x, y, z, r, g, b] = parse_floats::<6>(args, line)?;
                self.scene.add_light(PointLight::new(
                    Vec3::new(x, y, z),
                    Color::new(r, g, b),
                    self.attenuation,
                ));
            }
            "attenuation" => {
                let [constant, linear, quadratic] = parse_floats::<3>(args, line)?;
                self.attenuation = Attenuation::new(constant, linear, quadratic);
            }
            "ambient" => self.material.ambient = parse_vec3(args, line)?,
            "diffuse" => self.material.diffuse = parse_vec3(args, line)?,
            "specular" => self.material.specular = parse_vec3(args, line)?,
            "emission" => self.material.emission = parse_vec3(args, line)?,
            "shininess" => {
                let [shininess] = parse_floats::<1>(args, line)?;
                self.material.shininess = shininess;
            }
            _ => log::warn!("Line {}: unhandled command {:?}, skipping", line, command),
        }

        Ok(())
    }

    /// Add geometry under the current transform.
    fn add_object(&mut self, object: Object, line: usize) -> ParseResult<()> {
        let transform = self.transforms.top();
        let object = if transform == Mat4::IDENTITY {
            object
        } else {
            object
                .transformed(transform)
                .map_err(|source| ParseError::Geometry { line, source })?
        };

        self.scene.add_object(object);
        Ok(())
    }

    /// Look up three vertex indices. Negative or out-of-range indices fail.
    fn resolve(&self, indices: [i64; 3]) -> Option<[Vec3; 3]> {
        let vertex = |i: i64| usize::try_from(i).ok().and_then(|i| self.vertices.get(i).copied());
        Some([vertex(indices[0])?, vertex(indices[1])?, vertex(indices[2])?])
    }
}

/// Number of arguments a command takes, or `None` for unknown commands.
fn arg_count(command: &str) -> Option<usize> {
    let count = match command {
        "pushTransform" | "popTransform" => 0,
        "output" | "maxdepth" | "shininess" => 1,
        "size" => 2,
        "vertex" | "tri" | "translate" | "scale" | "attenuation" | "ambient" | "diffuse"
        | "specular" | "emission" => 3,
        "sphere" | "rotate" => 4,
        "directional" | "point" => 6,
        "camera" => 10,
        _ => return None,
    };
    Some(count)
}

fn parse_f32(token: &str, line: usize) -> ParseResult<f32> {
    token
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            line,
            token: token.to_string(),
        })
}

fn parse_u32(token: &str, line: usize) -> ParseResult<u32> {
    token.parse::<u32>().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_index(token: &str, line: usize) -> ParseResult<i64> {
    token.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_floats<const N: usize>(args: &[&str], line: usize) -> ParseResult<[f32; N]> {
    let mut values = [0.0; N];
    for (value, token) in values.iter_mut().zip(args) {
        *value = parse_f32(token, line)?;
    }
    Ok(values)
}

fn parse_vec3(args: &[&str], line: usize) -> ParseResult<Vec3> {
    parse_floats::<3>(args, line).map(Vec3::from_array)
}

/// Parse a scene description into a renderable scene.
pub fn parse_scene(content: &str) -> ParseResult<Scene> {
    SceneParser::new().parse(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::{Interval, Mat4Ext, Ray};
    use glint_renderer::{Hittable, Light, LightSource};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_parse_settings() {
        let scene = parse_scene(
            "# header comment\n\
             size 320 200\n\
             \n\
             output spheres.png\n\
             maxdepth 3\n\
             camera 0 0 5 0 0 0 0 1 0 30\n",
        )
        .expect("valid scene");

        assert_eq!((scene.width, scene.height), (320, 200));
        assert_eq!(scene.output, "spheres.png");
        assert_eq!(scene.max_depth, 3);
        assert_eq!(scene.camera.look_from(), Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(scene.camera.vfov(), 30.0);
    }

    #[test]
    fn test_defaults_without_commands() {
        let scene = parse_scene("").expect("empty scene");
        assert_eq!((scene.width, scene.height), (640, 480));
        assert_eq!(scene.max_depth, 5);
        assert_eq!(scene.output, "raytrace.png");
    }

    #[test]
    fn test_material_state_is_copied_per_primitive() {
        let scene = parse_scene(
            "diffuse 1 0 0\n\
             specular 0.5 0.5 0.5\n\
             shininess 20\n\
             sphere 0 0 0 1\n\
             diffuse 0 1 0\n\
             emission 0.1 0.1 0.1\n\
             ambient 0 0 0\n\
             sphere 0 0 -5 1\n",
        )
        .expect("valid scene");

        let materials: Vec<Material> = scene
            .objects()
            .iter()
            .map(|object| match object {
                Object::Sphere(sphere) => *sphere.material(),
                other => panic!("expected an untransformed sphere, got {:?}", other),
            })
            .collect();

        assert_eq!(materials[0].diffuse, Color::new(1.0, 0.0, 0.0));
        assert_eq!(materials[0].shininess, 20.0);
        assert_eq!(materials[0].ambient, Color::splat(0.2));
        assert_eq!(materials[1].diffuse, Color::new(0.0, 1.0, 0.0));
        assert_eq!(materials[1].specular, Color::splat(0.5));
        assert_eq!(materials[1].emission, Color::splat(0.1));
        assert_eq!(materials[1].ambient, Color::ZERO);
    }

    #[test]
    fn test_triangles_from_vertices() {
        init_logging();
        let scene = parse_scene(
            "vertex -1 -1 0\n\
             vertex 1 -1 0\n\
             vertex 0 1 0\n\
             tri 0 1 2\n\
             tri 0 1 3\n\
             tri 0 1 -1\n\
             sphere 0 0 -3 1\n",
        )
        .expect("valid scene");

        // Triangles with missing or negative vertex indices are skipped
        assert_eq!(scene.objects().len(), 2);
        assert!(matches!(scene.objects()[1], Object::Sphere(_)));
        let Object::Triangle(tri) = &scene.objects()[0] else {
            panic!("expected a triangle");
        };
        assert_eq!(tri.vertices()[2], Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_negative_sphere_radius_renders_full_sphere() {
        let scene = parse_scene("sphere 0 0 -3 -1\n").expect("valid scene");
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let rec = scene
            .hit(&ray, Interval::new(1e-4, f32::INFINITY))
            .expect("hit");

        assert!((rec.t - 2.0).abs() < 1e-5);
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_transform_stack_composition() {
        let scene = parse_scene(
            "pushTransform\n\
             translate 0 0 -5\n\
             scale 2 2 2\n\
             sphere 0 0 0 1\n\
             popTransform\n\
             sphere 0 0 0 1\n",
        )
        .expect("valid scene");

        assert_eq!(scene.objects().len(), 2);
        let Object::Transformed(transformed) = &scene.objects()[0] else {
            panic!("expected a transformed sphere");
        };
        // Scale applies first, then translation
        let expected =
            Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0)) * Mat4::from_scale(Vec3::splat(2.0));
        assert!(transformed.object_to_world().abs_diff_eq(expected, 1e-6));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let rec = scene.objects()[0]
            .hit(&ray, Interval::new(1e-4, f32::INFINITY))
            .expect("hit");
        assert!((rec.t - 3.0).abs() < 1e-4);

        // After the pop the second sphere is untransformed
        assert!(matches!(scene.objects()[1], Object::Sphere(_)));
    }

    #[test]
    fn test_rotate_uses_degrees() {
        let scene = parse_scene("rotate 0 0 1 90\nsphere 2 0 0 1\n").expect("valid scene");
        let Object::Transformed(transformed) = &scene.objects()[0] else {
            panic!("expected a transformed sphere");
        };
        let center = transformed.object_to_world().transform_point3(Vec3::new(2.0, 0.0, 0.0));
        assert!((center - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
        assert!(transformed.object_to_world().try_inverse().is_some());
    }

    #[test]
    fn test_pop_root_transform_is_ignored() {
        init_logging();
        let scene =
            parse_scene("popTransform\ntranslate 1 0 0\nsphere 0 0 0 1\n").expect("valid scene");
        assert_eq!(scene.objects().len(), 1);
        assert!(matches!(scene.objects()[0], Object::Transformed(_)));
    }

    #[test]
    fn test_transform_stack() {
        let mut stack = TransformStack::new();
        assert_eq!(stack.depth(), 1);
        assert!(!stack.pop());

        stack.push();
        stack.apply(Mat4::from_translation(Vec3::X));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top().transform_point3(Vec3::ZERO), Vec3::X);

        assert!(stack.pop());
        assert_eq!(stack.top(), Mat4::IDENTITY);
    }

    #[test]
    fn test_lights_and_attenuation() {
        let scene = parse_scene(
            "directional 0 -1 0 1 1 1\n\
             point 0 5 0 1 0 0\n\
             attenuation 0 0 1\n\
             point 0 2 0 0 1 0\n",
        )
        .expect("valid scene");

        let lights = scene.lights();
        assert_eq!(lights.len(), 3);
        assert!(matches!(lights[0], Light::Directional(_)));

        match (lights[1], lights[2]) {
            (Light::Point(first), Light::Point(second)) => {
                assert_eq!(first.attenuation(), Attenuation::default());
                assert_eq!(second.attenuation(), Attenuation::new(0.0, 0.0, 1.0));
            }
            other => panic!("expected point lights, got {:?}", other),
        }

        // 1 / (d^2) at distance 2
        let sample = lights[2].light_info(Vec3::ZERO);
        assert!((sample.intensity - Color::new(0.0, 0.25, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_wrong_arity_and_unknown_commands_are_skipped() {
        init_logging();
        let scene = parse_scene(
            "size 100\n\
             sphere 0 0 0\n\
             frobnicate 1 2 3\n\
             sphere 0 0 0 1\n",
        )
        .expect("recoverable problems only");

        assert_eq!((scene.width, scene.height), (640, 480));
        assert_eq!(scene.objects().len(), 1);
    }

    #[test]
    fn test_invalid_number_is_fatal() {
        let err = parse_scene("size 10 10\nsphere 0 zero 0 1\n").unwrap_err();
        match err {
            ParseError::InvalidNumber { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "zero");
            }
            other => panic!("unexpected error {:?}", other),
        }

        assert!(matches!(
            parse_scene("maxdepth -1\n"),
            Err(ParseError::InvalidNumber { line: 1, .. })
        ));
        assert!(matches!(
            parse_scene("size 0 10\n"),
            Err(ParseError::InvalidValue { line: 1, .. })
        ));
    }

    #[test]
    fn test_singular_transform_is_fatal() {
        let err = parse_scene("scale 1 0 1\nsphere 0 0 0 1\n").unwrap_err();
        assert!(matches!(err, ParseError::Geometry { line: 2, .. }));
        assert!(err.to_string().contains("line 2"));

        assert!(matches!(
            parse_scene("rotate 0 0 0 45\n"),
            Err(ParseError::InvalidValue { line: 1, .. })
        ));
    }
}
