//! Simple Whitted ray tracer example.
//!
//! Renders spheres on a mirror floor and saves to PPM format.

use glint_renderer::{
    render, Attenuation, Camera, ChannelOrder, Color, DirectionalLight, Material, Mat4, Object,
    PixelBuffer, PointLight, RenderConfig, Scene, Sphere, Triangle, Vec3,
};
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> Result<(), Box<dyn Error>> {
    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    let start = std::time::Instant::now();
    let scene = build_scene()?;
    println!("Scene built in {:?} ({} objects)", start.elapsed(), scene.objects().len());

    println!("Rendering {}x{} @ depth {}...", scene.width, scene.height, scene.max_depth);

    let start = std::time::Instant::now();
    let image = render(&scene, &RenderConfig::default());
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image.to_pixel_buffer(ChannelOrder::Rgb), filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Result<Scene, Box<dyn Error>> {
    let mut scene = Scene::new()
        .with_resolution(800, 450)
        .with_max_depth(4)
        .with_camera(Camera::new(
            Vec3::new(0.0, 2.0, 8.0), // look_from
            Vec3::new(0.0, 0.5, 0.0), // look_at
            Vec3::new(0.0, 1.0, 0.0), // vup
            35.0,
        ));

    // Mirror floor from two triangles
    let floor = Material::diffuse(Color::splat(0.3))
        .with_ambient(Color::splat(0.2))
        .with_specular(Color::splat(0.3), 50.0);
    let corners = [
        Vec3::new(-10.0, 0.0, -10.0),
        Vec3::new(10.0, 0.0, -10.0),
        Vec3::new(10.0, 0.0, 10.0),
        Vec3::new(-10.0, 0.0, 10.0),
    ];
    scene.add_object(Triangle::new(corners[0], corners[2], corners[1], floor));
    scene.add_object(Triangle::new(corners[0], corners[3], corners[2], floor));

    let red = Material::diffuse(Color::new(0.8, 0.1, 0.1))
        .with_ambient(Color::new(0.4, 0.05, 0.05))
        .with_specular(Color::splat(0.2), 40.0);
    scene.add_object(Sphere::new(Vec3::new(-1.5, 1.0, 0.0), 1.0, red));

    // Unit sphere squashed into an ellipsoid
    let blue = Material::diffuse(Color::new(0.1, 0.2, 0.8)).with_specular(Color::splat(0.5), 100.0);
    let ellipsoid = Object::from(Sphere::new(Vec3::ZERO, 1.0, blue)).transformed(
        Mat4::from_translation(Vec3::new(1.5, 0.6, 0.0)) * Mat4::from_scale(Vec3::new(1.2, 0.6, 1.2)),
    )?;
    scene.add_object(ellipsoid);

    let glow = Material::default().with_emission(Color::new(1.0, 0.8, 0.3));
    scene.add_object(Sphere::new(Vec3::new(0.0, 0.3, 2.0), 0.3, glow));

    scene.add_light(DirectionalLight::new(Vec3::new(-1.0, -2.0, -1.0), Color::splat(0.6)));
    scene.add_light(PointLight::new(
        Vec3::new(3.0, 4.0, 3.0),
        Color::splat(1.0),
        Attenuation::new(1.0, 0.05, 0.01),
    ));

    Ok(scene)
}

fn save_ppm(pixels: &PixelBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", pixels.width, pixels.height)?;
    writeln!(writer, "255")?;

    for y in 0..pixels.height {
        for x in 0..pixels.width {
            let [r, g, b] = pixels.pixel(x, y);
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}
