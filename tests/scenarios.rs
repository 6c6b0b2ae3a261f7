use approx::assert_abs_diff_eq;
use glam::{dvec3, DVec3};
use raybounce::{
    config::SceneConfig, material::BACKGROUND, shoot_ray, trace_path, Circle, Intersect,
    Material, OrientedBox, Plane, Primitive, Ray, Scene, DEFAULT_MAX_BOUNCES, FAR_DISTANCE,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;

#[test]
fn emitter_circle_lights_the_path_white() {
    let scene: Scene = vec![Primitive::new(
        Circle::new(DVec3::zero(), 40.0),
        Material {
            emit: DVec3::one(),
            albedo: DVec3::zero(),
            ..Material::default()
        },
    )]
    .into();
    let ray = Ray::towards(dvec3(100.0, 0.0, 0.0), DVec3::zero()).unwrap();

    let nearest = scene.nearest_intersection(&ray).unwrap();
    assert_eq!(nearest.hit.t, 60.0);
    assert_eq!(nearest.hit.point, dvec3(40.0, 0.0, 0.0));
    assert_eq!(nearest.hit.normal, dvec3(1.0, 0.0, 0.0));

    let path = trace_path(ray, &scene, 5);

    assert_eq!(path.points[0], dvec3(100.0, 0.0, 0.0));
    assert_eq!(path.points[1], dvec3(40.0, 0.0, 0.0));
    assert_eq!(path.radiance, DVec3::one());
    assert_eq!(path.color, [255, 255, 255]);
}

#[test]
fn empty_scene_escapes_immediately() {
    let ray = Ray::new(dvec3(3.0, -4.0, 0.0), dvec3(1.0, 1.0, 0.0));

    let path = trace_path(ray, &Scene::new(), DEFAULT_MAX_BOUNCES);

    assert_eq!(path.points.len(), 2);
    assert_eq!(path.points[0], ray.origin);
    assert_eq!(path.points[1], ray.point_at_parameter(FAR_DISTANCE));
    assert_eq!(path.radiance, BACKGROUND.emit);
    assert_eq!(path.bounces(), 0);
}

#[test]
fn box_front_face_hit() {
    let shape = OrientedBox::new(DVec3::zero(), dvec3(50.0, 0.0, 0.0), dvec3(0.0, 30.0, 0.0));
    let ray = Ray::towards(dvec3(100.0, 0.0, 0.0), DVec3::zero()).unwrap();

    let hits = shape.intersect(&ray);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].t, 50.0);
    assert_eq!(hits[0].point, dvec3(50.0, 0.0, 0.0));
    assert_eq!(hits[0].normal, dvec3(1.0, 0.0, 0.0));
}

#[test]
fn traces_terminate_within_budget() {
    let mut rng = Xoshiro256Plus::seed_from_u64(2024);
    let mut scene = Scene::random(&mut rng, 800.0, 600.0, 20, 3).unwrap();
    // Close the scene in so most rays keep bouncing
    for (point, normal) in &[
        (dvec3(-400.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)),
        (dvec3(400.0, 0.0, 0.0), dvec3(-1.0, 0.0, 0.0)),
        (dvec3(0.0, -300.0, 0.0), dvec3(0.0, 1.0, 0.0)),
        (dvec3(0.0, 300.0, 0.0), dvec3(0.0, -1.0, 0.0)),
    ] {
        scene.push(Primitive::new(Plane::new(*point, *normal), Material::default()));
    }

    for max_bounces in &[0, 1, 5, DEFAULT_MAX_BOUNCES] {
        for _ in 0..50 {
            let origin = dvec3(rng.gen_range(-390.0, 390.0), rng.gen_range(-290.0, 290.0), 0.0);
            let angle = rng.gen_range(0.0, 2.0 * std::f64::consts::PI);
            let ray = Ray::new(origin, dvec3(angle.cos(), angle.sin(), 0.0));

            let (points, _) = shoot_ray(ray, &scene, *max_bounces);
            assert!(!points.is_empty());
            assert!(points.len() <= *max_bounces as usize + 1);

            let path = trace_path(ray, &scene, *max_bounces);
            assert!(path.points.len() >= 2);
            assert!(path.bounces() <= *max_bounces as usize);
        }
    }
}

#[test]
fn lone_circle_reflects_exactly_once() {
    let circle = Circle::new(dvec3(20.0, -10.0, 0.0), 40.0);
    let scene: Scene = vec![Primitive::new(circle.clone(), Material::default())].into();
    let mut rng = Xoshiro256Plus::seed_from_u64(104);
    let mut reflected = 0;

    for _ in 0..1230 {
        let origin = dvec3(rng.gen_range(-300.0, 300.0), rng.gen_range(-300.0, 300.0), 0.0);
        if (origin - circle.center).length() <= circle.radius {
            continue;
        }
        let angle = rng.gen_range(0.0, 2.0 * std::f64::consts::PI);
        let ray = Ray::new(origin, dvec3(angle.cos(), angle.sin(), 0.0));

        let path = trace_path(ray, &scene, DEFAULT_MAX_BOUNCES);

        // Off a convex outline the reflected ray can only head away
        match scene.nearest_intersection(&ray) {
            Some(_) => {
                assert_eq!(path.bounces(), 1, "ray {:?} got trapped", ray);
                reflected += 1;
            }
            None => assert_eq!(path.bounces(), 0),
        }
    }

    assert!(reflected > 20);
}

#[test]
fn mirror_box_attenuates_every_bounce() {
    // A ray trapped between the two walls of a box, losing half its light on every bounce
    let scene: Scene = vec![Primitive::new(
        OrientedBox::new(DVec3::zero(), dvec3(50.0, 0.0, 0.0), dvec3(0.0, 30.0, 0.0)),
        Material::new(dvec3(0.5, 0.5, 0.5)),
    )]
    .into();
    let ray = Ray::new(DVec3::zero(), dvec3(1.0, 0.0, 0.0));

    let path = trace_path(ray, &scene, 4);

    assert_eq!(path.bounces(), 4);
    assert_eq!(path.points[1], dvec3(50.0, 0.0, 0.0));
    assert_eq!(path.points[2], dvec3(-50.0, 0.0, 0.0));
    assert_abs_diff_eq!(path.radiance.x, 0.0625);
    assert_eq!(path.color, [16, 16, 16]);
}

#[test]
fn config_round_trip_through_tracer() {
    let toml_str = r#"
        max_bounces = 5

        [[rays]]
        origin = [100.0, 0.0]
        towards = [0.0, 0.0]

        [[primitives]]

        [primitives.Circle]
        center = [0.0, 0.0]
        radius = 40.0
        material = { emit = [1.0, 1.0, 1.0], albedo = [0.0, 0.0, 0.0] }
    "#;

    let loaded = SceneConfig::from_toml(toml_str).unwrap().load().unwrap();
    let path = trace_path(loaded.rays[0], &loaded.scene, loaded.max_bounces);

    assert_eq!(path.points.len(), 3);
    assert_eq!(path.color, [255, 255, 255]);
}

#[test]
fn plane_line_is_drawable() {
    let plane = Plane::new(dvec3(0.0, 10.0, 0.0), dvec3(1.0, 1.0, 0.0));

    let [left, right] = plane.line();

    assert_abs_diff_eq!((left - right).length(), 2.0 * FAR_DISTANCE, epsilon = 1e-9);
    assert_abs_diff_eq!((left - plane.point).dot(plane.normal), 0.0, epsilon = 1e-9);
}
