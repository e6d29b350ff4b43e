#![allow(unused_doc_comments)]
use std::rc::Rc;

use proptest::prelude::*;
use stv_core::Vec3;
use stv_curve::{Axis, Curve, GridLineParams};
use stv_noise::{NoiseField, NoiseSource};
use stv_scene::scenes::christoffel::{axis_line, de1_dx0, probe_params, E1_SCALE, GRID_EXTENT, PROBE_STARTS};
use stv_scene::{
    BasisProbe, Lifecycle, Mount, ObjectId, PointerEvent, ProbeParams, Scene, SceneBlueprint, SceneError, SceneKind,
    Shape, ToolkitConfig,
};

fn config() -> ToolkitConfig {
    ToolkitConfig { seed: Some(2024), grid_rows: 4, tube_segments: 64, ..Default::default() }
}

fn mounted(kind: SceneKind) -> Scene {
    let blueprint = kind.build(&config()).unwrap();
    let mut scene = Scene::mount(blueprint, Mount::new("canvas", 800, 600), Mount::new("overlay", 800, 600));
    scene.start().unwrap();
    scene
}

fn handles(bp: &SceneBlueprint) -> Vec<ObjectId> {
    let objects = bp.context.objects();
    (0..objects.len()).map(ObjectId).filter(|id| objects[id.0].draggable).collect()
}

fn arrows(scene: &Scene) -> Vec<(Vec3, Vec3)> {
    scene
        .context()
        .objects()
        .iter()
        .filter_map(|o| match o.shape {
            Shape::Arrow { origin, vector } => Some((origin, vector)),
            _ => None,
        })
        .collect()
}

fn drag(scene: &mut Scene, id: ObjectId, to: Vec3) {
    scene.pointer(PointerEvent::HoverOn(id));
    scene.pointer(PointerEvent::DragStart(id));
    scene.pointer(PointerEvent::Drag(id, to));
    scene.pointer(PointerEvent::DragEnd(id));
    scene.pointer(PointerEvent::HoverOff(id));
    let report = scene.tick().unwrap();
    assert_eq!(report.rejected, 0);
}

fn text(scene: &Scene, id: ObjectId) -> String {
    match &scene.context().object(id).unwrap().shape {
        Shape::Label { text, .. } => text.clone(),
        other => panic!("not a label: {other:?}"),
    }
}

#[test]
fn every_route_builds_and_mounts() {
    for kind in SceneKind::ALL {
        let mut scene = mounted(kind);
        assert_eq!(scene.state(), Lifecycle::Running);
        assert!(!scene.context().objects().is_empty(), "{kind:?} is empty");
        scene.tick().unwrap();
        scene.stop().unwrap();
        let (canvas, overlay) = scene.cleanup();
        assert!(canvas.nodes().is_empty() && overlay.nodes().is_empty());
    }
}

#[test]
fn seeded_builds_are_reproducible() {
    for kind in [SceneKind::Line, SceneKind::Curve] {
        let a = kind.build(&config()).unwrap();
        let b = kind.build(&config()).unwrap();
        assert_eq!(a.context.objects()[0].position(), b.context.objects()[0].position());
    }
}

#[test]
fn planet_has_wireframe_body_and_marker() {
    let bp = SceneKind::Planet.build(&config()).unwrap();
    let lines = bp.context.objects().iter().filter(|o| matches!(o.shape, Shape::Line { .. })).count();
    assert_eq!(lines, 19);
    assert!(handles(&bp).is_empty());
}

#[test]
fn worldline_drag_updates_readout() {
    let bp = SceneKind::Worldline.build(&config()).unwrap();
    let handle = handles(&bp)[0];
    let readout = ObjectId(bp.context.objects().len() - 1);
    let start = bp.context.object(handle).unwrap().position().unwrap();
    let mut scene = Scene::mount(bp, Mount::new("canvas", 800, 600), Mount::new("overlay", 800, 600));
    scene.start().unwrap();
    assert_eq!(text(&scene, readout), "\\tau = 0.00");

    drag(&mut scene, handle, start + Vec3::new(8.0, 0.0, 0.0));
    let moved = scene.context().object(handle).unwrap().position().unwrap();
    assert!(moved.x > start.x, "{start:?} -> {moved:?}");
    let label = text(&scene, readout);
    let tau: f64 = label.trim_start_matches("\\tau = ").parse().unwrap();
    assert!(tau > 0.0 && tau <= 10.0, "{label}");
    assert!(scene.context().orbit_enabled());
}

#[test]
fn line_drag_snaps_to_samples() {
    let bp = SceneKind::Line.build(&config()).unwrap();
    let handle = handles(&bp)[0];
    let readout = ObjectId(bp.context.objects().len() - 1);
    let mut scene = Scene::mount(bp, Mount::new("canvas", 800, 600), Mount::new("overlay", 800, 600));
    scene.start().unwrap();
    assert_eq!(text(&scene, readout), "\\tau = 0.00");
    drag(&mut scene, handle, Vec3::new(100.0, 0.0, 0.0));
    // the far end of the line is sample 799, τ = (799 − 320) / 16
    assert_eq!(text(&scene, readout), "\\tau = 29.94");
}

#[test]
fn christoffel_arrows_are_consistent() {
    let bp = SceneKind::Christoffel.build(&config()).unwrap();
    let ids = handles(&bp);
    assert_eq!(ids.len(), 2);
    let mut scene = Scene::mount(bp, Mount::new("canvas", 800, 600), Mount::new("overlay", 800, 600));
    scene.start().unwrap();

    let check = |scene: &Scene| {
        let a = arrows(scene);
        assert_eq!(a.len(), 5);
        let (p1, e1) = a[1];
        let (p2, e1_copy) = a[2];
        let (p2b, e1_b) = a[3];
        let (tip, de1) = a[4];
        assert_eq!(a[0].0, p1);
        assert_eq!(e1_copy, e1);
        assert_eq!(p2, p2b);
        assert!((tip - (p2 + e1_b)).length() < 1e-12);
        assert!((de1 - (e1 - e1_b)).length() < 1e-12);
        assert!((e1.length() - E1_SCALE).abs() < 1e-9);
    };
    check(&scene);

    drag(&mut scene, ids[1], Vec3::new(0.3, 2.0, 7.5));
    check(&scene);
    let moved = scene.context().object(ids[1]).unwrap().position().unwrap();
    assert_eq!(moved.y, PROBE_STARTS[1].y);
    assert!((moved.z - 7.5).abs() < 1.5, "{moved:?}");
    assert_eq!(arrows(&scene)[2].0, moved);
}

#[test]
fn de1_vanishes_for_coincident_probes() {
    let noise: Rc<dyn NoiseSource> = Rc::new(NoiseField::with_seed(5));
    let axis = axis_line(noise.as_ref()).unwrap();
    let params = ProbeParams { grid: GridLineParams { axis: Axis::Z, ..Default::default() }, ..Default::default() };
    let p1 = BasisProbe::new(params, Rc::clone(&noise), axis.clone(), Vec3::new(0.0, 0.0, 2.0)).unwrap();
    let p2 = BasisProbe::new(params, Rc::clone(&noise), axis.clone(), Vec3::new(0.0, 0.0, 2.0)).unwrap();
    assert_eq!(de1_dx0(&p1, &p2), Vec3::ZERO);

    let p3 = BasisProbe::new(params, noise, axis, Vec3::new(0.0, 0.0, -6.0)).unwrap();
    assert!(de1_dx0(&p1, &p3).length() > 0.0);
}

#[test]
fn probe_lines_cover_the_whole_axis() {
    let params = probe_params(&config());
    assert_eq!((params.grid.start, params.grid.end), (-GRID_EXTENT, GRID_EXTENT));

    let noise: Rc<dyn NoiseSource> = Rc::new(NoiseField::with_seed(5));
    let axis = axis_line(noise.as_ref()).unwrap();
    let probe = BasisProbe::new(params, noise, axis, Vec3::new(0.0, 0.0, 25.0)).unwrap();
    let t = probe.across().anchor_t();
    assert!(t > 0.5 && t < 1.0, "t={t}");
    let at = probe.across().point_at(t);
    assert!((at.z - probe.position().z).abs() < 1e-6, "{at:?} vs {:?}", probe.position());
}

#[test]
fn labels_follow_the_viewport() {
    let mut scene = mounted(SceneKind::Worldline);
    let shown = scene.tick().unwrap().visible_labels;
    assert!(shown > 0);
    scene.resize(100, 100);
    let narrow = scene.tick().unwrap().visible_labels;
    assert!(narrow < shown, "{narrow} >= {shown}");
}

#[test]
fn stopped_scenes_keep_their_queue() {
    let bp = SceneKind::Worldline.build(&config()).unwrap();
    let handle = handles(&bp)[0];
    let mut scene = Scene::mount(bp, Mount::new("canvas", 800, 600), Mount::new("overlay", 800, 600));
    scene.pointer(PointerEvent::HoverOn(handle));
    assert!(matches!(scene.tick(), Err(SceneError::Lifecycle { op: "tick", state: Lifecycle::Created })));
    scene.start().unwrap();
    assert_eq!(scene.tick().unwrap().processed, 1);
    assert_eq!(scene.frames(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]

    /// Wherever the pointer goes, the worldline handle stays on the tube path.
    #[test]
    fn worldline_handle_stays_on_curve(x in -25.0f64..25.0, z in -10.0f64..10.0) {
        let bp = SceneKind::Worldline.build(&config()).unwrap();
        let handle = handles(&bp)[0];
        let path = bp.context.objects()[0].tube_path().unwrap();
        let mut scene = Scene::mount(bp, Mount::new("canvas", 800, 600), Mount::new("overlay", 800, 600));
        scene.start().unwrap();
        drag(&mut scene, handle, Vec3::new(x, 0.0, z));
        let at = scene.context().object(handle).unwrap().position().unwrap();
        let nearest = path.iter().map(|p| p.distance(at)).fold(f64::INFINITY, f64::min);
        prop_assert!(nearest < 0.6, "handle {at:?} is {nearest} from the path");
    }
}
