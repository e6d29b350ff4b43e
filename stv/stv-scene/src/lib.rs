#![doc = r#"Scene runtime and the interactive spacetime scenes.

This crate provides:
- [`SceneContext`]: explicit per-scene state (camera, config, noise field,
  objects, pointer state) that every scene function reads and mutates.
- [`Scene`]: mount / start / stop / cleanup lifecycle with a per-frame queue
  of [`PointerEvent`]s run through the [`DragState`] machine.
- [`CurveParameter`], [`PolylineSlider`], [`BasisProbe`]: handles constrained
  to curves, polylines and the local frame of a warped grid.
- [`SceneKind`]: the route registry and the scene factories.
- [`ToolkitConfig`] and [`init_tracing`]: configuration and logging setup.

Examples

```rust
use stv_scene::{Mount, Scene, SceneKind, ToolkitConfig};

let config = ToolkitConfig { seed: Some(7), ..Default::default() };
let blueprint = SceneKind::from_route("/curve").unwrap().build(&config).unwrap();
let mut scene = Scene::mount(blueprint, Mount::new("canvas", 640, 480), Mount::new("overlay", 640, 480));
scene.start().unwrap();
assert_eq!(scene.tick().unwrap().processed, 0);
let (canvas, _) = scene.cleanup();
assert!(canvas.nodes().is_empty());
```
"#]

pub mod camera;
pub mod config;
pub mod drag;
pub mod error;
pub mod mount;
pub mod object;
pub mod runtime;
pub mod scenes;
pub mod telemetry;
pub mod widget;

pub use camera::{ndc_to_overlay, OrthographicCamera, OVERLAY_MARGIN};
pub use config::ToolkitConfig;
pub use drag::{DragEffect, DragState, PointerEvent, HOVER_SCALE};
pub use error::SceneError;
pub use mount::Mount;
pub use object::{Color, ObjectId, SceneObject, Shape};
pub use runtime::{FrameReport, FreeDrag, Interaction, Lifecycle, Scene, SceneBlueprint, SceneContext};
pub use scenes::SceneKind;
pub use telemetry::{init_tracing, InitError};
pub use widget::{tau_label, BasisProbe, CurveParameter, PolylineSlider, ProbeParams};
