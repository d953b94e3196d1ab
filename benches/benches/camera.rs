// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_camera2d::{
    Camera, CameraConfig, CameraController, GestureEvent, GesturePhase, ViewportDisplay,
    ViewportEvent,
};

const VIEWPORT: Size = Size::new(1024.0, 768.0);
const CONTENT: Rect = Rect::new(0.0, 0.0, 2048.0, 2048.0);

// Settings a host would ship alongside its scene.
const CONFIG_JSON: &str = r#"{ "min_scale": 0.4, "margin": 20.0, "tap_move_duration": 0.5 }"#;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * (f64::from(self.next_u32()) / f64::from(u32::MAX))
    }
}

#[derive(Default)]
struct NullDisplay {
    transforms: usize,
}

impl ViewportDisplay for NullDisplay {
    fn set_camera_transform(&mut self, camera: &Camera) {
        black_box(camera);
        self.transforms += 1;
    }
}

fn gesture_stream(n: usize, seed: u64) -> Vec<ViewportEvent> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            let anchor = Point::new(rng.range(0.0, VIEWPORT.width), rng.range(0.0, VIEWPORT.height));
            let gesture = match rng.next_u32() % 3 {
                0 => GestureEvent::Pan {
                    translation: Vec2::new(rng.range(-40.0, 40.0), rng.range(-40.0, 40.0)),
                },
                1 => GestureEvent::Pinch {
                    touches: 2,
                    scale_factor: rng.range(0.9, 1.1),
                    anchor,
                },
                _ => GestureEvent::Tap {
                    phase: GesturePhase::Ended,
                    location: anchor,
                },
            };
            ViewportEvent::Gesture(gesture)
        })
        .collect()
}

fn attached_controller() -> (CameraController, NullDisplay) {
    let config: CameraConfig = serde_json::from_str(CONFIG_JSON).expect("valid config JSON");
    let mut controller = CameraController::new(config).expect("valid config");
    let mut display = NullDisplay::default();
    controller.attach(VIEWPORT, CONTENT, &mut display);
    (controller, display)
}

fn camera(c: &mut Criterion) {
    let events = gesture_stream(1_000, 0x5eed);

    let mut g = c.benchmark_group("camera2d");
    g.bench_function("dispatch_1k_gestures", |b| {
        b.iter_batched(
            attached_controller,
            |(mut controller, mut display)| {
                for ev in &events {
                    controller.dispatch(*ev, &mut display);
                    controller.tick(1.0 / 60.0, &mut display);
                }
                black_box(display.transforms)
            },
            BatchSize::SmallInput,
        );
    });

    let (mut controller, mut display) = attached_controller();
    g.bench_function("pinch_anchor", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let scale_factor = if flip { 1.05 } else { 1.0 / 1.05 };
            controller.dispatch(
                ViewportEvent::Gesture(GestureEvent::Pinch {
                    touches: 2,
                    scale_factor,
                    anchor: Point::new(300.0, 200.0),
                }),
                &mut display,
            );
            black_box(controller.camera())
        });
    });

    g.bench_function("resize", |b| {
        let sizes = [VIEWPORT, Size::new(768.0, 1024.0)];
        let mut i = 0;
        b.iter(|| {
            i ^= 1;
            controller.dispatch(ViewportEvent::Resize(sizes[i]), &mut display);
            black_box(controller.pan_range())
        });
    });
    g.finish();
}

criterion_group!(benches, camera);
criterion_main!(benches);
