// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-sample cost of a slider drag: map the position, then repaint the changed strip.

use core::time::Duration;
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use tactile_widgets::{Color, Frame, RecordingCanvas, Slider, SliderStyle, Theme};

const STYLE: SliderStyle = SliderStyle {
    border: Color::WHITE,
    foreground: Color::GREEN,
};

fn slider_drag(c: &mut Criterion) {
    let theme = Theme::default();
    // A sweep right then back left, as a finger would.
    let xs: Vec<i32> = (0..=320).step_by(4).chain((0..=320).rev().step_by(4)).collect();

    let mut g = c.benchmark_group("slider_drag");
    g.warm_up_time(Duration::from_secs(1));
    g.measurement_time(Duration::from_secs(3));

    g.bench_function("value_at", |b| {
        let slider = Slider::new(Frame::new(0, 0, 320, 30), STYLE, 0, ());
        b.iter(|| {
            for &x in &xs {
                black_box(slider.value_at(black_box(x)));
            }
        });
    });

    g.bench_function("sweep_and_repaint", |b| {
        b.iter_batched(
            || {
                let mut slider = Slider::new(Frame::new(0, 0, 320, 30), STYLE, 0, ());
                let mut canvas = RecordingCanvas::new();
                slider.draw(&mut canvas, &theme);
                canvas.clear();
                (slider, canvas)
            },
            |(mut slider, mut canvas)| {
                for &x in &xs {
                    slider.set_value(slider.value_at(x));
                    slider.draw_value(&mut canvas, &theme);
                }
                black_box(canvas.ops().len())
            },
            BatchSize::SmallInput,
        );
    });

    g.finish();
}

criterion_group!(benches, slider_drag);
criterion_main!(benches);
