//! Headless Overlay Example
//!
//! Draws a profiler-style overlay into an offscreen texture:
//! - A shaded title bar with text
//! - A frame time graph as a line strip
//! - Timer bars as flat boxes
//!
//! Run with `RUST_LOG=glimmer_draw=trace` to see every flush.

use glimmer_core::{logging, profiling};
use glimmer_draw::{BoxStyle, DrawConfig, DrawContext, GraphicsContext, Vec2, WgpuBackend};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;
const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

fn main() {
    logging::init();
    profiling::init_profiling("127.0.0.1:8585");

    let graphics = match GraphicsContext::new_owned_sync() {
        Ok(graphics) => graphics,
        Err(e) => {
            tracing::error!("{}", e);
            return;
        }
    };
    tracing::info!("Running on {:?}", graphics.info().backend);

    let target = graphics.device().create_texture(&wgpu::TextureDescriptor {
        label: Some("Overlay Target"),
        size: wgpu::Extent3d {
            width: WIDTH,
            height: HEIGHT,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = target.create_view(&wgpu::TextureViewDescriptor::default());

    let backend = WgpuBackend::new(graphics.clone(), FORMAT);
    let mut overlay = DrawContext::new(backend, DrawConfig::default().label("headless"));

    let frame_times: Vec<f32> = (0..120)
        .map(|i| 16.6 + 4.0 * (i as f32 * 0.3).sin() + if i % 37 == 0 { 12.0 } else { 0.0 })
        .collect();

    for frame in 0..3 {
        profiling::new_frame();

        overlay.render(WIDTH, HEIGHT, 1.0, |ui| {
            draw_title(ui, frame);
            draw_graph(ui, &frame_times);
            draw_timers(ui);
        });

        let stats = overlay.stats();
        tracing::info!(
            "Frame {}: {} vertices in {} draw calls over {} flushes (peak {} commands)",
            frame,
            stats.vertices_uploaded,
            stats.draw_calls,
            stats.flushes,
            stats.peak_commands
        );

        let mut encoder = graphics
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Overlay Encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Overlay Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.05,
                            g: 0.05,
                            b: 0.08,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            overlay.backend().render(&mut pass);
        }
        graphics.queue().submit(Some(encoder.finish()));
    }
}

fn draw_title(ui: &mut DrawContext<WgpuBackend>, frame: u32) {
    ui.draw_box(0.0, 0.0, WIDTH as f32, 14.0, 0xff30_3050, BoxStyle::Shaded);
    ui.draw_text(4.0, 3.0, 0xffffff, &format!("glimmer overlay - frame {frame}"));
}

fn draw_graph(ui: &mut DrawContext<WgpuBackend>, frame_times: &[f32]) {
    let (x0, y0, height) = (4.0, 20.0, 100.0);
    ui.draw_box(x0, y0, x0 + 480.0, y0 + height, 0x8000_0000, BoxStyle::Flat);

    let points: Vec<Vec2> = frame_times
        .iter()
        .enumerate()
        .map(|(i, ms)| Vec2::new(x0 + i as f32 * 4.0, y0 + height - ms * 2.5))
        .collect();
    ui.draw_line_strip(&points, 0xff40_ff40);

    let budget = y0 + height - 16.6 * 2.5;
    ui.draw_line_strip(&[Vec2::new(x0, budget), Vec2::new(x0 + 480.0, budget)], 0x80ff_ff00);
    ui.draw_text(x0 + 484.0, budget - 4.0, 0xffff00, "16.6ms");
}

fn draw_timers(ui: &mut DrawContext<WgpuBackend>) {
    const TIMERS: [(&str, f32, u32); 5] = [
        ("update", 3.2, 0xff4080ff),
        ("physics", 2.1, 0xffff8040),
        ("render", 7.9, 0xff40c040),
        ("ui", 1.4, 0xffc040c0),
        ("present", 0.6, 0xff808080),
    ];

    let mut y = 130.0;
    for (name, ms, color) in TIMERS {
        ui.draw_box(60.0, y, 60.0 + ms * 40.0, y + 9.0, color, BoxStyle::Shaded);
        ui.draw_text(4.0, y, 0xffffff, name);
        ui.draw_text(64.0 + ms * 40.0, y, 0xc0c0c0, &format!("{ms:.1}ms"));
        y += 12.0;
    }
}
