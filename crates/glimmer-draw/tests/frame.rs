//! Frame lifecycle tests against the recording backend.

use glam::{Mat4, Vec3};
use glimmer_draw::{
    BackendCall, BoxStyle, DrawConfig, DrawContext, FrameState, PrimitiveKind, RecordingBackend,
    Vec2, overlay_projection,
};

#[test]
fn test_overlay_frame_end_to_end() {
    glimmer_core::logging::try_init_with_filter("glimmer_draw=trace");

    let backend = RecordingBackend::new();
    let recorder = backend.recorder();
    let mut ctx = DrawContext::new(backend, DrawConfig::default());

    ctx.begin_frame(800, 600, 1.0);

    ctx.draw_text(10.0, 10.0, 0xffffff, "Hi");
    assert_eq!(ctx.batch().commands().len(), 1);
    assert_eq!(ctx.batch().commands()[0].vertex_count, 12);

    ctx.draw_box(0.0, 0.0, 100.0, 20.0, 0x112233, BoxStyle::Flat);
    assert_eq!(ctx.batch().commands().len(), 1);
    assert_eq!(ctx.batch().commands()[0].vertex_count, 18);

    let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0), Vec2::new(20.0, 0.0)];
    ctx.draw_line_strip(&points, 0x80ff_0000);
    assert_eq!(ctx.batch().commands().len(), 2);
    assert_eq!(ctx.batch().commands()[1].kind, PrimitiveKind::Lines);
    assert_eq!(ctx.batch().commands()[1].vertex_count, 4);

    ctx.end_frame();

    assert_eq!(
        recorder.calls(),
        vec![
            BackendCall::CreateFontTexture {
                width: 1024,
                height: 9
            },
            BackendCall::SaveState,
            BackendCall::SetProjection(overlay_projection(800, 600, 1.0)),
            BackendCall::Upload { vertex_count: 22 },
            BackendCall::Draw {
                kind: PrimitiveKind::Triangles,
                vertex_count: 18,
                first_vertex: 0
            },
            BackendCall::Draw {
                kind: PrimitiveKind::Lines,
                vertex_count: 4,
                first_vertex: 18
            },
            BackendCall::RestoreState,
        ]
    );

    let upload = recorder.last_upload().expect("one upload");
    // The flat box sits after the 12 text vertices, colors swapped to native order.
    assert!(upload[12..18].iter().all(|v| v.color == 0xff33_2211));
    // Lines keep the input alpha.
    assert!(upload[18..].iter().all(|v| v.color == 0x8000_00ff));
    assert!(ctx.batch().is_empty());
    assert_eq!(ctx.state(), FrameState::Idle);
}

#[test]
fn test_uninitialized_context_is_inert() {
    let backend = RecordingBackend::failing("no device");
    let recorder = backend.recorder();
    let mut ctx = DrawContext::new(backend, DrawConfig::default());

    assert_eq!(ctx.state(), FrameState::Uninitialized);

    ctx.render(800, 600, 1.0, |ctx| {
        ctx.draw_text(0.0, 0.0, 0xffffff, "ignored");
        ctx.draw_box(0.0, 0.0, 10.0, 10.0, 0xffffff, BoxStyle::Shaded);
        ctx.draw_line_strip(&[Vec2::ZERO, Vec2::ONE], 0xffffffff);
    });

    assert!(recorder.calls().is_empty());
    assert!(ctx.batch().is_empty());
    assert_eq!(ctx.stats().flushes, 0);
}

#[test]
fn test_projection_follows_scale() {
    let backend = RecordingBackend::new();
    let recorder = backend.recorder();
    let mut ctx = DrawContext::new(backend, DrawConfig::default());

    ctx.render(1920, 1080, 2.0, |_| {});

    let projections: Vec<_> = recorder
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            BackendCall::SetProjection(m) => Some(m),
            _ => None,
        })
        .collect();
    assert_eq!(projections, vec![overlay_projection(1920, 1080, 2.0)]);
}

#[test]
fn test_custom_projection() {
    let backend = RecordingBackend::new();
    let recorder = backend.recorder();
    let mut ctx = DrawContext::new(backend, DrawConfig::default());
    let projection = Mat4::from_scale(Vec3::new(0.5, -0.5, 1.0));

    ctx.begin_frame_with_projection(100, 100, projection);
    ctx.end_frame();

    assert!(recorder.calls().contains(&BackendCall::SetProjection(projection)));
}

#[test]
fn test_frames_are_independent() {
    let backend = RecordingBackend::new();
    let recorder = backend.recorder();
    let mut ctx = DrawContext::new(backend, DrawConfig::default());

    for frame in 0..3 {
        ctx.render(800, 600, 1.0, |ctx| {
            ctx.draw_text(0.0, 0.0, 0xffffff, &format!("frame {frame}"));
        });
    }

    // Every frame starts at vertex 0 of its own upload.
    assert_eq!(recorder.flush_count(), 3);
    assert!(recorder.draws().iter().all(|&(_, _, first)| first == 0));
    assert_eq!(ctx.stats().flushes, 1);
}

#[test]
fn test_end_frame_without_begin_still_flushes() {
    let backend = RecordingBackend::new();
    let recorder = backend.recorder();
    let mut ctx = DrawContext::new(backend, DrawConfig::default());
    recorder.clear();

    ctx.draw_box(0.0, 0.0, 1.0, 1.0, 0, BoxStyle::Flat);
    ctx.end_frame();

    assert_eq!(recorder.flush_count(), 1);
    assert!(!recorder.calls().contains(&BackendCall::RestoreState));
}
