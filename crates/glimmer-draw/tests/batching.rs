//! Batching behaviour through the public draw API (no GPU required).

use glimmer_draw::{
    BackendCall, BoxStyle, DrawConfig, DrawContext, PrimitiveKind, Recorder, RecordingBackend, Vec2,
};

fn context_with(config: DrawConfig) -> (DrawContext<RecordingBackend>, Recorder) {
    let backend = RecordingBackend::new();
    let recorder = backend.recorder();
    let ctx = DrawContext::new(backend, config);
    recorder.clear();
    (ctx, recorder)
}

fn context() -> (DrawContext<RecordingBackend>, Recorder) {
    context_with(DrawConfig::default())
}

#[test]
fn test_same_kind_primitives_share_a_draw() {
    let (mut ctx, recorder) = context();

    ctx.begin_frame(800, 600, 1.0);
    for i in 0..10 {
        ctx.draw_box(0.0, i as f32, 10.0, i as f32 + 1.0, 0xff0000, BoxStyle::Flat);
    }
    ctx.draw_text(0.0, 20.0, 0xffffff, "merged");
    ctx.end_frame();

    assert_eq!(
        recorder.draws(),
        vec![(PrimitiveKind::Triangles, 10 * 6 + 6 * 6, 0)]
    );
}

#[test]
fn test_kind_changes_start_new_draws() {
    let (mut ctx, recorder) = context();
    let line = [Vec2::ZERO, Vec2::new(5.0, 5.0)];

    ctx.begin_frame(800, 600, 1.0);
    ctx.draw_box(0.0, 0.0, 1.0, 1.0, 0, BoxStyle::Flat);
    ctx.draw_line_strip(&line, 0xffffffff);
    ctx.draw_box(0.0, 0.0, 1.0, 1.0, 0, BoxStyle::Shaded);
    ctx.draw_line_strip(&line, 0xffffffff);
    ctx.end_frame();

    assert_eq!(
        recorder.draws(),
        vec![
            (PrimitiveKind::Triangles, 6, 0),
            (PrimitiveKind::Lines, 2, 6),
            (PrimitiveKind::Triangles, 6, 8),
            (PrimitiveKind::Lines, 2, 14),
        ]
    );
}

#[test]
fn test_vertex_overflow_flushes_once() {
    let (mut ctx, recorder) = context_with(DrawConfig::default().vertex_capacity(60));

    ctx.begin_frame(800, 600, 1.0);
    // 9 boxes fill 54 of 60 vertices; the 10th still fits, the 11th does not.
    for _ in 0..11 {
        ctx.draw_box(0.0, 0.0, 1.0, 1.0, 0, BoxStyle::Flat);
    }
    assert_eq!(recorder.flush_count(), 1);
    assert_eq!(ctx.batch().pending_vertices(), 6);
    ctx.end_frame();

    let uploads: Vec<usize> = recorder.uploads().iter().map(Vec::len).collect();
    assert_eq!(uploads, vec![60, 6]);
}

#[test]
fn test_command_overflow_flushes() {
    let (mut ctx, recorder) = context_with(DrawConfig::default().command_capacity(4));
    let line = [Vec2::ZERO, Vec2::ONE];

    ctx.begin_frame(800, 600, 1.0);
    for _ in 0..3 {
        ctx.draw_box(0.0, 0.0, 1.0, 1.0, 0, BoxStyle::Flat);
        ctx.draw_line_strip(&line, 0);
    }
    ctx.end_frame();

    // Six alternating commands with room for four: one flush of four, then two.
    let draws = recorder.draws();
    assert_eq!(recorder.flush_count(), 2);
    assert_eq!(draws.len(), 6);
    assert_eq!(draws[4], (PrimitiveKind::Triangles, 6, 0));
    assert_eq!(draws[5], (PrimitiveKind::Lines, 2, 6));
}

#[test]
fn test_pending_never_exceeds_capacity() {
    let capacity = 100;
    let (mut ctx, _recorder) = context_with(
        DrawConfig::default()
            .vertex_capacity(capacity)
            .command_capacity(3),
    );

    ctx.begin_frame(800, 600, 1.0);
    let mut seed = 0x2545_f491_u32;
    for _ in 0..500 {
        // xorshift32 step.
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;

        match seed % 3 {
            0 => ctx.draw_box(0.0, 0.0, 4.0, 4.0, seed, BoxStyle::Flat),
            1 => {
                let points: Vec<Vec2> = (0..(seed % 20) as usize)
                    .map(|i| Vec2::new(i as f32, 0.0))
                    .collect();
                ctx.draw_line_strip(&points, seed);
            }
            _ => ctx.draw_text(0.0, 0.0, seed, &"x".repeat((seed % 16) as usize)),
        }

        assert!(ctx.batch().pending_vertices() <= capacity);
        assert!(ctx.batch().pending_commands() <= 3);
        let counted: u32 = ctx.batch().commands().iter().map(|c| c.vertex_count).sum();
        assert_eq!(counted as usize, ctx.batch().pending_vertices());
    }
    ctx.end_frame();
    assert!(ctx.batch().is_empty());
}

#[test]
fn test_draw_offsets_are_contiguous() {
    let (mut ctx, recorder) = context_with(DrawConfig::default().vertex_capacity(64));
    let points: Vec<Vec2> = (0..6).map(|i| Vec2::new(i as f32, 0.0)).collect();

    ctx.begin_frame(800, 600, 1.0);
    for _ in 0..8 {
        ctx.draw_text(0.0, 0.0, 0, "ab");
        ctx.draw_line_strip(&points, 0);
    }
    ctx.end_frame();

    // Within each flush, draws tile the uploaded range exactly.
    let calls = recorder.calls();
    let mut expected_first = 0;
    let mut uploaded = 0;
    for call in calls {
        match call {
            BackendCall::Upload { vertex_count } => {
                assert_eq!(expected_first, uploaded);
                uploaded = vertex_count as u32;
                expected_first = 0;
            }
            BackendCall::Draw {
                vertex_count,
                first_vertex,
                ..
            } => {
                assert_eq!(first_vertex, expected_first);
                expected_first += vertex_count;
            }
            _ => {}
        }
    }
    assert_eq!(expected_first, uploaded);
}

#[test]
fn test_flush_is_idempotent() {
    let (mut ctx, recorder) = context();

    ctx.begin_frame(800, 600, 1.0);
    ctx.draw_box(0.0, 0.0, 1.0, 1.0, 0, BoxStyle::Flat);
    assert!(ctx.flush());
    assert!(!ctx.flush());
    assert!(!ctx.flush());
    ctx.end_frame();

    assert_eq!(recorder.flush_count(), 1);
    assert_eq!(recorder.draw_count(), 1);
}

#[test]
fn test_stats_reset_each_frame() {
    let (mut ctx, _recorder) = context();

    ctx.render(800, 600, 1.0, |ctx| {
        ctx.draw_box(0.0, 0.0, 1.0, 1.0, 0, BoxStyle::Flat);
        ctx.flush();
        ctx.draw_box(0.0, 0.0, 1.0, 1.0, 0, BoxStyle::Flat);
    });
    let stats = ctx.stats();
    assert_eq!(stats.flushes, 2);
    assert_eq!(stats.draw_calls, 2);
    assert_eq!(stats.vertices_uploaded, 12);

    ctx.render(800, 600, 1.0, |_| {});
    assert_eq!(ctx.stats().flushes, 0);
}

#[test]
#[should_panic(expected = "only holds 12")]
fn test_oversized_text_panics() {
    let (mut ctx, _recorder) = context_with(DrawConfig::default().vertex_capacity(12));
    ctx.begin_frame(800, 600, 1.0);
    ctx.draw_text(0.0, 0.0, 0, "abc");
}
