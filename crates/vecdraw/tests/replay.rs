//! Replays whole drawing sessions against the headless backend.

use approx::assert_relative_eq;
use vecdraw::{
    backend::HeadlessBackend,
    color::Color,
    recorder::{DrawCall, SWATCH},
    script::{self, Event},
    session::Session,
    topology::Topology,
};
use vecdraw_linalg::vec2;

fn replay(session: &mut Session, backend: &mut HeadlessBackend, src: &str) {
    let mut rng = fastrand::Rng::with_seed(0);
    for event in script::parse(src).unwrap() {
        let redraw = event.redraws();
        event.apply(session, &mut rng);
        if redraw {
            session.render(backend).unwrap();
        }
    }
}

#[test]
fn draws_shapes_across_mode_changes() {
    let mut session = Session::new(64, (400, 200));
    let mut backend = HeadlessBackend::new(64).unwrap();
    session.render(&mut backend).unwrap();

    replay(
        &mut session,
        &mut backend,
        "
        mode triangles
        click 0 0
        click 200 0
        click 100 200
        click 50 50     # incomplete, dropped on the next mode change
        mode line-strip
        color 0 0 255
        click 0 100
        click 200 100
        mode points
        click 100 100
        ",
    );

    assert_eq!(
        backend.draws(),
        &[
            DrawCall { topology: Topology::Triangles, first: 0, count: 3 },
            DrawCall { topology: Topology::Triangles, first: 3, count: 3 },
            DrawCall { topology: Topology::LineStrip, first: 6, count: 2 },
            DrawCall { topology: Topology::Points, first: 8, count: 1 },
        ]
    );

    // The line strip overwrote the space of the dropped vertex.
    assert_relative_eq!(backend.vertex(6).unwrap(), vec2(-1.0, 0.0));
    assert_relative_eq!(backend.vertex(7).unwrap(), vec2(1.0, 0.0));
    assert_eq!(backend.color(5), Some(Color::RED.to_rgba()));
    assert_eq!(backend.color(6), Some(Color::BLUE.to_rgba()));
    assert_relative_eq!(backend.vertex(8).unwrap(), vec2(0.0, 0.0));
}

#[test]
fn reset_keeps_only_the_swatch() {
    let mut session = Session::new(64, (100, 100));
    let mut backend = HeadlessBackend::new(64).unwrap();
    replay(
        &mut session,
        &mut backend,
        "
        color 10 20 30
        mode lines
        click 1 1
        click 2 2
        mode triangle-strip
        reset
        ",
    );

    assert_eq!(
        backend.draws(),
        &[
            DrawCall { topology: Topology::Triangles, first: 0, count: 3 },
            DrawCall { topology: Topology::Points, first: 3, count: 0 },
        ]
    );
    for (i, v) in SWATCH.iter().enumerate() {
        assert_eq!(backend.vertex(i), Some(*v));
        assert_eq!(backend.color(i), Some(Color::RED.to_rgba()));
    }
}

#[test]
fn full_buffer_ignores_clicks() {
    let mut session = Session::new(5, (100, 100));
    let mut backend = HeadlessBackend::new(5).unwrap();
    replay(
        &mut session,
        &mut backend,
        "click 10 10\nclick 20 20\nclick 30 30\nclick 40 40\n",
    );
    assert_eq!(session.recorder().total(), 5);
    assert_eq!(
        backend.draws().last(),
        Some(&DrawCall { topology: Topology::Points, first: 3, count: 2 })
    );
}

#[test]
fn random_sessions_stay_consistent() {
    let mut rng = fastrand::Rng::with_seed(0xd4a3);
    for _ in 0..50 {
        let mut session = Session::new(256, (100, 100));
        let mut backend = HeadlessBackend::new(256).unwrap();
        session.render(&mut backend).unwrap();

        for _ in 0..100 {
            let event = match rng.u8(0..10) {
                0..=5 => Event::Click(rng.f32() * 100.0, rng.f32() * 100.0),
                6 | 7 => Event::Mode(Topology::ALL[rng.usize(0..Topology::ALL.len())]),
                8 => Event::Random,
                _ => Event::Color(Color::from_rgb8(rng.u8(..), 0, 0)),
            };
            let redraw = event.redraws();
            event.apply(&mut session, &mut rng);
            if redraw {
                session.render(&mut backend).unwrap();
            }

            let rec = session.recorder();
            let committed: usize = rec.segments().iter().map(|s| s.count).sum();
            assert_eq!(committed, rec.committed());
            assert_eq!(rec.total(), rec.committed() + rec.pending_len());
            for seg in &rec.segments()[1..] {
                assert!(seg.count > 0);
                assert_eq!(seg.topology.retained(seg.count), seg.count);
            }
        }

        session.render(&mut backend).unwrap();
        let rec = session.recorder();
        for (i, v) in rec.pending().iter().enumerate() {
            assert_eq!(backend.vertex(rec.committed() + i), Some(*v));
        }
        assert_eq!(backend.color(0), Some(session.color().to_rgba()));
    }
}
