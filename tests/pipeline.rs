use glowline::chart::walker::find_length_at_x;
use glowline::chart::*;
use glowline::components::GlowChart;

const DT: f32 = 1.0 / 60.0;

fn mounted(samples: Vec<Sample>) -> GlowChart {
    let mut chart = GlowChart::new(samples, ChartConfig::default());
    chart.mount();
    chart
}

fn run(chart: &mut GlowChart, secs: f32) {
    for _ in 0..(secs / DT) as usize {
        chart.frame(DT);
    }
}

fn demo_path() -> CurvePath {
    let layout = ChartLayout::default();
    let samples = cpu_usage_samples();
    let x = PointScale::new(samples.iter().map(|s| s.label.clone()), layout.x_range());
    let y = LinearScale::percent(layout.y_range());
    let points: Vec<PixelPoint> = samples
        .iter()
        .enumerate()
        .map(|(i, s)| PixelPoint::new(x.position(i).unwrap(), y.map(s.value)))
        .collect();
    catmull_rom(&points, 0.3)
}

#[test]
fn nearest_matches_brute_force_across_plot() {
    let layout = ChartLayout::default();
    let samples = cpu_usage_samples();
    let scale = PointScale::new(samples.iter().map(|s| s.label.clone()), layout.x_range());
    let xs = scale.positions();
    let (left, right) = layout.x_range();
    let mut x = left;
    while x <= right {
        let got = nearest_index(&xs, x).unwrap();
        let best = xs
            .iter()
            .map(|sx| (sx - x).abs())
            .fold(f32::INFINITY, f32::min);
        assert_eq!((xs[got] - x).abs(), best, "pointer x {x}");
        x += 0.7;
    }
}

#[test]
fn two_sample_scenario() {
    let samples = vec![Sample::new("0 seconds", 10.0), Sample::new("2 seconds", 15.0)];
    let mut chart = mounted(samples);
    let x0 = chart.sample_point(0).unwrap().x;

    chart.handle_pointer(PointerEvent::Enter);
    chart.handle_pointer(PointerEvent::Move { x: x0 });
    assert_eq!(chart.nearest(), Some(0));

    let layout = ChartLayout::default();
    let expected_y = (layout.height - layout.margin.bottom)
        - 0.1 * (layout.height - layout.margin.bottom - layout.margin.top);
    assert!((chart.animation().target_y() - expected_y).abs() < 1e-3);
}

#[test]
fn untouched_pointer_resolves_to_first_sample() {
    let mut chart = mounted(cpu_usage_samples());
    assert_eq!(chart.pointer().x(), 0.0);
    assert_eq!(chart.nearest(), Some(0));
    run(&mut chart, 0.5);
    assert_eq!(chart.nearest(), Some(0));
}

#[test]
fn trace_settles_on_the_hovered_sample() {
    let mut chart = mounted(cpu_usage_samples());
    let target = chart.sample_point(17).unwrap();

    chart.handle_pointer(PointerEvent::Enter);
    chart.handle_pointer(PointerEvent::Move { x: target.x + 3.0 });
    assert_eq!(chart.nearest(), Some(17));

    run(&mut chart, 4.0);
    assert_eq!(chart.animation().x(), target.x);
    let step = chart.config().trace.step;
    let last = chart.trace().last().unwrap();
    assert!(target.x - last.x <= step + 1e-2, "last {last:?} target {target:?}");
    assert!(last.x <= target.x + 1e-2);
    assert_eq!(chart.marker(), Some(last));
}

#[test]
fn trace_lags_the_pointer() {
    let mut chart = mounted(cpu_usage_samples());
    run(&mut chart, 0.1);
    let far = chart.sample_point(30).unwrap();
    chart.handle_pointer(PointerEvent::Move { x: far.x });
    chart.frame(DT);
    let last = chart.trace().last().unwrap();
    assert!(last.x < far.x - 100.0);
}

#[test]
fn bisection_is_sub_pixel_on_800_wide_paths() {
    let line = catmull_rom(&[PixelPoint::new(0.0, 100.0), PixelPoint::new(800.0, 20.0)], 0.3);
    let curve = demo_path();
    for path in [&line, &curve] {
        let start = path.start().unwrap().x;
        let end = path.end().unwrap().x;
        for i in 1..40 {
            let target = start + (end - start) * i as f32 / 40.0;
            let s = find_length_at_x(path, target, 20);
            let found = path.point_at_length(s).unwrap();
            assert!((found.x - target).abs() < 1.0, "target {target} found {}", found.x);
        }
    }
}

#[test]
fn rotation_grows_with_the_cutoff() {
    let path = demo_path();
    let config = TraceConfig::default();
    let start = walk(&path, 0.0, &config).unwrap();
    assert!(start.rotation.abs() < 1e-2);

    let mut prev = start.rotation;
    let mut x = 48.0;
    while x <= 788.0 {
        let trace = walk(&path, x, &config).unwrap();
        assert!(trace.rotation + 1e-3 >= prev);
        prev = trace.rotation;
        x += 10.0;
    }
    let full = walk(&path, 10_000.0, &config).unwrap();
    assert!((full.rotation - 720.0).abs() < 1e-2);
}

#[test]
fn walking_is_idempotent() {
    let path = demo_path();
    let config = TraceConfig::default();
    let a = walk(&path, 431.5, &config).unwrap();
    let b = walk(&path, 431.5, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unmount_stops_recomputation() {
    let mut chart = mounted(cpu_usage_samples());
    let far = chart.sample_point(25).unwrap();
    chart.handle_pointer(PointerEvent::Move { x: far.x });
    run(&mut chart, 0.2);

    let frames = chart.frames();
    let trace = chart.trace().clone();
    chart.unmount();
    assert!(!chart.is_mounted());

    run(&mut chart, 1.0);
    assert_eq!(chart.frames(), frames);
    assert_eq!(chart.trace(), &trace);
}
