use particle_box::*;

fn main() -> Result<()> {
    let state = SimulationState::new(SimulationConfig::default())?;
    let mut frame_loop = FrameLoop::new(
        state,
        DrawListRenderer::new(),
        &SubdividedTetrahedron::default(),
        Viewport::new(1024, 768),
    )?;
    frame_loop.on_count_changed(|count| println!("Particles: {count}"));

    frame_loop.request_spawn(150);
    frame_loop.run_frames(120);
    frame_loop.request_spawn(500);
    let report = frame_loop.run_frames(240);

    if let Some(report) = report {
        println!(
            "Tick {}: {} particles, {} reflections in the last frame",
            report.stats.tick, report.stats.particles, report.stats.reflections
        );
    }
    println!(
        "Average frame: {:.3} ms over {} frames",
        frame_loop.profiler().average_frame_time().as_secs_f64() * 1000.0,
        frame_loop.profiler().frames
    );
    Ok(())
}
