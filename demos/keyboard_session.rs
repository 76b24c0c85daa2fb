use particle_box::*;

fn main() -> Result<()> {
    let state = SimulationState::with_seed(SimulationConfig::default(), 2024)?;
    let mut frame_loop = FrameLoop::new(
        state,
        DrawListRenderer::new(),
        &SubdividedTetrahedron::new(4),
        Viewport::default(),
    )?;
    let mut keys = KeyBindings::default();

    // A scripted stand-in for keyboard events: (key, count field, frames to run after).
    let script = [('n', "100", 60), ('n', "1000", 60), ('r', "0", 10), ('n', "7", 30)];
    for (key, field, frames) in script {
        for command in keys.key_down(key, field) {
            let spawned = frame_loop.apply(command);
            println!("{command:?} -> spawned {spawned}, now {}", frame_loop.particle_count());
        }
        keys.key_up(key);
        frame_loop.run_frames(frames);
    }

    println!(
        "Drew {} frames, last frame had {} spheres",
        frame_loop.renderer().frames_drawn(),
        frame_loop.renderer().commands().len()
    );
    Ok(())
}
