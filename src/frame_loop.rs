use std::time::{Duration, Instant};

use log::{debug, info};

use crate::{
    dynamics::stepper::StepStats,
    error::Result,
    input::ControlCommand,
    render::{Camera, FrameContext, MeshSource, Renderer, SphereMesh, Viewport},
    simulation::SimulationState,
    utils::{
        logging::warn_if_frame_budget_exceeded,
        profiling::{FrameProfiler, ScopedTimer},
    },
};

/// Outcome of a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub stats: StepStats,
    pub step_time: Duration,
    pub render_time: Duration,
    pub over_budget: bool,
}

type CountObserver = Box<dyn FnMut(usize)>;

/// Drives one step-then-draw pair per display refresh and applies control
/// requests immediately.
///
/// Construction generates the sphere mesh and initializes the renderer; a
/// `FrameLoop` therefore only exists once its collaborators are ready.
pub struct FrameLoop<R: Renderer> {
    state: SimulationState,
    renderer: R,
    mesh: SphereMesh,
    camera: Camera,
    context: FrameContext,
    profiler: FrameProfiler,
    count_observers: Vec<CountObserver>,
}

impl<R: Renderer> FrameLoop<R> {
    pub fn new(
        state: SimulationState,
        mut renderer: R,
        mesh_source: &dyn MeshSource,
        viewport: Viewport,
    ) -> Result<Self> {
        let mesh = mesh_source.generate()?;
        mesh.validate()?;
        renderer.initialize(&mesh)?;
        info!(
            "frame loop ready: renderer {}, {} sphere triangles",
            renderer.name(),
            mesh.triangle_count()
        );

        let camera = Camera::default();
        let context = FrameContext::with_config(&camera, viewport, state.config());
        Ok(Self {
            state,
            renderer,
            mesh,
            camera,
            context,
            profiler: FrameProfiler::default(),
            count_observers: Vec::new(),
        })
    }

    /// Runs one physics tick, then one draw of the resulting store.
    pub fn frame(&mut self) -> FrameReport {
        let frame_start = Instant::now();
        let _trace = ScopedTimer::new("frame");

        let mut step_time = Duration::ZERO;
        let stats = {
            let _timer = ScopedTimer::accumulate("frame::step", &mut step_time);
            self.state.step()
        };

        let mut render_time = Duration::ZERO;
        {
            let _timer = ScopedTimer::accumulate("render::draw", &mut render_time);
            self.renderer.draw(&self.context, self.state.store());
        }

        let elapsed = frame_start.elapsed();
        let over_budget =
            warn_if_frame_budget_exceeded(elapsed, self.state.config().frame_budget_ms);

        self.profiler.frames += 1;
        self.profiler.step_time += step_time;
        self.profiler.render_time += render_time;
        self.profiler.total_frame_time += elapsed;
        self.profiler.particle_count = stats.particles;
        self.profiler.reflections += stats.reflections;
        if over_budget {
            self.profiler.over_budget_frames += 1;
        }

        FrameReport {
            stats,
            step_time,
            render_time,
            over_budget,
        }
    }

    /// Runs `frames` consecutive frames and returns the last report, if any.
    pub fn run_frames(&mut self, frames: usize) -> Option<FrameReport> {
        let mut last = None;
        for _ in 0..frames {
            last = Some(self.frame());
        }
        last
    }

    /// Adds up to `requested` particles right away; returns how many were added.
    pub fn request_spawn(&mut self, requested: usize) -> usize {
        let spawned = self.state.spawn_many(requested);
        self.notify_count();
        spawned
    }

    /// Removes every particle right away.
    pub fn request_reset(&mut self) {
        self.state.reset();
        self.notify_count();
    }

    /// Dispatches a control command; returns the number of particles spawned.
    pub fn apply(&mut self, command: ControlCommand) -> usize {
        match command {
            ControlCommand::Spawn(requested) => self.request_spawn(requested),
            ControlCommand::Reset => {
                self.request_reset();
                0
            }
        }
    }

    /// Registers a readout updated with the particle count after every spawn or reset.
    pub fn on_count_changed<F>(&mut self, observer: F)
    where
        F: FnMut(usize) + 'static,
    {
        self.count_observers.push(Box::new(observer));
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.context = FrameContext::with_config(&self.camera, viewport, self.state.config());
    }

    pub fn particle_count(&self) -> usize {
        self.state.particle_count()
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn mesh(&self) -> &SphereMesh {
        &self.mesh
    }

    pub fn context(&self) -> &FrameContext {
        &self.context
    }

    pub fn profiler(&self) -> &FrameProfiler {
        &self.profiler
    }

    fn notify_count(&mut self) {
        let count = self.state.particle_count();
        debug!("particle count now {count}");
        for observer in &mut self.count_observers {
            observer(count);
        }
    }
}
