use std::io::{self, Write};
use std::time::Duration;

use log::{debug, info};

use crate::domain::Simulation;
use crate::rendering::TerminalRenderer;

/// Waits between rendered generations
pub trait Pacer {
    fn wait(&mut self);
}

/// Sleeps the current thread for a fixed interval
#[derive(Clone, Copy, Debug)]
pub struct FixedDelay(pub Duration);

impl Pacer for FixedDelay {
    fn wait(&mut self) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}

/// Driver runs the render loop around a simulation.
/// It owns the simulation; the renderer only ever borrows the settled grid.
pub struct Driver<P: Pacer> {
    simulation: Simulation,
    renderer: TerminalRenderer,
    pacer: P,
}

impl<P: Pacer> Driver<P> {
    pub fn new(simulation: Simulation, renderer: TerminalRenderer, pacer: P) -> Self {
        Self {
            simulation,
            renderer,
            pacer,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Draw the current generation without advancing
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.renderer
            .draw(self.simulation.grid(), self.simulation.generation(), out)
    }

    /// Advance one generation, draw it, then wait
    pub fn step<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        self.simulation.advance();
        debug!(
            "generation {}: population {}",
            self.simulation.generation(),
            self.simulation.grid().population()
        );
        self.render(out)?;
        self.pacer.wait();
        Ok(())
    }

    /// Draw the initial state, then step until `max_generations` is reached,
    /// or forever when it is `None`.
    pub fn run<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        max_generations: Option<u64>,
    ) -> io::Result<()> {
        let (height, width) = self.simulation.grid().dimensions();
        info!(
            "Running {}x{} {} simulation (limit: {:?})",
            height,
            width,
            self.simulation.rule().name(),
            max_generations
        );

        self.render(out)?;
        self.pacer.wait();

        while max_generations.is_none_or(|limit| self.simulation.generation() < limit) {
            self.step(out)?;
        }

        info!("Stopped after {} generations", self.simulation.generation());
        Ok(())
    }
}
