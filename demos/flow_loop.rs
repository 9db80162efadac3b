//! Terminal walkthrough of the widget lifecycle: configure, flow, pump,
//! pause. The host here just prints what a real UI would draw.
//!
//! Run with `cargo run --example flow_loop`.

use std::time::{Duration, Instant};

use flowview::{FlowHost, FlowResult, FlowView, RenderRequest, TickAnimation};

/// A host that tracks dispatched groups and prints sampled opacity per
/// surface, standing in for a retained-mode UI.
#[derive(Default)]
struct ConsoleHost {
    playing: Vec<(Instant, TickAnimation)>,
}

impl ConsoleHost {
    fn draw(&mut self, now: Instant) {
        self.playing
            .retain(|(started, group)| !group.is_finished(elapsed_ms(*started, now)));
        let mut line = String::new();
        for (started, group) in &self.playing {
            let sample = group.sample(elapsed_ms(*started, now));
            let bar = "#".repeat((sample.opacity * 20.0).round() as usize);
            line.push_str(&format!(
                "  surface {} |{:<20}| drift {:>6.1}",
                group.surface().0,
                bar,
                sample.translation().x
            ));
        }
        println!("{line}");
    }
}

fn elapsed_ms(from: Instant, to: Instant) -> u64 {
    to.saturating_duration_since(from).as_millis() as u64
}

impl FlowHost<&'static str> for ConsoleHost {
    fn render(&mut self, req: RenderRequest<'_, &'static str>) -> FlowResult<()> {
        println!(
            "-> load {:?} into surface {} (scale {})",
            req.frame, req.surface.0, req.scale
        );
        Ok(())
    }

    fn animate(&mut self, group: TickAnimation) -> FlowResult<()> {
        self.playing.push((Instant::now(), group));
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut view = FlowView::new();
    view.scale(1.1)
        .translate_xs([50, -50])
        .frames(["img1", "img2", "img3", "img4"])
        .fade_duration(300)
        .between_duration(700);
    view.flow();

    let mut host = ConsoleHost::default();
    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(4) {
        let now = Instant::now();
        view.pump(now, &mut host);
        host.draw(now);
        std::thread::sleep(Duration::from_millis(100));
    }

    view.pause();
    println!("paused; is_flowing = {}", view.is_flowing());
}
