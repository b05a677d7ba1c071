//! Headless demo driver
//!
//! Runs a scripted session against the simulation core and logs what a real
//! host (renderer + audio) would consume. Useful for eyeballing difficulty
//! pacing and for profiling the tick pipeline.

use crater_dash::consts::FRAME_MS;
use crater_dash::sim::state::{AudioCue, GameEvent};
use crater_dash::sim::tick::TickInput;
use crater_dash::Session;

fn main() {
    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed);
    let mut session = Session::new(seed);

    // Scripted input: sweep back and forth, hop every few seconds
    let mut input = TickInput::default();
    let mut ticks: u64 = 0;

    while session.is_running() && ticks < 60 * 60 * 5 {
        let phase = ticks % 240;
        input.left = phase < 100;
        input.right = phase >= 120 && phase < 220;
        input.jump = ticks % 180 == 0;

        session.tick(&input, FRAME_MS);
        ticks += 1;

        for event in session.take_events() {
            match event {
                GameEvent::Audio(AudioCue::ImpactCue) => log::info!("* impact"),
                GameEvent::Audio(AudioCue::AmbientNote) => log::trace!("~ ambient note"),
                GameEvent::GameOver { score } => {
                    println!("game over after {ticks} ticks, final score {score}");
                }
            }
        }
    }

    let state = session.state();
    println!(
        "seed {seed}: score {}, {} live objects, {} craters",
        session.current_score(),
        state.objects.len(),
        state.ground.craters().len()
    );
}
