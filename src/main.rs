//! Astro Runner entry point
//!
//! The playable game targets wasm32 and is driven through the exported
//! `Minigame` handle. The native binary runs a seeded headless demo of the
//! simulation instead, which is handy for eyeballing difficulty pacing.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use astro_runner::consts::FRAME_REF_MS;
    use astro_runner::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Astro Runner (native) starting...");
    log::info!("rendering targets wasm32; running a headless demo run");

    let seed = 20260806;
    let mut state = GameState::new(500.0, 133.0, seed);
    state.start();

    // Naive pilot: jump whenever a live obstacle closes within 40 px.
    let mut ticks: u64 = 0;
    while state.phase == GamePhase::Running && ticks < 120_000 {
        let danger = state.obstacles.iter().any(|ob| {
            !ob.passed
                && ob.pos.x + ob.size.x > state.player.pos.x
                && ob.pos.x - (state.player.pos.x + state.player.size.x) < 40.0
        });
        tick(&mut state, &TickInput { jump: danger }, FRAME_REF_MS);
        ticks += 1;
    }

    log::info!(
        "demo over after {ticks} ticks with {} obstacles live",
        state.obstacles.len()
    );
    println!("final score: {}", state.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm entry point is the exported Minigame handle; this is just to
    // satisfy the bin target.
}
