//! Walk through every experiment at its default parameters and print the
//! readouts, then sweep the projectile angle.
//!
//! Run with: cargo run -p vlab --example lab_tour [config.json]

use vlab::{ExperimentKind, LabConfig, Stage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => LabConfig::from_file(path)?,
        None => LabConfig::default(),
    };

    for kind in ExperimentKind::ALL {
        let mut stage = Stage::new(kind, &config.scene);
        // One simulated second at 60 fps.
        for _ in 0..60 {
            stage.tick(1.0 / 60.0);
        }
        println!("{} {}", kind.icon(), kind.title());
        for (spec, value) in stage.store().iter() {
            println!("  {}", spec.format_label(value));
        }
        for readout in stage.readouts() {
            println!("  {readout}");
        }
        println!("  {} scene objects, t = {:.2} s", stage.scene().len(), stage.sample_time());
        println!();
    }

    let mut stage = Stage::new(ExperimentKind::Projectile, &config.scene);
    println!("angle  range");
    for angle in (15..=80).step_by(5) {
        stage.set_param("angle", angle as f64)?;
        println!("{angle:>5}  {}", stage.readouts()[0].value_text());
    }
    Ok(())
}
