use anyhow::{bail, Result};

use pagescroll_engine::{EasingType, EasingTypeExt};

pub fn run(samples: usize) -> Result<()> {
    if samples < 2 {
        bail!("need at least 2 samples, got {}", samples);
    }

    let ts: Vec<f64> = (0..samples)
        .map(|i| i as f64 / (samples - 1) as f64)
        .collect();

    print!("{:<20}", "easing");
    for t in &ts {
        print!("{:>8}", format!("t={:.2}", t));
    }
    println!();

    for easing in EasingType::ALL {
        print!("{:<20}", easing.name());
        for t in &ts {
            print!("{:>8.3}", easing.apply(*t));
        }
        println!();
    }

    Ok(())
}
