//! Fits a unitary matrix to a random target with repeated `update_unitary`
//! calls on the loss `‖U - V‖²`.
//!
//! Run with `RUST_LOG=liegrad_optim=debug` to see the update engine's events.

use liegrad::core::{test_utils::random_unitary, validation::unitary_defect};
use liegrad::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

const DIM: usize = 4;
const STEPS: usize = 200;
const LEARNING_RATE: f64 = 0.05;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(7);
    let target = random_unitary(DIM, &mut rng);
    let mut u = random_unitary(DIM, &mut rng);

    println!("Fitting a {DIM}x{DIM} unitary, learning rate {LEARNING_RATE}");
    println!("{:>6} {:>14} {:>14}", "step", "loss", "defect");

    for step in 0..=STEPS {
        let residual = &u - &target;
        if step % 20 == 0 {
            println!(
                "{step:>6} {:>14.6e} {:>14.3e}",
                residual.norm_squared(),
                unitary_defect::<_, f64>(&u)
            );
        }
        let grad = residual * Complex64::new(2.0, 0.0);
        update_unitary(&mut [(&grad, &mut u)], LEARNING_RATE)?;
    }

    println!(
        "\nFinal loss {:.3e}, unitarity defect {:.3e}",
        (&u - &target).norm_squared(),
        unitary_defect::<_, f64>(&u)
    );
    Ok(())
}
