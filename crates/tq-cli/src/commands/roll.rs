use rand::SeedableRng;
use rand::rngs::StdRng;
use tq_engine::{Advantage, Roll};

pub fn run(
    dice: &str,
    advantage: bool,
    disadvantage: bool,
    min: i64,
    seed: Option<u64>,
    times: u32,
) -> Result<(), String> {
    let mut roll = dice.parse::<Roll>().map_err(|e| e.to_string())?;
    roll.set_minimum(min);
    if advantage {
        roll.set_advantage(Advantage::Advantage);
    } else if disadvantage {
        roll.set_advantage(Advantage::Disadvantage);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("  Rolling {roll}");
    for _ in 0..times.max(1) {
        println!("  {}", roll.roll(&mut rng));
    }

    Ok(())
}
