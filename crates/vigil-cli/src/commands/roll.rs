use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use vigil_dice::{DicePool, Verdict};

pub fn run(
    spec: &str,
    threshold: u32,
    highest: bool,
    reroll_ones: bool,
    seed: u64,
) -> Result<(), String> {
    let pool = DicePool::parse(spec).map_err(|e| e.to_string())?;
    let mut rng = StdRng::seed_from_u64(seed);

    let outcome = if highest {
        pool.roll_highest(&mut rng)
    } else {
        pool.roll_threshold(threshold, &mut rng)
    }
    .map_err(|e| e.to_string())?;

    let outcome = if reroll_ones {
        outcome.reroll_first_minimum(outcome.mode(), &mut rng)
    } else {
        outcome
    };

    let values: Vec<String> = outcome.dice().iter().map(|d| d.value.to_string()).collect();
    let verdict = outcome.verdict();
    let painted = match verdict {
        Verdict::Success(_) => verdict.to_string().green(),
        Verdict::Botch => verdict.to_string().red(),
        Verdict::Tie(_) => verdict.to_string().yellow(),
        Verdict::Failure => verdict.to_string().normal(),
        Verdict::Highest { botch: true, .. } => verdict.to_string().red(),
        Verdict::Highest { botch: false, .. } => verdict.to_string().cyan(),
    };

    if highest {
        println!("{pool}: [{}]", values.join(", "));
    } else {
        println!("{pool} vs {threshold}: [{}]", values.join(", "));
    }
    println!("{painted}");
    Ok(())
}
